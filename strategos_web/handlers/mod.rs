mod army;
mod battle;
mod errors;
mod health;
mod history;

pub use army::*;
pub use battle::*;
pub use errors::*;
pub use health::*;
pub use history::*;
