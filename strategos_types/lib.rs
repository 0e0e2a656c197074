pub mod army;
pub mod battle;
pub mod errors;
pub mod hero;

pub use errors::Result;
