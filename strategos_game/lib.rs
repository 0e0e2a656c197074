pub mod advantage;
pub mod battle;
pub mod constants;
pub mod losses;
pub mod optimizer;
pub mod outcome;
pub mod power;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
