mod battle_service;

pub use battle_service::simulate_and_record;
