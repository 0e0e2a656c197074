mod record_battle;

pub use record_battle::RecordBattleCommandHandler;
