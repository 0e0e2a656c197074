use strategos_types::battle::BattleRecord;

use crate::cqrs::Command;

/// Appends a finished simulation to the battle history.
#[derive(Debug, Clone)]
pub struct RecordBattle {
    pub record: BattleRecord,
}

impl Command for RecordBattle {}
