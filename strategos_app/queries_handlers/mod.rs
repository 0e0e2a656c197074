mod get_battle_history;
mod optimize_army;
mod simulate_battle;

pub use get_battle_history::GetBattleHistoryHandler;
pub use optimize_army::OptimizeArmyHandler;
pub use simulate_battle::SimulateBattleHandler;
