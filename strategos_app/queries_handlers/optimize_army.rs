use std::sync::Arc;

use strategos_game::optimizer::ArmyOptimizer;
use strategos_types::{battle::OptimizationResult, errors::ApplicationError};

use crate::{
    config::Config,
    cqrs::{ComputeHandler, queries::OptimizeArmy},
};

pub struct OptimizeArmyHandler;

impl OptimizeArmyHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ComputeHandler<OptimizeArmy> for OptimizeArmyHandler {
    fn handle(
        &self,
        query: OptimizeArmy,
        config: &Arc<Config>,
    ) -> Result<OptimizationResult, ApplicationError> {
        let result = ArmyOptimizer::new(&config.engine)
            .optimize(query.total_troops, query.enemy_composition.as_ref())?;

        tracing::info!(
            scenario = %query.scenario,
            total_troops = query.total_troops,
            enemy_given = query.enemy_composition.is_some(),
            "Army optimized"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strategos_types::{Result, army::ArmyComposition, errors::GameError};

    fn optimize(total_troops: i64, enemy: Option<ArmyComposition>) -> Result<OptimizationResult> {
        let config = Arc::new(Config::default());
        OptimizeArmyHandler::new().handle(
            OptimizeArmy {
                total_troops,
                enemy_composition: enemy,
                scenario: "field_battle".to_string(),
            },
            &config,
        )
    }

    #[test]
    fn test_optimize_preserves_budget() -> Result<()> {
        let result = optimize(1000, Some(ArmyComposition::new(100, 500, 100, 0)))?;
        assert_eq!(result.optimal_composition.total(), 1000);
        assert!(!result.reasoning.is_empty());
        Ok(())
    }

    #[test]
    fn test_optimize_rejects_negative_budget() {
        let err = optimize(-5, None).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Game(GameError::NegativeTotalTroops(-5))
        ));
    }
}
