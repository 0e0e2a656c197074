use strategos_types::{
    army::{ArmyComposition, ArmyConfig, UnitType},
    battle::OptimizationResult,
    errors::GameError,
};

use crate::{
    advantage::{counters, countered_by, dominant_type, type_advantages},
    constants::EngineConfig,
    power::{StatMultipliers, calculate_power, unit_power},
    validation::troop_count,
};

/// How many of the lowest-scoring types may donate a troop on each step.
const DONOR_CANDIDATES: usize = 2;

/// Searches a troop allocation that performs well against an enemy army.
///
/// The search seeds most of the budget on the type countering the enemy's
/// dominant type, keeps a reserve on the type that dominant type counters,
/// then moves single troops while projected power strictly improves, for at
/// most `search_iterations` moves. The reserve never shrinks below its seed.
pub struct ArmyOptimizer<'a> {
    config: &'a EngineConfig,
}

/// Roles the seed assigns, derived from the enemy's dominant type.
#[derive(Debug, Clone, Copy)]
struct SeedPlan {
    dominant: UnitType,
    core: UnitType,
    reserve: Option<UnitType>,
}

impl<'a> ArmyOptimizer<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    pub fn optimize(
        &self,
        total_troops: i64,
        enemy: Option<&ArmyComposition>,
    ) -> Result<OptimizationResult, GameError> {
        if total_troops < 0 {
            return Err(GameError::NegativeTotalTroops(total_troops));
        }
        let budget = troop_count("total_troops", total_troops)?;

        if budget == 0 {
            return Ok(OptimizationResult {
                optimal_composition: ArmyComposition::default(),
                reasoning: "No troops to allocate: with a budget of 0 the army stays empty."
                    .to_string(),
                type_advantages: type_advantages(),
            });
        }

        let assumed = enemy.is_none_or(|e| e.is_empty());
        let enemy = match enemy {
            Some(composition) if !composition.is_empty() => *composition,
            _ => even_split(budget),
        };

        let plan = self.plan(&enemy);
        let seed = self.seed(budget, &plan);
        let (optimal, moves) = self.refine(seed, &enemy, &plan);

        debug_assert_eq!(optimal.total(), budget as u64);
        tracing::debug!(
            budget,
            dominant = %plan.dominant,
            core = %plan.core,
            moves,
            "Army composition optimized"
        );

        Ok(OptimizationResult {
            optimal_composition: optimal,
            reasoning: reasoning(&optimal, &enemy, &plan, moves, assumed),
            type_advantages: type_advantages(),
        })
    }

    fn plan(&self, enemy: &ArmyComposition) -> SeedPlan {
        let dominant = dominant_type(enemy).unwrap_or(UnitType::Infantry);

        match countered_by(dominant) {
            Some(core) => SeedPlan {
                dominant,
                core,
                reserve: counters(dominant),
            },
            // Siege has no counter: build around whatever hits this enemy hardest.
            None => SeedPlan {
                dominant,
                core: self.ranked_by_power(enemy)[0],
                reserve: None,
            },
        }
    }

    fn seed(&self, budget: u32, plan: &SeedPlan) -> ArmyComposition {
        let share = |fraction: f64| (budget as f64 * fraction.clamp(0.0, 1.0)).floor() as u32;
        let core = share(self.config.counter_share);
        let reserve = match plan.reserve {
            Some(_) => share(self.config.reserve_share).min(budget - core),
            None => 0,
        };

        let others: Vec<UnitType> = UnitType::ALL
            .into_iter()
            .filter(|u| *u != plan.core && Some(*u) != plan.reserve)
            .collect();
        let remainder = budget - core - reserve;
        let each = remainder / others.len() as u32;

        let mut seed = ArmyComposition::default();
        for unit in others.iter() {
            seed.set(*unit, each);
        }
        if let Some(reserve_type) = plan.reserve {
            seed.set(reserve_type, reserve);
        }
        // rounding leftovers go to the core type
        seed.set(plan.core, core + remainder - each * others.len() as u32);
        seed
    }

    /// Moves one troop at a time from one of the lowest-scoring types to any
    /// other type, keeping only strict power gains.
    fn refine(
        &self,
        mut allocation: ArmyComposition,
        enemy: &ArmyComposition,
        plan: &SeedPlan,
    ) -> (ArmyComposition, u32) {
        let reserve_floor = plan.reserve.map(|r| (r, allocation.get(r)));
        let ranking = self.ranked_by_power(enemy);
        let mut best_power = self.power_of(&allocation, enemy);
        let mut moves = 0;

        while moves < self.config.search_iterations {
            let donors: Vec<UnitType> = ranking
                .iter()
                .rev()
                .copied()
                .filter(|u| match reserve_floor {
                    Some((reserve, floor)) if reserve == *u => allocation.get(*u) > floor,
                    _ => allocation.get(*u) > 0,
                })
                .take(DONOR_CANDIDATES)
                .collect();

            let mut best_move: Option<(ArmyComposition, f64)> = None;
            for from in donors.iter() {
                for to in UnitType::ALL.into_iter().filter(|u| u != from) {
                    let mut candidate = allocation;
                    candidate.set(*from, candidate.get(*from) - 1);
                    candidate.set(to, candidate.get(to) + 1);

                    let power = self.power_of(&candidate, enemy);
                    let current_best = best_move.map_or(best_power, |(_, p)| p);
                    if power > current_best {
                        best_move = Some((candidate, power));
                    }
                }
            }

            match best_move {
                Some((candidate, power)) => {
                    allocation = candidate;
                    best_power = power;
                    moves += 1;
                }
                None => break,
            }
        }

        (allocation, moves)
    }

    fn power_of(&self, allocation: &ArmyComposition, enemy: &ArmyComposition) -> f64 {
        calculate_power(&ArmyConfig::from_composition(*allocation), enemy, self.config)
    }

    /// Unit types from best to worst per-unit power against `enemy`.
    /// Ties keep the fixed type order.
    fn ranked_by_power(&self, enemy: &ArmyComposition) -> [UnitType; 4] {
        let plain = StatMultipliers::from_army(&ArmyConfig::default(), self.config);
        let dominant = dominant_type(enemy);
        let mut ranking = UnitType::ALL;
        ranking.sort_by(|a, b| {
            let score = |u: &UnitType| unit_power(*u, &plain, dominant, self.config);
            score(b).total_cmp(&score(a))
        });
        ranking
    }
}

/// An even four-way split, remainder handed out in type order.
fn even_split(total: u32) -> ArmyComposition {
    let mut composition = ArmyComposition::default();
    let each = total / 4;
    let remainder = (total % 4) as usize;
    for (idx, unit) in UnitType::ALL.into_iter().enumerate() {
        composition.set(unit, each + u32::from(idx < remainder));
    }
    composition
}

fn percent(part: u32, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 * 100.0 / total as f64).round()
    }
}

fn reasoning(
    optimal: &ArmyComposition,
    enemy: &ArmyComposition,
    plan: &SeedPlan,
    moves: u32,
    assumed: bool,
) -> String {
    let total = optimal.total();
    let dominant = plan.dominant;
    let core = plan.core;
    let mut parts = Vec::new();

    if assumed {
        parts.push(
            "No enemy composition was given, so an even four-way split was assumed.".to_string(),
        );
    }

    parts.push(format!(
        "The enemy is led by {dominant} ({}% of their troops).",
        percent(enemy.get(dominant), enemy.total())
    ));

    if countered_by(dominant) == Some(core) {
        parts.push(format!(
            "{core} counters {dominant}, so it forms the core of the army with {} troops ({}%).",
            optimal.get(core),
            percent(optimal.get(core), total)
        ));
    } else {
        parts.push(format!(
            "Nothing counters {dominant}, so {core} forms the core of the army with {} troops ({}%) as it hits this enemy hardest.",
            optimal.get(core),
            percent(optimal.get(core), total)
        ));
    }

    if let Some(reserve) = plan.reserve {
        parts.push(format!(
            "{} {reserve} are kept in reserve: {dominant} counters them, but they hedge against the rest of the enemy army and cover the core's weakness.",
            optimal.get(reserve)
        ));
    }

    if moves > 0 {
        parts.push(format!(
            "Local search moved {moves} troops to raise projected power."
        ));
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optimize(total: i64, enemy: Option<ArmyComposition>) -> OptimizationResult {
        let config = EngineConfig::default();
        ArmyOptimizer::new(&config)
            .optimize(total, enemy.as_ref())
            .unwrap()
    }

    #[test]
    fn test_negative_budget_is_rejected() {
        let config = EngineConfig::default();
        let result = ArmyOptimizer::new(&config).optimize(-1, None);
        assert_eq!(result, Err(GameError::NegativeTotalTroops(-1)));
    }

    #[test]
    fn test_zero_budget_returns_empty_army() {
        let result = optimize(0, Some(ArmyComposition::new(10, 0, 0, 0)));
        assert_eq!(result.optimal_composition, ArmyComposition::default());
        assert!(!result.reasoning.is_empty());
        assert_eq!(result.type_advantages.infantry_counters, "ranged");
    }

    #[test]
    fn test_infantry_majority_against_ranged() {
        let result = optimize(1000, Some(ArmyComposition::new(0, 1000, 0, 0)));
        let composition = result.optimal_composition;

        assert_eq!(composition.total(), 1000);
        assert!(composition.infantry > 500, "got {composition:?}");
        // reserve cavalry never drops below its 20% seed
        assert!(composition.cavalry >= 200);
        assert!(result.reasoning.contains("infantry counters ranged"));
    }

    #[test]
    fn test_counter_type_depends_on_enemy_dominant() {
        let vs_infantry = optimize(500, Some(ArmyComposition::new(300, 100, 100, 0)));
        assert_eq!(
            dominant_type(&vs_infantry.optimal_composition),
            Some(UnitType::Cavalry)
        );

        let vs_cavalry = optimize(500, Some(ArmyComposition::new(0, 100, 300, 100)));
        assert_eq!(
            dominant_type(&vs_cavalry.optimal_composition),
            Some(UnitType::Ranged)
        );
    }

    #[test]
    fn test_sum_matches_budget() {
        let enemies = [
            None,
            Some(ArmyComposition::default()),
            Some(ArmyComposition::new(900, 700, 500, 100)),
            Some(ArmyComposition::new(0, 0, 0, 50)),
            Some(ArmyComposition::new(3, 3, 3, 3)),
        ];
        for total in [1, 2, 3, 7, 10, 99, 1000, 12_345, 1_000_000] {
            for enemy in enemies.iter() {
                let result = optimize(total, *enemy);
                assert_eq!(
                    result.optimal_composition.total(),
                    total as u64,
                    "total {total} against {enemy:?}"
                );
            }
        }
    }

    #[test]
    fn test_missing_enemy_assumes_even_split() {
        let result = optimize(1000, None);
        // even split ties resolve to infantry, countered by cavalry
        assert!(result.optimal_composition.cavalry > 500);
        assert!(result.reasoning.contains("even four-way split"));

        let all_zero = optimize(1000, Some(ArmyComposition::default()));
        assert_eq!(all_zero, result);
    }

    #[test]
    fn test_siege_dominant_enemy() {
        let result = optimize(1000, Some(ArmyComposition::new(0, 0, 0, 800)));
        assert_eq!(result.optimal_composition.total(), 1000);
        assert!(result.reasoning.contains("Nothing counters siege"));
    }

    #[test]
    fn test_search_is_bounded() {
        let config = EngineConfig {
            search_iterations: 3,
            ..Default::default()
        };
        let optimizer = ArmyOptimizer::new(&config);
        let enemy = ArmyComposition::new(0, 1000, 0, 0);
        let plan = optimizer.plan(&enemy);
        let seed = optimizer.seed(1000, &plan);

        let (refined, moves) = optimizer.refine(seed, &enemy, &plan);
        assert_eq!(moves, 3);
        assert_eq!(refined.infantry, seed.infantry + 3);
    }

    #[test]
    fn test_seed_shares() {
        let config = EngineConfig::default();
        let optimizer = ArmyOptimizer::new(&config);
        let enemy = ArmyComposition::new(0, 1000, 0, 0);
        let plan = optimizer.plan(&enemy);

        let seed = optimizer.seed(1000, &plan);
        assert_eq!(seed, ArmyComposition::new(500, 150, 200, 150));

        // 7 troops: 3 core, 1 reserve, 1 + 1 others, leftover 1 to core
        let seed = optimizer.seed(7, &plan);
        assert_eq!(seed, ArmyComposition::new(4, 1, 1, 1));
    }

    #[test]
    fn test_optimize_is_deterministic() {
        let enemy = Some(ArmyComposition::new(120, 340, 560, 78));
        assert_eq!(optimize(4321, enemy), optimize(4321, enemy));
    }

    #[test]
    fn test_even_split() {
        assert_eq!(even_split(10), ArmyComposition::new(3, 3, 2, 2));
        assert_eq!(even_split(0), ArmyComposition::default());
    }
}
