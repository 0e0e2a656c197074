use strategos_types::{army::UnitType, battle::ConfidenceLevel};

use crate::{
    advantage::countered_by,
    constants::{HIGH_CONFIDENCE_MARGIN, MEDIUM_CONFIDENCE_MARGIN},
};

/// Net type advantage below which the composition itself is blamed.
const POOR_MATCHUP_THRESHOLD: f64 = -0.1;
/// Net type advantage above which a favorable matchup is mentioned.
const GOOD_MATCHUP_THRESHOLD: f64 = 0.1;

/// Probability for the player side, from two finite powers. Zero-power
/// armies never divide: two empty sides give 0.5, an empty side loses outright.
pub fn win_probability(player_power: f64, enemy_power: f64) -> f64 {
    match (player_power > 0.0, enemy_power > 0.0) {
        (false, false) => 0.5,
        (true, false) => 1.0,
        (false, true) => 0.0,
        (true, true) => {
            let total = player_power + enemy_power;
            if total.is_finite() {
                player_power / total
            } else {
                1.0 / (1.0 + enemy_power / player_power)
            }
        }
    }
}

/// Buckets by distance from 0.5. Each bracket edge is a probability
/// (`0.5 ± margin`) compared without tolerance, so 0.7 is High and
/// anything below it is not.
pub fn confidence_level(probability: f64) -> ConfidenceLevel {
    let beyond = |margin: f64| probability >= 0.5 + margin || probability <= 0.5 - margin;

    if beyond(HIGH_CONFIDENCE_MARGIN) {
        ConfidenceLevel::High
    } else if beyond(MEDIUM_CONFIDENCE_MARGIN) {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// One-sentence advice for the player, from the probability bracket and the
/// type matchup between the two armies.
pub fn recommendation(
    probability: f64,
    type_advantage: f64,
    enemy_dominant: Option<UnitType>,
) -> String {
    // (enemy dominant type, the type that counters it)
    let counter_pair = enemy_dominant.and_then(|d| countered_by(d).map(|c| (d, c)));

    let counter_hint = || match counter_pair {
        Some((dominant, counter)) if type_advantage < POOR_MATCHUP_THRESHOLD => {
            format!("add more {counter} to counter their {dominant}")
        }
        _ => "add more troops or improve hero and research bonuses".to_string(),
    };
    let edge_hint = || match counter_pair {
        Some((dominant, counter)) if type_advantage > GOOD_MATCHUP_THRESHOLD => {
            format!(", your {counter} hold the edge over their {dominant}")
        }
        _ => String::new(),
    };

    if probability >= 0.7 {
        format!("Strong victory expected: attack{}.", edge_hint())
    } else if probability >= 0.5 {
        format!(
            "Favorable battle, but proceed with caution{} and expect significant losses.",
            edge_hint()
        )
    } else if probability >= 0.3 {
        format!("Unfavorable battle: reinforce first and {}.", counter_hint())
    } else {
        format!(
            "High risk of defeat: avoid this engagement, {} before trying again.",
            counter_hint()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_power_fallbacks() {
        assert_eq!(win_probability(0.0, 0.0), 0.5);
        assert_eq!(win_probability(10.0, 0.0), 1.0);
        assert_eq!(win_probability(0.0, 10.0), 0.0);
    }

    #[test]
    fn test_equal_power_is_a_coin_flip() {
        for power in [1.0, 3.3, 1e6, f64::MAX] {
            assert_eq!(win_probability(power, power), 0.5);
        }
        assert_eq!(confidence_level(0.5), ConfidenceLevel::Low);
    }

    #[test]
    fn test_ratio_model_and_symmetry() {
        assert_eq!(win_probability(300.0, 100.0), 0.75);
        for (a, b) in [(1.0, 2.0), (123.4, 0.5), (7e5, 9e5)] {
            let forward = win_probability(a, b);
            let swapped = win_probability(b, a);
            assert!((forward + swapped - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_huge_powers_stay_in_range() {
        let p = win_probability(f64::MAX, f64::MAX / 2.0);
        assert!((0.0..=1.0).contains(&p));
        assert!(p > 0.5);
        assert_eq!(win_probability(f64::MAX, f64::MAX), 0.5);
    }

    #[test]
    fn test_confidence_buckets() {
        assert_eq!(confidence_level(0.71), ConfidenceLevel::High);
        assert_eq!(confidence_level(0.25), ConfidenceLevel::High);
        assert_eq!(confidence_level(0.65), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(0.35), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(0.55), ConfidenceLevel::Low);
        assert_eq!(confidence_level(0.0), ConfidenceLevel::High);

        // bracket edges
        assert_eq!(confidence_level(0.7), ConfidenceLevel::High);
        assert_eq!(confidence_level(0.3), ConfidenceLevel::High);
        assert_eq!(confidence_level(0.6), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(0.4), ConfidenceLevel::Medium);

        // just inside an edge stays in the lower bucket
        assert_eq!(confidence_level(0.6999999995), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(0.3000000005), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(0.5999999995), ConfidenceLevel::Low);
        assert_eq!(confidence_level(0.4000000005), ConfidenceLevel::Low);
    }

    #[test]
    fn test_recommendation_brackets() {
        assert!(recommendation(0.8, 0.0, None).starts_with("Strong victory"));
        assert!(recommendation(0.6, 0.0, None).starts_with("Favorable battle"));
        assert!(recommendation(0.4, 0.0, None).starts_with("Unfavorable battle"));
        assert!(recommendation(0.1, 0.0, None).starts_with("High risk of defeat"));
    }

    #[test]
    fn test_recommendation_names_counter_on_bad_matchup() {
        let advice = recommendation(0.2, -0.5, Some(UnitType::Ranged));
        assert!(advice.contains("add more infantry to counter their ranged"));

        let advice = recommendation(0.4, 0.0, Some(UnitType::Ranged));
        assert!(advice.contains("improve hero and research bonuses"));

        let advice = recommendation(0.9, 0.6, Some(UnitType::Infantry));
        assert!(advice.contains("your cavalry hold the edge over their infantry"));

        // siege has no counter to suggest
        let advice = recommendation(0.2, -0.5, Some(UnitType::Siege));
        assert!(advice.contains("add more troops"));
    }
}
