use strategos_types::{
    army::{ArmyComposition, ArmyConfig},
    hero::Hero,
};

#[derive(Default, Clone)]
pub struct HeroFactoryOptions<'a> {
    pub name: Option<&'a str>,
    pub attack_bonus: Option<f64>,
    pub defense_bonus: Option<f64>,
    pub hp_bonus: Option<f64>,
    pub army_attack: Option<f64>,
    pub army_defense: Option<f64>,
    pub army_hp: Option<f64>,
}

#[derive(Default, Clone)]
pub struct ArmyConfigFactoryOptions {
    pub composition: Option<ArmyComposition>,
    pub hero: Option<Hero>,
    pub research_attack: Option<f64>,
    pub research_defense: Option<f64>,
    pub research_hp: Option<f64>,
}

pub fn hero_factory(options: HeroFactoryOptions) -> Hero {
    Hero {
        name: options.name.unwrap_or("Test Hero").to_string(),
        attack_bonus: options.attack_bonus.unwrap_or(0.0),
        defense_bonus: options.defense_bonus.unwrap_or(0.0),
        hp_bonus: options.hp_bonus.unwrap_or(0.0),
        army_attack: options.army_attack.unwrap_or(0.0),
        army_defense: options.army_defense.unwrap_or(0.0),
        army_hp: options.army_hp.unwrap_or(0.0),
    }
}

pub fn army_config_factory(options: ArmyConfigFactoryOptions) -> ArmyConfig {
    ArmyConfig {
        composition: options.composition.unwrap_or_default(),
        hero: options
            .hero
            .unwrap_or_else(|| hero_factory(HeroFactoryOptions::default())),
        research_attack: options.research_attack.unwrap_or(0.0),
        research_defense: options.research_defense.unwrap_or(0.0),
        research_hp: options.research_hp.unwrap_or(0.0),
    }
}

/// The mid-game matchup used across tests: a slightly larger, better
/// researched player army against a similar enemy.
pub fn sample_matchup() -> (ArmyConfig, ArmyConfig) {
    let player = army_config_factory(ArmyConfigFactoryOptions {
        composition: Some(ArmyComposition::new(1000, 800, 600, 200)),
        hero: Some(hero_factory(HeroFactoryOptions {
            name: Some("Player Hero"),
            army_attack: Some(15.0),
            army_defense: Some(10.0),
            army_hp: Some(8.0),
            ..Default::default()
        })),
        research_attack: Some(25.0),
        research_defense: Some(20.0),
        research_hp: Some(15.0),
    });
    let enemy = army_config_factory(ArmyConfigFactoryOptions {
        composition: Some(ArmyComposition::new(900, 700, 500, 100)),
        hero: Some(hero_factory(HeroFactoryOptions {
            name: Some("Enemy Hero"),
            army_attack: Some(12.0),
            army_defense: Some(8.0),
            army_hp: Some(5.0),
            ..Default::default()
        })),
        research_attack: Some(20.0),
        research_defense: Some(15.0),
        research_hp: Some(10.0),
    });
    (player, enemy)
}
