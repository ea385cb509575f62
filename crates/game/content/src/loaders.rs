//! Hero catalog loader.
//!
//! Loads hero kits from RON files, reusing the core types' serde support
//! for requirements and actions so data files stay close to the in-memory
//! model.

use std::path::Path;

use dicebound_core::{Ability, ActionKind, Combatant, Die, Face, FaceSet, GameConfig, Requirement};

pub type LoadResult<T> = anyhow::Result<T>;

fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path.display(), e))
}

/// On-disk shape of one hero kit.
///
/// RON format: `Vec<HeroTemplate>`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HeroTemplate {
    pub name: String,
    /// Six face labels, indexed by die value.
    pub faces: [String; 6],
    /// Overrides the configured starting health when set.
    #[serde(default)]
    pub health: Option<i32>,
    #[serde(default)]
    pub combat_points: Option<u32>,
    pub abilities: Vec<AbilityTemplate>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AbilityTemplate {
    pub name: String,
    pub requirement: Requirement,
    pub actions: Vec<ActionKind>,
    #[serde(default)]
    pub defense: bool,
    #[serde(default)]
    pub ultimate: bool,
}

/// Loader for hero catalogs from RON files.
pub struct HeroLoader;

impl HeroLoader {
    /// Load a hero catalog from a RON file.
    ///
    /// Kit validation (dice pool size, exactly one defensive ability) runs
    /// through the core constructor, so a broken catalog fails here at
    /// startup.
    pub fn load(path: &Path, config: &GameConfig) -> LoadResult<Vec<Combatant>> {
        let content = read_file(path)?;
        let templates: Vec<HeroTemplate> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("failed to parse hero catalog RON: {}", e))?;

        templates
            .into_iter()
            .map(|template| Self::build(template, config))
            .collect()
    }

    /// Builds a combatant from a parsed template.
    pub fn build(template: HeroTemplate, config: &GameConfig) -> LoadResult<Combatant> {
        let name = template.name.clone();
        let faces: FaceSet = template.faces.map(Face::new);
        let dice = (0..GameConfig::DICE_POOL)
            .map(|_| Die::new(faces.clone()))
            .collect();
        let abilities = template
            .abilities
            .into_iter()
            .map(|ability| Ability {
                name: ability.name,
                requirement: ability.requirement,
                actions: ability.actions,
                defense: ability.defense,
                ultimate: ability.ultimate,
            })
            .collect();

        let mut combatant = Combatant::new(template.name, dice, abilities, config)
            .map_err(|e| anyhow::anyhow!("invalid hero '{}': {}", name, e))?;
        if let Some(health) = template.health {
            combatant.health = health;
        }
        if let Some(combat_points) = template.combat_points {
            combatant.combat_points = combat_points;
        }
        Ok(combatant)
    }
}
