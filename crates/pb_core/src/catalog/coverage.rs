//! Formation + coverage → defensive roster

use super::formations::FormationTemplate;
use crate::error::{PlaybookError, Result};
use crate::geometry::FieldDimensions;
use crate::roster::Player;
use crate::routes::CoveragePreset;

/// Seed a defensive roster and give every defender its coverage responsibility.
///
/// Seeds are clamped into `field` first and paths are resolved from there.
/// Defenders without a blueprint entry keep the coverage label and no path.
pub fn create_defense_players(
    formation: &FormationTemplate,
    coverage: &CoveragePreset,
    field: &FieldDimensions,
) -> Vec<Player> {
    formation
        .players
        .iter()
        .map(|seed| {
            let mut player = seed.to_player();
            player.position = field.clamp(player.position);
            player.apply_coverage(coverage);
            player
        })
        .collect()
}

/// Id-based variant for callers holding catalog keys
pub fn defense_players_for(
    formation_id: &str,
    coverage_id: &str,
    field: &FieldDimensions,
) -> Result<Vec<Player>> {
    let formation = FormationTemplate::find_defense(formation_id)
        .ok_or_else(|| PlaybookError::UnknownFormation(formation_id.to_string()))?;
    let coverage = CoveragePreset::find(coverage_id)
        .ok_or_else(|| PlaybookError::UnknownCoverage(coverage_id.to_string()))?;
    Ok(create_defense_players(formation, coverage, field))
}
