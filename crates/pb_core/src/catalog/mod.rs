// crates/pb_core/src/catalog/mod.rs
// Static formation catalog, team-size templates and coverage seeding

pub mod coverage;
pub mod formations;
pub mod templates;

pub use coverage::{create_defense_players, defense_players_for};
pub use formations::{
    formation_label, FormationTemplate, SeedPlayer, Side, DEFENSIVE_FORMATIONS,
    OFFENSIVE_FORMATIONS,
};
pub use templates::{straight_line_players, RosterTemplate, TeamSizeTemplate, TEAM_SIZE_TEMPLATES};
