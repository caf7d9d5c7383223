//! Team-size templates
//!
//! Straight-line rosters for an arbitrary number of players, used by the
//! formation designer and by "reset to N players".

use super::formations::FormationTemplate;
use crate::config::TemplateLayout;
use crate::geometry::{FieldDimensions, Point};
use crate::roster::Player;

/// Named shortcut to a straight-line roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamSizeTemplate {
    pub id: &'static str,
    pub label: &'static str,
    pub count: usize,
}

pub const TACKLE_TEMPLATE: TeamSizeTemplate =
    TeamSizeTemplate { id: "tackle", label: "11 vs 11 Template", count: 11 };

pub const FLAG_TEMPLATE: TeamSizeTemplate =
    TeamSizeTemplate { id: "flag", label: "Flag 5 vs 5 Template", count: 5 };

pub const TEAM_SIZE_TEMPLATES: &[TeamSizeTemplate] = &[TACKLE_TEMPLATE, FLAG_TEMPLATE];

impl TeamSizeTemplate {
    pub fn find(id: &str) -> Option<&'static TeamSizeTemplate> {
        TEAM_SIZE_TEMPLATES.iter().find(|t| t.id == id)
    }
}

/// Source of a fresh roster
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RosterTemplate {
    Formation(&'static FormationTemplate),
    /// N players on one horizontal line
    Line(usize),
}

impl RosterTemplate {
    pub fn team_size(&self) -> usize {
        match self {
            RosterTemplate::Formation(formation) => formation.players.len(),
            RosterTemplate::Line(count) => *count,
        }
    }

    pub fn instantiate(&self, field: &FieldDimensions, layout: &TemplateLayout) -> Vec<Player> {
        match self {
            RosterTemplate::Formation(formation) => formation.instantiate(),
            RosterTemplate::Line(count) => straight_line_players(*count, field, layout),
        }
    }
}

impl From<&'static TeamSizeTemplate> for RosterTemplate {
    fn from(template: &'static TeamSizeTemplate) -> Self {
        RosterTemplate::Line(template.count)
    }
}

impl From<&'static FormationTemplate> for RosterTemplate {
    fn from(formation: &'static FormationTemplate) -> Self {
        RosterTemplate::Formation(formation)
    }
}

/// `count` players centred on the field's midline, `layout.spacing` apart,
/// `layout.baseline_offset` below the vertical centre.
///
/// Ids are `player-1..player-N`, labels `P1..PN`.
pub fn straight_line_players(
    count: usize,
    field: &FieldDimensions,
    layout: &TemplateLayout,
) -> Vec<Player> {
    let center_x = field.width / 2.0;
    let base_y = field.height / 2.0 + layout.baseline_offset;
    let middle = (count as f32 - 1.0) / 2.0;

    (0..count)
        .map(|index| {
            let number = index + 1;
            let offset = index as f32 - middle;
            Player::new(
                format!("player-{number}"),
                format!("P{number}"),
                layout.default_role.clone(),
                Point::new(center_x + offset * layout.spacing, base_y),
            )
        })
        .collect()
}
