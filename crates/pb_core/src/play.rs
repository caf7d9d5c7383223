//! Plays and the playbook
//!
//! A play is a frozen copy of a roster plus the metadata of the side that
//! produced it. Once a play is in the playbook it is never edited in place;
//! the playbook only grows by appending and shrinks by index.

use crate::catalog::{formation_label, Side};
use crate::roster::{Player, Roster};
use crate::routes::coverage_label;
use log::debug;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which roster the editor is working on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    Offense,
    Defense,
}

/// Offensive game format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OffenseFormat {
    /// 11 vs 11 tackle
    Tackle,
    /// 5 vs 5 flag
    Flag5,
}

impl OffenseFormat {
    /// Five-player formations are flag; everything else defaults to tackle
    pub fn for_team_size(team_size: usize) -> Self {
        if team_size == 5 {
            OffenseFormat::Flag5
        } else {
            OffenseFormat::Tackle
        }
    }

    /// Tackle cannot be picked for a five-player formation
    pub fn is_available_for(&self, team_size: usize) -> bool {
        !(matches!(self, OffenseFormat::Tackle) && team_size == 5)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OffenseFormat::Tackle => "Tackle 11 vs 11",
            OffenseFormat::Flag5 => "Flag 5 vs 5",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OffenseFormat::Tackle => "tackle",
            OffenseFormat::Flag5 => "flag5",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OffensivePlay {
    pub name: String,
    pub format: OffenseFormat,
    pub formation_id: String,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DefensivePlay {
    pub name: String,
    pub formation_id: String,
    pub coverage_id: String,
    pub players: Vec<Player>,
}

/// Tagged playbook entry, serialized as `{"type": "offense", "play": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "play", rename_all = "lowercase")]
pub enum PlaybookItem {
    Offense(OffensivePlay),
    Defense(DefensivePlay),
}

/// `requested` when it has visible text, otherwise `"<prefix> <existing + 1>"`
pub fn resolve_play_name(requested: &str, prefix: &str, existing: usize) -> String {
    let trimmed = requested.trim();
    if trimmed.is_empty() {
        format!("{} {}", prefix, existing + 1)
    } else {
        requested.to_string()
    }
}

impl OffensivePlay {
    /// Deep copy of the roster under the given metadata
    pub fn snapshot(
        name: String,
        format: OffenseFormat,
        formation_id: &str,
        roster: &Roster,
    ) -> Self {
        Self { name, format, formation_id: formation_id.to_string(), players: roster.snapshot() }
    }
}

impl DefensivePlay {
    pub fn snapshot(name: String, formation_id: &str, coverage_id: &str, roster: &Roster) -> Self {
        Self {
            name,
            formation_id: formation_id.to_string(),
            coverage_id: coverage_id.to_string(),
            players: roster.snapshot(),
        }
    }
}

impl PlaybookItem {
    pub fn mode(&self) -> PlayMode {
        match self {
            PlaybookItem::Offense(_) => PlayMode::Offense,
            PlaybookItem::Defense(_) => PlayMode::Defense,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PlaybookItem::Offense(play) => &play.name,
            PlaybookItem::Defense(play) => &play.name,
        }
    }

    pub fn players(&self) -> &[Player] {
        match self {
            PlaybookItem::Offense(play) => &play.players,
            PlaybookItem::Defense(play) => &play.players,
        }
    }

    /// One-line description, e.g. `Spread · Tackle 11 vs 11 · 11 players`
    pub fn summary(&self) -> String {
        match self {
            PlaybookItem::Offense(play) => format!(
                "{} · {} · {} players",
                formation_label(Side::Offense, &play.formation_id),
                play.format.display_name(),
                play.players.len()
            ),
            PlaybookItem::Defense(play) => format!(
                "{} · {} · {} players",
                formation_label(Side::Defense, &play.formation_id),
                coverage_label(&play.coverage_id),
                play.players.len()
            ),
        }
    }
}

/// Ordered plays assembled during a session
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Playbook {
    pub title: String,
    items: Vec<PlaybookItem>,
}

impl Playbook {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), items: Vec::new() }
    }

    pub fn items(&self) -> &[PlaybookItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Exporting is only offered when this is `false`
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: PlaybookItem) {
        debug!("playbook: appending {:?} play '{}'", item.mode(), item.name());
        self.items.push(item);
    }

    /// Remove exactly one play. Out-of-range indices leave the playbook unchanged.
    pub fn remove_at(&mut self, index: usize) -> Option<PlaybookItem> {
        if index >= self.items.len() {
            debug!("playbook: remove index {} out of range ({} plays)", index, self.items.len());
            return None;
        }
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RosterTemplate;
    use crate::config::TemplateLayout;
    use crate::geometry::{FieldDimensions, Point};

    fn roster() -> Roster {
        Roster::from_template(
            RosterTemplate::Line(5),
            FieldDimensions::default(),
            TemplateLayout::default(),
        )
    }

    fn offense_item(name: &str) -> PlaybookItem {
        PlaybookItem::Offense(OffensivePlay::snapshot(
            name.to_string(),
            OffenseFormat::Flag5,
            "flag-spread",
            &roster(),
        ))
    }

    #[test]
    fn test_append_then_remove_returns_to_empty() {
        let mut playbook = Playbook::new("Test");
        playbook.push(offense_item("Mesh"));
        assert!(!playbook.is_empty());

        let removed = playbook.remove_at(0);
        assert_eq!(removed.map(|i| i.name().to_string()), Some("Mesh".to_string()));
        assert!(playbook.is_empty());
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut playbook = Playbook::new("Test");
        playbook.push(offense_item("A"));
        playbook.push(offense_item("B"));
        let before = playbook.clone();

        assert!(playbook.remove_at(2).is_none());
        assert!(playbook.remove_at(usize::MAX).is_none());
        assert_eq!(playbook, before);
    }

    #[test]
    fn test_remove_middle_keeps_order() {
        let mut playbook = Playbook::new("Test");
        for name in ["A", "B", "C"] {
            playbook.push(offense_item(name));
        }
        playbook.remove_at(1);
        let names: Vec<_> = playbook.items().iter().map(|i| i.name()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_clear() {
        let mut playbook = Playbook::new("Test");
        playbook.push(offense_item("A"));
        playbook.clear();
        assert!(playbook.is_empty());
        assert_eq!(playbook.title, "Test");
    }

    #[test]
    fn test_resolve_play_name() {
        assert_eq!(resolve_play_name("Mesh", "Offense Play", 3), "Mesh");
        assert_eq!(resolve_play_name("", "Offense Play", 0), "Offense Play 1");
        assert_eq!(resolve_play_name("   ", "Defense Play", 2), "Defense Play 3");
    }

    #[test]
    fn test_snapshot_not_affected_by_later_edits() {
        let mut live = roster();
        live.assign_route("player-1", "Go");
        let play = OffensivePlay::snapshot("Go".into(), OffenseFormat::Flag5, "x", &live);

        live.move_player("player-1", Point::new(100.0, 100.0));
        live.assign_route("player-1", "Custom");
        live.field_clicked(Point::new(1.0, 1.0));

        assert_eq!(play.players[0].route_name.as_deref(), Some("Go"));
        assert_eq!(play.players[0].position, Point::new(280.0, 330.0));
    }

    #[test]
    fn test_item_json_shape() {
        let item = PlaybookItem::Defense(DefensivePlay {
            name: "Cover 2".into(),
            formation_id: "four-three".into(),
            coverage_id: "cover2".into(),
            players: vec![],
        });
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "defense");
        assert_eq!(json["play"]["formationId"], "four-three");
        assert_eq!(json["play"]["coverageId"], "cover2");

        let offense = serde_json::to_value(offense_item("X")).unwrap();
        assert_eq!(offense["type"], "offense");
        assert_eq!(offense["play"]["format"], "flag5");
    }

    #[test]
    fn test_format_rules() {
        assert_eq!(OffenseFormat::for_team_size(5), OffenseFormat::Flag5);
        assert_eq!(OffenseFormat::for_team_size(11), OffenseFormat::Tackle);
        assert!(!OffenseFormat::Tackle.is_available_for(5));
        assert!(OffenseFormat::Flag5.is_available_for(11));
    }

    #[test]
    fn test_summary() {
        let item = offense_item("A");
        assert_eq!(item.summary(), "Flag Spread · Flag 5 vs 5 · 5 players");
    }
}
