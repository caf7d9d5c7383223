//! Roster model
//!
//! The ordered set of players being edited for one side of the ball, plus the
//! editor's "selected" and "drawing" markers. A `Roster` is the single mutable
//! source of truth for the play in progress; saved plays take an owned copy.
//!
//! Operations that reference an id which is not on the roster are no-ops and
//! return `false`.

use crate::catalog::RosterTemplate;
use crate::config::TemplateLayout;
use crate::geometry::{FieldDimensions, Point};
use crate::routes::{resolve_absolute_path, CoveragePreset, RoutePreset, CUSTOM_ROUTE};
use log::{debug, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One on-field player
///
/// `route_name == None` always implies `path == None`. A path that is
/// `Some(vec![])` means a route is assigned but has no movement (e.g. "Block",
/// or a custom route whose first point has not been drawn yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub label: String,
    pub role: String,
    pub position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Point>>,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        role: impl Into<String>,
        position: Point,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            role: role.into(),
            position,
            route_name: None,
            path: None,
        }
    }

    pub fn set_route(&mut self, name: impl Into<String>, path: Option<Vec<Point>>) {
        self.route_name = Some(name.into());
        self.path = path;
    }

    pub fn clear_route(&mut self) {
        self.route_name = None;
        self.path = None;
    }

    /// Preset route from the current position; unknown names keep the label without a path
    pub fn apply_route(&mut self, name: &str) {
        match RoutePreset::find(name) {
            Some(preset) => {
                let path = resolve_absolute_path(self.position, preset.segments);
                self.set_route(preset.name, Some(path));
            }
            None => {
                debug!("route '{}' has no canned trajectory, keeping label only", name);
                self.set_route(name, None);
            }
        }
    }

    /// Coverage responsibility from the current position.
    ///
    /// Players whose id has no blueprint entry are still "in" the coverage:
    /// they carry its label but no path.
    pub fn apply_coverage(&mut self, coverage: &CoveragePreset) {
        let path = coverage
            .segments_for(&self.id)
            .map(|segments| resolve_absolute_path(self.position, segments));
        self.set_route(coverage.label, path);
    }

    /// Empty custom route, ready for hand-drawn points
    pub fn begin_custom_route(&mut self) {
        self.set_route(CUSTOM_ROUTE, Some(Vec::new()));
    }

    fn push_path_point(&mut self, point: Point) {
        self.path.get_or_insert_with(Vec::new).push(point);
        if self.route_name.is_none() {
            self.route_name = Some(CUSTOM_ROUTE.to_string());
        }
    }
}

/// How a defender picks up the active coverage
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoverageAssignment<'a> {
    /// Use the coverage blueprint for this player's slot
    Preset(&'a CoveragePreset),
    /// Start an empty hand-drawn responsibility
    Custom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
    field: FieldDimensions,
    layout: TemplateLayout,
    next_player_number: usize,
    selected: Option<String>,
    drawing: Option<String>,
}

impl Roster {
    /// Positions are clamped into `field`; paths are kept as given.
    pub fn new(mut players: Vec<Player>, field: FieldDimensions, layout: TemplateLayout) -> Self {
        clamp_positions(&field, &mut players);
        let next_player_number = players.len() + 1;
        Self { players, field, layout, next_player_number, selected: None, drawing: None }
    }

    /// Fresh roster seeded from a catalog formation or a straight-line template
    pub fn from_template(
        template: RosterTemplate,
        field: FieldDimensions,
        layout: TemplateLayout,
    ) -> Self {
        let players = template.instantiate(&field, &layout);
        Self::new(players, field, layout)
    }

    // ========== Accessors ==========

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
        let found = self.players.iter_mut().find(|p| p.id == id);
        if found.is_none() {
            debug!("player '{}' is not on the roster, ignoring", id);
        }
        found
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn field(&self) -> &FieldDimensions {
        &self.field
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn drawing(&self) -> Option<&str> {
        self.drawing.as_deref()
    }

    pub fn next_player_number(&self) -> usize {
        self.next_player_number
    }

    /// Owned copy of every player, paths included
    pub fn snapshot(&self) -> Vec<Player> {
        self.players.clone()
    }

    // ========== Structural edits ==========

    /// Clamp into the playable area and move. Paths are left as they were.
    pub fn move_player(&mut self, id: &str, raw: Point) -> bool {
        let clamped = self.field.clamp(raw);
        match self.player_mut(id) {
            Some(player) => {
                player.position = clamped;
                true
            }
            None => false,
        }
    }

    pub fn set_label(&mut self, id: &str, label: &str) -> bool {
        match self.player_mut(id) {
            Some(player) => {
                player.label = label.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_role(&mut self, id: &str, role: &str) -> bool {
        match self.player_mut(id) {
            Some(player) => {
                player.role = role.to_string();
                true
            }
            None => false,
        }
    }

    /// Append a caller-built player, clamped into the field. Duplicate ids are refused.
    pub fn add(&mut self, mut player: Player) -> bool {
        if self.player(&player.id).is_some() {
            warn!("refusing to add duplicate player id '{}'", player.id);
            return false;
        }
        player.position = self.field.clamp(player.position);
        self.players.push(player);
        true
    }

    /// Add `player-<n>` / `P<n>` at midfield, select it and return its id.
    ///
    /// Skips numbers already taken by hand-added players so generated ids
    /// never collide.
    pub fn add_generated(&mut self) -> String {
        while self.player(&format!("player-{}", self.next_player_number)).is_some() {
            self.next_player_number += 1;
        }

        let number = self.next_player_number;
        let id = format!("player-{number}");
        let player = Player::new(
            id.clone(),
            format!("P{number}"),
            self.layout.default_role.clone(),
            self.field.center(),
        );
        self.players.push(player);
        self.next_player_number += 1;
        self.selected = Some(id.clone());
        id
    }

    /// Delete a player; selection and drawing markers pointing at it go too
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        self.release_markers(id);
        before != self.players.len()
    }

    /// Replace the whole roster with a fresh copy of `template`
    pub fn reset_to_template(&mut self, template: RosterTemplate) {
        self.players = template.instantiate(&self.field, &self.layout);
        clamp_positions(&self.field, &mut self.players);
        self.next_player_number = self.players.len() + 1;
        self.selected = None;
        self.drawing = None;
        debug!("roster reset to {} players", self.players.len());
    }

    /// Re-line the current number of players (at least one) on the baseline
    pub fn reset_positions(&mut self) {
        let count = self.players.len().max(1);
        self.reset_to_template(RosterTemplate::Line(count));
        self.selected = self.players.first().map(|p| p.id.clone());
    }

    // ========== Routes ==========

    /// `""` clears, `"Custom"` starts an empty path, anything else resolves a preset
    pub fn assign_route(&mut self, id: &str, route_name: &str) -> bool {
        let Some(player) = self.player_mut(id) else {
            return false;
        };

        if route_name.is_empty() {
            player.clear_route();
        } else if route_name == CUSTOM_ROUTE {
            player.begin_custom_route();
        } else {
            player.apply_route(route_name);
        }
        true
    }

    pub fn assign_coverage(&mut self, id: &str, assignment: CoverageAssignment<'_>) -> bool {
        let Some(player) = self.player_mut(id) else {
            return false;
        };

        match assignment {
            CoverageAssignment::Preset(coverage) => player.apply_coverage(coverage),
            CoverageAssignment::Custom => player.begin_custom_route(),
        }
        true
    }

    /// Clear route and path; also releases selection and drawing for this player
    pub fn clear_path(&mut self, id: &str) -> bool {
        let found = match self.player_mut(id) {
            Some(player) => {
                player.clear_route();
                true
            }
            None => false,
        };
        self.release_markers(id);
        found
    }

    // ========== Selection & drawing ==========

    pub fn select(&mut self, id: &str) -> bool {
        if self.player(id).is_none() {
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    /// Select `id`, enter drawing mode for it and reset its path to an empty custom route
    pub fn start_drawing(&mut self, id: &str) -> bool {
        let Some(player) = self.player_mut(id) else {
            return false;
        };
        player.begin_custom_route();
        self.selected = Some(id.to_string());
        self.drawing = Some(id.to_string());
        true
    }

    pub fn finish_drawing(&mut self) {
        self.drawing = None;
    }

    /// Append a hand-drawn waypoint. Only the player currently drawing accepts
    /// points, and non-finite points are dropped.
    pub fn append_drawn_point(&mut self, id: &str, point: Point) -> bool {
        if self.drawing.as_deref() != Some(id) {
            debug!("player '{}' is not drawing, point dropped", id);
            return false;
        }
        if !point.is_finite() {
            warn!("non-finite point {:?} for player '{}' dropped", point, id);
            return false;
        }
        match self.player_mut(id) {
            Some(player) => {
                player.push_path_point(point);
                true
            }
            None => false,
        }
    }

    /// Field click while drawing: the point goes to whoever is drawing
    pub fn field_clicked(&mut self, point: Point) -> bool {
        match self.drawing.clone() {
            Some(id) => self.append_drawn_point(&id, point),
            None => false,
        }
    }

    fn release_markers(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        if self.drawing.as_deref() == Some(id) {
            self.drawing = None;
        }
    }
}

/// Pull every player back into the playable area of `field`
fn clamp_positions(field: &FieldDimensions, players: &mut [Player]) {
    for player in players {
        player.position = field.clamp(player.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FormationTemplate;
    use crate::routes::library::COVER_2;

    fn line_roster(count: usize) -> Roster {
        Roster::from_template(
            RosterTemplate::Line(count),
            FieldDimensions::default(),
            TemplateLayout::default(),
        )
    }

    #[test]
    fn test_move_clamps() {
        let mut roster = line_roster(3);
        assert!(roster.move_player("player-2", Point::new(10_000.0, -500.0)));
        assert_eq!(roster.player("player-2").unwrap().position, Point::new(760.0, 40.0));
    }

    #[test]
    fn test_move_does_not_recompute_path() {
        let mut roster = line_roster(1);
        roster.assign_route("player-1", "Go");
        let before = roster.player("player-1").unwrap().path.clone();

        roster.move_player("player-1", Point::new(100.0, 100.0));
        assert_eq!(roster.player("player-1").unwrap().path, before);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut roster = line_roster(2);
        let before = roster.clone();
        assert!(!roster.move_player("ghost", Point::new(1.0, 1.0)));
        assert!(!roster.set_label("ghost", "X"));
        assert!(!roster.assign_route("ghost", "Slant"));
        assert!(!roster.remove("ghost"));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_label_and_role_not_unique() {
        let mut roster = line_roster(2);
        roster.set_label("player-1", "WR");
        roster.set_label("player-2", "WR");
        roster.set_role("player-1", "Receiver");
        roster.set_role("player-2", "Receiver");
        assert!(roster.players().iter().all(|p| p.label == "WR" && p.role == "Receiver"));
    }

    #[test]
    fn test_assign_route_three_way() {
        let mut roster = line_roster(1);
        let anchor = roster.player("player-1").unwrap().position;

        roster.assign_route("player-1", "Slant");
        let p = roster.player("player-1").unwrap();
        assert_eq!(p.route_name.as_deref(), Some("Slant"));
        assert_eq!(
            p.path.as_deref(),
            Some(&[Point::new(anchor.x + 20.0, anchor.y - 40.0), Point::new(anchor.x + 100.0, anchor.y - 160.0)][..])
        );

        roster.assign_route("player-1", "Custom");
        let p = roster.player("player-1").unwrap();
        assert_eq!(p.route_name.as_deref(), Some("Custom"));
        assert_eq!(p.path.as_deref(), Some(&[][..]));

        roster.assign_route("player-1", "");
        let p = roster.player("player-1").unwrap();
        assert!(p.route_name.is_none());
        assert!(p.path.is_none());
    }

    #[test]
    fn test_block_route_is_empty_path() {
        let mut roster = line_roster(1);
        roster.assign_route("player-1", "Block");
        let p = roster.player("player-1").unwrap();
        assert_eq!(p.route_name.as_deref(), Some("Block"));
        assert_eq!(p.path, Some(Vec::new()));
    }

    #[test]
    fn test_unknown_route_keeps_name_without_path() {
        let mut roster = line_roster(1);
        roster.assign_route("player-1", "Go");
        roster.assign_route("player-1", "Hitch");
        let p = roster.player("player-1").unwrap();
        assert_eq!(p.route_name.as_deref(), Some("Hitch"));
        assert!(p.path.is_none());
    }

    #[test]
    fn test_route_follows_current_position() {
        let mut roster = line_roster(1);
        roster.move_player("player-1", Point::new(200.0, 400.0));
        roster.assign_route("player-1", "Go");
        assert_eq!(
            roster.player("player-1").unwrap().path,
            Some(vec![Point::new(200.0, 240.0)])
        );
    }

    #[test]
    fn test_drawing_flow() {
        let mut roster = line_roster(2);
        assert!(roster.start_drawing("player-1"));
        assert_eq!(roster.selected(), Some("player-1"));
        assert_eq!(roster.drawing(), Some("player-1"));

        assert!(roster.field_clicked(Point::new(300.0, 200.0)));
        assert!(roster.append_drawn_point("player-1", Point::new(320.0, 150.0)));
        // Not drawing: rejected
        assert!(!roster.append_drawn_point("player-2", Point::new(1.0, 1.0)));

        roster.finish_drawing();
        assert!(!roster.field_clicked(Point::new(0.0, 0.0)));

        let p = roster.player("player-1").unwrap();
        assert_eq!(p.route_name.as_deref(), Some("Custom"));
        assert_eq!(p.path.as_ref().map(Vec::len), Some(2));
        assert_eq!(roster.selected(), Some("player-1"));
    }

    #[test]
    fn test_remove_releases_markers() {
        let mut roster = line_roster(3);
        roster.start_drawing("player-3");
        assert!(roster.remove("player-3"));
        assert!(roster.selected().is_none());
        assert!(roster.drawing().is_none());
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_clear_path_releases_markers() {
        let mut roster = line_roster(2);
        roster.start_drawing("player-2");
        roster.field_clicked(Point::new(100.0, 100.0));

        assert!(roster.clear_path("player-2"));
        let p = roster.player("player-2").unwrap();
        assert!(p.route_name.is_none() && p.path.is_none());
        assert!(roster.selected().is_none());
        assert!(roster.drawing().is_none());
    }

    #[test]
    fn test_clear_path_other_player_keeps_markers() {
        let mut roster = line_roster(2);
        roster.start_drawing("player-1");
        roster.clear_path("player-2");
        assert_eq!(roster.drawing(), Some("player-1"));
    }

    #[test]
    fn test_reset_to_template_resets_counter() {
        let mut roster = line_roster(3);
        roster.add_generated();
        roster.start_drawing("player-1");

        roster.reset_to_template(RosterTemplate::Line(5));
        assert_eq!(roster.len(), 5);
        assert_eq!(roster.next_player_number(), 6);
        assert!(roster.drawing().is_none());
        assert!(roster.selected().is_none());
    }

    #[test]
    fn test_add_generated_skips_taken_ids() {
        let mut roster = line_roster(2);
        roster.add(Player::new("player-3", "QB", "Quarterback", Point::new(400.0, 350.0)));

        let id = roster.add_generated();
        assert_eq!(id, "player-4");
        assert_eq!(roster.selected(), Some("player-4"));
        assert_eq!(roster.player("player-4").unwrap().label, "P4");
        assert_eq!(roster.player("player-4").unwrap().position, Point::new(400.0, 250.0));
    }

    #[test]
    fn test_add_refuses_duplicate_id() {
        let mut roster = line_roster(1);
        let dup = Player::new("player-1", "X", "Y", Point::default());
        assert!(!roster.add(dup));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_add_clamps_position() {
        let mut roster = line_roster(1);
        assert!(roster.add(Player::new("x", "X", "Slot", Point::new(10_000.0, -500.0))));
        assert_eq!(roster.player("x").unwrap().position, Point::new(760.0, 40.0));
    }

    #[test]
    fn test_catalog_seeds_clamped_to_small_field() {
        let field = FieldDimensions { width: 400.0, height: 300.0, padding: 20.0 };
        let formation = FormationTemplate::find_offense("spread").unwrap();

        let mut roster =
            Roster::from_template(RosterTemplate::Formation(formation), field, TemplateLayout::default());
        assert_eq!(roster.len(), formation.players.len());
        assert!(roster.players().iter().all(|p| field.contains(p.position)));

        roster.reset_to_template(RosterTemplate::Line(1));
        roster.reset_to_template(RosterTemplate::Formation(formation));
        assert!(roster.players().iter().all(|p| field.contains(p.position)));
    }

    #[test]
    fn test_non_finite_drawn_point_dropped() {
        let mut roster = line_roster(1);
        roster.start_drawing("player-1");
        assert!(!roster.field_clicked(Point::new(f32::NAN, 100.0)));
        assert!(!roster.append_drawn_point("player-1", Point::new(200.0, f32::INFINITY)));
        assert!(roster.field_clicked(Point::new(200.0, 100.0)));

        let path = roster.player("player-1").unwrap().path.clone().unwrap();
        assert_eq!(path, vec![Point::new(200.0, 100.0)]);
        assert!(path.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_reset_positions_keeps_count() {
        let mut roster = line_roster(4);
        roster.remove("player-2");
        roster.reset_positions();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.selected(), Some("player-1"));

        let mut empty = line_roster(1);
        empty.remove("player-1");
        empty.reset_positions();
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn test_assign_coverage_preset_and_custom() {
        let formation = FormationTemplate::find_defense("four-three").unwrap();
        let mut roster = Roster::from_template(
            RosterTemplate::Formation(formation),
            FieldDimensions::default(),
            TemplateLayout::default(),
        );

        roster.assign_coverage("cb1", CoverageAssignment::Preset(&COVER_2));
        let cb1 = roster.player("cb1").unwrap();
        assert_eq!(cb1.route_name.as_deref(), Some("Cover 2 Zone"));
        assert_eq!(cb1.path, Some(vec![Point::new(100.0, 260.0), Point::new(60.0, 180.0)]));

        // Defensive line has no cover2 entry
        roster.assign_coverage("le", CoverageAssignment::Preset(&COVER_2));
        let le = roster.player("le").unwrap();
        assert_eq!(le.route_name.as_deref(), Some("Cover 2 Zone"));
        assert!(le.path.is_none());

        roster.assign_coverage("mike", CoverageAssignment::Custom);
        let mike = roster.player("mike").unwrap();
        assert_eq!(mike.route_name.as_deref(), Some("Custom"));
        assert_eq!(mike.path, Some(Vec::new()));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut roster = line_roster(2);
        roster.assign_route("player-1", "Post");
        let snap = roster.snapshot();

        roster.move_player("player-1", Point::new(500.0, 100.0));
        roster.assign_route("player-1", "");
        assert_eq!(snap[0].route_name.as_deref(), Some("Post"));
        assert_ne!(snap[0].position, roster.player("player-1").unwrap().position);
    }

    #[test]
    fn test_player_json_omits_missing_route() {
        let player = Player::new("qb", "QB", "Quarterback", Point::new(400.0, 370.0));
        let json = serde_json::to_value(&player).unwrap();
        assert!(json.get("routeName").is_none());
        assert!(json.get("path").is_none());

        let mut with_route = player.clone();
        with_route.begin_custom_route();
        let json = serde_json::to_value(&with_route).unwrap();
        assert_eq!(json["routeName"], "Custom");
        assert_eq!(json["path"], serde_json::json!([]));
    }
}
