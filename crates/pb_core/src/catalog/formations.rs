//! Formation Presets
//!
//! Static offensive and defensive alignments. Seed ids double as the role
//! slots coverage blueprints are keyed on (`cb1`, `mike`, ...), so a formation
//! and a coverage line up without any extra mapping.
//!
//! Offense aligns below the line of scrimmage (y ≈ 310), defense above it.

use crate::geometry::Point;
use crate::roster::Player;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Starting spot of one player in a formation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedPlayer {
    pub id: &'static str,
    pub label: &'static str,
    pub role: &'static str,
    pub position: Point,
}

/// Catalog formation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationTemplate {
    pub id: &'static str,
    pub label: &'static str,
    pub team_size: usize,
    pub description: &'static str,
    pub players: &'static [SeedPlayer],
}

/// Which side of the ball a formation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Offense,
    Defense,
}

macro_rules! seed {
    ($id:expr, $label:expr, $role:expr, $x:expr, $y:expr) => {
        SeedPlayer { id: $id, label: $label, role: $role, position: Point { x: $x, y: $y } }
    };
}

// ============================================================================
// Offense
// ============================================================================

pub const SPREAD: FormationTemplate = FormationTemplate {
    id: "spread",
    label: "Spread",
    team_size: 11,
    description: "Four receivers spread wide, single back next to the quarterback.",
    players: &[
        seed!("lt", "LT", "Left Tackle", 320.0, 310.0),
        seed!("lg", "LG", "Left Guard", 360.0, 310.0),
        seed!("c", "C", "Center", 400.0, 310.0),
        seed!("rg", "RG", "Right Guard", 440.0, 310.0),
        seed!("rt", "RT", "Right Tackle", 480.0, 310.0),
        seed!("qb", "QB", "Quarterback", 400.0, 370.0),
        seed!("rb", "RB", "Running Back", 440.0, 380.0),
        seed!("wr1", "X", "Wide Receiver", 120.0, 310.0),
        seed!("slot1", "H", "Slot Receiver", 220.0, 320.0),
        seed!("slot2", "Y", "Slot Receiver", 580.0, 320.0),
        seed!("wr2", "Z", "Wide Receiver", 680.0, 310.0),
    ],
};

pub const TRIPS_RIGHT: FormationTemplate = FormationTemplate {
    id: "trips-right",
    label: "Trips Right",
    team_size: 11,
    description: "Three receivers stacked to the right to overload the coverage.",
    players: &[
        seed!("lt", "LT", "Left Tackle", 320.0, 310.0),
        seed!("lg", "LG", "Left Guard", 360.0, 310.0),
        seed!("c", "C", "Center", 400.0, 310.0),
        seed!("rg", "RG", "Right Guard", 440.0, 310.0),
        seed!("rt", "RT", "Right Tackle", 480.0, 310.0),
        seed!("qb", "QB", "Quarterback", 400.0, 370.0),
        seed!("rb", "RB", "Running Back", 360.0, 380.0),
        seed!("wr1", "X", "Wide Receiver", 120.0, 310.0),
        seed!("slot1", "H", "Slot Receiver", 560.0, 320.0),
        seed!("slot2", "Y", "Slot Receiver", 620.0, 320.0),
        seed!("wr2", "Z", "Wide Receiver", 700.0, 310.0),
    ],
};

pub const I_FORM: FormationTemplate = FormationTemplate {
    id: "i-form",
    label: "I-Formation",
    team_size: 11,
    description: "Fullback and tailback stacked behind the quarterback, tight end on the line.",
    players: &[
        seed!("lt", "LT", "Left Tackle", 320.0, 310.0),
        seed!("lg", "LG", "Left Guard", 360.0, 310.0),
        seed!("c", "C", "Center", 400.0, 310.0),
        seed!("rg", "RG", "Right Guard", 440.0, 310.0),
        seed!("rt", "RT", "Right Tackle", 480.0, 310.0),
        seed!("te", "TE", "Tight End", 520.0, 310.0),
        seed!("qb", "QB", "Quarterback", 400.0, 350.0),
        seed!("fb", "FB", "Fullback", 400.0, 390.0),
        seed!("rb", "TB", "Tailback", 400.0, 430.0),
        seed!("wr1", "X", "Wide Receiver", 120.0, 310.0),
        seed!("wr2", "Z", "Wide Receiver", 680.0, 310.0),
    ],
};

pub const FLAG_SPREAD: FormationTemplate = FormationTemplate {
    id: "flag-spread",
    label: "Flag Spread",
    team_size: 5,
    description: "5v5 flag: center, quarterback and three receivers spread across the field.",
    players: &[
        seed!("c", "C", "Center", 400.0, 310.0),
        seed!("qb", "QB", "Quarterback", 400.0, 370.0),
        seed!("wr1", "WR1", "Wide Receiver", 150.0, 310.0),
        seed!("wr2", "WR2", "Wide Receiver", 650.0, 310.0),
        seed!("wr3", "S", "Slot Receiver", 540.0, 320.0),
    ],
};

pub const FLAG_BUNCH: FormationTemplate = FormationTemplate {
    id: "flag-bunch",
    label: "Flag Bunch",
    team_size: 5,
    description: "5v5 flag: three receivers bunched to one side to create natural picks.",
    players: &[
        seed!("c", "C", "Center", 400.0, 310.0),
        seed!("qb", "QB", "Quarterback", 400.0, 370.0),
        seed!("wr1", "WR1", "Wide Receiver", 560.0, 310.0),
        seed!("wr2", "WR2", "Wide Receiver", 600.0, 330.0),
        seed!("wr3", "WR3", "Wide Receiver", 640.0, 310.0),
    ],
};

pub const OFFENSIVE_FORMATIONS: &[FormationTemplate] =
    &[SPREAD, TRIPS_RIGHT, I_FORM, FLAG_SPREAD, FLAG_BUNCH];

// ============================================================================
// Defense
// ============================================================================

pub const FOUR_THREE: FormationTemplate = FormationTemplate {
    id: "four-three",
    label: "4-3 Base",
    team_size: 11,
    description: "Four down linemen, three linebackers, two corners and two safeties.",
    players: &[
        seed!("le", "LE", "Defensive End", 300.0, 290.0),
        seed!("dt1", "DT", "Defensive Tackle", 370.0, 290.0),
        seed!("dt2", "DT", "Defensive Tackle", 430.0, 290.0),
        seed!("re", "RE", "Defensive End", 500.0, 290.0),
        seed!("sam", "SAM", "Strong-side Linebacker", 300.0, 240.0),
        seed!("mike", "MIKE", "Middle Linebacker", 400.0, 240.0),
        seed!("will", "WILL", "Weak-side Linebacker", 500.0, 240.0),
        seed!("cb1", "CB", "Cornerback", 100.0, 300.0),
        seed!("cb2", "CB", "Cornerback", 700.0, 300.0),
        seed!("fs", "FS", "Free Safety", 330.0, 200.0),
        seed!("ss", "SS", "Strong Safety", 470.0, 200.0),
    ],
};

pub const NICKEL: FormationTemplate = FormationTemplate {
    id: "nickel",
    label: "Nickel 4-2-5",
    team_size: 11,
    description: "A fifth defensive back replaces the strong-side linebacker against spread sets.",
    players: &[
        seed!("le", "LE", "Defensive End", 300.0, 290.0),
        seed!("dt1", "DT", "Defensive Tackle", 370.0, 290.0),
        seed!("dt2", "DT", "Defensive Tackle", 430.0, 290.0),
        seed!("re", "RE", "Defensive End", 500.0, 290.0),
        seed!("mike", "MIKE", "Middle Linebacker", 360.0, 240.0),
        seed!("will", "WILL", "Weak-side Linebacker", 440.0, 240.0),
        seed!("nb", "NB", "Nickel Back", 600.0, 270.0),
        seed!("cb1", "CB", "Cornerback", 100.0, 300.0),
        seed!("cb2", "CB", "Cornerback", 700.0, 300.0),
        seed!("fs", "FS", "Free Safety", 330.0, 200.0),
        seed!("ss", "SS", "Strong Safety", 470.0, 200.0),
    ],
};

pub const FLAG_ZONE_DEFENSE: FormationTemplate = FormationTemplate {
    id: "flag-zone",
    label: "Flag 5v5 Zone",
    team_size: 5,
    description: "Two rushers, one linebacker and two corners for 5v5 flag.",
    players: &[
        seed!("r1", "R1", "Rusher", 340.0, 280.0),
        seed!("r2", "R2", "Rusher", 460.0, 280.0),
        seed!("lb", "LB", "Linebacker", 400.0, 220.0),
        seed!("cb1", "CB1", "Cornerback", 160.0, 280.0),
        seed!("cb2", "CB2", "Cornerback", 640.0, 280.0),
    ],
};

pub const DEFENSIVE_FORMATIONS: &[FormationTemplate] = &[FOUR_THREE, NICKEL, FLAG_ZONE_DEFENSE];

type FormationIndex = HashMap<Side, HashMap<&'static str, &'static FormationTemplate>>;

static FORMATION_INDEX: Lazy<FormationIndex> = Lazy::new(|| {
    [Side::Offense, Side::Defense]
        .into_iter()
        .map(|side| (side, FormationTemplate::all(side).iter().map(|f| (f.id, f)).collect()))
        .collect()
});

// ============================================================================
// Lookup & instantiation
// ============================================================================

impl SeedPlayer {
    /// Owned player with no route
    pub fn to_player(&self) -> Player {
        Player::new(self.id, self.label, self.role, self.position)
    }
}

impl FormationTemplate {
    pub fn find(side: Side, id: &str) -> Option<&'static FormationTemplate> {
        FORMATION_INDEX.get(&side).and_then(|by_id| by_id.get(id)).copied()
    }

    pub fn find_offense(id: &str) -> Option<&'static FormationTemplate> {
        Self::find(Side::Offense, id)
    }

    pub fn find_defense(id: &str) -> Option<&'static FormationTemplate> {
        Self::find(Side::Defense, id)
    }

    /// All formations of one side, in catalog order
    pub fn all(side: Side) -> &'static [FormationTemplate] {
        match side {
            Side::Offense => OFFENSIVE_FORMATIONS,
            Side::Defense => DEFENSIVE_FORMATIONS,
        }
    }

    /// First formation of a side, used when a lookup misses
    pub fn default_for(side: Side) -> &'static FormationTemplate {
        &Self::all(side)[0]
    }

    /// Fresh players for this formation. Nothing is shared with the catalog.
    pub fn instantiate(&self) -> Vec<Player> {
        self.players.iter().map(SeedPlayer::to_player).collect()
    }
}

/// Display label for a formation id, falling back to the id itself
pub fn formation_label(side: Side, id: &str) -> &str {
    FormationTemplate::find(side, id).map(|f| f.label).unwrap_or(id)
}
