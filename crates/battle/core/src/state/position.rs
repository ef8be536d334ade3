//! The fixed 12-slot board and its named slot groups.
//!
//! Each player owns a 6-slot arena: one frontline slot, two middle slots, and
//! a 3-slot bench. The board is always expressed from the renderer's fixed
//! perspective; the engine swaps arena occupancy after every completed turn so
//! that "bottom" is always the acting player's side.

use crate::config::BattleConfig;

/// Which half of the board a slot belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    /// The opposing half.
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }
}

/// One of the 12 fixed board slots.
///
/// Wire names keep the legacy SCREAMING_SNAKE_CASE values so persisted
/// battles remain readable by existing tooling.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Position {
    TopBenchLeft,
    TopBenchCenter,
    TopBenchRight,
    TopMiddleLeft,
    TopMiddleRight,
    TopFrontlineCenter,
    BottomFrontlineCenter,
    BottomMiddleLeft,
    BottomMiddleRight,
    BottomBenchLeft,
    BottomBenchCenter,
    BottomBenchRight,
}

/// Top-side bench slots.
pub const TOP_BENCH: [Position; 3] = [
    Position::TopBenchLeft,
    Position::TopBenchCenter,
    Position::TopBenchRight,
];

/// Bottom-side bench slots.
pub const BOTTOM_BENCH: [Position; 3] = [
    Position::BottomBenchLeft,
    Position::BottomBenchCenter,
    Position::BottomBenchRight,
];

/// Top-side middle slots.
pub const TOP_MIDDLE: [Position; 2] = [Position::TopMiddleLeft, Position::TopMiddleRight];

/// Bottom-side middle slots.
pub const BOTTOM_MIDDLE: [Position; 2] = [Position::BottomMiddleLeft, Position::BottomMiddleRight];

/// Bench slots of both sides.
pub const BENCH_POSITIONS: [Position; 6] = [
    Position::TopBenchLeft,
    Position::TopBenchCenter,
    Position::TopBenchRight,
    Position::BottomBenchLeft,
    Position::BottomBenchCenter,
    Position::BottomBenchRight,
];

/// The top player's arena in deployment order: frontline-center, middle-left,
/// middle-right, bench-left, bench-center, bench-right.
///
/// `TOP_ARENA[i]` mirrors `BOTTOM_ARENA[i]`; both battle seeding and the
/// post-turn side swap rely on this pairing.
pub const TOP_ARENA: [Position; BattleConfig::ARENA_SLOTS] = [
    Position::TopFrontlineCenter,
    Position::TopMiddleLeft,
    Position::TopMiddleRight,
    Position::TopBenchLeft,
    Position::TopBenchCenter,
    Position::TopBenchRight,
];

/// The bottom player's arena in deployment order (see [`TOP_ARENA`]).
pub const BOTTOM_ARENA: [Position; BattleConfig::ARENA_SLOTS] = [
    Position::BottomFrontlineCenter,
    Position::BottomMiddleLeft,
    Position::BottomMiddleRight,
    Position::BottomBenchLeft,
    Position::BottomBenchCenter,
    Position::BottomBenchRight,
];

impl Position {
    /// Every slot on the board.
    pub const ALL: [Position; 12] = [
        Position::TopBenchLeft,
        Position::TopBenchCenter,
        Position::TopBenchRight,
        Position::TopMiddleLeft,
        Position::TopMiddleRight,
        Position::TopFrontlineCenter,
        Position::BottomFrontlineCenter,
        Position::BottomMiddleLeft,
        Position::BottomMiddleRight,
        Position::BottomBenchLeft,
        Position::BottomBenchCenter,
        Position::BottomBenchRight,
    ];

    /// The half of the board this slot belongs to.
    pub fn side(self) -> Side {
        match self {
            Position::TopBenchLeft
            | Position::TopBenchCenter
            | Position::TopBenchRight
            | Position::TopMiddleLeft
            | Position::TopMiddleRight
            | Position::TopFrontlineCenter => Side::Top,
            _ => Side::Bottom,
        }
    }

    /// The same slot on the opposing side.
    pub fn mirror(self) -> Position {
        let (own, other) = match self.side() {
            Side::Top => (&TOP_ARENA, &BOTTOM_ARENA),
            Side::Bottom => (&BOTTOM_ARENA, &TOP_ARENA),
        };
        let index = own
            .iter()
            .position(|slot| *slot == self)
            .expect("every position appears in its arena");
        other[index]
    }
}
