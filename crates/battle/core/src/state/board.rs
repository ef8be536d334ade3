use std::collections::BTreeMap;

use super::position::Position;
use super::spirit::Spirit;

/// The live position-to-spirit map for one battle.
///
/// Slots may be empty (short rosters leave trailing deployment slots
/// unfilled). Iteration order is the [`Position`] declaration order, which
/// keeps serialized battles and test assertions stable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    slots: BTreeMap<Position, Spirit>,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The spirit occupying `position`, if any.
    pub fn spirit(&self, position: Position) -> Option<&Spirit> {
        self.slots.get(&position)
    }

    pub fn spirit_mut(&mut self, position: Position) -> Option<&mut Spirit> {
        self.slots.get_mut(&position)
    }

    pub fn is_occupied(&self, position: Position) -> bool {
        self.slots.contains_key(&position)
    }

    /// Places a spirit, returning the previous occupant if the slot was taken.
    pub fn place(&mut self, position: Position, spirit: Spirit) -> Option<Spirit> {
        self.slots.insert(position, spirit)
    }

    /// Removes and returns the occupant of `position`.
    pub fn take(&mut self, position: Position) -> Option<Spirit> {
        self.slots.remove(&position)
    }

    /// Exchanges the occupants of two slots. Empty slots are tolerated: an
    /// occupant moving into an empty slot leaves its old slot empty.
    pub fn swap(&mut self, a: Position, b: Position) {
        let from_a = self.slots.remove(&a);
        let from_b = self.slots.remove(&b);
        if let Some(spirit) = from_b {
            self.slots.insert(a, spirit);
        }
        if let Some(spirit) = from_a {
            self.slots.insert(b, spirit);
        }
    }

    /// Occupied slots in stable position order.
    pub fn entries(&self) -> impl Iterator<Item = (Position, &Spirit)> {
        self.slots.iter().map(|(position, spirit)| (*position, spirit))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{HitPoints, SpiritId, SpiritStats};

    fn spirit(id: &str) -> Spirit {
        Spirit {
            id: SpiritId::from(id),
            name: id.to_owned(),
            description: String::new(),
            primary_type: "Normal".into(),
            secondary_type: None,
            original_image_url: String::new(),
            generated_image_url: String::new(),
            stats: SpiritStats::default(),
            hit_points: HitPoints::new(30),
        }
    }

    #[test]
    fn swap_exchanges_occupants() {
        let mut board = Board::empty();
        board.place(Position::BottomBenchLeft, spirit("a"));
        board.place(Position::BottomBenchRight, spirit("b"));

        board.swap(Position::BottomBenchLeft, Position::BottomBenchRight);
        assert_eq!(
            board.spirit(Position::BottomBenchLeft).unwrap().name,
            "b"
        );
        assert_eq!(
            board.spirit(Position::BottomBenchRight).unwrap().name,
            "a"
        );
    }

    #[test]
    fn swap_tolerates_an_empty_slot() {
        let mut board = Board::empty();
        board.place(Position::BottomFrontlineCenter, spirit("solo"));

        board.swap(Position::BottomFrontlineCenter, Position::TopFrontlineCenter);
        assert!(!board.is_occupied(Position::BottomFrontlineCenter));
        assert_eq!(
            board.spirit(Position::TopFrontlineCenter).unwrap().name,
            "solo"
        );
    }
}
