//! Turn advancement and the post-turn side swap.

use crate::state::{BOTTOM_ARENA, Battle, Board, TOP_ARENA, UserId};

/// Passes the turn to the actor's opponent and swaps arena occupancy.
///
/// The board is always rendered from the turn holder's perspective with the
/// acting player at the bottom; swapping sides after every completed turn
/// keeps that convention without per-player mirroring in the presentation
/// layer.
pub(super) fn advance_turn(battle: &mut Battle, actor: &UserId) {
    if let Some(next) = battle.opponent_of(actor) {
        battle.turn.holder = Some(next.clone());
    }
    switch_sides(&mut battle.board);
}

/// Exchanges the two arenas slot-for-slot (`TOP_ARENA[i]` with
/// `BOTTOM_ARENA[i]`). Applying it twice restores every occupant.
pub(super) fn switch_sides(board: &mut Board) {
    for (top, bottom) in TOP_ARENA.into_iter().zip(BOTTOM_ARENA) {
        board.swap(top, bottom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{HitPoints, Position, Spirit, SpiritId, SpiritStats};

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
    fn switch_sides_moves_occupants_to_mirror_slots() {
        let mut board = Board::empty();
        board.place(Position::BottomFrontlineCenter, spirit("front"));
        board.place(Position::TopBenchCenter, spirit("reserve"));

        switch_sides(&mut board);
        assert_eq!(
            board.spirit(Position::TopFrontlineCenter).unwrap().name,
            "front"
        );
        assert_eq!(
            board.spirit(Position::BottomBenchCenter).unwrap().name,
            "reserve"
        );
        assert!(!board.is_occupied(Position::BottomFrontlineCenter));
    }

    #[test]
    fn switch_sides_is_its_own_inverse() {
        let mut board = Board::empty();
        for (index, slot) in TOP_ARENA.into_iter().enumerate() {
            board.place(slot, spirit(&format!("t{index}")));
        }
        // Leave one bottom slot empty to cover the asymmetric case.
        for (index, slot) in BOTTOM_ARENA.into_iter().take(5).enumerate() {
            board.place(slot, spirit(&format!("b{index}")));
        }

        let before = board.clone();
        switch_sides(&mut board);
        assert_ne!(board, before);
        switch_sides(&mut board);
        assert_eq!(board, before);
    }
}
