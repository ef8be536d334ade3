use core::convert::Infallible;

use crate::action::ActionTransition;
use crate::state::{Battle, Position};

/// Cycles the acting side's frontline-center, middle-left, and middle-right
/// occupants: the frontline spirit retreats to middle-left, middle-left
/// shifts to middle-right, and middle-right advances to the frontline.
///
/// The acting side is always the bottom arena: the board is kept in the turn
/// holder's perspective and sides are swapped after every completed turn.
/// If any of the three slots is empty the rotation is a successful no-op, so
/// partial formations keep their shape. Rotate does not end the turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotateAction;

impl ActionTransition for RotateAction {
    type Error = Infallible;

    fn apply(&self, battle: &mut Battle) -> Result<(), Self::Error> {
        let board = &mut battle.board;
        let all_occupied = [
            Position::BottomFrontlineCenter,
            Position::BottomMiddleLeft,
            Position::BottomMiddleRight,
        ]
        .into_iter()
        .all(|slot| board.is_occupied(slot));
        if !all_occupied {
            return Ok(());
        }

        let frontline = board.take(Position::BottomFrontlineCenter);
        let middle_left = board.take(Position::BottomMiddleLeft);
        let middle_right = board.take(Position::BottomMiddleRight);
        if let (Some(frontline), Some(middle_left), Some(middle_right)) =
            (frontline, middle_left, middle_right)
        {
            board.place(Position::BottomFrontlineCenter, middle_right);
            board.place(Position::BottomMiddleLeft, frontline);
            board.place(Position::BottomMiddleRight, middle_left);
        }
        Ok(())
    }

    fn ends_turn(&self) -> bool {
        false
    }
}
