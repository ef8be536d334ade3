use super::common::UserId;

/// Turn bookkeeping for one battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// The user currently permitted to submit an action. `None` until the
    /// first action establishes a turn holder.
    pub holder: Option<UserId>,

    /// Sequential action identifier that increments with every action
    /// executed, turn-ending or not. Gives callers a unique, monotonically
    /// increasing id per accepted action.
    #[cfg_attr(feature = "serde", serde(default))]
    pub action_nonce: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }
}
