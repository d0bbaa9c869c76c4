//! Pure vote-transition planning.

use crate::models::VoteDirection;

/// What a desired vote does to the voter's existing vote row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VotePlan {
    /// No existing row: create one with this direction.
    Cast(VoteDirection),
    /// Existing row with the opposite direction: flip it to this direction.
    Switch(VoteDirection),
    /// Existing row with the same direction: remove it (toggle-off).
    /// Carries the direction being retracted.
    Retract(VoteDirection),
}

/// Decide the transition for a desired direction given the voter's existing
/// vote on the target.
#[must_use]
pub const fn plan_transition(
    existing: Option<VoteDirection>,
    desired: VoteDirection,
) -> VotePlan {
    match (existing, desired) {
        (None, _) => VotePlan::Cast(desired),
        (Some(VoteDirection::Upvoted), VoteDirection::Upvoted)
        | (Some(VoteDirection::Downvoted), VoteDirection::Downvoted) => VotePlan::Retract(desired),
        (Some(_), _) => VotePlan::Switch(desired),
    }
}

impl VotePlan {
    /// Net change to the target author's reputation.
    ///
    /// Cast: +1/-1. Retract: the cast undone, -1/+1. Switch: the reversal,
    /// +2/-2.
    #[must_use]
    pub const fn reputation_delta(self) -> i64 {
        match self {
            Self::Cast(direction) => direction.weight(),
            Self::Retract(direction) => -direction.weight(),
            Self::Switch(direction) => 2 * direction.weight(),
        }
    }

    /// The voter's vote state once the plan is applied.
    #[must_use]
    pub const fn resulting_direction(self) -> Option<VoteDirection> {
        match self {
            Self::Cast(direction) | Self::Switch(direction) => Some(direction),
            Self::Retract(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use VoteDirection::{Downvoted, Upvoted};

    #[test]
    fn fresh_vote_is_cast() {
        assert_eq!(plan_transition(None, Upvoted), VotePlan::Cast(Upvoted));
        assert_eq!(plan_transition(None, Downvoted), VotePlan::Cast(Downvoted));
    }

    #[test]
    fn same_direction_is_retract() {
        assert_eq!(
            plan_transition(Some(Upvoted), Upvoted),
            VotePlan::Retract(Upvoted)
        );
        assert_eq!(
            plan_transition(Some(Downvoted), Downvoted),
            VotePlan::Retract(Downvoted)
        );
    }

    #[test]
    fn opposite_direction_is_switch() {
        assert_eq!(
            plan_transition(Some(Upvoted), Downvoted),
            VotePlan::Switch(Downvoted)
        );
        assert_eq!(
            plan_transition(Some(Downvoted), Upvoted),
            VotePlan::Switch(Upvoted)
        );
    }

    #[test]
    fn reputation_deltas_match_the_transition_table() {
        assert_eq!(VotePlan::Cast(Upvoted).reputation_delta(), 1);
        assert_eq!(VotePlan::Cast(Downvoted).reputation_delta(), -1);
        assert_eq!(VotePlan::Retract(Upvoted).reputation_delta(), -1);
        assert_eq!(VotePlan::Retract(Downvoted).reputation_delta(), 1);
        assert_eq!(VotePlan::Switch(Upvoted).reputation_delta(), 2);
        assert_eq!(VotePlan::Switch(Downvoted).reputation_delta(), -2);
    }

    #[test]
    fn cast_then_retract_nets_to_zero() {
        let cast = plan_transition(None, Upvoted);
        let retract = plan_transition(cast.resulting_direction(), Upvoted);
        assert_eq!(cast.reputation_delta() + retract.reputation_delta(), 0);
        assert_eq!(retract.resulting_direction(), None);
    }
}
