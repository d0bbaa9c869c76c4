//! Vote model and the typed vote target.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Direction of a vote, exclusive per (voter, target).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Upvoted,
    Downvoted,
}

impl VoteDirection {
    /// Wire spelling stored in the `voteStatus` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upvoted => "upvoted",
            Self::Downvoted => "downvoted",
        }
    }

    /// Contribution of one vote row to the aggregate tally.
    #[must_use]
    pub const fn weight(self) -> i64 {
        match self {
            Self::Upvoted => 1,
            Self::Downvoted => -1,
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "upvoted" => Ok(Self::Upvoted),
            "downvoted" => Ok(Self::Downvoted),
            other => Err(Error::InvalidInput(format!(
                "Unknown vote direction: {other}"
            ))),
        }
    }
}

/// Kind of content a vote or comment attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Question,
    Answer,
}

impl TargetKind {
    /// Wire spelling stored in the `type` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "question" => Ok(Self::Question),
            "answer" => Ok(Self::Answer),
            other => Err(Error::InvalidInput(format!("Unknown target kind: {other}"))),
        }
    }
}

/// A question or answer being voted on or commented on.
///
/// The remote rows store this as a `(type, typeId)` string pair; the pair is
/// decoded into this enum at the wire boundary so handling is exhaustive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VoteTarget {
    Question(String),
    Answer(String),
}

impl VoteTarget {
    /// Rebuild a target from its wire `(type, typeId)` pair.
    pub fn from_parts(kind: &str, id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::InvalidInput("Target id cannot be empty".to_string()));
        }
        Ok(match kind.parse::<TargetKind>()? {
            TargetKind::Question => Self::Question(id),
            TargetKind::Answer => Self::Answer(id),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> TargetKind {
        match self {
            Self::Question(_) => TargetKind::Question,
            Self::Answer(_) => TargetKind::Answer,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Question(id) | Self::Answer(id) => id,
        }
    }
}

#[derive(Deserialize)]
struct VoteWire {
    #[serde(rename = "$id")]
    id: String,
    #[serde(rename = "$createdAt")]
    created_at: DateTime<Utc>,
    #[serde(rename = "voteStatus")]
    vote_status: String,
    #[serde(rename = "votedById")]
    voted_by_id: String,
    #[serde(rename = "typeId")]
    type_id: String,
    #[serde(rename = "type")]
    kind: String,
}

/// A persisted vote row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "VoteWire")]
pub struct Vote {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub target: VoteTarget,
    pub voted_by_id: String,
    pub direction: VoteDirection,
}

impl TryFrom<VoteWire> for Vote {
    type Error = Error;

    fn try_from(wire: VoteWire) -> Result<Self> {
        Ok(Self {
            id: wire.id,
            created_at: wire.created_at,
            target: VoteTarget::from_parts(&wire.kind, wire.type_id)?,
            voted_by_id: wire.voted_by_id,
            direction: wire.vote_status.parse()?,
        })
    }
}

/// Payload for creating a vote row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVote {
    pub target: VoteTarget,
    pub voted_by_id: String,
    pub direction: VoteDirection,
}

#[derive(Serialize)]
struct NewVoteWire<'a> {
    #[serde(rename = "voteStatus")]
    vote_status: &'static str,
    #[serde(rename = "votedById")]
    voted_by_id: &'a str,
    #[serde(rename = "typeId")]
    type_id: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl NewVote {
    /// Wire representation for row creation.
    #[must_use]
    pub fn to_wire(&self) -> impl Serialize + '_ {
        NewVoteWire {
            vote_status: self.direction.as_str(),
            voted_by_id: &self.voted_by_id,
            type_id: self.target.id(),
            kind: self.target.kind().as_str(),
        }
    }
}

/// Aggregate vote count: +1 per upvote row, -1 per downvote row.
///
/// No cached counter exists anywhere; every display recomputes from the raw
/// rows via this function.
#[must_use]
pub fn tally(votes: &[Vote]) -> i64 {
    votes.iter().map(|vote| vote.direction.weight()).sum()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn vote(direction: VoteDirection, voter: &str) -> Vote {
        Vote {
            id: format!("vote-{voter}"),
            created_at: Utc::now(),
            target: VoteTarget::Question("q1".to_string()),
            voted_by_id: voter.to_string(),
            direction,
        }
    }

    #[test]
    fn target_round_trips_through_wire_parts() {
        let target = VoteTarget::from_parts("answer", "a42").unwrap();
        assert_eq!(target, VoteTarget::Answer("a42".to_string()));
        assert_eq!(target.kind().as_str(), "answer");
        assert_eq!(target.id(), "a42");
    }

    #[test]
    fn target_rejects_unknown_kind_and_empty_id() {
        assert!(VoteTarget::from_parts("reply", "a42").is_err());
        assert!(VoteTarget::from_parts("question", "  ").is_err());
    }

    #[test]
    fn vote_deserializes_from_row_json() {
        let json = r#"{
            "$id": "v1",
            "$createdAt": "2024-05-01T10:00:00.000+00:00",
            "voteStatus": "downvoted",
            "votedById": "user-1",
            "typeId": "q-9",
            "type": "question"
        }"#;

        let vote: Vote = serde_json::from_str(json).unwrap();
        assert_eq!(vote.direction, VoteDirection::Downvoted);
        assert_eq!(vote.target, VoteTarget::Question("q-9".to_string()));
        assert_eq!(vote.voted_by_id, "user-1");
    }

    #[test]
    fn vote_rejects_unknown_status() {
        let json = r#"{
            "$id": "v1",
            "$createdAt": "2024-05-01T10:00:00.000+00:00",
            "voteStatus": "sideways",
            "votedById": "user-1",
            "typeId": "q-9",
            "type": "question"
        }"#;

        assert!(serde_json::from_str::<Vote>(json).is_err());
    }

    #[test]
    fn new_vote_wire_uses_string_discriminator() {
        let new_vote = NewVote {
            target: VoteTarget::Answer("a7".to_string()),
            voted_by_id: "user-2".to_string(),
            direction: VoteDirection::Upvoted,
        };

        let value = serde_json::to_value(new_vote.to_wire()).unwrap();
        assert_eq!(value["voteStatus"], "upvoted");
        assert_eq!(value["type"], "answer");
        assert_eq!(value["typeId"], "a7");
        assert_eq!(value["votedById"], "user-2");
    }

    #[test]
    fn tally_sums_upvotes_minus_downvotes() {
        let votes = vec![
            vote(VoteDirection::Upvoted, "a"),
            vote(VoteDirection::Upvoted, "b"),
            vote(VoteDirection::Downvoted, "c"),
        ];
        assert_eq!(tally(&votes), 1);
    }

    #[test]
    fn tally_is_order_independent() {
        let mut votes = vec![
            vote(VoteDirection::Downvoted, "a"),
            vote(VoteDirection::Upvoted, "b"),
            vote(VoteDirection::Downvoted, "c"),
            vote(VoteDirection::Upvoted, "d"),
            vote(VoteDirection::Upvoted, "e"),
        ];
        let forward = tally(&votes);
        votes.reverse();
        assert_eq!(tally(&votes), forward);
        assert_eq!(forward, 1);
    }

    #[test]
    fn tally_of_no_votes_is_zero() {
        assert_eq!(tally(&[]), 0);
    }
}
