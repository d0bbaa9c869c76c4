//! Comment model. Comments are append-only; no edit or delete flow exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::VoteTarget;
use crate::schema::columns;
use crate::{Error, Result};

#[derive(Deserialize)]
struct CommentWire {
    #[serde(rename = "$id")]
    id: String,
    #[serde(rename = "$createdAt")]
    created_at: DateTime<Utc>,
    content: String,
    #[serde(rename = "authorId")]
    author_id: String,
    #[serde(rename = "typeId")]
    type_id: String,
    #[serde(rename = "type")]
    kind: String,
}

/// A persisted comment row attached to a question or answer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "CommentWire")]
pub struct Comment {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub content: String,
    pub author_id: String,
    pub target: VoteTarget,
}

impl TryFrom<CommentWire> for Comment {
    type Error = Error;

    fn try_from(wire: CommentWire) -> Result<Self> {
        Ok(Self {
            id: wire.id,
            created_at: wire.created_at,
            content: wire.content,
            author_id: wire.author_id,
            target: VoteTarget::from_parts(&wire.kind, wire.type_id)?,
        })
    }
}

/// Validated payload for creating a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub content: String,
    pub author_id: String,
    pub target: VoteTarget,
}

#[derive(Serialize)]
struct NewCommentWire<'a> {
    content: &'a str,
    #[serde(rename = "authorId")]
    author_id: &'a str,
    #[serde(rename = "typeId")]
    type_id: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl NewComment {
    pub fn new(
        content: impl Into<String>,
        author_id: impl Into<String>,
        target: VoteTarget,
    ) -> Result<Self> {
        let content = content.into().trim().to_string();
        let author_id = author_id.into();

        if content.is_empty() {
            return Err(Error::InvalidInput("Comment cannot be empty".to_string()));
        }
        if content.chars().count() > columns::COMMENT_MAX {
            return Err(Error::InvalidInput(format!(
                "Comment must be at most {} characters",
                columns::COMMENT_MAX
            )));
        }
        if author_id.trim().is_empty() {
            return Err(Error::InvalidInput("Author id is required".to_string()));
        }

        Ok(Self {
            content,
            author_id,
            target,
        })
    }

    /// Wire representation for row creation.
    #[must_use]
    pub fn to_wire(&self) -> impl Serialize + '_ {
        NewCommentWire {
            content: &self.content,
            author_id: &self.author_id,
            type_id: self.target.id(),
            kind: self.target.kind().as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_deserializes_target_pair() {
        let json = r#"{
            "$id": "c1",
            "$createdAt": "2024-05-01T10:00:00.000+00:00",
            "content": "Can you share the error?",
            "authorId": "user-3",
            "typeId": "a5",
            "type": "answer"
        }"#;

        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.target, VoteTarget::Answer("a5".to_string()));
    }

    #[test]
    fn new_comment_rejects_empty_content() {
        let target = VoteTarget::Question("q1".to_string());
        assert!(NewComment::new("   ", "user-1", target).is_err());
    }

    #[test]
    fn new_comment_wire_carries_discriminator() {
        let comment = NewComment::new(
            "Same here.",
            "user-1",
            VoteTarget::Question("q1".to_string()),
        )
        .unwrap();

        let value = serde_json::to_value(comment.to_wire()).unwrap();
        assert_eq!(value["type"], "question");
        assert_eq!(value["typeId"], "q1");
    }
}
