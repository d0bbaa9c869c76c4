//! Answer model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::columns;
use crate::{Error, Result};

/// A persisted answer row. Many answers reference one question.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Answer {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "$createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "$updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub content: String,
    #[serde(rename = "authorId")]
    pub author_id: String,
    #[serde(rename = "questionId")]
    pub question_id: String,
    /// Set by a future acceptance flow; read-only here.
    #[serde(rename = "isAccepted", default)]
    pub is_accepted: bool,
}

/// Validated payload for creating an answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAnswer {
    content: String,
    #[serde(rename = "authorId")]
    author_id: String,
    #[serde(rename = "questionId")]
    question_id: String,
}

impl NewAnswer {
    pub fn new(
        content: impl Into<String>,
        author_id: impl Into<String>,
        question_id: impl Into<String>,
    ) -> Result<Self> {
        let content = content.into().trim().to_string();
        let author_id = author_id.into();
        let question_id = question_id.into();

        if content.is_empty() {
            return Err(Error::InvalidInput("Answer cannot be empty".to_string()));
        }
        if content.chars().count() > columns::CONTENT_MAX {
            return Err(Error::InvalidInput(format!(
                "Answer must be at most {} characters",
                columns::CONTENT_MAX
            )));
        }
        if author_id.trim().is_empty() || question_id.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Answer requires an author and a question".to_string(),
            ));
        }

        Ok(Self {
            content,
            author_id,
            question_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_answer_rejects_empty_content() {
        assert!(NewAnswer::new("  ", "user-1", "q1").is_err());
    }

    #[test]
    fn new_answer_requires_author_and_question() {
        assert!(NewAnswer::new("body", "", "q1").is_err());
        assert!(NewAnswer::new("body", "user-1", " ").is_err());
    }

    #[test]
    fn answer_deserializes_without_accepted_flag() {
        let json = r#"{
            "$id": "a1",
            "$createdAt": "2024-05-01T10:00:00.000+00:00",
            "$updatedAt": "2024-05-01T10:00:00.000+00:00",
            "content": "Use split_at_mut.",
            "authorId": "user-2",
            "questionId": "q1"
        }"#;

        let answer: Answer = serde_json::from_str(json).unwrap();
        assert!(!answer.is_accepted);
        assert_eq!(answer.question_id, "q1");
    }
}
