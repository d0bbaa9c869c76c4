//! Question model and pre-write validation.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::schema::columns;
use crate::{Error, Result};

/// Upper bound on tags per question, enforced client-side.
pub const MAX_TAGS: usize = 5;

/// A persisted question row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "$createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "$updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub title: String,
    /// Markdown body.
    pub content: String,
    #[serde(rename = "authorId")]
    pub author_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "attachmentId", default)]
    pub attachment_id: Option<String>,
}

/// Validated payload for creating a question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewQuestion {
    title: String,
    content: String,
    #[serde(rename = "authorId")]
    author_id: String,
    tags: Vec<String>,
    #[serde(rename = "attachmentId", skip_serializing_if = "Option::is_none")]
    attachment_id: Option<String>,
}

impl NewQuestion {
    /// Validate and normalize the inputs of a new question.
    ///
    /// Author id is fixed at creation and never updated afterwards.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<String>,
        tags: Vec<String>,
        attachment_id: Option<String>,
    ) -> Result<Self> {
        let title = title.into().trim().to_string();
        let content = content.into().trim().to_string();
        let author_id = author_id.into();

        if title.is_empty() {
            return Err(Error::InvalidInput("Title is required".to_string()));
        }
        if title.chars().count() > columns::TITLE_MAX {
            return Err(Error::InvalidInput(format!(
                "Title must be at most {} characters",
                columns::TITLE_MAX
            )));
        }
        if content.is_empty() {
            return Err(Error::InvalidInput("Content is required".to_string()));
        }
        if content.chars().count() > columns::CONTENT_MAX {
            return Err(Error::InvalidInput(format!(
                "Content must be at most {} characters",
                columns::CONTENT_MAX
            )));
        }
        if author_id.trim().is_empty() {
            return Err(Error::InvalidInput("Author id is required".to_string()));
        }

        Ok(Self {
            title,
            content,
            author_id,
            tags: normalize_tags(tags)?,
            attachment_id: crate::util::normalize_text_option(attachment_id),
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Normalize a tag list: trim, lowercase, drop empties, deduplicate while
/// preserving order, and reject anything outside `[a-z0-9][a-z0-9-]*`.
pub fn normalize_tags(tags: Vec<String>) -> Result<Vec<String>> {
    let pattern = Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("valid regex");

    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() {
            continue;
        }
        if tag.chars().count() > columns::TAG_MAX {
            return Err(Error::InvalidInput(format!(
                "Tag '{tag}' is longer than {} characters",
                columns::TAG_MAX
            )));
        }
        if !pattern.is_match(&tag) {
            return Err(Error::InvalidInput(format!(
                "Tag '{tag}' may only contain lowercase letters, digits, and dashes"
            )));
        }
        if !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }

    if normalized.len() > MAX_TAGS {
        return Err(Error::InvalidInput(format!(
            "At most {MAX_TAGS} tags are allowed"
        )));
    }

    Ok(normalized)
}
