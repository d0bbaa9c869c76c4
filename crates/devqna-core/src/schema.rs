//! Remote schema identifiers shared by the runtime clients and the setup CLI.
//!
//! The provisioner creates these tables and the bucket; the content fetchers
//! address rows through the same constants so the two can never drift.

/// Database id holding all DevQnA tables.
pub const DATABASE_ID: &str = "devqna-main";

/// Questions table id.
pub const QUESTIONS_TABLE: &str = "questions";
/// Answers table id.
pub const ANSWERS_TABLE: &str = "answers";
/// Votes table id.
pub const VOTES_TABLE: &str = "votes";
/// Comments table id.
pub const COMMENTS_TABLE: &str = "comments";

/// Bucket id for question attachments.
pub const ATTACHMENT_BUCKET: &str = "question-attachments";

/// Maximum attachment size accepted by the bucket, in bytes.
pub const ATTACHMENT_MAX_BYTES: i64 = 50_000_000;
/// File extensions the attachment bucket accepts.
pub const ATTACHMENT_EXTENSIONS: &[&str] = &["jpg", "png", "jpeg", "gif", "webp", "pdf"];

/// Column size limits, mirrored by model validation.
pub mod columns {
    /// Question title column size.
    pub const TITLE_MAX: usize = 200;
    /// Question/answer content column size.
    pub const CONTENT_MAX: usize = 5000;
    /// Comment content column size.
    pub const COMMENT_MAX: usize = 2000;
    /// Author/voter/row id column size.
    pub const ID_MAX: usize = 64;
    /// Single tag column size.
    pub const TAG_MAX: usize = 100;
    /// Vote status column size.
    pub const VOTE_STATUS_MAX: usize = 10;
    /// Target kind discriminator column size.
    pub const TARGET_KIND_MAX: usize = 20;
}
