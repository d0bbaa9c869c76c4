//! UI components

mod answers;
mod button;
mod comments;
mod header;
mod input;
mod pagination;
mod question_card;
mod question_form;
mod sidebar;
mod vote_buttons;

pub use answers::AnswerSection;
pub use button::{Button, ButtonVariant};
pub use comments::CommentSection;
pub use header::Header;
pub use input::{Input, TextArea};
pub use pagination::Pagination;
pub use question_card::QuestionCard;
pub use question_form::QuestionForm;
pub use sidebar::Sidebar;
pub use vote_buttons::VoteButtons;
