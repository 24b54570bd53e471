pub mod answers;
pub mod navigator;
pub mod responses;

pub use answers::{apply_answers, parse_answer, AnswerError};
pub use navigator::{Cursor, Session, Step};
pub use responses::{Response, ResponseSet};
