use std::sync::Arc;
use std::time::Instant;

use crate::bank::{Question, QuestionBank, Section};

use super::responses::{Response, ResponseSet};

/// Position inside the bank: section index plus question index within it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub section: usize,
    pub question: usize,
}

/// Outcome of trying to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    /// Advanced past the last question of the last section
    Completed,
    /// Current question has no answer yet
    Blocked,
}

/// Everything one pass through the questionnaire needs.
///
/// The bank is shared and read-only; responses and the cursor change only
/// through the methods below.
#[derive(Debug, Clone)]
pub struct Session {
    bank: Arc<QuestionBank>,
    responses: ResponseSet,
    cursor: Cursor,
    complete: bool,
    started_at: Instant,
}

impl Session {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            responses: ResponseSet::new(),
            cursor: Cursor::default(),
            complete: false,
            started_at: Instant::now(),
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.bank.sections.get(self.cursor.section)
    }

    /// None while on an informational section
    pub fn current_question(&self) -> Option<&Question> {
        self.current_section()
            .and_then(|s| s.questions.get(self.cursor.question))
    }

    pub fn current_response(&self) -> Option<&Response> {
        self.current_question()
            .and_then(|q| self.responses.get(&q.id))
    }

    /// Record `option_id` as the answer to the current question.
    /// Returns false when there is no current question or the option is unknown.
    pub fn select(&mut self, option_id: &str) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        let Some(option) = question.option(option_id) else {
            tracing::debug!(question = %question.id, option = option_id, "unknown option ignored");
            return false;
        };
        let (qid, oid, value) = (question.id.clone(), option.id.clone(), option.value);
        self.responses.record(&qid, &oid, value);
        tracing::debug!(question = %qid, option = %oid, value, "answer recorded");
        true
    }

    /// Record the option at `index` (0-based) of the current question.
    pub fn select_index(&mut self, index: usize) -> bool {
        let Some(option_id) = self
            .current_question()
            .and_then(|q| q.options.get(index))
            .map(|o| o.id.clone())
        else {
            return false;
        };
        self.select(&option_id)
    }

    /// Record an answer for any question in the bank, wherever the cursor is.
    pub fn answer(&mut self, question_id: &str, option_id: &str) -> bool {
        let Some((_, question)) = self.bank.find_question(question_id) else {
            return false;
        };
        let Some(option) = question.option(option_id) else {
            return false;
        };
        let value = option.value;
        self.responses.record(question_id, option_id, value);
        true
    }

    /// Informational sections always allow advancing; question sections need an answer.
    pub fn can_go_next(&self) -> bool {
        if self.complete {
            return false;
        }
        self.current_question().is_none() || self.current_response().is_some()
    }

    pub fn can_go_previous(&self) -> bool {
        !self.complete && (self.cursor.section > 0 || self.cursor.question > 0)
    }

    pub fn next(&mut self) -> Step {
        if self.complete {
            return Step::Completed;
        }
        if !self.can_go_next() {
            return Step::Blocked;
        }

        let section_len = self
            .current_section()
            .map(|s| s.questions.len())
            .unwrap_or(0);

        if self.cursor.question + 1 < section_len {
            self.cursor.question += 1;
            Step::Moved
        } else if self.cursor.section + 1 < self.bank.sections.len() {
            self.cursor.section += 1;
            self.cursor.question = 0;
            Step::Moved
        } else {
            self.complete = true;
            tracing::debug!(answered = self.responses.len(), "assessment complete");
            Step::Completed
        }
    }

    /// Step back one question, wrapping to the end of the previous section.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }

        if self.cursor.question > 0 {
            self.cursor.question -= 1;
        } else {
            self.cursor.section -= 1;
            let prev_len = self.bank.sections[self.cursor.section].questions.len();
            self.cursor.question = prev_len.saturating_sub(1);
        }
        true
    }

    /// Answered share of all questions, 0-100.
    pub fn progress(&self) -> f64 {
        let total = self.bank.total_questions();
        if total == 0 {
            return 0.0;
        }
        let answered = self
            .responses
            .iter()
            .filter(|r| self.bank.find_question(&r.question_id).is_some())
            .count();
        (answered as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
    }

    /// 1-based position of the current question across the whole bank.
    pub fn question_number(&self) -> Option<usize> {
        self.current_question()?;
        let before: usize = self.bank.sections[..self.cursor.section]
            .iter()
            .map(|s| s.questions.len())
            .sum();
        Some(before + self.cursor.question + 1)
    }

    pub fn total_questions(&self) -> usize {
        self.bank.total_questions()
    }

    /// Start timing from now, e.g. when the first section is actually shown.
    pub fn reset_clock(&mut self) {
        self.started_at = Instant::now();
    }

    /// Discard all answers and start over from the first section.
    pub fn restart(&mut self) {
        self.responses.clear();
        self.cursor = Cursor::default();
        self.complete = false;
        self.started_at = Instant::now();
    }
}
