use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::bank::QuestionBank;
use crate::scoring::{assess, Assessment, FrameworkAggregation};
use crate::session::{Session, Step};
use crate::tui::theme::ThemeColors;

const FLASH_SECS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Assessment,
    /// Score preview shown right after the last question
    Complete,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Help,
}

pub struct App {
    pub session: Session,
    pub aggregation: FrameworkAggregation,
    pub screen: Screen,
    pub input_mode: InputMode,
    /// Option under the cursor on the current question card
    pub highlighted: usize,
    pub results_scroll: u16,
    pub flash_message: Option<(String, Instant)>,
    pub assessment: Option<Assessment>,
    pub finished_in: Option<Duration>,
    pub should_quit: bool,
    pub colors: ThemeColors,
}

impl App {
    pub fn new(bank: Arc<QuestionBank>, aggregation: FrameworkAggregation, colors: ThemeColors) -> Self {
        Self {
            session: Session::new(bank),
            aggregation,
            screen: Screen::Home,
            input_mode: InputMode::Normal,
            highlighted: 0,
            results_scroll: 0,
            flash_message: None,
            assessment: None,
            finished_in: None,
            should_quit: false,
            colors,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        self.session.bank()
    }

    /// Leave the home screen and begin the assessment; time on the home
    /// screen doesn't count towards the completion time.
    pub fn start(&mut self) {
        self.session.reset_clock();
        self.screen = Screen::Assessment;
        self.sync_highlight();
    }

    /// Point the highlight at the recorded answer, or the first option
    fn sync_highlight(&mut self) {
        self.highlighted = match (self.session.current_question(), self.session.current_response()) {
            (Some(q), Some(r)) => q.options.iter().position(|o| o.id == r.option_id).unwrap_or(0),
            _ => 0,
        };
    }

    fn option_count(&self) -> usize {
        self.session
            .current_question()
            .map(|q| q.options.len())
            .unwrap_or(0)
    }

    pub fn next_option(&mut self) {
        let count = self.option_count();
        if count == 0 {
            return;
        }
        self.highlighted = if self.highlighted + 1 >= count { 0 } else { self.highlighted + 1 };
    }

    pub fn previous_option(&mut self) {
        let count = self.option_count();
        if count == 0 {
            return;
        }
        self.highlighted = if self.highlighted == 0 { count - 1 } else { self.highlighted - 1 };
    }

    /// Answer the current question with the highlighted option
    pub fn select_highlighted(&mut self) {
        let index = self.highlighted;
        self.select_index(index);
    }

    /// Answer the current question with option `index` (0-based)
    pub fn select_index(&mut self, index: usize) {
        if self.session.select_index(index) {
            self.highlighted = index;
        }
    }

    /// Enter on the question card: answer with the highlight, advancing when
    /// that option was already the recorded answer.
    pub fn confirm(&mut self) {
        if self.session.current_question().is_none() {
            self.go_next();
            return;
        }
        let already_chosen = match (self.session.current_question(), self.session.current_response()) {
            (Some(q), Some(r)) => q.options.get(self.highlighted).map(|o| o.id == r.option_id).unwrap_or(false),
            _ => false,
        };
        if already_chosen {
            self.go_next();
        } else {
            self.select_highlighted();
        }
    }

    pub fn go_next(&mut self) {
        match self.session.next() {
            Step::Moved => self.sync_highlight(),
            Step::Completed => self.complete(),
            Step::Blocked => self.show_flash("Select an answer to continue".to_string()),
        }
    }

    pub fn go_previous(&mut self) {
        if self.session.previous() {
            self.sync_highlight();
        }
    }

    fn complete(&mut self) {
        let assessment = assess(self.session.bank(), self.session.responses(), self.aggregation);
        self.finished_in = Some(self.session.started_at().elapsed());
        self.assessment = Some(assessment);
        self.screen = Screen::Complete;
    }

    /// Scores for display; a session that never completed scores as empty.
    pub fn current_assessment(&self) -> Assessment {
        match &self.assessment {
            Some(a) => a.clone(),
            None => assess(self.session.bank(), self.session.responses(), self.aggregation),
        }
    }

    pub fn view_results(&mut self) {
        self.results_scroll = 0;
        self.screen = Screen::Results;
    }

    /// Throw the session away and return to the home screen
    pub fn retake(&mut self) {
        self.session.restart();
        self.assessment = None;
        self.finished_in = None;
        self.highlighted = 0;
        self.results_scroll = 0;
        self.screen = Screen::Home;
        self.show_flash("Responses cleared".to_string());
    }

    pub fn scroll_down(&mut self) {
        self.results_scroll = self.results_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.results_scroll = self.results_scroll.saturating_sub(1);
    }

    pub fn open_learn_more(&mut self) {
        let Some(url) = self.bank().learn_more_url.clone() else {
            self.show_flash("No learn-more link for this assessment".to_string());
            return;
        };
        match crate::browser::open_learn_more(&url) {
            Ok(()) => self.show_flash(format!("Opened: {}", url)),
            Err(e) => self.show_flash(format!("Failed to open browser: {}", e)),
        }
    }

    pub fn update_flash(&mut self) {
        if let Some((_, timestamp)) = self.flash_message {
            if timestamp.elapsed().as_secs() >= FLASH_SECS {
                self.flash_message = None;
            }
        }
    }

    pub fn show_flash(&mut self, msg: String) {
        self.flash_message = Some((msg, Instant::now()));
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn dismiss_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
