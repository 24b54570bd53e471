//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::config::ThemeMode;
use crate::scoring::{ScoreBand, SkillStatus, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Pick a theme, probing the terminal background when the mode is `auto`.
pub fn resolve_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::Dark,
        ThemeMode::Light => Theme::Light,
        ThemeMode::Auto => match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Theme::Light,
            Ok(_) => Theme::Dark,
            Err(e) => {
                tracing::debug!("could not detect terminal background: {}", e);
                Theme::Dark
            }
        },
    }
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Score bands (traffic light pattern)
    pub score_strong: Color,
    pub score_fair: Color,
    pub score_weak: Color,
    pub bar_empty: Color,

    // General colors
    pub muted: Color,
    pub title_color: Color,
    pub accent: Color,
    pub text: Color,

    // Question card
    pub option_selected: Style,
    pub option_highlight: Style,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
}

impl ThemeColors {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            score_strong: Color::Green,
            score_fair: Color::Yellow,
            score_weak: Color::Red,
            bar_empty: Color::DarkGray,
            muted: Color::Gray,
            title_color: Color::Cyan,
            accent: Color::Magenta,
            text: Color::White,
            option_selected: Style::new().fg(Color::Cyan).bold(),
            option_highlight: Style::new().reversed(),
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
        }
    }

    pub fn light() -> Self {
        Self {
            score_strong: Color::Rgb(0, 128, 0),
            score_fair: Color::Rgb(176, 112, 0),
            score_weak: Color::Rgb(180, 0, 0),
            bar_empty: Color::Indexed(250),
            muted: Color::DarkGray,
            title_color: Color::Blue,
            accent: Color::Magenta,
            text: Color::Black,
            option_selected: Style::new().fg(Color::Blue).bold(),
            option_highlight: Style::new().reversed(),
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(0, 128, 0),
            flash_error: Color::Rgb(180, 0, 0),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
        }
    }

    /// Color for a 0-100 score by band
    pub fn score_color(&self, score: f64) -> Color {
        match ScoreBand::of(score) {
            ScoreBand::Strong => self.score_strong,
            ScoreBand::Fair => self.score_fair,
            ScoreBand::Weak => self.score_weak,
        }
    }

    pub fn verdict_color(&self, verdict: Verdict) -> Color {
        match verdict {
            Verdict::Yes => self.score_strong,
            Verdict::Maybe => self.score_fair,
            Verdict::No => self.score_weak,
        }
    }

    pub fn status_color(&self, status: SkillStatus) -> Color {
        match status {
            SkillStatus::Good => self.score_strong,
            SkillStatus::NeedsWork => self.score_fair,
            SkillStatus::Critical => self.score_weak,
        }
    }
}
