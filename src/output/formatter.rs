use std::io::IsTerminal;
use std::time::Duration;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::bank::QuestionBank;
use crate::scoring::{Assessment, ScoreBand, SkillStatus, Verdict};

const LABEL_WIDTH: usize = 22;
const DEFAULT_BAR_WIDTH: usize = 20;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Bar width that fits next to a label and score on this terminal
fn bar_width() -> usize {
    match get_terminal_width() {
        Some(w) if w < LABEL_WIDTH + 30 => 10,
        _ => DEFAULT_BAR_WIDTH,
    }
}

/// Format a 0-100 score as a whole number, halves rounding up
pub fn format_score(score: f64) -> String {
    format!("{}", score.round() as i64)
}

/// Render a score as a fixed-width bar of filled and empty blocks
pub fn score_bar(score: f64, width: usize) -> String {
    let ratio = (score / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// Format an elapsed duration to whole seconds ("4m 12s")
pub fn format_elapsed(elapsed: Duration) -> String {
    humantime::format_duration(Duration::from_secs(elapsed.as_secs())).to_string()
}

fn colorize_band(text: &str, score: f64, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match ScoreBand::of(score) {
        ScoreBand::Strong => text.green().to_string(),
        ScoreBand::Fair => text.yellow().to_string(),
        ScoreBand::Weak => text.red().to_string(),
    }
}

fn verdict_marker(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Yes => "✅",
        Verdict::Maybe => "🤔",
        Verdict::No => "❌",
    }
}

fn status_marker(status: SkillStatus) -> &'static str {
    match status {
        SkillStatus::Good => "✅",
        SkillStatus::NeedsWork => "🚧",
        SkillStatus::Critical => "❌",
    }
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().underline().to_string()
    } else {
        text.to_string()
    }
}

fn score_line(label: &str, score: f64, width: usize, use_colors: bool) -> String {
    let bar = colorize_band(&score_bar(score, width), score, use_colors);
    let value = colorize_band(&format!("{:>3}", format_score(score)), score, use_colors);
    format!("  {:<w$} {} {}", label, value, bar, w = LABEL_WIDTH)
}

/// Format the full results report: verdict, scores, WISCAR breakdown,
/// skill gaps, careers and the learning path.
pub fn format_report(
    bank: &QuestionBank,
    assessment: &Assessment,
    answered: usize,
    elapsed: Option<Duration>,
    use_colors: bool,
) -> String {
    let width = bar_width();
    let scores = &assessment.scores;
    let rec = &assessment.recommendation;
    let mut lines = Vec::new();

    let title = if use_colors {
        bank.title.bold().to_string()
    } else {
        bank.title.clone()
    };
    lines.push(title);
    lines.push(String::new());

    let verdict = format!("{} {}", verdict_marker(rec.verdict), rec.verdict);
    let verdict = if use_colors {
        match rec.verdict {
            Verdict::Yes => verdict.green().bold().to_string(),
            Verdict::Maybe => verdict.yellow().bold().to_string(),
            Verdict::No => verdict.red().bold().to_string(),
        }
    } else {
        verdict
    };
    lines.push(format!(
        "Verdict: {}  (confidence {}%)",
        verdict,
        format_score(rec.confidence)
    ));
    lines.push(rec.verdict.summary().to_string());
    lines.push(String::new());

    lines.push(heading("Scores", use_colors));
    lines.push(score_line("Psychological Fit", scores.psychometric, width, use_colors));
    lines.push(score_line("Technical Readiness", scores.technical, width, use_colors));
    lines.push(score_line("WISCAR Score", scores.framework.mean(), width, use_colors));
    lines.push(score_line("Overall Readiness", scores.overall, width, use_colors));
    lines.push(String::new());

    lines.push(heading("WISCAR Breakdown", use_colors));
    for (category, value) in scores.framework.iter() {
        lines.push(score_line(category.label(), value, width, use_colors));
    }

    if !assessment.skills.is_empty() {
        lines.push(String::new());
        lines.push(heading("Skill Gap Analysis", use_colors));
        for gap in &assessment.skills {
            let status = gap.status.label();
            let status = if use_colors {
                match gap.status {
                    SkillStatus::Good => status.green().to_string(),
                    SkillStatus::NeedsWork => status.yellow().to_string(),
                    SkillStatus::Critical => status.red().to_string(),
                }
            } else {
                status.to_string()
            };
            lines.push(format!(
                "  {} {:<w$} current {:>3}% | required {:>3}%  {}",
                status_marker(gap.status),
                gap.name,
                format_score(gap.current),
                format_score(gap.required),
                status,
                w = LABEL_WIDTH
            ));
        }
    }

    let guidance = &bank.guidance;
    if !guidance.careers.is_empty() {
        lines.push(String::new());
        lines.push(heading("Recommended Career Paths", use_colors));
        for career in &guidance.careers {
            let role = if use_colors {
                career.role.cyan().to_string()
            } else {
                career.role.clone()
            };
            lines.push(format!("  {}: {}", role, career.description));
            if !career.requirements.is_empty() {
                lines.push(format!("    requires: {}", career.requirements.join(", ")));
            }
        }
    }

    if !guidance.learning_path.is_empty() {
        lines.push(String::new());
        lines.push(heading("Your Learning Path", use_colors));
        for (i, stage) in guidance.learning_path.iter().enumerate() {
            lines.push(format!(
                "  {}. {} ({}): {}",
                i + 1,
                stage.stage,
                stage.duration,
                stage.topics.join(", ")
            ));
        }
    }

    lines.push(String::new());
    let mut footer = format!(
        "Assessed {} | {} of {} questions answered",
        chrono::Local::now().format("%Y-%m-%d %H:%M"),
        answered,
        bank.total_questions()
    );
    if let Some(elapsed) = elapsed {
        footer.push_str(&format!(" in {}", format_elapsed(elapsed)));
    }
    lines.push(if use_colors {
        footer.dimmed().to_string()
    } else {
        footer
    });

    lines.join("\n")
}

/// List every section and question with the ids `score --answer` expects
pub fn format_bank(bank: &QuestionBank, use_colors: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} ({} questions)",
        bank.title,
        bank.total_questions()
    ));

    for (i, section) in bank.sections.iter().enumerate() {
        lines.push(String::new());
        let header = format!("{}. {} [{}]", i + 1, section.title, section.role.label());
        lines.push(if use_colors {
            header.bold().to_string()
        } else {
            header
        });

        if section.questions.is_empty() {
            lines.push(format!("   {}", section.description));
            continue;
        }

        for question in &section.questions {
            let id = if use_colors {
                question.id.cyan().to_string()
            } else {
                question.id.clone()
            };
            match question.category {
                Some(category) => lines.push(format!("   {} ({}): {}", id, category, question.prompt)),
                None => lines.push(format!("   {}: {}", id, question.prompt)),
            }
            for option in &question.options {
                lines.push(format!(
                    "      {} = {} ({})",
                    option.id,
                    option.text,
                    format_score(option.value)
                ));
            }
        }
    }

    lines.join("\n")
}
