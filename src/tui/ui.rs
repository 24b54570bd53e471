use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Gauge, Paragraph, Wrap};

use crate::output::format_score;
use crate::scoring::Assessment;
use crate::tui::app::{App, InputMode, Screen};
use crate::tui::theme::ThemeColors;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 12 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    match app.screen {
        Screen::Home => render_home(frame, chunks[1], app),
        Screen::Assessment => render_assessment(frame, chunks[1], app),
        Screen::Complete => render_complete(frame, chunks[1], app),
        Screen::Results => render_results(frame, chunks[1], app),
    }
    render_status_bar(frame, chunks[2], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let mut spans = vec![Span::styled(
        app.bank().title.clone(),
        Style::default().fg(colors.title_color).bold(),
    )];

    if app.screen == Screen::Assessment {
        let progress = format!("{}% answered", format_score(app.session.progress()));
        let padding = (area.width as usize).saturating_sub(app.bank().title.chars().count() + progress.len());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(progress, Style::default().fg(colors.muted)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let bank = app.bank();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(bank.title.clone(), Style::default().fg(colors.title_color).bold())),
        Line::from(""),
        Line::from(Span::styled(bank.tagline.clone(), Style::default().fg(colors.muted))),
        Line::from(""),
    ];

    for feature in &bank.features {
        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", feature.headline), Style::default().fg(colors.accent).bold()),
            Span::raw(feature.text.clone()),
        ]));
    }

    if !bank.stats.is_empty() {
        lines.push(Line::from(""));
        let mut spans = Vec::new();
        for (i, stat) in bank.stats.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("   |   ", Style::default().fg(colors.muted)));
            }
            spans.push(Span::styled(stat.value.clone(), Style::default().fg(colors.text).bold()));
            spans.push(Span::styled(format!(" {}", stat.label), Style::default().fg(colors.muted)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "{} questions across {} sections",
            bank.total_questions(),
            bank.sections.iter().filter(|s| !s.is_info()).count()
        ),
        Style::default().fg(colors.muted),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", Style::default().fg(colors.status_key_color).bold()),
        Span::raw(" to start the assessment"),
    ]));

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, area);
}

fn render_assessment(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let Some(section) = app.session.current_section() else {
        return;
    };

    // Section header(2) + Progress gauge(1) + gap(1) + Card(fill)
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);

    let header = vec![
        Line::from(Span::styled(section.title.clone(), Style::default().fg(colors.text).bold())),
        Line::from(Span::styled(section.description.clone(), Style::default().fg(colors.muted))),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let progress = app.session.progress();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(colors.title_color).bg(colors.bar_empty))
        .ratio((progress / 100.0).clamp(0.0, 1.0))
        .label(format!("Progress {}%", format_score(progress)));
    frame.render_widget(gauge, chunks[1]);

    match app.session.current_question() {
        None => render_info_card(frame, chunks[3], app),
        Some(_) => render_question_card(frame, chunks[3], app),
    }
}

fn render_info_card(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let Some(section) = app.session.current_section() else {
        return;
    };

    let mut lines = Vec::new();
    for block in &section.details {
        lines.push(Line::from(Span::styled(block.heading.clone(), Style::default().fg(colors.accent).bold())));
        for text in &block.lines {
            if block.lines.len() > 1 {
                lines.push(Line::from(format!("  • {}", text)));
            } else {
                lines.push(Line::from(text.clone()));
            }
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled("n", Style::default().fg(colors.status_key_color).bold()),
        Span::raw(" / "),
        Span::styled("Enter", Style::default().fg(colors.status_key_color).bold()),
        Span::raw(" to continue"),
    ]));

    let card = Paragraph::new(lines)
        .block(Block::bordered().border_style(Style::default().fg(colors.muted)))
        .wrap(Wrap { trim: false });
    frame.render_widget(card, area);
}

fn render_question_card(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let Some(question) = app.session.current_question() else {
        return;
    };
    let chosen = app.session.current_response().map(|r| r.option_id.as_str());

    let title = match app.session.question_number() {
        Some(n) => format!(" Question {} of {} ", n, app.session.total_questions()),
        None => String::new(),
    };

    let mut lines = vec![
        Line::from(Span::styled(question.prompt.clone(), Style::default().fg(colors.text).bold())),
        Line::from(""),
    ];

    for (i, option) in question.options.iter().enumerate() {
        let is_chosen = chosen == Some(option.id.as_str());
        let marker = if is_chosen { "●" } else { "○" };
        let mut style = if is_chosen {
            colors.option_selected
        } else {
            Style::default().fg(colors.text)
        };
        if i == app.highlighted {
            style = style.patch(colors.option_highlight);
        }
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", i + 1), Style::default().fg(colors.muted)),
            Span::styled(format!("{} {} ", marker, option.text), style),
        ]));
    }

    if !app.session.can_go_next() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Choose an answer to continue",
            Style::default().fg(colors.muted).italic(),
        )));
    }

    let card = Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(title)
                .border_style(Style::default().fg(colors.popup_border)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(card, area);
}

fn render_score_card(frame: &mut Frame, area: Rect, colors: &ThemeColors, title: &str, description: &str, score: f64) {
    let color = colors.score_color(score);
    let block = Block::bordered()
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(colors.muted));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format_score(score), Style::default().fg(color).bold()),
            Span::styled("/100", Style::default().fg(colors.muted)),
        ])),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(description.to_string()).style(Style::default().fg(colors.muted)),
        rows[1],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(color).bg(colors.bar_empty))
            .ratio((score / 100.0).clamp(0.0, 1.0))
            .label(""),
        rows[2],
    );
}

/// The four headline scores in a 2x2 grid
fn render_score_grid(frame: &mut Frame, area: Rect, colors: &ThemeColors, assessment: &Assessment) {
    let scores = &assessment.scores;
    let rows = Layout::vertical([Constraint::Length(5), Constraint::Length(5)]).split(area);
    let top = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(rows[0]);
    let bottom = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(rows[1]);

    render_score_card(frame, top[0], colors, "Psychological Fit", "Personality & motivation", scores.psychometric);
    render_score_card(frame, top[1], colors, "Technical Readiness", "Programming aptitude", scores.technical);
    render_score_card(frame, bottom[0], colors, "WISCAR Score", "Multi-dimensional readiness", scores.framework.mean());
    render_score_card(frame, bottom[1], colors, "Overall Readiness", "Combined assessment", scores.overall);
}

fn render_complete(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let assessment = app.current_assessment();

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(10),
        Constraint::Fill(1),
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Assessment Complete!", Style::default().fg(colors.title_color).bold())),
            Line::from(Span::styled("Here's a preview of your scores", Style::default().fg(colors.muted))),
        ]),
        chunks[0],
    );
    render_score_grid(frame, chunks[1], colors, &assessment);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", Style::default().fg(colors.status_key_color).bold()),
            Span::raw(" for detailed results"),
        ]))
        .alignment(Alignment::Center),
        chunks[2],
    );
}

fn bar_spans(score: f64, width: usize, colors: &ThemeColors) -> Vec<Span<'static>> {
    let filled = ((score / 100.0).clamp(0.0, 1.0) * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    vec![
        Span::styled("█".repeat(filled), Style::default().fg(colors.score_color(score))),
        Span::styled("░".repeat(empty), Style::default().fg(colors.bar_empty)),
    ]
}

fn section_heading(text: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(colors.accent).bold()))
}

fn results_lines(app: &App, assessment: &Assessment) -> Vec<Line<'static>> {
    let colors = &app.colors;
    let bank = app.bank();
    let scores = &assessment.scores;
    let rec = &assessment.recommendation;
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::raw("Verdict: "),
        Span::styled(
            rec.verdict.label().to_string(),
            Style::default().fg(colors.verdict_color(rec.verdict)).bold(),
        ),
        Span::styled(
            format!("   confidence {}%", format_score(rec.confidence)),
            Style::default().bold(),
        ),
    ]));
    lines.push(Line::from(rec.verdict.summary().to_string()));
    lines.push(Line::from(""));

    lines.push(section_heading("WISCAR Framework Breakdown", colors));
    for (category, value) in scores.framework.iter() {
        let mut spans = vec![Span::raw(format!("  {:<16}{:>4}% ", category.label(), format_score(value)))];
        spans.extend(bar_spans(value, 20, colors));
        lines.push(Line::from(spans));
    }

    if !assessment.skills.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_heading("Skill Gap Analysis", colors));
        for gap in &assessment.skills {
            lines.push(Line::from(vec![
                Span::raw(format!("  {:<22}", gap.name)),
                Span::styled(
                    format!("current {:>3}% | required {:>3}%  ", format_score(gap.current), format_score(gap.required)),
                    Style::default().fg(colors.muted),
                ),
                Span::styled(gap.status.label().to_string(), Style::default().fg(colors.status_color(gap.status)).bold()),
            ]));
        }
    }

    if !bank.guidance.careers.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_heading("Recommended Career Paths", colors));
        for career in &bank.guidance.careers {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", career.role), Style::default().fg(colors.title_color).bold()),
                Span::raw(format!("  {}", career.description)),
            ]));
            if !career.requirements.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    requires: {}", career.requirements.join(", ")),
                    Style::default().fg(colors.muted),
                )));
            }
        }
    }

    if !bank.guidance.learning_path.is_empty() {
        lines.push(Line::from(""));
        lines.push(section_heading("Your Learning Path", colors));
        for (i, stage) in bank.guidance.learning_path.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}. {}", i + 1, stage.stage), Style::default().bold()),
                Span::styled(format!(" ({})", stage.duration), Style::default().fg(colors.muted)),
            ]));
            lines.push(Line::from(format!("     {}", stage.topics.join(", "))));
        }
    }

    if let Some(elapsed) = app.finished_in {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Completed in {}", crate::output::format_elapsed(elapsed)),
            Style::default().fg(colors.muted),
        )));
    }

    lines
}

fn render_results(frame: &mut Frame, area: Rect, app: &mut App) {
    let assessment = app.current_assessment();

    let chunks = Layout::vertical([Constraint::Length(10), Constraint::Fill(1)]).split(area);
    render_score_grid(frame, chunks[0], &app.colors, &assessment);

    let body = Paragraph::new(results_lines(app, &assessment)).wrap(Wrap { trim: false });

    // Keep scrolling within the content, counting rows added by wrapping
    let rendered = body.line_count(chunks[1].width);
    let max_scroll = u16::try_from(rendered)
        .unwrap_or(u16::MAX)
        .saturating_sub(chunks[1].height);
    if app.results_scroll > max_scroll {
        app.results_scroll = max_scroll;
    }

    frame.render_widget(body.scroll((app.results_scroll, 0)), chunks[1]);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Failed") || msg.starts_with("Select") || msg.starts_with("No ") {
            colors.flash_error
        } else {
            colors.flash_success
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints: &[(&str, &str)] = match app.screen {
            Screen::Home => &[("Enter", ":start "), ("l", ":learn more "), ("?", ":help "), ("q", ":quit")],
            Screen::Assessment => &[
                ("j/k", ":move "),
                ("1-9", ":answer "),
                ("n", ":next "),
                ("p", ":back "),
                ("?", ":help "),
                ("q", ":quit"),
            ],
            Screen::Complete => &[("Enter", ":results "), ("q", ":quit")],
            Screen::Results => &[("j/k", ":scroll "), ("r", ":retake "), ("?", ":help "), ("q", ":quit")],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(colors.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(colors.status_bar_bg)),
        area,
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect { x, y, width, height }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &App) {
    let colors = &app.colors;
    let popup_area = centered_rect_fixed(50, 15, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(" Keyboard Shortcuts ")
        .title_style(colors.popup_title)
        .border_style(Style::default().fg(colors.popup_border));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(colors.status_key_color).bold();
    let entries = [
        ("Enter         ", "Start / answer / continue"),
        ("j / Down      ", "Next option, scroll down"),
        ("k / Up        ", "Previous option, scroll up"),
        ("1-9           ", "Pick option by number"),
        ("n / Right     ", "Next question"),
        ("p / Left      ", "Previous question"),
        ("l             ", "Open learn-more page"),
        ("r             ", "Retake (on results)"),
        ("?             ", "Show/hide this help"),
        ("q / Ctrl-c    ", "Quit"),
    ];

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(key, desc)| Line::from(vec![Span::styled(*key, key_style), Span::raw(*desc)]))
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(colors.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::builtin_bank;
    use crate::scoring::FrameworkAggregation;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;

    fn render(app: &mut App) -> String {
        render_sized(app, 100, 40)
    }

    fn render_sized(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn app() -> App {
        App::new(
            Arc::new(builtin_bank()),
            FrameworkAggregation::LastWrite,
            ThemeColors::dark(),
        )
    }

    #[test]
    fn test_home_screen_renders_title() {
        let mut app = app();
        let screen = render(&mut app);
        assert!(screen.contains("Should I Learn Flutter?"));
        assert!(screen.contains("to start the assessment"));
        assert!(screen.contains("25-30 mins Assessment Time"));
        assert!(screen.contains("6+ roles Career Paths"));
    }

    #[test]
    fn test_question_card_renders() {
        let mut app = app();
        app.start();
        app.go_next();
        let screen = render(&mut app);
        assert!(screen.contains("Question 1 of 16"));
        assert!(screen.contains("Strongly agree"));
    }

    #[test]
    fn test_results_render_after_completion() {
        let mut app = app();
        app.start();
        app.go_next();
        while app.screen == Screen::Assessment {
            app.select_index(0);
            app.go_next();
        }
        let preview = render(&mut app);
        assert!(preview.contains("Assessment Complete!"));

        app.view_results();
        let screen = render(&mut app);
        assert!(screen.contains("Verdict: NO"));
        assert!(screen.contains("Overall Readiness"));
    }

    #[test]
    fn test_results_scroll_reaches_wrapped_end() {
        let mut app = app();
        app.start();
        app.go_next();
        while app.screen == Screen::Assessment {
            app.select_index(0);
            app.go_next();
        }
        app.view_results();
        for _ in 0..500 {
            app.scroll_down();
        }

        let screen = render_sized(&mut app, 60, 24);
        assert!(screen.contains("App Deployment"));
        assert!(screen.contains("Completed in"));

        // Clamped to the last page, so one step up moves the view
        let bottom = app.results_scroll;
        assert!(bottom > 0 && bottom < 500);
        app.scroll_up();
        render_sized(&mut app, 60, 24);
        assert_eq!(app.results_scroll, bottom - 1);
    }

    #[test]
    fn test_tiny_terminal() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Terminal"));
    }
}
