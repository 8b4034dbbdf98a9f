//! TUI rendering with ratatui
//!
//! Scramble, checklist and progress panels for the jumble game.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{checklist_lines, spaced};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 JUMBLE - Find the hidden words")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    render_scramble(f, app, chunks[0]);
    render_checklist(f, app, chunks[1]);
}

fn render_scramble<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let block = Block::default()
        .title(" Scramble ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = app.session.state().map_or_else(
        || vec![Line::from("No game in progress. Press Ctrl-N to start.")],
        |state| {
            let letters = Span::styled(
                spaced(&state.scramble().to_uppercase()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
            let mut lines = vec![Line::from(""), Line::from(letters)];
            if app.input_mode == InputMode::Completed {
                lines.push(Line::from(Span::styled(
                    format!("Answer: {}", state.original().to_uppercase()),
                    Style::default().fg(Color::Green),
                )));
            }
            lines
        },
    );

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn render_checklist<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .state()
        .map(|state| {
            checklist_lines(state)
                .into_iter()
                .map(|line| {
                    let style = if line.starts_with('✓') {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    ListItem::new(line).style(style)
                })
                .collect()
        })
        .unwrap_or_default();

    let list = List::new(items).block(
        Block::default()
            .title(" Hidden Words ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_info_panel<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_progress<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let (found, total) = app
        .session
        .state()
        .map_or((0, 0), |state| (state.found_count(), state.sub_words().len()));
    let percent = if total == 0 {
        0
    } else {
        (found * 100 / total).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{found}/{total} words"));

    f.render_widget(gauge, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Completed => (
            " 🎉 ALL WORDS FOUND! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Playing => (
            " Type a word and press Enter | TAB to reshuffle ",
            app.session.guess(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(60),
        ])
        .split(area);

    let settings_text = format!(
        "Length: {} | Min: {}",
        app.settings.length,
        app.settings
            .min_length
            .unwrap_or(crate::core::DEFAULT_MIN_LENGTH)
    );
    let settings = Paragraph::new(settings_text).alignment(Alignment::Center);
    f.render_widget(settings, chunks[0]);

    let stats_text = format!(
        "Games: {} | Solved: {}",
        app.stats.games_started, app.stats.games_completed
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Completed => "q: Quit | n: New Game",
        InputMode::Playing => "Esc: Quit | Ctrl-N: New Game | Enter: Submit | TAB: Shuffle",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
