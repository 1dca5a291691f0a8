//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::Classification;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, List, ListItem, Paragraph, Row, Table},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(62), // Left: results + suggestions
            Constraint::Percentage(38), // Right: clues + messages
        ])
        .split(chunks[1]);

    render_left_panel(f, app, main_chunks[0]);
    render_right_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn classification_style(class: Classification) -> Style {
    match class {
        Classification::Correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Classification::Partial => Style::default().fg(Color::Yellow),
        Classification::Wrong => Style::default().fg(Color::Red),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("🎵 RESONATOR-DLE — {} Mode", app.mode.label());
    let header = Paragraph::new(title)
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

fn render_left_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Result table
            Constraint::Length(9), // Suggestions
        ])
        .split(area);

    render_results(f, app, chunks[0]);
    render_suggestions(f, app, chunks[1]);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        "Resonator",
        "Weapon",
        "Attribute",
        "Nation",
        "Boss Material",
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    // Newest guess on top
    let rows: Vec<Row> = app
        .history
        .iter()
        .rev()
        .map(|h| {
            Row::new(vec![
                Cell::from(h.entry.name.clone()).style(classification_style(h.row.name)),
                Cell::from(h.entry.weapon.clone()).style(classification_style(h.row.weapon)),
                Cell::from(h.entry.attribute.clone())
                    .style(classification_style(h.row.attribute)),
                Cell::from(h.entry.nation.clone()).style(classification_style(h.row.nation)),
                Cell::from(h.entry.boss_material.clone())
                    .style(classification_style(h.row.boss_material)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(20),
        Constraint::Percentage(16),
        Constraint::Percentage(16),
        Constraint::Percentage(20),
        Constraint::Percentage(28),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!(" Guesses ({}) ", app.game.guess_count()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(table, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = app
        .suggestions
        .indices()
        .iter()
        .take(visible.max(1))
        .enumerate()
        .map(|(i, &roster_index)| {
            let name = app
                .game
                .roster()
                .get(roster_index)
                .map_or("?", |e| e.name.as_str());

            let style = if app.suggestions.cursor() == Some(i) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(format!(" {name}")).style(style)
        })
        .collect();

    let title = format!(" Suggestions ({}) ", app.suggestions.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_right_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Clues
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_clues(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_clues(f: &mut Frame, app: &App, area: Rect) {
    let guess_count = app.game.guess_count();

    let lines: Vec<Line> = app
        .game
        .clue_slots()
        .iter()
        .map(|slot| {
            let kind = slot.kind();
            if let Some(text) = app.game.clue_content(kind) {
                Line::from(vec![
                    Span::styled(
                        format!("🔓 {}: ", kind.label()),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        text.to_string(),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else if slot.is_unlocked() {
                Line::from(Span::styled(
                    format!("🔑 {} — ready", kind.label()),
                    Style::default().fg(Color::Yellow),
                ))
            } else {
                Line::from(Span::styled(
                    format!(
                        "🔒 {} (unlocks in {})",
                        kind.label(),
                        slot.remaining(guess_count)
                    ),
                    Style::default().fg(Color::DarkGray),
                ))
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Clues (1-3 to reveal) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Solved => (
            " 🎉 SOLVED! | Press 'n' for new round or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type a name, ↑/↓ to pick, Enter to guess | ESC clears ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.mode.label())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = Paragraph::new(format!("Rounds won: {}", app.stats.rounds_won))
        .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let guesses = Paragraph::new(format!("Guesses: {}", app.game.guess_count()))
        .alignment(Alignment::Center);
    f.render_widget(guesses, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::Solved => "n: New Round | q: Quit",
        InputMode::Guessing => "Ctrl+N: New | Tab: Mode | Ctrl+C: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
