//! TUI rendering with ratatui
//!
//! The board is redrawn from the session every frame: submitted rows come from
//! the session's attempts, the active row from the app's input row.

use super::app::{App, InputMode, MessageStyle, Statistics};
use crate::core::Mark;
use crate::game::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Input hint
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Tile color for a mark
#[must_use]
pub const fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::Exact => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    }
}

fn tile(letter: Option<char>, bg: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.unwrap_or('·')),
        Style::default()
            .fg(Color::White)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )
}

/// One line per board row
#[must_use]
pub fn board_lines(app: &App) -> Vec<Line<'static>> {
    let session = &app.session;
    let active = session.current_row_index();
    let mut lines = Vec::with_capacity(session.max_guesses() * 2);

    for row_index in 0..session.max_guesses() {
        let mut spans = Vec::with_capacity(session.word_length() * 2);

        if let Some(attempt) = session.attempts().get(row_index) {
            for (letter, &mark) in attempt.guess.letters().iter().zip(attempt.feedback.marks()) {
                spans.push(tile(Some(letter.as_char()), mark_color(mark)));
                spans.push(Span::raw(" "));
            }
        } else if row_index == active && session.phase() == Phase::InProgress {
            for cell in app.row.cells() {
                spans.push(tile(cell.map(|l| l.as_char()), Color::Blue));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..session.word_length() {
                spans.push(tile(None, Color::Black));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "WORDLY - {} letters, {} guesses",
        app.session.word_length(),
        app.session.max_guesses()
    );
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

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let distribution = distribution_lines(&app.stats, app.session.max_guesses());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(distribution.len() as u16 + 2),
            Constraint::Min(4), // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_distribution(f, distribution, chunks[1]);
    render_messages(f, app, chunks[2]);
}

/// One bar per guess count, covering at least `max_guesses` rows
#[must_use]
pub fn distribution_lines(stats: &Statistics, max_guesses: usize) -> Vec<String> {
    let rows = max_guesses.max(stats.guess_distribution.len().saturating_sub(1));
    let peak = stats.guess_distribution.iter().copied().max().unwrap_or(0);

    (1..=rows)
        .map(|guesses| {
            let count = stats.guess_distribution.get(guesses).copied().unwrap_or(0);
            let width = if peak == 0 { 0 } else { (count * 10).div_ceil(peak) };
            format!("{guesses:>2} {} {count}", "█".repeat(width))
        })
        .collect()
}

fn render_distribution(f: &mut Frame, lines: Vec<String>, area: Rect) {
    let items: Vec<ListItem> = lines
        .into_iter()
        .map(|line| ListItem::new(line).style(Style::default().fg(Color::Green)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.current_row_index();
    let max = app.session.max_guesses();
    let percent = (used * 100 / max).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{max}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Typing => (
            " A-Z: type | Backspace: erase | Enter: submit | Ctrl-R: reveal ",
            Color::Yellow,
        ),
        InputMode::GameOver => (" Game over | y: play again | n: quit ", Color::Green),
        InputMode::Revealed => (" Secret revealed | y: play again | n: quit ", Color::Cyan),
    };

    let content: String = app
        .row
        .cells()
        .iter()
        .map(|cell| cell.map_or('_', |l| l.as_char()))
        .collect();

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
    let stats = &app.stats;
    let status = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}% | Ctrl-N: New Game | Esc: Quit",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );

    let paragraph = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}
