//! TUI rendering with ratatui
//!
//! An 8×8 grid of boards beside a detail panel for the selected board.

use super::app::{App, GRID_WIDTH, MessageStyle};
use crate::core::{LetterStatus, Pattern, Word};
use crate::game::{GameState, GameStatus, NUM_BOARDS, NUM_GUESSES};
use crate::puzzle::{Calendar, format_hours_remaining};
use crate::storage::StateStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: StateStore>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Boards
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app.session.state(), chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app.session.state(), chunks[3]);
}

fn render_header(f: &mut Frame, state: &GameState, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            state.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "   Boards complete: {}/{NUM_BOARDS}   Guesses used: {}/{NUM_GUESSES}",
            state.boards_completed(),
            state.num_guesses()
        )),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    }
}

/// Guess letters on feedback-colored backgrounds
fn feedback_spans(guess: &Word, pattern: Pattern) -> Vec<Span<'static>> {
    guess
        .text()
        .chars()
        .zip(pattern.statuses())
        .map(|(letter, status)| {
            Span::styled(
                letter.to_string(),
                Style::default()
                    .fg(Color::Black)
                    .bg(status_color(status))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

/// Content of one grid cell
fn cell_line(state: &GameState, board: usize) -> Line<'static> {
    if let Some(index) = state.solved_at(board) {
        return Line::from(Span::styled(
            format!("✓ #{}", index + 1),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if state.status().is_over() {
        return Line::from(Span::styled(
            state.targets()[board].text().to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    match state.latest_row(board) {
        Some((guess, pattern)) => Line::from(feedback_spans(guess, pattern)),
        None => Line::from(Span::styled("·····", Style::default().fg(Color::DarkGray))),
    }
}

fn render_grid<S: StateStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let state = app.session.state();
    let rows = NUM_BOARDS / GRID_WIDTH;

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_WIDTH as u32); GRID_WIDTH])
            .split(*row_area);

        for (col, cell_area) in cell_areas.iter().enumerate() {
            let board = row * GRID_WIDTH + col;
            let border_style = if board == app.selected {
                Style::default().fg(Color::Yellow)
            } else if state.is_board_solved(board) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let cell = Paragraph::new(cell_line(state, board))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .title(format!("{}", board + 1))
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
            f.render_widget(cell, *cell_area);
        }
    }
}

fn render_side_panel<S: StateStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(area);

    render_board_detail(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_board_detail<S: StateStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let state = app.session.state();
    let board = app.selected;
    let rows = state.board_rows(board);
    let reveal = state.status() == GameStatus::Lost && !state.is_board_solved(board);

    // Newest rows last; keep the tail when the panel is short
    let visible = usize::from(area.height.saturating_sub(2)).saturating_sub(usize::from(reveal));
    let skip = rows.len().saturating_sub(visible);
    let mut lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, (guess, pattern))| {
            let mut spans = vec![Span::raw(format!("{:>2} ", i + 1))];
            spans.extend(feedback_spans(guess, *pattern));
            Line::from(spans)
        })
        .collect();

    if lines.is_empty() {
        lines.push(Line::from("No guesses yet"));
    }
    if reveal {
        lines.push(Line::from(Span::styled(
            format!("Answer: {}", state.targets()[board].text()),
            Style::default().fg(Color::Red),
        )));
    }

    let detail = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Board {} ", board + 1))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(detail, area);
}

fn render_messages<S: StateStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
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

fn render_input<S: StateStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, color) = if app.session.state().status().is_over() {
        (" Game over | F2: practice puzzle ", Color::Green)
    } else {
        (" Enter a guess ", Color::Yellow)
    };

    let input = Paragraph::new(app.input_buffer.as_str())
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

fn render_status(f: &mut Frame, state: &GameState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let mode_text = if state.is_practice() {
        "Practice puzzle".to_string()
    } else {
        format!(
            "Next daily in {}",
            format_hours_remaining(Calendar::hours_until_next_now())
        )
    };
    f.render_widget(
        Paragraph::new(mode_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help = Paragraph::new("Enter: guess | Arrows: board | F2: practice | F3: daily | Esc: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
