//! UI rendering using ratatui.

use noughts_core::{Board, Cell, GameEngine, GameStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;

use super::app::{App, MenuItem, SETUP_FIELDS, Screen, SetupForm};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Draws the current screen.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let (status, help) = match app.screen() {
        Screen::Menu { selected } => {
            render_menu(f, chunks[1], *selected);
            (
                "Choose an option".to_string(),
                "↑/↓: Select | Enter: Confirm | Q: Quit",
            )
        }
        Screen::Setup(form) => {
            render_setup(f, chunks[1], form);
            (
                form.error.clone().unwrap_or_else(|| "Enter both players".to_string()),
                "Tab/↑/↓: Field | Enter: Start | Esc: Menu",
            )
        }
        Screen::Playing { cursor, message } => {
            render_board(f, chunks[1], app, Some(*cursor));
            let player = app.engine().current_player();
            let turn = format!("{}'s turn ({})", player.name(), player.symbol());
            (
                message.clone().unwrap_or(turn),
                "Arrows: Move | Enter/Space: Place | 1-9: Place | Esc: Menu",
            )
        }
        Screen::GameOver { result } => {
            render_board(f, chunks[1], app, None);
            (
                format!("Game over: {result}"),
                "R: Play again | M: Menu | Q: Quit",
            )
        }
    };

    let status_style = match app.screen() {
        Screen::Setup(SetupForm { error: Some(_), .. })
        | Screen::Playing {
            message: Some(_), ..
        } => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(status)
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

/// Centers a `width` x `height` box inside `area`, clipped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(vertical[1])[1]
}

fn render_menu(f: &mut Frame, area: Rect, selected: MenuItem) {
    let items: Vec<ListItem> = MenuItem::iter()
        .map(|item| ListItem::new(item.to_string()))
        .collect();
    let position = MenuItem::iter().position(|item| item == selected);

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Menu"))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(position);
    f.render_stateful_widget(list, centered(area, 30, 4), &mut state);
}

fn render_setup(f: &mut Frame, area: Rect, form: &SetupForm) {
    let area = centered(area, 40, 3 * SETUP_FIELDS.len() as u16);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); SETUP_FIELDS.len()])
        .split(area);

    for (index, label) in SETUP_FIELDS.iter().enumerate() {
        let focused = index == form.focus;
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text = if focused {
            format!("{}_", form.field(index))
        } else {
            form.field(index).to_string()
        };
        let field = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(*label),
        );
        f.render_widget(field, rows[index]);
    }
}

/// Renders the 3x3 board, highlighting the cursor, last move and winning line.
pub fn render_board(f: &mut Frame, area: Rect, app: &App, cursor: Option<usize>) {
    let engine = app.engine();
    let area = centered(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(area);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            let index = row * 3 + col;
            let cell = Paragraph::new(cell_label(engine.board(), index))
                .style(cell_style(engine, index, cursor, app.last_move()))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(cell, *cell_area);
        }
    }
}

fn cell_label(board: &Board, index: usize) -> String {
    match board.get(index) {
        Some(Cell::Occupied(symbol)) => symbol.to_string(),
        _ => (index + 1).to_string(),
    }
}

fn cell_style(
    engine: &GameEngine,
    index: usize,
    cursor: Option<usize>,
    last_move: Option<usize>,
) -> Style {
    let mut style = match engine.board().get(index) {
        Some(Cell::Occupied(_)) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::DarkGray),
    };
    let winning = matches!(engine.status(), GameStatus::Won { .. })
        && engine
            .winning_line()
            .is_some_and(|line| line.contains(&index));
    if winning {
        style = style.fg(Color::Green);
    } else if last_move == Some(index) {
        style = style.fg(Color::Yellow);
    }
    if cursor == Some(index) {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}
