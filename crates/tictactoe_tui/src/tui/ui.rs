//! Stateless UI rendering for tic-tac-toe.

use super::app::{App, Screen};
use super::form::{Field, SetupForm};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{Cell, SIZE, Snapshot, Symbol};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let (status, help) = match app.screen() {
        Screen::Setup => {
            draw_form(frame, chunks[1], app.form());
            (
                app.form_error().unwrap_or(app.status_message()),
                "Tab/↑↓ move · ←→ swap symbols · Enter start · Esc quit",
            )
        }
        Screen::Playing => {
            draw_board(frame, chunks[1], &app.snapshot(), app.cursor());
            (
                app.status_message(),
                "Arrows move · Enter play · r restart · n new players · q quit",
            )
        }
    };

    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_form(frame: &mut Frame, area: Rect, form: &SetupForm) {
    let area = center_rect(area, 44, 9);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    draw_field(
        frame,
        rows[0],
        "Player 1",
        form.player_one(),
        form.focus() == Field::PlayerOneName,
    );
    draw_field(
        frame,
        rows[1],
        "Player 2",
        form.player_two(),
        form.focus() == Field::PlayerTwoName,
    );

    let one = form.player_one_symbol();
    let symbols = Line::from(vec![
        Span::styled(format!("P1: {one}"), symbol_style(one)),
        Span::raw("   "),
        Span::styled(format!("P2: {}", one.opponent()), symbol_style(one.opponent())),
        Span::raw("   "),
        Span::styled(
            "[ Start ]",
            focus_style(form.focus() == Field::Start).add_modifier(Modifier::BOLD),
        ),
    ]);
    let symbols = Paragraph::new(symbols).alignment(Alignment::Center).block(
        Block::default()
            .title("Symbols")
            .borders(Borders::ALL)
            .border_style(focus_style(form.focus() == Field::Symbol)),
    );
    frame.render_widget(symbols, rows[2]);
}

fn draw_field(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let text = if focused {
        format!("{value}_")
    } else {
        value.to_string()
    };
    let field = Paragraph::new(text).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(focus_style(focused)),
    );
    frame.render_widget(field, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Snapshot, cursor: (usize, usize)) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..SIZE {
        draw_row(frame, rows[row * 2], board, cursor, row);
        if row + 1 < SIZE {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Snapshot, cursor: (usize, usize), row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, &cell) in board.rows()[row].iter().enumerate() {
        draw_cell(frame, cols[col * 2], cell, cursor == (row, col));
        if col + 1 < SIZE {
            frame.render_widget(
                Paragraph::new("│\n│\n│").style(Style::default().fg(Color::Gray)),
                cols[col * 2 + 1],
            );
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, selected: bool) {
    let (symbol, base_style) = match cell {
        Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(symbol) => (
            match symbol {
                Symbol::X => " X ",
                Symbol::O => " O ",
            },
            symbol_style(symbol),
        ),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let line = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(line, area);
}

fn symbol_style(symbol: Symbol) -> Style {
    let color = match symbol {
        Symbol::X => Color::Blue,
        Symbol::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Centers a `width` x `height` rectangle inside `area`.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
