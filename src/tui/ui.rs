//! Stateless UI rendering.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timetoe_rules::{Board, GameOutcome, Player, Square};

const CELL_WIDTH: usize = 5;

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board + moves
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let dimension = app.game().dimension();
    let title = Paragraph::new(format!("Timetoe - {}x{}", dimension, dimension))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_moves(frame, body[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "Arrows/hjkl: move | Enter: play | [ ]: step | digits: jump | t: order | +/-: size | r: restart | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.game().board();
    let outcome = app.game().outcome();
    let lines = board_lines(board, &outcome, app.cursor());

    let n = board.dimension().size();
    let width = (n * (CELL_WIDTH + 1) + 1) as u16;
    let height = (2 * n - 1) as u16;

    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, center_rect(inner, width, height));
}

fn board_lines(board: &Board, outcome: &GameOutcome, cursor: usize) -> Vec<Line<'static>> {
    let n = board.dimension().size();
    let separator = vec!["─".repeat(CELL_WIDTH); n].join("┼");
    let mut lines = Vec::with_capacity(2 * n - 1);

    for (row, squares) in board.rows().enumerate() {
        if row > 0 {
            lines.push(Line::from(Span::styled(
                separator.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        let mut spans = Vec::with_capacity(2 * n - 1);
        for (col, square) in squares.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let index = row * n + col;
            spans.push(cell_span(*square, outcome.highlights(index), index == cursor));
        }
        lines.push(Line::from(spans));
    }

    lines
}

fn cell_span(square: Square, winning: bool, under_cursor: bool) -> Span<'static> {
    let (symbol, base) = match square {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if under_cursor {
        base.bg(Color::White).fg(Color::Black)
    } else if winning {
        base.bg(Color::Green)
    } else {
        base
    };

    Span::styled(format!("{:^width$}", symbol, width = CELL_WIDTH), style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let timeline = app.timeline();
    let items: Vec<ListItem> = timeline
        .iter()
        .map(|entry| ListItem::new(entry.caption()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Moves ({})", app.order())),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    // Selecting the current entry keeps it scrolled into view.
    let mut list_state = ListState::default();
    list_state.select(timeline.iter().position(|entry| entry.is_current));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
