use crate::game::{Board, Cell, GameSession, Player, COLS, ROWS};
use crate::ui::effects::{Effect, Overlay};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the rendered grid: seven three-character cells plus borders.
pub const BOARD_WIDTH: u16 = COLS as u16 * 3 + 2;
/// Column numbers, selector row, the six grid rows, and two border rows.
pub const BOARD_HEIGHT: u16 = ROWS as u16 + 4;

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Render the game screen. Returns the rectangle the grid was drawn into so
/// mouse positions can be mapped back to columns.
pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    effect: Option<&Effect>,
    message: &Option<String>,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    let board_area = render_board(frame, session, selected_column, effect, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);

    board_area
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let player = session.current_player();
    let status = if session.is_terminal() {
        "Game Over".to_string()
    } else {
        format!("Current Player: {}", player.name())
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    effect: Option<&Effect>,
    area: Rect,
) -> Rect {
    let [board_area] = Layout::horizontal([Constraint::Length(BOARD_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let overlay = match effect {
        Some(Effect::Drop(drop)) => Some(drop.overlay()),
        Some(Effect::Bounce(bounce)) => Some(bounce.overlay()),
        _ => None,
    };
    let hidden = match effect {
        Some(Effect::Bounce(bounce)) => bounce.hidden_cell(),
        _ => None,
    };
    let highlight = match effect {
        Some(Effect::Blink(blink)) if blink.is_on() => Some(blink.line),
        _ => None,
    };

    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);

    // Column numbers
    let mut col_line = vec![Span::raw(" ")];
    for col in 0..COLS {
        if col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    lines.push(Line::from(col_line));

    // Selector row: the piece about to be dropped, hidden while an animation
    // runs or once the game is over.
    let mut selector_line = vec![Span::raw(" ")];
    for col in 0..COLS {
        if col == selected_column && effect.is_none() && !session.is_terminal() {
            selector_line.push(Span::styled(
                " \u{25bc} ",
                Style::default().fg(player_color(session.current_player())),
            ));
        } else {
            selector_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(selector_line));

    lines.push(Line::from(format!("\u{2554}{}\u{2557}", "\u{2550}".repeat(21))));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("\u{2551}")];
        for col in 0..COLS {
            row_spans.push(cell_span(
                session.board(),
                row,
                col,
                overlay.as_ref(),
                hidden,
                highlight.as_ref(),
            ));
        }
        row_spans.push(Span::raw("\u{2551}"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("\u{255a}{}\u{255d}", "\u{2550}".repeat(21))));

    let widget = Paragraph::new(lines);
    frame.render_widget(widget, board_area);
    board_area
}

fn cell_span(
    board: &Board,
    row: usize,
    col: usize,
    overlay: Option<&Overlay>,
    hidden: Option<(usize, usize)>,
    highlight: Option<&[(usize, usize); 4]>,
) -> Span<'static> {
    if let Some(overlay) = overlay {
        if overlay.row == row && overlay.col == col {
            return Span::styled(
                " \u{25cf} ",
                Style::default().fg(player_color(overlay.player)),
            );
        }
    }
    if hidden == Some((row, col)) {
        return Span::styled(" . ", Style::default().fg(Color::DarkGray));
    }
    if let Some(line) = highlight {
        if line.contains(&(row, col)) {
            return Span::styled(
                " \u{25cf} ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }

    let (symbol, color) = match board.get(row, col) {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::One => (" \u{25cf} ", Color::Red),
        Cell::Two => (" \u{25cf} ", Color::Yellow),
    };
    Span::styled(symbol, Style::default().fg(color))
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(
        "\u{2190}/\u{2192} or Mouse: Aim  |  Enter/Click: Drop  |  R: Restart  |  Q: Quit",
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
