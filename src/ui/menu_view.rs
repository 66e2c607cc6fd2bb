use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: [&str; 5] = [
    " ██████  ██████  ███    ██ ███    ██ ███████  ██████ ████████    ██   ██ ",
    "██      ██    ██ ████   ██ ████   ██ ██      ██         ██       ██   ██ ",
    "██      ██    ██ ██ ██  ██ ██ ██  ██ █████   ██         ██       ███████ ",
    "██      ██    ██ ██  ██ ██ ██  ██ ██ ██      ██         ██            ██ ",
    " ██████  ██████  ██   ████ ██   ████ ███████  ██████    ██            ██ ",
];

pub fn render(frame: &mut Frame) {
    let [area] = Layout::vertical([Constraint::Length(10)])
        .flex(Flex::Center)
        .areas(frame.area());

    let mut lines: Vec<Line> = TITLE
        .iter()
        .map(|&row| {
            Line::from(Span::styled(
                row,
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" \u{25cf} ", Style::default().fg(Color::Red)),
        Span::styled(" \u{25cf} ", Style::default().fg(Color::Yellow)),
        Span::styled(" \u{25cf} ", Style::default().fg(Color::Red)),
        Span::styled(" \u{25cf} ", Style::default().fg(Color::Yellow)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to Start",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "Q: Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(menu, area);
}
