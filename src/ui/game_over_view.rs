use crate::game::GameOutcome;
use crate::ui::effects::Fireworks;
use crate::ui::game_view::player_color;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Position},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(frame: &mut Frame, outcome: GameOutcome, fireworks: Option<&Fireworks>) {
    let area = frame.area();

    // Fireworks go down first so the text stays readable on top of them.
    if let Some(fireworks) = fireworks {
        let buf = frame.buffer_mut();
        for p in fireworks.particles() {
            if p.y < 0.0 {
                // Still above the screen
                continue;
            }
            let x = area.x + p.x.round() as u16;
            let y = area.y + p.y.round() as u16;
            if area.contains(Position::new(x, y)) {
                buf[Position::new(x, y)].set_symbol("\u{2022}").set_fg(p.color);
            }
        }
    }

    let (headline, style) = match outcome {
        GameOutcome::Winner(player) => (
            format!("{} wins!", player.name()),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        GameOutcome::Draw => (
            "Draw!".to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let [text_area] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(area);

    let lines = vec![
        Line::from(Span::styled(headline, style)),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter for Menu",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "Press Esc to Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, text_area);
}
