use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Frame, Terminal};

use crate::config::AppConfig;
use crate::game::{GameOutcome, GameSession, Player, COLS};
use crate::ui::effects::{BlinkAnimation, BounceAnimation, DropAnimation, Effect, Fireworks};
use crate::ui::{game_over_view, game_view, menu_view};

const POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Playing,
    GameOver,
}

/// What a finished animation step hands back to the screen flow.
enum TickAction {
    Landed { col: usize, row: usize, player: Player },
    Settled,
    Blinked,
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    session: GameSession,
    selected_column: usize,
    effect: Option<Effect>,
    fireworks: Option<Fireworks>,
    board_area: Rect,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            config,
            screen: Screen::Menu,
            session: GameSession::new(),
            selected_column: 3, // Start in middle
            effect: None,
            fireworks: None,
            board_area: Rect::default(),
            message: None,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let size = terminal.size()?;
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick(size.width, size.height);
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        match self.screen {
            Screen::Menu => menu_view::render(frame),
            Screen::Playing => {
                self.board_area = game_view::render(
                    frame,
                    &self.session,
                    self.selected_column,
                    self.effect.as_ref(),
                    &self.message,
                );
            }
            Screen::GameOver => {
                if let Some(outcome) = self.session.outcome() {
                    game_over_view::render(frame, outcome, self.fireworks.as_ref());
                }
            }
        }
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Menu => match key.code {
                KeyCode::Enter => self.start_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Screen::Playing => {
                if matches!(key.code, KeyCode::Char('q')) {
                    self.should_quit = true;
                    return;
                }
                // One animation at a time; input waits for it.
                if self.effect.is_some() {
                    return;
                }
                self.message = None;
                match key.code {
                    KeyCode::Left => {
                        if self.selected_column > 0 {
                            self.selected_column -= 1;
                        }
                    }
                    KeyCode::Right => {
                        if self.selected_column < COLS - 1 {
                            self.selected_column += 1;
                        }
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        self.request_drop(self.selected_column);
                    }
                    KeyCode::Char('r') => self.start_game(),
                    _ => {}
                }
            }
            Screen::GameOver => match key.code {
                KeyCode::Enter => {
                    self.fireworks = None;
                    self.screen = Screen::Menu;
                }
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.screen != Screen::Playing || self.effect.is_some() {
            return;
        }
        match mouse.kind {
            MouseEventKind::Moved => {
                if let Some(col) = self.column_at(mouse.column) {
                    self.selected_column = col;
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(col) = self.column_at(mouse.column) {
                    self.selected_column = col;
                    self.message = None;
                    self.request_drop(col);
                }
            }
            _ => {}
        }
    }

    /// Map a terminal x coordinate to a board column, using the grid
    /// rectangle recorded by the last render.
    fn column_at(&self, x: u16) -> Option<usize> {
        let left = self.board_area.x + 1; // Skip the border column
        if x < left || x >= left + (COLS as u16) * 3 {
            return None;
        }
        Some(((x - left) / 3) as usize)
    }

    fn start_game(&mut self) {
        self.session = GameSession::new();
        self.selected_column = 3;
        self.effect = None;
        self.fireworks = None;
        self.message = None;
        self.screen = Screen::Playing;
    }

    /// Validate the column and start the drop animation; the move itself
    /// commits once the piece lands.
    fn request_drop(&mut self, col: usize) {
        if self.session.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if !self.session.board().is_column_open(col) {
            self.message = Some("Column is full!".to_string());
            return;
        }
        if let Some(row) = self.session.preview_row(col) {
            self.effect = Some(Effect::Drop(DropAnimation::new(
                col,
                row,
                self.session.current_player(),
            )));
        }
    }

    /// Step the running animation or the fireworks.
    fn tick(&mut self, width: u16, height: u16) {
        if self.screen == Screen::GameOver {
            if let Some(fireworks) = self.fireworks.as_mut() {
                fireworks.step(width, height);
            }
            return;
        }

        let animation = &self.config.animation;
        let action = match self.effect.as_mut() {
            None => return,
            Some(Effect::Drop(drop)) => {
                drop.step(animation.drop_interval()).then(|| TickAction::Landed {
                    col: drop.col,
                    row: drop.target_row,
                    player: drop.player,
                })
            }
            Some(Effect::Bounce(bounce)) => {
                bounce.step(animation.bounce_interval()).then_some(TickAction::Settled)
            }
            Some(Effect::Blink(blink)) => {
                blink.step(animation.blink_interval()).then_some(TickAction::Blinked)
            }
        };

        match action {
            Some(TickAction::Landed { col, row, player }) => self.commit_drop(col, row, player),
            Some(TickAction::Settled) => self.finish_move(),
            Some(TickAction::Blinked) => self.enter_game_over(),
            None => {}
        }
    }

    /// The animated piece has landed: apply the move and bounce it.
    fn commit_drop(&mut self, col: usize, row: usize, player: Player) {
        match self.session.play(col) {
            Ok(_) => {
                self.effect = Some(Effect::Bounce(BounceAnimation::new(
                    col,
                    row,
                    player,
                    self.config.animation.bounce_cycles,
                )));
            }
            Err(err) => {
                // Cannot happen for a column validated at request time, but
                // surface it rather than corrupt the flow.
                self.effect = None;
                self.message = Some(err.to_string());
            }
        }
    }

    /// The bounce has settled: blink a winning line, or move on.
    fn finish_move(&mut self) {
        match self.session.outcome() {
            Some(GameOutcome::Winner(_)) => match self.session.winning_line() {
                Some(line) => {
                    self.effect = Some(Effect::Blink(BlinkAnimation::new(
                        line,
                        self.config.animation.blink_cycles,
                    )));
                }
                None => self.enter_game_over(),
            },
            Some(GameOutcome::Draw) => self.enter_game_over(),
            None => self.effect = None,
        }
    }

    fn enter_game_over(&mut self) {
        self.effect = None;
        let won = matches!(self.session.outcome(), Some(GameOutcome::Winner(_)));
        self.fireworks = (won && self.config.animation.fireworks).then(Fireworks::new);
        self.screen = Screen::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_app() -> App {
        let mut app = App::new(AppConfig::default());
        app.start_game();
        app.board_area = Rect::new(10, 2, game_view::BOARD_WIDTH, game_view::BOARD_HEIGHT);
        app
    }

    #[test]
    fn test_column_at_maps_cells() {
        let app = playing_app();
        // Border column is not a drop target.
        assert_eq!(app.column_at(10), None);
        assert_eq!(app.column_at(11), Some(0));
        assert_eq!(app.column_at(13), Some(0));
        assert_eq!(app.column_at(14), Some(1));
        assert_eq!(app.column_at(11 + 6 * 3), Some(6));
        assert_eq!(app.column_at(11 + 7 * 3), None);
        assert_eq!(app.column_at(0), None);
    }

    #[test]
    fn test_request_drop_starts_animation() {
        let mut app = playing_app();
        app.request_drop(3);
        assert!(matches!(app.effect, Some(Effect::Drop(_))));
        assert_eq!(app.message, None);
    }

    #[test]
    fn test_request_drop_full_column() {
        let mut app = playing_app();
        for _ in 0..6 {
            app.session.play(0).unwrap();
        }
        app.request_drop(0);
        assert!(app.effect.is_none());
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
    }

    #[test]
    fn test_commit_drop_applies_move_and_bounces() {
        let mut app = playing_app();
        app.commit_drop(3, 5, Player::One);
        assert_eq!(app.session.current_player(), Player::Two);
        assert!(matches!(app.effect, Some(Effect::Bounce(_))));
    }

    #[test]
    fn test_finish_move_without_outcome_clears_effect() {
        let mut app = playing_app();
        app.commit_drop(3, 5, Player::One);
        app.finish_move();
        assert!(app.effect.is_none());
        assert_eq!(app.screen, Screen::Playing);
    }

    #[test]
    fn test_win_blinks_then_enters_game_over() {
        let mut app = playing_app();
        // Player one builds the bottom row while player two stacks column 6.
        for col in 0..3 {
            app.session.play(col).unwrap();
            app.session.play(6).unwrap();
        }
        app.commit_drop(3, 5, Player::One);
        app.finish_move();
        assert!(matches!(app.effect, Some(Effect::Blink(_))));

        app.enter_game_over();
        assert_eq!(app.screen, Screen::GameOver);
        assert!(app.fireworks.is_some());
    }

    #[test]
    fn test_fireworks_respect_config() {
        let mut config = AppConfig::default();
        config.animation.fireworks = false;
        let mut app = App::new(config);
        app.start_game();
        for col in 0..3 {
            app.session.play(col).unwrap();
            app.session.play(6).unwrap();
        }
        app.session.play(3).unwrap();
        app.enter_game_over();
        assert_eq!(app.screen, Screen::GameOver);
        assert!(app.fireworks.is_none());
    }
}
