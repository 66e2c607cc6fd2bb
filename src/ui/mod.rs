//! Terminal UI: the menu, game, and game-over screens, the board renderer,
//! and the animation effects that decorate piece drops and wins.

mod app;
mod effects;
mod game_over_view;
mod game_view;
mod menu_view;

pub use app::App;
