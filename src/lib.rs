//! BreakOut - a single-screen arcade brick breaking game.
//!
//! The simulation (paddle, ball, brick field) lives in plain structs owned by
//! one [`session::GameSession`] resource and steps at a fixed 70 Hz. The bevy
//! plugins mirror that state onto sprites, play collision sounds and switch
//! to the game-over screen when the ball passes the paddle.

pub mod app_state;
pub mod assets;
pub mod audio;
pub mod ball;
pub mod brick;
pub mod gameover;
pub mod geometry;
pub mod paddle;
pub mod session;

/// Game configuration constants
pub mod consts {
    use bevy::prelude::Color;

    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 800.0;

    /// Simulation and render target rate in ticks per second
    pub const TICK_RATE: f32 = 70.0;

    /// Brick grid shape
    pub const ROWS: usize = 6;
    pub const COLUMNS: usize = 10;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_BORDER: f32 = 2.0;

    /// Paddle defaults - the paddle is one brick wide
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_BOTTOM_MARGIN: f32 = 40.0;
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Ball defaults, velocity is per tick
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_VELOCITY: (f32, f32) = (3.0, -3.0);

    pub const COLOR_BACKGROUND: Color = Color::BLACK;
    pub const COLOR_PADDLE: Color = Color::WHITE;
    pub const COLOR_BALL: Color = Color::rgb(60.0 / 255.0, 160.0 / 255.0, 200.0 / 255.0);
    pub const COLOR_BRICK: Color = Color::rgb(80.0 / 255.0, 175.0 / 255.0, 90.0 / 255.0);
    pub const COLOR_BRICK_BORDER: Color = Color::BLACK;
    pub const COLOR_GAMEOVER_TEXT: Color = COLOR_BALL;
}
