use bevy::prelude::*;

use crate::ball::Ball;
use crate::brick::BrickField;
use crate::consts::{BALL_RADIUS, COLUMNS, ROWS, WINDOW_WIDTH};
use crate::paddle::Paddle;

/// All simulation state for one game session. Constructed once by `main`,
/// mutated only by the fixed-rate systems; the ECS entities are render
/// mirrors of what lives here.
#[derive(Debug, Resource)]
pub struct GameSession {
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickField,
}

impl GameSession {
    pub fn new() -> Self {
        let paddle = Paddle::new();
        // Ball starts resting just above the paddle center.
        let ball = Ball::new(
            paddle.rect.center_x(),
            paddle.rect.top() - BALL_RADIUS,
        );
        let bricks = BrickField::new(ROWS, COLUMNS, WINDOW_WIDTH);

        Self {
            paddle,
            ball,
            bricks,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
