use bevy::prelude::*;

use crate::app_state::AppState;
use crate::consts::{
    COLOR_PADDLE, COLUMNS, PADDLE_BOTTOM_MARGIN, PADDLE_HEIGHT, PADDLE_SPEED, WINDOW_HEIGHT,
    WINDOW_WIDTH,
};
use crate::gameover::Playfield;
use crate::geometry::Rect;
use crate::session::GameSession;

pub struct PaddlePlugin;

impl Plugin for PaddlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_paddle)
            .add_systems(
                FixedUpdate,
                paddle_move.run_if(in_state(AppState::Playing)),
            )
            .add_systems(Update, sync_paddle.run_if(in_state(AppState::Playing)));
    }
}

/// Held state of the two direction keys for one tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaddleInput {
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
    pub speed: f32,
}

impl Paddle {
    /// Paddle centered near the bottom of the window, one brick wide.
    pub fn new() -> Self {
        let width = WINDOW_WIDTH / COLUMNS as f32;
        let rect = Rect::new(
            WINDOW_WIDTH / 2.0 - width / 2.0,
            WINDOW_HEIGHT - PADDLE_BOTTOM_MARGIN,
            width,
            PADDLE_HEIGHT,
        );
        Self {
            rect,
            speed: PADDLE_SPEED,
        }
    }

    /// Horizontal move only. A direction applies when the resulting edge
    /// stays inside the window; otherwise the paddle holds position.
    pub fn apply(&mut self, input: PaddleInput) {
        if input.left && self.rect.x - self.speed >= 0.0 {
            self.rect.x -= self.speed;
        }
        if input.right && self.rect.right() + self.speed <= WINDOW_WIDTH {
            self.rect.x += self.speed;
        }
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Component)]
pub struct PaddleSprite;

fn setup_paddle(mut commands: Commands, session: Res<GameSession>) {
    let rect = &session.paddle.rect;
    commands.spawn((
        SpriteBundle {
            sprite: Sprite {
                color: COLOR_PADDLE,
                custom_size: Some(Vec2::new(rect.width, rect.height)),
                ..default()
            },
            transform: Transform::from_translation(rect.translation(1.0)),
            ..default()
        },
        PaddleSprite,
        Playfield,
    ));
}

pub fn paddle_move(keys: Res<Input<KeyCode>>, mut session: ResMut<GameSession>) {
    let input = PaddleInput {
        left: keys.pressed(KeyCode::Left),
        right: keys.pressed(KeyCode::Right),
    };
    session.paddle.apply(input);
}

fn sync_paddle(session: Res<GameSession>, mut query: Query<&mut Transform, With<PaddleSprite>>) {
    let mut transform = query.single_mut();
    transform.translation = session.paddle.rect.translation(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LEFT: PaddleInput = PaddleInput {
        left: true,
        right: false,
    };
    const RIGHT: PaddleInput = PaddleInput {
        left: false,
        right: true,
    };

    #[test]
    fn paddle_starts_centered_above_window_bottom() {
        let paddle = Paddle::new();
        assert_eq!(paddle.rect.center_x(), WINDOW_WIDTH / 2.0);
        assert_eq!(paddle.rect.top(), WINDOW_HEIGHT - PADDLE_BOTTOM_MARGIN);
    }

    #[test]
    fn left_stops_at_window_edge() {
        let mut paddle = Paddle::new();
        for _ in 0..200 {
            paddle.apply(LEFT);
        }
        assert_eq!(paddle.rect.left(), 0.0);
    }

    #[test]
    fn right_stops_at_window_edge() {
        let mut paddle = Paddle::new();
        for _ in 0..200 {
            paddle.apply(RIGHT);
        }
        assert_eq!(paddle.rect.right(), WINDOW_WIDTH);
    }

    #[test]
    fn no_vertical_movement() {
        let mut paddle = Paddle::new();
        let y = paddle.rect.y;
        for _ in 0..50 {
            paddle.apply(LEFT);
            paddle.apply(RIGHT);
        }
        assert_eq!(paddle.rect.y, y);
    }

    #[test]
    fn no_input_holds_position() {
        let mut paddle = Paddle::new();
        let x = paddle.rect.x;
        paddle.apply(PaddleInput::default());
        assert_eq!(paddle.rect.x, x);
    }

    proptest! {
        // The bound invariant must hold for every sequence of held keys,
        // including both keys held at once.
        #[test]
        fn stays_in_bounds(moves in proptest::collection::vec(any::<(bool, bool)>(), 0..300)) {
            let mut paddle = Paddle::new();
            for (left, right) in moves {
                paddle.apply(PaddleInput { left, right });
                prop_assert!(paddle.rect.left() >= 0.0);
                prop_assert!(paddle.rect.right() <= WINDOW_WIDTH);
            }
        }
    }
}
