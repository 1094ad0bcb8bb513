use bevy::prelude::*;
use bevy::sprite::MaterialMesh2dBundle;

use crate::app_state::AppState;
use crate::brick::BrickField;
use crate::consts::{BALL_RADIUS, BALL_VELOCITY, COLOR_BALL, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::gameover::Playfield;
use crate::geometry::Rect;
use crate::paddle::paddle_move;
use crate::session::GameSession;

pub struct BallPlugin;

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BounceEvent>()
            .add_event::<BrickHitEvent>()
            .add_systems(Startup, setup_ball)
            .add_systems(
                FixedUpdate,
                ball_step
                    .after(paddle_move)
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(Update, sync_ball.run_if(in_state(AppState::Playing)));
    }
}

/// A wall or paddle bounce happened this tick. One event per sound trigger.
#[derive(Debug, Event)]
pub struct BounceEvent;

/// A brick was destroyed this tick.
#[derive(Debug, Event)]
pub struct BrickHitEvent {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallStatus {
    Playing,
    /// Terminal: the ball passed the paddle; no further physics ever runs.
    GameOver,
}

/// Sound and removal triggers produced by one simulation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    /// Wall and paddle bounces this step (each one is a bounce sound).
    pub bounces: u32,
    /// Grid position of the brick destroyed this step, if any.
    pub brick_hit: Option<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct Ball {
    /// Bounding square of the radius-[`BALL_RADIUS`] circle.
    pub rect: Rect,
    /// Displacement per tick.
    pub velocity: Vec2,
    pub status: BallStatus,
}

impl Ball {
    /// Ball centered at `(x, y)`, moving up and to the right.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(
                x - BALL_RADIUS,
                y - BALL_RADIUS,
                BALL_RADIUS * 2.0,
                BALL_RADIUS * 2.0,
            ),
            velocity: Vec2::new(BALL_VELOCITY.0, BALL_VELOCITY.1),
            status: BallStatus::Playing,
        }
    }

    /// One fixed-rate physics step: resolve collisions against the walls,
    /// the paddle and the brick grid, then advance the position and check
    /// for the terminal state. Inert once the ball is past the paddle.
    pub fn step(&mut self, paddle: &Rect, bricks: &mut BrickField) -> StepEvents {
        let mut events = StepEvents::default();
        if self.status == BallStatus::GameOver {
            return events;
        }

        // Side walls flip dx, the ceiling flips dy. The checks are
        // independent; a corner fires both in the same step.
        if self.rect.right() >= WINDOW_WIDTH || self.rect.left() <= 0.0 {
            self.velocity.x = -self.velocity.x;
            events.bounces += 1;
        }
        if self.rect.top() <= 0.0 {
            self.velocity.y = -self.velocity.y;
            events.bounces += 1;
        }

        // The paddle only deflects a descending ball, so an overlapping
        // ball that already bounced keeps moving away.
        if self.velocity.y > 0.0 && self.rect.intersects(paddle) {
            self.velocity.y = -self.velocity.y;
            events.bounces += 1;
        }

        // At most one brick per step: the first hit in row-major scan
        // order wins and the scan stops there.
        if let Some((row, col)) = bricks.first_hit(&self.rect) {
            bricks.remove_at(row, col);
            self.velocity.y = -self.velocity.y;
            events.brick_hit = Some((row, col));
        }

        self.rect.x += self.velocity.x;
        self.rect.y += self.velocity.y;

        if self.rect.bottom() > WINDOW_HEIGHT {
            self.status = BallStatus::GameOver;
        }

        events
    }
}

#[derive(Debug, Component)]
pub struct BallSprite;

fn setup_ball(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    session: Res<GameSession>,
) {
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: meshes.add(shape::Circle::new(BALL_RADIUS).into()).into(),
            material: materials.add(ColorMaterial::from(COLOR_BALL)),
            transform: Transform::from_translation(session.ball.rect.translation(2.0)),
            ..default()
        },
        BallSprite,
        Playfield,
    ));
}

pub fn ball_step(
    mut session: ResMut<GameSession>,
    mut bounce_writer: EventWriter<BounceEvent>,
    mut hit_writer: EventWriter<BrickHitEvent>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let GameSession {
        paddle,
        ball,
        bricks,
    } = &mut *session;

    let events = ball.step(&paddle.rect, bricks);

    for _ in 0..events.bounces {
        bounce_writer.send(BounceEvent);
    }
    if let Some((row, col)) = events.brick_hit {
        hit_writer.send(BrickHitEvent { row, col });
    }
    if ball.status == BallStatus::GameOver {
        next_state.set(AppState::GameOver);
    }
}

fn sync_ball(session: Res<GameSession>, mut query: Query<&mut Transform, With<BallSprite>>) {
    let mut transform = query.single_mut();
    transform.translation = session.ball.rect.translation(2.0);
}
