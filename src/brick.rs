use bevy::prelude::*;

use crate::ball::BrickHitEvent;
use crate::consts::{BRICK_BORDER, BRICK_HEIGHT, COLOR_BRICK, COLOR_BRICK_BORDER};
use crate::gameover::Playfield;
use crate::geometry::Rect;
use crate::session::GameSession;

pub struct BrickPlugin;

impl Plugin for BrickPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_bricks)
            .add_systems(Update, brick_despawn);
    }
}

/// The brick grid, row-major. A destroyed brick leaves `None` in its slot;
/// the grid itself is never resized after construction.
#[derive(Debug, Clone)]
pub struct BrickField {
    rows: usize,
    columns: usize,
    brick_width: f32,
    slots: Vec<Option<Rect>>,
}

impl BrickField {
    /// Build the full grid tiling `window_width` across `columns` bricks.
    /// A zero-sized grid degrades to an empty field.
    pub fn new(rows: usize, columns: usize, window_width: f32) -> Self {
        if rows == 0 || columns == 0 {
            return Self {
                rows,
                columns,
                brick_width: 0.0,
                slots: Vec::new(),
            };
        }

        let brick_width = window_width / columns as f32;
        let mut slots = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for col in 0..columns {
                slots.push(Some(Rect::new(
                    col as f32 * brick_width,
                    row as f32 * BRICK_HEIGHT,
                    brick_width,
                    BRICK_HEIGHT,
                )));
            }
        }

        Self {
            rows,
            columns,
            brick_width,
            slots,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn brick_width(&self) -> f32 {
        self.brick_width
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Rect> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.slots[row * self.columns + col].as_ref()
    }

    /// First present brick intersecting `rect`, in row-major scan order
    /// (ascending row, then ascending column).
    pub fn first_hit(&self, rect: &Rect) -> Option<(usize, usize)> {
        for row in 0..self.rows {
            for col in 0..self.columns {
                if let Some(brick) = self.get(row, col) {
                    if rect.intersects(brick) {
                        return Some((row, col));
                    }
                }
            }
        }
        None
    }

    /// Take the brick out of its slot, returning its rect if it was present.
    pub fn remove_at(&mut self, row: usize, col: usize) -> Option<Rect> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.slots[row * self.columns + col].take()
    }

    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Present bricks with their grid position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Rect)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.as_ref()
                .map(|rect| (i / self.columns, i % self.columns, rect))
        })
    }
}

#[derive(Debug, Component)]
pub struct BrickSlot {
    pub row: usize,
    pub col: usize,
}

fn setup_bricks(mut commands: Commands, session: Res<GameSession>) {
    for (row, col, rect) in session.bricks.iter() {
        // Black backing sprite with an inset green face gives each brick its
        // 2 px border.
        commands
            .spawn((
                SpriteBundle {
                    sprite: Sprite {
                        color: COLOR_BRICK_BORDER,
                        custom_size: Some(Vec2::new(rect.width, rect.height)),
                        ..default()
                    },
                    transform: Transform::from_translation(rect.translation(0.5)),
                    ..default()
                },
                BrickSlot { row, col },
                Playfield,
            ))
            .with_children(|parent| {
                parent.spawn(SpriteBundle {
                    sprite: Sprite {
                        color: COLOR_BRICK,
                        custom_size: Some(Vec2::new(
                            rect.width - BRICK_BORDER * 2.0,
                            rect.height - BRICK_BORDER * 2.0,
                        )),
                        ..default()
                    },
                    transform: Transform::from_xyz(0.0, 0.0, 0.1),
                    ..default()
                });
            });
    }
}

fn brick_despawn(
    mut commands: Commands,
    mut event_reader: EventReader<BrickHitEvent>,
    query: Query<(Entity, &BrickSlot)>,
) {
    for event in event_reader.iter() {
        for (entity, slot) in query.iter() {
            if slot.row == event.row && slot.col == event.col {
                commands.entity(entity).despawn_recursive();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{COLUMNS, ROWS, WINDOW_WIDTH};

    #[test]
    fn full_grid_after_creation() {
        let field = BrickField::new(ROWS, COLUMNS, WINDOW_WIDTH);
        assert_eq!(field.remaining(), ROWS * COLUMNS);
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                assert!(field.get(row, col).is_some());
            }
        }
    }

    #[test]
    fn rows_tile_the_window_exactly() {
        let field = BrickField::new(ROWS, COLUMNS, WINDOW_WIDTH);
        for row in 0..ROWS {
            let mut total_width = 0.0;
            for col in 0..COLUMNS {
                let brick = field.get(row, col).unwrap();
                // No gap: each brick starts where the previous one ended.
                assert_eq!(brick.left(), col as f32 * field.brick_width());
                total_width += brick.width;
            }
            assert_eq!(total_width, WINDOW_WIDTH);
        }
    }

    #[test]
    fn brick_positions_follow_grid() {
        let field = BrickField::new(ROWS, COLUMNS, WINDOW_WIDTH);
        let brick = field.get(2, 3).unwrap();
        assert_eq!(brick.left(), 3.0 * field.brick_width());
        assert_eq!(brick.top(), 2.0 * BRICK_HEIGHT);
    }

    #[test]
    fn zero_sized_grid_is_empty() {
        assert_eq!(BrickField::new(0, COLUMNS, WINDOW_WIDTH).remaining(), 0);
        assert_eq!(BrickField::new(ROWS, 0, WINDOW_WIDTH).remaining(), 0);
        assert!(BrickField::new(0, 0, WINDOW_WIDTH)
            .first_hit(&Rect::new(0.0, 0.0, 20.0, 20.0))
            .is_none());
    }

    #[test]
    fn remove_at_empties_one_slot() {
        let mut field = BrickField::new(ROWS, COLUMNS, WINDOW_WIDTH);
        assert!(field.remove_at(1, 2).is_some());
        assert!(field.get(1, 2).is_none());
        assert_eq!(field.remaining(), ROWS * COLUMNS - 1);

        // Removing again is a no-op.
        assert!(field.remove_at(1, 2).is_none());
        assert_eq!(field.remaining(), ROWS * COLUMNS - 1);
    }

    #[test]
    fn remove_at_out_of_range_is_none() {
        let mut field = BrickField::new(ROWS, COLUMNS, WINDOW_WIDTH);
        assert!(field.remove_at(ROWS, 0).is_none());
        assert!(field.remove_at(0, COLUMNS).is_none());
        assert_eq!(field.remaining(), ROWS * COLUMNS);
    }

    #[test]
    fn first_hit_scans_row_major() {
        let field = BrickField::new(ROWS, COLUMNS, WINDOW_WIDTH);
        // Straddles the boundary between (0, 0) and (0, 1) and reaches into
        // row 1 as well; the first slot in scan order must win.
        let probe = Rect::new(field.brick_width() - 10.0, 25.0, 20.0, 20.0);
        assert_eq!(field.first_hit(&probe), Some((0, 0)));
    }

    #[test]
    fn first_hit_skips_removed_bricks() {
        let mut field = BrickField::new(ROWS, COLUMNS, WINDOW_WIDTH);
        let probe = Rect::new(field.brick_width() - 10.0, 5.0, 20.0, 20.0);
        assert_eq!(field.first_hit(&probe), Some((0, 0)));

        field.remove_at(0, 0);
        assert_eq!(field.first_hit(&probe), Some((0, 1)));
    }
}
