use bevy::prelude::*;
use bevy::text::Font;

use crate::app_state::AppState;
use crate::assets::load_or_warn;
use crate::consts::COLOR_GAMEOVER_TEXT;

pub struct GameoverPlugin;

impl Plugin for GameoverPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_font)
            .add_systems(OnEnter(AppState::GameOver), on_gameover);
    }
}

/// Marker for everything that disappears when the session ends.
#[derive(Debug, Component)]
pub struct Playfield;

/// Face for the "GAME OVER" message. Bevy 0.11 ships no default font, so
/// the game carries one; if the file goes missing the message degrades to
/// a blank screen, with the startup warning naming the file.
pub const GAMEOVER_FONT: &str = "fonts/DejaVuSans-Bold.ttf";

const GAMEOVER_FONT_SIZE: f32 = 50.0;

#[derive(Debug, Resource)]
pub struct GameoverFont(pub Option<Handle<Font>>);

fn load_font(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(GameoverFont(load_or_warn(&asset_server, GAMEOVER_FONT)));
}

fn on_gameover(
    mut commands: Commands,
    playfield: Query<Entity, With<Playfield>>,
    font: Res<GameoverFont>,
) {
    // The board blanks out entirely; only the message stays on screen.
    for entity in playfield.iter() {
        commands.entity(entity).despawn_recursive();
    }

    commands.spawn(Text2dBundle {
        text: Text::from_section(
            "GAME OVER",
            TextStyle {
                font: font.0.clone().unwrap_or_default(),
                font_size: GAMEOVER_FONT_SIZE,
                color: COLOR_GAMEOVER_TEXT,
            },
        )
        .with_alignment(TextAlignment::Center),
        transform: Transform::from_xyz(0.0, 0.0, 5.0),
        ..default()
    });
}
