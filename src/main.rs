use bevy::prelude::*;
use breakout::{
    app_state::AppState,
    audio::SoundPlugin,
    ball::BallPlugin,
    brick::BrickPlugin,
    consts::{COLOR_BACKGROUND, TICK_RATE, WINDOW_HEIGHT, WINDOW_WIDTH},
    gameover::GameoverPlugin,
    paddle::PaddlePlugin,
    session::GameSession,
};

fn main() {
    App::new()
        .add_state::<AppState>()
        .insert_resource(ClearColor(COLOR_BACKGROUND))
        .insert_resource(FixedTime::new_from_secs(1.0 / TICK_RATE))
        .insert_resource(GameSession::new())
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "BreakOut".to_string(),
                        resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    // bounce.wav / hit.wav live next to the game, not in assets/
                    asset_folder: ".".to_string(),
                    ..default()
                }),
        )
        .add_plugins(PaddlePlugin)
        .add_plugins(BallPlugin)
        .add_plugins(BrickPlugin)
        .add_plugins(SoundPlugin)
        .add_plugins(GameoverPlugin)
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}
