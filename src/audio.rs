use bevy::prelude::*;

use crate::assets::load_or_warn;
use crate::ball::{BounceEvent, BrickHitEvent};

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sounds)
            .add_systems(Update, (play_bounce, play_hit));
    }
}

/// Played on wall and paddle collisions.
pub const BOUNCE_SOUND: &str = "bounce.wav";
/// Played on brick destruction.
pub const HIT_SOUND: &str = "hit.wav";

/// Handles for the two collision sounds. `None` means the file was missing
/// at startup; triggers for that sound stay silent for the whole session.
#[derive(Debug, Resource)]
pub struct SoundHandles {
    pub bounce: Option<Handle<AudioSource>>,
    pub hit: Option<Handle<AudioSource>>,
}

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundHandles {
        bounce: load_or_warn(&asset_server, BOUNCE_SOUND),
        hit: load_or_warn(&asset_server, HIT_SOUND),
    });
}

fn play_bounce(
    mut commands: Commands,
    mut event_reader: EventReader<BounceEvent>,
    sounds: Res<SoundHandles>,
) {
    for _ in event_reader.iter() {
        if let Some(source) = &sounds.bounce {
            commands.spawn(AudioBundle {
                source: source.clone(),
                settings: PlaybackSettings::DESPAWN,
            });
        }
    }
}

fn play_hit(
    mut commands: Commands,
    mut event_reader: EventReader<BrickHitEvent>,
    sounds: Res<SoundHandles>,
) {
    for _ in event_reader.iter() {
        if let Some(source) = &sounds.hit {
            commands.spawn(AudioBundle {
                source: source.clone(),
                settings: PlaybackSettings::DESPAWN,
            });
        }
    }
}
