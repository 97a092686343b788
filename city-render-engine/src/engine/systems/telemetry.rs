use bevy::prelude::*;

use crate::ui::hud::{FpsText, PositionText};

/// Rolling one-second frame counter. The published rate only changes when
/// a window closes, so the readout is stable rather than jittering every
/// frame.
#[derive(Resource)]
pub struct FpsWindow {
    frames: u32,
    window_start: f32,
    fps: u32,
}

impl Default for FpsWindow {
    fn default() -> Self {
        Self {
            frames: 0,
            window_start: 0.0,
            fps: 0,
        }
    }
}

impl FpsWindow {
    /// Count one frame; returns the new rate when a full second has
    /// elapsed since the window opened. The count is scaled by the actual
    /// window length — a window that closes late must not overstate the
    /// rate.
    pub fn tick(&mut self, now: f32) -> Option<u32> {
        self.frames += 1;
        let elapsed = now - self.window_start;
        if elapsed >= 1.0 {
            self.fps = (self.frames as f32 / elapsed).round() as u32;
            self.frames = 0;
            self.window_start = now;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

pub fn update_fps_counter(
    time: Res<Time>,
    mut window: ResMut<FpsWindow>,
    mut query: Query<&mut Text, With<FpsText>>,
) {
    if let Some(fps) = window.tick(time.elapsed_secs()) {
        for mut text in &mut query {
            text.0 = format!("FPS: {fps}");
        }
    }
}

pub fn update_position_readout(
    camera_query: Query<&Transform, With<Camera3d>>,
    mut query: Query<&mut Text, With<PositionText>>,
) {
    let Ok(transform) = camera_query.single() else {
        return;
    };
    let p = transform.translation;
    for mut text in &mut query {
        text.0 = format!("X: {:.0} Y: {:.0} Z: {:.0}", p.x, p.y, p.z);
    }
}
