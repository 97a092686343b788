use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use serde::Deserialize;

use constants::radio::{FALLBACK_TRACK_LABEL, NOW_PLAYING_INTERVAL, NOW_PLAYING_URL};

/// The current track label shown in the HUD.
#[derive(Resource)]
pub struct NowPlaying {
    pub label: String,
}

impl Default for NowPlaying {
    fn default() -> Self {
        Self {
            label: FALLBACK_TRACK_LABEL.to_string(),
        }
    }
}

/// Thread-safe queue bridging async fetch completions back into the ECS.
/// The fetch future pushes labels; an Update system drains them.
#[derive(Resource, Clone, Default)]
pub struct TrackLabelQueue(pub Arc<Mutex<Vec<String>>>);

impl TrackLabelQueue {
    pub fn push(&self, label: String) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(label);
        }
    }

    pub fn drain_latest(&self) -> Option<String> {
        self.0
            .lock()
            .ok()
            .and_then(|mut queue| queue.drain(..).last())
    }
}

#[derive(Deserialize)]
struct NowPlayingResponse {
    now_playing: NowPlayingEntry,
}

#[derive(Deserialize)]
struct NowPlayingEntry {
    song: Song,
}

#[derive(Deserialize)]
struct Song {
    artist: String,
    title: String,
}

/// Extract "artist - title" from the station's JSON payload.
pub fn parse_track_label(body: &str) -> Option<String> {
    let response: NowPlayingResponse = serde_json::from_str(body).ok()?;
    Some(format!(
        "{} - {}",
        response.now_playing.song.artist, response.now_playing.song.title
    ))
}

/// Kick off a metadata fetch on a fixed cadence. The fetch itself runs as
/// a browser future and reports back through the queue; a failed fetch
/// pushes the fallback label instead of leaving the readout stale.
pub fn refresh_now_playing(
    time: Res<Time>,
    queue: Res<TrackLabelQueue>,
    mut last_fetch: Local<Option<f32>>,
) {
    let now = time.elapsed_secs();
    let due = match *last_fetch {
        None => true,
        Some(previous) => now - previous >= NOW_PLAYING_INTERVAL,
    };
    if !due {
        return;
    }
    *last_fetch = Some(now);
    spawn_fetch(queue.clone());
}

#[cfg(target_arch = "wasm32")]
fn spawn_fetch(queue: TrackLabelQueue) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    wasm_bindgen_futures::spawn_local(async move {
        let label = fetch_track_label().await;
        queue.push(label.unwrap_or_else(|| FALLBACK_TRACK_LABEL.to_string()));
    });

    async fn fetch_track_label() -> Option<String> {
        let window = web_sys::window()?;
        let response = JsFuture::from(window.fetch_with_str(NOW_PLAYING_URL))
            .await
            .ok()?;
        let response: web_sys::Response = response.dyn_into().ok()?;
        let text = JsFuture::from(response.text().ok()?).await.ok()?;
        parse_track_label(&text.as_string()?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_fetch(queue: TrackLabelQueue) {
    // No network stack on native builds; keep the fallback label current.
    queue.push(FALLBACK_TRACK_LABEL.to_string());
}

/// Apply the newest fetched label to the resource, dropping any backlog.
pub fn drain_track_labels(queue: Res<TrackLabelQueue>, mut now_playing: ResMut<NowPlaying>) {
    if let Some(label) = queue.drain_latest() {
        if now_playing.label != label {
            info!("now playing: {label}");
            now_playing.label = label;
        }
    }
}
