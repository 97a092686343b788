/// Now-playing metadata endpoint, polled on a fixed cadence.
pub const NOW_PLAYING_URL: &str = "https://nightride.fm/api/now-playing";

/// Streaming audio source for the radio toggle.
pub const STREAM_URL: &str = "https://nightride.fm/stream/nightride.m4a";

/// Label shown when the metadata fetch fails or has not resolved yet.
pub const FALLBACK_TRACK_LABEL: &str = "Nightride.FM Synthwave";

/// Seconds between now-playing refreshes.
pub const NOW_PLAYING_INTERVAL: f32 = 10.0;
