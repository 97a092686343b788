pub mod now_playing;
pub mod stream;
