use bevy::prelude::*;

use crate::ui::hud::RadioButton;

#[cfg(target_arch = "wasm32")]
use constants::radio::STREAM_URL;

/// Whether the audio stream is currently playing.
#[derive(Resource, Default)]
pub struct RadioState {
    pub playing: bool,
}

#[cfg(target_arch = "wasm32")]
mod audio_element {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static AUDIO: RefCell<Option<web_sys::HtmlAudioElement>> = const { RefCell::new(None) };
    }

    pub fn play() {
        AUDIO.with(|slot| {
            let mut slot = slot.borrow_mut();
            if slot.is_none() {
                match web_sys::HtmlAudioElement::new_with_src(STREAM_URL) {
                    Ok(element) => *slot = Some(element),
                    Err(err) => {
                        warn!("failed to create audio element: {err:?}");
                        return;
                    }
                }
            }
            if let Some(element) = slot.as_ref() {
                // play() returns a promise; autoplay rejection surfaces there
                // and is fine to ignore, the user just presses again.
                let _ = element.play();
            }
        });
    }

    pub fn pause() {
        AUDIO.with(|slot| {
            if let Some(element) = slot.borrow().as_ref() {
                if let Err(err) = element.pause() {
                    warn!("failed to pause audio stream: {err:?}");
                }
            }
        });
    }

    pub fn request_fullscreen() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(root) = document.document_element() {
            if let Err(err) = root.request_fullscreen() {
                warn!("fullscreen request rejected: {err:?}");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod audio_element {
    pub fn play() {}
    pub fn pause() {}
    pub fn request_fullscreen() {}
}

/// Toggle playback on button press. Turning the radio on also requests
/// fullscreen, matching the kiosk-style presentation.
pub fn toggle_radio(
    mut state: ResMut<RadioState>,
    query: Query<&Interaction, (Changed<Interaction>, With<RadioButton>)>,
) {
    for interaction in &query {
        if *interaction != Interaction::Pressed {
            continue;
        }
        state.playing = !state.playing;
        if state.playing {
            info!("radio on");
            audio_element::play();
            audio_element::request_fullscreen();
        } else {
            info!("radio off");
            audio_element::pause();
        }
    }
}
