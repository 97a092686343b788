use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::render_settings::{
    MOBILE_BLOOM_BASE, MOBILE_BLOOM_HEIGHT_BONUS, MOBILE_BLOOM_LOW_FREQUENCY_BOOST, PostSettings,
};

/// Coarse user-agent sniff; good enough to decide between the desktop and
/// mobile bloom tier.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    ["Mobi", "Android", "iPhone", "iPad"]
        .iter()
        .any(|needle| user_agent.contains(needle))
}

#[cfg(target_arch = "wasm32")]
fn detect_mobile() -> bool {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .is_some_and(|ua| is_mobile_user_agent(&ua))
}

#[cfg(not(target_arch = "wasm32"))]
fn detect_mobile() -> bool {
    false
}

/// Lower bloom strength and spread for the mobile tier.
pub fn mobile_overrides(settings: &mut PostSettings) {
    settings.bloom_base = MOBILE_BLOOM_BASE;
    settings.bloom_height_bonus = MOBILE_BLOOM_HEIGHT_BONUS;
    settings.bloom_low_frequency_boost = MOBILE_BLOOM_LOW_FREQUENCY_BOOST;
}

/// Drop bloom strength/spread and pin the scale factor on mobile devices.
pub fn apply_quality_settings(
    mut settings: ResMut<PostSettings>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !detect_mobile() {
        return;
    }
    info!("mobile user agent detected, applying reduced quality tier");
    mobile_overrides(&mut settings);
    for mut window in &mut windows {
        window.resolution.set_scale_factor_override(Some(1.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_common_mobile_user_agents() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile"
        ));
        assert!(is_mobile_user_agent("Mozilla/5.0 (iPad; CPU OS 16_0)"));
    }

    #[test]
    fn mobile_tier_lowers_bloom_strength_and_spread() {
        use constants::render_settings::POST_SETTINGS;

        let mut settings = POST_SETTINGS;
        mobile_overrides(&mut settings);
        assert!(settings.bloom_base < POST_SETTINGS.bloom_base);
        assert!(settings.bloom_height_bonus < POST_SETTINGS.bloom_height_bonus);
        assert!(
            settings.bloom_low_frequency_boost < POST_SETTINGS.bloom_low_frequency_boost
        );
    }

    #[test]
    fn desktop_user_agents_pass_through() {
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36"
        ));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0)"
        ));
    }
}
