use bevy::color::Srgba;

/// Neon pink (#ff2d95), the signature synthwave accent.
pub const NEON_PINK: Srgba = Srgba {
    red: 1.0,
    green: 0.17647059,
    blue: 0.58431373,
    alpha: 1.0,
};

/// Neon cyan (#00ffff).
pub const NEON_CYAN: Srgba = Srgba {
    red: 0.0,
    green: 1.0,
    blue: 1.0,
    alpha: 1.0,
};

/// Neon magenta (#ff00ff).
pub const NEON_MAGENTA: Srgba = Srgba {
    red: 1.0,
    green: 0.0,
    blue: 1.0,
    alpha: 1.0,
};

/// Neon mint (#00ff99).
pub const NEON_MINT: Srgba = Srgba {
    red: 0.0,
    green: 1.0,
    blue: 0.6,
    alpha: 1.0,
};

/// Deep violet night sky (#0a001a), used for clear color and fog.
pub const NIGHT_SKY: Srgba = Srgba {
    red: 0.039215688,
    green: 0.0,
    blue: 0.101960786,
    alpha: 1.0,
};

/// Pure white, shared by lit windows and headlights.
pub const WINDOW_WHITE: Srgba = Srgba {
    red: 1.0,
    green: 1.0,
    blue: 1.0,
    alpha: 1.0,
};

/// Taillight red (#ff0000).
pub const TAILLIGHT_RED: Srgba = Srgba {
    red: 1.0,
    green: 0.0,
    blue: 0.0,
    alpha: 1.0,
};

/// Emissive accent colors a building can draw from.
pub const BUILDING_EMISSIVES: [Srgba; 4] = [NEON_PINK, NEON_CYAN, NEON_MAGENTA, NEON_MINT];

/// Two-tone accent pair used by stars, cars and fireworks (50/50 pick).
pub const ACCENT_PAIR: [Srgba; 2] = [NEON_PINK, NEON_CYAN];
