pub mod camera;
pub mod city;
pub mod effects;
pub mod palette;
pub mod radio;
pub mod render_settings;
