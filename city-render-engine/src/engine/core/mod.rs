pub mod quality;
pub mod window_config;
