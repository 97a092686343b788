pub mod fireworks;
pub mod fog;
pub mod starfield;
