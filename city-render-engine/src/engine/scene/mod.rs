pub mod grid;
pub mod lighting;
pub mod sun;
