pub mod camera;
pub mod city;
pub mod core;
pub mod effects;
pub mod render;
pub mod scene;
pub mod spatial;
pub mod systems;
