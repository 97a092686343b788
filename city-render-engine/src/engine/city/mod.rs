pub mod assets;
pub mod building;
pub mod cars;
pub mod layout;
pub mod roads;
