pub mod core;
pub mod effects;
pub mod shared;
