pub mod filter;
pub mod generator;
pub mod render;
pub mod size;
pub mod walk;
