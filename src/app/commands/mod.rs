pub mod contexts;
pub mod render;
