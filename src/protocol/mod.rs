pub mod delta;
pub mod frame;
pub mod types;
