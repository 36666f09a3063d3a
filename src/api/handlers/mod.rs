pub mod predict;
pub mod stats;
pub mod system;
