pub mod patch;
pub mod targets;
pub mod write;
