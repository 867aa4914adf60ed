pub mod in_memory;
pub mod steps;
pub mod world;
