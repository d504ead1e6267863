pub mod env_file;
pub mod layered;
pub mod memory;
pub mod process;
