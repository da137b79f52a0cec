pub mod config;
pub mod dirs;
