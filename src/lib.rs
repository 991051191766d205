// Public API for front ends and integration tests

pub mod config;
pub mod entropy;
pub mod protocol;
pub mod session;
pub mod state;
pub mod types;
