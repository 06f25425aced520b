//! Thin HTTP adapters: parse the request body, call the engine, serialize
//! the outcome. No orchestration logic lives here.

pub mod feedback;
pub mod search;
