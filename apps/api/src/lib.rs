//! Career Compass API: a bounded, fail-soft gateway between student profiles
//! and a hosted generation model, plus the client adapter that calls it.

pub mod client;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;

#[cfg(test)]
mod testing;
