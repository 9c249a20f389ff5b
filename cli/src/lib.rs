//! Command-line client for the community content API.
//!
//! Runs the same [`wtp_shared::ApiService`] the browser app uses, over
//! `reqwest`, and prints results as JSON. Useful for checking a backend
//! and for seeing exactly what the fallback paths serve.

pub mod cli;
pub mod commands;
