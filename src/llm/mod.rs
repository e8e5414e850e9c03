//! Summary generation against an OpenAI-compatible completion endpoint.
//!
//! - `prompt`: fixed system instruction and the user message built from a payload
//! - `extract`: pulls a JSON object out of free-form model output
//! - `client`: the HTTP call
//! - `generator`: prompt → call → parse, with the fallback path

pub mod client;
pub mod extract;
pub mod generator;
pub mod prompt;

pub use client::CompletionClient;
pub use generator::SummaryGenerator;
