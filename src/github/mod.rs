//! Repository fetcher: GitHub URL parsing and the two read-only REST calls
//! (root listing, README) that make up a `RawRepositorySnapshot`.

pub mod client;
pub mod reference;

pub use client::GitHubClient;
