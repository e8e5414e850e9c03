//! Data transfer objects shared by the pipeline and the HTTP layer.
//!
//! - `repository`: RepositoryReference, RepoEntry, RawRepositorySnapshot, FilteredPayload
//! - `summary`: SummarizeRequest, SummaryResult and its fallback text

pub mod repository;
pub mod summary;

pub use repository::*;
pub use summary::*;
