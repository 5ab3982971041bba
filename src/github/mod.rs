//! Source-control payload types handed to the pipeline.

pub mod payload;

pub use payload::{Commit, CommitAuthor, PushEvent, Repository};
