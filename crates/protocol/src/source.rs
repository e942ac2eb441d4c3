//! The repository data source boundary.
//!
//! Implementations talk to the hosting platform's API and own pagination,
//! retry/backoff, and rate-limit detection. The clustering engine only ever
//! sees the final, well-formed record list.

use crate::RepositoryRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Supplies the starred repositories of a user.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetches all starred repositories for `username`, in the source's
    /// listing order. Validating and sanitizing records is the source's
    /// responsibility, not the engine's.
    async fn starred(&self, username: &str) -> Result<Vec<RepositoryRecord>>;
}
