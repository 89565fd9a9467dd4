//! Trait abstraction for the submission recorder to enable mocking in tests

use crate::state::Submission;
use anyhow::Result;
use async_trait::async_trait;

/// Receives submissions that passed validation.
///
/// Validation failures never reach a recorder; the App only calls
/// `record` with a snapshot captured from a clean form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRecorder: Send + Sync {
    /// Record an accepted submission
    async fn record(&mut self, submission: Submission) -> Result<()>;

    /// Number of submissions recorded so far
    fn recorded_count(&self) -> usize;
}
