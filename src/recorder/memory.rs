//! In-memory submission recorder

use anyhow::Result;
use async_trait::async_trait;

use super::traits::SubmissionRecorder;
use crate::state::Submission;

/// Keeps accepted submissions for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    submissions: Vec<Submission>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently recorded submission
    #[allow(dead_code)]
    pub fn last(&self) -> Option<&Submission> {
        self.submissions.last()
    }
}

#[async_trait]
impl SubmissionRecorder for MemoryRecorder {
    async fn record(&mut self, submission: Submission) -> Result<()> {
        tracing::debug!(id = %submission.id, "submission stored");
        self.submissions.push(submission);
        Ok(())
    }

    fn recorded_count(&self) -> usize {
        self.submissions.len()
    }
}
