//! The oracle chat lane

use std::sync::Arc;

use skirmish_session::ChatTranscript;

use crate::ClientError;
use crate::backend::Backend;

/// The chat lane: an exchange history against the oracle, decoupled from
/// battle turn sequencing. Both lanes may have a request outstanding at
/// the same time; neither waits for the other.
pub struct OracleChat<B> {
    backend: Arc<B>,
    transcript: ChatTranscript,
}

impl<B: Backend> OracleChat<B> {
    pub(crate) fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            transcript: ChatTranscript::new(),
        }
    }

    /// Submit a question.
    ///
    /// Blank input is a no-op: nothing is recorded and no request is
    /// made. Otherwise the question joins the transcript before the
    /// request goes out; a failed exchange keeps it there and flags the
    /// transcript instead of rolling history back.
    pub async fn ask(&mut self, raw: &str) -> Result<(), ClientError> {
        let Some(question) = self.transcript.submit(raw) else {
            return Ok(());
        };

        match self.backend.ask_oracle(&question).await {
            Ok(answer) => {
                self.transcript.resolve(answer);
                Ok(())
            }
            Err(error) => {
                tracing::warn!(error = %error, "Oracle exchange failed");
                self.transcript.resolve_failed();
                Err(ClientError::Backend(error))
            }
        }
    }

    pub fn transcript(&self) -> &ChatTranscript {
        &self.transcript
    }

    pub(crate) fn reset(&mut self) {
        self.transcript.clear();
    }
}
