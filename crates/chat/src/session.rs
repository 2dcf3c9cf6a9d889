//! Interactive chat session state.

use crate::faq::FaqTable;
use crate::transcript::Transcript;
use std::sync::Arc;

/// One user's conversation: the shared FAQ table plus a private transcript.
///
/// Sessions never share a transcript. The FAQ table is read-only and may be
/// shared between sessions.
#[derive(Debug, Clone)]
pub struct ChatSession {
    faq: Arc<FaqTable>,
    transcript: Transcript,
}

impl ChatSession {
    pub fn new(faq: Arc<FaqTable>) -> Self {
        Self {
            faq,
            transcript: Transcript::new(),
        }
    }

    pub fn faq(&self) -> &FaqTable {
        &self.faq
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Append one completed turn: the question, then the reply.
    pub(crate) fn record_turn(&mut self, question: &str, reply: &str) {
        self.transcript.push_user(question);
        self.transcript.push_bot(reply);
    }

    /// Start over with an empty transcript. The FAQ table is kept.
    pub fn reset(&mut self) {
        tracing::debug!("Resetting session after {} entries", self.transcript.len());
        self.transcript.clear();
    }
}
