//! Oracle chat transcript

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSpeaker {
    You,
    Oracle,
}

impl ChatSpeaker {
    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatSpeaker::You => "You",
            ChatSpeaker::Oracle => "Oracle",
        }
    }
}

impl std::fmt::Display for ChatSpeaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub speaker: ChatSpeaker,
    pub text: String,
}

/// Ordered oracle exchange history.
///
/// Lives independently of the battle lane: exchanges are strictly ordered
/// within the transcript but impose no ordering on battle turns. The
/// player's entry is recorded optimistically at submit time; a failed
/// exchange keeps that entry and raises a flag instead of rolling history
/// back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatTranscript {
    entries: Vec<ChatEntry>,
    last_failed: bool,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the player's question.
    ///
    /// Whitespace-only input is refused without touching history and
    /// without a request being owed; otherwise the entry is appended
    /// immediately and the text to send is returned.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        let question = raw.trim();
        if question.is_empty() {
            return None;
        }

        self.last_failed = false;
        self.entries.push(ChatEntry {
            speaker: ChatSpeaker::You,
            text: question.to_string(),
        });
        Some(question.to_string())
    }

    /// Record the oracle's answer to the pending question.
    pub fn resolve(&mut self, answer: impl Into<String>) {
        self.entries.push(ChatEntry {
            speaker: ChatSpeaker::Oracle,
            text: answer.into(),
        });
    }

    /// Mark the pending exchange as failed.
    ///
    /// The player's entry stays; no oracle entry is invented for it.
    pub fn resolve_failed(&mut self) {
        self.last_failed = true;
    }

    /// Whether the most recent exchange ended without an answer.
    /// Cleared by the next submit.
    pub fn last_failed(&self) -> bool {
        self.last_failed
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.last_failed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_question_is_a_no_op() {
        let mut transcript = ChatTranscript::new();

        assert_eq!(transcript.submit(""), None);
        assert_eq!(transcript.submit("   \n\t"), None);
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_submit_appends_you_entry_immediately() {
        let mut transcript = ChatTranscript::new();

        let sent = transcript.submit("Who's best?").unwrap();
        assert_eq!(sent, "Who's best?");
        assert_eq!(
            transcript.entries(),
            [ChatEntry {
                speaker: ChatSpeaker::You,
                text: "Who's best?".to_string(),
            }]
        );
    }

    #[test]
    fn test_resolve_appends_oracle_entry() {
        let mut transcript = ChatTranscript::new();
        transcript.submit("Who's best?").unwrap();
        transcript.resolve("The one you trained.");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[1].speaker, ChatSpeaker::Oracle);
        assert_eq!(transcript.entries()[1].text, "The one you trained.");
        assert!(!transcript.last_failed());
    }

    #[test]
    fn test_failed_exchange_keeps_question_and_raises_flag() {
        let mut transcript = ChatTranscript::new();
        transcript.submit("Hello?").unwrap();
        transcript.resolve_failed();

        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.entries()[0].speaker, ChatSpeaker::You);
        assert!(transcript.last_failed());
    }

    #[test]
    fn test_next_submit_clears_the_failure_flag() {
        let mut transcript = ChatTranscript::new();
        transcript.submit("Hello?").unwrap();
        transcript.resolve_failed();

        transcript.submit("Still there?").unwrap();
        assert!(!transcript.last_failed());
    }
}
