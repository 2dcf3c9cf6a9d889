//! Reply types produced by the fallback chain.

use faqbot_core::Notice;

/// Which tier of the fallback chain produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    /// Exact FAQ table match
    Faq,
    /// LLM completion, or its apology when the call failed
    Llm,
    /// Web search fallback after an uncertain LLM answer
    WebSearch,
}

impl ReplySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Faq => "faq",
            Self::Llm => "llm",
            Self::WebSearch => "web_search",
        }
    }
}

/// Answer to one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text appended to the transcript after `Bot: `
    pub text: String,

    /// Tier that produced the text
    pub source: ReplySource,

    /// Failures to show the user alongside the transcript
    pub notices: Vec<Notice>,
}

impl Reply {
    pub fn new(text: impl Into<String>, source: ReplySource) -> Self {
        Self {
            text: text.into(),
            source,
            notices: Vec::new(),
        }
    }
}
