//! Fallback chain orchestration.
//!
//! For each question the chain walks FAQ → LLM → web search and stops at the
//! first tier that produces an answer. Every client is called at most once
//! per question, in that order, and no failure escapes: errors become fixed
//! apology text plus a notice for the user.

use crate::faq::FaqTable;
use crate::messages;
use crate::session::ChatSession;
use crate::types::{Reply, ReplySource};
use faqbot_core::{AppConfig, AppResult, Notice};
use faqbot_llm::{create_client, LlmClient, LlmRequest};
use faqbot_search::{create_search_client, SearchClient};
use std::sync::Arc;

/// LLM replies containing this text are treated as "don't know".
///
/// Case-sensitive substring match anywhere in the reply. This is loose on
/// purpose: a useful answer that merely mentions the phrase still triggers
/// the web search.
pub const UNCERTAINTY_MARKER: &str = "I don't know";

/// Whether an LLM reply should fall back to web search.
pub fn is_uncertain(text: &str) -> bool {
    text.contains(UNCERTAINTY_MARKER)
}

/// Steps of the fallback chain for a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackStage {
    FaqCheck,
    LlmCheck,
    SearchFallback,
    Done(Reply),
}

impl FallbackStage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FaqCheck => "faq_check",
            Self::LlmCheck => "llm_check",
            Self::SearchFallback => "search_fallback",
            Self::Done(_) => "done",
        }
    }
}

/// The FAQ → LLM → search answering pipeline.
pub struct FallbackChain {
    llm: Arc<dyn LlmClient>,
    search: Arc<dyn SearchClient>,
    model: String,
    system_prompt: String,
}

impl FallbackChain {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        search: Arc<dyn SearchClient>,
        model: impl Into<String>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            llm,
            search,
            model: model.into(),
            system_prompt: system_prompt.into(),
        }
    }

    /// Build the chain with the clients named by the configuration.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let llm = create_client(&config.llm)?;
        let search = create_search_client(&config.search);
        Ok(Self::new(
            llm,
            search,
            &config.llm.model,
            &config.llm.system_prompt,
        ))
    }

    /// Decide the reply for `question` without touching any transcript.
    pub async fn answer(&self, faq: &FaqTable, question: &str) -> Reply {
        let mut notices = Vec::new();
        let mut stage = FallbackStage::FaqCheck;

        loop {
            tracing::debug!(stage = stage.name(), "Fallback chain step");

            stage = match stage {
                FallbackStage::FaqCheck => match faq.lookup(question) {
                    Some(answer) => FallbackStage::Done(Reply::new(answer, ReplySource::Faq)),
                    None => FallbackStage::LlmCheck,
                },
                FallbackStage::LlmCheck => {
                    let text = self.complete(question, &mut notices).await;
                    if is_uncertain(&text) {
                        tracing::info!("LLM reply contains uncertainty marker, searching the web");
                        FallbackStage::SearchFallback
                    } else {
                        FallbackStage::Done(Reply::new(text, ReplySource::Llm))
                    }
                }
                FallbackStage::SearchFallback => {
                    let result = self.search(question, &mut notices).await;
                    FallbackStage::Done(Reply::new(
                        messages::web_fallback(&result),
                        ReplySource::WebSearch,
                    ))
                }
                FallbackStage::Done(mut reply) => {
                    tracing::info!(source = reply.source.as_str(), "Answered question");
                    reply.notices = notices;
                    return reply;
                }
            };
        }
    }

    /// Answer `question` and record the turn in the session transcript.
    pub async fn respond(&self, session: &mut ChatSession, question: &str) -> Reply {
        let reply = self.answer(session.faq(), question).await;
        session.record_turn(question, &reply.text);
        reply
    }

    /// One completion call; failures become the apology text.
    async fn complete(&self, question: &str, notices: &mut Vec<Notice>) -> String {
        let request =
            LlmRequest::new(question, self.model.as_str()).with_system(self.system_prompt.as_str());

        match self.llm.complete(&request).await {
            Ok(response) => response.content,
            Err(e) => {
                tracing::error!("Completion via {} failed: {}", self.llm.provider_name(), e);
                notices.push(messages::llm_failure_notice(&e));
                messages::LLM_APOLOGY.to_string()
            }
        }
    }

    /// One search call; failures become the search apology text.
    async fn search(&self, question: &str, notices: &mut Vec<Notice>) -> String {
        match self.search.search(question).await {
            Ok(outcome) => messages::search_text(&outcome).to_string(),
            Err(e) => {
                tracing::error!("Search via {} failed: {}", self.search.provider_name(), e);
                notices.push(messages::search_failure_notice(&e));
                messages::SEARCH_APOLOGY.to_string()
            }
        }
    }
}
