//! Scenario tests for the FAQ → LLM → search chain.

use crate::messages;
use crate::{ChatSession, FallbackChain, FaqTable, ReplySource};
use faqbot_core::{AppError, AppResult};
use faqbot_llm::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use faqbot_search::{SearchClient, SearchOutcome};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[cfg(test)]
mod tests {
    use super::*;

    /// LLM fake that returns a fixed reply and records every request.
    struct ScriptedLlm {
        reply: Result<String, String>,
        requests: Mutex<Vec<LlmRequest>>,
    }

    impl ScriptedLlm {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl LlmClient for ScriptedLlm {
        fn provider_name(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(LlmResponse {
                    content: text.clone(),
                    model: request.model.clone(),
                    usage: LlmUsage::default(),
                }),
                Err(message) => Err(AppError::Llm(message.clone())),
            }
        }
    }

    /// Search fake that returns a fixed outcome and counts calls.
    struct ScriptedSearch {
        outcome: Result<SearchOutcome, String>,
        calls: AtomicUsize,
    }

    impl ScriptedSearch {
        fn returning(outcome: SearchOutcome) -> Arc<Self> {
            Arc::new(Self {
                outcome: Ok(outcome),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                outcome: Err(message.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl SearchClient for ScriptedSearch {
        fn provider_name(&self) -> &str {
            "scripted"
        }

        async fn search(&self, _query: &str) -> AppResult<SearchOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone().map_err(AppError::Search)
        }
    }

    fn chain(llm: &Arc<ScriptedLlm>, search: &Arc<ScriptedSearch>) -> FallbackChain {
        FallbackChain::new(
            llm.clone(),
            search.clone(),
            "gpt-4o-mini",
            "You are a helpful FAQ chatbot.",
        )
    }

    fn hours_table() -> FaqTable {
        FaqTable::from_reader("what are your hours?,9am-5pm\n".as_bytes())
    }

    #[tokio::test]
    async fn test_faq_hit_skips_llm() {
        let llm = ScriptedLlm::replying("unused");
        let search = ScriptedSearch::returning(SearchOutcome::NoResults);

        let reply = chain(&llm, &search)
            .answer(&hours_table(), "What Are Your Hours?")
            .await;

        assert_eq!(reply.text, "9am-5pm");
        assert_eq!(reply.source, ReplySource::Faq);
        assert!(reply.notices.is_empty());
        assert_eq!(llm.calls(), 0);
        assert_eq!(search.calls(), 0);
    }

    #[tokio::test]
    async fn test_llm_answer_used_verbatim() {
        let llm = ScriptedLlm::replying("Paris is the capital of France.");
        let search = ScriptedSearch::returning(SearchOutcome::Snippet("unused".into()));

        let reply = chain(&llm, &search)
            .answer(&FaqTable::empty(), "What is the capital of France?")
            .await;

        assert_eq!(reply.text, "Paris is the capital of France.");
        assert_eq!(reply.source, ReplySource::Llm);
        assert_eq!(llm.calls(), 1);
        assert_eq!(search.calls(), 0);
    }

    #[tokio::test]
    async fn test_llm_request_is_stateless() {
        let llm = ScriptedLlm::replying("Sure.");
        let search = ScriptedSearch::returning(SearchOutcome::NoResults);
        let chain = chain(&llm, &search);
        let mut session = ChatSession::new(Arc::new(FaqTable::empty()));

        chain.respond(&mut session, "first question").await;
        chain.respond(&mut session, "second question").await;

        let requests = llm.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        let last = &requests[1];
        assert_eq!(last.prompt, "second question");
        assert_eq!(last.system.as_deref(), Some("You are a helpful FAQ chatbot."));
        assert_eq!(last.model, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn test_uncertain_llm_falls_back_to_search() {
        let llm = ScriptedLlm::replying("I don't know the exact figure.");
        let search =
            ScriptedSearch::returning(SearchOutcome::Snippet("Approximately 8 billion.".into()));

        let reply = chain(&llm, &search)
            .answer(&FaqTable::empty(), "How many people live on Earth?")
            .await;

        assert_eq!(
            reply.text,
            "I am not sure, but here is what I found on the web: Approximately 8 billion."
        );
        assert_eq!(reply.source, ReplySource::WebSearch);
        assert_eq!(llm.calls(), 1);
        assert_eq!(search.calls(), 1);
    }

    #[tokio::test]
    async fn test_marker_inside_longer_answer_still_searches() {
        let llm = ScriptedLlm::replying("It is 42, though honestly I don't know the source.");
        let search = ScriptedSearch::returning(SearchOutcome::NoResults);

        let reply = chain(&llm, &search)
            .answer(&FaqTable::empty(), "What is the answer?")
            .await;

        assert_eq!(
            reply.text,
            messages::web_fallback(messages::NO_SEARCH_RESULTS)
        );
        assert_eq!(search.calls(), 1);
    }

    #[tokio::test]
    async fn test_disabled_search_scenario() {
        let llm = ScriptedLlm::replying("I don't know.");
        let search = ScriptedSearch::returning(SearchOutcome::Disabled);

        let reply = chain(&llm, &search)
            .answer(&FaqTable::empty(), "Anything?")
            .await;

        assert_eq!(
            reply.text,
            "I am not sure, but here is what I found on the web: Search functionality is disabled."
        );
    }

    #[tokio::test]
    async fn test_llm_failure_becomes_apology() {
        let llm = ScriptedLlm::failing("401 Unauthorized");
        let search = ScriptedSearch::returning(SearchOutcome::NoResults);

        let reply = chain(&llm, &search)
            .answer(&FaqTable::empty(), "Hello?")
            .await;

        assert_eq!(reply.text, messages::LLM_APOLOGY);
        assert_eq!(reply.source, ReplySource::Llm);
        assert_eq!(reply.notices.len(), 1);
        assert!(reply.notices[0].is_error());
        assert!(reply.notices[0].message.contains("401 Unauthorized"));
        assert_eq!(search.calls(), 0);
    }

    #[tokio::test]
    async fn test_search_failure_becomes_apology() {
        let llm = ScriptedLlm::replying("I don't know.");
        let search = ScriptedSearch::failing("quota exceeded");

        let reply = chain(&llm, &search)
            .answer(&FaqTable::empty(), "Hello?")
            .await;

        assert_eq!(
            reply.text,
            "I am not sure, but here is what I found on the web: Sorry, I encountered an error during search."
        );
        assert_eq!(reply.notices.len(), 1);
        assert!(reply.notices[0].message.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_transcript_alternates_in_order() {
        let llm = ScriptedLlm::replying("An answer.");
        let search = ScriptedSearch::returning(SearchOutcome::NoResults);
        let chain = chain(&llm, &search);
        let mut session = ChatSession::new(Arc::new(hours_table()));

        let questions = ["What are your hours?", "Who are you?", "Where are you?"];
        for question in questions {
            chain.respond(&mut session, question).await;
        }

        let entries = session.transcript().entries();
        assert_eq!(entries.len(), 2 * questions.len());
        for (i, question) in questions.iter().enumerate() {
            assert_eq!(entries[2 * i], format!("User: {}", question));
            assert!(entries[2 * i + 1].starts_with("Bot: "));
        }
        assert_eq!(entries[1], "Bot: 9am-5pm");
        assert_eq!(entries[3], "Bot: An answer.");
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn test_sessions_do_not_share_transcripts() {
        let llm = ScriptedLlm::replying("Hi.");
        let search = ScriptedSearch::returning(SearchOutcome::NoResults);
        let chain = chain(&llm, &search);
        let faq = Arc::new(FaqTable::empty());

        let mut first = ChatSession::new(faq.clone());
        let mut second = ChatSession::new(faq);
        chain.respond(&mut first, "one").await;
        chain.respond(&mut first, "two").await;
        chain.respond(&mut second, "three").await;

        assert_eq!(first.transcript().len(), 4);
        assert_eq!(second.transcript().entries(), ["User: three", "Bot: Hi."]);
    }
}
