//! Interactive chat loop.
//!
//! Reads one question per line, answers it through the fallback chain and
//! re-renders the whole transcript after every turn. Notices go to stderr so
//! stdout only carries the conversation.

use faqbot_chat::{ChatSession, FallbackChain, FaqTable};
use faqbot_core::{config::AppConfig, AppError, AppResult, Notice};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const TITLE: &str = "AI Chatbot for FAQs";
const PROMPT: &str = "Ask a question: ";

/// A running chat session bound to its answering pipeline.
pub struct ChatCommand {
    chain: FallbackChain,
    session: ChatSession,
    startup_notices: Vec<Notice>,
}

impl ChatCommand {
    /// Build the clients and load the FAQ table.
    ///
    /// Missing credentials and a missing FAQ file are collected as notices
    /// rather than errors.
    pub fn prepare(config: &AppConfig) -> AppResult<Self> {
        let mut startup_notices = config.startup_notices();

        let faq = load_faq(&config.faq_path, &mut startup_notices);
        let chain = FallbackChain::from_config(config)?;

        Ok(Self::with_parts(chain, faq, startup_notices))
    }

    pub fn with_parts(chain: FallbackChain, faq: FaqTable, startup_notices: Vec<Notice>) -> Self {
        Self {
            chain,
            session: ChatSession::new(Arc::new(faq)),
            startup_notices,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Run against the process stdin, stdout and stderr until EOF.
    pub async fn execute(&mut self) -> AppResult<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut stdout = std::io::stdout();
        let mut stderr = std::io::stderr();
        self.execute_with(stdin, &mut stdout, &mut stderr).await
    }

    /// Run the loop over arbitrary streams.
    pub async fn execute_with<R, W, E>(
        &mut self,
        input: R,
        out: &mut W,
        err: &mut E,
    ) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
        E: Write,
    {
        tracing::info!("Starting chat session");

        writeln!(out, "{}\n", TITLE)?;
        for notice in &self.startup_notices {
            writeln!(err, "{}", notice)?;
        }

        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                break;
            };

            // Whitespace-only input is still a question.
            let question = line.as_str();
            if question.is_empty() {
                continue;
            }

            let reply = self.chain.respond(&mut self.session, question).await;
            tracing::debug!("Reply from {}", reply.source.as_str());

            for notice in &reply.notices {
                writeln!(err, "{}", notice)?;
            }

            writeln!(out)?;
            write!(out, "{}", self.session.transcript().render())?;
            writeln!(out)?;
        }

        tracing::info!(
            "Chat session ended after {} entries",
            self.session.transcript().len()
        );
        Ok(())
    }
}

/// Load the FAQ table, degrading to an empty one with a notice.
fn load_faq(path: &Path, notices: &mut Vec<Notice>) -> FaqTable {
    match FaqTable::load(path) {
        Ok(table) => table,
        Err(e @ AppError::FaqNotFound(_)) => {
            tracing::warn!("{}", e);
            notices.push(Notice::warning(e.to_string()));
            FaqTable::empty()
        }
        Err(e) => {
            tracing::error!("{}", e);
            notices.push(Notice::error(e.to_string()));
            FaqTable::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faqbot_llm::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
    use faqbot_search::{SearchClient, SearchOutcome};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CannedLlm {
        reply: String,
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl LlmClient for CannedLlm {
        fn provider_name(&self) -> &str {
            "canned"
        }

        async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(LlmResponse {
                content: self.reply.clone(),
                model: request.model.clone(),
                usage: LlmUsage::default(),
            })
        }
    }

    struct NoSearch;

    #[async_trait::async_trait]
    impl SearchClient for NoSearch {
        fn provider_name(&self) -> &str {
            "none"
        }

        async fn search(&self, _query: &str) -> AppResult<SearchOutcome> {
            Ok(SearchOutcome::Disabled)
        }
    }

    fn command_with_faq(csv: &str, llm: Arc<CannedLlm>) -> ChatCommand {
        let chain = FallbackChain::new(
            llm,
            Arc::new(NoSearch),
            "gpt-4o-mini",
            "You are a helpful FAQ chatbot.",
        );
        let faq = FaqTable::from_reader(csv.as_bytes());
        ChatCommand::with_parts(chain, faq, vec![Notice::warning("search disabled")])
    }

    fn canned(reply: &str) -> Arc<CannedLlm> {
        Arc::new(CannedLlm {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    #[test]
    fn test_missing_faq_file_is_warning() {
        let dir = tempfile::tempdir().unwrap();
        let mut notices = Vec::new();
        let table = load_faq(&dir.path().join("faq.csv"), &mut notices);

        assert!(table.is_empty());
        assert_eq!(notices.len(), 1);
        assert!(!notices[0].is_error());
        assert!(notices[0].message.starts_with("FAQ file"));
        assert!(notices[0].to_string().starts_with("[warning] FAQ file"));
    }

    #[tokio::test]
    async fn test_loop_answers_from_faq_and_renders_transcript() {
        let llm = canned("unused");
        let mut command = command_with_faq("what are your hours?,9am-5pm\n", llm.clone());
        let input: &[u8] = b"\nWhat Are Your Hours?\n";
        let mut out = Vec::new();
        let mut err = Vec::new();

        command.execute_with(input, &mut out, &mut err).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(out.starts_with("AI Chatbot for FAQs"));
        assert!(out.contains("User: What Are Your Hours?\nBot: 9am-5pm\n"));
        assert!(err.contains("[warning] search disabled"));
        assert_eq!(command.session().transcript().len(), 2);
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_whitespace_only_line_is_answered() {
        let llm = canned("Could you rephrase that?");
        let mut command = command_with_faq("", llm.clone());
        let input: &[u8] = b"   \n";
        let mut out = Vec::new();
        let mut err = Vec::new();

        command.execute_with(input, &mut out, &mut err).await.unwrap();

        let entries = command.session().transcript().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], "User:    ");
        assert_eq!(entries[1], "Bot: Could you rephrase that?");
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
    }
}
