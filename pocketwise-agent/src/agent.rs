//! The chat agent: classify, answer deterministically when possible, and
//! fall back to the text generator for everything else.

use chrono::{Local, NaiveDate, Utc};
use pocketwise_core::{ContextBundle, Intent, classify_with_reason, deterministic_reply};
use std::time::Duration;

use crate::error::GenerationError;
use crate::fallback::random_fallback;
use crate::generator::TextGenerator;
use crate::prompt::build_prompt;
use crate::session::{Exchange, SessionLog};

pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(8);

/// A reply plus the intent that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct AgentReply {
    pub intent: Intent,
    pub text: String,
    /// True when a canned reply replaced a failed generation
    pub used_fallback: bool,
}

pub struct FinanceAgent {
    generator: Box<dyn TextGenerator>,
    timeout: Duration,
    session: SessionLog,
}

impl FinanceAgent {
    pub fn new(generator: impl TextGenerator + 'static) -> Self {
        Self {
            generator: Box::new(generator),
            timeout: DEFAULT_GENERATION_TIMEOUT,
            session: SessionLog::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_history_pairs(mut self, pairs: usize) -> Self {
        self.session = SessionLog::new(pairs);
        self
    }

    pub fn session(&self) -> &SessionLog {
        &self.session
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Answer `message` using today's local date.
    pub async fn respond(&self, message: &str, ctx: &ContextBundle) -> AgentReply {
        self.respond_on(message, ctx, Local::now().date_naive()).await
    }

    /// Answer `message` as of `today`. Never fails.
    pub async fn respond_on(
        &self,
        message: &str,
        ctx: &ContextBundle,
        today: NaiveDate,
    ) -> AgentReply {
        let classification = classify_with_reason(message);
        tracing::debug!(
            intent = %classification.intent,
            keyword = classification.keyword.unwrap_or("-"),
            "Classified message"
        );

        let reply = match deterministic_reply(classification.intent, message, ctx, today) {
            Some(text) => AgentReply {
                intent: classification.intent,
                text,
                used_fallback: false,
            },
            None => self.general_reply(message, ctx, today).await,
        };

        self.session.record(Exchange {
            at: Utc::now(),
            intent: reply.intent,
            user: message.to_string(),
            assistant: reply.text.clone(),
        });
        reply
    }

    async fn general_reply(&self, message: &str, ctx: &ContextBundle, today: NaiveDate) -> AgentReply {
        let prompt = build_prompt(message, ctx, today);

        let outcome = match tokio::time::timeout(self.timeout, self.generator.generate(&prompt)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            Ok(Ok(_)) => Err(GenerationError::Empty),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(GenerationError::Timeout(self.timeout)),
        };

        match outcome {
            Ok(text) => AgentReply {
                intent: Intent::General,
                text,
                used_fallback: false,
            },
            Err(e) => {
                tracing::warn!(generator = self.generator.name(), error = %e, "Generation failed, using canned reply");
                AgentReply {
                    intent: Intent::General,
                    text: random_fallback().to_string(),
                    used_fallback: true,
                }
            }
        }
    }
}
