//! pocketwise-agent: the chat agent, prompt building, and text-generation clients

pub mod agent;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod llm;
pub mod mock;
pub mod prompt;
pub mod session;

pub use agent::{AgentReply, DEFAULT_GENERATION_TIMEOUT, FinanceAgent};
pub use error::GenerationError;
pub use generator::{DisabledGenerator, TextGenerator};
pub use llm::{HttpGenerator, LlmConfig, Provider};
pub use mock::MockGenerator;
pub use session::{Exchange, SessionLog};
