//! The narrow interface to an external text-generation service

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::{GenerationError, Result};

/// Returns text for a prompt, or fails.
///
/// Implementations should not retry or substitute fallbacks themselves; the
/// agent decides what to show when generation fails.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Short name for logs
    fn name(&self) -> &str;
}

/// Generator used when no API key or provider is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(GenerationError::NotConfigured)
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate(&self, prompt: &str) -> Result<String> {
        (**self).generate(prompt).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
