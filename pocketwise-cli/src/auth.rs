use anyhow::{Context, Result};
use pocketwise_agent::Provider;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::state::ensure_pocketwise_home;

/// Keys stored in `~/.pocketwise/auth.json`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthState {
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

pub fn load_auth() -> Result<AuthState> {
    load_auth_from(&ensure_pocketwise_home()?.join("auth.json"))
}

pub fn load_auth_from(p: &Path) -> Result<AuthState> {
    if !p.exists() {
        return Ok(AuthState::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Pick the key for `provider`.
///
/// `lookup` is the environment; `POCKETWISE_API_KEY` wins over the
/// provider-specific variable, which wins over auth.json.
pub fn resolve_api_key(
    provider: Provider,
    lookup: impl Fn(&str) -> Option<String>,
    stored: &AuthState,
) -> Option<String> {
    let provider_var = match provider {
        Provider::OpenAI => "OPENAI_API_KEY",
        Provider::Anthropic => "ANTHROPIC_API_KEY",
    };
    let from_file = match provider {
        Provider::OpenAI => stored.openai_api_key.clone(),
        Provider::Anthropic => stored.anthropic_api_key.clone(),
    };

    non_empty(lookup("POCKETWISE_API_KEY"))
        .or_else(|| non_empty(lookup(provider_var)))
        .or_else(|| non_empty(from_file))
}
