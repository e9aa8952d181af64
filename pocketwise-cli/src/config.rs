use anyhow::{Context, Result};
use pocketwise_agent::{LlmConfig, Provider};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::state::ensure_pocketwise_home;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub llm: LlmSection,
    pub chat: ChatSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LlmSection {
    /// "openai" or "anthropic"
    pub provider: String,
    /// Empty means the provider's default model
    pub model: String,
    /// Empty means the provider's public endpoint
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChatSection {
    pub history_pairs: usize,
    pub recent_transactions: usize,
}

impl Default for LlmSection {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: String::new(),
            base_url: String::new(),
            temperature: 0.4,
            max_tokens: 450,
            timeout_secs: pocketwise_agent::DEFAULT_GENERATION_TIMEOUT.as_secs(),
        }
    }
}

impl Default for ChatSection {
    fn default() -> Self {
        Self {
            history_pairs: pocketwise_agent::session::DEFAULT_HISTORY_PAIRS,
            recent_transactions: pocketwise_store::DEFAULT_RECENT_LIMIT,
        }
    }
}

impl LlmSection {
    pub fn provider(&self) -> Result<Provider> {
        self.provider
            .parse::<Provider>()
            .map_err(anyhow::Error::msg)
            .context("invalid [llm] provider in config.toml")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Client settings for the configured provider, with `api_key` filled in
    pub fn to_client_config(&self, api_key: String) -> Result<LlmConfig> {
        let mut cfg = LlmConfig::new(self.provider()?, api_key);
        if !self.model.trim().is_empty() {
            cfg = cfg.with_model(self.model.trim());
        }
        if !self.base_url.trim().is_empty() {
            cfg = cfg.with_base_url(self.base_url.trim());
        }
        cfg.temperature = self.temperature;
        cfg.max_tokens = self.max_tokens;
        Ok(cfg)
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_pocketwise_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config_to(p: &Path, cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&p, &Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let p = config_path()?;
    let cfg = load_config_from(&p)?;
    if !p.exists() {
        println!("# {} not found, showing defaults", p.display());
    }
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}
