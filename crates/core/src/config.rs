use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{ChunklineError, Result};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_usize(profile: &str, key: &str, default: usize) -> usize {
    profiled_env_opt(profile, key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub chunking: ChunkConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `CHUNKLINE_PROFILE` env var. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("CHUNKLINE_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            chunking: ChunkConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  chunking:    max_chars={}, overlap_chars={}",
            self.chunking.max_chars,
            self.chunking.overlap_chars
        );
    }
}

// ── Chunking ──────────────────────────────────────────────────

pub const DEFAULT_MAX_CHARS: usize = 1024;
pub const DEFAULT_OVERLAP_CHARS: usize = 128;

/// Window sizing for the chunker, in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Hard upper bound on a raw, untrimmed window (default: 1024).
    pub max_chars: usize,
    /// Units by which consecutive raw windows overlap (default: 128).
    pub overlap_chars: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            overlap_chars: DEFAULT_OVERLAP_CHARS,
        }
    }
}

impl ChunkConfig {
    pub fn new(max_chars: usize, overlap_chars: usize) -> Self {
        Self {
            max_chars,
            overlap_chars,
        }
    }

    fn from_env_profiled(p: &str) -> Self {
        Self {
            max_chars: profiled_env_usize(p, "CHUNK_MAX_CHARACTERS", DEFAULT_MAX_CHARS),
            overlap_chars: profiled_env_usize(p, "CHUNK_CHARACTER_OVERLAP", DEFAULT_OVERLAP_CHARS),
        }
    }

    /// Nominal cursor advance between windows that end without a newline.
    pub fn stride(&self) -> usize {
        self.max_chars.saturating_sub(self.overlap_chars)
    }

    /// Whether the chunker can make full-stride progress with these values.
    pub fn is_degenerate(&self) -> bool {
        self.max_chars == 0 || self.overlap_chars >= self.max_chars
    }

    /// Reject sizes the chunker would only survive through its progress guard.
    pub fn validate(&self) -> Result<()> {
        if self.max_chars == 0 {
            return Err(ChunklineError::InvalidConfig(
                "max_chars must be greater than zero".to_string(),
            ));
        }
        if self.overlap_chars >= self.max_chars {
            return Err(ChunklineError::InvalidConfig(format!(
                "overlap_chars ({}) must be less than max_chars ({})",
                self.overlap_chars, self.max_chars
            )));
        }
        Ok(())
    }
}
