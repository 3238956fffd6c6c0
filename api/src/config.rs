//! Dispatch API Configuration

use crate::models::{Resource, SkillGroup};
use serde::{Deserialize, Serialize};

/// Config loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Listen address
    pub bind_addr: String,
    /// Skill groups loaded at startup
    pub skill_groups: Vec<SkillGroup>,
    /// Engineers loaded at startup
    pub resources: Vec<Resource>,
    /// Demo data settings
    pub seed: SeedConfig,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".into(),
            skill_groups: vec![
                SkillGroup::new("L1", "Line 1 (Easiest)", 100),
                SkillGroup::new("L2", "Line 2 (Medium)", 200),
                SkillGroup::new("L3", "Line 3 (Hardest)", 300),
            ],
            resources: vec![
                Resource::new("R001", "Adela Parkson"),
                Resource::new("R002", "Christian Mad"),
                Resource::new("R003", "Jason Statham"),
                Resource::new("R004", "Frank Vanris"),
            ],
            seed: SeedConfig::default(),
        }
    }
}

impl DispatchConfig {
    /// Load from file
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Demo data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Tickets placed on the live queue
    pub queue_tickets: usize,
    /// Pre-closed tickets placed in the archive
    pub archived_tickets: usize,
    /// Fixed seed for reproducible demo data
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            queue_tickets: 40,
            archived_tickets: 15,
            rng_seed: None,
        }
    }
}
