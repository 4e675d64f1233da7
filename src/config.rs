// src/config.rs
// Configuration handling module

use serde::Deserialize;
use std::env;
use std::fs;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub target: TargetConfig,
    pub http: HttpConfig,
    pub runner: RunnerConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TargetConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RunnerConfig {
    #[serde(default = "default_suite")]
    pub suite: String,
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    #[serde(default = "default_body_preview_len")]
    pub body_preview_len: usize,
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_suite() -> String {
    "full".to_string()
}

fn default_max_in_flight() -> usize {
    1
}

fn default_body_preview_len() -> usize {
    200
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());
        let config_path = env::var("APP_CONFIG").unwrap_or_else(|_| format!("config/{}.toml", env));

        let config_str = fs::read_to_string(&config_path)?;
        let mut config: Config = toml::from_str(&config_str)?;

        // Validate the target before any request goes out
        if !config.target.base_url.starts_with("http://") && !config.target.base_url.starts_with("https://")
        {
            return Err("target.base_url must be an http:// or https:// URL".into());
        }
        if config.runner.max_in_flight == 0 {
            return Err("runner.max_in_flight must be at least 1".into());
        }

        // Case paths always start with '/', so the base must not end with one
        config.target.base_url = config.target.base_url.trim_end_matches('/').to_string();

        Ok(config)
    }
}
