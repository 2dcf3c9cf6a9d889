//! Configuration management for the FAQ Bot.
//!
//! Configuration is assembled once at startup, in increasing precedence:
//! - Built-in defaults
//! - `.env` file in the working directory
//! - YAML config file (`faqbot.yaml`, or the path in `FAQBOT_CONFIG`)
//! - Environment variables
//! - Command-line flags
//!
//! Credentials are only ever read from the environment. The config file names
//! the variables that hold them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::notice::Notice;

pub const DEFAULT_FAQ_PATH: &str = "faq.csv";
pub const DEFAULT_CONFIG_FILE: &str = "faqbot.yaml";
pub const DEFAULT_PROVIDER: &str = "openai";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_LLM_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful FAQ chatbot.";
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

pub const LLM_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const SEARCH_API_KEY_ENV: &str = "GOOGLE_SEARCH_API_KEY";
pub const SEARCH_ENGINE_ID_ENV: &str = "GOOGLE_SEARCH_ENGINE_ID";

/// Main application configuration.
///
/// Built once and passed by reference into every client; never mutated
/// after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Config file that was merged, if any
    pub config_file: Option<PathBuf>,

    /// Path to the two-column FAQ CSV file
    pub faq_path: PathBuf,

    /// Completion service settings
    pub llm: LlmSettings,

    /// Web search settings
    pub search: SearchSettings,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Completion service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Provider identifier (currently "openai")
    pub provider: String,

    /// Base URL of the OpenAI-compatible API
    pub endpoint: String,

    /// Model identifier
    pub model: String,

    /// Fixed system instruction sent with every question
    pub system_prompt: String,

    /// Name of the environment variable holding the API key
    pub api_key_env: String,

    /// Resolved API key
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

/// Web search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Custom search endpoint
    pub endpoint: String,

    /// Name of the environment variable holding the search API key
    pub api_key_env: String,

    /// Name of the environment variable holding the search engine id
    pub engine_id_env: String,

    /// Resolved search API key
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Resolved search engine id
    pub engine_id: Option<String>,
}

impl SearchSettings {
    /// Search is usable only when both credentials are present.
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some() && self.engine_id.is_some()
    }
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    faq: Option<FaqFileConfig>,
    llm: Option<LlmFileConfig>,
    search: Option<SearchFileConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FaqFileConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LlmFileConfig {
    provider: Option<String>,
    endpoint: Option<String>,
    model: Option<String>,
    system_prompt: Option<String>,
    api_key_env: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchFileConfig {
    endpoint: Option<String>,
    api_key_env: Option<String>,
    engine_id_env: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            faq_path: PathBuf::from(DEFAULT_FAQ_PATH),
            llm: LlmSettings {
                provider: DEFAULT_PROVIDER.to_string(),
                endpoint: DEFAULT_LLM_ENDPOINT.to_string(),
                model: DEFAULT_MODEL.to_string(),
                system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
                api_key_env: LLM_API_KEY_ENV.to_string(),
                api_key: None,
            },
            search: SearchSettings {
                endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
                api_key_env: SEARCH_API_KEY_ENV.to_string(),
                engine_id_env: SEARCH_ENGINE_ID_ENV.to_string(),
                api_key: None,
                engine_id: None,
            },
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is applied first, without
    /// overriding variables that are already set.
    ///
    /// Environment variables:
    /// - `FAQBOT_CONFIG`: Path to the YAML config file
    /// - `FAQBOT_FAQ_PATH`: FAQ CSV path
    /// - `FAQBOT_MODEL`: Model identifier
    /// - `FAQBOT_LLM_ENDPOINT`: OpenAI-compatible base URL
    /// - `OPENAI_API_KEY`, `GOOGLE_SEARCH_API_KEY`, `GOOGLE_SEARCH_ENGINE_ID`:
    ///   credentials (variable names can be changed in the config file)
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use faqbot_core::config::AppConfig;
    ///
    /// let config = AppConfig::load(None).expect("Failed to load config");
    /// println!("FAQ file: {:?}", config.faq_path);
    /// ```
    pub fn load(config_file: Option<PathBuf>) -> AppResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {:?}", path);
        }

        let cwd = std::env::current_dir()?;
        Self::load_with(config_file, &cwd, |name| std::env::var(name).ok())
    }

    /// Load configuration with an explicit variable lookup and base directory.
    pub fn load_with<F>(config_file: Option<PathBuf>, base_dir: &Path, env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let explicit = config_file.or_else(|| env("FAQBOT_CONFIG").map(PathBuf::from));
        let config_path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file does not exist: {:?}",
                        path
                    )));
                }
                Some(path)
            }
            None => Some(base_dir.join(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
        };

        if let Some(path) = config_path {
            config.merge_yaml(&path)?;
            config.config_file = Some(path);
        }

        // Environment variables override YAML config
        if let Some(faq_path) = env("FAQBOT_FAQ_PATH") {
            config.faq_path = PathBuf::from(faq_path);
        }

        if let Some(model) = env("FAQBOT_MODEL") {
            config.llm.model = model;
        }

        if let Some(endpoint) = env("FAQBOT_LLM_ENDPOINT") {
            config.llm.endpoint = endpoint;
        }

        config.llm.api_key = non_empty(env(config.llm.api_key_env.as_str()));
        config.search.api_key = non_empty(env(config.search.api_key_env.as_str()));
        config.search.engine_id = non_empty(env(config.search.engine_id_env.as_str()));

        if let Some(level) = env("RUST_LOG") {
            config.log_level = Some(level);
        }

        if env("NO_COLOR").is_some() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &Path) -> AppResult<()> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        // An empty file deserializes to null
        let config_file: ConfigFile = serde_yaml::from_str::<Option<ConfigFile>>(&contents)
            .map_err(|e| {
                AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?
            .unwrap_or_default();

        if let Some(path) = config_file.faq.and_then(|faq| faq.path) {
            self.faq_path = PathBuf::from(path);
        }

        if let Some(llm) = config_file.llm {
            if let Some(provider) = llm.provider {
                self.llm.provider = provider;
            }
            if let Some(endpoint) = llm.endpoint {
                self.llm.endpoint = endpoint;
            }
            if let Some(model) = llm.model {
                self.llm.model = model;
            }
            if let Some(system_prompt) = llm.system_prompt {
                self.llm.system_prompt = system_prompt;
            }
            if let Some(api_key_env) = llm.api_key_env {
                self.llm.api_key_env = api_key_env;
            }
        }

        if let Some(search) = config_file.search {
            if let Some(endpoint) = search.endpoint {
                self.search.endpoint = endpoint;
            }
            if let Some(api_key_env) = search.api_key_env {
                self.search.api_key_env = api_key_env;
            }
            if let Some(engine_id_env) = search.engine_id_env {
                self.search.engine_id_env = engine_id_env;
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                self.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                self.no_color = !color;
            }
        }

        Ok(())
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over everything else.
    pub fn with_overrides(
        mut self,
        faq_path: Option<PathBuf>,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(faq_path) = faq_path {
            self.faq_path = faq_path;
        }

        if let Some(model) = model {
            self.llm.model = model;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Report missing credentials.
    ///
    /// A missing LLM key is an error notice, a missing search credential a
    /// warning. None of them stop the session.
    pub fn startup_notices(&self) -> Vec<Notice> {
        let mut notices = Vec::new();

        if self.llm.api_key.is_none() {
            notices.push(Notice::error(format!(
                "{} environment variable not set.",
                self.llm.api_key_env
            )));
        }

        if self.search.api_key.is_none() {
            notices.push(Notice::warning(format!(
                "{} environment variable not set. Search functionality will be limited.",
                self.search.api_key_env
            )));
        }

        if self.search.engine_id.is_none() {
            notices.push(Notice::warning(format!(
                "{} environment variable not set. Search functionality will be limited.",
                self.search.engine_id_env
            )));
        }

        notices
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
