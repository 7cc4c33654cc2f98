use crate::TrainingError;

/// How each workout report is written to the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(TrainingError::Config(format!(
                "TRAINING_STATS_FORMAT must be `text` or `json`, got `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: String,
    pub format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, TrainingError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, TrainingError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let log_level = get("TRAINING_STATS_LOG_LEVEL")
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| "info".into());
        let format = match get("TRAINING_STATS_FORMAT") {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Self { log_level, format })
    }
}
