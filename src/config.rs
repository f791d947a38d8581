use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub assessment: AssessmentConfig,
    pub speech: SpeechTuning,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

/// Assessment endpoint settings. The base address is the one configuration
/// value the engine itself depends on; it is injected here, never
/// hard-coded at the call site.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Voice settings forwarded to the playback backend
#[derive(Debug, Deserialize)]
pub struct SpeechTuning {
    pub language: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: "career-coach".to_string(),
            },
            assessment: AssessmentConfig::default(),
            speech: SpeechTuning::default(),
        }
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for SpeechTuning {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            rate: 1.0,
            pitch: 1.0,
        }
    }
}
