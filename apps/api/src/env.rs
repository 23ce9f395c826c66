use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Deserializer};

fn default_port() -> u16 {
    8000
}

fn default_memories_api_base() -> String {
    hs_memories::DEFAULT_API_BASE.to_string()
}

fn default_memories_unique_id() -> String {
    hs_memories::DEFAULT_UNIQUE_ID.to_string()
}

fn default_cors_allowed_origins() -> String {
    "http://localhost:3000,http://127.0.0.1:3000".to_string()
}

fn default_ffmpeg_path() -> String {
    "ffmpeg".to_string()
}

fn default_hand_detector_python() -> PathBuf {
    PathBuf::from("python3")
}

fn default_hand_detector_script() -> PathBuf {
    PathBuf::from("scripts/hand_landmarks.py")
}

fn default_poll_attempts() -> u32 {
    hs_sign_detect::DEFAULT_POLL_ATTEMPTS
}

fn default_poll_interval_ms() -> u64 {
    hs_sign_detect::DEFAULT_POLL_INTERVAL.as_millis() as u64
}

pub fn filter_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Deserialize)]
pub struct Env {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default, deserialize_with = "filter_empty")]
    pub sentry_dsn: Option<String>,
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: String,

    pub memories_api_key: String,
    #[serde(default = "default_memories_api_base")]
    pub memories_api_base: String,
    #[serde(default = "default_memories_unique_id")]
    pub memories_unique_id: String,

    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: String,
    #[serde(default = "default_hand_detector_python")]
    pub hand_detector_python: PathBuf,
    #[serde(default = "default_hand_detector_script")]
    pub hand_detector_script: PathBuf,

    #[serde(default = "default_poll_attempts")]
    pub transcription_poll_attempts: u32,
    #[serde(default = "default_poll_interval_ms")]
    pub transcription_poll_interval_ms: u64,
}

impl Env {
    pub fn cors_origins(&self) -> impl Iterator<Item = &str> {
        self.cors_allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }
}

static ENV: OnceLock<Env> = OnceLock::new();

pub fn env() -> &'static Env {
    ENV.get_or_init(|| {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_path(manifest_dir.join(".env"));

        let env: Env = envy::from_env().expect("Failed to load environment");
        assert!(
            !env.memories_api_key.trim().is_empty(),
            "MEMORIES_API_KEY must not be empty"
        );
        env
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Env, envy::Error> {
        envy::from_iter(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let env = from_pairs(&[("MEMORIES_API_KEY", "sk-test")]).unwrap();

        assert_eq!(env.port, 8000);
        assert_eq!(env.memories_api_base, "https://api.memories.ai");
        assert_eq!(env.memories_unique_id, "sign-language-api");
        assert_eq!(env.transcription_poll_attempts, 15);
        assert_eq!(env.transcription_poll_interval_ms, 1000);
        assert!(env.sentry_dsn.is_none());
        assert_eq!(
            env.cors_origins().collect::<Vec<_>>(),
            ["http://localhost:3000", "http://127.0.0.1:3000"]
        );
    }

    #[test]
    fn missing_key_is_an_error() {
        assert!(from_pairs(&[("PORT", "9000")]).is_err());
    }

    #[test]
    fn empty_sentry_dsn_is_unset() {
        let env = from_pairs(&[("MEMORIES_API_KEY", "k"), ("SENTRY_DSN", "  ")]).unwrap();
        assert!(env.sentry_dsn.is_none());
    }

    #[test]
    fn cors_origins_are_trimmed() {
        let env = from_pairs(&[
            ("MEMORIES_API_KEY", "k"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example , ,https://b.example"),
        ])
        .unwrap();

        assert_eq!(
            env.cors_origins().collect::<Vec<_>>(),
            ["https://a.example", "https://b.example"]
        );
    }
}
