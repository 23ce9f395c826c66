#[derive(Debug, Clone, Default)]
pub struct SignApiConfig {
    /// Reported by `/health`; the detector runs either way.
    pub api_key_configured: bool,
}

impl SignApiConfig {
    pub fn new(api_key_configured: bool) -> Self {
        Self { api_key_configured }
    }
}
