use std::sync::Arc;

use hs_sign_detect::SignDetector;

use crate::config::SignApiConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) detector: Arc<dyn SignDetector>,
    pub(crate) config: SignApiConfig,
}
