use std::sync::Arc;

use gate_core::services::GateService;
use gate_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<GateService>,
    pub config: AppConfig,
}
