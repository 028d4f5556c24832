//! Application State
//!
//! Shared, read-only across handlers. The responder never mutates its catalog, so
//! no request needs exclusive access.

use std::sync::Arc;

use concierge_agent::Responder;
use concierge_config::Settings;
use concierge_persistence::InteractionLog;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub responder: Arc<Responder>,
    pub log: Arc<dyn InteractionLog>,
}

impl AppState {
    pub fn new(config: Settings, responder: Responder, log: Arc<dyn InteractionLog>) -> Self {
        Self {
            config: Arc::new(config),
            responder: Arc::new(responder),
            log,
        }
    }
}
