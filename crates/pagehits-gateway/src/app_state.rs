//! Shared application state for the pagehits gateway.
//!
//! Holds the validated config and the service the handler dispatches to.
//! Both front doors (Lambda, local router) clone this per request.

use std::sync::Arc;

use pagehits_core::{CounterService, VisitorService};

use crate::config::PageHitsConfig;
use crate::store::DynamoVisitorRepository;

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<PageHitsConfig>,
    service: Arc<dyn VisitorService>,
}

impl AppState {
    pub fn new(cfg: PageHitsConfig, service: Arc<dyn VisitorService>) -> Self {
        Self {
            cfg: Arc::new(cfg),
            service,
        }
    }

    /// Wire DynamoDB repository -> CounterService from config.
    pub async fn from_config(cfg: PageHitsConfig) -> Self {
        let repo = DynamoVisitorRepository::from_config(&cfg.store).await;
        let service = CounterService::new(Arc::new(repo));
        Self::new(cfg, Arc::new(service))
    }

    pub fn cfg(&self) -> &PageHitsConfig {
        &self.cfg
    }

    pub fn service(&self) -> Arc<dyn VisitorService> {
        Arc::clone(&self.service)
    }
}
