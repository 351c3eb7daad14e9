// API module - HTTP endpoints

use std::sync::Arc;

use crate::config::Config;
use crate::services::tracker::SubscriptionTracker;

pub mod health;
pub mod notifications;
pub mod subscriptions;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<SubscriptionTracker>,
    pub config: Config,
}
