// Services module - subscription lifecycle logic

pub mod notifications;
pub mod sheet_sync;
pub mod snapshot;
pub mod status;
pub mod store;
pub mod tracker;
