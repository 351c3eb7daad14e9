// Models module - record representations

pub mod subscription;

pub use subscription::{Plan, Subscription, SubscriptionDraft};
