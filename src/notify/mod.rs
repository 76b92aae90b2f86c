// src/notify/mod.rs
pub mod alert;
pub mod discord;

pub use alert::{
    area_label, compose_alert, dispatch, resolve_url, Alert, AlertCard, AlertField, AlertOutcome,
    Notifier, NotifyError, SkipReason,
};
pub use discord::DiscordWebhook;
