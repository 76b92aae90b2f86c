// src/notify/discord.rs
use reqwest::blocking::Client;
use serde::Serialize;

use super::alert::{Alert, Notifier, NotifyError};
use crate::config::consts::{EMBED_COLOR, WEBHOOK_TIMEOUT};
use crate::core::net;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WebhookPayload {
    pub content: String,
    pub embeds: Vec<Embed>,
}

impl From<&Alert> for WebhookPayload {
    fn from(alert: &Alert) -> Self {
        let embeds = alert
            .cards
            .iter()
            .map(|card| Embed {
                title: card.title.clone(),
                color: EMBED_COLOR,
                url: card.url.clone(),
                fields: card
                    .fields
                    .iter()
                    .map(|f| EmbedField { name: f.name.clone(), value: f.value.clone(), inline: true })
                    .collect(),
            })
            .collect();

        WebhookPayload { content: format!("**{}**", alert.summary), embeds }
    }
}

/// Posts alerts to a Discord channel webhook.
pub struct DiscordWebhook {
    client: Client,
    url: String,
}

impl DiscordWebhook {
    pub fn new(url: &str) -> Result<Self, NotifyError> {
        Ok(Self { client: net::build_client(None, WEBHOOK_TIMEOUT)?, url: s!(url) })
    }
}

impl Notifier for DiscordWebhook {
    fn send(&self, alert: &Alert) -> Result<(), NotifyError> {
        let resp = self.client.post(&self.url).json(&WebhookPayload::from(alert)).send()?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(NotifyError::Rejected(format!("{status}: {body}")));
        }
        Ok(())
    }
}
