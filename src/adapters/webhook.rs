use std::time::Duration;

use error_stack::{report, ResultExt};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::instrument;

use crate::domain::status::CardColor;
use crate::ports::notifier::{Notifier, NotifierError};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";

#[derive(Debug, Serialize)]
struct AdaptiveCard {
    #[serde(rename = "type")]
    card_type: &'static str,
    #[serde(rename = "$schema")]
    schema: &'static str,
    body: Vec<CardContainer>,
}

#[derive(Debug, Serialize)]
struct CardContainer {
    #[serde(rename = "type")]
    container_type: &'static str,
    items: Vec<CardTextBlock>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CardTextBlock {
    #[serde(rename = "type")]
    block_type: &'static str,
    text: String,
    wrap: bool,
    spacing: &'static str,
    horizontal_alignment: &'static str,
    height: &'static str,
    style: &'static str,
    font_type: &'static str,
    size: &'static str,
    weight: &'static str,
    color: &'static str,
    is_subtle: bool,
}

impl AdaptiveCard {
    /// The fixed-shape status card: a single centered text block reading
    /// `BMS Service is <status>` in the given color.
    fn status_card(status_text: &str, color: CardColor) -> Self {
        AdaptiveCard {
            card_type: "AdaptiveCard",
            schema: CARD_SCHEMA,
            body: vec![CardContainer {
                container_type: "Container",
                items: vec![CardTextBlock {
                    block_type: "TextBlock",
                    text: format!("BMS Service is {status_text}"),
                    wrap: true,
                    spacing: "Medium",
                    horizontal_alignment: "Center",
                    height: "stretch",
                    style: "heading",
                    font_type: "Monospace",
                    size: "ExtraLarge",
                    weight: "Bolder",
                    color: color.as_str(),
                    is_subtle: true,
                }],
            }],
        }
    }
}

/// Posts status cards to the configured chat webhook.
pub struct WebhookNotifier {
    http: Client,
    webhook_url: Option<String>,
}

impl WebhookNotifier {
    pub fn new(webhook_url: Option<String>) -> error_stack::Result<Self, NotifierError> {
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .change_context(NotifierError::DeliveryFailed)?;

        Ok(WebhookNotifier {
            http,
            // An empty URL means unconfigured, same as an absent one.
            webhook_url: webhook_url.filter(|url| !url.is_empty()),
        })
    }
}

#[async_trait::async_trait]
impl Notifier for WebhookNotifier {
    #[instrument(skip(self))]
    async fn notify(
        &self,
        status_text: &str,
        color: CardColor,
    ) -> error_stack::Result<(), NotifierError> {
        let Some(webhook_url) = self.webhook_url.as_deref() else {
            tracing::info!("Webhook URL is not configured, skipping notification");
            return Ok(());
        };

        let card = AdaptiveCard::status_card(status_text, color);
        let response = self
            .http
            .post(webhook_url)
            .json(&card)
            .send()
            .await
            .change_context(NotifierError::DeliveryFailed)?;

        // The webhook transport acknowledges accepted cards with 202.
        if response.status() != StatusCode::ACCEPTED {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(report!(NotifierError::Rejected(format!(
                "status {status}: {body}"
            ))));
        }

        tracing::info!("Webhook message sent: {status_text}");
        Ok(())
    }
}
