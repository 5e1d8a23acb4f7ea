use reqwest::Client;
use serde::Serialize;

use crate::error::RelayError;

const MESSAGE_TEXT: &str = "RunInstances event detected.";
const ATTACHMENT_TITLE: &str = "Instance Names";
const ALERT_COLOR: &str = "#FF0000";

#[derive(Debug, Serialize)]
struct SlackMessage {
    text: &'static str,
    attachments: Vec<SlackAttachment>,
}

#[derive(Debug, Serialize)]
struct SlackAttachment {
    author_name: String,
    title: &'static str,
    text: String,
    color: &'static str,
}

/// Posts launch summaries to the configured webhook. Holds the long-lived
/// HTTP client created at cold start.
pub struct SlackNotifier {
    client: Client,
    webhook_url: String,
}

impl SlackNotifier {
    pub fn new(client: Client, webhook_url: String) -> Self {
        Self {
            client,
            webhook_url,
        }
    }

    /// Sends one message and returns the raw HTTP status code. The code is
    /// for the caller to log; a non-2xx response is not a fault here. Only
    /// a request that cannot be sent at all (DNS failure, refused
    /// connection) is an error.
    pub async fn notify(
        &self,
        username: &str,
        role: &str,
        instance_ids: &[String],
    ) -> Result<u16, RelayError> {
        let message = build_message(username, role, instance_ids);

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .await
            .map_err(RelayError::Network)?;

        Ok(response.status().as_u16())
    }
}

fn build_message(username: &str, role: &str, instance_ids: &[String]) -> SlackMessage {
    SlackMessage {
        text: MESSAGE_TEXT,
        attachments: vec![SlackAttachment {
            author_name: format!("User: {}\nRole: {}", username, role),
            title: ATTACHMENT_TITLE,
            text: instance_ids.join("\n"),
            color: ALERT_COLOR,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_message_wire_shape() {
        let message = build_message("alice", "Admin", &ids(&["i-1", "i-2"]));

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "text": "RunInstances event detected.",
                "attachments": [{
                    "author_name": "User: alice\nRole: Admin",
                    "title": "Instance Names",
                    "text": "i-1\ni-2",
                    "color": "#FF0000"
                }]
            })
        );
    }

    #[test]
    fn test_message_single_instance_has_no_trailing_newline() {
        let message = build_message("alice", "Admin", &ids(&["i-1"]));
        assert_eq!(message.attachments[0].text, "i-1");
    }

    #[tokio::test]
    async fn test_notify_posts_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "text": "RunInstances event detected.",
                "attachments": [{
                    "author_name": "User: alice\nRole: Admin",
                    "title": "Instance Names",
                    "text": "i-1\ni-2",
                    "color": "#FF0000"
                }]
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let notifier = SlackNotifier::new(Client::new(), format!("{}/hook", mock_server.uri()));

        let status = notifier
            .notify("alice", "Admin", &ids(&["i-1", "i-2"]))
            .await
            .unwrap();
        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn test_notify_returns_error_status_without_fault() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let notifier = SlackNotifier::new(Client::new(), mock_server.uri());

        let status = notifier.notify("alice", "Admin", &ids(&["i-1"])).await.unwrap();
        assert_eq!(status, 500);
    }

    #[tokio::test]
    async fn test_notify_unreachable_endpoint_is_a_network_fault() {
        // Nothing listens here; the request cannot be sent at all.
        let notifier = SlackNotifier::new(
            Client::new(),
            "http://127.0.0.1:1/hook".to_string(),
        );

        let err = notifier
            .notify("alice", "Admin", &ids(&["i-1"]))
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Network(_)));
    }
}
