use aws_sdk_dynamodb::Client as DynamoDbClient;
use std::time::Duration;
use tracing::{info, warn};

use crate::repo::conversations::put_conversation_entry;
use soilsense::{Clock, ConversationEntry, IdGenerator, MessageType, Sender};

/// Upper bound on one durable log write; the request-path client allows far longer
pub const LOG_WRITE_TIMEOUT: Duration = Duration::from_secs(2);

/// Where a log entry ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutcome {
    Stored,
    Fallback,
}

/// Best-effort conversation log.
///
/// Tries the DynamoDB table first and falls back to a tracing line. Logging
/// never fails the request it belongs to.
pub struct ConversationLog<'a> {
    client: &'a DynamoDbClient,
    table_name: Option<&'a str>,
    clock: &'a dyn Clock,
    id_generator: &'a dyn IdGenerator,
    write_timeout: Duration,
}

impl<'a> ConversationLog<'a> {
    pub fn new(
        client: &'a DynamoDbClient,
        table_name: Option<&'a str>,
        clock: &'a dyn Clock,
        id_generator: &'a dyn IdGenerator,
    ) -> Self {
        Self {
            client,
            table_name,
            clock,
            id_generator,
            write_timeout: LOG_WRITE_TIMEOUT,
        }
    }

    pub fn with_write_timeout(mut self, write_timeout: Duration) -> Self {
        self.write_timeout = write_timeout;
        self
    }

    pub async fn record(
        &self,
        conversation_id: &str,
        sender: Sender,
        message_type: MessageType,
        message: &str,
        question_id: Option<&str>,
    ) -> LogOutcome {
        let entry = ConversationEntry {
            conversation_id: conversation_id.to_string(),
            entry_id: self.id_generator.entry_id(),
            message: message.to_string(),
            sender,
            message_type,
            question_id: question_id.map(str::to_string),
            created_at: self.clock.now_rfc3339(),
        };

        if let Some(table_name) = self.table_name {
            let write = put_conversation_entry(self.client, table_name, &entry);
            match tokio::time::timeout(self.write_timeout, write).await {
                Ok(Ok(())) => return LogOutcome::Stored,
                Ok(Err(e)) => {
                    warn!(
                        conversation_id = %conversation_id,
                        error = %e,
                        "Conversation log write failed, using fallback"
                    );
                }
                Err(_) => {
                    warn!(
                        conversation_id = %conversation_id,
                        timeout_ms = self.write_timeout.as_millis() as u64,
                        "Conversation log write timed out, using fallback"
                    );
                }
            }
        }

        info!("SoilBot [{}] {}: {}", conversation_id, sender.as_str(), message);
        LogOutcome::Fallback
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use aws_sdk_dynamodb::config::{Credentials, Region};
    use aws_sdk_dynamodb::Client as DynamoDbClient;
    use std::time::Duration;
    use tokio::net::TcpListener;

    /// Endpoint that accepts connections and never answers
    pub async fn silent_endpoint() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        format!("http://{}", addr)
    }

    /// Client with the same timeouts the deployed function uses
    pub fn client_with_production_timeouts(endpoint_url: &str) -> DynamoDbClient {
        let credentials =
            Credentials::new("test_access_key", "test_secret_key", None, None, "test");

        let config = aws_sdk_dynamodb::config::Builder::new()
            .behavior_version(aws_sdk_dynamodb::config::BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(credentials)
            .endpoint_url(endpoint_url)
            .timeout_config(
                aws_sdk_dynamodb::config::timeout::TimeoutConfig::builder()
                    .operation_timeout(Duration::from_secs(25))
                    .operation_attempt_timeout(Duration::from_secs(10))
                    .build(),
            )
            .build();

        DynamoDbClient::from_conf(config)
    }
}
