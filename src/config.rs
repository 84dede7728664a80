use aws_sdk_dynamodb::Client as DynamoDbClient;
use std::time::Duration;

use soilsense::DEFAULT_MAX_MESSAGE_LENGTH;

/// Configuration for the SoilBot API
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB client
    pub dynamodb_client: DynamoDbClient,
    /// Conversation log table; `None` sends every entry to the fallback log
    pub conversations_table: Option<String>,
    /// Maximum chat message length in characters
    pub max_message_length: usize,
}

impl Config {
    /// Create a new Config instance from environment variables
    pub async fn from_env() -> Result<Self, ConfigError> {
        let max_message_length =
            parse_max_message_length(std::env::var("SOILBOT_MAX_MESSAGE_LENGTH").ok())?;

        let conversations_table = std::env::var("CONVERSATIONS_TABLE")
            .ok()
            .filter(|name| !name.trim().is_empty());

        // Load AWS configuration with behavior version
        let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await;

        // Create DynamoDB client with appropriate timeouts
        let dynamodb_config = aws_sdk_dynamodb::config::Builder::from(&aws_config)
            .timeout_config(
                aws_sdk_dynamodb::config::timeout::TimeoutConfig::builder()
                    .operation_timeout(Duration::from_secs(25)) // Leave 5s buffer for Lambda timeout
                    .operation_attempt_timeout(Duration::from_secs(10))
                    .build(),
            )
            .build();

        let dynamodb_client = DynamoDbClient::from_conf(dynamodb_config);

        Ok(Config {
            dynamodb_client,
            conversations_table,
            max_message_length,
        })
    }

    /// Create a test configuration pointing at DynamoDB Local
    #[cfg(test)]
    pub async fn for_test(endpoint_url: &str, conversations_table: Option<String>) -> Self {
        use aws_sdk_dynamodb::config::{Credentials, Region};

        // Create test credentials
        let credentials =
            Credentials::new("test_access_key", "test_secret_key", None, None, "test");

        // Create DynamoDB client pointing to local endpoint
        let dynamodb_config = aws_sdk_dynamodb::config::Builder::new()
            .behavior_version(aws_sdk_dynamodb::config::BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(credentials)
            .endpoint_url(endpoint_url)
            .timeout_config(
                aws_sdk_dynamodb::config::timeout::TimeoutConfig::builder()
                    .operation_timeout(Duration::from_secs(2))
                    .operation_attempt_timeout(Duration::from_secs(1))
                    .build(),
            )
            .build();

        Config {
            dynamodb_client: DynamoDbClient::from_conf(dynamodb_config),
            conversations_table,
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
        }
    }
}

/// Parse the optional message length limit; absent means the default
fn parse_max_message_length(raw: Option<String>) -> Result<usize, ConfigError> {
    match raw {
        None => Ok(DEFAULT_MAX_MESSAGE_LENGTH),
        Some(value) => match value.trim().parse::<usize>() {
            Ok(limit) if limit > 0 => Ok(limit),
            _ => Err(ConfigError::InvalidValue(
                "SOILBOT_MAX_MESSAGE_LENGTH".to_string(),
                value,
            )),
        },
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}
