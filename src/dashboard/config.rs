use aws_sdk_dynamodb::Client as DynamoDbClient;
use std::time::Duration;

use soilsense::{DemoSensorSource, SensorSource, SimulatedSensorSource};

/// Which reading the dashboard shows as "current"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorSourceKind {
    Demo,
    Simulated,
}

impl SensorSourceKind {
    fn parse(raw: Option<String>) -> Result<Self, DashboardConfigError> {
        match raw.as_deref().map(str::trim) {
            None | Some("") | Some("demo") => Ok(SensorSourceKind::Demo),
            Some("simulated") => Ok(SensorSourceKind::Simulated),
            Some(other) => Err(DashboardConfigError::InvalidValue(
                "SENSOR_SOURCE".to_string(),
                other.to_string(),
            )),
        }
    }
}

/// Configuration for the Dashboard API
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// DynamoDB client
    pub dynamodb_client: DynamoDbClient,
    /// Seasonal settings table name
    pub seasonal_settings_table: String,
    /// Service token for Bearer authentication
    pub service_token: String,
    /// CORS allowed origin
    pub cors_allowed_origin: String,
    pub sensor_source: SensorSourceKind,
}

impl DashboardConfig {
    /// Create a new DashboardConfig instance from environment variables
    pub async fn from_env() -> Result<Self, DashboardConfigError> {
        let seasonal_settings_table = std::env::var("SEASONAL_SETTINGS_TABLE").map_err(|_| {
            DashboardConfigError::MissingEnvVar("SEASONAL_SETTINGS_TABLE".to_string())
        })?;

        let service_token = std::env::var("SERVICE_TOKEN")
            .map_err(|_| DashboardConfigError::MissingEnvVar("SERVICE_TOKEN".to_string()))?;

        let cors_allowed_origin =
            std::env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| "*".to_string());

        let sensor_source = SensorSourceKind::parse(std::env::var("SENSOR_SOURCE").ok())?;

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

        Ok(DashboardConfig {
            dynamodb_client: DynamoDbClient::from_conf(dynamodb_config),
            seasonal_settings_table,
            service_token,
            cors_allowed_origin,
            sensor_source,
        })
    }

    /// Reading source selected by SENSOR_SOURCE
    pub fn sensor_source(&self) -> &'static dyn SensorSource {
        match self.sensor_source {
            SensorSourceKind::Demo => &DemoSensorSource,
            SensorSourceKind::Simulated => &SimulatedSensorSource,
        }
    }

    /// Create a test configuration with custom values
    /// This is useful for integration tests with DynamoDB Local
    #[cfg(test)]
    pub async fn for_test(endpoint_url: &str, seasonal_settings_table: &str, service_token: &str) -> Self {
        use aws_sdk_dynamodb::config::{Credentials, Region};

        let credentials =
            Credentials::new("test_access_key", "test_secret_key", None, None, "test");

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

        DashboardConfig {
            dynamodb_client: DynamoDbClient::from_conf(dynamodb_config),
            seasonal_settings_table: seasonal_settings_table.to_string(),
            service_token: service_token.to_string(),
            cors_allowed_origin: "*".to_string(),
            sensor_source: SensorSourceKind::Demo,
        }
    }
}

/// Configuration errors for the Dashboard API
#[derive(Debug, thiserror::Error)]
pub enum DashboardConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use soilsense::FixedClock;

    #[test]
    fn test_sensor_source_defaults_to_demo() {
        assert_eq!(SensorSourceKind::parse(None).unwrap(), SensorSourceKind::Demo);
        assert_eq!(
            SensorSourceKind::parse(Some(" ".to_string())).unwrap(),
            SensorSourceKind::Demo
        );
        assert_eq!(
            SensorSourceKind::parse(Some("simulated".to_string())).unwrap(),
            SensorSourceKind::Simulated
        );
    }

    #[test]
    fn test_sensor_source_rejects_unknown() {
        match SensorSourceKind::parse(Some("live".to_string())) {
            Err(DashboardConfigError::InvalidValue(var, value)) => {
                assert_eq!(var, "SENSOR_SOURCE");
                assert_eq!(value, "live");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_demo_source_reading() {
        let config = DashboardConfig::for_test("http://localhost:8000", "settings", "token").await;
        let clock = FixedClock::from_rfc3339("2024-05-01T08:00:00Z").unwrap();

        let reading = config.sensor_source().current_reading(&clock);
        assert_eq!(reading.moisture, Some(63.0));
        assert_eq!(reading.ph, Some(6.8));
    }
}
