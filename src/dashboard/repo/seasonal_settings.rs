use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use std::collections::HashMap;

use crate::error::DatabaseError;
use soilsense::shared::domain::SeasonalSettings;

/// Fetch the settings row for a user
///
/// # Returns
/// * `Ok(Some(settings))` - Row found
/// * `Ok(None)` - User has no settings yet
/// * `Err(DatabaseError)` - DynamoDB or deserialization error
pub async fn get_settings(
    client: &DynamoDbClient,
    table_name: &str,
    user_id: &str,
) -> Result<Option<SeasonalSettings>, DatabaseError> {
    let result = client
        .get_item()
        .table_name(table_name)
        .key("user_id", AttributeValue::S(user_id.to_string()))
        .consistent_read(true)
        .send()
        .await
        .map_err(|e| DatabaseError::DynamoDb(format!("{:?}", e)))?;

    match result.item {
        Some(item) => Ok(Some(item_to_settings(item)?)),
        None => Ok(None),
    }
}

/// Insert a settings row only if the user has none
///
/// # Returns
/// * `Ok(true)` - Row created
/// * `Ok(false)` - A row already existed (ConditionalCheckFailedException)
pub async fn create_settings_if_absent(
    client: &DynamoDbClient,
    table_name: &str,
    settings: &SeasonalSettings,
) -> Result<bool, DatabaseError> {
    let result = client
        .put_item()
        .table_name(table_name)
        .set_item(Some(settings_to_item(settings)?))
        .condition_expression("attribute_not_exists(user_id)")
        .send()
        .await;

    match result {
        Ok(_) => Ok(true),
        Err(err) if is_conditional_check_failed(&err) => Ok(false),
        Err(err) => Err(DatabaseError::from(err)),
    }
}

/// Overwrite the settings row with its current in-memory state
pub async fn put_settings(
    client: &DynamoDbClient,
    table_name: &str,
    settings: &SeasonalSettings,
) -> Result<(), DatabaseError> {
    client
        .put_item()
        .table_name(table_name)
        .set_item(Some(settings_to_item(settings)?))
        .send()
        .await
        .map_err(|e| DatabaseError::DynamoDb(format!("{:?}", e)))?;

    Ok(())
}

/// Return the stored row, creating it from `defaults` when absent
///
/// A concurrent creator wins the conditional put; the row it wrote is read
/// back instead of ours.
pub async fn first_or_create(
    client: &DynamoDbClient,
    table_name: &str,
    defaults: SeasonalSettings,
) -> Result<SeasonalSettings, DatabaseError> {
    if let Some(existing) = get_settings(client, table_name, &defaults.user_id).await? {
        return Ok(existing);
    }

    if create_settings_if_absent(client, table_name, &defaults).await? {
        return Ok(defaults);
    }

    get_settings(client, table_name, &defaults.user_id)
        .await?
        .ok_or_else(|| {
            DatabaseError::DynamoDb(format!(
                "Settings for {} vanished after conditional put",
                defaults.user_id
            ))
        })
}

fn settings_to_item(
    settings: &SeasonalSettings,
) -> Result<HashMap<String, AttributeValue>, DatabaseError> {
    Ok(serde_dynamo::to_item(settings)?)
}

fn item_to_settings(item: HashMap<String, AttributeValue>) -> Result<SeasonalSettings, DatabaseError> {
    Ok(serde_dynamo::from_item(item)?)
}

fn is_conditional_check_failed(err: &aws_sdk_dynamodb::error::SdkError<PutItemError>) -> bool {
    use aws_sdk_dynamodb::error::SdkError;

    match err {
        SdkError::ServiceError(service_err) => {
            matches!(
                service_err.err(),
                PutItemError::ConditionalCheckFailedException(_)
            )
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soilsense::{default_seasonal_settings, PlantPreference, Season, SeasonMode};

    fn sample_settings() -> SeasonalSettings {
        default_seasonal_settings(
            "farmer-1",
            PlantPreference::Sawah,
            Season::Dry,
            "2024-05-01T08:00:00+00:00",
        )
    }

    #[test]
    fn test_settings_item_attributes() {
        let item = settings_to_item(&sample_settings()).unwrap();

        assert_eq!(item.get("user_id").unwrap().as_s().unwrap(), "farmer-1");
        assert_eq!(item.get("season_mode").unwrap().as_s().unwrap(), "auto");
        assert_eq!(item.get("current_season").unwrap().as_s().unwrap(), "dry");
        assert_eq!(item.get("monitoring_interval_dry").unwrap().as_n().unwrap(), "30");
        assert_eq!(
            *item.get("power_conservation_enabled").unwrap().as_bool().unwrap(),
            false
        );

        let dry = item.get("dry_season_settings").unwrap().as_m().unwrap();
        let number = |key: &str| dry.get(key).unwrap().as_n().unwrap().parse::<f64>().unwrap();
        assert_eq!(number("moisture_min"), 40.0);
        assert_eq!(number("ph_max"), 7.0);
    }

    #[test]
    fn test_settings_item_reads_back() {
        let mut settings = sample_settings();
        settings.season_mode = SeasonMode::ManualWet;
        settings.current_season = Season::Wet;

        let item = settings_to_item(&settings).unwrap();
        assert_eq!(item_to_settings(item).unwrap(), settings);
    }

    #[test]
    fn test_item_missing_fields_is_serialization_error() {
        let mut item = HashMap::new();
        item.insert("user_id".to_string(), AttributeValue::S("farmer-1".to_string()));

        assert!(matches!(
            item_to_settings(item),
            Err(DatabaseError::Serialization(_))
        ));
    }
}
