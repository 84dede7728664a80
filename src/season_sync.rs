use anyhow::{anyhow, Context};
use aws_lambda_events::event::cloudwatch_events::CloudWatchEvent;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use chrono::NaiveDate;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::collections::HashMap;
use std::env;
use tracing::{error, info};

use soilsense::{detect_current_season, Clock, Season, SeasonMode, SeasonalSettings, SystemClock};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;
    let dynamodb_client = DynamoDbClient::new(&config);

    let settings_table = env::var("SEASONAL_SETTINGS_TABLE")
        .map_err(|_| anyhow!("SEASONAL_SETTINGS_TABLE environment variable must be set"))?;

    run(service_fn(|event: LambdaEvent<CloudWatchEvent>| {
        function_handler(event, dynamodb_client.clone(), settings_table.clone())
    }))
    .await
}

async fn function_handler(
    event: LambdaEvent<CloudWatchEvent>,
    dynamodb_client: DynamoDbClient,
    settings_table: String,
) -> Result<(), Error> {
    info!(
        request_id = %event.context.request_id,
        "Starting seasonal settings sync"
    );

    let clock = SystemClock::new();
    let summary = sync_seasons(&dynamodb_client, &settings_table, &clock).await?;

    info!(
        scanned = summary.scanned,
        updated = summary.updated,
        skipped = summary.skipped,
        errors = summary.errors,
        "Season sync complete"
    );

    Ok(())
}

/// Per-invocation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SyncSummary {
    scanned: u32,
    updated: u32,
    skipped: u32,
    errors: u32,
}

/// Walk every settings row and move auto-mode rows to the calendar season
///
/// A failing row is logged and counted; only a failing scan aborts the run.
async fn sync_seasons(
    dynamodb_client: &DynamoDbClient,
    settings_table: &str,
    clock: &dyn Clock,
) -> anyhow::Result<SyncSummary> {
    let today = clock.today();
    let now = clock.now_rfc3339();
    let mut summary = SyncSummary::default();
    let mut start_key: Option<HashMap<String, AttributeValue>> = None;

    loop {
        let page = dynamodb_client
            .scan()
            .table_name(settings_table)
            .set_exclusive_start_key(start_key.take())
            .send()
            .await
            .with_context(|| format!("Failed to scan {}", settings_table))?;

        for item in page.items.unwrap_or_default() {
            summary.scanned += 1;

            match sync_row(dynamodb_client, settings_table, item, today, &now).await {
                Ok(true) => summary.updated += 1,
                Ok(false) => summary.skipped += 1,
                Err(e) => {
                    summary.errors += 1;
                    error!("Error syncing settings row: {:#}", e);
                }
            }
        }

        match page.last_evaluated_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => break,
        }
    }

    Ok(summary)
}

async fn sync_row(
    dynamodb_client: &DynamoDbClient,
    settings_table: &str,
    item: HashMap<String, AttributeValue>,
    today: NaiveDate,
    now: &str,
) -> anyhow::Result<bool> {
    let settings: SeasonalSettings =
        serde_dynamo::from_item(item).context("Failed to deserialize settings row")?;

    let Some(season) = planned_season(&settings, today) else {
        return Ok(false);
    };

    let written = update_season(dynamodb_client, settings_table, &settings.user_id, season, now)
        .await
        .with_context(|| format!("Failed to update season for {}", settings.user_id))?;

    if written {
        info!(
            user_id = %settings.user_id,
            from = settings.current_season.as_str(),
            to = season.as_str(),
            "Season switched"
        );
    }

    Ok(written)
}

/// New season for an auto-mode row that has drifted from the calendar
fn planned_season(settings: &SeasonalSettings, today: NaiveDate) -> Option<Season> {
    if settings.season_mode != SeasonMode::Auto {
        return None;
    }

    let season = detect_current_season(today);
    (settings.current_season != season).then_some(season)
}

/// Write the new season unless the row left auto mode in the meantime
async fn update_season(
    dynamodb_client: &DynamoDbClient,
    settings_table: &str,
    user_id: &str,
    season: Season,
    now: &str,
) -> anyhow::Result<bool> {
    let result = dynamodb_client
        .update_item()
        .table_name(settings_table)
        .key("user_id", AttributeValue::S(user_id.to_string()))
        .update_expression("SET current_season = :season, updated_at = :now")
        .condition_expression("season_mode = :auto")
        .expression_attribute_values(":season", AttributeValue::S(season.as_str().to_string()))
        .expression_attribute_values(":now", AttributeValue::S(now.to_string()))
        .expression_attribute_values(
            ":auto",
            AttributeValue::S(SeasonMode::Auto.as_str().to_string()),
        )
        .send()
        .await;

    match result {
        Ok(_) => Ok(true),
        Err(aws_sdk_dynamodb::error::SdkError::ServiceError(service_err))
            if matches!(
                service_err.err(),
                UpdateItemError::ConditionalCheckFailedException(_)
            ) =>
        {
            Ok(false)
        }
        Err(e) => Err(anyhow!("{:?}", e)),
    }
}
