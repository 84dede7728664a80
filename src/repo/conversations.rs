use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use std::collections::HashMap;

use crate::error::DatabaseError;
use soilsense::shared::domain::ConversationEntry;

/// Append one entry to the conversation log table
///
/// Entries are keyed by `conversation_id` with sort key
/// `{created_at}#{entry_id}`, so a conversation reads back in write order.
///
/// # Arguments
/// * `client` - DynamoDB client
/// * `table_name` - Name of the conversations table
/// * `entry` - Entry to store
///
/// # Returns
/// * `Ok(())` - Entry written
/// * `Err(DatabaseError)` - DynamoDB error occurred
pub async fn put_conversation_entry(
    client: &DynamoDbClient,
    table_name: &str,
    entry: &ConversationEntry,
) -> Result<(), DatabaseError> {
    client
        .put_item()
        .table_name(table_name)
        .set_item(Some(entry_to_item(entry)))
        .send()
        .await
        .map_err(|e| DatabaseError::DynamoDb(format!("{:?}", e)))?;

    Ok(())
}

/// Convert a ConversationEntry to a DynamoDB item
fn entry_to_item(entry: &ConversationEntry) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Partition and sort key
    item.insert(
        "conversation_id".to_string(),
        AttributeValue::S(entry.conversation_id.clone()),
    );
    item.insert("sk".to_string(), AttributeValue::S(entry.sort_key()));

    item.insert(
        "entry_id".to_string(),
        AttributeValue::S(entry.entry_id.clone()),
    );
    item.insert(
        "message".to_string(),
        AttributeValue::S(entry.message.clone()),
    );
    item.insert(
        "sender".to_string(),
        AttributeValue::S(entry.sender.as_str().to_string()),
    );
    item.insert(
        "message_type".to_string(),
        AttributeValue::S(entry.message_type.as_str().to_string()),
    );

    if let Some(ref question_id) = entry.question_id {
        item.insert(
            "question_id".to_string(),
            AttributeValue::S(question_id.clone()),
        );
    }

    item.insert(
        "created_at".to_string(),
        AttributeValue::S(entry.created_at.clone()),
    );

    item
}
