use std::collections::HashMap;
use std::fmt::Debug;
use std::str::FromStr;
use std::time::Duration;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::{Credentials, Region};
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::types::{AttributeDefinition, AttributeValue, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType, TableStatus};
use serde_json::Value;
use tracing::info;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::RepositoryStore;

// partition key of the books table
pub const BOOK_ID_KEY: &str = "book_id";

const TABLE_CAPACITY_UNITS: i64 = 10;
const TABLE_WAIT_ATTEMPTS: usize = 30;

// Creates the configured books table unless it already exists, then waits for it to become active.
pub async fn ensure_books_table(client: &Client, config: &Configuration) -> LibraryResult<()> {
    let table_name = config.table_name.as_str();
    if describe_table(client, table_name).await?.is_some() {
        return wait_for_table(client, table_name, |status| status != Some(TableStatus::Creating)).await;
    }
    client
        .create_table()
        .table_name(table_name)
        .key_schema(
            KeySchemaElement::builder()
                .attribute_name(BOOK_ID_KEY)
                .key_type(KeyType::Hash)
                .build(),
        )
        .attribute_definitions(
            AttributeDefinition::builder()
                .attribute_name(BOOK_ID_KEY)
                .attribute_type(ScalarAttributeType::S)
                .build(),
        )
        .provisioned_throughput(
            ProvisionedThroughput::builder()
                .read_capacity_units(TABLE_CAPACITY_UNITS)
                .write_capacity_units(TABLE_CAPACITY_UNITS)
                .build(),
        )
        .send()
        .await
        .map_err(|err| LibraryError::database_or_unavailable(
            format!("failed to create {} table", table_name).as_str(), Some(format!("{:?}", err)), false))?;
    info!(table = table_name, "created books table");
    wait_for_table(client, table_name, |status| status == Some(TableStatus::Active)).await
}

// Drops the configured books table and waits until it is gone; a missing table is not an error.
pub async fn drop_books_table(client: &Client, config: &Configuration) -> LibraryResult<()> {
    let table_name = config.table_name.as_str();
    if describe_table(client, table_name).await?.is_none() {
        return Ok(());
    }
    client.delete_table().table_name(table_name).send().await
        .map_err(|err| LibraryError::database_or_unavailable(
            format!("failed to delete {} table", table_name).as_str(), Some(format!("{:?}", err)), false))?;
    wait_for_table(client, table_name, |status| status.is_none()).await
}

async fn wait_for_table<F>(client: &Client, table_name: &str, done: F) -> LibraryResult<()>
    where F: Fn(Option<TableStatus>) -> bool {
    for _ in 0..TABLE_WAIT_ATTEMPTS {
        if done(describe_table(client, table_name).await?) {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    Err(LibraryError::unavailable(
        format!("timed out waiting for {} table", table_name).as_str(), None, true))
}

// None when the table does not exist
async fn describe_table(client: &Client, table_name: &str) -> LibraryResult<Option<TableStatus>> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(out) => {
            Ok(out.table().and_then(|table| table.table_status()).cloned())
        }
        Err(err) => {
            let missing = match &err {
                SdkError::ServiceError(service_err) => service_err.err().is_resource_not_found_exception(),
                _ => false,
            };
            if missing {
                return Ok(None);
            }
            Err(LibraryError::database_or_unavailable(
                format!("failed to describe {} table", table_name).as_str(), Some(format!("{:?}", err)), false))
        }
    }
}

pub(crate) fn parse_item(value: Value) -> LibraryResult<HashMap<String, AttributeValue>> {
    match json_to_attribute(value) {
        AttributeValue::M(map) => Ok(map),
        other => Err(LibraryError::serialization(format!("expected an item object, got {:?}", other).as_str())),
    }
}

pub(crate) fn parse_string_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> Option<String> {
    match map.get(name) {
        Some(AttributeValue::S(val)) => Some(val.clone()),
        _ => None,
    }
}

pub(crate) fn required_string_attribute(name: &str, map: &HashMap<String, AttributeValue>) -> LibraryResult<String> {
    parse_string_attribute(name, map).ok_or_else(|| LibraryError::serialization(
        format!("item is missing string attribute {}", name).as_str()))
}

// parses a number attribute into T, so values out of T's range are rejected
pub(crate) fn required_number_attribute<T: FromStr>(name: &str, map: &HashMap<String, AttributeValue>) -> LibraryResult<T> {
    match map.get(name) {
        Some(AttributeValue::N(val)) => val.parse::<T>().map_err(|_| LibraryError::serialization(
            format!("item attribute {} has invalid number {}", name, val).as_str())),
        _ => Err(LibraryError::serialization(format!("item is missing number attribute {}", name).as_str())),
    }
}

fn json_to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(a) => AttributeValue::L(a.into_iter().map(json_to_attribute).collect()),
        Value::Object(o) => {
            AttributeValue::M(o.into_iter().map(|(k, v)| (k, json_to_attribute(v))).collect())
        }
    }
}

// builds the db-client for the configured store
pub async fn build_db_client(config: &Configuration) -> Client {
    match config.store {
        RepositoryStore::LocalDynamoDB => {
            // See https://docs.aws.amazon.com/sdk-for-rust/latest/dg/dynamodb-local.html
            let local_config = aws_sdk_dynamodb::Config::builder()
                .region(Region::new("local"))
                .credentials_provider(
                    Credentials::new("AKIDLOCALSTACK", "localstacksecret", None, None, "faked"))
                .endpoint_url(config.dynamodb_endpoint.as_str())
                .build();
            Client::from_conf(local_config)
        }
        RepositoryStore::DynamoDB | RepositoryStore::Memory => {
            let sdk_config = aws_config::load_from_env().await;
            Client::new(&sdk_config)
        }
    }
}

impl<E: Debug> From<SdkError<E>> for LibraryError {
    fn from(err: SdkError<E>) -> Self {
        let (retryable, reason) = retryable_sdk_error(&err);
        LibraryError::database_or_unavailable(format!("{:?}", err).as_str(), reason, retryable)
    }
}

fn retryable_sdk_error<E>(err: &SdkError<E>) -> (bool, Option<String>) {
    match err {
        SdkError::ConstructionFailure(_) => (false, Some("ConstructionFailure".to_string())),
        SdkError::TimeoutError(_) => (true, Some("TimeoutError".to_string())),
        SdkError::DispatchFailure(_) => (true, Some("DispatchFailure".to_string())),
        SdkError::ResponseError { .. } => (true, Some("ResponseError".to_string())),
        SdkError::ServiceError(ctx) => {
            let http = ctx.raw().http();
            (http.status().is_server_error() || has_exceeded_limit(http.body().bytes()), Some(http.status().to_string()))
        }
        _ => (true, Some("Unknown".to_string())),
    }
}

// throughput and request limit errors carry "...Exceeded..." in the body
fn has_exceeded_limit(body: Option<&[u8]>) -> bool {
    body.map(|b| b.windows(6).any(|w| w == b"ceeded")).unwrap_or(false)
}
