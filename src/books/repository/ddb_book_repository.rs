use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use uuid::Uuid;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{BOOK_ID_KEY, parse_item, required_number_attribute, required_string_attribute};

// lower-cased copy of the title, DynamoDB `contains` is case-sensitive
const TITLE_LOWER: &str = "title_lower";

// ScanFilter carries a filter expression together with its attribute names and values.
// Attribute names are always aliased since `year` and friends are reserved words.
#[derive(Debug, Default)]
struct ScanFilter {
    expression: String,
    names: HashMap<String, String>,
    values: HashMap<String, AttributeValue>,
}

impl ScanFilter {
    fn new(expression: &str) -> Self {
        Self {
            expression: expression.to_string(),
            ..Default::default()
        }
    }

    fn name(mut self, alias: &str, attribute: &str) -> Self {
        self.names.insert(alias.to_string(), attribute.to_string());
        self
    }

    fn value(mut self, placeholder: &str, value: AttributeValue) -> Self {
        self.values.insert(placeholder.to_string(), value);
        self
    }
}

#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
}

impl DDBBookRepository {
    pub fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }

    // Scans the whole table, following LastEvaluatedKey until the scan is exhausted.
    async fn scan(&self, filter: Option<ScanFilter>) -> LibraryResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut records = vec![];
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let mut request = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .set_exclusive_start_key(exclusive_start_key.take());
            if let Some(ref filter) = filter {
                request = request
                    .filter_expression(filter.expression.as_str())
                    .set_expression_attribute_names(Some(filter.names.clone()))
                    .set_expression_attribute_values(Some(filter.values.clone()));
            }
            let res = request.send().await.map_err(LibraryError::from)?;
            for item in res.items().unwrap_or_default() {
                records.push(map_to_book(item)?);
            }
            match res.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }
        Ok(records)
    }

    fn author_filter(author: &str) -> ScanFilter {
        ScanFilter::new("#author = :author")
            .name("#author", "author")
            .value(":author", AttributeValue::S(author.to_string()))
    }
}

#[async_trait]
impl Repository<BookEntity> for DDBBookRepository {
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        self.scan(None).await
    }

    async fn find_by_id(&self, id: &str) -> LibraryResult<Option<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        self.client
            .query()
            .table_name(table_name)
            .limit(2)
            .consistent_read(true)
            .key_condition_expression(
                "#book_id = :book_id",
            )
            .expression_attribute_names("#book_id", BOOK_ID_KEY)
            .expression_attribute_values(
                ":book_id",
                AttributeValue::S(id.to_string()),
            )
            .send()
            .await.map_err(LibraryError::from).and_then(|req| {
            let items = req.items.unwrap_or_default();
            if items.len() > 1 {
                return Err(LibraryError::database(format!("too many books for {}", id).as_str(), None, false));
            }
            items.first().map(map_to_book).transpose()
        })
    }

    async fn save(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let table_name: &str = self.table_name.as_ref();
        let mut saved = entity.clone();
        if saved.book_id.is_none() {
            saved.book_id = Some(Uuid::new_v4().to_string());
        }
        let val = serde_json::to_value(&saved)?;
        let mut item = parse_item(val)?;
        item.insert(TITLE_LOWER.to_string(), AttributeValue::S(saved.title.to_lowercase()));
        self.client
            .put_item()
            .table_name(table_name)
            .set_item(Some(item))
            .send()
            .await.map_err(LibraryError::from)?;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: &str) -> LibraryResult<()> {
        let table_name: &str = self.table_name.as_ref();
        self.client.delete_item()
            .table_name(table_name)
            .key(BOOK_ID_KEY, AttributeValue::S(id.to_string()))
            .send()
            .await.map(|_| ()).map_err(LibraryError::from)
    }
}

#[async_trait]
impl BookRepository for DDBBookRepository {
    async fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>> {
        self.scan(Some(Self::author_filter(author))).await
    }

    async fn find_by_genre(&self, genre: &str) -> LibraryResult<Vec<BookEntity>> {
        let filter = ScanFilter::new("#genre = :genre")
            .name("#genre", "genre")
            .value(":genre", AttributeValue::S(genre.to_string()));
        self.scan(Some(filter)).await
    }

    async fn find_by_title_containing_ignore_case(&self, fragment: &str) -> LibraryResult<Vec<BookEntity>> {
        if fragment.is_empty() {
            return self.scan(None).await;
        }
        let filter = ScanFilter::new("contains(#title_lower, :title)")
            .name("#title_lower", TITLE_LOWER)
            .value(":title", AttributeValue::S(fragment.to_lowercase()));
        self.scan(Some(filter)).await
    }

    async fn find_by_year_less_than(&self, year: i32) -> LibraryResult<Vec<BookEntity>> {
        let filter = ScanFilter::new("#year < :year")
            .name("#year", "publication_year")
            .value(":year", AttributeValue::N(year.to_string()));
        self.scan(Some(filter)).await
    }

    async fn count_by_author(&self, author: &str) -> LibraryResult<usize> {
        Ok(self.scan(Some(Self::author_filter(author))).await?.len())
    }

    async fn find_all_order_by_year_desc(&self) -> LibraryResult<Vec<BookEntity>> {
        let mut books = self.scan(None).await?;
        // scan order is arbitrary, ties fall back to the id
        books.sort_by(|a, b| b.publication_year.cmp(&a.publication_year)
            .then_with(|| a.book_id.cmp(&b.book_id)));
        Ok(books)
    }

    async fn find_by_title_or_author(&self, fragment: &str, author: &str) -> LibraryResult<Vec<BookEntity>> {
        if fragment.is_empty() {
            return self.scan(None).await;
        }
        let filter = ScanFilter::new("contains(#title_lower, :title) OR #author = :author")
            .name("#title_lower", TITLE_LOWER)
            .name("#author", "author")
            .value(":title", AttributeValue::S(fragment.to_lowercase()))
            .value(":author", AttributeValue::S(author.to_string()));
        self.scan(Some(filter)).await
    }
}

// an item that does not hold a complete book is corrupt store data, not a default record
fn map_to_book(map: &HashMap<String, AttributeValue>) -> LibraryResult<BookEntity> {
    Ok(BookEntity {
        book_id: Some(required_string_attribute(BOOK_ID_KEY, map)?),
        title: required_string_attribute("title", map)?,
        author: required_string_attribute("author", map)?,
        publication_year: required_number_attribute::<i32>("publication_year", map)?,
        genre: required_string_attribute("genre", map)?,
    })
}
