//! Friendship query executor

use crate::error::QueryError;
use crate::store::{Entity, GraphStore, Record};
use tracing::debug;

/// Hard ceiling on rows returned per request. Clients size their rendering
/// around it, there is no pagination behind it.
pub const ROW_LIMIT: usize = 100;

/// Every pair of people joined by a FRIENDS_WITH relationship, either direction
pub const FRIEND_EDGES_QUERY: &str = "MATCH (n:Person)-[:FRIENDS_WITH]-(m:Person) \
     RETURN n AS from, m AS to \
     LIMIT 100;";

const FROM: &str = "from";
const TO: &str = "to";

/// One result row of [`FRIEND_EDGES_QUERY`]
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub from: Entity,
    pub to: Entity,
}

impl RawRow {
    pub fn new(from: Entity, to: Entity) -> Self {
        Self { from, to }
    }

    fn from_record(row: usize, mut record: Record) -> Result<Self, QueryError> {
        let from = record
            .remove(FROM)
            .ok_or(QueryError::MissingColumn { row, column: FROM })?;
        let to = record
            .remove(TO)
            .ok_or(QueryError::MissingColumn { row, column: TO })?;
        Ok(Self { from, to })
    }
}

/// Run the friendship query, returning at most [`ROW_LIMIT`] rows in store order.
///
/// A store failure is returned as is; no partial sequence is ever produced.
pub async fn fetch_friend_edges(store: &dyn GraphStore) -> Result<Vec<RawRow>, QueryError> {
    let records = store
        .execute_and_fetch(FRIEND_EDGES_QUERY, &[FROM, TO])
        .await?;
    debug!(rows = records.len(), "Friendship query returned");

    records
        .into_iter()
        .take(ROW_LIMIT)
        .enumerate()
        .map(|(row, record)| RawRow::from_record(row, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::store::StoreError;

    fn record(from: &str, to: &str) -> Record {
        let mut record = Record::new();
        record.insert(FROM.to_string(), Entity::person(0, from));
        record.insert(TO.to_string(), Entity::person(1, to));
        record
    }

    #[test]
    fn test_query_keeps_the_literal_limit() {
        assert!(FRIEND_EDGES_QUERY.contains("LIMIT 100;"));
        assert!(FRIEND_EDGES_QUERY.contains("RETURN n AS from, m AS to"));
        assert_eq!(ROW_LIMIT, 100);
    }

    #[tokio::test]
    async fn test_rows_keep_store_order() {
        let store = MemoryStore::with_rows(vec![record("B", "A"), record("A", "C")]);

        let rows = fetch_friend_edges(&store).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].from.name(), Some("B"));
        assert_eq!(rows[1].to.name(), Some("C"));
        assert_eq!(store.queries(), vec![FRIEND_EDGES_QUERY.to_string()]);
    }

    #[tokio::test]
    async fn test_truncates_when_store_ignores_limit() {
        let records = (0..250).map(|i| record(&format!("p{i}"), "hub")).collect();
        let store = MemoryStore::with_rows(records);

        let rows = fetch_friend_edges(&store).await.unwrap();

        assert_eq!(rows.len(), ROW_LIMIT);
        assert_eq!(rows[99].from.name(), Some("p99"));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = MemoryStore::with_rows(vec![record("A", "B")]);
        store.set_fetch_failure(true);

        let err = fetch_friend_edges(&store).await.unwrap_err();
        assert!(matches!(err, QueryError::Store(StoreError::Query(_))));
    }

    #[tokio::test]
    async fn test_missing_column_is_an_error() {
        let mut partial = Record::new();
        partial.insert(FROM.to_string(), Entity::person(0, "A"));
        let store = MemoryStore::with_rows(vec![record("A", "B"), partial]);

        let err = fetch_friend_edges(&store).await.unwrap_err();
        assert!(matches!(
            err,
            QueryError::MissingColumn { row: 1, column: "to" }
        ));
    }
}
