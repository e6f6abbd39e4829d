//! Shared helpers for socialgraph-core integration tests

#![allow(dead_code)]

use socialgraph_core::{Entity, MemoryStore, Record};
use std::io::Write;
use tempfile::NamedTempFile;

/// Pull every `name: "..."` value out of a statement, in order
fn quoted_names(statement: &str) -> Vec<&str> {
    statement
        .split("name: \"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect()
}

/// Rows an undirected FRIENDS_WITH match would return for the applied statements.
///
/// Understands statements of the form
/// `MERGE (:Person {name: "A"})-[:FRIENDS_WITH]->(:Person {name: "B"});`
/// and, like a real undirected match, yields each friendship in both directions.
pub fn friendship_rows(statements: &[String]) -> Vec<Record> {
    let mut rows = Vec::new();
    for statement in statements.iter().filter(|s| s.contains("FRIENDS_WITH")) {
        if let [a, b] = quoted_names(statement).as_slice() {
            rows.push(record(a, b));
            rows.push(record(b, a));
        }
    }
    rows
}

pub fn record(from: &str, to: &str) -> Record {
    let mut record = Record::new();
    record.insert("from".to_string(), Entity::person(0, from));
    record.insert("to".to_string(), Entity::person(1, to));
    record
}

pub fn friendship_store() -> MemoryStore {
    MemoryStore::with_row_source(friendship_rows)
}

pub fn friendship(a: &str, b: &str) -> String {
    format!(r#"MERGE (:Person {{name: "{a}"}})-[:FRIENDS_WITH]->(:Person {{name: "{b}"}});"#)
}

pub fn statement_file(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create statement file");
    for line in lines {
        writeln!(file, "{line}").expect("Failed to write statement file");
    }
    file
}
