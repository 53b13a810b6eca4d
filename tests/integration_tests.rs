//! Integration tests for the paginator over the built-in sources
//!
//! Every scenario runs against 100 records paged 10 at a time, once over
//! an in-memory slice and once over a DuckDB table.

use duckdb::Connection;
use serde_json::{json, Value};
use solidafy_paginator::config::load_source_config_from_str;
use solidafy_paginator::{DatabaseSource, Error, Paginator, SliceSource, Source, VecSource};

fn numbers() -> Vec<i64> {
    (1..=100).collect()
}

fn posts_source() -> DatabaseSource {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE posts (id INTEGER PRIMARY KEY, number INTEGER);
         INSERT INTO posts SELECT i, i FROM range(1, 101) t(i);",
    )
    .unwrap();
    DatabaseSource::from_connection(conn, "SELECT id, number FROM posts ORDER BY id").unwrap()
}

fn post_numbers(rows: &[serde_json::Map<String, Value>]) -> Vec<i64> {
    rows.iter()
        .map(|row| row["number"].as_i64().unwrap())
        .collect()
}

// ============================================================================
// Slice Source Scenarios
// ============================================================================

#[test]
fn test_slice_first_page() {
    let data = numbers();
    let mut paginator = Paginator::new(SliceSource::new(&data), 10);
    paginator.set_page(1);

    assert_eq!(paginator.page_nums().unwrap(), 10);
    assert_eq!(paginator.page().unwrap(), 1);
    assert!(!paginator.has_prev().unwrap());
    assert!(paginator.has_next().unwrap());
    assert!(paginator.has_pages().unwrap());
}

#[test]
fn test_slice_last_page() {
    let data = numbers();
    let mut paginator = Paginator::new(SliceSource::new(&data), 10);
    paginator.set_page(10);

    assert!(!paginator.has_next().unwrap());
    assert!(paginator.has_prev().unwrap());
    assert_eq!(paginator.prev_page().unwrap(), 9);
    assert!(matches!(paginator.next_page(), Err(Error::NoNextPage)));
}

#[test]
fn test_slice_out_of_range_pages() {
    let data = numbers();
    let mut paginator = Paginator::new(SliceSource::new(&data), 10);

    paginator.set_page(11);
    assert_eq!(paginator.page().unwrap(), 10);
    assert_eq!(paginator.results().unwrap(), (91..=100).collect::<Vec<_>>());

    paginator.set_page(-4);
    assert_eq!(paginator.page().unwrap(), 1);
    assert!(paginator.has_next().unwrap());
    assert!(!paginator.has_prev().unwrap());
    assert!(paginator.has_pages().unwrap());

    let results = paginator.results().unwrap();
    assert_eq!(results.len(), 10);
    assert_eq!(results, (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_slice_middle_page() {
    let data = numbers();
    let mut paginator = Paginator::new(SliceSource::new(&data), 10);
    paginator.set_page(6);

    assert_eq!(paginator.results().unwrap(), (51..=60).collect::<Vec<_>>());
}

#[test]
fn test_walk_every_page() {
    let data = numbers();
    let mut paginator = Paginator::new(SliceSource::new(&data), 7);
    let mut seen = Vec::new();

    let mut page = 1;
    loop {
        paginator.set_page(page);
        seen.extend(paginator.results().unwrap());
        if !paginator.has_next().unwrap() {
            break;
        }
        page += 1;
    }

    assert_eq!(page, 15);
    assert_eq!(seen, data);
}

#[test]
fn test_vec_source_of_json_records() {
    let records: VecSource<Value> = (1..=25).map(|i| json!({ "id": i })).collect();
    let mut paginator = Paginator::new(records, 0);
    paginator.set_page(3);

    let page = paginator.results().unwrap();
    assert_eq!(paginator.page_size(), 10);
    assert_eq!(page.len(), 5);
    assert_eq!(page[0]["id"], 21);
}

// ============================================================================
// Database Source Scenarios
// ============================================================================

#[test]
fn test_database_first_page() {
    let source = posts_source();
    let mut paginator = Paginator::new(&source, 10);
    paginator.set_page(1);

    assert_eq!(paginator.page_nums().unwrap(), 10);
    assert!(!paginator.has_prev().unwrap());
    assert!(paginator.has_next().unwrap());
    assert!(paginator.has_pages().unwrap());
    assert_eq!(
        post_numbers(&paginator.results().unwrap()),
        (1..=10).collect::<Vec<_>>()
    );
}

#[test]
fn test_database_last_page() {
    let source = posts_source();
    let mut paginator = Paginator::new(&source, 10);
    paginator.set_page(10);

    assert!(!paginator.has_next().unwrap());
    assert!(paginator.has_prev().unwrap());
}

#[test]
fn test_database_out_of_range_pages() {
    let mut paginator = Paginator::new(posts_source(), 10);

    paginator.set_page(11);
    assert_eq!(paginator.page().unwrap(), 10);
    assert_eq!(
        post_numbers(&paginator.results().unwrap()),
        (91..=100).collect::<Vec<_>>()
    );

    paginator.set_page(-4);
    assert_eq!(paginator.page().unwrap(), 1);
    assert_eq!(paginator.results().unwrap().len(), 10);
}

#[test]
fn test_database_middle_page() {
    let mut paginator = Paginator::new(posts_source(), 10);
    paginator.set_page(6);

    let rows = paginator.results().unwrap();
    assert_eq!(post_numbers(&rows), (51..=60).collect::<Vec<_>>());
    assert_eq!(rows[0]["id"], json!(51));
}

#[test]
fn test_database_empty_result() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE posts (id INTEGER);").unwrap();
    let source = DatabaseSource::from_connection(conn, "SELECT * FROM posts").unwrap();
    let mut paginator = Paginator::new(source, 10);
    paginator.set_page(3);

    assert_eq!(paginator.nums().unwrap(), 0);
    assert_eq!(paginator.page_nums().unwrap(), 1);
    assert_eq!(paginator.page().unwrap(), 1);
    assert!(paginator.results().unwrap().is_empty());
}

#[test]
fn test_database_and_slice_agree() {
    let data = numbers();
    let db_source = posts_source();

    for page_size in [3, 10, 33, 100, 250] {
        let mut slice_paginator = Paginator::new(SliceSource::new(&data), page_size);
        let mut db_paginator = Paginator::new(&db_source, page_size);

        for page in [-1, 1, 2, 4, 40] {
            slice_paginator.set_page(page);
            db_paginator.set_page(page);

            assert_eq!(slice_paginator.info().unwrap(), db_paginator.info().unwrap());
            assert_eq!(
                slice_paginator.results().unwrap(),
                post_numbers(&db_paginator.results().unwrap())
            );
        }
    }
}

#[test]
fn test_database_source_from_config() {
    let config = load_source_config_from_str(
        r"
engine: duckdb
query: SELECT range AS n FROM range(0, 42) ORDER BY n
pagination:
  page_size: 20
",
    )
    .unwrap();

    let source = DatabaseSource::open(&config).unwrap();
    assert_eq!(source.count().unwrap(), 42);

    let mut paginator = Paginator::new(source, config.pagination.page_size);
    paginator.set_page(3);

    let info = paginator.info().unwrap();
    assert_eq!(info.page_nums, 3);
    assert_eq!(info.offset, 40);
    assert!(info.next_page.is_none());

    let rows = paginator.results().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["n"], json!(41));
}
