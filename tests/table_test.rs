use lumbung::storage::{
    schema::Column,
    table::Table,
};
use lumbung::types::{
    TEXT_WIDTH,
    error::{CodecError, InsertError},
    row::Row,
    value::Value,
};

fn user_table() -> Table {
    let mut table = Table::new();
    table
        .create(
            "users",
            vec![
                Column::integer("id"),
                Column::text("username"),
                Column::text("email"),
            ],
        )
        .unwrap();
    table
}

fn user_row(id: i32) -> Row {
    Row::new(vec![
        Value::Integer(id),
        Value::Text(format!("user{}", id)),
        Value::Text(format!("user{}@example.com", id)),
    ])
}

#[test]
fn test_insert_before_create_fails() {
    let mut table = Table::new();
    assert!(!table.is_ready());

    let result = table.insert(user_row(1));
    assert_eq!(result.unwrap_err(), InsertError::NotReady);

    // nothing changed
    assert_eq!(table.row_count(), 0);
    assert_eq!(table.allocated_pages(), 0);
}

#[test]
fn test_create_makes_table_ready() {
    let table = user_table();

    assert!(table.is_ready());
    assert_eq!(table.name(), Some("users"));
    assert_eq!(table.row_count(), 0);
    assert_eq!(table.allocated_pages(), 0);
}

#[test]
fn test_row_ids_are_sequential() {
    let mut table = user_table();

    assert_eq!(table.insert(user_row(10)).unwrap(), 0);
    assert_eq!(table.insert(user_row(11)).unwrap(), 1);
    assert_eq!(table.insert(user_row(12)).unwrap(), 2);
    assert_eq!(table.row_count(), 3);
}

#[test]
fn test_scan_yields_rows_in_insertion_order() {
    let mut table = user_table();

    let inserted: Vec<Row> = (0..20).map(user_row).collect();
    for row in &inserted {
        table.insert(row.clone()).unwrap();
    }

    let scanned: Vec<Row> = table.scan().collect();
    assert_eq!(scanned, inserted);
}

#[test]
fn test_scan_is_restartable() {
    let mut table = user_table();
    table.insert(user_row(1)).unwrap();

    assert_eq!(table.scan().count(), 1);

    table.insert(user_row(2)).unwrap();
    // a fresh scan sees the new row, and the scan's length is fixed up front
    let scan = table.scan();
    assert_eq!(scan.len(), 2);
    assert_eq!(scan.count(), 2);
}

#[test]
fn test_scan_on_uninitialized_table_is_empty() {
    let table = Table::new();
    assert_eq!(table.scan().count(), 0);
}

#[test]
fn test_pages_allocated_one_at_a_time() {
    // two int columns: 512 rows per page
    let mut table = Table::new();
    table
        .create("pairs", vec![Column::integer("a"), Column::integer("b")])
        .unwrap();

    for i in 0..512 {
        table
            .insert(Row::new(vec![Value::Integer(i), Value::Integer(-i)]))
            .unwrap();
    }
    assert_eq!(table.allocated_pages(), 1);

    table
        .insert(Row::new(vec![Value::Integer(512), Value::Integer(-512)]))
        .unwrap();
    assert_eq!(table.allocated_pages(), 2);
}

#[test]
fn test_table_full_at_capacity() {
    // 512 rows per page * 100 pages = 51200 rows
    let mut table = Table::new();
    table
        .create("pairs", vec![Column::integer("a"), Column::integer("b")])
        .unwrap();

    for i in 0..51199 {
        table
            .insert(Row::new(vec![Value::Integer(i), Value::Integer(i)]))
            .unwrap();
    }

    // the 51200th row (row_number 51199) still fits
    let last = table
        .insert(Row::new(vec![Value::Integer(51199), Value::Integer(51199)]))
        .unwrap();
    assert_eq!(last, 51199);

    // the next one does not
    let result = table.insert(Row::new(vec![Value::Integer(0), Value::Integer(0)]));
    assert_eq!(result.unwrap_err(), InsertError::TableFull);

    // the failed insert changed nothing
    assert_eq!(table.row_count(), 51200);
    assert_eq!(table.scan().len(), 51200);
}

#[test]
fn test_failed_insert_leaves_state_unchanged() {
    let mut table = user_table();
    table.insert(user_row(1)).unwrap();

    let bad = Row::new(vec![Value::Integer(2)]);
    match table.insert(bad) {
        Err(InsertError::InvalidRow(CodecError::ColumnCountMismatch { .. })) => {}
        other => panic!("Expected InvalidRow, got {:?}", other),
    }

    assert_eq!(table.row_count(), 1);
    let next = table.insert(user_row(2)).unwrap();
    assert_eq!(next, 1);
}

#[test]
fn test_type_mismatch_surfaces_as_invalid_row() {
    let mut table = user_table();
    let bad = Row::new(vec![
        Value::Text("one".to_string()),
        Value::Text("user".to_string()),
        Value::Text("mail".to_string()),
    ]);

    match table.insert(bad) {
        Err(InsertError::InvalidRow(CodecError::TypeMismatch { column, .. })) => {
            assert_eq!(column, "id");
        }
        other => panic!("Expected InvalidRow, got {:?}", other),
    }
    assert_eq!(table.row_count(), 0);
}

#[test]
fn test_overlong_text_truncated_end_to_end() {
    let mut table = user_table();
    let long_name = "n".repeat(TEXT_WIDTH + 5);
    table
        .insert(Row::new(vec![
            Value::Integer(1),
            Value::Text(long_name),
            Value::Text("a@b.c".to_string()),
        ]))
        .unwrap();

    let scanned: Vec<Row> = table.scan().collect();
    assert_eq!(
        scanned[0].get_value(1),
        Some(&Value::Text("n".repeat(TEXT_WIDTH - 1)))
    );
}

#[test]
fn test_recreate_resets_table() {
    let mut table = user_table();
    table.insert(user_row(1)).unwrap();
    table.insert(user_row(2)).unwrap();

    table
        .create("pairs", vec![Column::integer("a"), Column::integer("b")])
        .unwrap();

    assert_eq!(table.name(), Some("pairs"));
    assert_eq!(table.row_count(), 0);
    assert_eq!(table.allocated_pages(), 0);
    assert_eq!(table.scan().count(), 0);
}

#[test]
fn test_failed_create_leaves_table_unchanged() {
    let mut table = user_table();
    table.insert(user_row(1)).unwrap();

    assert!(table.create("broken", vec![]).is_err());

    assert_eq!(table.name(), Some("users"));
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.scan().count(), 1);
}
