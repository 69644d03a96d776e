use crate::{
    planner::{
        error::PrepareError,
        statement::{MetaCommand, Statement},
    },
    storage::schema::{Column, ColumnKind, Schema},
    types::value::Value,
};

/// Turn one line of input into a typed statement.
///
/// The schema of the current table, when there is one, types the values
/// of an `insert`; everything else is independent of table state.
pub fn prepare(input: &str, schema: Option<&Schema>) -> Result<Statement, PrepareError> {
    let input = input.trim();

    if input.starts_with('.') {
        return prepare_meta(input);
    }

    let keyword = input
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    match keyword.as_str() {
        "create" => prepare_create(input),
        "insert" => prepare_insert(input, schema),
        "select" => Ok(Statement::Select),
        _ => Err(PrepareError::UnrecognizedStatement(input.to_string())),
    }
}

fn prepare_meta(input: &str) -> Result<Statement, PrepareError> {
    match input {
        ".exit" => Ok(Statement::Meta(MetaCommand::Exit)),
        ".tables" => Ok(Statement::Meta(MetaCommand::Tables)),
        _ => Err(PrepareError::UnrecognizedMeta(input.to_string())),
    }
}

/// `create <table> <column> <type>[, <column> <type>]...`
fn prepare_create(input: &str) -> Result<Statement, PrepareError> {
    let rest = input["create".len()..].trim_start();
    let table_name = rest
        .split_whitespace()
        .next()
        .ok_or(PrepareError::MissingTableName)?;
    let column_specs = rest[table_name.len()..].trim();
    if column_specs.is_empty() {
        return Err(PrepareError::MissingColumns);
    }

    let mut columns = Vec::new();
    for spec in column_specs.split(',') {
        let mut tokens = spec.split_whitespace();
        let Some(name) = tokens.next() else {
            return Err(PrepareError::MissingColumns);
        };
        let kind = tokens.next().ok_or_else(|| PrepareError::MissingDataType {
            column: name.to_string(),
        })?;
        let column = match kind.to_ascii_lowercase().as_str() {
            "int" => Column::integer(name),
            "string" => Column::text(name),
            other => return Err(PrepareError::UnknownDataType(other.to_string())),
        };
        columns.push(column);
    }

    Ok(Statement::Create {
        table_name: table_name.to_string(),
        columns,
    })
}

/// `insert <value> <value>...`, values in column order.
///
/// With a schema in hand each token is typed by the column at its
/// position; without one (no table created yet) the type is inferred so
/// the storage layer still gets to report its not-ready error. Token
/// count is not checked here, the row codec owns that.
fn prepare_insert(input: &str, schema: Option<&Schema>) -> Result<Statement, PrepareError> {
    let tokens = input.split_whitespace().skip(1);

    let mut values = Vec::new();
    for (position, token) in tokens.enumerate() {
        let column_kind = schema.and_then(|s| s.columns().get(position)).map(|c| c.kind);
        let value = match column_kind {
            Some(ColumnKind::Integer) => Value::Integer(
                token
                    .parse()
                    .map_err(|_| PrepareError::InvalidInteger(token.to_string()))?,
            ),
            Some(ColumnKind::Text { .. }) => Value::Text(token.to_string()),
            None => match token.parse() {
                Ok(i) => Value::Integer(i),
                Err(_) => Value::Text(token.to_string()),
            },
        };
        values.push(value);
    }

    Ok(Statement::Insert { values })
}
