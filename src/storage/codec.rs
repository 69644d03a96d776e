use crate::types::{INT_WIDTH, error::CodecError, row::Row, value::Value};

use crate::storage::schema::{ColumnKind, Schema};

/*
 * Row Slot Layout
 * ┌─────────────────────────────────────────────────────────────┐
 * │ column 0        │ column 1        │ ...  │ column n-1       │
 * │ Integer: 4 bytes little-endian                              │
 * │ Text{width}: bytes left-aligned, truncated to width-1,      │
 * │              zero-padded (always NUL-terminated)            │
 * └─────────────────────────────────────────────────────────────┘
 * Column offsets are the running prefix sum of prior column widths;
 * total slot length is schema.row_size().
 */

/// Encode a row into a fresh `row_size`-byte slot.
///
/// Validation happens before any byte is produced, so a failed encode can
/// never leave a partially written slot behind: the caller copies the
/// returned buffer into page memory only on success.
///
/// Text values longer than `width - 1` bytes are truncated. That loss is
/// part of the format (the slot must stay NUL-terminated), not an error.
pub fn encode(row: &Row, schema: &Schema) -> Result<Vec<u8>, CodecError> {
    if row.values.len() != schema.columns().len() {
        return Err(CodecError::ColumnCountMismatch {
            expected: schema.columns().len(),
            actual: row.values.len(),
        });
    }

    let mut slot = vec![0u8; schema.row_size()];
    let mut offset = 0;
    for (column, value) in schema.columns().iter().zip(&row.values) {
        match (column.kind, value) {
            (ColumnKind::Integer, Value::Integer(i)) => {
                slot[offset..offset + INT_WIDTH].copy_from_slice(&i.to_le_bytes());
            }
            (ColumnKind::Text { width }, Value::Text(text)) => {
                let bytes = text.as_bytes();
                let len = bytes.len().min(width - 1);
                slot[offset..offset + len].copy_from_slice(&bytes[..len]);
                // remainder of the slot is already zero
            }
            _ => {
                return Err(CodecError::TypeMismatch {
                    column: column.name.clone(),
                    expected: column.kind.data_type(),
                    actual: value.data_type(),
                });
            }
        }
        offset += column.kind.width();
    }

    Ok(slot)
}

/// Decode a `row_size`-byte slot back into a row.
///
/// Total on any length-correct slot: integers are read back verbatim and
/// text is taken up to (not including) the first zero byte, so an
/// all-zero slot decodes as `Integer(0)` / `Text("")` columns. There is
/// deliberately no validity bit to reject.
pub fn decode(slot: &[u8], schema: &Schema) -> Row {
    debug_assert_eq!(slot.len(), schema.row_size());

    let mut values = Vec::with_capacity(schema.columns().len());
    let mut offset = 0;
    for column in schema.columns() {
        match column.kind {
            ColumnKind::Integer => {
                let mut bytes = [0u8; INT_WIDTH];
                bytes.copy_from_slice(&slot[offset..offset + INT_WIDTH]);
                values.push(Value::Integer(i32::from_le_bytes(bytes)));
            }
            ColumnKind::Text { width } => {
                let field = &slot[offset..offset + width];
                let len = field.iter().position(|&b| b == 0).unwrap_or(width);
                values.push(Value::Text(
                    String::from_utf8_lossy(&field[..len]).into_owned(),
                ));
            }
        }
        offset += column.kind.width();
    }

    Row::new(values)
}
