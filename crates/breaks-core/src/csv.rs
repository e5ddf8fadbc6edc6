//! CSV row mechanics for the `Name,Day,Start,End,Room` interchange format.
//!
//! The header row declares column order by name (case-insensitive); `Room`
//! is optional. Fields containing a comma, quote, or line break are written
//! double-quoted with `""` escaping, and the splitter understands the same
//! quoting on the way back in. Plain fields stay bare, so files produced by
//! hand or by spreadsheet tools keep working.

/// Column positions discovered from a header row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ColumnMap {
    pub name: Option<usize>,
    pub day: Option<usize>,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub room: Option<usize>,
}

impl ColumnMap {
    pub(crate) fn from_header(header: &str) -> Self {
        let columns = split_row(header);
        let find = |wanted: &str| {
            columns
                .iter()
                .position(|c| c.trim().eq_ignore_ascii_case(wanted))
        };
        ColumnMap {
            name: find("name"),
            day: find("day"),
            start: find("start"),
            end: find("end"),
            room: find("room"),
        }
    }
}

/// Split one CSV row into trimmed fields, honoring double-quoted fields with
/// `""` escapes.
pub(crate) fn split_row(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields.into_iter().map(|f| f.trim().to_string()).collect()
}

/// Quote a field only when it needs it.
pub(crate) fn escape_field(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Pick the field at `index` out of a split row, empty when out of range or
/// the column was absent from the header.
pub(crate) fn field_at(columns: &[String], index: Option<usize>) -> String {
    index
        .and_then(|i| columns.get(i))
        .cloned()
        .unwrap_or_default()
}
