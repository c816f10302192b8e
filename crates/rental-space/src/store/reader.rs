use std::io::Read;

use crate::records::CsvRecord;

/// Decodes every row of a headerless, unquoted CSV stream into `T`.
///
/// Rows with the wrong arity or an unparsable field are dropped with a warning. `source` only
/// labels the log lines.
pub(crate) fn parse_records<T: CsvRecord, R: Read>(reader: R, source: &str) -> Vec<T> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(err) if err.is_io_error() => {
                tracing::warn!(%source, error = %err, "stopped reading records");
                break;
            }
            Err(err) => {
                tracing::warn!(%source, error = %err, "skipping unreadable row");
                continue;
            }
        };

        if row.len() == 1 && row[0].is_empty() {
            continue;
        }

        let fields: Vec<&str> = row.iter().collect();
        match T::from_fields(&fields) {
            Ok(record) => records.push(record),
            Err(err) => {
                let line = row.position().map(|pos| pos.line()).unwrap_or_default();
                tracing::warn!(%source, line, error = %err, "skipping {} record", T::KIND);
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{PropertyId, WishlistEntry};

    #[test]
    fn keeps_valid_rows_and_drops_the_rest() {
        let data = "1,a@student.monash.edu,01/05/2024 18:45\n\
2,a@student.monash.edu\n\
x,a@student.monash.edu,01/05/2024 18:45\n\
\n\
3,b@student.monash.edu,02/05/2024 09:00\n";
        let entries: Vec<WishlistEntry> = parse_records(data.as_bytes(), "wishlist.csv");
        let ids: Vec<PropertyId> = entries.iter().map(|entry| entry.property_id).collect();
        assert_eq!(ids, vec![PropertyId(1), PropertyId(3)]);
    }

    #[test]
    fn quotes_are_not_special() {
        let data = "1,\"a@student.monash.edu\",01/05/2024 18:45\n";
        let entries: Vec<WishlistEntry> = parse_records(data.as_bytes(), "wishlist.csv");
        assert_eq!(entries[0].tenant_email, "\"a@student.monash.edu\"");
    }

    #[test]
    fn handles_crlf_line_endings() {
        let data = "1,a@student.monash.edu,01/05/2024 18:45\r\n";
        let entries: Vec<WishlistEntry> = parse_records(data.as_bytes(), "wishlist.csv");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tenant_email, "a@student.monash.edu");
    }
}
