// src/csv.rs
use std::io::{self, Write};

use crate::config::consts::{EXPORT_HEADERS, EXPORT_ROW_SEP, EXPORT_SEP};
use crate::job::Record;

/* ---------------- Encoding ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Quote a cell only when it has to be; inner quotes are doubled.
pub fn escape_cell(cell: &str, sep: char) -> String {
    if needs_quotes(cell, sep) {
        join!("\"", &cell.replace('"', "\"\""), "\"")
    } else {
        s!(cell)
    }
}

/// One row of cells, no trailing row separator.
pub fn row<S: AsRef<str>>(cells: &[S], sep: char) -> String {
    let mut out = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 { out.push(sep); }
        out.push_str(&escape_cell(cell.as_ref(), sep));
    }
    out
}

/// Full export text for `records`: header then one row per record, CRLF
/// between rows. Zero records gives just the header line.
pub fn to_export_string(records: &[Record]) -> String {
    let mut out = row(&EXPORT_HEADERS, EXPORT_SEP);
    for r in records {
        out.push_str(EXPORT_ROW_SEP);
        out.push_str(&row(&r.cells(), EXPORT_SEP));
    }
    out
}

/// Same text into any writer.
pub fn write_records<W: Write>(mut w: W, records: &[Record]) -> io::Result<()> {
    w.write_all(to_export_string(records).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_cells_are_verbatim() {
        assert_eq!(escape_cell("https://a.test/x?y=1", ','), "https://a.test/x?y=1");
        assert_eq!(escape_cell("", ','), "");
    }

    #[test]
    fn comma_quote_and_breaks_are_quoted() {
        assert_eq!(escape_cell("Acme, Inc.", ','), "\"Acme, Inc.\"");
        assert_eq!(escape_cell("\"Quote\" Co", ','), "\"\"\"Quote\"\" Co\"");
        assert_eq!(escape_cell("a\nb", ','), "\"a\nb\"");
        assert_eq!(escape_cell("a\rb", ','), "\"a\rb\"");
    }

    #[test]
    fn row_joins_escaped_cells() {
        assert_eq!(row(&["a", "b,c", ""], ','), "a,\"b,c\",");
    }

    #[test]
    fn writer_gets_the_same_bytes() {
        let recs = [Record::empty("https://a")];
        let mut buf = Vec::new();
        write_records(&mut buf, &recs).unwrap();
        assert_eq!(buf, to_export_string(&recs).into_bytes());
    }

    #[test]
    fn header_only_when_empty() {
        assert_eq!(
            to_export_string(&[]),
            "Opportunity Name,Business Name,Website URL,Phone,Email,Source URL"
        );
    }

    #[test]
    fn rows_are_crlf_separated_in_column_order() {
        let r = Record {
            source_url: s!("https://maps/1"),
            primary_name: s!("Acme"),
            secondary_name: s!("Acme"),
            website: s!("https://acme"),
            phone: s!("555"),
            email: s!("a@acme"),
        };
        let out = to_export_string(&[r]);
        let lines: Vec<&str> = out.split("\r\n").collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Acme,Acme,https://acme,555,a@acme,https://maps/1");
        assert!(!out.ends_with("\r\n"));
    }
}
