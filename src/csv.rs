// src/csv.rs
use std::mem::take;

use ::csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

use crate::error::{Error, Result};
use crate::offer::ColumnMap;
use crate::store::DataSet;

/* ---------------- Parsing ---------------- */

/// Tolerant CSV splitter (quotes + CRLF, unterminated quotes flushed at EOF).
/// A `"` in the middle of an unquoted field is kept as text.
/// Used where the input may be broken; well-formed input goes through `read_dataset`.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // doubled quote
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else if field.is_empty() {
                    in_quotes = true;
                } else {
                    field.push('"');
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !is_blank_row(&row) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    row.push(field);
    if !is_blank_row(&row) {
        rows.push(row);
    }

    rows
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|f| f.trim().is_empty())
}

/// Header row + records. Rows may be ragged; blank lines are dropped.
pub fn read_dataset(text: &str) -> Result<DataSet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(Error::Invalid(s!("CSV has no header row")));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let row: Vec<String> = record?.iter().map(str::to_string).collect();
        if !is_blank_row(&row) {
            rows.push(row);
        }
    }
    Ok(DataSet { headers, rows })
}

/* ---------------- Writing ---------------- */

/// Serialise a dataset (header first), quoting only where needed.
pub fn dataset_to_string(ds: &DataSet) -> Result<String> {
    write_rows(std::iter::once(&ds.headers).chain(ds.rows.iter()), QuoteStyle::Necessary)
}

fn write_rows<'a, I>(rows: I, style: QuoteStyle) -> Result<String>
where
    I: IntoIterator<Item = &'a Vec<String>>,
{
    let mut w = WriterBuilder::new()
        .flexible(true)
        .quote_style(style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in rows {
        w.write_record(row)?;
    }
    let buf = w.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/* ---------------- Repair ---------------- */

/// Force every record to the header's column count and quote every field.
/// Each physical line is one record, so an unbalanced quote only affects its
/// own line. Overflow is merged into the last column (re-joined with `,`),
/// short rows are padded with empty fields.
pub fn repair(text: &str) -> Result<String> {
    let mut rows: Vec<Vec<String>> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .flat_map(|line| parse_rows(line, ','))
        .collect();
    if rows.is_empty() {
        return Err(Error::Invalid(s!("CSV is empty")));
    }
    let header = rows.remove(0);
    let width = header.len();

    let fixed: Vec<Vec<String>> = rows.into_iter().map(|r| fit_width(r, width)).collect();
    write_rows(std::iter::once(&header).chain(fixed.iter()), QuoteStyle::Always)
}

fn fit_width(mut row: Vec<String>, width: usize) -> Vec<String> {
    if width == 0 {
        return row;
    }
    if row.len() > width {
        let overflow = row.split_off(width - 1).join(",");
        row.push(overflow);
    }
    row.resize(width, s!());
    row
}

/* ---------------- List padding ---------------- */

/// `"a | b"` padded to 3 → `"a | b | "`; longer lists are truncated.
pub fn pad_list(value: &str, count: usize) -> String {
    let mut items: Vec<&str> = value.split('|').map(str::trim).collect();
    items.resize(count, "");
    items.join(" | ")
}

/// Apply `pad_list` to each named column present in the dataset.
/// Returns how many columns were found and rewritten.
pub fn pad_lists(ds: &mut DataSet, counts: &[(&str, usize)]) -> usize {
    let cols = ColumnMap::new(&ds.headers);
    let mut touched = 0;
    for (field, count) in counts {
        let Some(ix) = cols.index(field) else { continue };
        touched += 1;
        for row in ds.rows.iter_mut() {
            if row.len() <= ix {
                row.resize(ix + 1, s!());
            }
            row[ix] = pad_list(&row[ix], *count);
        }
    }
    touched
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerant_parser_handles_quotes_and_crlf() {
        let rows = parse_rows("a,\"b,c\",\"say \"\"hi\"\"\"\r\n\r\nd,e,f\n", ',');
        assert_eq!(rows, vec![
            vec![s!("a"), s!("b,c"), s!("say \"hi\"")],
            vec![s!("d"), s!("e"), s!("f")],
        ]);
    }

    #[test]
    fn unterminated_quote_is_flushed() {
        let rows = parse_rows("a,\"open", ',');
        assert_eq!(rows, vec![vec![s!("a"), s!("open")]]);
    }

    #[test]
    fn stray_quote_mid_field_is_text() {
        let rows = parse_rows("wise.html,5\" screen,x", ',');
        assert_eq!(rows, vec![vec![s!("wise.html"), s!("5\" screen"), s!("x")]]);
    }

    #[test]
    fn fit_width_merges_and_pads() {
        let long = vec![s!("a"), s!("b"), s!("c"), s!("d")];
        assert_eq!(fit_width(long, 3), vec![s!("a"), s!("b"), s!("c,d")]);
        assert_eq!(fit_width(vec![s!("a")], 3), vec![s!("a"), s!(""), s!("")]);
    }

    #[test]
    fn pad_list_pads_and_truncates() {
        assert_eq!(pad_list("a|b", 3), "a | b | ");
        assert_eq!(pad_list(" a | b | c | d ", 2), "a | b");
        assert_eq!(pad_list("", 2), " | ");
    }

    #[test]
    fn read_dataset_keeps_ragged_rows() {
        let ds = read_dataset("File,Brand,Category\nwise.html,Wise\n,,\nmonzo.html,Monzo,Banking\n").unwrap();
        assert_eq!(ds.headers, vec!["File", "Brand", "Category"]);
        assert_eq!(ds.rows.len(), 2);
        assert_eq!(ds.rows[0], vec!["wise.html", "Wise"]);
    }
}
