//! Tolerant parser for the published menu sheet.
//!
//! The sheet is maintained by hand in a spreadsheet, so the parser never fails:
//! stray quotes, ragged rows and blank lines all produce a best-effort row set.

/// Parse comma-separated text into rows of trimmed fields.
///
/// Quoted fields may contain commas, line breaks and doubled quotes (`""`).
/// An unterminated quote runs to the end of the input. Rows whose first field
/// is empty or starts with `#` are dropped.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\r' | '\n' => {
                // Blank lines and the second half of CRLF carry no content
                if !field.is_empty() || !row.is_empty() {
                    row.push(std::mem::take(&mut field));
                    rows.push(finish_row(std::mem::take(&mut row)));
                }
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(finish_row(row));
    }

    rows.retain(|r| !is_skipped_row(r));
    rows
}

fn finish_row(row: Vec<String>) -> Vec<String> {
    row.into_iter().map(|f| f.trim().to_string()).collect()
}

/// Empty rows, rows with an empty first cell and `#` comment rows
fn is_skipped_row(row: &[String]) -> bool {
    match row.first() {
        None => true,
        Some(first) => first.is_empty() || first.starts_with('#'),
    }
}

#[cfg(test)]
#[path = "csv_parser_tests.rs"]
mod tests;
