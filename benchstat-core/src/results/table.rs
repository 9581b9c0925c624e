use crate::results::error::ResultsError;
use crate::results::types::{Header, RawRecord, REQUIRED_COLUMNS};
use std::borrow::Cow;
use std::collections::HashSet;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Row number reported for problems in the header line.
const HEADER_ROW: usize = 0;

/// A results block split into its header and a not-yet-parsed body.
#[derive(Debug)]
pub struct ResultsTable<'a> {
    header: Header,
    body: &'a str,
}

impl<'a> ResultsTable<'a> {
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Parses data rows on demand, in file order.
    pub fn records(&self) -> impl Iterator<Item = Result<RawRecord<'_>, ResultsError>> + '_ {
        lines(self.body).enumerate().map(move |(idx, line)| {
            let row = idx + 1;
            let values = split_fields(line, row)?;

            if values.len() != self.header.len() {
                return Err(ResultsError::FieldCount {
                    row,
                    expected: self.header.len(),
                    found: values.len(),
                });
            }

            Ok(RawRecord {
                row,
                header: &self.header,
                values,
            })
        })
    }
}

/// Reads the header line of `block` and validates it against the required columns.
///
/// The header is checked before any row is read. A repeated column name or a
/// missing required column is an error even when the table has no data rows,
/// where a `csv.DictReader` consumer would let the last duplicate win and only
/// fail on the first row that needs the absent field.
///
/// An empty block is a table with no header and no rows.
pub fn parse_table(block: &str) -> Result<ResultsTable<'_>, ResultsError> {
    let block = block.trim_start_matches(['\r', '\n']);
    let Some(header_line) = block.split(['\r', '\n']).next().filter(|l| !l.is_empty()) else {
        return Ok(ResultsTable {
            header: Header::new(Vec::new()),
            body: "",
        });
    };

    let columns: Vec<String> = split_fields(header_line, HEADER_ROW)?
        .into_iter()
        .map(Cow::into_owned)
        .collect();

    let mut seen = HashSet::new();
    for column in &columns {
        if !seen.insert(column.as_str()) {
            return Err(ResultsError::DuplicateColumn {
                column: column.clone(),
            });
        }
    }

    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !seen.contains(**c)) {
        return Err(ResultsError::MissingColumn { column: *missing });
    }

    Ok(ResultsTable {
        header: Header::new(columns),
        body: &block[header_line.len()..],
    })
}

fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n']).filter(|line| !line.is_empty())
}

/// Splits one line into fields. Quoted fields may contain the delimiter and `""` escapes.
pub(crate) fn split_fields(line: &str, row: usize) -> Result<Vec<Cow<'_, str>>, ResultsError> {
    let mut fields = Vec::new();
    let mut rest = line;

    loop {
        let (field, remainder) = match rest.strip_prefix(QUOTE) {
            Some(quoted) => {
                let (mut value, after) =
                    read_quoted(quoted).ok_or(ResultsError::UnterminatedQuote { row })?;
                // Text between the closing quote and the delimiter belongs to the field.
                let (tail, remainder) = split_at_delimiter(after);
                value.push_str(tail);
                (Cow::Owned(value), remainder)
            }
            None => {
                let (field, remainder) = split_at_delimiter(rest);
                (Cow::Borrowed(field), remainder)
            }
        };

        fields.push(field);

        match remainder {
            Some(next) => rest = next,
            None => return Ok(fields),
        }
    }
}

fn split_at_delimiter(text: &str) -> (&str, Option<&str>) {
    match text.split_once(DELIMITER) {
        Some((field, rest)) => (field, Some(rest)),
        None => (text, None),
    }
}

/// Reads up to the closing quote. Returns the unescaped value and the text after the quote.
fn read_quoted(text: &str) -> Option<(String, &str)> {
    let mut value = String::new();
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch != QUOTE {
            value.push(ch);
            continue;
        }

        if matches!(chars.peek(), Some((_, QUOTE))) {
            chars.next();
            value.push(QUOTE);
        } else {
            return Some((value, &text[idx + 1..]));
        }
    }

    None
}
