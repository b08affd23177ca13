//! Minimal reader for the comma-separated catalog files.
//!
//! Supports quoted fields (including embedded delimiters and line breaks),
//! doubled quotes as an escaped quote, CRLF line endings and a leading UTF-8 BOM.

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct CsvConfig {
    pub delimiter: char,
    pub quote: char,
    pub strip_bom: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            strip_bom: true,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct CsvSyntaxError {
    pub line: usize,
    pub message: String,
}

/// One physical record and the line it started on (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Splits `input` into records. Blank lines are skipped.
pub fn parse_records(input: &str, config: &CsvConfig) -> Result<Vec<CsvRecord>, CsvSyntaxError> {
    let text = if config.strip_bom {
        input.strip_prefix('\u{feff}').unwrap_or(input)
    } else {
        input
    };

    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut has_content = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut quote_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == config.quote {
                if chars.peek() == Some(&config.quote) {
                    field.push(config.quote);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                if c == '\n' {
                    line += 1;
                }
                field.push(c);
            }
            continue;
        }

        match c {
            q if q == config.quote => {
                in_quotes = true;
                has_content = true;
                quote_line = line;
            }
            d if d == config.delimiter => {
                fields.push(std::mem::take(&mut field));
                has_content = true;
            }
            '\r' => {}
            '\n' => {
                if has_content {
                    fields.push(std::mem::take(&mut field));
                    records.push(CsvRecord {
                        line: record_line,
                        fields: std::mem::take(&mut fields),
                    });
                }
                field.clear();
                has_content = false;
                line += 1;
                record_line = line;
            }
            other => {
                field.push(other);
                has_content = true;
            }
        }
    }

    if in_quotes {
        return Err(CsvSyntaxError {
            line: quote_line,
            message: "unterminated quoted field".to_string(),
        });
    }

    if has_content {
        fields.push(field);
        records.push(CsvRecord {
            line: record_line,
            fields,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(input: &str) -> Vec<Vec<String>> {
        parse_records(input, &CsvConfig::default())
            .unwrap()
            .into_iter()
            .map(|r| r.fields)
            .collect()
    }

    #[test]
    fn test_plain_rows() {
        assert_eq!(
            fields("a,b,c\n1,2,3\n"),
            vec![vec!["a", "b", "c"], vec!["1", "2", "3"]]
        );
    }

    #[test]
    fn test_quoted_fields() {
        let rows = fields("name,notes\n\"Pitch, short\",\"He said \"\"hi\"\"\"\r\n");
        assert_eq!(rows[1], vec!["Pitch, short", "He said \"hi\""]);
    }

    #[test]
    fn test_multiline_quoted_field_keeps_record_line() {
        let records = parse_records("h1,h2\n\"one\ntwo\",x\nlast,row", &CsvConfig::default()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].fields[0], "one\ntwo");
        assert_eq!(records[1].line, 2);
        assert_eq!(records[2].line, 4);
    }

    #[test]
    fn test_bom_and_blank_lines() {
        let rows = fields("\u{feff}col\n\nvalue\n\n");
        assert_eq!(rows, vec![vec!["col"], vec!["value"]]);
    }

    #[test]
    fn test_empty_trailing_field() {
        assert_eq!(fields("a,b,\n"), vec![vec!["a", "b", ""]]);
    }

    #[test]
    fn test_unterminated_quote() {
        let err = parse_records("a\n\"open,b\n", &CsvConfig::default()).unwrap_err();
        assert_eq!(err.line, 2);
    }
}
