use std::io::BufRead;

use csv_core::ReadFieldResult;

use crate::error::{CorpusError, Result};

/// A raw row: one string per tab-separated column
pub type Row = Vec<String>;

/// Split one line into tab-separated fields, honouring CSV double quotes
pub fn split_tsv_line(line: &str) -> Row {
    let mut rdr = csv_core::ReaderBuilder::new().delimiter(b'\t').build();
    let mut input = line.as_bytes();
    let mut fields = Vec::new();
    let mut field = Vec::new();
    let mut output = [0; 4096];
    loop {
        let (result, nin, nout) = rdr.read_field(input, &mut output);
        input = &input[nin..];
        field.extend_from_slice(&output[..nout]);
        match result {
            // An empty slice on the next call signals end of input.
            ReadFieldResult::InputEmpty | ReadFieldResult::OutputFull => {}
            ReadFieldResult::Field { record_end } => {
                fields.push(String::from_utf8_lossy(&field).into_owned());
                field.clear();
                if record_end {
                    break;
                }
            }
            ReadFieldResult::End => break,
        }
    }
    fields
}

/// Lazy iterator over the non-blank rows of a tab-separated reader
pub struct TsvRows<R> {
    reader: R,
    line: usize,
    buf: String,
}

impl<R: BufRead> TsvRows<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buf: String::new(),
        }
    }

    /// 1-based number of the last line read
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for TsvRows<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line += 1;
                    let line = self.buf.trim_end_matches(['\n', '\r']);
                    if line.is_empty() {
                        continue;
                    }
                    return Some(Ok(split_tsv_line(line)));
                }
                Err(e) => {
                    return Some(Err(CorpusError::malformed_row(
                        self.line + 1,
                        format!("unreadable line: {e}"),
                    )))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn splits_on_tabs() {
        assert_eq!(
            split_tsv_line("o1k1\tλόγος\t〔40｜1｜1〕"),
            vec!["o1k1", "λόγος", "〔40｜1｜1〕"]
        );
    }

    #[test]
    fn keeps_empty_fields() {
        assert_eq!(split_tsv_line("a\t\tb\t"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn unquotes_fields() {
        assert_eq!(
            split_tsv_line("id\t\"he said, \"\"hi\"\"\""),
            vec!["id", "he said, \"hi\""]
        );
    }

    #[test]
    fn long_field_survives_output_buffer() {
        let long = "ω".repeat(5000);
        let row = split_tsv_line(&format!("x\t{long}"));
        assert_eq!(row[1], long);
    }

    #[test]
    fn rows_skip_blank_lines() {
        let data = "a\tb\r\n\nc\td\n";
        let mut rows = TsvRows::new(Cursor::new(data));
        assert_eq!(rows.next().unwrap().unwrap(), vec!["a", "b"]);
        assert_eq!(rows.next().unwrap().unwrap(), vec!["c", "d"]);
        assert_eq!(rows.line(), 3);
        assert!(rows.next().is_none());
    }
}
