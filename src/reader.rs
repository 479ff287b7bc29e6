//src/reader.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{CheckError, Result};

/// Opens a text input, transparently decompressing it when the name ends in `.gz`.
pub fn open_text_reader<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| CheckError::io(path.display().to_string(), e))?;

    let is_gz = path
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let reader: Box<dyn BufRead> = if is_gz {
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };
    Ok(reader)
}

/// Splits a line on tabs and checks it carries at least `min_fields` columns.
/// `line_no` is 1-based and only used for the error.
pub fn split_fields<'a>(
    line: &'a str,
    min_fields: usize,
    source_name: &str,
    line_no: usize,
) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < min_fields {
        return Err(CheckError::MalformedLine {
            source_name: source_name.to_string(),
            line: line_no,
            expected: min_fields,
            found: fields.len(),
        });
    }
    Ok(fields)
}
