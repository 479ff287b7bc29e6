//src/truth.rs

use std::io::BufRead;
use std::path::Path;

use crate::error::{CheckError, Result};
use crate::reader::{open_text_reader, split_fields};
use crate::types::TruthMap;

/// Column holding the read identifier in the alignment report.
const READ_ID_FIELD: usize = 0;
/// Column holding the amplicon the read truly aligned to.
const AMPLICON_FIELD: usize = 3;

/// Parses an alignment report in the format:
/// ```text
/// <header line>
/// <read_id>\t...\t...\t<amplicon>[\t...]
/// ```
/// Returns a `TruthMap` of read_id -> amplicon. The amplicon column is kept
/// verbatim; a read listed twice keeps its last label.
pub fn load_truth_set<P: AsRef<Path>>(path: P) -> Result<TruthMap> {
    let path = path.as_ref();
    let reader = open_text_reader(path)?;
    load_truth_reader(reader, &path.display().to_string())
}

/// Same as [`load_truth_set`] over any buffered reader; `source_name` labels errors.
pub fn load_truth_reader<R: BufRead>(reader: R, source_name: &str) -> Result<TruthMap> {
    let mut truth = TruthMap::new();
    let mut overwritten = 0usize;

    // skip the header
    for (idx, line_result) in reader.lines().enumerate().skip(1) {
        let line = line_result.map_err(|e| CheckError::io(source_name, e))?;
        let fields = split_fields(&line, AMPLICON_FIELD + 1, source_name, idx + 1)?;

        let read_id = fields[READ_ID_FIELD];
        let amplicon = fields[AMPLICON_FIELD];
        if truth
            .insert(read_id.to_string(), amplicon.to_string())
            .is_some()
        {
            overwritten += 1;
        }
    }

    if overwritten > 0 {
        log::warn!(
            "{} duplicate read id(s) in {}; the last listed amplicon was kept",
            overwritten,
            source_name
        );
    }

    if truth.is_empty() {
        return Err(CheckError::EmptyTruthSet {
            path: source_name.to_string(),
        });
    }

    log::info!("Loaded {} reads from truth set {}", truth.len(), source_name);
    Ok(truth)
}
