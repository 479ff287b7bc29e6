//src/binning.rs

use ahash::{AHashMap, AHashSet};
use std::io::BufRead;
use std::path::Path;

use crate::error::{CheckError, Result};
use crate::reader::{open_text_reader, split_fields};
use crate::types::{BinOutcome, BinningRecord, Mismatch, TruthMap};

/// Per-read bookkeeping accumulated while scanning a binning file.
#[derive(Debug, Default, Clone)]
pub struct BinningTally {
    /// Every read id met in the binning file
    pub seen_reads: AHashSet<String>,
    /// Reads assigned their true amplicon on at least one line
    pub correct_reads: AHashSet<String>,
    /// Reads assigned a wrong amplicon -> number of such lines
    pub incorrect_reads: AHashMap<String, u32>,
    /// Every incorrect line, in input order; only filled when `keep_mismatches` is set
    pub mismatches: Vec<Mismatch>,
    pub keep_mismatches: bool,
}

impl BinningTally {
    pub fn new(keep_mismatches: bool) -> Self {
        BinningTally {
            keep_mismatches,
            ..Default::default()
        }
    }

    /// Records one assignment whose truth label is already known.
    pub fn record(&mut self, record: &BinningRecord<'_>, expected: &str) -> BinOutcome {
        self.seen_reads.insert(record.read_id.to_string());

        if record.assigned == expected {
            self.correct_reads.insert(record.read_id.to_string());
            return BinOutcome::Correct;
        }

        *self
            .incorrect_reads
            .entry(record.read_id.to_string())
            .or_insert(0) += 1;

        log::debug!(
            "{}\tgot:{}\twanted:{}\tkmerFrac:{}",
            record.read_id,
            record.assigned,
            expected,
            record.kmer_frac.unwrap_or("NA")
        );
        if self.keep_mismatches {
            self.mismatches.push(Mismatch {
                read_id: record.read_id.to_string(),
                assigned: record.assigned.to_string(),
                expected: expected.to_string(),
                kmer_frac: record.kmer_frac.map(str::to_string),
            });
        }
        BinOutcome::Incorrect
    }

    /// Reads binned both correctly and incorrectly somewhere in the file.
    pub fn ambiguous_reads(&self) -> impl Iterator<Item = &String> {
        self.incorrect_reads
            .keys()
            .filter(move |read_id| self.correct_reads.contains(*read_id))
    }
}

/// Splits one binning line into its columns. Only the assigned amplicon
/// (and the optional k-mer fraction) lose their trailing whitespace.
pub fn parse_binning_line<'a>(
    line: &'a str,
    source_name: &str,
    line_no: usize,
) -> Result<BinningRecord<'a>> {
    let fields = split_fields(line, 2, source_name, line_no)?;
    Ok(BinningRecord {
        read_id: fields[0],
        assigned: fields[1].trim_end(),
        kmer_frac: fields.get(2).map(|f| f.trim()),
    })
}

/// Scans a binning result file against the truth set.
/// Incorrect lines are only kept in `mismatches` when `keep_mismatches` is set.
pub fn tally_binning_file<P: AsRef<Path>>(
    path: P,
    truth: &TruthMap,
    keep_mismatches: bool,
) -> Result<BinningTally> {
    let path = path.as_ref();
    let reader = open_text_reader(path)?;
    tally_binning_reader(reader, &path.display().to_string(), truth, keep_mismatches)
}

/// Same as [`tally_binning_file`] over any buffered reader. Stops at the
/// first read that the truth set does not know.
pub fn tally_binning_reader<R: BufRead>(
    reader: R,
    source_name: &str,
    truth: &TruthMap,
    keep_mismatches: bool,
) -> Result<BinningTally> {
    let mut tally = BinningTally::new(keep_mismatches);
    let mut correct_lines = 0usize;
    let mut incorrect_lines = 0usize;

    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| CheckError::io(source_name, e))?;
        let record = parse_binning_line(&line, source_name, idx + 1)?;

        let expected = truth.get(record.read_id).ok_or_else(|| {
            CheckError::ReadNotFoundInTruthSet {
                read_id: record.read_id.to_string(),
                line: idx + 1,
            }
        })?;

        match tally.record(&record, expected) {
            BinOutcome::Correct => correct_lines += 1,
            BinOutcome::Incorrect => incorrect_lines += 1,
        }
    }

    log::info!(
        "Scanned {} binning lines from {}: {} distinct reads, {} incorrect assignments",
        correct_lines + incorrect_lines,
        source_name,
        tally.seen_reads.len(),
        incorrect_lines
    );
    Ok(tally)
}
