// src/lib.rs
pub mod types;
pub mod error;
pub mod reader;
pub mod truth;
pub mod binning;
pub mod binning_stats;

use std::fmt::Write as FmtWrite;
use std::path::Path;

use crate::binning::{tally_binning_file, BinningTally};
use crate::binning_stats::AccuracyStats;
use crate::error::Result;
use crate::truth::load_truth_set;

/// Where the alignment report is looked up when no other truth set is given.
/// Relative to the current working directory.
pub const DEFAULT_TRUTH_SET_PATH: &str = "data/CVR1.artic.alignreport.txt";

/// Everything one accuracy check produced. Text is generated on demand.
pub struct BinningCheckResults {
    /// Path of the truth set (alignment report)
    pub reference_path: String,
    /// Path of the binning result file that was scored
    pub binning_path: String,

    /// Per-read correct/incorrect bookkeeping
    pub tally: BinningTally,
    /// Counts and percentages over the truth-set universe
    pub stats: AccuracyStats,
}

impl BinningCheckResults {
    /// Generate the accuracy report printed on stdout
    pub fn get_report_text(&self) -> String {
        let mut output = String::new();
        output.push_str("---\n");
        writeln!(output, "reference:\t{}", self.reference_path).unwrap();
        writeln!(output, "read total:\t{}", self.stats.total_reads).unwrap();
        output.push_str("---\n");
        writeln!(output, "binning file:\t{}", self.binning_path).unwrap();
        writeln!(
            output,
            "correctly binned:\t{}\t{:.2}% of reference reads",
            self.stats.num_correct, self.stats.perc_correct
        )
        .unwrap();
        writeln!(
            output,
            "incorrectly binned:\t{}\t{:.2}% of reference reads",
            self.stats.num_incorrect, self.stats.perc_incorrect
        )
        .unwrap();
        output
    }

    /// Generate one TSV line per incorrect assignment, in input order
    pub fn get_mismatch_text(&self) -> String {
        let mut output = String::new();
        output.push_str("read\tgot\twanted\tkmerFrac\n");
        for m in &self.tally.mismatches {
            writeln!(
                output,
                "{}\t{}\t{}\t{}",
                m.read_id,
                m.assigned,
                m.expected,
                m.kmer_frac.as_deref().unwrap_or("NA")
            )
            .unwrap();
        }
        output
    }
}

/// Scores a binning result file against an alignment-report truth set.
///
/// Fails on the first read the truth set does not contain, on a line with
/// too few columns, on an empty truth set, or on any I/O error.
/// `keep_mismatches` fills `tally.mismatches` for [`BinningCheckResults::get_mismatch_text`].
pub fn check_binning<P: AsRef<Path>, Q: AsRef<Path>>(
    truth_path: P,
    binning_path: Q,
    keep_mismatches: bool,
) -> Result<BinningCheckResults> {
    let truth_path = truth_path.as_ref();
    let binning_path = binning_path.as_ref();

    // 1. Load the truth set; its size is the universe for all percentages
    let truth = load_truth_set(truth_path)?;
    let total_reads = truth.len();

    // 2. Score every assignment
    let tally = tally_binning_file(binning_path, &truth, keep_mismatches)?;

    // 3. Aggregate
    let stats = AccuracyStats::from_tally(&tally, total_reads);
    log::info!(
        "{} of {} reference reads binned: {} correctly, {} incorrectly, {} both ways",
        stats.num_binned(),
        stats.total_reads,
        stats.num_correct,
        stats.num_incorrect,
        stats.num_ambiguous
    );

    Ok(BinningCheckResults {
        reference_path: truth_path.display().to_string(),
        binning_path: binning_path.display().to_string(),
        tally,
        stats,
    })
}
