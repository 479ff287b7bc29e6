// src/binning_stats.rs

use crate::binning::BinningTally;

/// Accuracy figures for one binning run.
///
/// Reads never seen in the binning file, and reads binned both correctly and
/// incorrectly (`num_ambiguous`), count towards neither percentage, so the
/// two percentages need not add up to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyStats {
    /// Reads in the truth set; denominator of both percentages
    pub total_reads: usize,
    pub num_correct: usize,
    /// Reads that were never binned correctly on any line
    pub num_incorrect: usize,
    pub num_ambiguous: usize,
    pub perc_correct: f64,
    pub perc_incorrect: f64,
}

impl AccuracyStats {
    pub fn from_tally(tally: &BinningTally, total_reads: usize) -> Self {
        let num_correct = tally.correct_reads.len();
        let num_ambiguous = tally.ambiguous_reads().count();
        let num_incorrect = tally.incorrect_reads.len() - num_ambiguous;

        AccuracyStats {
            total_reads,
            num_correct,
            num_incorrect,
            num_ambiguous,
            perc_correct: percentage(num_correct, total_reads),
            perc_incorrect: percentage(num_incorrect, total_reads),
        }
    }

    /// Reads the binning file covered at all, correct or not.
    pub fn num_binned(&self) -> usize {
        self.num_correct + self.num_incorrect
    }
}

/// `count / total * 100`, or 0 for an empty universe.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (count as f64 / total as f64) * 100.0
    }
}
