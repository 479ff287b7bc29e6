//src/types.rs

use ahash::AHashMap;

/// Read identifier -> true amplicon label, as given by the alignment report.
pub type TruthMap = AHashMap<String, String>;

/// One parsed line of a binning result file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinningRecord<'a> {
    pub read_id: &'a str,
    /// Assigned amplicon, trailing whitespace already stripped
    pub assigned: &'a str,
    /// Optional third column (the binner's k-mer fraction)
    pub kmer_frac: Option<&'a str>,
}

/// Whether an assignment agrees with the truth set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOutcome {
    Correct,
    Incorrect,
}

/// A single incorrect assignment, kept in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub read_id: String,
    pub assigned: String,
    pub expected: String,
    pub kmer_frac: Option<String>,
}
