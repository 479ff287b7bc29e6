//src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The binning file names a read the alignment report never saw.
    #[error("read not found in truth set: {read_id} (binning line {line})")]
    ReadNotFoundInTruthSet { read_id: String, line: usize },

    #[error("malformed line {line} in {source_name}: expected at least {expected} tab-separated fields, found {found}")]
    MalformedLine {
        source_name: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("truth set {path} contains no reads")]
    EmptyTruthSet { path: String },
}

impl CheckError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        CheckError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
