use thiserror::Error;

/// A junction filter expression could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid number {0:?} in filter")]
    Number(String),

    #[error("invalid range {0:?}: expected \"from-to\" with from <= to")]
    Range(String),
}
