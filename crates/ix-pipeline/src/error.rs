use thiserror::Error;

use ix_core::IxError;
use ix_io::TableError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] IxError),

    #[error("cannot load road table: {0}")]
    Load(#[from] TableError),

    #[error("unknown output selector {0:?}: expected letters from \"cjrx\"")]
    OutputSelector(char),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
