use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("a polyline needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("coordinate ({lat}, {lon}) is not finite")]
    NonFiniteCoordinate { lat: f64, lon: f64 },

    #[error("coordinate ({lat}, {lon}) is outside [-90, 90] x [-180, 180]")]
    OutOfRange { lat: f64, lon: f64 },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
