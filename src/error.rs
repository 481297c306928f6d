use thiserror::Error;

/// Failures surfaced by the cyclotron core.
///
/// Every variant is local to one simulation run and recoverable by a reset.
#[derive(Error, Debug)]
pub enum CyclotronError {
    #[error("particle speed {speed:e} m/s reached the speed of light ({c:e} m/s)")]
    Superluminal { speed: f64, c: f64 },

    #[error("non-finite value in {quantity}")]
    NonFinite { quantity: &'static str },

    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("unknown particle species: {0}")]
    UnknownSpecies(String),

    #[error("no data to export, run the simulation first")]
    NoData,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CyclotronError {
    /// Whether this failure leaves the particle outside the valid physical regime.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CyclotronError::Superluminal { .. } | CyclotronError::NonFinite { .. }
        )
    }
}

pub type CyclotronResult<T> = Result<T, CyclotronError>;
