#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// Got an invalid parameter value in a function
    InvalidParameter(String),
    /// The different arrays describing a configuration do not agree with one
    /// another
    GeometryMismatch(String),
    /// The unit cell is not orthorhombic
    UnsupportedCell(String),
    /// The cutoff is larger than half of the shortest cell length, and the
    /// minimum image convention would miss some pairs
    UnsupportedCutoff {
        /// the requested cutoff
        cutoff: f64,
        /// largest cutoff compatible with the unit cell
        max: f64,
    },
    /// Error while serializing/deserializing data
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidParameter(e) => write!(f, "invalid parameter: {}", e),
            Error::GeometryMismatch(e) => write!(f, "geometry mismatch: {}", e),
            Error::UnsupportedCell(e) => write!(f, "unsupported cell: {}", e),
            Error::UnsupportedCutoff { cutoff, max } => write!(f,
                "unsupported cutoff: {} is larger than half of the shortest cell length ({})",
                cutoff, max
            ),
            Error::Json(e) => write!(f, "json error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidParameter(_) |
            Error::GeometryMismatch(_) |
            Error::UnsupportedCell(_) |
            Error::UnsupportedCutoff { .. } => None,
            Error::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::Json(error)
    }
}
