use thiserror::Error;

/// Errors raised while building a flow network or running a computation on it.
#[derive(Debug, Error)]
pub enum Error {
    /// An edge was rejected before insertion (self loop or non-positive capacity).
    #[error("invalid edge {start} -> {end}: {reason}")]
    InvalidEdge {
        start: String,
        end: String,
        reason: String,
    },

    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    /// Edges can only be inserted before the first augmentation.
    #[error("network is sealed: flow computation has already started")]
    NetworkSealed,

    #[error("augmentation limit of {0} reached before convergence")]
    AugmentationLimit(usize),

    /// The total flow does not fit in the capacity type.
    #[error("flow value overflows the capacity type")]
    FlowOverflow,

    #[error("invalid setting {key}: {message}")]
    Config { key: String, message: String },

    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_edge(
        start: impl std::fmt::Debug,
        end: impl std::fmt::Debug,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidEdge {
            start: format!("{:?}", start),
            end: format!("{:?}", end),
            reason: reason.into(),
        }
    }

    pub fn unknown_vertex(vertex: impl std::fmt::Debug) -> Self {
        Error::UnknownVertex(format!("{:?}", vertex))
    }

    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Config {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
