use strum::{AsRefStr, Display};

/// Which of the two slot domains came out empty.
#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum DomainKind {
    Breakfast,
    Main,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("duplicate recipe title: {0}")]
    DuplicateRecipe(String),

    #[error("no {0} recipe survives the intolerance filters")]
    UnsatisfiableDomain(DomainKind),

    #[error("no menu satisfies every constraint ({explored} nodes explored)")]
    NoSolutionFound { explored: u64 },

    #[error("invariant violated: {0}")]
    Invariant(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Unknown(value.into())
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Invariant(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Invariant(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Invariant(format!($fmt, $($arg)*)))
    };
}
