use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    DivisionByZero,
    OutOfRange {
        /// Requested bit or word.
        index: usize,
        /// First invalid index.
        bound: usize,
    },
    Overflow {
        /// Width the value did not fit into.
        width: usize,
    },
    WordCount { expected: usize, found: usize },
    InvalidStride,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => write!(f, "attempted division by zero"),
            Error::OutOfRange { index, bound } => {
                write!(f, "index {} out of range (must be below {})", index, bound)
            }
            Error::Overflow { width } => write!(f, "value does not fit into {} bits", width),
            Error::WordCount { expected, found } => {
                write!(f, "expected {} words, found {}", expected, found)
            }
            Error::InvalidStride => write!(f, "stride must be positive"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;

pub(crate) fn check_index(index: usize, bound: usize) -> Result<()> {
    if index < bound {
        Ok(())
    } else {
        Err(Error::OutOfRange { index, bound })
    }
}
