use flo_curves::bezier::UnknownMode;

use serde_json;

use std::io;
use std::fmt;
use std::error::Error;

///
/// Errors that can occur while loading and rendering a curve document
///
#[derive(Debug)]
pub enum BezierToolError {
    /// The document could not be read or the output could not be written
    Io(io::Error),

    /// The document was not valid JSON or did not describe a curve
    Json(serde_json::Error),

    /// A curve or continuity mode was not recognised
    UnknownMode(UnknownMode),

    /// A command line option that should be a number was not (option name, value)
    InvalidNumber(String, String),

    /// The requested output format is not supported
    UnknownFormat(String)
}

impl fmt::Display for BezierToolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BezierToolError::Io(err)                    => write!(f, "I/O error: {}", err),
            BezierToolError::Json(err)                  => write!(f, "Could not read curve document: {}", err),
            BezierToolError::UnknownMode(mode)          => write!(f, "{}", mode),
            BezierToolError::InvalidNumber(name, value) => write!(f, "'{}' is not a valid value for --{} (expected a non-negative whole number)", value, name),
            BezierToolError::UnknownFormat(format)      => write!(f, "'{}' is not a known output format (expected 'json' or 'lines')", format)
        }
    }
}

impl Error for BezierToolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BezierToolError::Io(err)            => Some(err),
            BezierToolError::Json(err)          => Some(err),
            BezierToolError::UnknownMode(err)   => Some(err),
            _                                   => None
        }
    }
}

impl From<io::Error> for BezierToolError {
    fn from(err: io::Error) -> BezierToolError {
        BezierToolError::Io(err)
    }
}

impl From<serde_json::Error> for BezierToolError {
    fn from(err: serde_json::Error) -> BezierToolError {
        BezierToolError::Json(err)
    }
}

impl From<UnknownMode> for BezierToolError {
    fn from(err: UnknownMode) -> BezierToolError {
        BezierToolError::UnknownMode(err)
    }
}
