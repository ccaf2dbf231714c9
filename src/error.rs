use std::io;

use thiserror::Error;

/// Process exit code for a successful detection.
pub const EXIT_OK: u8 = 0;
/// Process exit code when the input image is missing or undecodable.
pub const EXIT_INVALID_INPUT: u8 = 10;
/// Process exit code when the result cannot be written.
pub const EXIT_OUTPUT_WRITE: u8 = 20;
/// Process exit code when no usable document boundary was found.
pub const EXIT_NO_DOCUMENT: u8 = 100;
/// Process exit code for any unanticipated failure.
pub const EXIT_UNKNOWN: u8 = 254;

/// Failures a detection run can end with.
///
/// Every fallible stage reports exactly one of these; a partially known quad
/// is never surfaced.
#[derive(Debug, Error)]
pub enum DetectError {
    /// The input image is missing or cannot be decoded.
    #[error("cannot read input image: {0}")]
    InvalidInput(#[from] image::ImageError),

    /// The edge map contains no contours at all; not enough contrast to
    /// discern any region boundary.
    #[error("no contours found, not enough contrast")]
    DocumentNotFound,

    /// A candidate boundary was found but does not reduce to four distinct
    /// corners.
    #[error("candidate boundary has {vertices} dominant vertices instead of 4")]
    AmbiguousQuad { vertices: usize },

    /// The detection result could not be persisted.
    #[error("cannot write detection result: {0}")]
    OutputWrite(#[source] io::Error),
}

impl DetectError {
    /// Exit code reported for this failure at the process boundary.
    ///
    /// `DocumentNotFound` and `AmbiguousQuad` share one code: collaborators
    /// only distinguish "no usable document boundary" there. In-process
    /// callers see the full variant.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidInput(_) => EXIT_INVALID_INPUT,
            Self::DocumentNotFound | Self::AmbiguousQuad { .. } => EXIT_NO_DOCUMENT,
            Self::OutputWrite(_) => EXIT_OUTPUT_WRITE,
        }
    }
}
