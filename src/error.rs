use std::error::Error;
use std::fmt;

/// Failure modes of the vector file decoders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    UnknownDirective(String), // directive not recognized by the text decoder
    MissingDirectiveArgument(&'static str),
    InvalidDirectiveArgument {
        directive: &'static str,
        value: String,
    },
    OptionsUnsupported, // directives passed to a format that defines none
    EmptyFile,
    BadColumnCount {
        line: usize,
        got: usize,
    },
    RaggedRow {
        line: usize,
        expected: usize,
        got: usize,
    },
    NonNumeric {
        line: usize,
        token: String,
    },
    TooFewRows {
        expected: usize,
        got: usize,
    },
    BadMagic,
    UnknownKindTag(u8),
    SizeMismatch {
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::UnknownDirective(directive) => {
                write!(f, "Unrecognized option directive '{}'", directive)
            }
            DecodeError::MissingDirectiveArgument(directive) => {
                write!(f, "Directive '{}' expects an argument", directive)
            }
            DecodeError::InvalidDirectiveArgument { directive, value } => {
                write!(f, "Directive '{}' has invalid argument '{}'", directive, value)
            }
            DecodeError::OptionsUnsupported => {
                write!(f, "Option directives are not supported for binary vector files")
            }
            DecodeError::EmptyFile => write!(f, "No data rows found"),
            DecodeError::BadColumnCount { line, got } => {
                write!(f, "Line {}: expected 1 or 2 numeric columns, found {}", line, got)
            }
            DecodeError::RaggedRow {
                line,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Line {}: row has {} columns where earlier rows had {}",
                    line, got, expected
                )
            }
            DecodeError::NonNumeric { line, token } => {
                write!(f, "Line {}: could not parse '{}' as a number", line, token)
            }
            DecodeError::TooFewRows { expected, got } => {
                write!(f, "File has {} data rows, at least {} required", got, expected)
            }
            DecodeError::BadMagic => write!(f, "Not a binary vector file (bad magic bytes)"),
            DecodeError::UnknownKindTag(tag) => {
                write!(f, "Unknown element kind tag {}", tag)
            }
            DecodeError::SizeMismatch { expected, got } => {
                write!(f, "Expected {} bytes of vector data, found {}", expected, got)
            }
        }
    }
}

impl Error for DecodeError {}
