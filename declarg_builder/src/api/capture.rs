use thiserror::Error;

use crate::model::ErrorKind;

/// A failure to decode option values from the command line tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// There are no tokens left to decode.
    #[error("argument missing")]
    ArgumentMissing,
    /// The token is not a number.
    #[error("'{token}' is not a number")]
    NotANumber {
        /// The offending token.
        token: String,
    },
    /// The token does not convert to the value type.
    #[error("'{token}' is an invalid argument")]
    InvalidArgument {
        /// The offending token.
        token: String,
    },
}

impl From<&CodecError> for ErrorKind {
    fn from(error: &CodecError) -> Self {
        match error {
            CodecError::ArgumentMissing => ErrorKind::ArgumentMissing,
            CodecError::NotANumber { .. } => ErrorKind::NotANumber,
            CodecError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// A read position over the command line tokens that follow an option.
///
/// Codecs take tokens from the cursor; every token taken is consumed exactly once.
#[derive(Debug)]
pub struct Cursor<'t> {
    tokens: &'t [&'t str],
    position: usize,
}

impl<'t> Cursor<'t> {
    /// Create a cursor at the start of `tokens`.
    pub fn new(tokens: &'t [&'t str]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Take the next token.
    /// Fails with [`CodecError::ArgumentMissing`] when none are left (nothing is consumed).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&'t str, CodecError> {
        match self.tokens.get(self.position) {
            Some(&token) => {
                self.position += 1;
                Ok(token)
            }
            None => Err(CodecError::ArgumentMissing),
        }
    }

    /// The number of tokens taken so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether all the tokens have been taken.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }
}

/// Behaviour to decode a typed value out of the command line tokens (aka: the type descriptor of an option).
///
/// Codecs are stateless; user defined types plug into the parser by implementing this trait.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{Codec, CodecError, Cursor, Integer};
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// struct PointCodec;
///
/// impl Codec for PointCodec {
///     type Value = Point;
///
///     fn placeholder(&self) -> String {
///         "<x> <y>".to_string()
///     }
///
///     fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Point, CodecError> {
///         let x = Integer::<i32>::new().decode(cursor)?;
///         let y = Integer::<i32>::new().decode(cursor)?;
///         Ok(Point { x, y })
///     }
/// }
///
/// let tokens = ["1", "2", "rest"];
/// let mut cursor = Cursor::new(&tokens);
/// assert_eq!(PointCodec.decode(&mut cursor).unwrap(), Point { x: 1, y: 2 });
/// assert_eq!(cursor.position(), 2);
/// ```
pub trait Codec {
    /// The decoded type.
    type Value;

    /// The expected value(s), as displayed in the help message (ex: `<int>`).
    fn placeholder(&self) -> String;

    /// Decode a value from the tokens under the cursor, consuming as many as the type requires.
    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Self::Value, CodecError>;

    /// The legal values, if the type is an enumeration.
    fn possible_values(&self) -> Option<Vec<String>> {
        None
    }

    /// Whether a decoded value belongs to the enumeration of legal values.
    fn admits(&self, _value: &Self::Value) -> bool {
        true
    }

    /// The value to use when the option is omitted and no default was declared.
    /// When `None`, the option is required (unless declared with a default).
    fn implicit_default(&self) -> Option<Self::Value> {
        None
    }
}

/// Why a single option failed to capture its value(s).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CaptureError {
    Codec(CodecError),
    NotAdmitted,
}

impl From<CodecError> for CaptureError {
    fn from(error: CodecError) -> Self {
        CaptureError::Codec(error)
    }
}

impl From<&CaptureError> for ErrorKind {
    fn from(error: &CaptureError) -> Self {
        match error {
            CaptureError::Codec(error) => ErrorKind::from(error),
            CaptureError::NotAdmitted => ErrorKind::ImpossibleEnumValue,
        }
    }
}
