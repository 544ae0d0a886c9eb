use thiserror::Error;

/// The kind of failure encountered while parsing the command line.
///
/// The parser fails fast: only the first failure of a parse is ever reported.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A bare `-` or `--` was used where an option name was expected.
    #[error("option missing")]
    OptionMissing,
    /// The option requires a value, but the command line ran out of tokens.
    #[error("argument missing")]
    ArgumentMissing,
    /// The value is present, but does not convert to the option's type.
    #[error("invalid argument")]
    InvalidArgument,
    /// The value converted, but is not one of the option's enumerated values.
    #[error("impossible enum value")]
    ImpossibleEnumValue,
    /// The value of an integer option is not a number.
    #[error("not a number")]
    NotANumber,
    /// Neither an option nor an alias goes by this name.
    #[error("unknown option")]
    UnknownOption,
    /// A token without a leading dash, while free arguments are not enabled.
    #[error("disallowed free arg")]
    DisallowedFreeArg,
    /// An option without a default was never supplied.
    #[error("required option not present")]
    RequiredOptionNotPresent,
}

/// Where on the command line an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The token exactly as the user typed it (including any leading dashes).
    pub typed: String,
    /// The canonical option name the token resolved to, or the stripped text if it did not resolve.
    pub resolved_name: String,
}

impl ErrorContext {
    pub(crate) fn new(typed: impl Into<String>, resolved_name: impl Into<String>) -> Self {
        Self {
            typed: typed.into(),
            resolved_name: resolved_name.into(),
        }
    }
}
