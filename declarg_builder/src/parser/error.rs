use std::fmt;

use crate::matcher::best_match;
use crate::model::{ErrorContext, ErrorKind};

/// Whether a suggested name is a canonical option (`--name`) or an alias (`-name`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// The suggestion is a canonical option name.
    Option,
    /// The suggestion is an alias name.
    Alias,
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionKind::Option => write!(f, "option"),
            SuggestionKind::Alias => write!(f, "alias"),
        }
    }
}

/// A probable misspelling fix for an unknown option.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// The suggested token, including its leading dash(es).
    pub candidate: String,
    /// What the suggested token names.
    pub kind: SuggestionKind,
    /// The keyboard weighted edit distance between the typed token and the candidate.
    pub distance: f64,
}

impl Suggestion {
    /// Find the closest of `candidates` (each including its leading dash(es)), if it is below `threshold`.
    pub(crate) fn closest(typed: &str, candidates: &[String], threshold: f64) -> Option<Self> {
        let best = best_match(typed, candidates)?;

        if best.distance < threshold {
            let kind = if best.found.starts_with("--") {
                SuggestionKind::Option
            } else {
                SuggestionKind::Alias
            };

            Some(Self {
                candidate: best.found,
                kind,
                distance: best.distance,
            })
        } else {
            None
        }
    }
}

/// A failed parse: what went wrong, where, and how the user might fix it.
///
/// The `Display` rendering is the message shown to the user.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{CommandLineParser, ErrorKind, Integer, Parameter};
///
/// #[derive(Debug, Default)]
/// struct Options {
///     count: u32,
/// }
///
/// let parser = CommandLineParser::<Options>::new("program")
///     .add(Parameter::option(Integer::new(), |o: &mut Options| &mut o.count, "count"))
///     .build_parser()
///     .unwrap();
///
/// let error = parser.parse_tokens(&["--count", "x"]).unwrap_err();
/// assert_eq!(error.kind, ErrorKind::NotANumber);
/// assert_eq!(error.to_string(), "not a number when parsing \"--count\"");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// The kind of failure.
    pub kind: ErrorKind,
    /// The offending token and the option it resolved to.
    pub context: ErrorContext,
    /// The legal values of the offending option, when it is an enumeration.
    pub possible_values: Option<Vec<String>>,
    /// The probable fix for an unknown option.
    pub suggestion: Option<Suggestion>,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, context: ErrorContext) -> Self {
        Self {
            kind,
            context,
            possible_values: None,
            suggestion: None,
        }
    }

    pub(crate) fn with_possible_values(mut self, possible_values: Option<Vec<String>>) -> Self {
        self.possible_values = possible_values;
        self
    }

    pub(crate) fn with_suggestion(mut self, suggestion: Option<Suggestion>) -> Self {
        self.suggestion = suggestion;
        self
    }

    fn resolved_via_alias(&self) -> bool {
        let typed = &self.context.typed;
        self.kind != ErrorKind::UnknownOption
            && typed.starts_with('-')
            && !typed.starts_with("--")
            && !self.context.resolved_name.is_empty()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ErrorContext {
            typed,
            resolved_name,
        } = &self.context;

        match self.kind {
            ErrorKind::OptionMissing => {
                return write!(f, "option name is missing, \"{typed}\" used instead");
            }
            ErrorKind::RequiredOptionNotPresent => {
                return write!(f, "required option \"{resolved_name}\" is missing");
            }
            ErrorKind::UnknownOption | ErrorKind::DisallowedFreeArg => {
                write!(f, "{kind} \"{typed}\"", kind = self.kind)?;
            }
            _ => {
                write!(f, "{kind} when parsing \"{typed}\"", kind = self.kind)?;
            }
        }

        if self.resolved_via_alias() {
            write!(f, " resolved as \"--{resolved_name}\"")?;
        }

        if let Some(values) = &self.possible_values {
            write!(f, ". Possible values are: [{}]", values.join(", "))?;
        }

        if let Some(Suggestion {
            candidate, kind, ..
        }) = &self.suggestion
        {
            write!(f, " you probably meant \"{candidate}\" {kind}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}
