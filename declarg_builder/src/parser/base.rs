use thiserror::Error;

use crate::api::{CaptureError, CodecError, Cursor};
use crate::constant::*;
use crate::matcher::{AliasError, AliasTable};
use crate::model::{ErrorContext, ErrorKind};
use crate::parser::error::{ParseError, Suggestion};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// We need a (dyn .. [ignoring T] ..) here in order to put all the options of varying types T under one collection.
// In other words, we want the bottom of the object graph to include the types T, but up here we want to work across all T.
pub(crate) type OptionCapture<R> = (OptionConfig, Box<dyn AnonymousCapturable<R>>);

/// The projection onto the free arguments slot of the result structure.
pub(crate) type FreeArgs<R> = fn(&mut R) -> &mut Vec<String>;

/// A problem with the command line parser configuration.
///
/// These are programming errors, detected once when the parser is built (never while parsing).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An option declared with an empty name.
    #[error("Config error: options cannot have an empty name.")]
    EmptyName,
    /// An option name declared more than once.
    #[error("Config error: cannot duplicate the option '{0}'.")]
    Duplicate(String),
    /// A problem with the alias declarations.
    #[error("Config error: {0}")]
    Alias(#[from] AliasError),
    /// A declared default that does not decode through the option's own codec.
    #[error("Config error: invalid default for the option '{name}': {reason}")]
    InvalidDefault {
        /// The offending option.
        name: String,
        /// Why the default is invalid.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid_default(name: impl Into<String>, error: CaptureError) -> Self {
        let reason = match error {
            CaptureError::Codec(CodecError::ArgumentMissing) => {
                "not enough default tokens.".to_string()
            }
            CaptureError::Codec(error) => format!("{error}."),
            CaptureError::NotAdmitted => "not one of the possible values.".to_string(),
        };
        ConfigError::InvalidDefault {
            name: name.into(),
            reason,
        }
    }
}

/// Behaviour to capture an implicit value type out of the tokens, into the result structure `R`.
///
/// We use this at the middle/top of the parser object graph so that options of different types may all be 'captured' in a single parser.
pub(crate) trait AnonymousCapturable<R> {
    /// Capture the option's value(s) from the tokens under the cursor.
    fn capture(&self, result: &mut R, cursor: &mut Cursor<'_>) -> Result<(), CaptureError>;

    /// Apply the default of an omitted option.
    /// Returns `false` when the option has no default (it is required).
    fn apply_default(&self, result: &mut R) -> bool;
}

/// The parser's view of a declared option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionConfig {
    name: String,
    possible_values: Option<Vec<String>>,
}

impl OptionConfig {
    pub(crate) fn new(name: impl Into<String>, possible_values: Option<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            possible_values,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

struct HelpCapture;

impl<R> AnonymousCapturable<R> for HelpCapture {
    fn capture(&self, _result: &mut R, _cursor: &mut Cursor<'_>) -> Result<(), CaptureError> {
        Ok(())
    }

    fn apply_default(&self, _result: &mut R) -> bool {
        true
    }
}


#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action<R> {
    Complete(R),
    PrintHelp(R),
}

/// The parsing engine: a single left to right pass over the tokens, followed by a sweep over the omitted options.
pub(crate) struct Parser<R> {
    options: Vec<OptionCapture<R>>,
    aliases: AliasTable,
    free_args: Option<FreeArgs<R>>,
    suggestion_threshold: f64,
}

impl<R> std::fmt::Debug for Parser<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<R: Default> Parser<R> {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(
            Vec::default(),
            Vec::default(),
            None,
            DEFAULT_SUGGESTION_THRESHOLD,
        )
        .unwrap()
    }

    pub(crate) fn new(
        options: Vec<OptionCapture<R>>,
        aliases: Vec<(String, String)>,
        free_args: Option<FreeArgs<R>>,
        suggestion_threshold: f64,
    ) -> Result<Self, ConfigError> {
        let mut captures: Vec<OptionCapture<R>> = Vec::with_capacity(options.len() + 1);

        for (oc, f) in options.into_iter() {
            if oc.name.is_empty() {
                return Err(ConfigError::EmptyName);
            }

            if oc.name == HELP_NAME || captures.iter().any(|(c, _)| c.name == oc.name) {
                return Err(ConfigError::Duplicate(oc.name));
            }

            captures.push((oc, f));
        }

        captures.push((OptionConfig::new(HELP_NAME, None), Box::new(HelpCapture)));
        let aliases = AliasTable::new(captures.iter().map(|(c, _)| c.name.clone()), aliases)?;

        Ok(Self {
            options: captures,
            aliases,
            free_args,
            suggestion_threshold,
        })
    }

    /// Parse the tokens (excluding the program name) into a fresh result structure.
    ///
    /// Fails fast: the first problem encountered is returned.
    pub(crate) fn consume(&self, tokens: &[&str]) -> Result<Action<R>, ParseError> {
        let mut result = R::default();
        let mut presence: Vec<usize> = vec![0; self.options.len()];
        let mut position = 0;

        while position < tokens.len() {
            let token = tokens[position];
            position += 1;

            // 1. Resolve the token to a canonical option name (or take it as a free argument).
            let name = if token == "-" || token == "--" {
                return Err(ParseError::new(
                    ErrorKind::OptionMissing,
                    ErrorContext::new(token, ""),
                ));
            } else if let Some(name) = token.strip_prefix("--") {
                name
            } else if let Some(alias) = token.strip_prefix('-') {
                match self.aliases.resolve(alias) {
                    Some(name) => name,
                    None => return Err(self.unknown_option(token, alias)),
                }
            } else {
                match self.free_args {
                    Some(free_args) => {
                        #[cfg(feature = "tracing_debug")]
                        {
                            debug!("Token '{token}' collected as a free argument.");
                        }

                        free_args(&mut result).push(token.to_string());
                        continue;
                    }
                    None => {
                        return Err(ParseError::new(
                            ErrorKind::DisallowedFreeArg,
                            ErrorContext::new(token, token),
                        ));
                    }
                }
            };

            // 2. Find the corresponding capture.
            let index = match self.options.iter().position(|(oc, _)| oc.name == name) {
                Some(index) => index,
                None => return Err(self.unknown_option(token, name)),
            };
            let (config, capture) = &self.options[index];

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{token}' matched option '{name}'.");
            }

            presence[index] += 1;

            if config.name == HELP_NAME {
                return Ok(Action::PrintHelp(result));
            }

            // 3. Capture the value(s), which follow immediately after the option token.
            let mut cursor = Cursor::new(&tokens[position..]);

            if let Err(error) = capture.capture(&mut result, &mut cursor) {
                let kind = ErrorKind::from(&error);
                let possible_values = match kind {
                    ErrorKind::InvalidArgument | ErrorKind::ImpossibleEnumValue => {
                        config.possible_values.clone()
                    }
                    _ => None,
                };

                return Err(ParseError::new(kind, ErrorContext::new(token, name))
                    .with_possible_values(possible_values));
            }

            position += cursor.position();
        }

        // 4. Sweep the omitted options, in declaration order.
        for (index, (config, capture)) in self.options.iter().enumerate() {
            if presence[index] == 0 {
                if capture.apply_default(&mut result) {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Option '{n}' omitted, applied its default.", n = config.name);
                    }
                } else {
                    return Err(ParseError::new(
                        ErrorKind::RequiredOptionNotPresent,
                        ErrorContext::new("", config.name.clone()),
                    ));
                }
            }
        }

        Ok(Action::Complete(result))
    }

    fn unknown_option(&self, token: &str, name: &str) -> ParseError {
        let candidates: Vec<String> = self
            .options
            .iter()
            .map(|(oc, _)| format!("--{n}", n = oc.name))
            .chain(self.aliases.names().map(|alias| format!("-{alias}")))
            .collect();
        let suggestion = Suggestion::closest(token, &candidates, self.suggestion_threshold);

        ParseError::new(ErrorKind::UnknownOption, ErrorContext::new(token, name))
            .with_suggestion(suggestion)
    }
}
