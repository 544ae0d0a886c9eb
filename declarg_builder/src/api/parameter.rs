use crate::api::{CaptureError, Codec, Cursor};
use crate::parser::{AnonymousCapturable, ConfigError, OptionCapture, OptionConfig, OptionParameter};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The projection from the result structure `R` onto the slot of an option.
pub type Accessor<R, T> = fn(&mut R) -> &mut T;

// Binds a codec to its slot in the result structure, hiding the value type from the parser.
struct Binding<R, C: Codec> {
    codec: C,
    accessor: Accessor<R, C::Value>,
    default: Option<C::Value>,
}

impl<R, C> AnonymousCapturable<R> for Binding<R, C>
where
    C: Codec,
    C::Value: Clone,
{
    fn capture(&self, result: &mut R, cursor: &mut Cursor<'_>) -> Result<(), CaptureError> {
        let value = self.codec.decode(cursor)?;

        if !self.codec.admits(&value) {
            return Err(CaptureError::NotAdmitted);
        }

        *(self.accessor)(result) = value;
        Ok(())
    }

    fn apply_default(&self, result: &mut R) -> bool {
        match &self.default {
            Some(value) => {
                *(self.accessor)(result) = value.clone();
                true
            }
            None => false,
        }
    }
}

enum DefaultSource<T> {
    Implicit,
    Value { value: T, display: String },
    Tokens(Vec<String>),
}

/// An option for the command line parser.
/// Used with [`CommandLineParser::add`](./struct.CommandLineParser.html#method.add).
///
/// An option without a default (explicit, or implied by its codec) is required.
pub struct Parameter<R, C: Codec> {
    codec: C,
    accessor: Accessor<R, C::Value>,
    name: String,
    help: Option<String>,
    default: DefaultSource<C::Value>,
}

impl<R, C: Codec> std::fmt::Debug for Parameter<R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let help = if let Some(h) = &self.help {
            format!(", {h}")
        } else {
            "".to_string()
        };

        write!(
            f,
            "Opt[{t}, --{name}{help}]",
            t = std::any::type_name::<C::Value>(),
            name = self.name,
        )
    }
}

impl<R, C: Codec> Parameter<R, C> {
    /// Create an option parameter.
    /// The `accessor` projects the result structure onto the field the option fills.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Integer, Parameter};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     count: u32,
    /// }
    ///
    /// Parameter::option(Integer::new(), |o: &mut Options| &mut o.count, "count");
    /// ```
    pub fn option(codec: C, accessor: Accessor<R, C::Value>, name: impl Into<String>) -> Self {
        Self {
            codec,
            accessor,
            name: name.into(),
            help: None,
            default: DefaultSource::Implicit,
        }
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply to the parameter.
    ///
    /// We recommend allowing `declarg` to format this field (ex: it is not recommended to use line breaks `'\n'`).
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Parameter, Tag};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     verbose: bool,
    /// }
    ///
    /// Parameter::option(Tag, |o: &mut Options| &mut o.verbose, "verbose")
    ///     .help("--this will get discarded--")
    ///     .help("Make the program output verbose.");
    /// ```
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help = Some(description.into());
        self
    }

    /// Declare the default for this parameter, applied when the option is omitted.
    /// The default is shown in the help message.
    /// If repeated, only the final default (value or tokens) will apply.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Integer, Parameter};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     count: u32,
    /// }
    ///
    /// Parameter::option(Integer::new(), |o: &mut Options| &mut o.count, "count")
    ///     .default_value(3);
    /// ```
    pub fn default_value(mut self, value: C::Value) -> Self
    where
        C::Value: std::fmt::Display,
    {
        let display = value.to_string();
        self.default = DefaultSource::Value { value, display };
        self
    }

    /// Declare the default for this parameter as command line tokens, decoded through the parameter's own codec.
    /// Tokens which fail to decode are a configuration error, reported when the parser is built.
    /// If repeated, only the final default (value or tokens) will apply.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{Integer, Pair, Parameter};
    ///
    /// #[derive(Default)]
    /// struct Options {
    ///     range: (u32, u32),
    /// }
    ///
    /// Parameter::option(
    ///     Pair::new(Integer::new(), Integer::new()),
    ///     |o: &mut Options| &mut o.range,
    ///     "range",
    /// )
    /// .default_tokens(["0", "10"]);
    /// ```
    pub fn default_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default = DefaultSource::Tokens(tokens.into_iter().map(|t| t.into()).collect());
        self
    }
}

impl<R, C> Parameter<R, C>
where
    R: 'static,
    C: Codec + 'static,
    C::Value: Clone + 'static,
{
    // Resolve the default (explicit value, then decoded tokens, then the codec's implicit default)
    // and split the parameter into its help view and its type erased capture.
    pub(super) fn into_option(self) -> Result<(OptionParameter, OptionCapture<R>), ConfigError> {
        let Parameter {
            codec,
            accessor,
            name,
            help,
            default,
        } = self;

        let (default, display) = match default {
            DefaultSource::Value { value, display } => {
                if !codec.admits(&value) {
                    return Err(ConfigError::invalid_default(name, CaptureError::NotAdmitted));
                }

                (Some(value), Some(display))
            }
            DefaultSource::Tokens(tokens) => {
                let value = decode_default(&codec, &name, &tokens)?;
                (Some(value), Some(tokens.join(" ")))
            }
            DefaultSource::Implicit => (codec.implicit_default(), None),
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Option '{name}' declared, default: {d:?}.",
                d = display.as_deref()
            );
        }

        let possible_values = codec.possible_values();
        let parameter = OptionParameter::new(
            name.clone(),
            codec.placeholder(),
            help,
            display,
            possible_values.clone(),
        );
        let binding = Binding {
            codec,
            accessor,
            default,
        };

        Ok((
            parameter,
            (OptionConfig::new(name, possible_values), Box::new(binding)),
        ))
    }
}

fn decode_default<C: Codec>(codec: &C, name: &str, tokens: &[String]) -> Result<C::Value, ConfigError> {
    let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
    let mut cursor = Cursor::new(&tokens);
    let value = codec
        .decode(&mut cursor)
        .map_err(|error| ConfigError::invalid_default(name, CaptureError::from(error)))?;

    if !cursor.is_exhausted() {
        return Err(ConfigError::InvalidDefault {
            name: name.to_string(),
            reason: "too many default tokens.".to_string(),
        });
    }

    if !codec.admits(&value) {
        return Err(ConfigError::invalid_default(name, CaptureError::NotAdmitted));
    }

    Ok(value)
}
