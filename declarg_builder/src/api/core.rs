use crate::api::{Codec, Parameter};
use crate::constant::DEFAULT_SUGGESTION_THRESHOLD;
use crate::parser::{
    ConfigError, ConsoleInterface, FreeArgs, GeneralParser, OptionCapture, OptionParameter, Parser,
    Printer, UserInterface,
};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The command line parser builder, for the result structure `R`.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::CommandLineParser;
///
/// #[derive(Debug, Default)]
/// struct Options {}
///
/// let parser = CommandLineParser::<Options>::new("program")
///     // Configure with CommandLineParser::add and CommandLineParser::alias.
///     .build();
/// parser.parse_tokens(&[]).unwrap();
/// ```
pub struct CommandLineParser<R> {
    program: String,
    about: Option<String>,
    option_parameters: Vec<OptionParameter>,
    option_captures: Vec<OptionCapture<R>>,
    aliases: Vec<(String, String)>,
    free_args: Option<FreeArgs<R>>,
    suggestion_threshold: f64,
    deferred_error: Option<ConfigError>,
}

impl<R: Default + 'static> CommandLineParser<R> {
    /// Create a command line parser.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::CommandLineParser;
    ///
    /// #[derive(Debug, Default)]
    /// struct Options {}
    ///
    /// let parser = CommandLineParser::<Options>::new("program")
    ///     .build();
    ///
    /// parser.parse_tokens(vec![].as_slice()).unwrap();
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            option_parameters: Vec::default(),
            option_captures: Vec::default(),
            aliases: Vec::default(),
            free_args: None,
            suggestion_threshold: DEFAULT_SUGGESTION_THRESHOLD,
            deferred_error: None,
        }
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final help message will apply.
    ///
    /// An about message documents the command line parser in full sentence/paragraph format.
    /// We recommend allowing `declarg` to format this field (ex: it is not recommended to use line breaks `'\n'`).
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::CommandLineParser;
    ///
    /// #[derive(Debug, Default)]
    /// struct Options {}
    ///
    /// let parser = CommandLineParser::<Options>::new("program")
    ///     .about("--this will get discarded--")
    ///     .about("My program that does awesome stuff.  Check it out!")
    ///     .build();
    ///
    /// assert!(parser.help_message().contains("My program that does awesome stuff."));
    /// ```
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Add an option to the command line parser.
    ///
    /// Options are listed in the help message in the order they are added.
    /// The order does not affect the command parser semantics.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Integer, Parameter, Text};
    ///
    /// #[derive(Debug, Default)]
    /// struct Options {
    ///     a: u32,
    ///     b: String,
    /// }
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::option(Integer::new(), |o: &mut Options| &mut o.a, "a"))
    ///     .add(Parameter::option(Text, |o: &mut Options| &mut o.b, "b").default_value("x".to_string()))
    ///     .build();
    ///
    /// let options = parser.parse_tokens(&["--a", "1"]).unwrap().into_options();
    ///
    /// assert_eq!(options.a, 1);
    /// assert_eq!(options.b, "x");
    /// ```
    pub fn add<C>(mut self, parameter: Parameter<R, C>) -> Self
    where
        C: Codec + 'static,
        C::Value: Clone + 'static,
    {
        match parameter.into_option() {
            Ok((option_parameter, option_capture)) => {
                self.option_parameters.push(option_parameter);
                self.option_captures.push(option_capture);
            }
            Err(error) => {
                // Only the first configuration error is reported.
                if self.deferred_error.is_none() {
                    self.deferred_error.replace(error);
                }
            }
        }

        self
    }

    /// Add an alias, so that `-alias` may be used in place of `--target`.
    /// The `target` may itself be an alias; aliases are validated when the parser is built.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Parameter, Tag};
    ///
    /// #[derive(Debug, Default)]
    /// struct Options {
    ///     verbose: bool,
    /// }
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::option(Tag, |o: &mut Options| &mut o.verbose, "verbose"))
    ///     .alias("v", "verbose")
    ///     .alias("vv", "v")
    ///     .build();
    ///
    /// assert!(parser.parse_tokens(&["-vv"]).unwrap().options().verbose);
    /// ```
    pub fn alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), target.into()));
        self
    }

    /// Allow free arguments (tokens without a leading dash), collecting them in order into the slot projected by `accessor`.
    /// Without this, a free argument is a parse error.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::CommandLineParser;
    ///
    /// #[derive(Debug, Default)]
    /// struct Options {
    ///     files: Vec<String>,
    /// }
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .free_args(|o: &mut Options| &mut o.files)
    ///     .build();
    ///
    /// let options = parser.parse_tokens(&["a.txt", "b.txt"]).unwrap().into_options();
    /// assert_eq!(options.files, vec!["a.txt", "b.txt"]);
    /// ```
    pub fn free_args(mut self, accessor: FreeArgs<R>) -> Self {
        self.free_args.replace(accessor);
        self
    }

    /// Set the edit distance under which an unknown option is given a "you probably meant" suggestion.
    /// Defaults to `5`.
    pub fn suggestion_threshold(mut self, threshold: f64) -> Self {
        self.suggestion_threshold = threshold;
        self
    }

    pub(crate) fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<R>, ConfigError> {
        if let Some(error) = self.deferred_error {
            return Err(error);
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Building '{p}' with {n} option(s) and {a} alias(es).",
                p = self.program,
                n = self.option_captures.len(),
                a = self.aliases.len()
            );
        }

        let parser = Parser::new(
            self.option_captures,
            self.aliases.clone(),
            self.free_args,
            self.suggestion_threshold,
        )?;
        let printer = Printer::terminal(
            self.about,
            self.free_args.is_some(),
            self.option_parameters,
            self.aliases,
        );

        Ok(GeneralParser::new(
            self.program,
            parser,
            printer,
            user_interface,
        ))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name, or a cyclic alias).
    pub fn build_parser(self) -> Result<GeneralParser<R>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name, or a cyclic alias).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<R> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}
