use std::env;

use crate::parser::base::*;
use crate::parser::error::ParseError;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The configured command line parser.
/// Built via `CommandLineParser::build` or `CommandLineParser::build_parser`.
///
/// The parser is reusable: each parse fills a fresh `R::default()`.
pub struct GeneralParser<R> {
    program: String,
    parser: Parser<R>,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl<R> std::fmt::Debug for GeneralParser<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("program", &self.program)
            .finish()
    }
}

/// The result of a successful parse.
///
/// Besides the filled options structure, this carries the program name and program arguments (everything after the program name), as they were given to the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<R> {
    program_name: String,
    program_args: Vec<String>,
    help_requested: bool,
    options: R,
}

impl<R> Parsed<R> {
    /// The program name (the first of the parsed arguments).
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// The program arguments, which exclude the program name.
    pub fn program_args(&self) -> &[String] {
        &self.program_args
    }

    /// Whether the help option was matched.
    /// When `true`, the parse stopped at the help option, so the options structure is incomplete.
    pub fn help_requested(&self) -> bool {
        self.help_requested
    }

    /// The parsed options.
    pub fn options(&self) -> &R {
        &self.options
    }

    /// Take the parsed options.
    pub fn into_options(self) -> R {
        self.options
    }
}

impl<R: Default> GeneralParser<R> {
    pub(crate) fn new(
        program: impl Into<String>,
        parser: Parser<R>,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            parser,
            printer,
            user_interface,
        }
    }

    /// Run the command line parser against the process style arguments, where `args[0]` is the program name.
    ///
    /// This is the pure core of the parser: nothing is printed, and the process is never exited.
    /// If the help option is matched, the result reports [`Parsed::help_requested`].
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{CommandLineParser, Parameter, Text};
    ///
    /// #[derive(Debug, Default)]
    /// struct Options {
    ///     name: String,
    /// }
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::option(Text, |o: &mut Options| &mut o.name, "name"))
    ///     .build();
    ///
    /// let parsed = parser.parse_args(&["/bin/program", "--name", "abc"]).unwrap();
    /// assert_eq!(parsed.program_name(), "/bin/program");
    /// assert_eq!(parsed.program_args(), &["--name".to_string(), "abc".to_string()]);
    /// assert_eq!(parsed.options().name, "abc");
    /// ```
    pub fn parse_args(&self, args: &[&str]) -> Result<Parsed<R>, ParseError> {
        match args.split_first() {
            Some((program_name, tokens)) => self.run(program_name, tokens),
            None => self.run(&self.program, &[]),
        }
    }

    /// Run the command line parser against the input tokens, which exclude the program name.
    ///
    /// Same as [`GeneralParser::parse_args`], using the configured program name.
    pub fn parse_tokens(&self, tokens: &[&str]) -> Result<Parsed<R>, ParseError> {
        self.run(&self.program, tokens)
    }

    fn run(&self, program_name: &str, tokens: &[&str]) -> Result<Parsed<R>, ParseError> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Parsing {n} token(s) for '{program_name}'.", n = tokens.len());
        }

        let (options, help_requested) = match self.parser.consume(tokens)? {
            Action::Complete(options) => (options, false),
            Action::PrintHelp(options) => (options, true),
        };

        Ok(Parsed {
            program_name: program_name.to_string(),
            program_args: tokens.iter().map(|t| t.to_string()).collect(),
            help_requested,
            options,
        })
    }

    /// Run the command line parser against the process style arguments, reporting to the user.
    ///
    /// If the help option is matched, the help message (using the program name from `args`) is displayed and this returns `Err(0)`.
    /// If the parser encounters an error, it is displayed and this returns `Err(1)`.
    pub fn invoke(&self, args: &[&str]) -> Result<Parsed<R>, i32> {
        match self.parse_args(args) {
            Ok(parsed) if parsed.help_requested => {
                self.printer
                    .print_help(&parsed.program_name, &*self.user_interface);
                Err(0)
            }
            Ok(parsed) => Ok(parsed),
            Err(error) => {
                self.user_interface.print_error(error);
                Err(1)
            }
        }
    }

    /// Run the command line parser against the process style arguments.
    ///
    /// If the help option is matched, the help message is displayed and the process exits with code `0` (via [`std::process::exit`]).
    /// Errors are returned to the caller.
    pub fn parse_or_help(&self, args: &[&str]) -> Result<Parsed<R>, ParseError> {
        let parsed = self.parse_args(args)?;

        if parsed.help_requested {
            self.printer
                .print_help(&parsed.program_name, &*self.user_interface);
            std::process::exit(0);
        }

        Ok(parsed)
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// If the help option is matched, the help message is displayed and the process exits with code `0`.
    /// If the parser encounters an error, it is displayed and the process exits with code `1` (via [`std::process::exit`]).
    pub fn parse(&self) -> Parsed<R> {
        let args: Vec<String> = env::args().collect();

        match self.invoke(
            args.iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(parsed) => parsed,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }

    /// The help message, as displayed for the help option.
    pub fn help_message(&self) -> String {
        self.printer.help_message(&self.program)
    }

    /// Display the help message.
    pub fn print_help(&self) {
        self.printer
            .print_help(&self.program, &*self.user_interface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::DEFAULT_SUGGESTION_THRESHOLD;
    use crate::parser::base::test::BlackHole;
    use crate::parser::util::{channel_interface, InMemoryInterface};
    use crate::test::assert_contains;
    use rstest::rstest;

    #[derive(Debug, Default, PartialEq)]
    struct Options {}

    fn flag_parser(user_interface: Box<dyn UserInterface>) -> GeneralParser<Options> {
        GeneralParser::new(
            "program",
            Parser::new(
                vec![(
                    OptionConfig::new("flag", None),
                    Box::new(BlackHole::required()),
                )],
                vec![("f".to_string(), "flag".to_string())],
                None,
                DEFAULT_SUGGESTION_THRESHOLD,
            )
            .unwrap(),
            Printer::empty(),
            user_interface,
        )
    }

    #[test]
    fn parse_tokens_empty() {
        // Setup
        let (sender, receiver) = channel_interface();
        let general_parser = GeneralParser::new(
            "program",
            Parser::<Options>::empty(),
            Printer::empty(),
            Box::new(sender),
        );

        // Execute
        let parsed = general_parser.parse_tokens(&[]).unwrap();
        drop(general_parser);

        // Verify
        assert_eq!(parsed.program_name(), "program");
        assert!(parsed.program_args().is_empty());
        assert!(!parsed.help_requested());
        let (message, error) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, None);
    }

    #[rstest]
    #[case(vec!["/bin/program", "--flag"], "/bin/program", vec!["--flag"])]
    #[case(vec!["other", "-f"], "other", vec!["-f"])]
    fn parse_args(
        #[case] args: Vec<&str>,
        #[case] program_name: &str,
        #[case] program_args: Vec<&str>,
    ) {
        // Setup
        let general_parser = flag_parser(Box::new(InMemoryInterface::default()));

        // Execute
        let parsed = general_parser.parse_args(args.as_slice()).unwrap();

        // Verify
        assert_eq!(parsed.program_name(), program_name);
        assert_eq!(parsed.program_args(), program_args);
        assert_eq!(parsed.into_options(), Options {});
    }

    #[test]
    fn parse_args_empty() {
        let general_parser = GeneralParser::new(
            "program",
            Parser::<Options>::empty(),
            Printer::empty(),
            Box::new(InMemoryInterface::default()),
        );

        let parsed = general_parser.parse_args(&[]).unwrap();

        assert_eq!(parsed.program_name(), "program");
        assert!(parsed.program_args().is_empty());
    }

    #[test]
    fn parse_args_reusable() {
        let general_parser = flag_parser(Box::new(InMemoryInterface::default()));

        general_parser.parse_args(&["program", "--flag"]).unwrap();
        general_parser.parse_args(&["program"]).unwrap_err();
        general_parser.parse_args(&["program", "-f"]).unwrap();
    }

    #[rstest]
    #[case(vec!["program", "--help"])]
    #[case(vec!["program", "--flag", "--help"])]
    fn parse_args_help(#[case] args: Vec<&str>) {
        let general_parser = flag_parser(Box::new(InMemoryInterface::default()));

        let parsed = general_parser.parse_args(args.as_slice()).unwrap();

        assert!(parsed.help_requested());
    }

    #[rstest]
    #[case(vec!["program", "--help"])]
    #[case(vec!["program", "--bogus", "--help"])]
    fn invoke_help(#[case] args: Vec<&str>) {
        // Setup
        let (sender, receiver) = channel_interface();
        let general_parser = flag_parser(Box::new(sender));

        // Execute
        let result = general_parser.invoke(args.as_slice());
        drop(general_parser);

        // Verify
        match args[1] {
            "--help" => {
                assert_eq!(result.unwrap_err(), 0);
                let message = receiver.consume_message();
                assert_contains!(message, "usage: program [options]");
                assert_contains!(message, "--help  list of all options");
            }
            _ => {
                // The unknown option fails before the help is reached.
                assert_eq!(result.unwrap_err(), 1);
                let error = receiver.consume_error();
                assert_contains!(error, "unknown option \"--bogus\"");
            }
        }
    }

    #[test]
    fn invoke_help_program_name() {
        // Setup
        let (sender, receiver) = channel_interface();
        let general_parser = flag_parser(Box::new(sender));

        // Execute
        let result = general_parser.invoke(&["/usr/bin/renamed", "-f", "--help"]);
        drop(general_parser);

        // Verify
        assert_eq!(result.unwrap_err(), 0);
        let message = receiver.consume_message();
        assert!(message.starts_with("usage: /usr/bin/renamed [options]"));
    }

    #[rstest]
    #[case(vec!["program"], "required option \"flag\" is missing")]
    #[case(vec!["program", "--flag", "x"], "disallowed free arg \"x\"")]
    #[case(vec!["program", "--flg"], "unknown option \"--flg\" you probably meant \"--flag\" option")]
    #[case(vec!["program", "-"], "option name is missing, \"-\" used instead")]
    fn invoke_error(#[case] args: Vec<&str>, #[case] expected: &str) {
        // Setup
        let (sender, receiver) = channel_interface();
        let general_parser = flag_parser(Box::new(sender));

        // Execute
        let error_code = general_parser.invoke(args.as_slice()).unwrap_err();
        drop(general_parser);

        // Verify
        assert_eq!(error_code, 1);
        assert_eq!(receiver.consume_error(), expected);
    }

    #[test]
    fn invoke() {
        // Setup
        let (sender, receiver) = channel_interface();
        let general_parser = flag_parser(Box::new(sender));

        // Execute
        let parsed = general_parser.invoke(&["program", "-f"]).unwrap();
        drop(general_parser);

        // Verify
        assert!(!parsed.help_requested());
        let (message, error) = receiver.consume();
        assert_eq!(message, None);
        assert_eq!(error, None);
    }

    #[test]
    fn parse_or_help_error() {
        let general_parser = flag_parser(Box::new(InMemoryInterface::default()));

        let error = general_parser.parse_or_help(&["program", "--nope"]).unwrap_err();

        assert_eq!(error.kind, crate::model::ErrorKind::UnknownOption);
    }

    #[test]
    fn help_message() {
        let general_parser = flag_parser(Box::new(InMemoryInterface::default()));

        assert_eq!(
            general_parser.help_message(),
            "usage: program [options]\n\noptions:\n --help  list of all options"
        );
    }
}
