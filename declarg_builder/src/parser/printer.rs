use terminal_size::{terminal_size, Width};

use crate::constant::*;
use crate::parser::interface::UserInterface;
use crate::parser::ColumnRenderer;

/// The help renderer's view of a declared option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionParameter {
    name: String,
    placeholder: String,
    help: Option<String>,
    default: Option<String>,
    possible_values: Option<Vec<String>>,
}

impl OptionParameter {
    pub(crate) fn new(
        name: String,
        placeholder: String,
        help: Option<String>,
        default: Option<String>,
        possible_values: Option<Vec<String>>,
    ) -> Self {
        Self {
            name,
            placeholder,
            help,
            default,
            possible_values,
        }
    }

    fn grammar(&self) -> String {
        if self.placeholder.is_empty() {
            format!("--{n}", n = self.name)
        } else {
            format!("--{n} {p}", n = self.name, p = self.placeholder)
        }
    }

    fn description(&self) -> String {
        let mut description = String::default();

        if let Some(default) = &self.default {
            description.push_str(&format!("default: \"{default}\", "));
        }

        if let Some(help) = &self.help {
            description.push_str(help);
        }

        if let Some(values) = &self.possible_values {
            description.push_str(&format!(". Possible values: [{}]", values.join(", ")));
        }

        description
    }
}

pub(crate) struct Printer {
    about: Option<String>,
    free_args: bool,
    options: Vec<OptionParameter>,
    aliases: Vec<(String, String)>,
    terminal_width: Option<usize>,
}

const GAP_WIDTH: usize = 2;
const MAIN_INDENT: usize = 1;

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(None, false, Vec::default(), Vec::default(), None)
    }

    pub(crate) fn terminal(
        about: Option<String>,
        free_args: bool,
        options: Vec<OptionParameter>,
        aliases: Vec<(String, String)>,
    ) -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(about, free_args, options, aliases, terminal_width)
    }

    pub(crate) fn new(
        about: Option<String>,
        free_args: bool,
        mut options: Vec<OptionParameter>,
        aliases: Vec<(String, String)>,
        terminal_width: Option<usize>,
    ) -> Self {
        // Declaration order, with the help option last.
        options.push(OptionParameter::new(
            HELP_NAME.to_string(),
            "".to_string(),
            Some(HELP_MESSAGE.to_string()),
            None,
            None,
        ));

        Self {
            about,
            free_args,
            options,
            aliases,
            terminal_width,
        }
    }

    pub(crate) fn help_message(&self, program: &str) -> String {
        let grammars: Vec<String> = self.options.iter().map(|o| o.grammar()).collect();
        let descriptions: Vec<String> = self.options.iter().map(|o| o.description()).collect();
        let grammar_width = grammars.iter().map(|g| g.chars().count()).max().unwrap_or(0);
        let widest = descriptions.iter().map(|d| d.chars().count()).max().unwrap_or(0);
        let column_renderer = match self.terminal_width {
            Some(terminal_width) => ColumnRenderer::fitted(
                MAIN_INDENT,
                grammar_width,
                GAP_WIDTH,
                widest,
                terminal_width,
            ),
            None => ColumnRenderer::unbounded(MAIN_INDENT, grammar_width, GAP_WIDTH),
        };

        let summary = if self.free_args {
            format!("usage: {program} [options] [args ...]")
        } else {
            format!("usage: {program} [options]")
        };
        let mut lines = vec![summary, "".to_string()];

        if let Some(about) = &self.about {
            lines.push(about.clone());
            lines.push("".to_string());
        }

        lines.push("options:".to_string());

        for (grammar, description) in grammars.iter().zip(descriptions.iter()) {
            lines.extend(column_renderer.render(grammar, description));
        }

        for (alias, target) in &self.aliases {
            lines.push(format!(" -{alias} is an alias to {target}"));
        }

        lines.join("\n")
    }

    pub(crate) fn print_help(&self, program: &str, user_interface: &(impl UserInterface + ?Sized)) {
        user_interface.print(self.help_message(program));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::util::InMemoryInterface;

    fn basic(name: &str, placeholder: &str, help: Option<&str>) -> OptionParameter {
        OptionParameter::new(
            name.to_string(),
            placeholder.to_string(),
            help.map(|h| h.to_string()),
            None,
            None,
        )
    }

    #[test]
    fn print_help_empty() {
        // Setup
        let printer = Printer::empty();
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help("program", &interface);

        // Verify
        let message = interface.consume_message();
        assert_eq!(
            message,
            r#"usage: program [options]

options:
 --help  list of all options"#
        );
    }

    #[test]
    fn print_help_option() {
        // Setup
        let printer = Printer::new(
            None,
            false,
            vec![basic("myint2", "<int>", Some("the second integer"))],
            Vec::default(),
            None,
        );
        let interface = InMemoryInterface::default();

        // Execute
        printer.print_help("program", &interface);

        // Verify
        let message = interface.consume_message();
        assert_eq!(
            message,
            r#"usage: program [options]

options:
 --myint2 <int>  the second integer
 --help          list of all options"#
        );
    }

    #[test]
    fn print_help_default_and_possible_values() {
        // Setup
        let printer = Printer::new(
            None,
            false,
            vec![
                OptionParameter::new(
                    "abc".to_string(),
                    "<int>".to_string(),
                    Some("some number".to_string()),
                    Some("1".to_string()),
                    Some(vec!["1".to_string(), "2".to_string(), "3".to_string()]),
                ),
                OptionParameter::new(
                    "color".to_string(),
                    "<string>".to_string(),
                    Some("the color".to_string()),
                    None,
                    Some(vec!["red".to_string(), "blue".to_string()]),
                ),
                basic("verbose", "", None),
            ],
            Vec::default(),
            None,
        );

        // Execute
        let message = printer.help_message("program");

        // Verify
        assert_eq!(
            message,
            r#"usage: program [options]

options:
 --abc <int>       default: "1", some number. Possible values: [1, 2, 3]
 --color <string>  the color. Possible values: [red, blue]
 --verbose
 --help            list of all options"#
        );
    }

    #[test]
    fn print_help_aliases() {
        // Setup
        let printer = Printer::new(
            None,
            false,
            vec![basic("color", "<string>", Some("the color"))],
            vec![
                ("c".to_string(), "color".to_string()),
                ("h".to_string(), "help".to_string()),
            ],
            None,
        );

        // Execute
        let message = printer.help_message("program");

        // Verify
        assert_eq!(
            message,
            r#"usage: program [options]

options:
 --color <string>  the color
 --help            list of all options
 -c is an alias to color
 -h is an alias to help"#
        );
    }

    #[test]
    fn print_help_about_free_args() {
        // Setup
        let printer = Printer::new(
            Some("My program that does awesome stuff.".to_string()),
            true,
            Vec::default(),
            Vec::default(),
            None,
        );

        // Execute
        let message = printer.help_message("program");

        // Verify
        assert_eq!(
            message,
            r#"usage: program [options] [args ...]

My program that does awesome stuff.

options:
 --help  list of all options"#
        );
    }

    #[test]
    fn print_help_wrapped() {
        // Setup
        let printer = Printer::new(
            None,
            false,
            vec![basic(
                "flag",
                "",
                Some("a rather long description that must wrap onto a number of lines"),
            )],
            Vec::default(),
            Some(40),
        );

        // Execute
        let message = printer.help_message("program");

        // Verify
        for line in message.lines() {
            assert!(line.len() <= 40, "'{line}' is too long");
        }
        assert_eq!(
            message,
            r#"usage: program [options]

options:
 --flag  a rather long description that
         must wrap onto a number of
         lines
 --help  list of all options"#
        );
    }
}
