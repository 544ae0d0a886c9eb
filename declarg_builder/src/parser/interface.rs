use crate::parser::error::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Leave a little room at the right edge of the terminal.
const TARGET_FRACTION: f64 = 0.95;

// Room for three average (5 letter) words and the spaces between them.
pub(crate) const MINIMUM_DESCRIPTION_WIDTH: usize = 17;

/// Lays out the help lines: an indented grammar column, a gap, and a (possibly wrapped) description column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnRenderer {
    indent: usize,
    grammar_width: usize,
    gap: usize,
    // The longest a description line may be, or `None` to never wrap.
    description_width: Option<usize>,
}

impl ColumnRenderer {
    /// A renderer which keeps each description on a single line.
    pub(crate) fn unbounded(indent: usize, grammar_width: usize, gap: usize) -> Self {
        Self {
            indent,
            grammar_width,
            gap,
            description_width: None,
        }
    }

    /// A renderer which wraps the descriptions to fit the terminal.
    ///
    /// Descriptions get all the room they ask for (`widest`) if that fits comfortably.
    /// Otherwise they take whatever the terminal has left, but never less than [`MINIMUM_DESCRIPTION_WIDTH`].
    pub(crate) fn fitted(
        indent: usize,
        grammar_width: usize,
        gap: usize,
        widest: usize,
        terminal_width: usize,
    ) -> Self {
        let reserved = indent + grammar_width + gap;
        let target = (terminal_width as f64 * TARGET_FRACTION) as usize;
        let preferred = std::cmp::max(widest, MINIMUM_DESCRIPTION_WIDTH);

        let description_width = if reserved + preferred <= target {
            preferred
        } else if reserved < terminal_width {
            std::cmp::max(terminal_width - reserved, MINIMUM_DESCRIPTION_WIDTH)
        } else {
            MINIMUM_DESCRIPTION_WIDTH
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Help columns reserve {reserved} of the terminal width {terminal_width}, wrapping descriptions at {description_width}."
            );
        }

        Self {
            indent,
            grammar_width,
            gap,
            description_width: Some(description_width),
        }
    }

    pub(crate) fn render(&self, grammar: &str, description: &str) -> Vec<String> {
        let lines = match self.description_width {
            Some(width) => wrap(description, width),
            None => {
                let joined = description.split_whitespace().collect::<Vec<&str>>().join(" ");
                if joined.is_empty() {
                    Vec::default()
                } else {
                    vec![joined]
                }
            }
        };

        if lines.is_empty() {
            return vec![format!("{:i$}{grammar}", "", i = self.indent)];
        }

        let reserved = self.indent + self.grammar_width + self.gap;
        lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    format!(
                        "{:i$}{grammar:g$}{:p$}{line}",
                        "",
                        "",
                        i = self.indent,
                        g = self.grammar_width,
                        p = self.gap,
                    )
                } else {
                    format!("{:r$}{line}", "", r = reserved)
                }
            })
            .collect()
    }
}

// Greedily fill lines of at most `width` characters, word by word.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut line = String::default();
    let mut length = 0;

    for word in text.split_whitespace() {
        let word_length = word.chars().count();

        if length > 0 && length + 1 + word_length <= width {
            line.push(' ');
            line.push_str(word);
            length += 1 + word_length;
            continue;
        }

        if length > 0 {
            lines.push(std::mem::take(&mut line));
        }

        let mut pieces = hyphenate(word, width);
        // The last piece may still be joined by the words that follow.
        line = pieces.pop().unwrap_or_default();
        length = line.chars().count();
        lines.extend(pieces);
    }

    if length > 0 {
        lines.push(line);
    }

    lines
}

// Split a word that is too long for a line into hyphenated pieces.
fn hyphenate(word: &str, width: usize) -> Vec<String> {
    let mut rest: Vec<char> = word.chars().collect();
    let mut pieces = Vec::default();

    while width >= 2 && rest.len() > width {
        let tail = rest.split_off(width - 1);
        let mut piece: String = rest.into_iter().collect();
        piece.push('-');
        pieces.push(piece);
        rest = tail;
    }

    pieces.push(rest.into_iter().collect());
    pieces
}

/// Where the convenience layer writes its messages.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn render_wrapped() {
        let renderer = ColumnRenderer {
            indent: 0,
            grammar_width: 5,
            gap: 4,
            description_width: Some(22),
        };

        assert_eq!(renderer.render("abc", "something"), vec!["abc      something"]);
        assert_eq!(renderer.render("abc", "  something  "), vec!["abc      something"]);
        assert_eq!(
            renderer.render("abc12", "something pieces full"),
            vec!["abc12    something pieces full"]
        );
        assert_eq!(
            renderer.render("abc", "something pieces full more stuff"),
            vec!["abc      something pieces full", "         more stuff"]
        );
        assert_eq!(
            renderer.render("abc", "something pieces fullest more stuff extra     "),
            vec![
                "abc      something pieces",
                "         fullest more stuff",
                "         extra",
            ]
        );
    }

    #[test]
    fn render_indent() {
        let renderer = ColumnRenderer {
            indent: 1,
            grammar_width: 3,
            gap: 2,
            description_width: Some(7),
        };

        assert_eq!(
            renderer.render("abc", "one two three"),
            vec![" abc  one two", "      three"]
        );
    }

    #[rstest]
    #[case(Some(10))]
    #[case(None)]
    fn render_empty_description(#[case] description_width: Option<usize>) {
        let renderer = ColumnRenderer {
            indent: 1,
            grammar_width: 10,
            gap: 2,
            description_width,
        };

        assert_eq!(renderer.render("abc", ""), vec![" abc"]);
        assert_eq!(renderer.render("abc", "   "), vec![" abc"]);
    }

    #[test]
    fn render_unbounded() {
        let renderer = ColumnRenderer::unbounded(1, 5, 2);
        let description = "word ".repeat(100);

        let lines = renderer.render("abc", &description);

        assert_eq!(lines, vec![format!(" abc    {}", description.trim_end())]);
    }

    #[rstest]
    #[case(MINIMUM_DESCRIPTION_WIDTH, 100, MINIMUM_DESCRIPTION_WIDTH)]
    #[case(5, 100, MINIMUM_DESCRIPTION_WIDTH)]
    #[case(40, 100, 40)]
    #[case(80, 100, 84)]
    #[case(10, 12, MINIMUM_DESCRIPTION_WIDTH)]
    fn fitted(#[case] widest: usize, #[case] terminal_width: usize, #[case] expected: usize) {
        let renderer = ColumnRenderer::fitted(1, 13, 2, widest, terminal_width);

        assert_eq!(renderer.description_width, Some(expected));
    }

    #[rstest]
    #[case("abcdefghij", 4, vec!["abc-", "def-", "ghij"])]
    #[case("abcd", 4, vec!["abcd"])]
    #[case("abcde", 4, vec!["abc-", "de"])]
    #[case("a b c", 4, vec!["a b", "c"])]
    #[case("ab abcdefg h", 4, vec!["ab", "abc-", "defg", "h"])]
    #[case("ééééé", 4, vec!["ééé-", "éé"])]
    fn wrap_hyphenate(#[case] text: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(wrap(text, width), expected);
    }

    #[test]
    fn wrap_empty() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   ", 10).is_empty());
    }
}
