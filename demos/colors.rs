use declarg::{CommandLineParser, Integer, Named, Parameter, Tag};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Color {
    Black,
    Green,
    Red,
    Blue,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::Green => write!(f, "green"),
            Color::Red => write!(f, "red"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

#[derive(Debug)]
struct Options {
    color: Color,
    count: usize,
    verbose: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            color: Color::Black,
            count: 0,
            verbose: false,
        }
    }
}

fn main() {
    let parser = CommandLineParser::new("colors")
        .about("Count in colour.")
        .add(
            Parameter::option(
                Named::new([Color::Black, Color::Green, Color::Red, Color::Blue]),
                |o: &mut Options| &mut o.color,
                "color",
            )
            .help("the colour to count in"),
        )
        .add(
            Parameter::option(Integer::new(), |o: &mut Options| &mut o.count, "count")
                .default_value(1)
                .help("how many to count"),
        )
        .add(
            Parameter::option(Tag, |o: &mut Options| &mut o.verbose, "verbose")
                .help("explain the count"),
        )
        .alias("c", "color")
        .alias("n", "count")
        .alias("v", "verbose")
        .alias("h", "help")
        .build();

    let options = parser.parse().into_options();

    if options.verbose {
        println!("Counting {n} in {c}.", n = options.count, c = options.color);
    }

    println!("{c}: {n}", c = options.color, n = options.count);
}
