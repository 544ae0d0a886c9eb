use declarg::{select_subprogram, subprogram_usage, CommandLineParser, Parameter, Tag, Text};

const SUBPROGRAMS: [&str; 2] = ["status", "commit"];

#[derive(Debug, Default)]
struct Status {
    short: bool,
}

#[derive(Debug, Default)]
struct Commit {
    message: String,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

    let selection = match select_subprogram(&args, &SUBPROGRAMS) {
        Ok(selection) => selection,
        Err(error) => {
            eprintln!("{error}");
            print!("{}", subprogram_usage("subprogram", &SUBPROGRAMS));
            std::process::exit(1);
        }
    };

    match selection.index {
        0 => {
            let parser = CommandLineParser::new("status")
                .add(Parameter::option(Tag, |o: &mut Status| &mut o.short, "short"))
                .alias("s", "short")
                .build();

            match parser.invoke(selection.args) {
                Ok(parsed) => println!("status (short: {})", parsed.options().short),
                Err(code) => std::process::exit(code),
            }
        }
        _ => {
            let parser = CommandLineParser::new("commit")
                .add(Parameter::option(Text, |o: &mut Commit| &mut o.message, "message"))
                .alias("m", "message")
                .build();

            match parser.invoke(selection.args) {
                Ok(parsed) => println!("commit: {}", parsed.options().message),
                Err(code) => std::process::exit(code),
            }
        }
    }
}
