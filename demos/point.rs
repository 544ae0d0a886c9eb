use declarg::{prelude::*, CodecError, CommandLineParser, Cursor, Integer, Parameter};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

// Takes two tokens: `--origin 1 2`.
struct PointCodec;

impl Codec for PointCodec {
    type Value = Point;

    fn placeholder(&self) -> String {
        "<x> <y>".to_string()
    }

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Point, CodecError> {
        let x = Integer::<i32>::new().decode(cursor)?;
        let y = Integer::<i32>::new().decode(cursor)?;
        Ok(Point { x, y })
    }
}

#[derive(Debug, Default)]
struct Options {
    origin: Point,
    target: Point,
    points: Vec<String>,
}

fn main() {
    let parser = CommandLineParser::new("point")
        .add(
            Parameter::option(PointCodec, |o: &mut Options| &mut o.origin, "origin")
                .default_tokens(["0", "0"])
                .help("where to start"),
        )
        .add(
            Parameter::option(PointCodec, |o: &mut Options| &mut o.target, "target")
                .help("where to go"),
        )
        .alias("o", "origin")
        .alias("t", "target")
        .free_args(|o: &mut Options| &mut o.points)
        .build();

    let options = parser.parse().into_options();
    let dx = options.target.x - options.origin.x;
    let dy = options.target.y - options.origin.y;
    println!("({o}) -> ({t}): {dx} {dy}", o = options.origin, t = options.target);

    for point in &options.points {
        println!("extra: {point}");
    }
}
