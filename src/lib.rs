//! `declarg` is a declarative, typed command line option parser for Rust.
//!
//! The program author declares a fixed set of options, each bound to a field of a result structure.
//! `declarg` fills a fresh instance of that structure from the command line, and otherwise explains precisely what went wrong.
//! Specifically, `declarg` attempts to prioritize the following design concerns:
//! * *Typed options*:
//! The user should not call any `&str -> T` conversion functions directly.
//! Every option decodes its value(s) through a [`Codec`](./prelude/trait.Codec.html).
//! * *Precise diagnostics*:
//! Every failure reports what went wrong, on which token, and (for aliases) which option the token resolved to.
//! Enumerated options list their possible values, and misspelled options come with a "you probably meant" suggestion.
//! * *Fail fast configuration*:
//! Mistakes in the declarations (ex: a duplicate option, or a cyclic alias) are found once, when the parser is built.
//! * *Basic UX*:
//! Options are only ever given in the long form `--name`; short forms are explicit aliases `-n`.
//! We do not aim to support short option clustering, environment variables, or configuration files.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/colors.rs")]
//! ```
//!
//! ```console
//! $ colors --help
//! usage: colors [options]
//!
//! Count in colour.
//!
//! options:
//!  --color <string>        the colour to count in. Possible values: [black, green, red, blue]
//!  --count <unsigned int>  default: "1", how many to count
//!  --verbose               explain the count
//!  --help                  list of all options
//!  -c is an alias to color
//!  -n is an alias to count
//!  -v is an alias to verbose
//!  -h is an alias to help
//!
//! $ colors -c red -n 3
//! red: 3
//!
//! $ colors --colr red
//! unknown option "--colr" you probably meant "--color" option
//!
//! $ colors -c purple
//! invalid argument when parsing "-c" resolved as "--color". Possible values are: [black, green, red, blue]
//!
//! $ colors -n
//! argument missing when parsing "-n" resolved as "--count"
//!
//! $ colors
//! required option "color" is missing
//! ```
//!
//! # Builder Api
//! Configure `declarg` by starting with a [`CommandLineParser`] and `add`ing [`Parameter::option`]s.
//!
//! Each option takes a *codec*, an *accessor*, and a name:
//! * The codec decodes the option's value(s) from the tokens which follow the option on the Cli.
//! * The accessor projects the result structure onto the field the option fills (ex: `|o: &mut Options| &mut o.count`).
//! * The name is used on the Cli as `--name`.
//!
//! An option is *required* unless it has a default.
//! Defaults are declared via [`Parameter::default_value`] or [`Parameter::default_tokens`], or implied by the codec (ex: [`Tag`] defaults to `false`).
//!
//! ### Codecs
//! * [`Tag`]: a presence-only flag (ex: `--verbose`), taking no value.
//! * [`Boolean`]: an explicit boolean value (ex: `--enabled off`).
//! * [`Integer`]: any primitive integer.
//! * [`Text`]: a verbatim string.
//! * [`Scalar`]: any type that implements [`std::str::FromStr`] (ex: `PathBuf`, `f64`).
//! * [`Choice`]: restricts another codec to a declared set of values.
//! * [`Named`]: selects one of a list of values (typically, an `enum`) by its [`std::fmt::Display`] name.
//! * [`Pair`]: two values, one after the other.
//!
//! Any other type plugs in by implementing `Codec`:
//! ```no_run
#![doc = include_str!("../demos/point.rs")]
//! ```
//!
//! ### Aliases
//! An alias `-a` stands in for an option `--target` via [`CommandLineParser::alias`].
//! Aliases may refer to other aliases, as long as each resolves to exactly one option.
//!
//! ### Free arguments
//! By default, a token without a leading dash is an error.
//! Use [`CommandLineParser::free_args`] to instead collect these (in order) into a `Vec<String>` field.
//!
//! ### Subprograms
//! Programs made of subprograms (ex: `git status`) select one via [`select_subprogram`], and then parse the remaining arguments as usual.
//! ```no_run
#![doc = include_str!("../demos/subprogram.rs")]
//! ```
pub use declarg_builder::*;
