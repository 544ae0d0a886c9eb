//! Builder module for `declarg`.
//! See [documentation root](https://docs.rs/declarg/latest/declarg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;
mod subprogram;

pub use api::*;
pub use matcher::{best_match, damerau_levenshtein_distance, levenshtein_distance, BestMatch};
pub use matcher::{AliasError, AliasTable};
pub use model::*;
pub use parser::{ConfigError, GeneralParser, ParseError, Parsed, Suggestion, SuggestionKind};
pub use subprogram::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
