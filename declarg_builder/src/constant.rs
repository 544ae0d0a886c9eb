pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_MESSAGE: &str = "list of all options";

// Misspellings scoring at or above this distance are not worth suggesting.
pub(crate) const DEFAULT_SUGGESTION_THRESHOLD: f64 = 5.0;
