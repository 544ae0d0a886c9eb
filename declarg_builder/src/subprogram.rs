use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A failure to select the subprogram (ex: `status` in `git status`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubprogramError {
    /// No subprogram name was given.
    #[error("subprogram is missing.")]
    Missing,
    /// The given name is not one of the subprograms.
    #[error("unknown subprogram '{0}'.")]
    Unknown(String),
    /// The given name is listed more than once among the subprograms.
    #[error("subprogram '{0}' is ambiguous.")]
    Ambiguous(String),
}

/// The selected subprogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    /// The index of the selected name.
    pub index: usize,
    /// The arguments starting at the subprogram name, as if the subprogram were the program.
    pub args: &'a [&'a str],
}

/// Select the subprogram named by `args[1]` (`args[0]` being the program name) out of `names`.
///
/// The returned [`Selection::args`] may be passed to [`GeneralParser::parse_args`](./struct.GeneralParser.html#method.parse_args) of the subprogram.
/// On failure, display [`subprogram_usage`] to the user.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::{select_subprogram, SubprogramError};
///
/// let names = ["status", "branch"];
///
/// let selection = select_subprogram(&["git", "branch", "-a"], &names).unwrap();
/// assert_eq!(selection.index, 1);
/// assert_eq!(selection.args, &["branch", "-a"]);
///
/// let error = select_subprogram(&["git", "push"], &names).unwrap_err();
/// assert_eq!(error, SubprogramError::Unknown("push".to_string()));
/// ```
pub fn select_subprogram<'a>(
    args: &'a [&'a str],
    names: &[&str],
) -> Result<Selection<'a>, SubprogramError> {
    let name = match args.get(1) {
        Some(name) => *name,
        None => return Err(SubprogramError::Missing),
    };

    let index = match names.iter().position(|n| *n == name) {
        Some(index) => index,
        None => return Err(SubprogramError::Unknown(name.to_string())),
    };

    if names[index + 1..].contains(&name) {
        return Err(SubprogramError::Ambiguous(name.to_string()));
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Selected subprogram '{name}' (index {index}).");
    }

    Ok(Selection {
        index,
        args: &args[1..],
    })
}

/// The usage message for a program made of subprograms.
///
/// ### Example
/// ```
/// # use declarg_builder as declarg;
/// use declarg::subprogram_usage;
///
/// assert_eq!(
///     subprogram_usage("git", &["status", "branch"]),
///     "Usage: git <subprogram>\nvalid subprograms list:\nstatus\nbranch\n"
/// );
/// ```
pub fn subprogram_usage(program: &str, names: &[&str]) -> String {
    let mut usage = format!("Usage: {program} <subprogram>\nvalid subprograms list:\n");

    for name in names {
        usage.push_str(name);
        usage.push('\n');
    }

    usage
}
