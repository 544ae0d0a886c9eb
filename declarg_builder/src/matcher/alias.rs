use std::collections::HashSet;
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A problem with the alias declarations, found when validating them against the declared options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AliasError {
    /// An alias with an empty name.
    #[error("alias to '{target}' has an empty name.")]
    EmptyAlias {
        /// The target of the offending alias.
        target: String,
    },
    /// An alias with an empty target.
    #[error("alias '{alias}' has an empty target.")]
    EmptyTarget {
        /// The offending alias.
        alias: String,
    },
    /// An alias which targets itself.
    #[error("alias '{alias}' cannot be an alias to itself.")]
    SelfAlias {
        /// The offending alias.
        alias: String,
    },
    /// An alias with the same name as a declared option.
    #[error("alias '{alias}' shadows the option of the same name.")]
    ShadowsOption {
        /// The offending alias.
        alias: String,
    },
    /// An alias that does not (transitively) resolve to a declared option.
    #[error("alias '{alias}' does not resolve to any option.")]
    Unresolvable {
        /// The offending alias.
        alias: String,
    },
    /// An alias declared more than once, resolving to different options.
    #[error("alias '{alias}' is ambiguous: it resolves to both '{first}' and '{second}'.")]
    Ambiguous {
        /// The offending alias.
        alias: String,
        /// The option resolved by one declaration.
        first: String,
        /// The option resolved by another declaration.
        second: String,
    },
}

/// The mapping from alternate (short) names onto canonical option names.
///
/// An alias may target another alias, as long as the chain ends at a declared option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<(String, String)>,
    options: HashSet<String>,
}

impl AliasTable {
    /// Build and validate the alias table against the declared option names.
    ///
    /// ### Example
    /// ```
    /// # use declarg_builder as declarg;
    /// use declarg::{AliasError, AliasTable};
    ///
    /// let table = AliasTable::new(
    ///     ["color"],
    ///     vec![("c".to_string(), "colour".to_string()), ("colour".to_string(), "color".to_string())],
    /// )
    /// .unwrap();
    /// assert_eq!(table.resolve("c"), Some("color"));
    ///
    /// let error = AliasTable::new(["color"], vec![("c".to_string(), "c".to_string())]).unwrap_err();
    /// assert_eq!(error, AliasError::SelfAlias { alias: "c".to_string() });
    /// ```
    pub fn new<I, S>(options: I, entries: Vec<(String, String)>) -> Result<Self, AliasError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = Self {
            entries,
            options: options.into_iter().map(Into::into).collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// The alias declarations, in their declaration order.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// The alias names, in their declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(alias, _)| alias.as_str())
    }

    /// Resolve `alias` to the canonical option name it (transitively) refers to.
    ///
    /// Returns `None` if `alias` is not declared.
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        let (_, target) = self.entries.iter().find(|(a, _)| a == alias)?;

        if self.options.contains(target) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Alias '{alias}' resolved to option '{target}'.");
            }

            Some(target.as_str())
        } else {
            // Validation guarantees the chain is acyclic and ends at an option.
            self.resolve(target)
        }
    }

    fn validate(&self) -> Result<(), AliasError> {
        for (alias, target) in &self.entries {
            if alias.is_empty() {
                return Err(AliasError::EmptyAlias {
                    target: target.clone(),
                });
            }

            if target.is_empty() {
                return Err(AliasError::EmptyTarget {
                    alias: alias.clone(),
                });
            }

            if alias == target {
                return Err(AliasError::SelfAlias {
                    alias: alias.clone(),
                });
            }

            if self.options.contains(alias) {
                return Err(AliasError::ShadowsOption {
                    alias: alias.clone(),
                });
            }
        }

        let mut resolutions: Vec<(&str, &str)> = Vec::with_capacity(self.entries.len());

        for (alias, target) in &self.entries {
            let resolved = self
                .follow(target)
                .ok_or_else(|| AliasError::Unresolvable {
                    alias: alias.clone(),
                })?;
            resolutions.push((alias.as_str(), resolved));
        }

        // Stable sort, so that equally named aliases stay in declaration order.
        resolutions.sort_by(|a, b| a.0.cmp(b.0));

        for pair in resolutions.windows(2) {
            let (alias, first) = pair[0];
            let (other, second) = pair[1];

            if alias == other && first != second {
                return Err(AliasError::Ambiguous {
                    alias: alias.to_string(),
                    first: first.to_string(),
                    second: second.to_string(),
                });
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Validated {} alias(es).", self.entries.len());
        }

        Ok(())
    }

    // Follow a target through alias hops until reaching an option.
    // Returns None for dangling or cyclic chains.
    fn follow<'t>(&'t self, target: &'t str) -> Option<&'t str> {
        let mut visited: HashSet<&str> = HashSet::default();
        let mut current = target;

        loop {
            if self.options.contains(current) {
                return Some(current);
            }

            if !visited.insert(current) {
                return None;
            }

            // The first declaration is the one used at parse time.
            let (_, next) = self.entries.iter().find(|(a, _)| a == current)?;
            current = next.as_str();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entries(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn empty_table() {
        let table = AliasTable::new(["abc"], Vec::default()).unwrap();
        assert_eq!(table.resolve("abc"), None);
        assert_eq!(table.resolve("a"), None);
        assert_eq!(table.names().count(), 0);
    }

    #[test]
    fn resolve_direct() {
        let table = AliasTable::new(["abc", "color"], entries(&[("c", "color"), ("hh", "abc")]))
            .unwrap();
        assert_eq!(table.resolve("c"), Some("color"));
        assert_eq!(table.resolve("hh"), Some("abc"));
        assert_eq!(table.resolve("x"), None);
        // Option names are not aliases.
        assert_eq!(table.resolve("color"), None);
        assert_eq!(table.names().collect::<Vec<&str>>(), vec!["c", "hh"]);
    }

    #[rstest]
    #[case(entries(&[("a", "b"), ("b", "c")]))]
    #[case(entries(&[("b", "c"), ("a", "b")]))]
    #[case(entries(&[("a", "x"), ("x", "b"), ("b", "c")]))]
    fn resolve_transitive(#[case] aliases: Vec<(String, String)>) {
        let table = AliasTable::new(["c"], aliases).unwrap();
        assert_eq!(table.resolve("a"), Some("c"));
        assert_eq!(table.resolve("b"), Some("c"));
    }

    #[test]
    fn duplicate_alias_same_target() {
        let table = AliasTable::new(
            ["color"],
            entries(&[("c", "color"), ("k", "color"), ("c", "k")]),
        )
        .unwrap();
        assert_eq!(table.resolve("c"), Some("color"));
    }

    #[rstest]
    #[case(entries(&[("", "abc")]), AliasError::EmptyAlias { target: "abc".to_string() })]
    #[case(entries(&[("a", "")]), AliasError::EmptyTarget { alias: "a".to_string() })]
    #[case(entries(&[("a", "a")]), AliasError::SelfAlias { alias: "a".to_string() })]
    #[case(entries(&[("abc", "color")]), AliasError::ShadowsOption { alias: "abc".to_string() })]
    #[case(entries(&[("a", "nothing")]), AliasError::Unresolvable { alias: "a".to_string() })]
    #[case(entries(&[("a", "b"), ("b", "a")]), AliasError::Unresolvable { alias: "a".to_string() })]
    #[case(entries(&[("a", "b"), ("b", "x"), ("x", "b")]), AliasError::Unresolvable { alias: "a".to_string() })]
    #[case(
        entries(&[("c", "abc"), ("c", "color")]),
        AliasError::Ambiguous { alias: "c".to_string(), first: "abc".to_string(), second: "color".to_string() }
    )]
    fn validation(#[case] aliases: Vec<(String, String)>, #[case] expected: AliasError) {
        assert_eq!(
            AliasTable::new(["abc", "color"], aliases).unwrap_err(),
            expected
        );
    }

    #[test]
    fn validation_message() {
        let error = AliasTable::new(["abc"], entries(&[("abc", "abc2")])).unwrap_err();
        assert_eq!(
            error.to_string(),
            "alias 'abc' shadows the option of the same name."
        );
    }
}
