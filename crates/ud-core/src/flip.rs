use crate::error::CoreError;
use crate::traits::Substitution;

/// Séparateur par défaut entre les tokens retournés.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Turns text upside-down with a borrowed substitution table.
///
/// # Example
/// ```
/// use ud_core::{Flipper, SubstitutionTable};
///
/// let table = SubstitutionTable::builtin();
/// let flipper = Flipper::new(&table);
/// assert_eq!(flipper.flip("ab"), "q\u{0250}");
/// assert_eq!(flipper.compose_output(&["ab", "6"]).unwrap(), "9 q\u{0250}");
/// ```
pub struct Flipper<'a, S: Substitution + ?Sized> {
    table: &'a S,
    separator: String,
}

impl<'a, S: Substitution + ?Sized> Flipper<'a, S> {
    /// Flipper joining tokens with a single space.
    #[must_use]
    pub fn new(table: &'a S) -> Self {
        Self::with_separator(table, DEFAULT_SEPARATOR)
    }

    /// Flipper joining tokens with `separator`.
    #[must_use]
    pub fn with_separator(table: &'a S, separator: impl Into<String>) -> Self {
        Self {
            table,
            separator: separator.into(),
        }
    }

    /// Text placed between flipped tokens.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Reverse `token` and substitute every character through the table.
    ///
    /// Unmapped characters pass through. The result has as many chars as the input.
    #[must_use]
    pub fn flip(&self, token: &str) -> String {
        if token.is_empty() {
            return String::new();
        }
        token
            .chars()
            .rev()
            .map(|ch| self.table.substitute(ch))
            .collect()
    }

    /// Flip every token and join them in reverse order.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidInvocation`] if `tokens` is empty.
    pub fn compose_output<T: AsRef<str>>(&self, tokens: &[T]) -> Result<String, CoreError> {
        if tokens.is_empty() {
            return Err(CoreError::InvalidInvocation);
        }
        let flipped: Vec<String> = tokens.iter().map(|t| self.flip(t.as_ref())).collect();
        let reversed: Vec<&str> = flipped.iter().rev().map(String::as_str).collect();
        Ok(reversed.join(&self.separator))
    }
}
