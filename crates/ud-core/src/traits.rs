/// Résout le glyphe retourné d'un caractère.
///
/// Implémenté par : `SubstitutionTable` (scan linéaire), `IndexedTable` (map directe).
///
/// # Example
/// ```
/// use ud_core::traits::Substitution;
///
/// struct OnlyB;
/// impl Substitution for OnlyB {
///     fn counterpart(&self, ch: char) -> Option<char> {
///         match ch {
///             'b' => Some('q'),
///             'q' => Some('b'),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(OnlyB.substitute('b'), 'q');
/// assert_eq!(OnlyB.substitute('x'), 'x');
/// ```
pub trait Substitution {
    /// Counterpart of `ch`, looked up on both sides of each pair.
    ///
    /// Returns `None` when no pair mentions `ch`.
    fn counterpart(&self, ch: char) -> Option<char>;

    /// Counterpart of `ch`, or `ch` itself when unmapped.
    #[inline]
    fn substitute(&self, ch: char) -> char {
        self.counterpart(ch).unwrap_or(ch)
    }
}

impl<S: Substitution + ?Sized> Substitution for &S {
    #[inline]
    fn counterpart(&self, ch: char) -> Option<char> {
        (**self).counterpart(ch)
    }
}

impl<S: Substitution + ?Sized> Substitution for Box<S> {
    #[inline]
    fn counterpart(&self, ch: char) -> Option<char> {
        (**self).counterpart(ch)
    }
}
