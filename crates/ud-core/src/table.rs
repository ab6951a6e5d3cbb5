use std::collections::HashMap;

use crate::traits::Substitution;

/// One entry of the substitution table: an upright glyph and its rotated look-alike.
///
/// The relation is symmetric, either side resolves to the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CharacterPair {
    /// Glyph as normally written.
    pub upright: char,
    /// Glyph that resembles `upright` rotated by 180°.
    pub flipped: char,
}

impl CharacterPair {
    /// Pair from an upright glyph and its look-alike.
    #[must_use]
    pub const fn new(upright: char, flipped: char) -> Self {
        Self { upright, flipped }
    }

    /// Other side of the pair if `ch` is one of its two glyphs.
    #[inline]
    #[must_use]
    pub fn counterpart(&self, ch: char) -> Option<char> {
        if ch == self.upright {
            Some(self.flipped)
        } else if ch == self.flipped {
            Some(self.upright)
        } else {
            None
        }
    }

    /// True if `ch` appears on either side.
    #[inline]
    #[must_use]
    pub fn touches(&self, ch: char) -> bool {
        ch == self.upright || ch == self.flipped
    }
}

impl From<(char, char)> for CharacterPair {
    fn from((upright, flipped): (char, char)) -> Self {
        Self::new(upright, flipped)
    }
}

const fn p(upright: char, flipped: char) -> CharacterPair {
    CharacterPair::new(upright, flipped)
}

/// Table intégrée. Les caractères symétriques (o, s, x, z, H, N, 0, 8, :, -, +...)
/// sont absents : ils passent tels quels.
pub const BUILTIN_PAIRS: &[CharacterPair] = &[
    // === Minuscules ===
    p('a', '\u{0250}'),
    p('b', 'q'),
    p('c', '\u{0254}'),
    p('e', '\u{0259}'),
    p('f', '\u{025f}'),
    p('g', '\u{0253}'),
    p('h', '\u{0265}'),
    p('i', '\u{1d09}'),
    p('j', '\u{027e}'),
    p('k', '\u{029e}'),
    p('l', '\u{a781}'),
    p('m', '\u{026f}'),
    p('n', 'u'),
    p('p', 'd'),
    p('r', '\u{0279}'),
    p('t', '\u{0287}'),
    p('v', '\u{028c}'),
    p('w', '\u{028d}'),
    p('y', '\u{028e}'),
    // === Majuscules ===
    p('A', '\u{2c6f}'),
    p('B', '\u{15fa}'),
    p('C', '\u{0186}'),
    p('D', '\u{15e1}'),
    p('E', '\u{018e}'),
    p('F', '\u{07c3}'),
    p('G', '\u{2141}'),
    p('J', '\u{017f}'),
    p('K', '\u{0c6b}'),
    p('L', '\u{14a3}'),
    p('M', 'W'),
    p('P', '\u{0500}'),
    p('Q', '\u{10e2}'),
    p('R', '\u{1d1a}'),
    p('T', '\u{22a5}'),
    p('U', '\u{2229}'),
    p('V', '\u{0245}'),
    p('Y', '\u{2144}'),
    // === Chiffres ===
    p('1', '\u{01c0}'),
    p('2', '\u{218a}'),
    p('3', '\u{218b}'),
    p('4', '\u{07c8}'),
    p('6', '9'),
    p('7', '\u{14aa}'),
    // === Ponctuation & symboles ===
    p('.', '\u{02d9}'),
    p(',', '\u{2e32}'),
    p(';', '\u{2e35}'),
    p('_', '\u{203e}'),
    // Identity entry, keeps '@' out of any future alternate pair.
    p('@', '@'),
    p('?', '\u{00bf}'),
    p(')', '('),
    p('/', '\\'),
    p('&', '\u{214b}'),
    p('"', '\u{201e}'),
    p('!', '\u{00a1}'),
    p('<', '>'),
    p('[', ']'),
    p('{', '}'),
    // === Divers ===
    // ß
    p('\u{00df}', '\u{0a88}'),
];

/// Ordered list of pairs, scanned linearly with first-match-wins.
///
/// # Example
/// ```
/// use ud_core::table::SubstitutionTable;
/// use ud_core::traits::Substitution;
///
/// let table = SubstitutionTable::builtin();
/// assert_eq!(table.substitute('b'), 'q');
/// assert_eq!(table.substitute('q'), 'b');
/// assert_eq!(table.substitute('o'), 'o');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubstitutionTable {
    pairs: Vec<CharacterPair>,
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SubstitutionTable {
    /// Table built from `pairs`, in the given order.
    #[must_use]
    pub fn new(pairs: impl IntoIterator<Item = CharacterPair>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    /// Table without any pair: every character passes through.
    #[must_use]
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Table holding [`BUILTIN_PAIRS`].
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_PAIRS.iter().copied())
    }

    /// Pairs in scan order.
    #[must_use]
    pub fn pairs(&self) -> &[CharacterPair] {
        &self.pairs
    }

    /// Number of pairs, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if the table has no pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Place `extra` in front of the current pairs so they win the scan.
    ///
    /// # Example
    /// ```
    /// use ud_core::table::{CharacterPair, SubstitutionTable};
    /// use ud_core::traits::Substitution;
    ///
    /// let table = SubstitutionTable::builtin()
    ///     .with_overrides(&[CharacterPair::new('a', 'Ɐ')]);
    /// assert_eq!(table.substitute('a'), 'Ɐ');
    /// ```
    #[must_use]
    pub fn with_overrides(self, extra: &[CharacterPair]) -> Self {
        if extra.is_empty() {
            return self;
        }
        let mut pairs = Vec::with_capacity(extra.len() + self.pairs.len());
        pairs.extend_from_slice(extra);
        pairs.extend(self.pairs);
        Self { pairs }
    }

    /// Drop every pair that mentions one of `chars` on either side.
    #[must_use]
    pub fn without(mut self, chars: &[char]) -> Self {
        self.pairs.retain(|pair| !chars.iter().any(|&ch| pair.touches(ch)));
        self
    }

    /// Direct-mapped copy with the same lookup answers.
    #[must_use]
    pub fn to_indexed(&self) -> IndexedTable {
        IndexedTable::from_pairs(&self.pairs)
    }
}

impl Substitution for SubstitutionTable {
    #[inline]
    fn counterpart(&self, ch: char) -> Option<char> {
        self.pairs.iter().find_map(|pair| pair.counterpart(ch))
    }
}

/// Char → char map built once from a pair list.
///
/// The first pair mentioning a character owns it, so answers match the
/// linear scan of [`SubstitutionTable`] even with duplicate keys.
#[derive(Clone, Debug, Default)]
pub struct IndexedTable {
    map: HashMap<char, char>,
}

impl IndexedTable {
    /// Build the map, keeping the first pair that mentions each character.
    #[must_use]
    pub fn from_pairs(pairs: &[CharacterPair]) -> Self {
        let mut map = HashMap::with_capacity(pairs.len() * 2);
        for pair in pairs {
            map.entry(pair.upright).or_insert(pair.flipped);
            map.entry(pair.flipped).or_insert(pair.upright);
        }
        Self { map }
    }

    /// Number of characters with a counterpart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if no character has a counterpart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Substitution for IndexedTable {
    #[inline]
    fn counterpart(&self, ch: char) -> Option<char> {
        self.map.get(&ch).copied()
    }
}
