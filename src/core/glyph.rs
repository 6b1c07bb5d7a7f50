use once_cell::sync::Lazy;
use std::collections::HashMap;

/// The compiled-in substitution pairs: each ASCII letter maps to a visually
/// similar accented or decorated code point. The pairs follow the "bent"
/// alphabet popularized by Lunicode, which keeps pseudo-translated text
/// legible while making it impossible to mistake for source English.
const BENT: &[(char, char)] = &[
    ('a', 'á'),
    ('b', 'ƀ'),
    ('c', 'ç'),
    ('d', 'đ'),
    ('e', 'é'),
    ('f', 'ƒ'),
    ('g', 'ğ'),
    ('h', 'ĥ'),
    ('i', 'í'),
    ('j', 'ĵ'),
    ('k', 'ķ'),
    ('l', 'ĺ'),
    ('m', 'ɱ'),
    ('n', 'ñ'),
    ('o', 'ó'),
    ('p', 'ƥ'),
    ('q', 'ʠ'),
    ('r', 'ŕ'),
    ('s', 'š'),
    ('t', 'ţ'),
    ('u', 'ú'),
    ('v', 'ṽ'),
    ('w', 'ŵ'),
    ('x', 'ẋ'),
    ('y', 'ý'),
    ('z', 'ž'),
    ('A', 'Á'),
    ('B', 'Ɓ'),
    ('C', 'Ç'),
    ('D', 'Đ'),
    ('E', 'É'),
    ('F', 'Ƒ'),
    ('G', 'Ğ'),
    ('H', 'Ĥ'),
    ('I', 'Í'),
    ('J', 'Ĵ'),
    ('K', 'Ķ'),
    ('L', 'Ĺ'),
    ('M', 'Ḿ'),
    ('N', 'Ñ'),
    ('O', 'Ó'),
    ('P', 'Ƥ'),
    ('Q', 'Ǫ'),
    ('R', 'Ŕ'),
    ('S', 'Š'),
    ('T', 'Ţ'),
    ('U', 'Ú'),
    ('V', 'Ṽ'),
    ('W', 'Ŵ'),
    ('X', 'Ẋ'),
    ('Y', 'Ý'),
    ('Z', 'Ž'),
];

static TABLE: Lazy<HashMap<char, char>> = Lazy::new(|| BENT.iter().copied().collect());

/// Looks up the decorated substitute for a code point.
///
/// Returns `None` when the table has no entry, in which case callers keep the
/// original code point unchanged. The table is built once on first use and
/// shared by all threads for the lifetime of the process.
pub fn lookup(c: char) -> Option<char> {
    TABLE.get(&c).copied()
}
