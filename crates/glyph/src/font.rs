//! Built-in 5×7 font table.
//!
//! Covers uppercase Latin letters, digits, space, common punctuation and a
//! heart. ASCII lowercase letters share the uppercase glyphs.

use crate::glyph::Glyph;

const fn g(rows: [u8; 7]) -> Glyph {
    Glyph::from_rows(rows)
}

/// The font table, in lookup order.
pub static FONT: &[(char, Glyph)] = &[
    (' ', Glyph::BLANK),
    ('A', g([0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('B', g([0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110])),
    ('C', g([0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110])),
    ('D', g([0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110])),
    ('E', g([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111])),
    ('F', g([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000])),
    ('G', g([0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111])),
    ('H', g([0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001])),
    ('I', g([0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('J', g([0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100])),
    ('K', g([0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001])),
    ('L', g([0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111])),
    ('M', g([0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001])),
    ('N', g([0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001])),
    ('O', g([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('P', g([0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000])),
    ('Q', g([0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101])),
    ('R', g([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001])),
    ('S', g([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110])),
    ('T', g([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('U', g([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110])),
    ('V', g([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100])),
    ('W', g([0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010])),
    ('X', g([0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001])),
    ('Y', g([0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100])),
    ('Z', g([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111])),
    ('0', g([0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110])),
    ('1', g([0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110])),
    ('2', g([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111])),
    ('3', g([0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110])),
    ('4', g([0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010])),
    ('5', g([0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110])),
    ('6', g([0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110])),
    ('7', g([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000])),
    ('8', g([0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110])),
    ('9', g([0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100])),
    ('!', g([0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100])),
    ('?', g([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100])),
    ('.', g([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100])),
    (',', g([0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000])),
    ('-', g([0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000])),
    ('_', g([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111])),
    (':', g([0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000])),
    (';', g([0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b00100, 0b01000])),
    ('\'', g([0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000])),
    ('"', g([0b01010, 0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000])),
    ('+', g([0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000])),
    ('=', g([0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000])),
    ('*', g([0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000])),
    ('/', g([0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000])),
    ('#', g([0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010])),
    ('(', g([0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010])),
    (')', g([0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000])),
    ('<', g([0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010])),
    ('>', g([0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000])),
    ('@', g([0b01110, 0b10001, 0b00001, 0b01101, 0b10101, 0b10101, 0b01110])),
    ('&', g([0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101])),
    ('%', g([0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011])),
    ('♥', g([0b00000, 0b01010, 0b11111, 0b11111, 0b01110, 0b00100, 0b00000])),
];

/// Looks up the glyph for `ch`.
///
/// ASCII lowercase letters resolve to their uppercase glyph. Returns `None`
/// for characters outside the table.
pub fn lookup(ch: char) -> Option<Glyph> {
    let key = ch.to_ascii_uppercase();
    FONT.iter().find(|(c, _)| *c == key).map(|(_, glyph)| *glyph)
}
