//! Glyph lookup
//!
//! A font maps an 8-bit character code to the column bytes that draw it,
//! left to right, bit 0 at the top. Fonts are consumed read-only; a code
//! with no glyph is the caller's problem and is reported, not papered
//! over.

/// Character code to column bytes
pub trait Font {
    /// Column bytes for `code`, or `None` if the font has no such glyph
    fn glyph(&self, code: u8) -> Option<&[u8]>;
}

impl<F: Font + ?Sized> Font for &F {
    fn glyph(&self, code: u8) -> Option<&[u8]> {
        F::glyph(self, code)
    }
}

/// Table indexed directly by character code
impl<const W: usize> Font for [[u8; W]] {
    fn glyph(&self, code: u8) -> Option<&[u8]> {
        self.get(code as usize).map(|g| g.as_slice())
    }
}

impl<const W: usize, const N: usize> Font for [[u8; W]; N] {
    fn glyph(&self, code: u8) -> Option<&[u8]> {
        self.as_slice().glyph(code)
    }
}

/// Table of variable-width glyphs indexed by character code
impl<'a> Font for [&'a [u8]] {
    fn glyph(&self, code: u8) -> Option<&[u8]> {
        self.get(code as usize).copied()
    }
}

/// First code covered by [`BASIC_FONT`]
const FIRST: u8 = 0x20;
/// Last code covered by [`BASIC_FONT`]
const LAST: u8 = 0x7E;
const GLYPHS: usize = (LAST - FIRST) as usize + 1;

/// Printable ASCII in 8x8 cells
///
/// Codes outside `0x20..=0x7E` have no glyph.
pub struct BasicFont {
    columns: [[u8; 8]; GLYPHS],
}

impl Font for BasicFont {
    fn glyph(&self, code: u8) -> Option<&[u8]> {
        if (FIRST..=LAST).contains(&code) {
            Some(&self.columns[(code - FIRST) as usize])
        } else {
            None
        }
    }
}

/// Built-in printable ASCII font
pub static BASIC_FONT: BasicFont = BasicFont {
    columns: transpose_all(&ROWS),
};

/// Row-major cells to column-major cells: bit `c` of row `r` becomes
/// bit `r` of column `c`.
const fn transpose_all(rows: &[[u8; 8]; GLYPHS]) -> [[u8; 8]; GLYPHS] {
    let mut out = [[0u8; 8]; GLYPHS];
    let mut g = 0;
    while g < GLYPHS {
        let mut r = 0;
        while r < 8 {
            let mut c = 0;
            while c < 8 {
                if rows[g][r] & (1 << c) != 0 {
                    out[g][c] |= 1 << r;
                }
                c += 1;
            }
            r += 1;
        }
        g += 1;
    }
    out
}

// Row-major, bit 0 = leftmost pixel
#[rustfmt::skip]
const ROWS: [[u8; 8]; GLYPHS] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x18, 0x3C, 0x3C, 0x18, 0x18, 0x00, 0x18, 0x00], // !
    [0x36, 0x36, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // "
    [0x36, 0x36, 0x7F, 0x36, 0x7F, 0x36, 0x36, 0x00], // #
    [0x0C, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x0C, 0x00], // $
    [0x00, 0x63, 0x33, 0x18, 0x0C, 0x66, 0x63, 0x00], // %
    [0x1C, 0x36, 0x1C, 0x6E, 0x3B, 0x33, 0x6E, 0x00], // &
    [0x06, 0x06, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00], // '
    [0x18, 0x0C, 0x06, 0x06, 0x06, 0x0C, 0x18, 0x00], // (
    [0x06, 0x0C, 0x18, 0x18, 0x18, 0x0C, 0x06, 0x00], // )
    [0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00], // *
    [0x00, 0x0C, 0x0C, 0x3F, 0x0C, 0x0C, 0x00, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ,
    [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // .
    [0x60, 0x30, 0x18, 0x0C, 0x06, 0x03, 0x01, 0x00], // /
    [0x3E, 0x63, 0x73, 0x7B, 0x6F, 0x67, 0x3E, 0x00], // 0
    [0x0C, 0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], // 1
    [0x1E, 0x33, 0x30, 0x1C, 0x06, 0x33, 0x3F, 0x00], // 2
    [0x1E, 0x33, 0x30, 0x1C, 0x30, 0x33, 0x1E, 0x00], // 3
    [0x38, 0x3C, 0x36, 0x33, 0x7F, 0x30, 0x78, 0x00], // 4
    [0x3F, 0x03, 0x1F, 0x30, 0x30, 0x33, 0x1E, 0x00], // 5
    [0x1C, 0x06, 0x03, 0x1F, 0x33, 0x33, 0x1E, 0x00], // 6
    [0x3F, 0x33, 0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x00], // 7
    [0x1E, 0x33, 0x33, 0x1E, 0x33, 0x33, 0x1E, 0x00], // 8
    [0x1E, 0x33, 0x33, 0x3E, 0x30, 0x18, 0x0E, 0x00], // 9
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x00], // :
    [0x00, 0x0C, 0x0C, 0x00, 0x00, 0x0C, 0x0C, 0x06], // ;
    [0x18, 0x0C, 0x06, 0x03, 0x06, 0x0C, 0x18, 0x00], // <
    [0x00, 0x00, 0x3F, 0x00, 0x00, 0x3F, 0x00, 0x00], // =
    [0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00], // >
    [0x1E, 0x33, 0x30, 0x18, 0x0C, 0x00, 0x0C, 0x00], // ?
    [0x3E, 0x63, 0x7B, 0x7B, 0x7B, 0x03, 0x1E, 0x00], // @
    [0x0C, 0x1E, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x00], // A
    [0x3F, 0x66, 0x66, 0x3E, 0x66, 0x66, 0x3F, 0x00], // B
    [0x3C, 0x66, 0x03, 0x03, 0x03, 0x66, 0x3C, 0x00], // C
    [0x1F, 0x36, 0x66, 0x66, 0x66, 0x36, 0x1F, 0x00], // D
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x46, 0x7F, 0x00], // E
    [0x7F, 0x46, 0x16, 0x1E, 0x16, 0x06, 0x0F, 0x00], // F
    [0x3C, 0x66, 0x03, 0x03, 0x73, 0x66, 0x7C, 0x00], // G
    [0x33, 0x33, 0x33, 0x3F, 0x33, 0x33, 0x33, 0x00], // H
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // I
    [0x78, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E, 0x00], // J
    [0x67, 0x66, 0x36, 0x1E, 0x36, 0x66, 0x67, 0x00], // K
    [0x0F, 0x06, 0x06, 0x06, 0x46, 0x66, 0x7F, 0x00], // L
    [0x63, 0x77, 0x7F, 0x7F, 0x6B, 0x63, 0x63, 0x00], // M
    [0x63, 0x67, 0x6F, 0x7B, 0x73, 0x63, 0x63, 0x00], // N
    [0x1C, 0x36, 0x63, 0x63, 0x63, 0x36, 0x1C, 0x00], // O
    [0x3F, 0x66, 0x66, 0x3E, 0x06, 0x06, 0x0F, 0x00], // P
    [0x1E, 0x33, 0x33, 0x33, 0x3B, 0x1E, 0x38, 0x00], // Q
    [0x3F, 0x66, 0x66, 0x3E, 0x36, 0x66, 0x67, 0x00], // R
    [0x1E, 0x33, 0x07, 0x0E, 0x38, 0x33, 0x1E, 0x00], // S
    [0x3F, 0x2D, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // T
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0x3F, 0x00], // U
    [0x33, 0x33, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // V
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00], // W
    [0x63, 0x63, 0x36, 0x1C, 0x1C, 0x36, 0x63, 0x00], // X
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x1E, 0x00], // Y
    [0x7F, 0x63, 0x31, 0x18, 0x4C, 0x66, 0x7F, 0x00], // Z
    [0x1E, 0x06, 0x06, 0x06, 0x06, 0x06, 0x1E, 0x00], // [
    [0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00], // \
    [0x1E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x1E, 0x00], // ]
    [0x08, 0x1C, 0x36, 0x63, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // _
    [0x0C, 0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // `
    [0x00, 0x00, 0x1E, 0x30, 0x3E, 0x33, 0x6E, 0x00], // a
    [0x07, 0x06, 0x06, 0x3E, 0x66, 0x66, 0x3B, 0x00], // b
    [0x00, 0x00, 0x1E, 0x33, 0x03, 0x33, 0x1E, 0x00], // c
    [0x38, 0x30, 0x30, 0x3E, 0x33, 0x33, 0x6E, 0x00], // d
    [0x00, 0x00, 0x1E, 0x33, 0x3F, 0x03, 0x1E, 0x00], // e
    [0x1C, 0x36, 0x06, 0x0F, 0x06, 0x06, 0x0F, 0x00], // f
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x1F], // g
    [0x07, 0x06, 0x36, 0x6E, 0x66, 0x66, 0x67, 0x00], // h
    [0x0C, 0x00, 0x0E, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // i
    [0x30, 0x00, 0x30, 0x30, 0x30, 0x33, 0x33, 0x1E], // j
    [0x07, 0x06, 0x66, 0x36, 0x1E, 0x36, 0x67, 0x00], // k
    [0x0E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x1E, 0x00], // l
    [0x00, 0x00, 0x33, 0x7F, 0x7F, 0x6B, 0x63, 0x00], // m
    [0x00, 0x00, 0x1F, 0x33, 0x33, 0x33, 0x33, 0x00], // n
    [0x00, 0x00, 0x1E, 0x33, 0x33, 0x33, 0x1E, 0x00], // o
    [0x00, 0x00, 0x3B, 0x66, 0x66, 0x3E, 0x06, 0x0F], // p
    [0x00, 0x00, 0x6E, 0x33, 0x33, 0x3E, 0x30, 0x78], // q
    [0x00, 0x00, 0x3B, 0x6E, 0x66, 0x06, 0x0F, 0x00], // r
    [0x00, 0x00, 0x3E, 0x03, 0x1E, 0x30, 0x1F, 0x00], // s
    [0x08, 0x0C, 0x3E, 0x0C, 0x0C, 0x2C, 0x18, 0x00], // t
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x33, 0x6E, 0x00], // u
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x1E, 0x0C, 0x00], // v
    [0x00, 0x00, 0x63, 0x6B, 0x7F, 0x7F, 0x36, 0x00], // w
    [0x00, 0x00, 0x63, 0x36, 0x1C, 0x36, 0x63, 0x00], // x
    [0x00, 0x00, 0x33, 0x33, 0x33, 0x3E, 0x30, 0x1F], // y
    [0x00, 0x00, 0x3F, 0x19, 0x0C, 0x26, 0x3F, 0x00], // z
    [0x38, 0x0C, 0x0C, 0x07, 0x0C, 0x0C, 0x38, 0x00], // {
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // |
    [0x07, 0x0C, 0x0C, 0x38, 0x0C, 0x0C, 0x07, 0x00], // }
    [0x6E, 0x3B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ~
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_font_coverage() {
        assert!(BASIC_FONT.glyph(0x1F).is_none());
        assert!(BASIC_FONT.glyph(0x7F).is_none());
        assert!(BASIC_FONT.glyph(0xFF).is_none());

        for code in FIRST..=LAST {
            assert_eq!(BASIC_FONT.glyph(code).map(|g| g.len()), Some(8));
        }
    }

    #[test]
    fn test_space_is_blank() {
        assert_eq!(BASIC_FONT.glyph(b' '), Some(&[0u8; 8][..]));
    }

    #[test]
    fn test_glyphs_are_column_major() {
        // 'A': apex in the middle columns, bar on row 4
        assert_eq!(
            BASIC_FONT.glyph(b'A'),
            Some(&[0x7C, 0x7E, 0x13, 0x13, 0x7E, 0x7C, 0x00, 0x00][..])
        );
        // '_': bottom row only
        assert_eq!(BASIC_FONT.glyph(b'_'), Some(&[0x80; 8][..]));
    }

    #[test]
    fn test_table_fonts() {
        let mut table = [[0u8; 8]; 256];
        table[65] = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(table.glyph(65), Some(&[1, 2, 3, 4, 5, 6, 7, 8][..]));
        assert_eq!(table.glyph(255), Some(&[0u8; 8][..]));

        let short = [[0xFFu8; 8]; 2];
        assert!(short.glyph(2).is_none());

        let wide: [&[u8]; 2] = [&[1, 2, 3], &[0; 9]];
        assert_eq!(wide.as_slice().glyph(1).map(|g| g.len()), Some(9));
        assert!(wide.as_slice().glyph(2).is_none());
    }

    #[test]
    fn test_reference_is_a_font() {
        fn width<F: Font>(font: F, code: u8) -> Option<usize> {
            font.glyph(code).map(|g| g.len())
        }
        assert_eq!(width(&BASIC_FONT, b'x'), Some(8));
    }
}
