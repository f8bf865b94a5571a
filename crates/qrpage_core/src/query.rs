/// Whitespace stripped from both ends of a settled query.
///
/// This is the set a browser text field's `trim()` uses: the Unicode space
/// separators plus tab, vertical tab, form feed, the line terminators and the
/// byte-order mark. NEL (U+0085) is not part of it and survives trimming.
pub fn is_query_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn trim_query(text: &str) -> &str {
    text.trim_matches(is_query_whitespace)
}

#[cfg(test)]
mod tests {
    use super::{is_query_whitespace, trim_query};

    #[test]
    fn strips_byte_order_mark() {
        assert_eq!(trim_query("\u{FEFF}abc\u{FEFF}"), "abc");
    }

    #[test]
    fn keeps_next_line_control() {
        assert_eq!(trim_query("abc\u{0085}"), "abc\u{0085}");
        assert_eq!(trim_query("\u{0085} abc "), "\u{0085} abc");
    }

    #[test]
    fn agrees_with_unicode_whitespace_elsewhere() {
        for c in (0..=0x3000u32).filter_map(char::from_u32) {
            if c != '\u{0085}' {
                assert_eq!(is_query_whitespace(c), c.is_whitespace(), "{:?}", c);
            }
        }
    }
}
