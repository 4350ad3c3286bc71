use deunicode::deunicode_char;
use std::borrow::Cow;
use unicode_normalization::{is_nfkd_quick, IsNormalized, UnicodeNormalization};

// Punctuation that survives cleaning: it either carries name structure
// (hyphen, apostrophe, comma, period) or delimits nicknames.
const KEPT_SYMBOLS: [char; 7] = ['-', '\'', '(', ')', '"', ',', '.'];

#[inline]
fn already_nfkd(string: &str) -> bool {
    let mut banned_char = false;
    let normalized = is_nfkd_quick(string.chars().take_while(|&c| {
        banned_char = c.is_whitespace() && c != ' ';
        !banned_char
    }));
    normalized == IsNormalized::Yes && !banned_char
}

fn nfkd_with_plain_spaces(string: &str) -> Cow<str> {
    if already_nfkd(string) {
        Cow::Borrowed(string)
    } else {
        Cow::Owned(
            string
                .chars()
                .map(|c| if c.is_whitespace() { ' ' } else { c })
                .nfkd()
                .collect(),
        )
    }
}

/// Reduce raw input to the cleaned form the tokenizer consumes: ASCII
/// transliteration, lowercasing, removal of symbols outside the kept
/// punctuation, collapsed whitespace, and trimmed edge separators.
///
/// With `skip_cleaning`, case, diacritics, digits, and punctuation are
/// preserved; only whitespace collapse and edge trimming still apply.
/// Never fails; input with no usable characters reduces to an empty
/// string.
pub fn normalize(raw: &str, skip_cleaning: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    let mut push = |c: char, out: &mut String| {
        if c == ' ' {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    };

    if skip_cleaning {
        for c in raw.chars() {
            push(if c.is_whitespace() { ' ' } else { c }, &mut out);
        }
    } else {
        let decomposed = nfkd_with_plain_spaces(raw);
        for c in decomposed.chars() {
            for t in deunicode_char(c).unwrap_or("").chars() {
                if t.is_ascii_alphabetic() {
                    push(t.to_ascii_lowercase(), &mut out);
                } else if t == ' ' || KEPT_SYMBOLS.contains(&t) {
                    push(t, &mut out);
                }
            }
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == ',');
    if trimmed.len() == out.len() {
        out
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses() {
        assert_eq!(normalize("  John \t  SMITH  ", false), "john smith");
    }

    #[test]
    fn folds_accents() {
        assert_eq!(normalize("José Nuñez", false), "jose nunez");
        assert_eq!(normalize("Göran Müller", false), "goran muller");
    }

    #[test]
    fn strips_unlisted_symbols() {
        assert_eq!(normalize("john_smith@example", false), "johnsmithexample");
        assert_eq!(normalize("J*ohn! Smith?", false), "john smith");
        assert_eq!(normalize("john smith 3", false), "john smith");
    }

    #[test]
    fn keeps_name_punctuation() {
        assert_eq!(normalize("O'Connor-Smythe, Jr.", false), "o'connor-smythe, jr.");
        assert_eq!(normalize("Ben (Benny) Franklin", false), "ben (benny) franklin");
    }

    #[test]
    fn trims_edge_separators() {
        assert_eq!(normalize(", John Smith ,", false), "john smith");
        assert_eq!(normalize(",,,", false), "");
        assert_eq!(normalize("", false), "");
    }

    #[test]
    fn skip_cleaning_preserves_surface() {
        assert_eq!(normalize("José  van   Nuñez", true), "José van Nuñez");
        assert_eq!(normalize(" John SMITH 2nd ", true), "John SMITH 2nd");
    }
}
