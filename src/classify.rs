use crate::lexicon::ScopedLexicon;

/// A single letter, optionally followed by one period, standing in for an
/// unspelled name part ("J", "q.").
pub fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();

    match chars.next() {
        Some(c) if c.is_alphabetic() => {}
        _ => return false,
    }

    match chars.next() {
        None => true,
        Some('.') => chars.next().is_none(),
        Some(_) => false,
    }
}

/// Roman numerals up to ten, the range generational suffixes occur in.
pub fn is_roman_numeral(word: &str) -> bool {
    if word.is_empty() || word.len() > 4 {
        return false;
    }

    let lower = word.to_ascii_lowercase();
    matches!(
        &*lower,
        "i" | "ii" | "iii" | "iv" | "v" | "vi" | "vii" | "viii" | "ix" | "x"
    )
}

/// A period that has at least one more character after it, i.e. anywhere
/// but the very end of the token ("q.c.", "lt.gov.", but not "jr.").
pub fn has_interior_period(word: &str) -> bool {
    word.char_indices()
        .any(|(i, c)| c == '.' && i + 1 < word.len())
}

/// Tokens glued together with periods ("lt.gov.") defeat membership tests
/// against the lexicon, which stores space-separated entries. When any
/// period-delimited fragment of such a token is a known title or suffix,
/// the whole token is registered so the allocation pass recognizes it as a
/// unit. Registration is scoped to the current parse.
pub fn learn_period_compounds(lexicon: &mut ScopedLexicon, pieces: &[impl AsRef<str>]) {
    for piece in pieces {
        let piece = piece.as_ref();
        if !has_interior_period(piece) {
            continue;
        }

        if piece.split('.').any(|chunk| lexicon.is_title(chunk)) {
            lexicon.learn_title(piece);
        } else if piece.split('.').any(|chunk| lexicon.is_suffix(chunk)) {
            lexicon.learn_suffix(piece);
        }
    }
}
