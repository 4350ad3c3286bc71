use compact_str::CompactString;
use smallvec::SmallVec;

pub type Nicknames = SmallVec<[CompactString; 2]>;

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// A single quote opens a nickname only at a non-word boundary, and the
// span may not cross whitespace; apostrophes inside words ("O'Connor",
// "d'Artagnan") never match. A failed close candidate (quote followed by
// a word character) becomes interior content and the scan keeps going.
fn find_quoted_word(text: &str) -> Option<(usize, usize)> {
    let mut prev: Option<char> = None;

    for (i, c) in text.char_indices() {
        let opens = c == '\'' && prev.map_or(true, |p| !is_word_char(p));
        prev = Some(c);

        if !opens {
            continue;
        }

        for (j, d) in text[i + 1..].char_indices() {
            let j = i + 1 + j;
            if d.is_whitespace() {
                break;
            }
            if d == '\'' {
                let after = text[j + 1..].chars().next();
                if after.map_or(true, |a| !is_word_char(a)) {
                    return Some((i, j));
                }
            }
        }
    }

    None
}

fn find_delimited(text: &str, open: char, close: char) -> Option<(usize, usize)> {
    let i = text.find(open)?;
    let j = text[i + open.len_utf8()..].find(close)?;
    Some((i, i + open.len_utf8() + j))
}

/// Pull nickname spans out of the cleaned text before tokenization, in
/// fixed order: whitespace-free single-quoted words, then double-quoted
/// spans, then parenthesized spans. Matches accumulate category by
/// category; duplicates are kept as separate entries. Nickname content
/// must never reach classification, so this runs exactly once, ahead of
/// the tokenizer.
pub fn extract(mut text: String) -> (String, Nicknames) {
    let mut nicknames = Nicknames::new();

    drain(&mut text, &mut nicknames, find_quoted_word);
    drain(&mut text, &mut nicknames, |t| find_delimited(t, '"', '"'));
    drain(&mut text, &mut nicknames, |t| find_delimited(t, '(', ')'));

    (text, nicknames)
}

fn drain(
    text: &mut String,
    nicknames: &mut Nicknames,
    find: impl Fn(&str) -> Option<(usize, usize)>,
) {
    while let Some((open, close)) = find(text) {
        let interior = &text[open + 1..close];
        if !interior.is_empty() {
            nicknames.push(interior.into());
        }
        text.replace_range(open..close + 1, "");
    }
}
