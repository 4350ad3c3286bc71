use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

pub type Segments<'a> = SmallVec<[&'a str; 3]>;
pub type RawTokens<'a> = SmallVec<[&'a str; 8]>;

/// Comma-delimited segments of the cleaned text, space-trimmed. Interior
/// empty segments are kept; the dispatcher counts them toward comma
/// arity.
pub fn comma_segments(text: &str) -> Segments {
    text.split(',').map(str::trim).collect()
}

/// Whitespace-delimited word tokens of one segment, stripped of stray
/// commas and whitespace.
///
/// For ASCII-bearing tokens whitespace is the only boundary, so
/// hyphenated names and names with apostrophes stay whole. A token with
/// alphabetic content but no ASCII letters (likely present only when
/// cleaning is skipped) is handed to the unicode word segmenter, which
/// knows boundaries we cannot guess.
pub fn words(segment: &str) -> RawTokens {
    let mut out = RawTokens::new();

    for word in segment.split_whitespace() {
        let word = word.trim_matches(|c| c == ',' || c == ' ');
        if word.is_empty() {
            continue;
        }

        let has_alpha = word.chars().any(char::is_alphabetic);
        if !has_alpha || word.chars().any(|c| c.is_ascii_alphabetic()) {
            out.push(word);
        } else {
            out.extend(word.unicode_words());
        }
    }

    out
}
