use crate::classify;
use crate::join::{self, Pieces};
use crate::lexicon::ScopedLexicon;
use crate::nickname;
use crate::normalize;
use crate::segment;
use crate::Config;
use compact_str::CompactString;
use smallvec::SmallVec;
use std::borrow::Cow;

pub(crate) type Words = SmallVec<[CompactString; 2]>;

#[derive(Debug, Default)]
pub(crate) struct ParsedSlots {
    pub title: Words,
    pub first: Words,
    pub middle: Words,
    pub last: Words,
    pub suffix: Words,
    pub nickname: Words,
}

struct ParseOp<'a> {
    lexicon: ScopedLexicon<'a>,
    title: Words,
    first: Words,
    middle: Words,
    last: Words,
    suffix: Words,
}

/// Decompose one raw string against the given configuration. Never
/// fails; inputs that yield nothing leave every slot empty.
pub(crate) fn parse(raw: &str, config: &Config) -> ParsedSlots {
    let cleaned = normalize::normalize(raw, config.skip_cleaning);
    let (cleaned, nicknames) = nickname::extract(cleaned);

    let mut op = ParseOp {
        lexicon: ScopedLexicon::new(Cow::Borrowed(&config.lexicon)),
        title: Words::new(),
        first: Words::new(),
        middle: Words::new(),
        last: Words::new(),
        suffix: Words::new(),
    };

    op.run(&cleaned);

    ParsedSlots {
        title: canonical(op.title, config.skip_cleaning),
        first: canonical(op.first, config.skip_cleaning),
        middle: canonical(op.middle, config.skip_cleaning),
        last: canonical(op.last, config.skip_cleaning),
        suffix: canonical(op.suffix, config.skip_cleaning),
        nickname: canonical(nicknames.into_iter().collect(), config.skip_cleaning),
    }
}

// Slot words keep their surface periods through classification but render
// without them ("q.c." -> "qc", "jr." -> "jr"). Skipped cleaning keeps
// the surface form.
fn canonical(words: Words, skip_cleaning: bool) -> Words {
    if skip_cleaning {
        return words;
    }

    words
        .into_iter()
        .map(|w| {
            if w.contains('.') {
                w.chars().filter(|&c| c != '.').collect()
            } else {
                w
            }
        })
        .filter(|w: &CompactString| !w.is_empty())
        .collect()
}

impl<'a> ParseOp<'a> {
    fn run(&mut self, text: &str) {
        let segments = segment::comma_segments(text);

        if segments.len() == 1 {
            // No commas: a single linear run, allocated left to right.
            let pieces = self.parse_pieces(&segment::words(segments[0]), 0);
            self.allocate_linear(&pieces, true);
        } else if self.suffix_tail(&segments) {
            // "doe jr., clu, cfp" - the name ends at the first comma and
            // everything after is a literal suffix list.
            let pieces = self.parse_pieces(&segment::words(segments[0]), segments.len() - 1);
            self.allocate_linear(&pieces, false);
            self.suffix
                .extend(segments[1..].iter().map(|&s| CompactString::from(s)));
        } else {
            // "smith, john" - the first segment is the surname run (with
            // its own suffix check, so "smith jr., john" keeps the jr.),
            // the second is the title/first/middle run, and anything
            // after a second comma is a suffix verbatim.
            let lastname_pieces = self.parse_pieces(&segment::words(segments[0]), 1);
            for piece in lastname_pieces {
                if self.lexicon.is_suffix(&piece) && !self.last.is_empty() {
                    self.suffix.push(piece);
                } else {
                    self.last.push(piece);
                }
            }

            let pieces = self.parse_pieces(&segment::words(segments[1]), 1);
            self.allocate_given_run(&pieces);

            self.suffix.extend(
                segments[2..]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .map(|&s| CompactString::from(s)),
            );
        }
    }

    /// The competing comma convention: a second segment made up entirely
    /// of suffixes means "name, credentials" rather than "surname,
    /// given" - but only when the first segment could hold a full name
    /// on its own ("johnson, bart" stays surname-first).
    fn suffix_tail(&self, segments: &[&str]) -> bool {
        let tail = segment::words(segments[1]);

        !tail.is_empty()
            && tail.iter().all(|w| self.lexicon.is_suffix(w))
            && segment::words(segments[0]).len() > 1
    }

    /// Clean up raw tokens, learn period-glued compounds, and join
    /// conjunction/prefix compounds.
    fn parse_pieces(&mut self, tokens: &[&str], additional_parts: usize) -> Pieces {
        let mut pieces: Pieces = tokens.iter().map(|&w| CompactString::from(w)).collect();
        classify::learn_period_compounds(&mut self.lexicon, pieces.as_slice());
        join::join_pieces(&mut pieces, &mut self.lexicon, additional_parts);
        pieces
    }

    /// Left-to-right allocation for a run that contains the whole name:
    /// a leading title run (only if a name follows, or the title is the
    /// only token), then first, then either a trailing all-suffix tail
    /// folded into last+suffix, or middle pieces up to the final last.
    ///
    /// The roman-numeral rule only applies to the comma-free format: a
    /// final numeral after a non-initial folds that piece into the last
    /// name and the numeral into the suffix ("john smith vii").
    fn allocate_linear(&mut self, pieces: &[CompactString], allow_roman: bool) {
        let p_len = pieces.len();

        for (i, piece) in pieces.iter().enumerate() {
            let nxt = pieces.get(i + 1);

            if self.lexicon.is_title(piece) && (nxt.is_some() || p_len == 1) && self.first.is_empty()
            {
                self.title.push(piece.clone());
                continue;
            }
            if self.first.is_empty() {
                self.first.push(piece.clone());
                continue;
            }

            let rest = &pieces[i + 1..];
            let trailing_suffixes =
                !rest.is_empty() && rest.iter().all(|p| self.lexicon.is_suffix(p));
            let roman_last = allow_roman
                && i + 2 == p_len
                && nxt.map_or(false, |n| classify::is_roman_numeral(n))
                && !classify::is_initial(piece);

            if trailing_suffixes || roman_last {
                self.last.push(piece.clone());
                self.suffix.extend(rest.iter().cloned());
                break;
            }
            if nxt.is_none() {
                self.last.push(piece.clone());
                continue;
            }
            self.middle.push(piece.clone());
        }
    }

    /// Allocation for the post-comma run of the surname-first format:
    /// the surname is already known, so pieces fall into title, first,
    /// suffix, or middle - never last.
    fn allocate_given_run(&mut self, pieces: &[CompactString]) {
        let p_len = pieces.len();

        for (i, piece) in pieces.iter().enumerate() {
            let nxt = pieces.get(i + 1);

            if self.lexicon.is_title(piece) && (nxt.is_some() || p_len == 1) && self.first.is_empty()
            {
                self.title.push(piece.clone());
            } else if self.first.is_empty() {
                self.first.push(piece.clone());
            } else if self.lexicon.is_suffix(piece) {
                self.suffix.push(piece.clone());
            } else {
                self.middle.push(piece.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(raw: &str) -> ParsedSlots {
        parse(raw, &Config::default())
    }

    fn words(list: &Words) -> Vec<&str> {
        list.iter().map(|w| w.as_str()).collect()
    }

    #[test]
    fn first_last() {
        let parsed = slots("John Doe");
        assert_eq!(words(&parsed.first), ["john"]);
        assert_eq!(words(&parsed.last), ["doe"]);
        assert!(parsed.middle.is_empty());
    }

    #[test]
    fn first_middle_last() {
        let parsed = slots("John Quincy Doe");
        assert_eq!(words(&parsed.first), ["john"]);
        assert_eq!(words(&parsed.middle), ["quincy"]);
        assert_eq!(words(&parsed.last), ["doe"]);
    }

    #[test]
    fn lastname_comma() {
        let parsed = slots("Doe, John A. Jr.");
        assert_eq!(words(&parsed.first), ["john"]);
        assert_eq!(words(&parsed.middle), ["a"]);
        assert_eq!(words(&parsed.last), ["doe"]);
        assert_eq!(words(&parsed.suffix), ["jr"]);
        assert!(parsed.title.is_empty());
    }

    #[test]
    fn suffix_tail_dispatch() {
        let parsed = slots("Doe Jr., CLU, CFP");
        assert_eq!(words(&parsed.first), ["doe"]);
        assert_eq!(words(&parsed.last), ["jr"]);
        // "jr." cannot end the two-token name run, so it reads as the
        // last name; the comma-separated credentials follow
        assert_eq!(words(&parsed.suffix), ["clu", "cfp"]);
    }

    #[test]
    fn suffix_tail_with_full_name() {
        let parsed = slots("John Doe Jr., CLU, CFP");
        assert_eq!(words(&parsed.first), ["john"]);
        assert_eq!(words(&parsed.last), ["doe"]);
        assert_eq!(words(&parsed.suffix), ["jr", "clu", "cfp"]);
    }

    #[test]
    fn bart_is_not_a_suffix_tail() {
        let parsed = slots("Johnson, Bart");
        assert_eq!(words(&parsed.first), ["bart"]);
        assert_eq!(words(&parsed.last), ["johnson"]);
        assert!(parsed.suffix.is_empty());
    }

    #[test]
    fn suffix_inside_lastname_segment() {
        let parsed = slots("Smith Jr., John");
        assert_eq!(words(&parsed.first), ["john"]);
        assert_eq!(words(&parsed.last), ["smith"]);
        assert_eq!(words(&parsed.suffix), ["jr"]);
    }

    #[test]
    fn leading_title_run() {
        let parsed = slots("Lt. Gen. John Doe");
        assert_eq!(words(&parsed.title), ["lt", "gen"]);
        assert_eq!(words(&parsed.first), ["john"]);
        assert_eq!(words(&parsed.last), ["doe"]);
    }

    #[test]
    fn bare_title_only() {
        let parsed = slots("Dr.");
        assert_eq!(words(&parsed.title), ["dr"]);
        assert!(parsed.first.is_empty());
        assert!(parsed.last.is_empty());
    }

    #[test]
    fn roman_numeral_after_name() {
        let parsed = slots("John Smith VII");
        assert_eq!(words(&parsed.first), ["john"]);
        assert_eq!(words(&parsed.last), ["smith"]);
        assert_eq!(words(&parsed.suffix), ["vii"]);
    }

    #[test]
    fn roman_numeral_after_initial_stays_last() {
        // "v" after an initial is likelier a short surname than a numeral
        let parsed = slots("John E. V");
        assert_eq!(words(&parsed.first), ["john"]);
        assert_eq!(words(&parsed.middle), ["e"]);
        assert_eq!(words(&parsed.last), ["v"]);
    }

    #[test]
    fn period_glued_title_is_learned() {
        let parsed = slots("Lt.Gov. John Doe");
        assert_eq!(words(&parsed.title), ["ltgov"]);
        assert_eq!(words(&parsed.first), ["john"]);
        assert_eq!(words(&parsed.last), ["doe"]);
    }

    #[test]
    fn trailing_comma_segments_go_to_suffix() {
        let parsed = slots("Doe, John, Esq.");
        assert_eq!(words(&parsed.first), ["john"]);
        assert_eq!(words(&parsed.last), ["doe"]);
        assert_eq!(words(&parsed.suffix), ["esq"]);
    }

    #[test]
    fn empty_input_has_empty_slots() {
        let parsed = slots("");
        assert!(parsed.title.is_empty());
        assert!(parsed.first.is_empty());
        assert!(parsed.middle.is_empty());
        assert!(parsed.last.is_empty());
        assert!(parsed.suffix.is_empty());
        assert!(parsed.nickname.is_empty());
    }
}
