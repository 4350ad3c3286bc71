use crate::lexicon::ScopedLexicon;
use compact_str::CompactString;
use smallvec::SmallVec;
use std::ops::Range;

pub type Pieces = SmallVec<[CompactString; 8]>;

/// Merge adjacent pieces into compound tokens: contiguous conjunction
/// runs, then singleton conjunctions, then prefix chains. Joining only
/// moves boundaries; the underlying characters are conserved.
///
/// `additional_parts` counts name parts known to exist outside this run
/// (comma-separated segments handled elsewhere); they raise the length
/// thresholds the same way in-run pieces do. A run that totals fewer
/// than three parts is never joined, so two-word names like "van nguyen"
/// keep their prefix as a plain first name.
pub fn join_pieces(pieces: &mut Pieces, lexicon: &mut ScopedLexicon, additional_parts: usize) {
    if pieces.len() + additional_parts < 3 {
        return;
    }

    let total_rootnames =
        pieces.iter().filter(|p| lexicon.is_rootname(p)).count() + additional_parts;

    join_conjunction_runs(pieces, lexicon);
    join_singleton_conjunctions(pieces, lexicon, total_rootnames);
    join_prefix_chains(pieces, lexicon);
}

/// Maximal runs of adjacent conjunctions collapse into one piece, and
/// the compound is registered so the singleton pass below treats it as a
/// conjunction in its own right ("of the").
fn join_conjunction_runs(pieces: &mut Pieces, lexicon: &mut ScopedLexicon) {
    let mut i = 0;
    while i < pieces.len() {
        if !lexicon.is_conjunction(&pieces[i]) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < pieces.len() && lexicon.is_conjunction(&pieces[j]) {
            j += 1;
        }

        if j - i > 1 {
            let joined = join_words(&pieces[i..j]);
            lexicon.learn_conjunction(&joined);
            splice(pieces, i..j, joined);
        }

        i += 1;
    }
}

/// Each remaining conjunction joins its preceding piece; only at
/// position zero does it join the following piece instead. Joining to a
/// title makes the compound a title as well ("mr. and" + "mrs.").
fn join_singleton_conjunctions(
    pieces: &mut Pieces,
    lexicon: &mut ScopedLexicon,
    total_rootnames: usize,
) {
    let mut i = 0;
    while i < pieces.len() {
        if !lexicon.is_conjunction(&pieces[i]) {
            i += 1;
            continue;
        }

        // A lone single-character conjunction in a short name is more
        // plausibly an initial; leave it for the allocator to place.
        if pieces[i].chars().count() == 1 && total_rootnames < 4 {
            i += 1;
            continue;
        }

        if i == 0 {
            if pieces.len() < 2 {
                break;
            }
            let joined = join_words(&pieces[0..2]);
            if lexicon.is_title(&pieces[1]) {
                lexicon.learn_title(&joined);
            }
            splice(pieces, 0..2, joined);
            i += 1;
        } else {
            let joined = join_words(&pieces[i - 1..=i]);
            if lexicon.is_title(&pieces[i - 1]) {
                lexicon.learn_title(&joined);
            }
            pieces[i - 1] = joined;
            pieces.remove(i);
            // the piece now at i is the former follower; re-examine it
        }
    }
}

/// A prefix absorbs everything after it up to the next prefix or suffix,
/// or to the end of the run, so "von bergen wessels" and "de la vega"
/// become single surname units. An immediately following second prefix
/// extends the chain head before absorption.
fn join_prefix_chains(pieces: &mut Pieces, lexicon: &mut ScopedLexicon) {
    let mut i = 0;
    while i < pieces.len() {
        if !lexicon.is_prefix(&pieces[i]) {
            i += 1;
            continue;
        }

        let chain_end = if i + 1 < pieces.len() && lexicon.is_prefix(&pieces[i + 1]) {
            i + 2
        } else {
            i + 1
        };

        let mut j = chain_end;
        while j < pieces.len() && !lexicon.is_prefix(&pieces[j]) && !lexicon.is_suffix(&pieces[j])
        {
            j += 1;
        }

        if j > i + 1 {
            let joined = join_words(&pieces[i..j]);
            splice(pieces, i..j, joined);
        }

        i += 1;
    }
}

fn join_words(words: &[CompactString]) -> CompactString {
    CompactString::from(words.join(" "))
}

fn splice(pieces: &mut Pieces, range: Range<usize>, replacement: CompactString) {
    pieces[range.start] = replacement;
    pieces.drain(range.start + 1..range.end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use std::borrow::Cow;

    fn joined(input: &[&str], additional_parts: usize) -> Vec<String> {
        let base = Lexicon::default();
        let mut lexicon = ScopedLexicon::new(Cow::Borrowed(&base));
        let mut pieces: Pieces = input.iter().map(|&s| CompactString::from(s)).collect();
        join_pieces(&mut pieces, &mut lexicon, additional_parts);
        pieces.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn two_pieces_never_join() {
        assert_eq!(joined(&["van", "nguyen"], 0), ["van", "nguyen"]);
        assert_eq!(joined(&["de", "la"], 0), ["de", "la"]);
    }

    #[test]
    fn prefix_absorbs_to_end() {
        assert_eq!(
            joined(&["pennie", "von", "bergen", "wessels"], 0),
            ["pennie", "von bergen wessels"]
        );
    }

    #[test]
    fn double_prefix_chain() {
        assert_eq!(joined(&["juan", "de", "la", "vega"], 0), ["juan", "de la vega"]);
    }

    #[test]
    fn prefix_stops_at_suffix() {
        assert_eq!(
            joined(&["john", "van", "buren", "jr."], 0),
            ["john", "van buren", "jr."]
        );
    }

    #[test]
    fn additional_parts_enable_joining() {
        // two pieces alone would be left as-is, but a known extra part
        // (e.g. the given-name segment of "de la, josé") tips the count
        assert_eq!(joined(&["de", "vega"], 0), ["de", "vega"]);
        assert_eq!(joined(&["de", "vega"], 1), ["de vega"]);
    }

    #[test]
    fn conjunction_run_collapses_and_registers() {
        assert_eq!(
            joined(&["king", "of", "the", "hill"], 0),
            ["king of the", "hill"]
        );
    }

    #[test]
    fn conjunction_joins_preceding_title() {
        let base = Lexicon::default();
        let mut lexicon = ScopedLexicon::new(Cow::Borrowed(&base));
        let mut pieces: Pieces = ["mr.", "and", "mrs.", "smith"]
            .iter()
            .map(|&s| CompactString::from(s))
            .collect();
        join_pieces(&mut pieces, &mut lexicon, 0);

        assert_eq!(pieces.as_slice(), ["mr. and", "mrs.", "smith"]);
        assert!(lexicon.is_title("mr. and"));
    }

    #[test]
    fn leading_conjunction_joins_forward() {
        assert_eq!(joined(&["and", "sons", "trust", "estate"], 0), ["and sons", "trust", "estate"]);
    }

    #[test]
    fn single_letter_conjunction_prefers_initial_when_short() {
        // "e" is a seeded conjunction shape-excluded as an initial, and
        // "&" is single-character: with under four rootnames neither joins
        assert_eq!(joined(&["ben", "&", "jerry"], 0), ["ben", "&", "jerry"]);
    }

    #[test]
    fn single_letter_conjunction_joins_when_long() {
        assert_eq!(
            joined(&["ben", "&", "jerry", "smith", "jones"], 0),
            ["ben &", "jerry", "smith", "jones"]
        );
    }
}
