use crate::classify::is_initial;
use compact_str::CompactString;
use once_cell::sync::Lazy;
use phf::{phf_set, Set};
use std::borrow::Cow;
use std::collections::HashSet;

// Honorifics and role words that precede a name. Stored lowercase with
// periods removed; multi-word titles ("lt gen") are recognized as runs of
// their parts, and period-glued forms ("lt.gov.") are learned per parse.
static TITLES: Set<&'static str> = phf_set! {
    "abbess", "abbot", "abp", "adm", "admiral", "advocate", "akhoond",
    "airman", "ald", "alderman", "amb", "ambassador", "amn", "archbishop",
    "archdeacon", "archduchess", "archduke", "archdruid", "assoc",
    "associate", "asst", "assistant", "attache", "attorney", "atty",
    "aunt", "auntie", "ayatollah", "baba", "bailiff", "baron", "baroness",
    "barrister", "bishop", "blessed", "br", "brig", "brigadier", "briggen",
    "brother", "bwana", "canon", "capt", "captain", "cardinal", "cdr",
    "chair", "chairman", "chairwoman", "chancellor", "chaplain", "chief",
    "chieftain", "cmdr", "coach", "col", "colonel", "commander",
    "commissioner", "commodore", "comptroller", "congressman",
    "congresswoman", "consul", "controller", "corporal", "count",
    "countess", "courtier", "cpl", "cpo", "cpt", "csm", "curator", "dame",
    "deacon", "deaconess", "dean", "delegate", "deputy", "det",
    "detective", "dir", "director", "docent", "doctor", "doc", "dr",
    "dra", "druid", "duchess", "duke", "earl", "edmi", "edohen", "elder",
    "emperor", "empress", "ens", "ensign", "envoy", "exec", "father",
    "federal", "field", "flag", "flying", "fr", "frau", "friar", "gen",
    "general", "gov", "governor", "grand", "group", "guru", "hajji",
    "headman", "herr", "hon", "honorable", "honourable", "imam",
    "inspector", "intelligence", "intendant", "judge", "justice",
    "kaiser", "king", "knight", "lady", "lama", "lcdr", "lieutenant",
    "lord", "lt", "ltc", "ltcol", "ltgen", "ltjg", "madam", "madame",
    "mag", "magistrate", "maharajah", "maharani", "mahdi", "maid", "maj",
    "majgen", "major", "marchioness", "marquess", "marquis", "marquise",
    "marshal", "master", "matriarch", "mayor", "metropolitan", "mgr",
    "minister", "miss", "misses", "missus", "mister", "mlle", "mme",
    "monsignor", "mother", "mr", "mrs", "ms", "msgt", "mufti", "mullah",
    "municipal", "murshid", "nanny", "nurse", "officer", "pastor",
    "patriarch", "pfc", "pharaoh", "pilot", "pir", "po", "police", "pope",
    "prefect", "prelate", "premier", "pres", "presbyter", "president",
    "priest", "priestess", "prime", "prin", "prince", "princess",
    "principal", "prior", "private", "pro", "prof", "professor",
    "provost", "pursuivant", "pvt", "queen", "rabbi", "radm", "rangatira",
    "ranger", "rebbe", "rear", "rep", "representative", "rev", "revenue",
    "reverend", "reverand", "right", "risaldar", "rt", "saint", "sargent",
    "scpo", "secretary", "sen", "senator", "senior", "sergeant", "sfc",
    "sgt", "shaik", "shaikh", "shayk", "shaykh", "sheikh", "sheik",
    "sheriff", "shekh", "sir", "sister", "sma", "smsgt", "solicitor",
    "speaker", "spc", "squadron", "sra", "ssgt", "staff", "subaltern",
    "subedar", "superior", "supreme", "surgeon", "swami", "swordbearer",
    "tsar", "tsarina", "tsgt", "uncle", "vadm", "venerable", "verderer",
    "vicar", "vice", "viscount", "viscountess", "vizier", "warden",
    "warrant", "wing", "woodman",
};

// Particles that join a following word into the surname.
static PREFIXES: Set<&'static str> = phf_set! {
    "abu", "al", "bin", "bon", "da", "dal", "de", "degli", "dei", "del",
    "dela", "della", "delle", "delli", "dello", "der", "di", "do", "dos",
    "du", "ibn", "la", "le", "san", "santa", "st", "ste", "van", "vel",
    "von",
};

// Post-nominal credentials that may be written with interior periods
// ("Q.C.", "M.D."); compared with all periods removed.
static SUFFIX_ACRONYMS: Set<&'static str> = phf_set! {
    "ae", "afc", "afm", "arrc", "bart", "bem", "bt", "cb", "cbe", "cfp",
    "cgc", "cgm", "ch", "chfc", "clu", "cm", "cmg", "cpa", "cpm", "csi",
    "csm", "cvo", "dbe", "dcb", "dcm", "dcmg", "dcvo", "dds", "dfc",
    "dfm", "dmd", "do", "dpm", "dsc", "dsm", "dso", "dvm", "ed", "erd",
    "esq", "gbe", "gc", "gcb", "gcie", "gcmg", "gcsi", "gcvo", "gm",
    "idsm", "iom", "iso", "jd", "jp", "kbe", "kcb", "kcie", "kcmg",
    "kcsi", "kcvo", "kg", "kp", "kt", "lg", "lvo", "ma", "mba",
    "mbe", "mc", "md", "mm", "mp", "msc", "msm", "mvo", "obe", "obi",
    "om", "phd", "phr", "pmp", "qam", "qc", "qfsm", "qgm", "qpm", "rd",
    "ret", "rrc", "rvm", "sgm", "td", "ud", "vc", "vd", "vrd",
};

// Generational markers and spelled-out suffixes; compared with edge
// periods stripped, so "Jr." matches but "J.R." does not.
static SUFFIX_NONACRONYMS: Set<&'static str> = phf_set! {
    "esq", "esquire", "jr", "jnr", "junior", "sr", "snr", "senior", "2",
    "i", "ii", "iii", "iv", "v",
};

// Joining words linking adjacent name pieces.
static CONJUNCTIONS: Set<&'static str> = phf_set! {
    "&", "and", "e", "et", "of", "the", "und", "y",
};

static DEFAULT: Lazy<Lexicon> = Lazy::new(Lexicon::new);

/// Lowercase with edge periods stripped, the normal form for titles,
/// prefixes, conjunctions, and non-acronym suffixes.
fn loose_key(word: &str) -> Cow<str> {
    let trimmed = word.trim_matches('.');

    if trimmed.chars().any(char::is_uppercase) {
        Cow::Owned(trimmed.to_lowercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// Lowercase with all periods removed, the normal form for acronym
/// suffixes ("q.c." and "qc" compare equal).
fn acronym_key(word: &str) -> Cow<str> {
    if word.contains('.') || word.chars().any(char::is_uppercase) {
        Cow::Owned(
            word.chars()
                .filter(|&c| c != '.')
                .flat_map(char::to_lowercase)
                .collect(),
        )
    } else {
        Cow::Borrowed(word)
    }
}

/// The five lexical sets driving classification.
///
/// A fresh value starts from the built-in seed data; all sets accept
/// additional entries at runtime. Membership tests normalize their
/// argument exactly the way entries are normalized on insertion, so
/// surface forms with periods or mixed case match their seeded
/// counterparts.
#[derive(Clone, Debug)]
pub struct Lexicon {
    titles: HashSet<CompactString>,
    prefixes: HashSet<CompactString>,
    suffix_acronyms: HashSet<CompactString>,
    suffix_nonacronyms: HashSet<CompactString>,
    conjunctions: HashSet<CompactString>,
}

impl Lexicon {
    /// A lexicon seeded with the built-in title, prefix, suffix, and
    /// conjunction sets.
    pub fn new() -> Lexicon {
        let collect = |set: &Set<&'static str>| {
            set.iter().map(|&s| CompactString::from(s)).collect()
        };

        Lexicon {
            titles: collect(&TITLES),
            prefixes: collect(&PREFIXES),
            suffix_acronyms: collect(&SUFFIX_ACRONYMS),
            suffix_nonacronyms: collect(&SUFFIX_NONACRONYMS),
            conjunctions: collect(&CONJUNCTIONS),
        }
    }

    /// A lexicon with no entries at all; every token classifies as a
    /// plain name word until sets are filled in.
    pub fn empty() -> Lexicon {
        Lexicon {
            titles: HashSet::new(),
            prefixes: HashSet::new(),
            suffix_acronyms: HashSet::new(),
            suffix_nonacronyms: HashSet::new(),
            conjunctions: HashSet::new(),
        }
    }

    pub fn insert_title(&mut self, word: &str) {
        self.titles.insert(loose_key(word).as_ref().into());
    }

    pub fn insert_prefix(&mut self, word: &str) {
        self.prefixes.insert(loose_key(word).as_ref().into());
    }

    pub fn insert_suffix_acronym(&mut self, word: &str) {
        self.suffix_acronyms.insert(acronym_key(word).as_ref().into());
    }

    pub fn insert_suffix_nonacronym(&mut self, word: &str) {
        self.suffix_nonacronyms.insert(loose_key(word).as_ref().into());
    }

    pub fn insert_conjunction(&mut self, word: &str) {
        self.conjunctions.insert(loose_key(word).as_ref().into());
    }

    pub fn is_title(&self, word: &str) -> bool {
        self.titles.contains(loose_key(word).as_ref())
    }

    pub fn is_prefix(&self, word: &str) -> bool {
        self.prefixes.contains(loose_key(word).as_ref())
    }

    /// Suffix membership never applies to an initial, so a stray "V."
    /// reads as an unspelled name part rather than a numeral.
    pub fn is_suffix(&self, word: &str) -> bool {
        if is_initial(word) {
            return false;
        }

        self.suffix_acronyms.contains(acronym_key(word).as_ref())
            || self.suffix_nonacronyms.contains(loose_key(word).as_ref())
    }

    pub fn is_conjunction(&self, word: &str) -> bool {
        !is_initial(word) && self.conjunctions.contains(loose_key(word).as_ref())
    }

    /// A plain name word: not a title, prefix, or suffix, and not an
    /// initial. Used to count the "real" pieces of a name when deciding
    /// whether joining heuristics should engage.
    pub fn is_rootname(&self, word: &str) -> bool {
        !self.in_marker_sets(word) && !is_initial(word)
    }

    fn in_marker_sets(&self, word: &str) -> bool {
        let loose = loose_key(word);
        self.titles.contains(loose.as_ref())
            || self.prefixes.contains(loose.as_ref())
            || self.suffix_nonacronyms.contains(loose.as_ref())
            || self.suffix_acronyms.contains(acronym_key(word).as_ref())
    }
}

impl Default for Lexicon {
    /// Clones a lazily built copy of the seeded lexicon. Each caller gets
    /// an independent value, so concurrent parses never share mutable
    /// state.
    fn default() -> Lexicon {
        DEFAULT.clone()
    }
}

/// A copy-on-write view of a caller's lexicon, alive for one parse.
///
/// Learned entries (period-glued compounds, joined conjunction runs,
/// conjunction-title compounds) land in a private clone taken on first
/// write; the underlying lexicon is never touched. Duplicate learning is
/// idempotent by set semantics.
pub struct ScopedLexicon<'a> {
    inner: Cow<'a, Lexicon>,
}

impl<'a> ScopedLexicon<'a> {
    pub fn new(inner: Cow<'a, Lexicon>) -> ScopedLexicon<'a> {
        ScopedLexicon { inner }
    }

    pub fn is_title(&self, word: &str) -> bool {
        self.inner.is_title(word)
    }

    pub fn is_prefix(&self, word: &str) -> bool {
        self.inner.is_prefix(word)
    }

    pub fn is_suffix(&self, word: &str) -> bool {
        self.inner.is_suffix(word)
    }

    pub fn is_conjunction(&self, word: &str) -> bool {
        self.inner.is_conjunction(word)
    }

    pub fn is_rootname(&self, word: &str) -> bool {
        self.inner.is_rootname(word)
    }

    pub fn learn_title(&mut self, word: &str) {
        self.inner.to_mut().insert_title(word);
    }

    pub fn learn_suffix(&mut self, word: &str) {
        self.inner.to_mut().insert_suffix_nonacronym(word);
    }

    pub fn learn_conjunction(&mut self, word: &str) {
        self.inner.to_mut().insert_conjunction(word);
    }
}
