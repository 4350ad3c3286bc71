//! Decompose free-form human name strings into canonical components.
//!
//! `nameparts` takes inconsistently formatted name strings - varied
//! orderings, punctuation, honorifics, compound surnames - and produces
//! a structured record with six slots: title, first, middle, last,
//! suffix, and nickname. It is built for record-linkage and
//! data-cleaning pipelines that need comparable name records rather
//! than linguistic understanding.
//!
//! ```
//! use nameparts::ParsedName;
//!
//! let name = ParsedName::parse("Doe, Dr. John A. Jr.");
//! assert_eq!(name.title(), "dr");
//! assert_eq!(name.first(), "john");
//! assert_eq!(name.middle(), "a");
//! assert_eq!(name.last(), "doe");
//! assert_eq!(name.suffix(), "jr");
//! ```
//!
//! Parsing is rule-based and order-sensitive: nickname spans come out
//! first, commas pick one of three formats, known titles, surname
//! particles, suffixes, and conjunctions drive token joining, and the
//! remaining pieces fall into slots by position. Every input yields a
//! value; garbage degrades to a result with empty slots and
//! [`ParsedName::is_unparsable`] set, and such values deliberately never
//! compare equal to anything.
//!
//! The recognized word sets live in a [`Lexicon`] and can be extended
//! at runtime through a [`Config`]; parsing itself never mutates the
//! caller's lexicon, so one configuration can serve concurrent parses.

mod classify;
mod eq_hash;
mod error;
mod join;
mod lexicon;
mod nickname;
mod normalize;
mod parse;
mod segment;
#[cfg(feature = "serialization")]
mod serialization;

pub use crate::error::Error;
pub use crate::lexicon::Lexicon;

use crate::parse::Words;
use compact_str::CompactString;
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The default rendering template; decorative punctuation around empty
/// slots is removed after substitution.
pub const DEFAULT_STRING_FORMAT: &str = "{title} {first} {middle} {last} {suffix} ({nickname})";

static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Options consumed by the parser: the lexicon sets, the rendering
/// template, and whether input cleaning is skipped.
#[derive(Clone, Debug)]
pub struct Config {
    /// Recognized titles, prefixes, suffixes, and conjunctions.
    pub lexicon: Lexicon,
    /// Template used by [`ParsedName`]'s `Display` impl.
    pub string_format: String,
    /// Bypass transliteration, symbol stripping, and lowercasing,
    /// preserving case, diacritics, and digits. Whitespace is still
    /// collapsed.
    pub skip_cleaning: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            lexicon: Lexicon::default(),
            string_format: DEFAULT_STRING_FORMAT.to_string(),
            skip_cleaning: false,
        }
    }
}

/// The closed set of name slots, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    Title,
    First,
    Middle,
    Last,
    Suffix,
    Nickname,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Title,
        Slot::First,
        Slot::Middle,
        Slot::Last,
        Slot::Suffix,
        Slot::Nickname,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Slot::Title => "title",
            Slot::First => "first",
            Slot::Middle => "middle",
            Slot::Last => "last",
            Slot::Suffix => "suffix",
            Slot::Nickname => "nickname",
        }
    }
}

impl FromStr for Slot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Slot, Error> {
        match s {
            "title" => Ok(Slot::Title),
            "first" => Ok(Slot::First),
            "middle" => Ok(Slot::Middle),
            "last" => Ok(Slot::Last),
            "suffix" => Ok(Slot::Suffix),
            "nickname" => Ok(Slot::Nickname),
            _ => Err(Error::UnknownSlot(s.to_string())),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value assignable to a name slot: nothing, one string (split on
/// whitespace), or an explicit word list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlotValue {
    Null,
    Text(String),
    List(Vec<String>),
}

impl From<&str> for SlotValue {
    fn from(s: &str) -> SlotValue {
        SlotValue::Text(s.to_string())
    }
}

impl From<String> for SlotValue {
    fn from(s: String) -> SlotValue {
        SlotValue::Text(s)
    }
}

impl From<Vec<String>> for SlotValue {
    fn from(words: Vec<String>) -> SlotValue {
        SlotValue::List(words)
    }
}

/// A decomposed human name.
///
/// Slots are disjoint: no input token ever occupies two of them. Values
/// are constructed by [`parse`](ParsedName::parse) and immutable apart
/// from [`reparse`](ParsedName::reparse) (which replaces all slots
/// atomically) and explicit slot assignment.
#[derive(Clone, Debug)]
pub struct ParsedName {
    raw: String,
    title: Words,
    first: Words,
    middle: Words,
    last: Words,
    suffix: Words,
    nickname: Words,
    unparsable: bool,
    string_format: String,
}

impl ParsedName {
    /// Parse with the default configuration: the seeded lexicon, the
    /// default template, and full input cleaning.
    pub fn parse(raw: &str) -> ParsedName {
        ParsedName::parse_with(raw, &DEFAULT_CONFIG)
    }

    /// Parse against a caller-supplied configuration. The configuration
    /// is only read: compound titles, suffixes, and conjunctions
    /// discovered mid-parse are learned into a private copy that lives
    /// for this parse alone.
    pub fn parse_with(raw: &str, config: &Config) -> ParsedName {
        let slots = parse::parse(raw, config);
        let unparsable = slots.title.is_empty()
            && slots.first.is_empty()
            && slots.last.is_empty()
            && slots.suffix.is_empty()
            && slots.nickname.is_empty();

        ParsedName {
            raw: raw.to_string(),
            title: slots.title,
            first: slots.first,
            middle: slots.middle,
            last: slots.last,
            suffix: slots.suffix,
            nickname: slots.nickname,
            unparsable,
            string_format: config.string_format.clone(),
        }
    }

    /// Re-run the parse on new text, replacing every slot atomically.
    pub fn reparse(&mut self, raw: &str, config: &Config) {
        *self = ParsedName::parse_with(raw, config);
    }

    /// The input string as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True iff no token could be placed in any slot.
    pub fn is_unparsable(&self) -> bool {
        self.unparsable
    }

    pub fn title(&self) -> Cow<str> {
        self.get(Slot::Title)
    }

    pub fn first(&self) -> Cow<str> {
        self.get(Slot::First)
    }

    pub fn middle(&self) -> Cow<str> {
        self.get(Slot::Middle)
    }

    pub fn last(&self) -> Cow<str> {
        self.get(Slot::Last)
    }

    pub fn suffix(&self) -> Cow<str> {
        self.get(Slot::Suffix)
    }

    pub fn nickname(&self) -> Cow<str> {
        self.get(Slot::Nickname)
    }

    /// One slot's words, joined: suffixes with `", "` (post-nominals
    /// are conventionally comma-separated), everything else with a
    /// space.
    pub fn get(&self, slot: Slot) -> Cow<str> {
        let sep = match slot {
            Slot::Suffix => ", ",
            _ => " ",
        };
        join_words(self.words(slot), sep)
    }

    /// Replace one slot's contents. Text splits on whitespace; empty
    /// words are dropped; `Null` clears the slot. The parsability flag
    /// is recomputed.
    pub fn set_slot(&mut self, slot: Slot, value: impl Into<SlotValue>) {
        let words: Words = match value.into() {
            SlotValue::Null => Words::new(),
            SlotValue::Text(s) => s.split_whitespace().map(CompactString::from).collect(),
            SlotValue::List(list) => list
                .into_iter()
                .filter(|w| !w.is_empty())
                .map(CompactString::from)
                .collect(),
        };

        *self.words_mut(slot) = words;
        self.unparsable = Slot::ALL
            .iter()
            .all(|&slot| slot == Slot::Middle || self.words(slot).is_empty());
    }

    /// Replace a slot addressed by its string name; unknown names fail
    /// with [`Error::UnknownSlot`] and change nothing.
    pub fn set_slot_by_name(&mut self, name: &str, value: impl Into<SlotValue>) -> Result<(), Error> {
        let slot = Slot::from_str(name)?;
        self.set_slot(slot, value);
        Ok(())
    }

    /// Slot name to joined value, for all six slots.
    pub fn as_map(&self) -> BTreeMap<&'static str, String> {
        Slot::ALL
            .iter()
            .map(|&slot| (slot.name(), self.get(slot).into_owned()))
            .collect()
    }

    /// Non-empty slot values in canonical order (title, first, middle,
    /// last, suffix, nickname). Each call starts a fresh pass.
    pub fn values(&self) -> SlotValues {
        SlotValues { name: self, next: 0 }
    }

    /// Raw input, the slot map, and the rendered form, one per line.
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str("raw:        ");
        out.push_str(&self.raw);
        out.push('\n');

        for &slot in Slot::ALL.iter() {
            let value = self.get(slot);
            out.push_str(&format!("{:<12}{}\n", format!("{}:", slot.name()), value));
        }

        out.push_str(&format!("unparsable: {}\n", self.unparsable));
        out.push_str("rendered:   ");
        out.push_str(&self.render());
        out.push('\n');
        out
    }

    fn render(&self) -> String {
        let mut out = String::with_capacity(self.string_format.len() + 16);
        let mut rest = self.string_format.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            rest = &rest[open..];

            match rest.find('}') {
                Some(close) => {
                    match Slot::from_str(&rest[1..close]) {
                        Ok(slot) => out.push_str(&self.get(slot)),
                        // unknown placeholders render literally
                        Err(_) => out.push_str(&rest[..close + 1]),
                    }
                    rest = &rest[close + 1..];
                }
                None => break,
            }
        }
        out.push_str(rest);

        strip_decoration(out, self.nickname.is_empty())
    }

    fn words(&self, slot: Slot) -> &Words {
        match slot {
            Slot::Title => &self.title,
            Slot::First => &self.first,
            Slot::Middle => &self.middle,
            Slot::Last => &self.last,
            Slot::Suffix => &self.suffix,
            Slot::Nickname => &self.nickname,
        }
    }

    fn words_mut(&mut self, slot: Slot) -> &mut Words {
        match slot {
            Slot::Title => &mut self.title,
            Slot::First => &mut self.first,
            Slot::Middle => &mut self.middle,
            Slot::Last => &mut self.last,
            Slot::Suffix => &mut self.suffix,
            Slot::Nickname => &mut self.nickname,
        }
    }
}

impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// See [`ParsedName::values`].
pub struct SlotValues<'a> {
    name: &'a ParsedName,
    next: usize,
}

impl<'a> Iterator for SlotValues<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Cow<'a, str>> {
        while self.next < Slot::ALL.len() {
            let slot = Slot::ALL[self.next];
            self.next += 1;

            let value = self.name.get(slot);
            if !value.is_empty() {
                return Some(value);
            }
        }
        None
    }
}

fn join_words<'a>(words: &'a [CompactString], sep: &str) -> Cow<'a, str> {
    match words.len() {
        0 => Cow::Borrowed(""),
        1 => Cow::Borrowed(words[0].as_str()),
        _ => Cow::Owned(words.join(sep)),
    }
}

// Drop the punctuation a template leaves behind around empty slots:
// empty nickname brackets, doubled commas, and edge separators.
fn strip_decoration(rendered: String, no_nickname: bool) -> String {
    let mut rendered = rendered;
    if no_nickname {
        for empty in ["()", "''", "\"\""] {
            if rendered.contains(empty) {
                rendered = rendered.replace(empty, "");
            }
        }
    }

    let mut out = String::with_capacity(rendered.len());
    let mut pending_space = false;
    for c in rendered.chars() {
        if c == ' ' {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    while out.contains(", ,") {
        out = out.replace(", ,", ",");
    }

    out.trim_matches(|c| c == ' ' || c == ',').to_string()
}
