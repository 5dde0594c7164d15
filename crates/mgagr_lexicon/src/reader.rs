//! Line-oriented reader for lexicon text.
//!
//! Every non-blank line is one record. The first record names the start
//! category; each later record is either an entry (`::`) or a morpheme
//! equation (`==`). Anything else aborts loading with the offending line.

use std::fs;
use std::path::Path;

use mgagr_foundation::{
    Entry, Error, ErrorContext, ErrorKind, Feature, FeatureBundle, Morpheme, MorphemeTable,
    Polarity, Result, Slot,
};
use tracing::debug;

use crate::lexicon::Lexicon;

/// Starts a comment running to the end of the line.
const COMMENT: char = '/';
/// Separates an entry's semantic key from its slots.
const ENTRY_SEP: &str = "::";
/// Separates a morpheme sequence from its surface string.
const EQUATION_SEP: &str = "==";
/// Joins morphemes in an equation.
const MORPHEME_JOIN: char = '+';

/// Parses lexicon source text.
///
/// # Errors
///
/// Returns an error for a missing or malformed start category, or for any
/// line that is neither an entry nor a morpheme equation.
pub fn parse_lexicon(source: &str) -> Result<Lexicon> {
    LexiconReader::new(source).read()
}

/// Reads and parses a lexicon file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse. Parse
/// errors carry the file name as context.
pub fn load_lexicon<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read '{}': {e}", path.display())))?;
    parse_lexicon(&source).map_err(|e| {
        let line = match &e.kind {
            ErrorKind::ParseError { line, .. } => Some(*line),
            _ => None,
        };
        let mut context = ErrorContext::new().with_source(path.display().to_string());
        if let Some(line) = line {
            context = context.with_line(line);
        }
        e.with_context(context)
    })
}

/// Reader over the lines of one lexicon source.
pub struct LexiconReader<'src> {
    source: &'src str,
}

impl<'src> LexiconReader<'src> {
    /// Creates a reader for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source }
    }

    /// Parses every record.
    ///
    /// # Errors
    ///
    /// See [`parse_lexicon`].
    pub fn read(&self) -> Result<Lexicon> {
        let mut start = None;
        let mut entries = Vec::new();
        let mut table = MorphemeTable::new();

        for (number, line) in self.records() {
            if start.is_none() {
                start = Some(parse_start(line)?);
            } else if line.contains(ENTRY_SEP) {
                entries.push(parse_entry(number, line)?);
            } else if line.contains(EQUATION_SEP) {
                let (sequence, surface) = parse_equation(number, line)?;
                table.register(sequence, surface);
            } else {
                return Err(Error::parse("cannot parse line", number, line));
            }
        }

        let start = start.ok_or_else(|| Error::new(ErrorKind::MissingStartCategory))?;
        debug!(
            start = %start,
            entries = entries.len(),
            equations = table.len(),
            "lexicon parsed"
        );
        Ok(Lexicon::new(start, entries, table))
    }

    /// Non-blank lines with comments removed, numbered from 1.
    fn records(&self) -> impl Iterator<Item = (usize, &'src str)> {
        self.source.lines().enumerate().filter_map(|(i, raw)| {
            let line = raw.split(COMMENT).next().unwrap_or_default().trim();
            (!line.is_empty()).then_some((i + 1, line))
        })
    }
}

fn parse_start(line: &str) -> Result<String> {
    let symbol = line.trim_matches(';').trim();
    if symbol.is_empty() || symbol.contains(char::is_whitespace) {
        return Err(Error::new(ErrorKind::InvalidStartCategory(line.to_string())));
    }
    Ok(symbol.to_string())
}

/// Strips the terminating `;`, which must be the last character.
fn terminated<'a>(number: usize, line: &'a str, body: &'a str) -> Result<&'a str> {
    body.trim_end()
        .strip_suffix(';')
        .ok_or_else(|| Error::parse("missing terminating ';'", number, line))
}

fn parse_entry(number: usize, line: &str) -> Result<Entry> {
    let Some((key, rest)) = line.split_once(ENTRY_SEP) else {
        return Err(Error::parse("missing '::'", number, line));
    };
    let body = terminated(number, line, rest)?;
    let slots = body
        .split_whitespace()
        .map(|token| parse_slot(number, line, token))
        .collect::<Result<Vec<_>>>()?;
    Ok(Entry::new(key.trim(), slots))
}

fn is_marker(c: char) -> bool {
    Polarity::MARKER_CHARS.contains(&c)
}

/// Parses one slot token: `<prefix><name><suffix>[agreement]`.
fn parse_slot(number: usize, line: &str, token: &str) -> Result<Slot> {
    let (head, agreement) = match token.find('[') {
        Some(at) => (&token[..at], Some(&token[at..])),
        None => (token, None),
    };

    let name_start = head.find(|c: char| !is_marker(c)).unwrap_or(head.len());
    let name_end = head[name_start..]
        .find(is_marker)
        .map_or(head.len(), |i| name_start + i);
    let (prefix, name, suffix) = (
        &head[..name_start],
        &head[name_start..name_end],
        &head[name_end..],
    );

    if name.is_empty() {
        return Err(Error::parse(format!("missing slot name in '{token}'"), number, line));
    }
    if suffix.contains(|c: char| !is_marker(c)) {
        return Err(Error::parse(format!("malformed slot '{token}'"), number, line));
    }
    let polarity = Polarity::from_markers(prefix, suffix)
        .map_err(|_| Error::parse(format!("unknown feature type in '{token}'"), number, line))?;

    let slot = Slot::new(polarity, slot_name(name));
    match agreement {
        None => Ok(slot),
        Some(text) => {
            let inner = text
                .strip_prefix('[')
                .and_then(|t| t.strip_suffix(']'))
                .ok_or_else(|| {
                    Error::parse(format!("malformed agreement in '{token}'"), number, line)
                })?;
            let features = parse_pairs(number, line, inner)?
                .into_iter()
                .map(|(n, v)| Feature::lexical(n, v));
            Ok(slot.with_bundle(FeatureBundle::new(features)))
        }
    }
}

/// Names written only with digits get an `F` prefix.
fn slot_name(name: &str) -> String {
    if name.chars().all(|c| c.is_ascii_digit()) {
        format!("F{name}")
    } else {
        name.to_string()
    }
}

/// Parses `name:value,name:value`; the empty string yields no pairs.
fn parse_pairs<'a>(number: usize, line: &str, text: &'a str) -> Result<Vec<(&'a str, &'a str)>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|pair| {
            let (name, value) = pair
                .split_once(':')
                .ok_or_else(|| Error::parse(format!("expected name:value, got '{pair}'"), number, line))?;
            let (name, value) = (name.trim(), value.trim());
            if name.is_empty() || value.is_empty() {
                return Err(Error::parse(format!("empty feature in '{pair}'"), number, line));
            }
            Ok((name, value))
        })
        .collect()
}

fn parse_equation(number: usize, line: &str) -> Result<(Vec<Morpheme>, String)> {
    let Some((items, rest)) = line.rsplit_once(EQUATION_SEP) else {
        return Err(Error::parse("missing '=='", number, line));
    };
    let surface = terminated(number, line, rest)?.trim().to_string();

    let sequence = items
        .split(MORPHEME_JOIN)
        .map(|item| parse_morpheme(number, line, item.trim()))
        .collect::<Result<Vec<_>>>()?;
    Ok((sequence, surface))
}

/// Parses one morpheme: `key[name:value,...]`.
fn parse_morpheme(number: usize, line: &str, item: &str) -> Result<Morpheme> {
    let malformed = || Error::parse(format!("malformed morpheme '{item}'"), number, line);
    let (key, rest) = item.split_once('[').ok_or_else(malformed)?;
    let inner = rest.strip_suffix(']').ok_or_else(malformed)?;
    if inner.contains(['[', ']']) {
        return Err(malformed());
    }
    let features = parse_pairs(number, line, inner)?
        .into_iter()
        .map(|(n, v)| Feature::new(n, v));
    Ok(Morpheme::new(key.trim(), FeatureBundle::new(features)))
}
