use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::trie::Trie;

/// Maximal runs of ASCII letters, lowercased. Anything else separates words.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|run| !run.is_empty())
        .map(str::to_ascii_lowercase)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    pub inserted: usize,
    pub rejected: usize,
}

/// Inserts one token, counting it as inserted or rejected.
fn insert_token(trie: &mut Trie, stats: &mut IngestStats, word: &str) {
    match trie.insert(word) {
        Ok(()) => stats.inserted += 1,
        Err(e) => {
            log::warn!("skipping token: {}", e);
            stats.rejected += 1;
        }
    }
}

/// Streams `reader` into `trie` one byte at a time, inserting every letter run.
/// Tokens that cannot be inserted are counted and skipped. A stream without a
/// single token is reported as [`Error::EmptyInput`].
pub fn insert_from_reader<R: Read>(trie: &mut Trie, reader: R) -> Result<IngestStats> {
    let mut stats = IngestStats::default();
    let mut word = String::new();

    for byte in BufReader::new(reader).bytes() {
        let byte = byte?;
        if byte.is_ascii_alphabetic() {
            word.push(byte.to_ascii_lowercase() as char);
        } else if !word.is_empty() {
            insert_token(trie, &mut stats, &word);
            word.clear();
        }
    }
    if !word.is_empty() {
        insert_token(trie, &mut stats, &word);
    }

    log::debug!(
        "ingested {} tokens ({} rejected), {} distinct words",
        stats.inserted,
        stats.rejected,
        trie.len()
    );
    if stats.inserted + stats.rejected == 0 {
        return Err(Error::EmptyInput);
    }
    Ok(stats)
}

pub fn insert_from_file<P: AsRef<Path>>(trie: &mut Trie, path: P) -> Result<IngestStats> {
    let file = File::open(path.as_ref())?;
    log::info!("loading corpus: {}", path.as_ref().display());
    insert_from_reader(trie, file)
}

/// One typed line: every word but the last belongs to the history, the last
/// one is the word being queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLine {
    pub history: Vec<String>,
    pub query: String,
}

pub fn split_session_line(line: &str) -> Result<SessionLine> {
    let mut history: Vec<String> = tokens(line).collect();
    let query = history.pop().ok_or(Error::EmptyInput)?;
    Ok(SessionLine { history, query })
}
