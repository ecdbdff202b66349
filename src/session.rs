use std::path::Path;

use crate::complete::complete;
use crate::config::{Config, Mode};
use crate::correct::correct_within;
use crate::error::Result;
use crate::ingest::{insert_from_file, split_session_line};
use crate::suggestion::Suggestion;
use crate::trie::Trie;

/// A corpus trie plus the words typed so far.
///
/// The corpus is normalized once when the session is created. History keeps
/// raw counts and is normalized on a copy for every request, so typing more
/// never mixes counts with scores.
#[derive(Debug, Clone)]
pub struct Session {
    corpus: Trie,
    history: Trie,
    config: Config,
}

impl Session {
    pub fn new(mut corpus: Trie, config: Config) -> Self {
        corpus.normalize();
        let history = Trie::with_max_word_len(config.max_word_len);
        Session {
            corpus,
            history,
            config,
        }
    }

    pub fn from_corpus_file<P: AsRef<Path>>(path: P, config: Config) -> Result<Self> {
        let mut corpus = Trie::with_max_word_len(config.max_word_len);
        let stats = insert_from_file(&mut corpus, path)?;
        log::info!(
            "corpus ready: {} words from {} tokens ({} rejected)",
            corpus.len(),
            stats.inserted,
            stats.rejected
        );
        Ok(Self::new(corpus, config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn corpus(&self) -> &Trie {
        &self.corpus
    }

    pub fn history(&self) -> &Trie {
        &self.history
    }

    /// Adds typed words to the history. Words that cannot be stored are skipped.
    pub fn record<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            if let Err(e) = self.history.insert(word.as_ref()) {
                log::warn!("not recording '{}': {}", word.as_ref(), e);
            }
        }
    }

    /// Records every word of `line` but the last, then answers for the last one.
    pub fn respond(&mut self, mode: Mode, line: &str) -> Result<Vec<Suggestion>> {
        let line = split_session_line(line)?;
        self.record(&line.history);
        match mode {
            Mode::Fill => self.autofill(&line.query),
            Mode::Correct => self.autocorrect(&line.query),
        }
    }

    pub fn autofill(&self, prefix: &str) -> Result<Vec<Suggestion>> {
        let history = self.history_snapshot();
        complete(&self.corpus, &history, prefix, self.config.limit)
    }

    pub fn autocorrect(&self, word: &str) -> Result<Vec<Suggestion>> {
        let history = self.history_snapshot();
        let mut suggestions = correct_within(
            &self.corpus,
            &history,
            word,
            self.config.alpha,
            self.config.max_distance,
        )?;
        suggestions.truncate(self.config.limit);
        Ok(suggestions)
    }

    fn history_snapshot(&self) -> Trie {
        let mut history = self.history.clone();
        history.normalize();
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ingest::insert_from_reader;
    use std::io::Cursor;

    fn session(text: &str, config: Config) -> Session {
        let mut corpus = Trie::with_max_word_len(config.max_word_len);
        insert_from_reader(&mut corpus, Cursor::new(text)).unwrap();
        Session::new(corpus, config)
    }

    #[test]
    fn test_corpus_is_normalized_once() {
        let s = session("the the the the then", Config::default());
        assert_eq!(s.corpus().lookup("the"), Some(1.0));
        assert_eq!(s.corpus().lookup("then"), Some(0.25));
    }

    #[test]
    fn test_fill_prefers_words_typed_in_session() {
        let mut s = session("then them", Config::default());
        let list = s.respond(Mode::Fill, "thermal the").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].word, "thermal");
        assert_eq!(list[0].score, 2.0);
        // history only holds raw counts
        assert_eq!(s.history().lookup("thermal"), Some(1.0));
        assert_eq!(s.history().lookup("the"), None);
    }

    #[test]
    fn test_fill_respects_limit() {
        let config = Config {
            limit: 2,
            ..Config::default()
        };
        let mut s = session("cab can car cat", config);
        assert_eq!(s.respond(Mode::Fill, "ca").unwrap().len(), 2);
    }

    #[test]
    fn test_correct_through_session() {
        let mut s = session("the the the the the hte", Config::default());
        let list = s.respond(Mode::Correct, "I typed teh").unwrap();
        assert_eq!(list[0].word, "the");
        assert!(list.iter().all(|x| x.word.len() == 3));
        assert!(s.history().contains("typed"));
    }

    #[test]
    fn test_no_valid_word() {
        let mut s = session("word", Config::default());
        assert!(matches!(s.respond(Mode::Fill, "123 !!"), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_no_suggestions_is_empty() {
        let mut s = session("alpha beta", Config::default());
        assert!(s.respond(Mode::Fill, "zzz").unwrap().is_empty());
        assert!(s.respond(Mode::Correct, "qqqqqqq").unwrap().is_empty());
    }

    #[test]
    fn test_record_skips_long_words() {
        let config = Config {
            max_word_len: 4,
            ..Config::default()
        };
        let mut s = session("tiny", config);
        s.record(&["ok", "toolong"]);
        assert!(s.history().contains("ok"));
        assert!(!s.history().contains("toolong"));
    }
}
