use rayon::prelude::*;
use std::collections::HashMap;

use crate::error::Result;
use crate::normalize::max_weight;
use crate::suggestion::{Suggestion, rank};
use crate::trie::{Trie, TrieNode, check_query};

pub const LEVENSHTEIN_LIMIT: usize = 2;

/// Classic edit distance, every insertion, deletion and substitution costing 1.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for j in 1..=b.len() {
            let cost = if ca == b[j - 1] { 0 } else { 1 };
            let ins = curr[j - 1] + 1;
            let del = prev[j] + 1;
            let sub = prev[j - 1] + cost;
            curr[j] = ins.min(del).min(sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Scores every same-length word within [`LEVENSHTEIN_LIMIT`] edits of `input`.
///
/// `score = alpha / (distance + 1) + (1 - alpha) * weight / max_weight`, where
/// the weight and its maximum come from the trie the word was found in.
/// A word found in both tries gets the mean of its two scores.
pub fn correct(corpus: &Trie, history: &Trie, input: &str, alpha: f64) -> Result<Vec<Suggestion>> {
    correct_within(corpus, history, input, alpha, LEVENSHTEIN_LIMIT)
}

pub fn correct_within(
    corpus: &Trie,
    history: &Trie,
    input: &str,
    alpha: f64,
    max_distance: usize,
) -> Result<Vec<Suggestion>> {
    let sources = [Source::new(history), Source::new(corpus)];
    correct_from(&sources, input, alpha, max_distance)
}

/// Corrects many words at once. The tries are only read, so the words are
/// spread across the rayon pool. Each trie's maximum weight is found once.
pub fn correct_words(
    corpus: &Trie,
    history: &Trie,
    words: &[String],
    alpha: f64,
) -> Vec<Result<Vec<Suggestion>>> {
    let sources = [Source::new(history), Source::new(corpus)];
    words
        .par_iter()
        .map(|word| correct_from(&sources, word, alpha, LEVENSHTEIN_LIMIT))
        .collect()
}

fn correct_from(
    sources: &[Source<'_>],
    input: &str,
    alpha: f64,
    max_distance: usize,
) -> Result<Vec<Suggestion>> {
    check_query(input)?;

    let mut candidates = Candidates::default();
    for source in sources {
        let query = Query {
            input,
            alpha,
            max_distance,
            max_weight: source.scale,
        };
        let mut buf = String::with_capacity(input.len());
        query.collect(source.trie.root(), &mut buf, &mut candidates);
    }

    let mut suggestions = candidates.list;
    rank(&mut suggestions);
    Ok(suggestions)
}

/// A trie with the divisor its weights are scored against.
struct Source<'a> {
    trie: &'a Trie,
    scale: f64,
}

impl<'a> Source<'a> {
    fn new(trie: &'a Trie) -> Self {
        let max = max_weight(trie);
        Source {
            trie,
            scale: if max > 0.0 { max } else { 1.0 },
        }
    }
}

#[derive(Default)]
struct Candidates {
    list: Vec<Suggestion>,
    index: HashMap<String, usize>, // word -> position in list
}

impl Candidates {
    fn offer(&mut self, word: &str, score: f64) {
        match self.index.get(word) {
            Some(&pos) => self.list[pos].merge(score),
            None => {
                self.index.insert(word.to_string(), self.list.len());
                self.list.push(Suggestion::new(word.to_string(), score));
            }
        }
    }
}

struct Query<'a> {
    input: &'a str,
    alpha: f64,
    max_distance: usize,
    max_weight: f64,
}

impl Query<'_> {
    fn collect(&self, node: &TrieNode, buf: &mut String, out: &mut Candidates) {
        if buf.len() == self.input.len() {
            if node.is_word() {
                let distance = levenshtein_distance(buf.as_str(), self.input);
                if distance <= self.max_distance {
                    out.offer(buf.as_str(), self.score(distance, node.weight()));
                }
            }
            return;
        }
        for (letter, child) in node.children() {
            buf.push(letter as char);
            self.collect(child, buf, out);
            buf.pop();
        }
    }

    fn score(&self, distance: usize, weight: f64) -> f64 {
        let closeness = 1.0 / (distance as f64 + 1.0);
        self.alpha * closeness + (1.0 - self.alpha) * (weight / self.max_weight)
    }
}
