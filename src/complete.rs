use crate::error::Result;
use crate::suggestion::{Suggestion, rank};
use crate::trie::{Trie, TrieNode, check_query};

/// Weight of one word as seen through both tries.
///
/// Words known to both are averaged, words only the session has typed are
/// boosted twofold, everything else keeps its corpus weight.
pub fn combined_weight(history: Option<&TrieNode>, corpus: Option<&TrieNode>) -> f64 {
    let history_weight = history.map_or(0.0, TrieNode::weight);
    let corpus_weight = corpus.map_or(0.0, TrieNode::weight);
    if history_weight > 0.0 && corpus_weight > 0.0 {
        (history_weight + corpus_weight) / 2.0
    } else if history_weight > 0.0 {
        history_weight * 2.0
    } else {
        corpus_weight
    }
}

/// Completes `prefix` against the corpus and history tries.
///
/// Collects the first `limit` words below the prefix in alphabetical
/// pre-order, then ranks them by combined weight.
pub fn complete(
    corpus: &Trie,
    history: &Trie,
    prefix: &str,
    limit: usize,
) -> Result<Vec<Suggestion>> {
    check_query(prefix)?;
    Ok(complete_from(
        corpus.find_prefix_node(prefix),
        history.find_prefix_node(prefix),
        prefix,
        limit,
    ))
}

/// Same as [`complete`] but starting from already resolved prefix nodes.
pub fn complete_from(
    corpus: Option<&TrieNode>,
    history: Option<&TrieNode>,
    prefix: &str,
    limit: usize,
) -> Vec<Suggestion> {
    let mut out = Vec::new();
    if limit == 0 || (corpus.is_none() && history.is_none()) {
        return out;
    }
    let mut buf = prefix.to_string();
    collect(corpus, history, &mut buf, limit, &mut out);
    rank(&mut out);
    out
}

fn collect(
    corpus: Option<&TrieNode>,
    history: Option<&TrieNode>,
    buf: &mut String,
    limit: usize,
    out: &mut Vec<Suggestion>,
) {
    if out.len() >= limit {
        return;
    }
    let is_word = corpus.is_some_and(TrieNode::is_word) || history.is_some_and(TrieNode::is_word);
    if is_word {
        let mut suggestion = Suggestion::new(buf.clone(), combined_weight(history, corpus));
        suggestion.merged = has_weight(history) && has_weight(corpus);
        out.push(suggestion);
    }

    for letter in b'a'..=b'z' {
        let next_corpus = corpus.and_then(|node| node.child(letter));
        let next_history = history.and_then(|node| node.child(letter));
        if next_corpus.is_none() && next_history.is_none() {
            continue;
        }
        buf.push(letter as char);
        collect(next_corpus, next_history, buf, limit, out);
        buf.pop();
        if out.len() >= limit {
            return;
        }
    }
}

fn has_weight(node: Option<&TrieNode>) -> bool {
    node.is_some_and(|n| n.weight() > 0.0)
}
