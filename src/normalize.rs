use crate::trie::{Trie, TrieNode};

/// Largest weight carried by any node, internal nodes included (they hold 0).
pub fn max_weight(trie: &Trie) -> f64 {
    node_max_weight(trie.root())
}

fn node_max_weight(node: &TrieNode) -> f64 {
    node.children()
        .map(|(_, child)| node_max_weight(child))
        .fold(node.weight(), f64::max)
}

/// Rescales every weight to `weight / max_weight`, rounded to four decimals.
/// A zero maximum leaves the trie untouched. Run it once per trie: later
/// insertions would mix raw counts with normalized scores.
pub fn normalize(trie: &mut Trie, max_weight: f64) {
    if max_weight == 0.0 || trie.is_empty() {
        return;
    }
    normalize_node(trie.root_mut(), max_weight);
}

fn normalize_node(node: &mut TrieNode, max_weight: f64) {
    node.set_weight(round4(node.weight() / max_weight));
    for child in node.children_mut() {
        normalize_node(child, max_weight);
    }
}

fn round4(value: f64) -> f64 {
    (value * 10000.0).round() / 10000.0
}

impl Trie {
    /// Normalizes against this trie's own maximum weight.
    pub fn normalize(&mut self) {
        let max = max_weight(self);
        log::debug!("normalizing {} words against max weight {}", self.len(), max);
        normalize(self, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(node: &TrieNode, out: &mut Vec<f64>) {
        out.push(node.weight());
        for (_, child) in node.children() {
            weights(child, out);
        }
    }

    #[test]
    fn test_max_weight() {
        let mut trie = Trie::new();
        assert_eq!(max_weight(&trie), 0.0);
        trie.insert_with_count("cat", 3.0).unwrap();
        trie.insert("car").unwrap();
        trie.insert_with_count("dog", 7.0).unwrap();
        assert_eq!(max_weight(&trie), 7.0);
    }

    #[test]
    fn test_normalize_bounds() {
        let mut trie = Trie::new();
        for (word, count) in [("cat", 3.0), ("car", 1.0), ("can", 1.0), ("dog", 7.0)] {
            trie.insert_with_count(word, count).unwrap();
        }
        trie.normalize();

        let mut all = Vec::new();
        weights(trie.root(), &mut all);
        assert!(all.iter().all(|w| (0.0..=1.0).contains(w)));
        assert_eq!(trie.lookup("dog"), Some(1.0));
        assert_eq!(trie.lookup("cat"), Some(0.4286));
        assert_eq!(trie.lookup("car"), Some(0.1429));
        assert_eq!(trie.find_prefix_node("ca").unwrap().weight(), 0.0);
    }

    #[test]
    fn test_normalize_empty_trie_is_noop() {
        let mut trie = Trie::new();
        trie.normalize();
        assert!(trie.is_empty());
        assert_eq!(trie.root().weight(), 0.0);
    }

    #[test]
    fn test_normalize_with_zero_max_is_noop() {
        let mut trie = Trie::new();
        trie.insert_with_count("cat", 4.0).unwrap();
        normalize(&mut trie, 0.0);
        assert_eq!(trie.lookup("cat"), Some(4.0));
    }

    #[test]
    fn test_renormalizing_with_unit_max_is_stable() {
        let mut trie = Trie::new();
        trie.insert_with_count("cat", 2.0).unwrap();
        trie.insert_with_count("cow", 6.0).unwrap();
        trie.normalize();
        let once = trie.lookup("cat");
        normalize(&mut trie, 1.0);
        assert_eq!(trie.lookup("cat"), once);
        assert_eq!(trie.lookup("cow"), Some(1.0));
    }
}
