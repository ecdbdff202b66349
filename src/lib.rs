/*!

Word completion and spelling correction over two weighted tries: a corpus
trie built from background text and a history trie of words typed during the
session.

```rust
use autofill::{Trie, complete, correct};

let mut corpus = Trie::new();
for word in ["the", "the", "the", "then", "they", "hte"] {
    corpus.insert(word).unwrap();
}
corpus.normalize();
let history = Trie::new();

// prefix completion, ranked by frequency
let filled = complete(&corpus, &history, "th", 3).unwrap();
assert_eq!(filled[0].word, "the");

// same-length candidates within two edits, blending closeness and frequency
let corrected = correct(&corpus, &history, "thw", 0.7).unwrap();
assert_eq!(corrected[0].word, "the");
```

*/

mod complete;
mod config;
mod correct;
mod error;
mod ingest;
mod normalize;
mod session;
mod suggestion;
mod trie;

pub use complete::{combined_weight, complete, complete_from};
pub use config::{Config, Mode};
pub use correct::{
    LEVENSHTEIN_LIMIT, correct, correct_within, correct_words, levenshtein_distance,
};
pub use error::{Error, Result};
pub use ingest::{
    IngestStats, SessionLine, insert_from_file, insert_from_reader, split_session_line, tokens,
};
pub use normalize::{max_weight, normalize};
pub use session::Session;
pub use suggestion::Suggestion;
pub use trie::{DEFAULT_MAX_WORD_LEN, Trie, TrieNode};
