use autofill::{Trie, correct, correct_words, insert_from_reader};
use criterion::{Criterion, criterion_group, criterion_main};
use std::io::Cursor;

const SAMPLE: &str = "This is a short sentence with some misspelled words. It is used for \
                      testing the spell checker functionality over a small corpus of text \
                      that repeats common words like the and there and their.";

fn bench_autocorrect(c: &mut Criterion) {
    let mut corpus = Trie::new();
    for _ in 0..100 {
        let _ = insert_from_reader(&mut corpus, Cursor::new(SAMPLE));
    }
    corpus.normalize();
    let history = Trie::new();

    let text = "This is a short sntence with some misspeled wrds";
    let words: Vec<String> = autofill::tokens(text).collect();

    c.bench_function("correct_single_word", |b| {
        b.iter(|| {
            let _ = correct(&corpus, &history, "sntence", 0.7);
        })
    });
    c.bench_function("correct_words", |b| {
        b.iter(|| {
            let _ = correct_words(&corpus, &history, &words, 0.7);
        })
    });
}

criterion_group!(benches, bench_autocorrect);
criterion_main!(benches);
