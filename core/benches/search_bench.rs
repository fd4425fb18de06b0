use criterion::{criterion_group, criterion_main, Criterion};
use search_core::tokenizer::split_into_words;
use search_core::{DocumentStatus, SearchServer};

const WORDS: &[&str] = &[
    "white", "cat", "fancy", "collar", "fluffy", "tail", "groomed", "dog", "expressive", "eyes", "starling", "sparrow",
];

fn corpus_text(seed: usize) -> String {
    (0..12).map(|i| WORDS[(seed * 7 + i * 3) % WORDS.len()]).collect::<Vec<_>>().join(" ")
}

fn build_server(docs: usize) -> SearchServer {
    let mut server = SearchServer::from_stop_words_text("and in on").expect("valid stop words");
    for id in 0..docs {
        server
            .add_document(id as i32, &corpus_text(id), DocumentStatus::Actual, &[(id % 10) as i32])
            .expect("valid document");
    }
    server
}

fn bench_split(c: &mut Criterion) {
    let text = corpus_text(3).repeat(50);
    c.bench_function("split_into_words", |b| b.iter(|| split_into_words(&text)));
}

fn bench_find_top(c: &mut Criterion) {
    let server = build_server(10_000);
    c.bench_function("find_top_documents_10k", |b| {
        b.iter(|| server.find_top_documents("fluffy groomed cat -sparrow"))
    });
}

criterion_group!(benches, bench_split, bench_find_top);
criterion_main!(benches);
