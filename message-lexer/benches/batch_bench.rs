use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use message_lexer::{Marker, MarkerGroup, MessageParser, ParserOptions};

// --- Data Generation ---

fn generate_messages(count: usize) -> Vec<String> {
    let templates = [
        "deploy my-service --env=prod --!dry-run -v",
        "say \"hello there, general\" --channel:general",
        "eval ```let x = 1;\nlet y = 2;``` --lang=rust",
        "ban someone \\-not-a-flag “for spamming” --days=7 --silent=TRUE",
        "remind me   in 10 minutes\tto stretch --repeat=false",
        "—verbose search ‘nothing special’ 'quoted' `ticked` -!color",
    ];
    (0..count)
        .map(|i| format!("{} --id={}", templates[i % templates.len()], i))
        .collect()
}

fn generate_long_message(size_kb: usize) -> String {
    let mut s = String::with_capacity(size_kb * 1024);
    let mut i = 0usize;
    while s.len() < size_kb * 1024 {
        s.push_str("word \"quoted words here\" \\escaped ");
        s.push_str(&format!("--flag{i}=value{i} -bool{i}\n"));
        i += 1;
    }
    s
}

// --- Benchmarks ---

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_batch");

    let messages = generate_messages(1_000);
    let total: usize = messages.iter().map(String::len).sum();
    let parser = MessageParser::new();

    group.throughput(Throughput::Bytes(total as u64));
    group.bench_function("chat_1000_messages", |b| {
        b.iter(|| {
            for message in &messages {
                let _ = black_box(parser.parse(message));
            }
        })
    });

    let custom = MessageParser::with_options(
        &ParserOptions::new()
            .content_marker(Marker::new("<br />", MarkerGroup::Newline))
            .content_marker(Marker::delimited("<s>", "</s>", MarkerGroup::String)),
    )
    .unwrap_or_default();
    group.bench_function("chat_1000_messages_custom_markers", |b| {
        b.iter(|| {
            for message in &messages {
                let _ = black_box(custom.parse(message));
            }
        })
    });

    let long_text = generate_long_message(100);
    group.throughput(Throughput::Bytes(long_text.len() as u64));
    group.bench_function("single_100kb", |b| {
        b.iter(|| {
            let _ = black_box(parser.parse(long_text.as_str()));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parser);
criterion_main!(benches);
