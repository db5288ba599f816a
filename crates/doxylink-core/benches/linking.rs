//! Benchmark suite for document linking
//!
//! Measures:
//! - index construction for growing projects
//! - linking one document against the built-in catalog and a project index
//! - symbol scanning alone

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use doxylink_core::matcher::SymbolMatcher;
use doxylink_core::{
    Document, Entity, EntityIndex, EntityKind, ExternalSymbolCatalog, LinkOptions, TextLinker,
};

/// Generate a project with the specified number of entities
fn generate_entities(count: usize) -> Vec<Entity> {
    (0..count)
        .map(|i| {
            let kind = EntityKind::ALL[i % 3];
            let name = match kind {
                EntityKind::Class => format!("MyClass{i}"),
                EntityKind::Category => format!("NSString(Extras{i})"),
                EntityKind::Protocol => format!("MyProtocol{i}Delegate"),
            };
            Entity::new(name, kind)
        })
        .collect()
}

/// Generate a document body mentioning project and framework symbols
fn generate_document(paragraphs: usize, entities: usize) -> Document {
    let mut body = String::from("<object kind=\"class\"><name>MyClass0</name><file>MyClass0.h</file><description>");
    for i in 0..paragraphs {
        body.push_str(&format!(
            "<para>MyClass{} keeps an NSMutableArray of MyProtocol{}Delegate objects and draws into an NSView &amp; an NSWindow.</para>",
            i % entities.max(1),
            (i * 7) % entities.max(1),
        ));
    }
    body.push_str("</description></object>");
    Document::from_xml("bench.xml", body).expect("generated document is well-formed")
}

/// Benchmark index construction
fn bench_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [100, 1_000, 10_000].iter() {
        let entities = generate_entities(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entities, |b, entities| {
            b.iter(|| black_box(EntityIndex::from_entities(entities.iter().cloned())));
        });
    }

    group.finish();
}

/// Benchmark linking a single document
fn bench_link_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("link_document");
    let catalog = ExternalSymbolCatalog::cocoa();
    let index = EntityIndex::from_entities(generate_entities(1_000));

    for paragraphs in [10, 100, 1_000].iter() {
        let document = generate_document(*paragraphs, 1_000);
        let linker = TextLinker::new(&index, &catalog, LinkOptions::default());
        group.throughput(Throughput::Bytes(document.body.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &document, |b, document| {
            b.iter(|| black_box(linker.link(document)));
        });
    }

    group.finish();
}

/// Benchmark relinking already linked output
fn bench_relink(c: &mut Criterion) {
    let catalog = ExternalSymbolCatalog::cocoa();
    let index = EntityIndex::from_entities(generate_entities(1_000));
    let linker = TextLinker::new(&index, &catalog, LinkOptions::default());

    let mut document = generate_document(100, 1_000);
    let linked = linker.link(&document).expect("document has a kind");
    document.apply(linked);

    c.bench_function("relink_100_paragraphs", |b| {
        b.iter(|| black_box(linker.link(&document)));
    });
}

/// Benchmark raw symbol scanning
fn bench_matcher(c: &mut Criterion) {
    let matcher = SymbolMatcher::from_symbols(generate_entities(10_000).into_iter().map(|e| e.name));
    let text = "MyClass42 and MyProtocol5Delegate next to unrelated words ".repeat(1_000);
    let regions = [0..text.len()];

    c.bench_function("matcher_find_all", |b| {
        b.iter(|| black_box(matcher.find_all(&text, &regions)));
    });
}

criterion_group!(
    benches,
    bench_index_build,
    bench_link_document,
    bench_relink,
    bench_matcher,
);

criterion_main!(benches);
