use criterion::{Criterion, criterion_group, criterion_main};
use listings_engine::description::{parse_description, serialize_description, validate_raw};
use listings_engine::{Cmd, DropTarget, EditorState, render_description, render_html};

fn generate_description_json(repeats: usize) -> String {
    let unit = r##"{"id":"t{n}","type":"Text","text":"Bright living room with bay window","size":"lg","style":["bold"]},
{"id":"b{n}","type":"Button","text":"Book a viewing","href":"#enquiry","variant":"outline"},
{"id":"g{n}","type":"Table","headers":["Feature","Value"],"rows":[["Bedrooms","3"],["Bathrooms","2"],["Garden","South facing"]]},
{"id":"i{n}","type":"Image","src":"https://placehold.co/800x450","alt":"Front"},
{"id":"s{n}","type":"Spacer","size":"md"},
{"id":"d{n}","type":"Divider"}"##;

    let entries: Vec<String> = (0..repeats)
        .map(|n| unit.replace("{n}", &n.to_string()))
        .collect();
    format!("[{}]", entries.join(","))
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("description");
    group.sample_size(20);

    let json = generate_description_json(50);
    group.bench_function("parse", |b| {
        b.iter(|| std::hint::black_box(parse_description(std::hint::black_box(json.as_str()))));
    });
    group.bench_function("validate_raw", |b| {
        b.iter(|| std::hint::black_box(validate_raw(std::hint::black_box(&json))));
    });

    let blocks = parse_description(json.as_str());
    group.bench_function("serialize", |b| {
        b.iter(|| std::hint::black_box(serialize_description(std::hint::black_box(&blocks))));
    });
    group.bench_function("render_html", |b| {
        b.iter(|| std::hint::black_box(render_html(&render_description(&blocks))));
    });

    group.finish();
}

fn bench_editor(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor");
    group.sample_size(20);

    let json = generate_description_json(50);
    group.bench_function("insert_then_reorder", |b| {
        b.iter(|| {
            let mut editor = EditorState::open(&json);
            editor.apply(Cmd::Insert {
                block_type: "Text".to_string(),
                target: DropTarget::Index(0),
            });
            if let Some(id) = editor.selected().cloned() {
                editor.apply(Cmd::Reorder { id, to: 100 });
            }
            std::hint::black_box(editor.version())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_editor);
criterion_main!(benches);
