use criterion::{Criterion, criterion_group, criterion_main};
use markdown_sitegen_engine::{markdown_to_html_string, text_to_text_nodes};

fn generate_markdown_content(sections: usize) -> String {
    let mut content = String::new();
    for i in 0..sections {
        content.push_str(&format!("## Section {i}\n\n"));
        content.push_str("Some **bold** text, some _italic_ text and a `code span` with a [link](https://example.com).\nA second line for the same paragraph.\n\n");
        content.push_str("- first item\n- second **item**\n- third item\n\n");
        content.push_str("1. one\n2. two\n3. three\n\n");
        content.push_str("> a quoted line\n> and another\n\n");
        content.push_str("```\nlet x = 1;\n```\n\n");
    }
    content
}

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = generate_markdown_content(100);
    group.bench_function("markdown_to_html_string", |b| {
        b.iter(|| {
            let html = markdown_to_html_string(std::hint::black_box(&content)).unwrap();
            std::hint::black_box(html);
        });
    });

    let line = "Text with **bold**, _italic_, `code`, ![image](a.png) and [link](b.html). ".repeat(50);
    group.bench_function("text_to_text_nodes", |b| {
        b.iter(|| {
            let spans = text_to_text_nodes(std::hint::black_box(&line)).unwrap();
            std::hint::black_box(spans);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_document);
criterion_main!(benches);
