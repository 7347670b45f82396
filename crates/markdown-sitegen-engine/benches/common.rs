// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold** and *italic* content.\n\n- Bullet point\n- Another item\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_complex_markdown(sections: usize, depth: usize) -> String {
    let mut content = String::new();
    for i in 0..sections {
        content.push_str(&format!("## Section {i}\n\n"));
        content.push_str(&format!(
            "Text with `code {i}`, a [link](/page/{i}) and ![img](/img/{i}.png).\n\n"
        ));
        for n in 1..=depth {
            content.push_str(&format!("{n}. Ordered item {n} with *emphasis*\n"));
        }
        content.push('\n');
        let quote = ">".repeat(depth.max(1));
        content.push_str(&format!("{quote} Quoted **text** at depth {depth}\n\n"));
    }
    content
}

#[allow(dead_code)]
pub fn generate_inline_heavy_paragraph(spans: usize) -> String {
    (0..spans)
        .map(|i| format!("plain **b{i}** *i{i}* `c{i}` [l{i}](/u/{i})"))
        .collect::<Vec<_>>()
        .join(" ")
}
