//! End-to-end tests for the public normalization API.

use plainmark::{compute_stats, normalize, rule, NormalizerConfig, Pipeline, RuleId};

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .is_test(true)
        .try_init();
}

// ─────────────────────────────────────────────────────────────────────────────
// Worked Examples
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_worked_examples() {
    init_logging();

    let cases = [
        ("", ""),
        ("# Title\n\nBody", "Title\n\nBody"),
        ("**bold** and *italic*", "bold and italic"),
        ("[Docs](https://example.com)", "Docs (https://example.com)"),
        ("![alt](img.png)", "alt"),
        ("```bash\nnpm start\n```", "npm start"),
        ("- item one\n- item two", "item one\nitem two"),
        ("1. first\n2. second", "first\nsecond"),
        ("above\n---\nbelow", "above\n\nbelow"),
        ("\\*not italic\\*", "*not italic*"),
        ("a\n\n\n\nb", "a\n\nb"),
        ("| A | B |", "A B"),
    ];

    for (input, expected) in cases {
        assert_eq!(normalize(input), expected, "input: {:?}", input);
    }
}

#[test]
fn test_full_document() {
    init_logging();

    let doc = r#"# Project Setup

Welcome to **plainmark**. See the [guide](https://example.com/guide) for _details_.

## Install

```bash
cargo add plainmark
```

> **Note:** requires Rust 1.80.

| Option | Default |
|--------|---------|
| trim   | true    |

---

1. Write some Markdown
2. Call `normalize`



![logo](logo.png)
"#;

    let expected = "Project Setup\n\n\
        Welcome to plainmark. See the guide (https://example.com/guide) for details.\n\n\
        Install\n\n\
        cargo add plainmark\n\n\
        Note: requires Rust 1.80.\n\n\
        Option Default\n\
        -------- ---------\n\
        trim true\n\n\
        Write some Markdown\n\
        Call normalize\n\n\
        logo";

    assert_eq!(normalize(doc), expected);
}

// ─────────────────────────────────────────────────────────────────────────────
// Pathological Input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_unbalanced_markup_is_total() {
    let inputs = [
        "```",
        "```rust\nno closing fence",
        "**",
        "*_*_*_",
        "[[[[(((",
        "![",
        "\\",
        "> ",
        "|",
        "#",
        "\n\n\n",
    ];
    for input in inputs {
        let _ = normalize(input);
    }
}

#[test]
fn test_many_unmatched_markers() {
    let input = "*a ".repeat(20_000);
    let output = normalize(&input);
    assert!(output.len() <= input.len());

    let long_line = "x".repeat(100_000);
    assert_eq!(normalize(&long_line), long_line);
}

#[test]
fn test_long_rule_lines_are_removed() {
    for line in ["*****", "******", "_____", "-------"] {
        let text = format!("above\n{}\nbelow", line);
        assert_eq!(normalize(&text), "above\n\nbelow", "rule line: {:?}", line);
    }
}

#[test]
fn test_multi_row_table() {
    assert_eq!(normalize("| A | B |\n| C | D |"), "A B\nC D");
}

#[test]
fn test_nested_emphasis_is_best_effort() {
    assert_eq!(normalize("*a **b* c**"), "a b c");
}

#[test]
fn test_intra_word_underscores_read_as_emphasis() {
    assert_eq!(normalize("call my_var_name here"), "call myvarname here");
}

// ─────────────────────────────────────────────────────────────────────────────
// Links and Images
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_image_inside_link_depends_on_order() {
    let text = "[![img](src)](href)";
    let links = rule(RuleId::Links);
    let images = rule(RuleId::Images);

    assert_eq!(normalize(text), "img (src)");
    assert_eq!(images.apply(&links.apply(text)), "img (src)");
    assert_eq!(links.apply(&images.apply(text)), "img (href)");
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration and Stats
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_configured_pipeline() {
    let config = NormalizerConfig::from_json_sanitized(
        r#"{"disabled_rules":["links","images"],"trim_output":true}"#,
    )
    .unwrap();
    let pipeline = Pipeline::from_config(&config);

    assert_eq!(
        pipeline.run("# See [docs](x) ![i](y)"),
        "See [docs](x) ![i](y)"
    );
}

#[test]
fn test_stats_for_normalized_text() {
    let original = "## Heading\n\n**Important** text";
    let cleaned = normalize(original);
    assert_eq!(cleaned, "Heading\n\nImportant text");

    let stats = compute_stats(original, &cleaned);
    assert_eq!(stats.original_length, 30);
    assert_eq!(stats.cleaned_length, 23);
    assert_eq!(stats.reduction_percent, 23.3);
}

#[test]
fn test_stats_for_rewritten_link() {
    let original = "[a](b)";
    let cleaned = normalize(original);
    let stats = compute_stats(original, &cleaned);
    assert_eq!(cleaned, "a (b)");
    assert_eq!(stats.chars_removed(), 1);
    assert_eq!(stats.reduction_percent, 16.7);
}
