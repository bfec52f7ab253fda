//! Tests for the Markdown guide parser.
mod common;
use common::*;
use guidebox::model::{ParsedFlowBox, ParsedStep};
use guidebox::prelude::*;

#[test]
fn test_end_to_end_document() {
    let boxes = parse_markdown(SETUP_MARKDOWN);

    assert_eq!(
        boxes,
        vec![
            ParsedFlowBox {
                title: "Setup".to_string(),
                description: "Get ready".to_string(),
                steps: vec![ParsedStep {
                    title: "Install".to_string(),
                    content: "Run npm install".to_string(),
                }],
            },
            ParsedFlowBox {
                title: "Configure".to_string(),
                description: String::new(),
                steps: vec![ParsedStep {
                    title: "Set env vars".to_string(),
                    content: "Add API_KEY to .env".to_string(),
                }],
            },
        ]
    );
}

#[test]
fn test_headings_without_steps() {
    let boxes = parse_markdown("## One\n## Two\n\n## Three\n");
    let titles: Vec<_> = boxes.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two", "Three"]);
    assert!(boxes.iter().all(|b| b.steps.is_empty()));
}

#[test]
fn test_description_is_not_step_content() {
    let boxes = parse_markdown("## Box\n*Short intro*\n### First\nbody\n");
    assert_eq!(boxes[0].description, "Short intro");
    assert_eq!(boxes[0].steps[0].content, "body");

    // The italic line only counts directly below the heading.
    let boxes = parse_markdown("## Box\n\n*Not a description*\n### First\nbody\n");
    assert_eq!(boxes[0].description, "");
    assert_eq!(boxes[0].steps[0].content, "body");
}

#[test]
fn test_step_order_and_count_per_section() {
    let text = "## A\n### a1\n### a2\n### a3\n## B\n### b1\n";
    let boxes = parse_markdown(text);

    assert_eq!(boxes.len(), 2);
    let a_titles: Vec<_> = boxes[0].steps.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(a_titles, vec!["a1", "a2", "a3"]);
    assert_eq!(boxes[1].steps.len(), 1);
}

#[test]
fn test_multiline_content_keeps_indentation() {
    let text = "## Box\n### Step\nfirst line\n    indented line\n\nafter blank\n   \n";
    let boxes = parse_markdown(text);

    // Blank lines are dropped, inner indentation survives, the joined body is trimmed.
    assert_eq!(
        boxes[0].steps[0].content,
        "first line\n    indented line\nafter blank"
    );
}

#[test]
fn test_orphan_step_heading_is_discarded() {
    let text = "### Lost step\nlost content\n## Real\n### Kept\nkept content\n";
    let boxes = parse_markdown(text);

    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].steps.len(), 1);
    assert_eq!(boxes[0].steps[0].title, "Kept");
    assert_eq!(boxes[0].steps[0].content, "kept content");
}

#[test]
fn test_text_before_first_heading_is_ignored() {
    let text = "# Guide title\nIntro paragraph\n\n## Box\nloose text outside a step\n### Step\nbody\n";
    let boxes = parse_markdown(text);

    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].title, "Box");
    assert_eq!(boxes[0].steps[0].content, "body");
}

#[test]
fn test_headings_are_trimmed_not_sanitized() {
    let text = "   ## <b>Box</b>   \n\t### Step **bold**  \n";
    let boxes = parse_markdown(text);
    assert_eq!(boxes[0].title, "<b>Box</b>");
    assert_eq!(boxes[0].steps[0].title, "Step **bold**");
}

#[test]
fn test_crlf_line_endings() {
    let boxes = parse_markdown("## Box\r\n*Intro*\r\n### Step\r\nline one\r\nline two\r\n");
    assert_eq!(boxes[0].description, "Intro");
    assert_eq!(boxes[0].steps[0].content, "line one\nline two");
}

#[test]
fn test_empty_and_heading_free_input() {
    assert!(parse_markdown("").is_empty());
    assert!(parse_markdown("just some text\n\nand more").is_empty());
    // "##" alone, without the trailing space, is not a heading marker.
    assert!(parse_markdown("##\n###\n").is_empty());
}

#[test]
fn test_step_without_content() {
    let boxes = parse_markdown("## Box\n### Empty\n### Full\ntext\n");
    assert_eq!(boxes[0].steps[0].content, "");
    assert_eq!(boxes[0].steps[1].content, "text");
}

#[test]
fn test_markdown_parser_through_trait() {
    let parser = MarkdownParser;
    assert_eq!(parser.format(), "markdown");
    let boxes = parser.parse(SETUP_MARKDOWN).expect("markdown never fails");
    assert_eq!(boxes, parse_markdown(SETUP_MARKDOWN));
}

#[test]
fn test_markdown_template_parses() {
    let boxes = parse_markdown(&markdown_template());
    assert_eq!(boxes.len(), 1);
    assert!(!boxes[0].description.is_empty());
    assert_eq!(boxes[0].steps.len(), 1);
}
