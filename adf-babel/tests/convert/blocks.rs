use crate::common::single_paragraph;
use adf_babel::adf::{CodeBlockAttrs, HeadingAttrs, Node};
use adf_babel::convert;
use insta::assert_json_snapshot;

#[test]
fn test_empty_input() {
    let doc = convert("");
    assert_eq!(doc.version, 1);
    assert!(doc.content.is_empty());
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        serde_json::json!({"type": "doc", "version": 1, "content": []})
    );
}

#[test]
fn test_whitespace_only_input() {
    assert!(convert("   \n\n\t\n").content.is_empty());
}

#[test]
fn test_paragraph() {
    let doc = convert("Hello world");
    assert_eq!(single_paragraph(&doc), &[Node::plain_text("Hello world")]);
}

#[test]
fn test_headings() {
    for level in 1..=6u8 {
        let source = format!("{} Heading {level}", "#".repeat(level as usize));
        let doc = convert(&source);
        assert_eq!(
            doc.content,
            vec![Node::Heading {
                attrs: HeadingAttrs { level },
                content: vec![Node::plain_text(format!("Heading {level}"))],
            }]
        );
    }
}

#[test]
fn test_empty_heading_is_kept() {
    let doc = convert("#\n");
    assert_eq!(
        doc.content,
        vec![Node::Heading {
            attrs: HeadingAttrs { level: 1 },
            content: vec![],
        }]
    );
}

#[test]
fn test_fenced_code_block() {
    let doc = convert("```go\nfunc main() {\n\tfmt.Println(\"Hello\")\n}\n```");
    assert_eq!(
        doc.content,
        vec![Node::CodeBlock {
            attrs: Some(CodeBlockAttrs {
                language: "go".to_string()
            }),
            content: vec![Node::plain_text(
                "func main() {\n\tfmt.Println(\"Hello\")\n}"
            )],
        }]
    );
}

#[test]
fn test_code_block_keeps_inner_blank_lines() {
    let doc = convert("```rust\nfn a() {}\n\nfn b() {}\n\n```");
    assert_eq!(
        doc.content[0].content(),
        &[Node::plain_text("fn a() {}\n\nfn b() {}\n")]
    );
}

#[test]
fn test_code_block_without_language() {
    let doc = convert("```\nplain code\n```");
    assert_eq!(
        doc.content,
        vec![Node::CodeBlock {
            attrs: None,
            content: vec![Node::plain_text("plain code")],
        }]
    );
    let json = serde_json::to_value(&doc).unwrap();
    assert!(json["content"][0].get("attrs").is_none());
}

#[test]
fn test_indented_code_block() {
    let doc = convert("Intro\n\n    let x = 1;\n    let y = 2;\n");
    assert_eq!(
        doc.content[1],
        Node::CodeBlock {
            attrs: None,
            content: vec![Node::plain_text("let x = 1;\nlet y = 2;")],
        }
    );
}

#[test]
fn test_blockquote() {
    let doc = convert("> This is a quote");
    assert_eq!(
        doc.content,
        vec![Node::Blockquote {
            content: vec![Node::paragraph(vec![Node::plain_text("This is a quote")])],
        }]
    );
}

#[test]
fn test_thematic_break() {
    let doc = convert("Above\n\n---\n\nBelow");
    let kinds: Vec<_> = doc.content.iter().map(Node::kind).collect();
    assert_eq!(kinds, vec!["paragraph", "rule", "paragraph"]);
    assert_eq!(
        serde_json::to_value(&doc.content[1]).unwrap(),
        serde_json::json!({"type": "rule"})
    );
}

#[test]
fn test_html_block_is_dropped() {
    let doc = convert("<div>\nraw\n</div>\n\nAfter");
    assert_eq!(single_paragraph(&doc), &[Node::plain_text("After")]);
}

#[test]
fn test_complex_document() {
    let source = "# Project Update\n\n\
                  This is a **status** update.\n\n\
                  - Done\n\
                  - In progress\n\n\
                  ```bash\n\
                  make deploy\n\
                  ```\n";
    assert_json_snapshot!(convert(source), @r###"
    {
      "type": "doc",
      "version": 1,
      "content": [
        {
          "type": "heading",
          "attrs": {
            "level": 1
          },
          "content": [
            {
              "type": "text",
              "text": "Project Update"
            }
          ]
        },
        {
          "type": "paragraph",
          "content": [
            {
              "type": "text",
              "text": "This is a "
            },
            {
              "type": "text",
              "text": "status",
              "marks": [
                {
                  "type": "strong"
                }
              ]
            },
            {
              "type": "text",
              "text": " update."
            }
          ]
        },
        {
          "type": "bulletList",
          "content": [
            {
              "type": "listItem",
              "content": [
                {
                  "type": "paragraph",
                  "content": [
                    {
                      "type": "text",
                      "text": "Done"
                    }
                  ]
                }
              ]
            },
            {
              "type": "listItem",
              "content": [
                {
                  "type": "paragraph",
                  "content": [
                    {
                      "type": "text",
                      "text": "In progress"
                    }
                  ]
                }
              ]
            }
          ]
        },
        {
          "type": "codeBlock",
          "attrs": {
            "language": "bash"
          },
          "content": [
            {
              "type": "text",
              "text": "make deploy"
            }
          ]
        }
      ]
    }
    "###);
}
