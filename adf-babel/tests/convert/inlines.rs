use crate::common::{find_link, single_paragraph};
use adf_babel::adf::{Mark, Marks, Node};
use adf_babel::convert;

fn marks(list: &[Mark]) -> Marks {
    list.to_vec().into()
}

#[test]
fn test_bold_only_paragraph() {
    let doc = convert("**bold**");
    assert_eq!(
        single_paragraph(&doc),
        &[Node::text("bold", marks(&[Mark::Strong]))]
    );
}

#[test]
fn test_bold_in_sentence() {
    let doc = convert("This is **bold** text");
    assert_eq!(
        single_paragraph(&doc),
        &[
            Node::plain_text("This is "),
            Node::text("bold", marks(&[Mark::Strong])),
            Node::plain_text(" text"),
        ]
    );
}

#[test]
fn test_italic() {
    let doc = convert("This is *italic* text");
    assert_eq!(
        single_paragraph(&doc)[1],
        Node::text("italic", marks(&[Mark::Em]))
    );
}

#[test]
fn test_inline_code() {
    let doc = convert("Use `fmt.Println()` here");
    assert_eq!(
        single_paragraph(&doc),
        &[
            Node::plain_text("Use "),
            Node::text("fmt.Println()", marks(&[Mark::Code])),
            Node::plain_text(" here"),
        ]
    );
}

#[test]
fn test_bold_italic_combined() {
    let doc = convert("This is ***bold and italic*** text");
    let combined = single_paragraph(&doc)
        .iter()
        .find(|node| node.marks().len() == 2)
        .expect("a leaf with two marks");
    assert_eq!(combined.text_value(), Some("bold and italic"));
    assert!(combined.marks().contains(&Mark::Strong));
    assert!(combined.marks().contains(&Mark::Em));
}

#[test]
fn test_nested_emphasis_marks_do_not_leak() {
    let doc = convert("*a **b** c*\n\nplain after");
    assert_eq!(
        doc.content[0].content(),
        &[
            Node::text("a ", marks(&[Mark::Em])),
            Node::text("b", marks(&[Mark::Em, Mark::Strong])),
            Node::text(" c", marks(&[Mark::Em])),
        ]
    );
    assert_eq!(doc.content[1].content(), &[Node::plain_text("plain after")]);
}

#[test]
fn test_strikethrough() {
    let doc = convert("This is ~~deleted~~ text");
    assert_eq!(
        single_paragraph(&doc)[1],
        Node::text("deleted", marks(&[Mark::Strike]))
    );
}

#[test]
fn test_soft_break_is_a_space() {
    let doc = convert("first line\nsecond line");
    assert_eq!(
        single_paragraph(&doc),
        &[Node::plain_text("first line second line")]
    );
}

#[test]
fn test_soft_break_after_emphasis_is_unmarked() {
    let doc = convert("*first*\nsecond");
    assert_eq!(
        single_paragraph(&doc),
        &[
            Node::text("first", marks(&[Mark::Em])),
            Node::plain_text(" second"),
        ]
    );
}

#[test]
fn test_hard_break() {
    for source in ["first line  \nsecond line", "first line\\\nsecond line"] {
        let doc = convert(source);
        assert_eq!(
            single_paragraph(&doc),
            &[
                Node::plain_text("first line"),
                Node::HardBreak,
                Node::plain_text("second line"),
            ],
            "source: {source:?}"
        );
    }
}

#[test]
fn test_image_with_alt() {
    let doc = convert("![alt text](https://example.com/img.png)");
    let (node, href) = find_link(single_paragraph(&doc)).expect("image link");
    assert_eq!(node.text_value(), Some("alt text"));
    assert_eq!(href, "https://example.com/img.png");
}

#[test]
fn test_image_without_alt_uses_destination() {
    let doc = convert("![](https://example.com/img.png)");
    let (node, _) = find_link(single_paragraph(&doc)).expect("image link");
    assert_eq!(node.text_value(), Some("https://example.com/img.png"));
}

#[test]
fn test_raw_inline_html_is_dropped() {
    let doc = convert("a <span>b</span> c");
    assert_eq!(single_paragraph(&doc), &[Node::plain_text("a b c")]);
}

#[test]
fn test_no_empty_text_leaves() {
    let doc = convert("**a**_b_`c`");
    assert!(single_paragraph(&doc)
        .iter()
        .all(|node| node.text_value().map_or(true, |text| !text.is_empty())));
}
