use crate::common::{find_link, single_paragraph, walk};
use adf_babel::adf::{Mark, Node};
use adf_babel::{convert, convert_with_options, ParserOptions};

#[test]
fn test_explicit_link() {
    let doc = convert("Visit [Google](https://google.com) now");
    let (node, href) = find_link(single_paragraph(&doc)).expect("link mark");
    assert_eq!(node.text_value(), Some("Google"));
    assert_eq!(href, "https://google.com");
}

#[test]
fn test_explicit_link_stays_as_link() {
    let doc = convert("Click [this ticket](https://jira.example.com/browse/DEV-789)");
    let content = single_paragraph(&doc);
    assert!(content.iter().all(|node| node.kind() != "inlineCard"));
    let (node, _) = find_link(content).expect("link mark");
    assert_eq!(node.text_value(), Some("this ticket"));
}

#[test]
fn test_explicit_link_that_looks_like_url() {
    let url = "https://jira.example.com/browse/DEV-1";
    let doc = convert(&format!("[{url}]({url})"));
    let content = single_paragraph(&doc);
    assert!(content.iter().all(|node| node.kind() != "inlineCard"));
    let (node, href) = find_link(content).expect("link mark");
    assert_eq!(node.text_value(), Some(url));
    assert_eq!(href, url);
}

#[test]
fn test_angle_autolink_is_inline_card() {
    let doc = convert("Check <https://jira.example.com/browse/DEV-123>");
    assert_eq!(
        single_paragraph(&doc),
        &[
            Node::plain_text("Check "),
            Node::inline_card("https://jira.example.com/browse/DEV-123"),
        ]
    );
}

#[test]
fn test_bare_url_is_inline_card() {
    let doc = convert("See https://jira.example.com/browse/DEV-456 for details");
    assert_eq!(
        single_paragraph(&doc),
        &[
            Node::plain_text("See "),
            Node::inline_card("https://jira.example.com/browse/DEV-456"),
            Node::plain_text(" for details"),
        ]
    );
}

#[test]
fn test_text_around_card_is_whole() {
    let doc = convert("See https://x.com for info");
    let content = single_paragraph(&doc);
    assert_eq!(content.len(), 3);
    assert_eq!(content[0].text_value(), Some("See "));
    assert_eq!(content[1].kind(), "inlineCard");
    assert_eq!(content[2].text_value(), Some(" for info"));
}

#[test]
fn test_email_autolink() {
    let doc = convert("Contact <user@example.com> for help");
    let content = single_paragraph(&doc);
    assert!(content.iter().all(|node| node.kind() != "inlineCard"));
    let (node, href) = find_link(content).expect("link mark");
    assert_eq!(node.text_value(), Some("user@example.com"));
    assert_eq!(href, "mailto:user@example.com");
}

#[test]
fn test_bare_email() {
    let doc = convert("Send mail to support@example.com please");
    let (node, href) = find_link(single_paragraph(&doc)).expect("link mark");
    assert_eq!(node.text_value(), Some("support@example.com"));
    assert_eq!(href, "mailto:support@example.com");
}

#[test]
fn test_explicit_mailto_link() {
    let doc = convert("[Email us](mailto:info@example.com)");
    let (node, href) = find_link(single_paragraph(&doc)).expect("link mark");
    assert_eq!(node.text_value(), Some("Email us"));
    assert_eq!(href, "mailto:info@example.com");
}

#[test]
fn test_bare_url_without_autolink_extension() {
    let options = ParserOptions {
        autolink: false,
        ..ParserOptions::default()
    };
    let doc = convert_with_options("See https://x.com now", &options);
    assert_eq!(
        single_paragraph(&doc),
        &[Node::plain_text("See https://x.com now")]
    );
}

#[test]
fn test_link_source_positions_inside_containers() {
    let url = "https://x.com";
    for md in [
        "> [https://x.com](https://x.com)",
        "1. > - [https://x.com](https://x.com)",
        "é [https://x.com](https://x.com)",
    ] {
        let doc = convert(md);
        let nodes = walk(&doc.content);
        assert!(
            nodes.iter().all(|node| node.kind() != "inlineCard"),
            "{md:?} produced a card: {doc:?}"
        );
        assert!(
            nodes
                .iter()
                .any(|node| node.text_value() == Some(url) && node.marks() == [Mark::link(url)]),
            "{md:?} lost its link mark: {doc:?}"
        );
    }

    let doc = convert("- é <https://x.com>");
    assert!(
        walk(&doc.content).contains(&&Node::inline_card(url)),
        "expected a card: {doc:?}"
    );
}
