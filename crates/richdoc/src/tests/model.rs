use crate::model::{HeadingTag, ImageKind, MediaRef, ResolvedImage};

use super::*;

#[test]
fn format_wrappers() {
    let wrappers = |bits| TextFormat::from_bits(bits).wrappers().collect::<Vec<_>>();
    assert_eq!(wrappers(0), Vec::<&str>::new());
    assert_eq!(wrappers(1), ["strong"]);
    assert_eq!(wrappers(3), ["em", "strong"]);
    assert_eq!(wrappers(16 | 64), ["code", "sup"]);
    // Unknown bits are ignored.
    assert_eq!(wrappers(1 << 10 | 4), ["u"]);
}

#[test]
fn format_from_value() {
    let format = |value: Value| TextFormat::from_value(Some(&value));
    assert_eq!(format(json!(9)), TextFormat::BOLD | TextFormat::STRIKETHROUGH);
    assert_eq!(format(json!(-1)), TextFormat::PLAIN);
    assert_eq!(format(json!(1.5)), TextFormat::PLAIN);
    assert_eq!(format(json!("bold")), TextFormat::PLAIN);
    assert_eq!(TextFormat::from_value(None), TextFormat::PLAIN);
    assert!(format(json!(1 << 12)).is_plain());
}

#[test]
fn format_debug() {
    assert_eq!(format!("{:?}", TextFormat::PLAIN), "TextFormat(plain)");
    assert_eq!(
        format!("{:?}", TextFormat::BOLD | TextFormat::CODE),
        "TextFormat(code | strong)"
    );
}

#[test]
fn media_resolution() {
    let media = |value: Value| MediaRef::from_value(Some(&value));

    assert_eq!(
        media(json!({ "thumbnailURL": "/t.png", "fallbackUrl": "/f.png", "alt": "Fig" })).resolve(),
        Some(ResolvedImage {
            url: "/f.png".into(),
            alt: "Fig".into(),
        })
    );
    assert_eq!(
        media(json!({ "url": "   ", "thumbnailURL": "/t.png" })).url().map(|u| u.as_str()),
        Some("/t.png")
    );
    assert_eq!(media(json!("64f1c0ffee")).resolve(), None);
    assert_eq!(media(json!({ "url": 42 })).resolve(), None);
    assert_eq!(MediaRef::from_value(None).resolve(), None);
}

#[test]
fn legacy_parsing() {
    let blocks = LegacyBlock::parse_blocks(&json!([
        { "type": "heading", "level": "2", "text": "A" },
        { "type": "heading", "level": "big", "text": "B" },
        { "type": "list", "style": "ordered", "items": ["x", null, "y"] },
        { "type": "image", "src": "/a.png", "alt": "" },
        { "type": "quote" },
        "stray",
    ]));
    assert_eq!(
        blocks,
        [
            LegacyBlock::Heading {
                level: Some(2),
                text: "A".into(),
            },
            LegacyBlock::Heading {
                level: None,
                text: "B".into(),
            },
            LegacyBlock::List {
                ordered: true,
                items: vec!["x".into(), "y".into()],
            },
            LegacyBlock::Image {
                url: Some("/a.png".into()),
                alt: None,
                caption: None,
            },
            LegacyBlock::Quote {
                text: "".into(),
                attribution: None,
            },
            LegacyBlock::Unknown,
        ]
    );
    assert!(LegacyBlock::parse_blocks(&json!("not blocks")).is_empty());
}

#[test]
fn node_parsing() {
    let document = Document::from_value(&doc(json!([
        { "type": "heading", "tag": "h2", "children": [text("Title")] },
        { "type": "list", "listType": "number", "children": [] },
        { "type": "course-image", "url": "/c.png", "altText": "C", "alt": "ignored" },
        { "children": [] },
    ])));
    assert_eq!(
        document.children,
        [
            ContentNode::Heading {
                tag: HeadingTag::H2,
                children: vec![ContentNode::Text {
                    text: "Title".into(),
                    format: TextFormat::PLAIN,
                }],
            },
            ContentNode::List {
                ordered: true,
                children: vec![],
            },
            ContentNode::Image {
                kind: ImageKind::CourseImage,
                src: Some("/c.png".into()),
                alt: Some("C".into()),
                caption: None,
            },
            ContentNode::Unknown {
                kind: "".into(),
                children: vec![],
            },
        ]
    );
}

#[test]
fn plain_text_of_subtree() {
    let node = ContentNode::from_value(
        &paragraph(json!([
            formatted("a", 1),
            { "type": "linebreak" },
            { "type": "link", "url": "/x", "children": [text("b")] },
        ])),
        crate::model::DEFAULT_MAX_DEPTH,
    );
    assert_eq!(node.plain_text(), "a\nb");
}

#[test]
fn block_level_nodes() {
    let block = |value: Value| ContentNode::from_value(&value, 4).is_block_level();
    assert!(block(json!({ "type": "list" })));
    assert!(block(json!({ "type": "upload" })));
    assert!(block(json!({ "type": "image" })));
    assert!(!block(json!({ "type": "link" })));
    assert!(!block(json!({ "type": "linebreak" })));
    assert!(!block(text("t")));
}

#[test]
fn payload_pointers() {
    let payload = json!({
        "title": "Course",
        "content": doc(json!([paragraph(json!([text("from payload")]))])),
        "legacyContent": [],
    });
    let content = CourseContent::from_payload(&payload, "/legacyContent", "/content", 64);
    assert!(!content.uses_legacy());
    assert_eq!(
        html(render_content(&content, &RenderOptions::default())),
        "<p>from payload</p>"
    );

    let missing = CourseContent::from_payload(&payload, "/nope", "/nothing", 64);
    assert_eq!(missing, CourseContent::default());
}
