use super::*;

#[test]
fn first_heading_sits_flush() {
    let nodes = render_legacy(json!([{ "type": "heading", "level": 2, "text": "Syllabus" }]));
    let nodes = nodes.unwrap();
    assert_eq!(nodes.len(), 1);

    let heading = element(&nodes[0]);
    assert_eq!(heading.tag, "h3");
    assert_eq!(heading.key.as_deref(), Some("0"));
    assert_eq!(heading.attribute("class").map(|c| c.as_str()), Some("mt-0"));
    assert_eq!(
        html(Some(nodes)),
        r#"<h3 class="mt-0">Syllabus</h3>"#
    );
}

#[test]
fn heading_levels() {
    let blocks = json!([
        { "type": "paragraph", "text": "Intro" },
        { "type": "heading", "level": 1, "text": "Week 1" },
        { "type": "heading", "level": "2", "text": "Reading" },
        { "type": "heading", "level": 5, "text": "Notes" },
        { "type": "heading", "text": "Misc" },
    ]);
    insta::assert_snapshot!(html(render_legacy(blocks)), @r#"
    <p>Intro</p>
    <h2 class="mt-8">Week 1</h2>
    <h3 class="mt-8">Reading</h3>
    <h4 class="mt-8">Notes</h4>
    <h4 class="mt-8">Misc</h4>
    "#);
}

#[test]
fn lists() {
    let blocks = json!([
        { "type": "list", "style": "ordered", "items": ["one", "two", 3] },
        { "type": "list", "style": "bullet", "items": ["a"] },
        { "type": "list", "items": [] },
    ]);
    insta::assert_snapshot!(html(render_legacy(blocks)), @r#"
    <ol>
    <li>one</li>
    <li>two</li>
    </ol>
    <ul>
    <li>a</li>
    </ul>
    <ul></ul>
    "#);
}

#[test]
fn list_item_keys() {
    let nodes = render_legacy(json!([
        { "type": "paragraph", "text": "x" },
        { "type": "list", "items": ["a", "b"] },
    ]))
    .unwrap();
    assert_eq!(keys(&nodes), ["0", "1", "1-0", "1-1"]);
}

#[test]
fn image_with_caption() {
    let blocks = json!([{
        "type": "image",
        "url": "/img/a.png",
        "alt": "Diagram",
        "caption": "Figure 1",
    }]);
    insta::assert_snapshot!(html(render_legacy(blocks)), @r#"
    <figure>
    <img src="/img/a.png" alt="Diagram" style="width: 50%" /><figcaption>Figure 1</figcaption>
    </figure>
    "#);
}

#[test]
fn image_without_url_is_skipped() {
    let blocks = json!([
        { "type": "image", "alt": "lost" },
        { "type": "image", "url": "  " },
        { "type": "paragraph", "text": "kept" },
    ]);
    assert_eq!(html(render_legacy(blocks)), "<p>kept</p>");
}

#[test]
fn image_src_field() {
    let blocks = json!([{ "type": "image", "src": "/b.png" }]);
    let nodes = render_legacy(blocks).unwrap();
    assert_eq!(sources(&nodes), HashSet::from([EcoString::from("/b.png")]));
}

#[test]
fn quote_with_attribution() {
    let blocks = json!([
        { "type": "quote", "text": "Stay curious", "attribution": "Ada" },
        { "type": "quote", "text": "Anonymous" },
    ]);
    insta::assert_snapshot!(html(render_legacy(blocks)), @r#"
    <blockquote>
    <p>Stay curious</p>
    <footer>Ada</footer>
    </blockquote>
    <blockquote>
    <p>Anonymous</p>
    </blockquote>
    "#);
}

#[test]
fn code_is_escaped() {
    let blocks = json!([
        { "type": "code", "code": "let ok = 1 < 2;", "language": "rust" },
        { "type": "code", "code": "plain" },
    ]);
    insta::assert_snapshot!(html(render_legacy(blocks)), @r#"
    <pre><code class="language-rust">let ok = 1 &lt; 2;</code></pre>
    <pre><code>plain</code></pre>
    "#);
}

#[test]
fn unknown_blocks_are_skipped() {
    let blocks = json!([
        { "type": "carousel", "text": "?" },
        42,
        { "text": "no type" },
        { "type": "paragraph", "text": "kept" },
    ]);
    let nodes = render_legacy(blocks).unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(element(&nodes[0]).key.as_deref(), Some("3"));
}

#[test]
fn no_content() {
    assert_eq!(render_legacy(json!([])), None);
    assert_eq!(render_legacy(json!({ "not": "an array" })), None);
    assert_eq!(render_legacy(json!([{ "type": "carousel" }])), None);
    assert_eq!(render_values(None, None), None);
}

#[test]
fn legacy_takes_precedence() {
    let legacy = json!([{ "type": "paragraph", "text": "legacy" }]);
    let document = doc(json!([paragraph(json!([text("document")]))]));
    let nodes = render_values(Some(&legacy), Some(&document));
    assert_eq!(html(nodes), "<p>legacy</p>");
}

#[test]
fn empty_legacy_falls_back_to_document() {
    let document = doc(json!([paragraph(json!([text("document")]))]));
    let nodes = render_values(Some(&json!([])), Some(&document));
    assert_eq!(html(nodes), "<p>document</p>");
}

#[test]
fn unrenderable_legacy_still_hides_document() {
    let document = doc(json!([paragraph(json!([text("document")]))]));

    let nodes = render_values(Some(&json!([{ "type": "image" }])), Some(&document));
    assert_eq!(nodes, None);

    let legacy = json!([{ "type": "image" }, { "type": "carousel" }, 7]);
    let content = CourseContent::from_values(Some(&legacy), Some(&document), 64);
    assert!(content.uses_legacy());
    assert_eq!(content.legacy.len(), 3);
    assert_eq!(render_content(&content, &RenderOptions::default()), None);
    assert!(outline(&content).is_empty());
}

#[test]
fn text_is_escaped() {
    let blocks = json!([{ "type": "paragraph", "text": "<script>alert(1)</script> & more" }]);
    assert_eq!(
        html(render_legacy(blocks)),
        "<p>&lt;script&gt;alert(1)&lt;/script&gt; &amp; more</p>"
    );
}

#[test]
fn heading_margin_classes_are_configurable() {
    let legacy = json!([
        { "type": "heading", "level": 1, "text": "A" },
        { "type": "heading", "level": 1, "text": "B" },
    ]);
    let options = RenderOptions {
        first_heading_class: "flush".into(),
        heading_margin_class: "spaced".into(),
        ..RenderOptions::default()
    };
    let content = CourseContent::from_values(Some(&legacy), None, options.max_depth);
    insta::assert_snapshot!(html(render_content(&content, &options)), @r#"
    <h2 class="flush">A</h2>
    <h2 class="spaced">B</h2>
    "#);
}
