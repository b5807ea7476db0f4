use super::*;

#[test]
fn defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.render.max_depth, crate::model::DEFAULT_MAX_DEPTH);
    assert!(config.html.strict);
    assert!(!config.writer_options().emit_keys);
}

#[test]
fn partial_tables() {
    let config = Config::from_toml_str(
        r#"
        [render]
        image-width = "60%"
        heading-ids = true

        [html]
        emit-keys = true
        "#,
    )
    .unwrap();
    assert_eq!(config.render.image_width, "60%");
    assert!(config.render.heading_ids);
    assert_eq!(config.render.heading_margin_class, "mt-8");
    assert!(config.html.emit_keys);
    assert!(config.html.strict);

    let writer = config.writer_options();
    assert!(writer.emit_keys);
    assert!(writer.strict);
}

#[test]
fn image_width_flows_into_style() {
    let legacy = json!([{ "type": "image", "url": "/a.png" }]);
    let options = RenderOptions::default().with_image_width("320px");
    let content = CourseContent::from_values(Some(&legacy), None, options.max_depth);
    insta::assert_snapshot!(html(render_content(&content, &options)), @r#"
    <figure>
    <img src="/a.png" alt="" style="width: 320px" /></figure>
    "#);
}

#[test]
fn invalid_toml() {
    let err = Config::from_toml_str("[render]\nmax-depth = \"deep\"").unwrap_err();
    assert!(err.to_string().starts_with("invalid TOML"), "{err}");
}

#[test]
fn missing_file() {
    let err = Config::load(std::path::Path::new("/nonexistent/richdoc.toml")).unwrap_err();
    assert!(err.to_string().starts_with("failed to read"), "{err}");
}

#[test]
fn error_context() {
    let err = Error::from("boom").context("rendering");
    assert_eq!(err.to_string(), "rendering: boom");
}
