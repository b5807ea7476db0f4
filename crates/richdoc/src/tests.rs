use std::collections::HashSet;

use ecow::EcoString;
use richdoc_dom::{Element, HtmlWriterOptions};
use serde_json::{json, Value};

use super::*;

mod config;
mod legacy;
mod model;
mod view;

fn render_legacy(blocks: Value) -> Option<Vec<Node>> {
    render_values(Some(&blocks), None)
}

fn render_document(document: Value) -> Option<Vec<Node>> {
    render_values(None, Some(&document))
}

fn html(nodes: Option<Vec<Node>>) -> String {
    match nodes {
        Some(nodes) => to_html(&nodes, HtmlWriterOptions::default())
            .unwrap()
            .trim_end()
            .to_string(),
        None => "<none>".to_string(),
    }
}

/// A Lexical-style document holding `children` at its root.
fn doc(children: Value) -> Value {
    json!({ "root": { "type": "root", "children": children } })
}

fn text(text: &str) -> Value {
    json!({ "type": "text", "text": text, "format": 0 })
}

fn formatted(text: &str, format: u32) -> Value {
    json!({ "type": "text", "text": text, "format": format })
}

fn paragraph(children: Value) -> Value {
    json!({ "type": "paragraph", "children": children })
}

fn element(node: &Node) -> &Element {
    node.as_element().expect("expected an element")
}

/// Every key in the tree, in pre-order.
fn keys(nodes: &[Node]) -> Vec<EcoString> {
    fn walk(node: &Node, out: &mut Vec<EcoString>) {
        if let Node::Element(element) = node {
            out.extend(element.key.clone());
            for child in &element.children {
                walk(child, out);
            }
        }
    }
    let mut out = Vec::new();
    for node in nodes {
        walk(node, &mut out);
    }
    out
}

/// Every `src` attribute in the tree.
fn sources(nodes: &[Node]) -> HashSet<EcoString> {
    fn walk(node: &Node, out: &mut HashSet<EcoString>) {
        if let Node::Element(element) = node {
            out.extend(element.attribute("src").cloned());
            for child in &element.children {
                walk(child, out);
            }
        }
    }
    let mut out = HashSet::new();
    for node in nodes {
        walk(node, &mut out);
    }
    out
}
