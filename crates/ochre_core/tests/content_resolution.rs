use ochre_core::{resolve_content, NormalizeError};
use serde_json::{json, Value};

const UUID: &str = "9f1c2d3e-4b5a-4c6d-8e7f-001122334455";

fn langs(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn rich(raw: &Value) -> String {
    resolve_content(raw, &langs(&["eng"]), true)
        .unwrap()
        .get_text(Some("eng"))
        .to_string()
}

fn plain(raw: &Value) -> String {
    resolve_content(raw, &langs(&["eng"]), false)
        .unwrap()
        .get_text(Some("eng"))
        .to_string()
}

fn annotated(label: &str, descriptor: Value) -> Value {
    json!({ "content": { "lang": "eng", "string": {
        "string": label,
        "links": { "resource": descriptor }
    } } })
}

#[test]
fn newline_run_becomes_line_break_per_mode() {
    let raw = json!({ "content": { "lang": "eng", "string": ["A", { "whitespace": "newline" }, "B"] } });
    assert_eq!(rich(&raw), "A<br />\nB");
    assert_eq!(plain(&raw), "A\nB");
}

#[test]
fn newline_on_text_run_precedes_its_text() {
    let raw = json!({ "content": { "lang": "eng", "string": ["A", { "string": "B", "whitespace": "newline" }] } });
    assert_eq!(rich(&raw), "A<br />\nB");
}

#[test]
fn formatting_nests_underline_innermost() {
    let raw = json!({ "content": { "lang": "eng", "string": [
        "see ",
        { "string": "x", "rend": "bold italic underline" }
    ] } });
    assert_eq!(rich(&raw), "see ***<u>x</u>***");
    assert_eq!(plain(&raw), "see x");
}

#[test]
fn reserved_characters_are_escaped_only_in_rich_mode() {
    let raw = json!({ "content": { "lang": "eng", "string": "a<b{c" } });
    assert_eq!(rich(&raw), r"a\<b\{c");
    assert_eq!(plain(&raw), "a<b{c");
}

#[test]
fn missing_language_falls_back_to_default() {
    let raw = json!({ "content": [{ "lang": "fra", "string": "Bonjour" }] });
    let text = resolve_content(&raw, &langs(&["eng", "fra"]), true).unwrap();
    assert_eq!(text.get_text(None), "Bonjour");
    assert_eq!(text.get_text(Some("eng")), "Bonjour");
    assert_eq!(text.get_exact_text("eng"), None);
    assert_eq!(text.default_language(), Some("fra"));
    assert_eq!(text.languages(), langs(&["eng", "fra"]).as_slice());
}

#[test]
fn every_language_branch_is_resolved_independently() {
    let raw = json!({ "content": [
        { "lang": "eng", "string": { "string": "Gate", "rend": "italic" } },
        { "lang": "tur", "string": "Kapı" }
    ] });
    let text = resolve_content(&raw, &langs(&["eng", "tur"]), true).unwrap();
    assert_eq!(text.get_exact_text("eng"), Some("*Gate*"));
    assert_eq!(text.get_exact_text("tur"), Some("Kapı"));
}

#[test]
fn no_requested_language_is_a_language_error() {
    let raw = json!({ "content": { "lang": "deu", "string": "Tor" } });
    let err = resolve_content(&raw, &langs(&["eng", "fra"]), true).unwrap_err();
    assert_eq!(
        err,
        NormalizeError::ContentNotFound {
            languages: langs(&["eng", "fra"])
        }
    );
    assert_eq!(err.kind(), "language");
}

#[test]
fn scalar_shortcut_bypasses_run_assembly() {
    let text = resolve_content(&json!("a<b"), &langs(&["eng"]), true).unwrap();
    assert_eq!(text.get_text(None), "a<b");
}

#[test]
fn inline_image_fragment() {
    let raw = annotated(
        "Tablet",
        json!({ "uuid": UUID, "type": "image", "rend": "inline", "href": "https://img.example/t.png", "width": 10, "height": 20 }),
    );
    assert_eq!(
        rich(&raw),
        format!(
            r#"<InlineImage uuid="{UUID}" href="https://img.example/t.png" width="10" height="20" content="Tablet" />"#
        )
    );
}

#[test]
fn non_inline_image_is_internal_link() {
    let raw = annotated("Tablet", json!({ "uuid": UUID, "type": "image" }));
    assert_eq!(
        rich(&raw),
        format!(r#"<InternalLink uuid="{UUID}">Tablet</InternalLink>"#)
    );
}

#[test]
fn external_document_links_to_item_page() {
    let raw = annotated("Report", json!({ "uuid": UUID, "type": "externalDocument" }));
    assert_eq!(
        rich(&raw),
        format!(
            r#"<DocumentLink href="https://ochre.lib.uchicago.edu/ochre?uuid={UUID}" uuid="{UUID}">Report</DocumentLink>"#
        )
    );
}

#[test]
fn webpage_without_href_uses_placeholder() {
    let raw = annotated("site", json!({ "uuid": UUID, "type": "webpage" }));
    assert_eq!(rich(&raw), r##"<ExternalLink href="#">site</ExternalLink>"##);
}

#[test]
fn published_untyped_link_is_internal() {
    let raw = annotated(
        "stele",
        json!({ "uuid": UUID, "publicationDateTime": "2021-03-04T05:06:07Z" }),
    );
    assert_eq!(
        rich(&raw),
        format!(r#"<InternalLink uuid="{UUID}">stele</InternalLink>"#)
    );
}

#[test]
fn unpublished_untyped_link_is_tooltip_with_target_label() {
    let raw = annotated(
        "stele",
        json!({ "uuid": UUID, "identification": { "label": "Kuttamuwa \"stele\"" } }),
    );
    assert_eq!(
        rich(&raw),
        r#"<TooltipSpan content="Kuttamuwa &quot;stele&quot;">stele</TooltipSpan>"#
    );
}

#[test]
fn annotated_span_contributes_only_label_in_plain_mode() {
    let raw = annotated("Tablet", json!({ "uuid": UUID, "type": "image" }));
    assert_eq!(plain(&raw), "Tablet");
}

#[test]
fn unknown_link_type_is_rejected() {
    let raw = annotated("clip", json!({ "uuid": UUID, "type": "video" }));
    let err = resolve_content(&raw, &langs(&["eng"]), true).unwrap_err();
    assert!(matches!(
        err,
        NormalizeError::UnknownVocabulary { field: "link type", ref value } if value == "video"
    ));
}
