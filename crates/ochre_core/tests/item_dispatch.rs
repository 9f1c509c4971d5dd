use ochre_core::model::geo::Coordinate;
use ochre_core::{
    as_sequence, container_children, normalize_category, normalize_document, normalize_item,
    Item, ItemCategory, NormalizeError, NormalizeOptions,
};
use serde_json::json;

const ITEM: &str = "1e2d3c4b-5a69-4788-9900-aabbccddeeff";
const CHILD_A: &str = "1e2d3c4b-5a69-4788-9900-000000000001";
const CHILD_B: &str = "1e2d3c4b-5a69-4788-9900-000000000002";

fn options() -> NormalizeOptions {
    NormalizeOptions::default()
}

#[test]
fn resource_description_shortcut_normalizes_to_plain_text() {
    let raw = json!({ "resource": {
        "uuid": ITEM,
        "identification": { "label": "Tablet" },
        "description": "Hello"
    } });
    let item = normalize_item(&raw, Some(ItemCategory::Resource), &options()).unwrap();
    let description = item.base().description.as_ref().expect("description present");
    assert_eq!(description.get_text(None), "Hello");
    assert_eq!(item.base().identification.label.get_text(None), "Tablet");
}

#[test]
fn requested_category_must_be_present() {
    let raw = json!({ "concept": { "uuid": ITEM } });
    let err = normalize_item(&raw, Some(ItemCategory::Resource), &options()).unwrap_err();
    assert_eq!(err, NormalizeError::MissingKey { key: "resource".to_string() });
    assert!(err.to_string().contains("`resource`"));
}

#[test]
fn payload_without_category_key_fails() {
    let err = normalize_item(&json!({ "uuid": ITEM }), None, &options()).unwrap_err();
    assert_eq!(err.to_string(), "missing required key `item category`");
}

#[test]
fn resource_carries_supplementary_blocks() {
    let raw = json!({ "resource": {
        "uuid": ITEM,
        "publicationDateTime": "2022-11-08T09:10:11",
        "type": "photograph",
        "n": 17,
        "format": "image/jpeg",
        "identification": { "label": { "content": { "lang": "eng", "string": "Stele" } }, "abbreviation": "St." },
        "context": { "context": { "project": { "uuid": CHILD_A, "content": "Zincirli" } }, "displayPath": "Zincirli" },
        "availability": { "license": { "content": "CC BY 4.0", "target": "https://creativecommons.org/licenses/by/4.0/" } },
        "creators": { "creator": { "uuid": CHILD_B, "identification": { "label": "V. Herrmann" } } },
        "coordinates": { "coord": { "latitude": 37.1, "longitude": 36.6 } },
        "links": { "spatialUnit": { "uuid": CHILD_A, "identification": { "label": "Area 5" } } },
        "reverseLinks": { "resource": { "uuid": CHILD_B, "type": "image", "isPrimary": true } },
        "properties": { "property": { "label": "Material", "value": "Basalt" } },
        "notes": { "note": "Broken at the base." },
        "periods": { "period": { "uuid": CHILD_A, "identification": { "label": "Iron Age II" } } },
        "events": { "event": { "dateTime": "2020-01-02T03:04:05Z", "label": "Photographed" } },
        "resource": [{ "uuid": CHILD_B, "identification": { "label": "Detail" } }]
    } });
    let item = normalize_item(&raw, None, &options()).unwrap();
    let resource = match item {
        Item::Resource(resource) => resource,
        other => panic!("unexpected item: {other:?}"),
    };
    assert_eq!(resource.resource_type.as_deref(), Some("photograph"));
    assert_eq!(resource.number, Some(17));
    assert_eq!(resource.file_format.as_deref(), Some("image/jpeg"));
    assert!(resource.base.publication_date_time.is_some());
    assert_eq!(
        resource
            .base
            .identification
            .abbreviation
            .as_ref()
            .map(|abbreviation| abbreviation.get_text(None)),
        Some("St.")
    );
    assert_eq!(resource.base.context.as_ref().map(|context| context.nodes.len()), Some(1));
    assert_eq!(
        resource.base.license.as_ref().map(|license| license.content.as_str()),
        Some("CC BY 4.0")
    );
    assert_eq!(resource.base.creators.len(), 1);
    assert!(matches!(resource.coordinates[0], Coordinate::Point { .. }));
    assert_eq!(resource.links[0].category, ItemCategory::SpatialUnit);
    assert!(resource.reverse_links[0]
        .image
        .as_ref()
        .is_some_and(|image| image.is_primary));
    assert_eq!(resource.properties[0].label.name, "Material");
    assert_eq!(resource.notes[0].content.get_text(None), "Broken at the base.");
    assert_eq!(resource.periods[0].base.category, ItemCategory::Period);
    assert_eq!(resource.base.events[0].label, "Photographed");
    assert_eq!(resource.resources.len(), 1);
}

#[test]
fn malformed_identification_degrades_to_blank_label() {
    let raw = json!({ "concept": { "uuid": ITEM, "identification": { "abbreviation": "x" } } });
    let item = normalize_item(&raw, None, &options()).unwrap();
    assert_eq!(item.base().identification.label.get_text(None), "");
}

#[test]
fn value_errors_inside_items_propagate() {
    let raw = json!({ "spatialUnit": {
        "uuid": ITEM,
        "properties": { "property": { "label": "Colour", "value": { "dataType": "colour", "content": "red" } } }
    } });
    let err = normalize_item(&raw, None, &options()).unwrap_err();
    assert_eq!(err.to_string(), "unknown dataType value `colour`");
}

#[test]
fn set_infers_child_category_from_items() {
    let raw = json!({ "set": {
        "uuid": ITEM,
        "isTabularStructure": "true",
        "items": { "concept": [
            { "uuid": CHILD_A, "identification": { "label": "Gate" } },
            { "uuid": CHILD_B, "identification": { "label": "Wall" } }
        ] }
    } });
    let set = match normalize_item(&raw, None, &options()).unwrap() {
        Item::Set(set) => set,
        other => panic!("unexpected item: {other:?}"),
    };
    assert_eq!(set.item_category, Some(ItemCategory::Concept));
    assert!(set.is_tabular_structure);
    assert!(!set.is_suppressed);
    let uuids: Vec<String> = set.items.iter().map(|item| item.uuid().to_string()).collect();
    assert_eq!(uuids, vec![CHILD_A.to_string(), CHILD_B.to_string()]);
}

#[test]
fn set_declared_category_must_match_items() {
    let raw = json!({ "set": {
        "uuid": ITEM,
        "itemCategory": "resource",
        "items": { "concept": { "uuid": CHILD_A } }
    } });
    let err = normalize_item(&raw, None, &options()).unwrap_err();
    assert_eq!(err, NormalizeError::MissingKey { key: "resource".to_string() });
}

#[test]
fn declared_child_category_without_items_fails() {
    let raw = json!({ "tree": { "uuid": ITEM, "itemCategory": "resource" } });
    let err = normalize_item(&raw, None, &options()).unwrap_err();
    assert_eq!(err.to_string(), "missing required key `resource`");
}

#[test]
fn set_with_mixed_children_is_ambiguous() {
    let raw = json!({ "set": {
        "uuid": ITEM,
        "items": { "concept": { "uuid": CHILD_A }, "period": { "uuid": CHILD_B } }
    } });
    let err = normalize_item(&raw, None, &options()).unwrap_err();
    assert!(matches!(err, NormalizeError::UnexpectedShape { field: "items", .. }));
}

#[test]
fn set_without_items_is_empty() {
    let raw = json!({ "uuid": ITEM });
    let set = match normalize_category(&raw, ItemCategory::Set, &options()).unwrap() {
        Item::Set(set) => set,
        other => panic!("unexpected item: {other:?}"),
    };
    assert!(set.items.is_empty());
    assert_eq!(set.item_category, None);
}

#[test]
fn tree_uses_declared_child_category() {
    let raw = json!({ "tree": {
        "uuid": ITEM,
        "itemCategory": "spatialUnit",
        "items": { "spatialUnit": { "uuid": CHILD_A, "n": 4, "observations": { "observation": { "observers": ["A. Smith"] } } } }
    } });
    let tree = match normalize_item(&raw, Some(ItemCategory::Tree), &options()).unwrap() {
        Item::Tree(tree) => tree,
        other => panic!("unexpected item: {other:?}"),
    };
    assert_eq!(tree.item_category, Some(ItemCategory::SpatialUnit));
    match &tree.items[0] {
        Item::SpatialUnit(unit) => {
            assert_eq!(unit.number, Some(4));
            assert_eq!(unit.observations[0].observers, vec!["A. Smith"]);
        }
        other => panic!("unexpected child: {other:?}"),
    }
}

#[test]
fn unknown_item_category_attribute_is_rejected() {
    let raw = json!({ "tree": { "uuid": ITEM, "itemCategory": "widget" } });
    let err = normalize_item(&raw, None, &options()).unwrap_err();
    assert_eq!(err.to_string(), "unknown itemCategory value `widget`");
}

#[test]
fn cardinality_normalization_is_idempotent() {
    let single = json!({ "uuid": CHILD_A });
    let once = as_sequence(Some(&single));
    let relisted = json!([single.clone()]);
    let twice = as_sequence(Some(&relisted));
    assert_eq!(once, twice);
    assert!(as_sequence(None).is_empty());
    assert!(as_sequence(Some(&json!(null))).is_empty());

    let parent = json!({ "notes": { "note": ["a", "b"] } });
    assert_eq!(container_children(&parent, "notes", "note").len(), 2);
}

#[test]
fn rich_text_switch_controls_description_markup() {
    let raw = json!({ "concept": {
        "uuid": ITEM,
        "description": { "content": { "lang": "eng", "string": { "string": "gate", "rend": "bold" } } }
    } });
    let rich = normalize_item(&raw, None, &options()).unwrap();
    let plain = normalize_item(&raw, None, &options().with_rich_text(false)).unwrap();
    let text = |item: &Item| {
        item.base()
            .description
            .as_ref()
            .map(|description| description.get_text(None).to_string())
    };
    assert_eq!(text(&rich).as_deref(), Some("**gate**"));
    assert_eq!(text(&plain).as_deref(), Some("gate"));
}

#[test]
fn normalized_items_serialize_with_flattened_envelope() {
    let raw = json!({ "resource": { "uuid": ITEM, "description": "Hello" } });
    let item = normalize_item(&raw, None, &options()).unwrap();
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(value["category"], "resource");
    assert_eq!(value["uuid"], ITEM);
    assert_eq!(value["description"]["eng"], "Hello");
}

#[test]
fn document_envelope_supplies_languages_and_metadata() {
    let raw = json!({ "ochre": {
        "uuid": ITEM,
        "publicationDateTime": "2023-05-01T10:00:00Z",
        "languages": "fra;eng",
        "metadata": {
            "project": { "identification": { "label": { "content": [
                { "lang": "fra", "string": "Projet" },
                { "lang": "eng", "string": "Project" }
            ] } } },
            "dataset": "Zincirli",
            "publisher": "OCHRE Data Service"
        },
        "spatialUnit": { "uuid": CHILD_A, "identification": { "label": { "content": [
            { "lang": "eng", "string": "Gate" }
        ] } } }
    } });
    let document = normalize_document(&raw, None, None).unwrap();
    assert_eq!(document.languages, vec!["fra".to_string(), "eng".to_string()]);
    assert_eq!(document.uuid.map(|uuid| uuid.to_string()).as_deref(), Some(ITEM));
    let metadata = document.metadata.expect("metadata present");
    assert_eq!(
        metadata
            .project
            .as_ref()
            .map(|project| project.label.get_text(Some("eng"))),
        Some("Project")
    );
    assert_eq!(metadata.dataset.as_deref(), Some("Zincirli"));
    assert_eq!(document.item.category(), ItemCategory::SpatialUnit);
    assert_eq!(document.item.base().identification.label.get_text(Some("fra")), "Gate");
}

#[test]
fn document_options_override_envelope_languages() {
    let raw = json!({ "ochre": { "languages": "fra", "concept": { "uuid": ITEM } } });
    let document = normalize_document(
        &raw,
        Some(ItemCategory::Concept),
        Some(NormalizeOptions::from_language_list("eng")),
    )
    .unwrap();
    assert_eq!(document.languages, vec!["eng".to_string()]);
}

#[test]
fn document_requires_envelope() {
    let err = normalize_document(&json!({ "concept": { "uuid": ITEM } }), None, None).unwrap_err();
    assert_eq!(err.to_string(), "missing required key `ochre`");
}
