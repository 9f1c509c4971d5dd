use chrono::NaiveDate;
use ochre_core::{
    parse_properties, parse_property, NormalizeError, Property, PropertyContent, PropertyDataType,
};
use serde_json::{json, Value};

fn single_value(value: Value) -> (PropertyDataType, PropertyContent) {
    let property = parse_property(&json!({ "label": "Field", "value": value }), "eng").unwrap();
    let value = property.values.into_iter().next().expect("one value");
    (value.data_type, value.content)
}

#[test]
fn values_are_coerced_by_declared_type() {
    assert_eq!(
        single_value(json!({ "dataType": "decimal", "content": "12.5" })),
        (PropertyDataType::Decimal, PropertyContent::Number(12.5))
    );
    assert_eq!(
        single_value(json!({ "dataType": "integer", "content": 3 })),
        (PropertyDataType::Integer, PropertyContent::Number(3.0))
    );
    assert_eq!(
        single_value(json!({ "dataType": "boolean", "booleanValue": "true", "content": "Yes" })),
        (PropertyDataType::Boolean, PropertyContent::Boolean(true))
    );
    assert_eq!(
        single_value(json!({ "dataType": "date", "content": "2019-07-04" })),
        (
            PropertyDataType::Date,
            PropertyContent::Date(NaiveDate::from_ymd_opt(2019, 7, 4).unwrap())
        )
    );
    assert_eq!(
        single_value(json!({ "dataType": "coordinate", "content": "37.1, 36.6" })),
        (PropertyDataType::Coordinate, PropertyContent::Empty)
    );
    assert_eq!(
        single_value(json!({ "dataType": "IDREF", "slug": "basalt", "content": "Basalt" })),
        (PropertyDataType::IdRef, PropertyContent::Text("basalt".to_string()))
    );
    assert_eq!(
        single_value(json!({ "content": "Basalt" })),
        (PropertyDataType::String, PropertyContent::Text("Basalt".to_string()))
    );
    assert_eq!(
        single_value(json!("Red")),
        (PropertyDataType::String, PropertyContent::Text("Red".to_string()))
    );
}

#[test]
fn date_time_values_keep_utc_instant() {
    let (data_type, content) =
        single_value(json!({ "dataType": "dateTime", "content": "2020-01-02T03:04:05Z" }));
    assert_eq!(data_type, PropertyDataType::DateTime);
    match content {
        PropertyContent::DateTime(value) => assert_eq!(value.to_rfc3339(), "2020-01-02T03:04:05+00:00"),
        other => panic!("unexpected content: {other:?}"),
    }
}

#[test]
fn unknown_data_type_is_a_named_error() {
    let raw = json!({ "label": "Colour", "value": { "dataType": "colour", "content": "red" } });
    let err = parse_property(&raw, "eng").unwrap_err();
    assert_eq!(err.to_string(), "unknown dataType value `colour`");
    assert_eq!(err.kind(), "value");
}

#[test]
fn non_numeric_decimal_is_invalid() {
    let raw = json!({ "label": "Height", "value": { "dataType": "decimal", "content": "tall" } });
    let err = parse_property(&raw, "eng").unwrap_err();
    assert!(matches!(err, NormalizeError::InvalidValue { field: "number", .. }));
}

#[test]
fn missing_label_is_a_shape_error() {
    let err = parse_property(&json!({ "value": "x" }), "eng").unwrap_err();
    assert_eq!(err.to_string(), "missing required key `label`");
}

#[test]
fn nested_properties_recurse_and_flatten_in_pre_order() {
    let raw = json!({ "properties": { "property": [
        {
            "label": { "uuid": "a3b4c5d6-0000-4000-8000-000000000001", "content": "Material ..." },
            "value": ["Stone", "Basalt"],
            "comment": "Field identification",
            "property": {
                "label": "Colour",
                "value": { "content": "Grey" },
                "property": { "label": "Munsell", "value": "10YR 5/1" }
            }
        },
        { "label": "Count", "value": { "dataType": "integer", "content": "4" } }
    ] } });
    let properties = parse_properties(&raw, "eng").unwrap();
    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].label.name, "Material");
    assert!(properties[0].label.uuid.is_some());
    assert_eq!(properties[0].values.len(), 2);
    assert_eq!(properties[0].comment.as_deref(), Some("Field identification"));

    let names: Vec<&str> = Property::flatten(&properties)
        .into_iter()
        .map(|property| property.label.name.as_str())
        .collect();
    assert_eq!(names, vec!["Material", "Colour", "Munsell", "Count"]);

    let munsell = Property::values_by_label(&properties, "Munsell");
    assert_eq!(munsell[0].content, PropertyContent::Text("10YR 5/1".to_string()));
    assert!(Property::values_by_label(&properties, "Missing").is_empty());
}

#[test]
fn single_property_and_list_of_one_parse_alike() {
    let single = json!({ "properties": { "property": { "label": "Colour", "value": "Grey" } } });
    let listed = json!({ "properties": { "property": [{ "label": "Colour", "value": "Grey" }] } });
    assert_eq!(
        parse_properties(&single, "eng").unwrap(),
        parse_properties(&listed, "eng").unwrap()
    );
}

#[test]
fn boolean_without_flag_reads_literal_or_keeps_label() {
    assert_eq!(
        single_value(json!({ "dataType": "boolean", "content": "false" })),
        (PropertyDataType::Boolean, PropertyContent::Boolean(false))
    );

    let property = parse_property(
        &json!({ "label": "Field", "value": { "dataType": "boolean", "content": "Present" } }),
        "eng",
    )
    .unwrap();
    assert_eq!(property.values[0].content, PropertyContent::Empty);
    assert_eq!(property.values[0].label.as_deref(), Some("Present"));

    let err = parse_property(
        &json!({ "label": "Field", "value": { "dataType": "boolean" } }),
        "eng",
    )
    .unwrap_err();
    assert_eq!(err, NormalizeError::MissingKey { key: "booleanValue".to_string() });
}
