//! Image, image map and license parsing.

use crate::content::resolver::own_content;
use crate::error::{NormalizeError, NormalizeResult};
use crate::model::media::{Image, ImageMap, ImageMapArea, ImageMapShape, License};
use crate::parse::identification::optional_identification;
use crate::raw::access::{optional_number, optional_text, required_number, required_uuid};
use crate::raw::container_children;
use crate::raw::time::optional_date_time;
use serde_json::Value;

/// Parses `parent.image` when present.
pub fn parse_image(parent: &Value, languages: &[String]) -> NormalizeResult<Option<Image>> {
    let raw = match parent.get("image") {
        None | Some(Value::Null) => return Ok(None),
        Some(raw) => raw,
    };
    let language = languages.first().map(String::as_str).unwrap_or_default();
    Ok(Some(Image {
        publication_date_time: optional_date_time(raw, "publicationDateTime")?,
        identification: optional_identification(raw, languages),
        href: optional_text(raw, "href"),
        html_img_src_prefix: optional_text(raw, "htmlImgSrcPrefix"),
        content: own_content(raw, languages, false)?
            .map(|text| text.get_text(Some(language)).to_string()),
        width: optional_number(raw, "width")?,
        height: optional_number(raw, "height")?,
    }))
}

/// Parses `parent.imagemap` when present.
pub fn parse_image_map(parent: &Value) -> NormalizeResult<Option<ImageMap>> {
    let raw = match parent.get("imagemap") {
        None | Some(Value::Null) => return Ok(None),
        Some(raw) => raw,
    };
    let areas = container_children(parent, "imagemap", "area")
        .into_iter()
        .map(parse_area)
        .collect::<NormalizeResult<Vec<_>>>()?;
    Ok(Some(ImageMap {
        width: required_number(raw, "width")?,
        height: required_number(raw, "height")?,
        areas,
    }))
}

/// Parses `parent.availability.license` when present.
pub fn parse_license(parent: &Value) -> Option<License> {
    let license = parent
        .get("availability")
        .and_then(|availability| availability.get("license"))
        .filter(|license| !license.is_null())?;
    Some(License {
        content: optional_text(license, "content").unwrap_or_default(),
        url: optional_text(license, "target"),
    })
}

fn parse_area(raw: &Value) -> NormalizeResult<ImageMapArea> {
    let shape_text = optional_text(raw, "shape").ok_or_else(|| NormalizeError::missing_key("shape"))?;
    let shape = ImageMapShape::parse(&shape_text)
        .ok_or_else(|| NormalizeError::unknown_vocabulary("image map shape", shape_text))?;
    let coords_text = optional_text(raw, "coords").unwrap_or_default();
    let coords = coords_text
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            value
                .parse::<f64>()
                .map_err(|_| NormalizeError::invalid_value("coords", coords_text.clone()))
        })
        .collect::<NormalizeResult<Vec<_>>>()?;
    Ok(ImageMapArea {
        uuid: required_uuid(raw, "uuid")?,
        publication_date_time: optional_date_time(raw, "publicationDateTime")?,
        area_type: optional_text(raw, "type"),
        title: optional_text(raw, "title"),
        shape,
        coords,
    })
}
