use crate::error::{FieldError, ServiceError};
use crate::services::profile_mutation::NewProfile;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy)]
enum FieldKind {
    Text,
    Decimal,
    Integer,
    /// Only the literal `"true"` is true.
    Boolean,
    /// Passed through as text; membership is checked when the settings are decoded.
    Enum,
    /// Comma separated; an empty value is an empty list.
    List,
}

const SETTING_FIELDS: &[(&str, FieldKind)] = &[
    ("sourceSlicer", FieldKind::Enum),
    ("slicerVersion", FieldKind::Text),
    ("customNotes", FieldKind::Text),
    ("communityRating", FieldKind::Decimal),
    ("layerHeight", FieldKind::Decimal),
    ("wallThickness", FieldKind::Decimal),
    ("topBottomLayers", FieldKind::Integer),
    ("infillDensity", FieldKind::Integer),
    ("infillPattern", FieldKind::Enum),
    ("nozzleTemp", FieldKind::Integer),
    ("bedTemp", FieldKind::Integer),
    ("chamberTemp", FieldKind::Integer),
    ("printSpeed", FieldKind::Decimal),
    ("wallSpeed", FieldKind::Decimal),
    ("infillSpeed", FieldKind::Decimal),
    ("travelSpeed", FieldKind::Decimal),
    ("flowRate", FieldKind::Integer),
    ("fanSpeed", FieldKind::Integer),
    ("minLayerTime", FieldKind::Decimal),
    ("retractionDistance", FieldKind::Decimal),
    ("retractionSpeed", FieldKind::Decimal),
    ("zHop", FieldKind::Decimal),
    ("supportsEnabled", FieldKind::Boolean),
    ("supportType", FieldKind::Enum),
    ("supportDensity", FieldKind::Integer),
    ("supportZDistance", FieldKind::Decimal),
    ("gcodeLink", FieldKind::Text),
    ("profileLink", FieldKind::Text),
    ("tags", FieldKind::List),
];

/// Coerces a submitted form into the input of `create_profile`.
///
/// Only malformed ids are rejected here. Numbers that do not parse are left
/// unset, and required fields are checked by the mutation service.
pub fn parse_profile_form(form: &HashMap<String, String>) -> Result<NewProfile, ServiceError> {
    let mut errors = Vec::new();

    let user_id = parse_uuid(form, "userId", &mut errors);
    let filament_id = parse_uuid(form, "filamentId", &mut errors);
    let printer_id = parse_uuid(form, "printerId", &mut errors);
    let cloned_from_profile_id = parse_uuid(form, "clonedFromProfileId", &mut errors);

    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let filament_profile_name = form
        .get("filamentProfileName")
        .filter(|name| !name.is_empty())
        .cloned();

    let mut slicer_settings = Map::new();
    for (key, kind) in SETTING_FIELDS {
        if let Some(value) = form.get(*key).and_then(|raw| coerce(raw, *kind)) {
            slicer_settings.insert((*key).to_string(), value);
        }
    }

    Ok(NewProfile {
        user_id,
        filament_id,
        printer_id,
        filament_profile_name,
        cloned_from_profile_id,
        slicer_settings,
    })
}

/// Reads an optional id field from the form. Empty means absent.
pub fn parse_uuid(
    form: &HashMap<String, String>,
    key: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Uuid> {
    let raw = form.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())?;
    match Uuid::parse_str(raw) {
        Ok(id) => Some(id),
        Err(_) => {
            errors.push(FieldError::new(key, "must be a UUID"));
            None
        }
    }
}

fn coerce(raw: &str, kind: FieldKind) -> Option<Value> {
    match kind {
        FieldKind::Text | FieldKind::Enum => Some(Value::String(raw.to_string())),
        FieldKind::Decimal => raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number),
        FieldKind::Integer => raw.trim().parse::<i64>().ok().map(Value::from),
        FieldKind::Boolean => Some(Value::Bool(raw == "true")),
        FieldKind::List => {
            if raw.is_empty() {
                Some(Value::Array(Vec::new()))
            } else {
                Some(Value::Array(
                    raw.split(',')
                        .map(|item| Value::String(item.trim().to_string()))
                        .collect(),
                ))
            }
        }
    }
}
