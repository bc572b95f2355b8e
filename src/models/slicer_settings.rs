use crate::entities::filament_profile::{self, InfillPattern, SourceSlicer, SupportType, Tags};
use crate::error::FieldError;
use rust_decimal::Decimal;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

macro_rules! slicer_settings {
    ($($field:ident: $ty:ty => $key:literal),* $(,)?) => {
        /// Optional slicer configuration of a profile. Every field is backed
        /// by a column of `filament_profiles` and is independently nullable.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct SlicerSettings {
            $(
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        /// Settings keys, as submitted by clients, that map to a column.
        pub const SLICER_SETTING_KEYS: &[&str] = &[$($key),*];

        impl SlicerSettings {
            /// Decodes `value` into the field named `key`. `None` for keys
            /// that are not settings.
            fn set(&mut self, key: &str, value: Value) -> Option<Result<(), serde_json::Error>> {
                match key {
                    $($key => Some(serde_json::from_value(value).map(|v| self.$field = v)),)*
                    _ => None,
                }
            }

            /// Copies every set field onto the row being inserted, leaving
            /// unset fields to the row defaults.
            pub fn apply(self, row: &mut filament_profile::ActiveModel) {
                $(
                    if let Some(value) = self.$field {
                        row.$field = Set(Some(value));
                    }
                )*
            }
        }
    };
}

slicer_settings! {
    source_slicer: SourceSlicer => "sourceSlicer",
    slicer_version: String => "slicerVersion",
    custom_notes: String => "customNotes",
    community_rating: Decimal => "communityRating",
    layer_height: Decimal => "layerHeight",
    wall_thickness: Decimal => "wallThickness",
    top_bottom_layers: i32 => "topBottomLayers",
    infill_density: i32 => "infillDensity",
    infill_pattern: InfillPattern => "infillPattern",
    nozzle_temp: i32 => "nozzleTemp",
    bed_temp: i32 => "bedTemp",
    chamber_temp: i32 => "chamberTemp",
    print_speed: Decimal => "printSpeed",
    wall_speed: Decimal => "wallSpeed",
    infill_speed: Decimal => "infillSpeed",
    travel_speed: Decimal => "travelSpeed",
    flow_rate: i32 => "flowRate",
    fan_speed: i32 => "fanSpeed",
    min_layer_time: Decimal => "minLayerTime",
    retraction_distance: Decimal => "retractionDistance",
    retraction_speed: Decimal => "retractionSpeed",
    z_hop: Decimal => "zHop",
    supports_enabled: bool => "supportsEnabled",
    support_type: SupportType => "supportType",
    support_density: i32 => "supportDensity",
    support_z_distance: Decimal => "supportZDistance",
    gcode_link: String => "gcodeLink",
    profile_link: String => "profileLink",
    tags: Tags => "tags",
}

/// Drops every entry whose key is not a slicer-setting column. Identity
/// columns (`userId`, `filamentId`, ...) are not settings and are dropped too.
pub fn retain_known_columns(settings: Map<String, Value>) -> Map<String, Value> {
    settings
        .into_iter()
        .filter(|(key, _)| {
            let known = SLICER_SETTING_KEYS.contains(&key.as_str());
            if !known {
                log::debug!("Ignoring unknown slicer setting: {}", key);
            }
            known
        })
        .collect()
}

impl SlicerSettings {
    /// Builds the typed record from an allowlisted map. A value of the wrong
    /// shape for its column (including an unknown enum literal) is reported
    /// against its key.
    pub fn from_map(settings: Map<String, Value>) -> Result<Self, Vec<FieldError>> {
        let mut record = SlicerSettings::default();
        let mut errors = Vec::new();

        for (key, value) in settings {
            if let Some(Err(e)) = record.set(&key, value) {
                errors.push(FieldError::new(key, format!("invalid value: {}", e)));
            }
        }

        if errors.is_empty() {
            Ok(record)
        } else {
            Err(errors)
        }
    }

    /// Range checks for numeric settings and scheme checks for links.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        check_decimal(&mut errors, "communityRating", self.community_rating, (0, 0), (5, 0));
        check_decimal(&mut errors, "layerHeight", self.layer_height, (1, 2), (2, 0));
        check_decimal(&mut errors, "wallThickness", self.wall_thickness, (1, 2), (10, 0));
        check_int(&mut errors, "topBottomLayers", self.top_bottom_layers, 0, 100);
        check_int(&mut errors, "infillDensity", self.infill_density, 0, 100);

        check_int(&mut errors, "nozzleTemp", self.nozzle_temp, 0, 500);
        check_int(&mut errors, "bedTemp", self.bed_temp, 0, 200);
        check_int(&mut errors, "chamberTemp", self.chamber_temp, 0, 100);

        for (key, value) in [
            ("printSpeed", self.print_speed),
            ("wallSpeed", self.wall_speed),
            ("infillSpeed", self.infill_speed),
            ("travelSpeed", self.travel_speed),
        ] {
            check_decimal(&mut errors, key, value, (1, 2), (99999, 2));
        }
        check_int(&mut errors, "flowRate", self.flow_rate, 1, 200);

        check_int(&mut errors, "fanSpeed", self.fan_speed, 0, 100);
        check_decimal(&mut errors, "minLayerTime", self.min_layer_time, (0, 0), (99999, 2));

        check_decimal(&mut errors, "retractionDistance", self.retraction_distance, (0, 0), (20, 0));
        check_decimal(&mut errors, "retractionSpeed", self.retraction_speed, (0, 0), (99999, 2));
        check_decimal(&mut errors, "zHop", self.z_hop, (0, 0), (10, 0));

        check_int(&mut errors, "supportDensity", self.support_density, 0, 100);
        check_decimal(&mut errors, "supportZDistance", self.support_z_distance, (0, 0), (10, 0));

        for (key, value) in [("gcodeLink", &self.gcode_link), ("profileLink", &self.profile_link)] {
            if let Some(link) = value {
                if !(link.starts_with("http://") || link.starts_with("https://")) {
                    errors.push(FieldError::new(key, "must be an http(s) URL"));
                }
            }
        }

        errors
    }
}

fn check_int(errors: &mut Vec<FieldError>, key: &str, value: Option<i32>, min: i32, max: i32) {
    if let Some(v) = value {
        if v < min || v > max {
            errors.push(FieldError::new(key, format!("must be between {} and {}", min, max)));
        }
    }
}

/// Bounds are `(mantissa, scale)` pairs, so `(1, 2)` is 0.01.
fn check_decimal(
    errors: &mut Vec<FieldError>,
    key: &str,
    value: Option<Decimal>,
    min: (i64, u32),
    max: (i64, u32),
) {
    let min = Decimal::new(min.0, min.1);
    let max = Decimal::new(max.0, max.1);
    if let Some(v) = value {
        if v < min || v > max {
            errors.push(FieldError::new(key, format!("must be between {} and {}", min, max)));
        }
    }
}
