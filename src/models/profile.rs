use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One row of the profile listing: the profile joined with its filament,
/// filament brand and material, and (when set) its printer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub filament_profile_id: Uuid,
    pub filament_profile_name: String,
    pub brand_name: String,
    pub material_name: String,
    pub color: Option<String>,
    pub diameter: Option<f64>,
    pub spool_weight: Option<f64>,
    pub filament_density: Option<f64>,
    pub cost_per_kg: Option<f64>,
    pub printer_id: Option<Uuid>,
    pub printer_brand_name: Option<String>,
    pub printer_model_name: Option<String>,
    pub community_rating: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePage {
    pub profiles: Vec<ProfileView>,
    /// Offset of the next page; absent when this page was not full.
    pub next_offset: Option<u64>,
    pub total: u64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProfileQuery {
    /// Case-insensitive substring of a brand or material name
    #[schema(example = "pla")]
    pub q: Option<String>,
    #[schema(example = 0)]
    pub offset: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub profile_id: Uuid,
    pub liked: bool,
    pub message: String,
}
