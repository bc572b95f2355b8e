pub mod profile;
pub mod slicer_settings;
pub mod user;

pub use profile::*;
pub use slicer_settings::{retain_known_columns, SlicerSettings, SLICER_SETTING_KEYS};
pub use user::*;
