pub mod account;
pub mod filament;
pub mod filament_brand;
pub mod filament_material;
pub mod filament_profile;
pub mod printer;
pub mod printer_brand;
pub mod profile_like;
pub mod session;
pub mod user;
pub mod verification_token;
