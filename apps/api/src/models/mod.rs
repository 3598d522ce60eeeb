pub mod materials;
pub mod profile;
