//! Domain - what a cell can hold

pub mod content;
pub mod materials;
pub mod palette;

pub use content::MaterialTable;
pub use materials::{Material, MaterialClass, MaterialDefinition, MaterialId, VOID_ID};
