//! Built-in palette: void plus ten shades each of sand and water.
//!
//! Mirrors `content/materials.json`; hosts that ship their own definitions
//! never need this.

use crate::domain::content::MaterialTable;
use crate::domain::materials::{MaterialClass, MaterialDefinition, MaterialId, VOID_ID, VOID_NAME};

pub const SAND_DENSITY: u32 = 10;
pub const WATER_DENSITY: u32 = 5;

pub const SAND_FIRST_ID: MaterialId = 100;
pub const WATER_FIRST_ID: MaterialId = 110;

const SAND_SHADES: [&str; 10] = [
    "#afa971", "#c5bf87", "#dbd59e", "#e3dda5", "#beb781",
    "#d2cb94", "#cfc892", "#d6cf98", "#d6cf98", "#c9c08f",
];

const WATER_SHADES: [&str; 10] = [
    "#1f55ff", "#2055fd", "#255afe", "#2a5dfd", "#2d60fd",
    "#3264fd", "#3d6dff", "#3e6efe", "#3d70f9", "#3b6ff9",
];

pub fn default_definitions() -> Vec<MaterialDefinition> {
    let mut defs = Vec::with_capacity(1 + SAND_SHADES.len() + WATER_SHADES.len());
    defs.push(MaterialDefinition::new(VOID_ID, VOID_NAME, 0, MaterialClass::Void));

    for (i, color) in SAND_SHADES.iter().enumerate() {
        let id = SAND_FIRST_ID + i as MaterialId;
        defs.push(MaterialDefinition::new(id, "sand", SAND_DENSITY, MaterialClass::Solid).with_color(color));
    }
    for (i, color) in WATER_SHADES.iter().enumerate() {
        let id = WATER_FIRST_ID + i as MaterialId;
        defs.push(MaterialDefinition::new(id, "water", WATER_DENSITY, MaterialClass::Liquid).with_color(color));
    }
    defs
}

impl MaterialTable {
    pub fn default_palette() -> Self {
        Self::build(default_definitions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_sand_and_water_variants() {
        let table = MaterialTable::default_palette();
        assert_eq!(table.variants("sand").map(|v| v.len()), Some(10));
        assert_eq!(table.variants("water").map(|v| v.len()), Some(10));
        assert_eq!(table.class(105), MaterialClass::Solid);
        assert_eq!(table.class(119), MaterialClass::Liquid);
        assert_eq!(table.lookup(110).color.as_deref(), Some("#1f55ff"));
        // ids between void and the first sand shade are undefined
        assert!(!table.is_defined(50));
    }
}
