//! Material Definitions
//!
//! A material is just an id with a name, a density and a behaviour class.
//! Several ids may share a name: that is how colour variants of one
//! substance (ten shades of sand, ten of water) are represented.

use serde::{Deserialize, Serialize};

/// Cell value stored in every grid buffer (0 = void)
pub type MaterialId = u16;

/// The designated empty material
pub const VOID_ID: MaterialId = 0;

pub const VOID_NAME: &str = "void";

/// Behaviour category of a material
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialClass {
    /// Empty / inert. Never moved by the movement pass.
    Void,
    /// Falls straight or diagonally, never slides sideways.
    Solid,
    /// Falls, then slides laterally when blocked.
    Liquid,
}

impl MaterialClass {
    #[inline]
    pub fn is_void(self) -> bool {
        self == MaterialClass::Void
    }
}

/// Resolved material entry (what `MaterialTable::lookup` returns)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Material {
    pub name: String,
    pub density: u32,
    pub class: MaterialClass,
    /// `#rrggbb` hint for renderers; the engine never reads it.
    pub color: Option<String>,
}

impl Material {
    pub fn void() -> Self {
        Self {
            name: VOID_NAME.to_string(),
            density: 0,
            class: MaterialClass::Void,
            color: None,
        }
    }
}

/// One record of the material definition list (input config)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialDefinition {
    pub id: MaterialId,
    pub name: String,
    #[serde(default)]
    pub density: u32,
    pub class: MaterialClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl MaterialDefinition {
    pub fn new(id: MaterialId, name: &str, density: u32, class: MaterialClass) -> Self {
        Self {
            id,
            name: name.to_string(),
            density,
            class,
            color: None,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub(crate) fn into_material(self) -> Material {
        Material {
            name: self.name,
            density: self.density,
            class: self.class,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_parses_lowercase() {
        let def: MaterialDefinition =
            serde_json::from_str(r#"{"id":3,"name":"oil","density":4,"class":"liquid"}"#).unwrap();
        assert_eq!(def.class, MaterialClass::Liquid);
        assert_eq!(def.color, None);
    }

    #[test]
    fn unknown_class_is_rejected() {
        let res: Result<MaterialDefinition, _> =
            serde_json::from_str(r#"{"id":3,"name":"smoke","density":1,"class":"gas"}"#);
        assert!(res.is_err());
    }
}
