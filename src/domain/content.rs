use std::collections::HashMap;
use std::sync::Arc;

use rand::{Rng, RngCore};
use serde::Serialize;

use crate::domain::materials::{
    Material, MaterialClass, MaterialDefinition, MaterialId, VOID_ID, VOID_NAME,
};
use crate::error::{EngineError, EngineResult};

/// Immutable id -> material lookup, built once at initialization.
///
/// Per-id density/class/census slot are flattened into parallel vectors so
/// the passes never touch the `Material` structs on the hot path.
#[derive(Clone, Debug)]
pub struct MaterialTable {
    materials: Vec<Option<Material>>,
    fallback: Material,
    density_by_id: Vec<u32>,
    class_by_id: Vec<MaterialClass>,
    census_slot_by_id: Vec<Option<u16>>,
    census_names: Arc<[String]>,
    variants_by_name: HashMap<String, Vec<MaterialId>>,
}

impl MaterialTable {
    /// Build from an ordered definition list.
    ///
    /// Id 0 is forced to be void with density 0: synthesized when missing,
    /// overridden when defined otherwise. A repeated id keeps the last record.
    pub fn build<I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = MaterialDefinition>,
    {
        let mut by_id: Vec<Option<Material>> = Vec::new();

        for def in definitions.into_iter() {
            let idx = def.id as usize;
            if idx >= by_id.len() {
                by_id.resize(idx + 1, None);
            }
            if by_id[idx].is_some() {
                log::warn!("duplicate material id {} ({}), keeping the last definition", def.id, def.name);
            }
            by_id[idx] = Some(def.into_material());
        }

        if by_id.is_empty() {
            by_id.push(None);
        }
        match &by_id[VOID_ID as usize] {
            None => {
                log::info!("material id 0 not defined, synthesizing void");
            }
            Some(m) if m.class != MaterialClass::Void || m.density != 0 => {
                log::warn!("material id 0 ({}) is not void, replacing it with void", m.name);
            }
            Some(_) => {}
        }
        let color = by_id[VOID_ID as usize].as_ref().and_then(|m| m.color.clone());
        let name = match &by_id[VOID_ID as usize] {
            Some(m) if m.class == MaterialClass::Void => m.name.clone(),
            _ => VOID_NAME.to_string(),
        };
        by_id[VOID_ID as usize] = Some(Material {
            name,
            density: 0,
            class: MaterialClass::Void,
            color,
        });

        let fallback = Material::void();
        let mut density_by_id = Vec::with_capacity(by_id.len());
        let mut class_by_id = Vec::with_capacity(by_id.len());
        let mut census_slot_by_id = Vec::with_capacity(by_id.len());
        let mut census_names: Vec<String> = Vec::new();
        let mut variants_by_name: HashMap<String, Vec<MaterialId>> = HashMap::new();

        for (idx, entry) in by_id.iter().enumerate() {
            let m = entry.as_ref().unwrap_or(&fallback);
            density_by_id.push(m.density);
            class_by_id.push(m.class);

            if entry.is_none() || m.class.is_void() {
                census_slot_by_id.push(None);
                continue;
            }

            let slot = match census_names.iter().position(|n| *n == m.name) {
                Some(pos) => pos,
                None => {
                    census_names.push(m.name.clone());
                    census_names.len() - 1
                }
            };
            census_slot_by_id.push(Some(slot as u16));
            variants_by_name
                .entry(m.name.clone())
                .or_default()
                .push(idx as MaterialId);
        }

        log::debug!(
            "material table built: {} ids, {} census names",
            by_id.len(),
            census_names.len()
        );

        Self {
            materials: by_id,
            fallback,
            density_by_id,
            class_by_id,
            census_slot_by_id,
            census_names: census_names.into(),
            variants_by_name,
        }
    }

    pub fn from_definitions_json(json: &str) -> EngineResult<Self> {
        let defs: Vec<MaterialDefinition> =
            serde_json::from_str(json).map_err(EngineError::MaterialDefinitions)?;
        Ok(Self::build(defs))
    }

    /// Number of id slots (highest defined id + 1)
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn is_defined(&self, id: MaterialId) -> bool {
        matches!(self.materials.get(id as usize), Some(Some(_)))
    }

    /// Resolve an id. Undefined ids resolve to the void entry.
    pub fn lookup(&self, id: MaterialId) -> &Material {
        match self.materials.get(id as usize) {
            Some(Some(m)) => m,
            _ => &self.fallback,
        }
    }

    #[inline]
    pub fn density(&self, id: MaterialId) -> u32 {
        self.density_by_id.get(id as usize).copied().unwrap_or(0)
    }

    #[inline]
    pub fn class(&self, id: MaterialId) -> MaterialClass {
        self.class_by_id
            .get(id as usize)
            .copied()
            .unwrap_or(MaterialClass::Void)
    }

    /// Index of the id's name in `census_names`, `None` for void-class and undefined ids
    #[inline]
    pub fn census_slot(&self, id: MaterialId) -> Option<usize> {
        self.census_slot_by_id
            .get(id as usize)
            .copied()
            .flatten()
            .map(|s| s as usize)
    }

    /// Distinct names of non-void materials, in first-definition order
    pub fn census_names(&self) -> &[String] {
        &self.census_names
    }

    pub(crate) fn shared_census_names(&self) -> Arc<[String]> {
        Arc::clone(&self.census_names)
    }

    /// All ids sharing `name`, ascending
    pub fn variants(&self, name: &str) -> Option<&[MaterialId]> {
        self.variants_by_name.get(name).map(|v| v.as_slice())
    }

    /// Uniformly pick one colour variant of `name`
    pub fn random_variant(&self, name: &str, rng: &mut dyn RngCore) -> Option<MaterialId> {
        let ids = self.variants(name)?;
        if ids.is_empty() {
            return None;
        }
        Some(ids[rng.gen_range(0..ids.len())])
    }

    /// Defined materials as a JSON definition list (round-trips through `from_definitions_json`)
    pub fn manifest_json(&self) -> String {
        let out: Vec<ManifestEntry<'_>> = self
            .materials
            .iter()
            .enumerate()
            .filter_map(|(idx, m)| {
                m.as_ref().map(|m| ManifestEntry {
                    id: idx as MaterialId,
                    name: &m.name,
                    density: m.density,
                    class: m.class,
                    color: m.color.as_deref(),
                })
            })
            .collect();
        serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        Self::default_palette()
    }
}

#[derive(Serialize)]
struct ManifestEntry<'a> {
    id: MaterialId,
    name: &'a str,
    density: u32,
    class: MaterialClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn defs() -> Vec<MaterialDefinition> {
        vec![
            MaterialDefinition::new(1, "sand", 10, MaterialClass::Solid),
            MaterialDefinition::new(2, "sand", 10, MaterialClass::Solid),
            MaterialDefinition::new(5, "water", 5, MaterialClass::Liquid),
        ]
    }

    #[test]
    fn missing_void_is_synthesized() {
        let table = MaterialTable::build(defs());
        assert!(table.is_defined(VOID_ID));
        let void = table.lookup(VOID_ID);
        assert_eq!(void.class, MaterialClass::Void);
        assert_eq!(void.density, 0);
    }

    #[test]
    fn non_void_id_zero_is_replaced() {
        let mut d = defs();
        d.push(MaterialDefinition::new(0, "rock", 50, MaterialClass::Solid));
        let table = MaterialTable::build(d);
        assert_eq!(table.class(0), MaterialClass::Void);
        assert_eq!(table.density(0), 0);
        assert_eq!(table.lookup(0).name, VOID_NAME);
    }

    #[test]
    fn unknown_ids_fall_back_to_void() {
        let table = MaterialTable::build(defs());
        for id in [3u16, 4, 6, 999, MaterialId::MAX] {
            assert!(!table.is_defined(id));
            assert_eq!(table.lookup(id).class, MaterialClass::Void);
            assert_eq!(table.density(id), 0);
            assert_eq!(table.census_slot(id), None);
        }
    }

    #[test]
    fn census_names_are_deduplicated_in_order() {
        let table = MaterialTable::build(defs());
        assert_eq!(table.census_names(), &["sand".to_string(), "water".to_string()]);
        assert_eq!(table.census_slot(1), Some(0));
        assert_eq!(table.census_slot(2), Some(0));
        assert_eq!(table.census_slot(5), Some(1));
        assert_eq!(table.census_slot(VOID_ID), None);
    }

    #[test]
    fn duplicate_id_keeps_last() {
        let mut d = defs();
        d.push(MaterialDefinition::new(5, "oil", 3, MaterialClass::Liquid));
        let table = MaterialTable::build(d);
        assert_eq!(table.lookup(5).name, "oil");
        assert_eq!(table.density(5), 3);
        assert_eq!(table.variants("water"), None);
    }

    #[test]
    fn random_variant_stays_within_name() {
        let table = MaterialTable::build(defs());
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let id = table.random_variant("sand", &mut rng).unwrap();
            assert!(id == 1 || id == 2);
        }
        assert_eq!(table.random_variant("lava", &mut rng), None);
    }

    #[test]
    fn manifest_round_trips() {
        let table = MaterialTable::build(defs());
        let again = MaterialTable::from_definitions_json(&table.manifest_json()).unwrap();
        assert_eq!(again.len(), table.len());
        assert_eq!(again.census_names(), table.census_names());
        assert_eq!(again.density(5), 5);
    }

    #[test]
    fn bad_json_is_an_error() {
        let err = MaterialTable::from_definitions_json("{not json").unwrap_err();
        assert!(matches!(err, EngineError::MaterialDefinitions(_)));
    }
}
