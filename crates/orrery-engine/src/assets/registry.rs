use std::collections::HashMap;
use crate::api::error::{EngineError, EngineResult};
use crate::assets::manifest::AssetManifest;

/// Registry of named texture slots, built from an AssetManifest.
/// Provides name-based slot lookup for simulation code.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    slots: HashMap<String, u32>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed AssetManifest. A later duplicate name
    /// shadows an earlier one.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let slots = manifest
            .textures
            .iter()
            .enumerate()
            .map(|(slot, desc)| (desc.name.clone(), slot as u32))
            .collect();
        Self { slots }
    }

    /// Look up a texture slot by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.slots.get(name).copied()
    }

    /// Look up a texture that the simulation cannot run without.
    pub fn require(&self, name: &str) -> EngineResult<u32> {
        self.get(name)
            .ok_or_else(|| EngineError::MissingTexture(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
