use serde::{Deserialize, Serialize};
use crate::api::error::{EngineError, EngineResult};

/// Asset manifest describing the textures a simulation may bind.
/// Loaded from a JSON document at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Textures in slot order: a texture's slot is its index here.
    #[serde(default)]
    pub textures: Vec<TextureDescriptor>,
}

/// Describes a single texture image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Lookup name (e.g., "saturn_ring").
    pub name: String,
    /// Relative path to the image file (e.g., "img/saturn_ring.png").
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(EngineError::Manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_texture_manifest() {
        let json = r#"{
            "textures": [
                { "name": "sun", "path": "img/sun2.png" },
                { "name": "uranus_ring", "path": "img/uranus ring.png" }
            ]
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.textures.len(), 2);
        assert_eq!(manifest.textures[1].path, "img/uranus ring.png");
    }

    #[test]
    fn empty_document_has_no_textures() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.textures.is_empty());
    }

    #[test]
    fn malformed_json_is_a_manifest_error() {
        let err = AssetManifest::from_json("{ textures: ").unwrap_err();
        assert!(matches!(err, EngineError::Manifest(_)));
    }
}
