use crate::api::types::Rgba;

/// Geometry primitive understood by the browser renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    /// UV sphere.
    Sphere { radius: f32, segments: u32 },
    /// Flat annulus in the local XY plane.
    Ring { inner: f32, outer: f32, segments: u32 },
}

impl MeshShape {
    /// Wire code for the instance `kind` field.
    pub fn kind(&self) -> f32 {
        match self {
            MeshShape::Sphere { .. } => 0.0,
            MeshShape::Ring { .. } => 1.0,
        }
    }
}

/// Component for renderer-side meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: MeshShape,
    /// Flat color (or texture tint when a texture is bound).
    pub color: Rgba,
    /// Texture slot from the asset manifest, if any.
    pub texture: Option<u32>,
    /// Render both faces (rings seen from below).
    pub double_sided: bool,
}

impl MeshComponent {
    pub fn sphere(radius: f32, segments: u32) -> Self {
        Self {
            shape: MeshShape::Sphere { radius, segments },
            color: Rgba::WHITE,
            texture: None,
            double_sided: false,
        }
    }

    pub fn ring(inner: f32, outer: f32, segments: u32) -> Self {
        Self {
            shape: MeshShape::Ring { inner, outer, segments },
            color: Rgba::WHITE,
            texture: None,
            double_sided: true,
        }
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_default_to_double_sided() {
        let ring = MeshComponent::ring(10.0, 20.0, 32);
        assert!(ring.double_sided);
        assert_eq!(ring.shape.kind(), 1.0);
        assert!(!MeshComponent::sphere(6.0, 30).double_sided);
    }
}
