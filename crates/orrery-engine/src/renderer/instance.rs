use bytemuck::{Pod, Zeroable};

/// Per-instance render data written to the shared buffer for the JS renderer.
/// Must match the JS protocol: 16 floats = 64 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// World-space position.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// World-space orientation quaternion.
    pub qx: f32,
    pub qy: f32,
    pub qz: f32,
    pub qw: f32,
    /// Sphere radius, or ring outer radius (already scaled).
    pub outer_radius: f32,
    /// Ring inner radius; 0 for spheres.
    pub inner_radius: f32,
    /// 0 = sphere, 1 = ring.
    pub kind: f32,
    /// Texture slot, or -1 for a flat color.
    pub texture: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    /// Tessellation hint; negative when the mesh is double-sided.
    pub segments: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 16;
}

/// Render buffer containing all mesh instances for the current frame.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for shared-buffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
