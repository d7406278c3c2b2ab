pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Simulation, EngineConfig, EngineContext, Backdrop};
pub use api::error::{EngineError, EngineResult};
pub use api::types::{EntityId, UiEvent, Rgba};
pub use components::entity::Entity;
pub use components::mesh::{MeshComponent, MeshShape};
pub use crate::core::scene::Scene;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use renderer::camera::{PerspectiveCamera, pixels_to_ndc};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::AssetManifest;
pub use assets::registry::TextureRegistry;
pub use bridge::protocol::{ProtocolLayout, FrameHeader, HEADER_FLOATS};
pub use systems::rng::Rng;
pub use systems::starfield::StarField;
pub use systems::picking::{Ray, Sphere, PickHit, pick_nearest};
pub use systems::render::build_render_buffer;

// Extensions: decoupled optional systems
pub use extensions::{TransformGraph, LocalTransform};
