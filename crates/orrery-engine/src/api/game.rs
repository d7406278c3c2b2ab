use crate::api::error::EngineResult;
use crate::api::types::{EntityId, Rgba, UiEvent};
use crate::assets::registry::TextureRegistry;
use crate::core::scene::Scene;
use crate::extensions::transform::TransformGraph;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::rng::Rng;
use crate::systems::starfield::StarField;

/// Configuration for the engine, provided by the simulation.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of render instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of stars published to the renderer (default: 4096).
    pub max_stars: usize,
    /// Maximum number of UI events per frame (default: 32).
    pub max_events: usize,
    /// When true the runner refuses to tick until `load_assets` succeeded.
    pub requires_assets: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_instances: 64,
            max_stars: 4096,
            max_events: 32,
            requires_assets: false,
        }
    }
}

/// Scene-wide colors the renderer applies outside of meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    /// Clear color.
    pub background: Rgba,
    /// Color of the starfield points.
    pub star_color: Rgba,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            background: Rgba::BLACK,
            star_color: Rgba::WHITE,
        }
    }
}

/// The core contract every simulation must fulfill.
pub trait Simulation {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> EngineConfig {
        EngineConfig::default()
    }

    /// Apply a JSON configuration document. Called before init, if at all.
    fn configure(&mut self, _json: &str) -> EngineResult<()> {
        Ok(())
    }

    /// Setup initial state, spawn entities, position the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Bind textures from the loaded manifest. An error aborts startup.
    fn load_assets(&mut self, _ctx: &mut EngineContext, _textures: &TextureRegistry) -> EngineResult<()> {
        Ok(())
    }

    /// One tick per rendered frame: apply queued input, advance, publish events.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// JSON description of the simulation for the UI layer.
    fn describe(&self) -> String {
        String::from("{}")
    }
}

/// Mutable access to engine state, passed to Simulation::init and Simulation::update.
pub struct EngineContext {
    pub scene: Scene,
    pub transforms: TransformGraph,
    pub stars: StarField,
    pub camera: PerspectiveCamera,
    pub backdrop: Backdrop,
    pub rng: Rng,
    pub events: Vec<UiEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new(seed: u64) -> Self {
        Self {
            scene: Scene::new(),
            transforms: TransformGraph::new(),
            stars: StarField::default(),
            camera: PerspectiveCamera::default(),
            backdrop: Backdrop::default(),
            rng: Rng::new(seed.wrapping_add(7919)),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a UI event to be forwarded to JS.
    pub fn emit_event(&mut self, event: UiEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Advance the starfield one step using the context's RNG.
    pub fn tick_stars(&mut self) {
        self.stars.tick(&mut self.rng);
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(42)
    }
}
