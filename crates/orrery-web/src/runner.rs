use orrery_engine::{
    Simulation, EngineConfig, EngineContext, EngineResult,
    InputEvent, InputQueue, RenderBuffer,
    AssetManifest, TextureRegistry,
    ProtocolLayout, FrameHeader, HEADER_FLOATS,
};
use orrery_engine::systems::render::build_render_buffer;

/// Generic simulation runner that wires up the engine loop.
///
/// Each concrete simulation creates a `thread_local!` SimRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct SimRunner<S: Simulation> {
    sim: S,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    config: EngineConfig,
    layout: ProtocolLayout,
    header: [f32; HEADER_FLOATS],
    frame: u32,
    initialized: bool,
    assets_ready: bool,
}

impl<S: Simulation> SimRunner<S> {
    pub fn new(sim: S, seed: u64) -> Self {
        let config = sim.config();
        let layout = ProtocolLayout::from_config(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);

        Self {
            sim,
            ctx: EngineContext::new(seed),
            input: InputQueue::new(),
            render_buffer,
            layout,
            config,
            header: [0.0; HEADER_FLOATS],
            frame: 0,
            initialized: false,
            assets_ready: false,
        }
    }

    /// Apply a JSON configuration document. Call before `init`.
    pub fn configure(&mut self, json: &str) -> EngineResult<()> {
        self.sim.configure(json)
    }

    /// Initialize the simulation. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.sim.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.sim.init(&mut self.ctx);
        self.initialized = true;
        self.assets_ready = !self.config.requires_assets;
        self.publish();
    }

    /// Parse the asset manifest and let the simulation bind its textures.
    /// On failure the runner stays stopped.
    pub fn load_manifest(&mut self, json: &str) -> EngineResult<()> {
        let manifest = AssetManifest::from_json(json)?;
        let textures = TextureRegistry::from_manifest(&manifest);
        self.sim.load_assets(&mut self.ctx, &textures)?;
        self.assets_ready = true;
        log::info!("assets ready: {} textures", textures.len());
        self.publish();
        Ok(())
    }

    /// Whether ticks advance the simulation.
    pub fn is_running(&self) -> bool {
        self.initialized && self.assets_ready
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update the simulation once, then rebuild the output buffers.
    /// While stopped, queued input is discarded except the latest resize.
    pub fn tick(&mut self) {
        if !self.is_running() {
            let resize = self
                .input
                .drain()
                .into_iter()
                .rev()
                .find(|e| matches!(e, InputEvent::Resize { .. }));
            if let Some(resize) = resize {
                self.input.push(resize);
            }
            return;
        }

        self.ctx.clear_frame_data();
        self.sim.update(&mut self.ctx, &self.input);
        self.input.drain();

        if self.ctx.events.len() > self.layout.max_events {
            log::warn!(
                "dropping {} UI events over capacity",
                self.ctx.events.len() - self.layout.max_events
            );
            self.ctx.events.truncate(self.layout.max_events);
        }

        self.frame = self.frame.wrapping_add(1);
        self.publish();
    }

    /// Sync transforms, rebuild the render buffer and rewrite the header.
    fn publish(&mut self) {
        self.ctx.transforms.propagate(&mut self.ctx.scene);
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);

        let stars_dirty = self.ctx.stars.take_dirty();
        self.layout.write_header(
            &FrameHeader {
                frame: self.frame,
                instance_count: self.render_buffer.instances.len(),
                star_count: self.ctx.stars.len(),
                stars_dirty,
                event_count: self.ctx.events.len(),
                background: self.ctx.backdrop.background,
                star_color: self.ctx.backdrop.star_color,
                camera: &self.ctx.camera,
            },
            &mut self.header,
        );
    }

    pub fn describe(&self) -> String {
        self.sim.describe()
    }

    /// Read-only access to the wrapped simulation.
    pub fn simulation(&self) -> &S {
        &self.sim
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Pointer accessors for shared-buffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count().min(self.layout.max_instances as u32)
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.ctx.stars.positions_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.ctx.stars.len().min(self.layout.max_stars) as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Capacity accessors (read by JS via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_stars(&self) -> u32 {
        self.layout.max_stars as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
