/// Solar System: textured sun, nine planets on circular orbits, drifting starfield.
///
/// Planets hang off per-planet orbit pivots in the transform graph; turning a
/// pivot about +Y carries the planet (and its ring) around the sun.
/// Hover picking, theme and panel layout are published to the UI as events.
/// Dragging orbits the camera around the sun; picking always uses the moved camera.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3};
use serde_json::json;
use orrery_engine::*;

use crate::bodies::{self, BodyRegistry, BODIES, PLANET_COUNT};
use crate::command::{self, Command};
use crate::controls::{self, OrbitControls};
use crate::orbit;
use crate::preset::Preset;
use crate::view::{self, Theme, ViewState};

// ── Geometry ─────────────────────────────────────────────────────────

const SPHERE_SEGMENTS: u32 = 30;
const PLANET_RING_SEGMENTS: u32 = 32;
const GUIDE_SEGMENTS: u32 = 64;
/// Orbit guides span distance ± this.
const GUIDE_HALF_WIDTH: f32 = 0.1;
const GUIDE_ALPHA: f32 = 0.5;

const SUN_TAG: &str = "sun";
const PIVOT_TAG: &str = "orbit-pivot";
const GUIDE_TAG: &str = "orbit-guide";

// ── UI event kinds to JS ─────────────────────────────────────────────

/// a = hovered planet or -1, b/c = tooltip position.
const EVENT_TOOLTIP: f32 = 1.0;
/// a = planet, b = orbital rate.
const EVENT_RATE: f32 = 2.0;
/// a = paused.
const EVENT_PAUSED: f32 = 3.0;
/// a = dark mode.
const EVENT_THEME: f32 = 4.0;
/// a = menu button visible, b = panel visible.
const EVENT_LAYOUT: f32 = 5.0;

/// Rings are authored in the XY plane; this lays them flat in XZ.
fn flat_tilt() -> Quat {
    Quat::from_rotation_x(-FRAC_PI_2)
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}

fn bind_texture(scene: &mut Scene, id: Option<EntityId>, slot: u32) {
    if let Some(mesh) = id.and_then(|id| scene.get_mut(id)).and_then(|e| e.mesh.as_mut()) {
        mesh.texture = Some(slot);
    }
}

fn rgba_json(c: Rgba) -> serde_json::Value {
    json!([c.r, c.g, c.b, c.a])
}

fn palette_json(theme: Theme) -> serde_json::Value {
    let p = theme.palette();
    json!({
        "background": rgba_json(p.background),
        "stars": rgba_json(p.stars),
        "orbit_guides": rgba_json(p.orbit_guides),
        "panel": rgba_json(p.panel),
        "panel_text": rgba_json(p.panel_text),
        "tooltip": rgba_json(p.tooltip),
        "tooltip_text": rgba_json(p.tooltip_text),
    })
}

// ── Simulation struct ────────────────────────────────────────────────

pub struct SolarSystem {
    preset: Preset,
    registry: BodyRegistry,
    view: ViewState,
    controls: OrbitControls,

    // Entity IDs
    sun_id: Option<EntityId>,
    pivot_ids: [Option<EntityId>; PLANET_COUNT],
    planet_ids: [Option<EntityId>; PLANET_COUNT],
    ring_ids: [Option<EntityId>; PLANET_COUNT],
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_preset(Preset::default())
    }

    pub fn with_preset(preset: Preset) -> Self {
        Self {
            registry: BodyRegistry::new(preset.self_rotation.rates()),
            view: ViewState::new(preset.responsive_menu),
            controls: OrbitControls::new(),
            preset,
            sun_id: None,
            pivot_ids: [None; PLANET_COUNT],
            planet_ids: [None; PLANET_COUNT],
            ring_ids: [None; PLANET_COUNT],
        }
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    fn apply(&mut self, ctx: &mut EngineContext, command: Command) {
        log::debug!("{:?}", command);
        match command {
            Command::Hover { x, y } => {
                let pointer = Vec2::new(x, y);
                self.controls.drag_to(&mut ctx.camera, pointer, self.view.viewport.y);
                self.resolve_hover(&ctx.camera, pointer);
            }
            Command::DragStart { x, y } => self.controls.begin_drag(Vec2::new(x, y)),
            Command::DragEnd => self.controls.end_drag(),
            Command::Zoom { steps } => self.controls.zoom(&mut ctx.camera, steps),
            Command::Resize { width, height } => {
                if self.view.resize(width, height) && ctx.camera.resize(width, height) {
                    ctx.camera.set_position(view::camera_position(ctx.camera.aspect));
                } else {
                    log::debug!("ignoring zero-area resize {}x{}", width, height);
                }
            }
            Command::SetOrbitalRate { body, rate } => {
                self.registry.set_orbital_rate(body, rate);
            }
            Command::TogglePause => self.view.toggle_pause(),
            Command::ToggleDarkMode => {
                self.view.toggle_dark_mode();
                self.apply_theme(ctx);
            }
            Command::ToggleMenu => self.view.toggle_menu(),
        }
    }

    /// Pick the nearest planet under a client-pixel pointer.
    fn resolve_hover(&mut self, camera: &PerspectiveCamera, pointer: Vec2) {
        let Some(ndc) = pixels_to_ndc(pointer, self.view.viewport) else {
            return;
        };
        let ray = camera.ray_from_ndc(ndc);
        let hit = pick_nearest(&ray, self.registry.bounding_spheres());
        self.view.set_hover(hit.map(|h| h.index), pointer);
    }

    /// Push theme colors into the backdrop and the orbit guides.
    fn apply_theme(&self, ctx: &mut EngineContext) {
        let palette = self.view.theme().palette();
        ctx.backdrop = Backdrop {
            background: palette.background,
            star_color: palette.stars,
        };
        for guide in ctx.scene.tagged_mut(GUIDE_TAG) {
            if let Some(mesh) = guide.mesh.as_mut() {
                mesh.color = palette.orbit_guides.with_alpha(GUIDE_ALPHA);
            }
        }
    }

    /// Copy registry angles into the transform graph.
    fn sync_transforms(&self, ctx: &mut EngineContext) {
        if let Some(local) = self.sun_id.and_then(|id| ctx.transforms.local_mut(id)) {
            local.rotation = Quat::from_rotation_y(self.registry.sun_angle);
        }
        for (i, body) in self.registry.bodies().iter().enumerate() {
            if let Some(local) = self.pivot_ids[i].and_then(|id| ctx.transforms.local_mut(id)) {
                local.rotation = body.orbit_rotation();
            }
            if let Some(local) = self.planet_ids[i].and_then(|id| ctx.transforms.local_mut(id)) {
                local.rotation = Quat::from_rotation_y(body.self_angle);
            }
        }
    }

    fn emit_events(&self, ctx: &mut EngineContext) {
        let tooltip = self.view.tooltip_pos;
        ctx.emit_event(UiEvent::new(
            EVENT_TOOLTIP,
            self.view.hovered.map_or(-1.0, |i| i as f32),
            tooltip.x,
            tooltip.y,
        ));

        for (i, body) in self.registry.bodies().iter().enumerate() {
            ctx.emit_event(UiEvent::new(EVENT_RATE, i as f32, body.orbital_rate, 0.0));
        }

        ctx.emit_event(UiEvent::new(EVENT_PAUSED, flag(self.view.paused), 0.0, 0.0));
        ctx.emit_event(UiEvent::new(EVENT_THEME, flag(self.view.dark_mode), 0.0, 0.0));
        ctx.emit_event(UiEvent::new(
            EVENT_LAYOUT,
            flag(self.view.menu_button_visible),
            flag(self.view.panel_visible),
            0.0,
        ));
    }

    fn spawn_sun(&mut self, ctx: &mut EngineContext) {
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(SUN_TAG)
                .with_mesh(MeshComponent::sphere(bodies::SUN_RADIUS, SPHERE_SEGMENTS)),
        );
        ctx.transforms.register_with(id, LocalTransform::new());
        self.sun_id = Some(id);
    }

    fn spawn_planets(&mut self, ctx: &mut EngineContext) {
        for (i, body) in self.registry.bodies().iter().enumerate() {
            let offset = Vec3::new(body.distance, 0.0, 0.0);

            let pivot = ctx.next_id();
            ctx.scene.spawn(Entity::new(pivot).with_tag(PIVOT_TAG));
            ctx.transforms.register_with(pivot, LocalTransform::new().with_rotation(body.orbit_rotation()));
            self.pivot_ids[i] = Some(pivot);

            let planet = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(planet)
                    .with_tag(body.name)
                    .with_mesh(MeshComponent::sphere(body.radius, SPHERE_SEGMENTS)),
            );
            ctx.transforms.register_with(
                planet,
                LocalTransform::new()
                    .with_offset(offset)
                    .with_rotation(Quat::from_rotation_y(body.self_angle)),
            );
            ctx.transforms.set_parent(planet, Some(pivot));
            self.planet_ids[i] = Some(planet);

            // Rings ride the pivot, not the planet, so they don't spin with it.
            if let Some(ring) = body.ring {
                let ring_id = ctx.next_id();
                ctx.scene.spawn(
                    Entity::new(ring_id)
                        .with_tag(format!("{} ring", body.name))
                        .with_mesh(MeshComponent::ring(ring.inner, ring.outer, PLANET_RING_SEGMENTS)),
                );
                ctx.transforms.register_with(
                    ring_id,
                    LocalTransform::new().with_offset(offset).with_rotation(flat_tilt()),
                );
                ctx.transforms.set_parent(ring_id, Some(pivot));
                self.ring_ids[i] = Some(ring_id);
            }
        }
    }

    fn spawn_orbit_guides(&self, ctx: &mut EngineContext) {
        let color = self.view.theme().palette().orbit_guides.with_alpha(GUIDE_ALPHA);
        for body in self.registry.bodies() {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(GUIDE_TAG)
                    .with_rotation(flat_tilt())
                    .with_mesh(MeshComponent::ring(
                        body.distance - GUIDE_HALF_WIDTH,
                        body.distance + GUIDE_HALF_WIDTH,
                        GUIDE_SEGMENTS,
                    ).with_color(color)),
            );
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation for SolarSystem {
    fn config(&self) -> EngineConfig {
        EngineConfig {
            max_instances: 64,
            max_stars: self.preset.star_count,
            max_events: 32,
            requires_assets: true,
        }
    }

    fn configure(&mut self, json: &str) -> EngineResult<()> {
        let preset = Preset::from_json(json)?;
        log::info!("preset: {}", preset.name);
        *self = Self::with_preset(preset);
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.view = ViewState::new(self.preset.responsive_menu);
        self.controls = OrbitControls::new();

        ctx.camera = PerspectiveCamera::new(view::CAMERA_FOV_DEG, 1.0, view::CAMERA_NEAR, view::CAMERA_FAR);
        ctx.camera.set_position(view::camera_position(ctx.camera.aspect));
        ctx.camera.look_at(Vec3::ZERO);

        self.spawn_sun(ctx);
        self.spawn_planets(ctx);
        self.spawn_orbit_guides(ctx);

        ctx.stars = StarField::initialize(self.preset.star_count, self.preset.star_bound, &mut ctx.rng);
        self.apply_theme(ctx);

        log::info!(
            "solar system: {} planets, {} stars, {} entities",
            self.registry.len(),
            ctx.stars.len(),
            ctx.scene.len()
        );
    }

    fn load_assets(&mut self, ctx: &mut EngineContext, textures: &TextureRegistry) -> EngineResult<()> {
        // Validate everything before touching the scene.
        for name in bodies::required_textures() {
            textures.require(name)?;
        }

        bind_texture(&mut ctx.scene, self.sun_id, textures.require(bodies::SUN_TEXTURE)?);
        for (i, spec) in BODIES.iter().enumerate() {
            bind_texture(&mut ctx.scene, self.planet_ids[i], textures.require(spec.texture)?);
            if let Some(ring) = spec.ring {
                bind_texture(&mut ctx.scene, self.ring_ids[i], textures.require(ring.texture)?);
            }
        }
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Handle input ─────────────────────────────────────────────
        for command in command::decode(input) {
            self.apply(ctx, command);
        }

        // ── Advance ──────────────────────────────────────────────────
        let paused = self.view.paused;
        orbit::advance(&mut self.registry, paused);
        if !paused {
            ctx.tick_stars();
            self.sync_transforms(ctx);
        }

        // ── Emit UI events ───────────────────────────────────────────
        self.emit_events(ctx);
    }

    fn describe(&self) -> String {
        let planets: Vec<serde_json::Value> = self
            .registry
            .bodies()
            .iter()
            .enumerate()
            .map(|(i, b)| {
                json!({
                    "index": i,
                    "name": b.name,
                    "radius": b.radius,
                    "distance": b.distance,
                    "orbital_rate": b.orbital_rate,
                    "ringed": b.ring.is_some(),
                })
            })
            .collect();

        json!({
            "preset": self.preset.name,
            "responsive_menu": self.preset.responsive_menu,
            "slider": {
                "min": bodies::MIN_ORBITAL_RATE,
                "max": bodies::MAX_ORBITAL_RATE,
                "step": bodies::ORBITAL_RATE_STEP,
            },
            "camera": {
                "min_distance": controls::MIN_CAMERA_DISTANCE,
                "max_distance": controls::MAX_CAMERA_DISTANCE,
                "zoom_step": controls::ZOOM_STEP_SCALE,
            },
            "bodies": planets,
            "themes": {
                "dark": palette_json(Theme::Dark),
                "light": palette_json(Theme::Light),
            },
        })
        .to_string()
    }
}
