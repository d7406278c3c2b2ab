/// Transient view state: pause, theme, hover tooltip and panel layout.

use glam::{Vec2, Vec3};
use orrery_engine::Rgba;

// ── Layout ───────────────────────────────────────────────────────────

/// Viewports at most this wide get the menu button.
pub const MENU_BREAKPOINT: f32 = 768.0;
/// Tooltip is drawn this far right/below the pointer.
pub const TOOLTIP_OFFSET: Vec2 = Vec2::new(10.0, 10.0);

// ── Camera ───────────────────────────────────────────────────────────

pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
const CAMERA_LANDSCAPE: Vec3 = Vec3::new(-90.0, 140.0, 140.0);
const CAMERA_PORTRAIT: Vec3 = Vec3::new(-60.0, 140.0, 140.0);

/// Eye position for a viewport aspect; portrait viewports move closer in x.
pub fn camera_position(aspect: f32) -> Vec3 {
    if aspect < 1.0 { CAMERA_PORTRAIT } else { CAMERA_LANDSCAPE }
}

// ── Theme ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Colors for one theme. Panel and tooltip colors are for the UI layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgba,
    pub stars: Rgba,
    pub orbit_guides: Rgba,
    pub panel: Rgba,
    pub panel_text: Rgba,
    pub tooltip: Rgba,
    pub tooltip_text: Rgba,
}

const DARK: Palette = Palette {
    background: Rgba::BLACK,
    stars: Rgba::WHITE,
    orbit_guides: Rgba::WHITE,
    panel: Rgba::BLACK.with_alpha(0.5),
    panel_text: Rgba::WHITE,
    tooltip: Rgba::BLACK.with_alpha(0.7),
    tooltip_text: Rgba::WHITE,
};

const LIGHT: Palette = Palette {
    background: Rgba::WHITE,
    stars: Rgba::BLACK,
    orbit_guides: Rgba::BLACK,
    panel: Rgba::WHITE.with_alpha(0.9),
    panel_text: Rgba::BLACK,
    tooltip: Rgba::WHITE.with_alpha(0.9),
    tooltip_text: Rgba::BLACK,
};

impl Theme {
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

// ── View state ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub paused: bool,
    pub dark_mode: bool,
    /// Planet under the pointer, if any.
    pub hovered: Option<usize>,
    /// Tooltip top-left in client pixels.
    pub tooltip_pos: Vec2,
    /// Last accepted viewport size; zero until the first resize.
    pub viewport: Vec2,
    pub menu_button_visible: bool,
    pub panel_visible: bool,
    responsive_menu: bool,
}

impl ViewState {
    /// Until a viewport is known the panel shows and the menu button hides.
    pub fn new(responsive_menu: bool) -> Self {
        Self {
            paused: false,
            dark_mode: true,
            hovered: None,
            tooltip_pos: Vec2::ZERO,
            viewport: Vec2::ZERO,
            menu_button_visible: false,
            panel_visible: true,
            responsive_menu,
        }
    }

    pub fn has_viewport(&self) -> bool {
        self.viewport.x > 0.0 && self.viewport.y > 0.0
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode { Theme::Dark } else { Theme::Light }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Menu button click: show or hide the panel.
    pub fn toggle_menu(&mut self) {
        if !self.responsive_menu {
            log::debug!("menu toggle ignored: no menu button in this preset");
            return;
        }
        self.panel_visible = !self.panel_visible;
    }

    /// Accept a new viewport size. Returns false for zero-area sizes.
    ///
    /// The first accepted size picks the initial layout (panel hidden behind
    /// the button on narrow screens). Later resizes always show the panel.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if !(width > 0.0 && height > 0.0) {
            return false;
        }
        let first = !self.has_viewport();
        self.viewport = Vec2::new(width, height);

        if self.responsive_menu {
            let narrow = width <= MENU_BREAKPOINT;
            self.menu_button_visible = narrow;
            self.panel_visible = if first { !narrow } else { true };
        }
        true
    }

    /// Record the hover result for a pointer at `pointer` client pixels.
    pub fn set_hover(&mut self, hovered: Option<usize>, pointer: Vec2) {
        self.hovered = hovered;
        if hovered.is_some() {
            self.tooltip_pos = pointer + TOOLTIP_OFFSET;
        }
    }
}
