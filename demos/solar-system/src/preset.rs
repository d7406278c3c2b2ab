/// Scene presets: the variants of the orrery that differ only in layout and
/// planet spin rates.

use serde::{Deserialize, Serialize};
use orrery_engine::{EngineError, EngineResult};

use crate::bodies::PLANET_COUNT;

pub const DEFAULT_STAR_COUNT: usize = 3000;
pub const DEFAULT_STAR_BOUND: f32 = 1000.0;
/// Largest star field a preset may request.
pub const MAX_STAR_COUNT: usize = 100_000;

/// Self-rotation rates per tick (radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfRotation {
    /// Every planet spins at the same rate.
    Uniform(f32),
    /// One rate per planet, in planet order.
    PerBody([f32; PLANET_COUNT]),
}

impl SelfRotation {
    pub fn rates(&self) -> [f32; PLANET_COUNT] {
        match *self {
            SelfRotation::Uniform(rate) => [rate; PLANET_COUNT],
            SelfRotation::PerBody(rates) => rates,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preset {
    pub name: String,
    /// Show a menu button on narrow viewports that toggles the control panel.
    pub responsive_menu: bool,
    pub self_rotation: SelfRotation,
    pub star_count: usize,
    /// Half-extent of the cube stars spawn in.
    pub star_bound: f32,
}

impl Default for Preset {
    fn default() -> Self {
        Self::responsive()
    }
}

/// Either `{"preset": "<name>"}` or a full preset object.
#[derive(Deserialize)]
#[serde(untagged)]
enum PresetDocument {
    Named { preset: String },
    Full(Preset),
}

impl Preset {
    pub fn responsive() -> Self {
        Self {
            name: "responsive".into(),
            responsive_menu: true,
            self_rotation: SelfRotation::Uniform(0.01),
            star_count: DEFAULT_STAR_COUNT,
            star_bound: DEFAULT_STAR_BOUND,
        }
    }

    pub fn classic() -> Self {
        Self {
            name: "classic".into(),
            responsive_menu: false,
            // Representative values chosen inside the 0.002..0.04 band, not measured rates.
            self_rotation: SelfRotation::PerBody([
                0.004, // Mercury
                0.002, // Venus
                0.02,  // Earth
                0.018, // Mars
                0.04,  // Jupiter
                0.038, // Saturn
                0.03,  // Uranus
                0.032, // Neptune
                0.008, // Pluto
            ]),
            star_count: DEFAULT_STAR_COUNT,
            star_bound: DEFAULT_STAR_BOUND,
        }
    }

    /// Look up a built-in preset.
    pub fn named(name: &str) -> EngineResult<Self> {
        match name {
            "responsive" => Ok(Self::responsive()),
            "classic" => Ok(Self::classic()),
            other => Err(EngineError::UnknownPreset(other.to_string())),
        }
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        let doc: PresetDocument = serde_json::from_str(json).map_err(EngineError::Config)?;
        match doc {
            PresetDocument::Named { preset } => Self::named(&preset),
            PresetDocument::Full(preset) => {
                preset.validate()?;
                Ok(preset)
            }
        }
    }

    /// Reject star fields that are empty, oversized or unbounded, and
    /// spin rates that are not finite.
    fn validate(&self) -> EngineResult<()> {
        let invalid = |reason: String| Err(EngineError::InvalidPreset(format!("{}: {}", self.name, reason)));
        if self.star_count == 0 || self.star_count > MAX_STAR_COUNT {
            return invalid(format!("star_count {} outside 1..={}", self.star_count, MAX_STAR_COUNT));
        }
        if !(self.star_bound.is_finite() && self.star_bound > 0.0) {
            return invalid(format!("star_bound {} must be finite and positive", self.star_bound));
        }
        if self.self_rotation.rates().iter().any(|r| !r.is_finite()) {
            return invalid("self_rotation rates must be finite".to_string());
        }
        Ok(())
    }
}
