/// Decoding of queued input into simulation commands.

use orrery_engine::{InputEvent, InputQueue};

// ── Custom event kinds from the UI ───────────────────────────────────

/// a = body index, b = new orbital rate.
pub const CUSTOM_SET_RATE: u32 = 1;
pub const CUSTOM_TOGGLE_PAUSE: u32 = 2;
pub const CUSTOM_TOGGLE_DARK: u32 = 3;
pub const CUSTOM_TOGGLE_MENU: u32 = 4;
/// a = zoom steps, positive zooms in.
pub const CUSTOM_ZOOM: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pointer moved to client pixels (x, y).
    Hover { x: f32, y: f32 },
    /// Press at client pixels (x, y); starts a camera drag.
    DragStart { x: f32, y: f32 },
    DragEnd,
    Zoom { steps: f32 },
    Resize { width: f32, height: f32 },
    SetOrbitalRate { body: usize, rate: f32 },
    TogglePause,
    ToggleDarkMode,
    ToggleMenu,
}

impl Command {
    pub fn from_input(event: &InputEvent) -> Option<Self> {
        match *event {
            InputEvent::PointerMove { x, y } => Some(Command::Hover { x, y }),
            InputEvent::PointerDown { x, y } => Some(Command::DragStart { x, y }),
            InputEvent::PointerUp { .. } => Some(Command::DragEnd),
            InputEvent::Resize { width, height } => Some(Command::Resize { width, height }),
            InputEvent::Custom { kind, a, b, .. } => match kind {
                CUSTOM_SET_RATE => {
                    if !(a.is_finite() && a >= 0.0) {
                        log::warn!("set-rate event with invalid body index {}", a);
                        return None;
                    }
                    Some(Command::SetOrbitalRate { body: a as usize, rate: b })
                }
                CUSTOM_TOGGLE_PAUSE => Some(Command::TogglePause),
                CUSTOM_TOGGLE_DARK => Some(Command::ToggleDarkMode),
                CUSTOM_TOGGLE_MENU => Some(Command::ToggleMenu),
                CUSTOM_ZOOM => Some(Command::Zoom { steps: a }),
                other => {
                    log::debug!("ignoring custom event kind {}", other);
                    None
                }
            },
        }
    }
}

/// All commands queued since the last tick, in arrival order.
pub fn decode(input: &InputQueue) -> Vec<Command> {
    input.iter().filter_map(Command::from_input).collect()
}
