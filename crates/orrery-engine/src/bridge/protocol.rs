/// Shared-buffer layout.
/// Must stay in sync with the JS `protocol.js`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 28 floats]
/// [Instances: max_instances × 16 floats]
/// [Stars: max_stars × 3 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header every frame.
/// JS reads them from the header to compute offsets dynamically.

use crate::api::game::EngineConfig;
use crate::api::types::{Rgba, UiEvent};
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::instance::RenderInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 28;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_INSTANCES: usize = 3;
pub const HEADER_INSTANCE_COUNT: usize = 4;
pub const HEADER_MAX_STARS: usize = 5;
pub const HEADER_STAR_COUNT: usize = 6;
pub const HEADER_STARS_DIRTY: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
/// Background clear color, 3 floats.
pub const HEADER_BACKGROUND: usize = 10;
/// Star point color, 3 floats.
pub const HEADER_STAR_COLOR: usize = 13;
/// Camera eye position, 3 floats.
pub const HEADER_CAMERA_POSITION: usize = 16;
/// Camera look-at target, 3 floats.
pub const HEADER_CAMERA_TARGET: usize = 19;
pub const HEADER_CAMERA_FOV: usize = 22;
pub const HEADER_CAMERA_ASPECT: usize = 23;
pub const HEADER_CAMERA_NEAR: usize = 24;
pub const HEADER_CAMERA_FAR: usize = 25;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per star position (fixed wire format).
pub const STAR_FLOATS: usize = 3;

/// Per-frame values the runner publishes in the header.
#[derive(Debug, Clone, Copy)]
pub struct FrameHeader<'a> {
    pub frame: u32,
    pub instance_count: usize,
    pub star_count: usize,
    pub stars_dirty: bool,
    pub event_count: usize,
    pub background: Rgba,
    pub star_color: Rgba,
    pub camera: &'a PerspectiveCamera,
}

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum render instances.
    pub max_instances: usize,
    /// Maximum stars.
    pub max_stars: usize,
    /// Maximum UI events per frame.
    pub max_events: usize,

    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Size of star data section in floats.
    pub star_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where star data begins.
    pub star_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_stars: usize, max_events: usize) -> Self {
        let instance_data_floats = max_instances * RenderInstance::FLOATS;
        let star_data_floats = max_stars * STAR_FLOATS;
        let event_data_floats = max_events * UiEvent::FLOATS;

        let instance_data_offset = HEADER_FLOATS;
        let star_data_offset = instance_data_offset + instance_data_floats;
        let event_data_offset = star_data_offset + star_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;

        Self {
            max_instances,
            max_stars,
            max_events,
            instance_data_floats,
            star_data_floats,
            event_data_floats,
            instance_data_offset,
            star_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from an EngineConfig.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_instances, config.max_stars, config.max_events)
    }

    /// Fill the header block. Counts are clamped to the section capacities,
    /// so a reader never walks past the end of a section.
    pub fn write_header(&self, frame: &FrameHeader<'_>, out: &mut [f32; HEADER_FLOATS]) {
        out.fill(0.0);
        out[HEADER_LOCK] = 0.0;
        out[HEADER_FRAME_COUNTER] = frame.frame as f32;
        out[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        out[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        out[HEADER_INSTANCE_COUNT] = frame.instance_count.min(self.max_instances) as f32;
        out[HEADER_MAX_STARS] = self.max_stars as f32;
        out[HEADER_STAR_COUNT] = frame.star_count.min(self.max_stars) as f32;
        out[HEADER_STARS_DIRTY] = if frame.stars_dirty { 1.0 } else { 0.0 };
        out[HEADER_MAX_EVENTS] = self.max_events as f32;
        out[HEADER_EVENT_COUNT] = frame.event_count.min(self.max_events) as f32;

        let bg = frame.background;
        out[HEADER_BACKGROUND..HEADER_BACKGROUND + 3].copy_from_slice(&[bg.r, bg.g, bg.b]);
        let sc = frame.star_color;
        out[HEADER_STAR_COLOR..HEADER_STAR_COLOR + 3].copy_from_slice(&[sc.r, sc.g, sc.b]);

        let cam = frame.camera;
        out[HEADER_CAMERA_POSITION..HEADER_CAMERA_POSITION + 3]
            .copy_from_slice(&cam.position.to_array());
        out[HEADER_CAMERA_TARGET..HEADER_CAMERA_TARGET + 3]
            .copy_from_slice(&cam.target.to_array());
        out[HEADER_CAMERA_FOV] = cam.fov_y_deg;
        out[HEADER_CAMERA_ASPECT] = cam.aspect;
        out[HEADER_CAMERA_NEAR] = cam.near;
        out[HEADER_CAMERA_FAR] = cam.far;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let config = EngineConfig::default();
        let layout = ProtocolLayout::from_config(&config);

        assert_eq!(layout.max_instances, config.max_instances);
        assert_eq!(layout.instance_data_floats, config.max_instances * 16);
        assert_eq!(layout.star_data_floats, config.max_stars * 3);
        assert_eq!(layout.event_data_floats, config.max_events * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(40, 3000, 32);

        assert_eq!(layout.instance_data_offset, HEADER_FLOATS);
        assert_eq!(layout.star_data_offset, layout.instance_data_offset + 40 * 16);
        assert_eq!(layout.event_data_offset, layout.star_data_offset + 3000 * 3);
        assert_eq!(layout.buffer_total_floats, layout.event_data_offset + 32 * 4);
    }

    #[test]
    fn header_fields_land_at_their_indices() {
        let layout = ProtocolLayout::new(40, 3000, 4);
        let mut camera = PerspectiveCamera::new(45.0, 2.0, 0.1, 1000.0);
        camera.set_position(Vec3::new(-90.0, 140.0, 140.0));

        let mut out = [0.0; HEADER_FLOATS];
        layout.write_header(
            &FrameHeader {
                frame: 7,
                instance_count: 29,
                star_count: 3000,
                stars_dirty: true,
                event_count: 9,
                background: Rgba::BLACK,
                star_color: Rgba::WHITE,
                camera: &camera,
            },
            &mut out,
        );

        assert_eq!(out[HEADER_FRAME_COUNTER], 7.0);
        assert_eq!(out[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(out[HEADER_INSTANCE_COUNT], 29.0);
        assert_eq!(out[HEADER_STAR_COUNT], 3000.0);
        assert_eq!(out[HEADER_STARS_DIRTY], 1.0);
        // Clamped to capacity.
        assert_eq!(out[HEADER_EVENT_COUNT], 4.0);
        assert_eq!(&out[HEADER_STAR_COLOR..HEADER_STAR_COLOR + 3], &[1.0, 1.0, 1.0]);
        assert_eq!(out[HEADER_CAMERA_POSITION], -90.0);
        assert_eq!(out[HEADER_CAMERA_ASPECT], 2.0);
        assert_eq!(out[HEADER_CAMERA_FAR], 1000.0);
    }
}
