use crate::components::entity::Entity;
use crate::components::mesh::MeshShape;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Inactive entities and entities without meshes (pivots) are skipped.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }
        let Some(mesh) = &entity.mesh else { continue };

        let (outer, inner, segments) = match mesh.shape {
            MeshShape::Sphere { radius, segments } => (radius, 0.0, segments),
            MeshShape::Ring { inner, outer, segments } => (outer, inner, segments),
        };
        let segments = segments as f32;

        buffer.push(RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            qx: entity.rotation.x,
            qy: entity.rotation.y,
            qz: entity.rotation.z,
            qw: entity.rotation.w,
            outer_radius: outer * entity.scale,
            inner_radius: inner * entity.scale,
            kind: mesh.shape.kind(),
            texture: mesh.texture.map(|slot| slot as f32).unwrap_or(-1.0),
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            a: mesh.color.a,
            segments: if mesh.double_sided { -segments } else { segments },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{EntityId, Rgba};
    use crate::components::mesh::MeshComponent;
    use glam::Vec3;

    #[test]
    fn pivots_and_inactive_entities_are_skipped() {
        let mut hidden = Entity::new(EntityId(3)).with_mesh(MeshComponent::sphere(1.0, 8));
        hidden.active = false;
        let entities = vec![
            Entity::new(EntityId(1)).with_tag("pivot"),
            Entity::new(EntityId(2))
                .with_pos(Vec3::new(62.0, 0.0, 0.0))
                .with_mesh(MeshComponent { texture: Some(3), ..MeshComponent::sphere(6.0, 30) }),
            hidden,
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 1);
        let inst = buffer.instances[0];
        assert_eq!(inst.x, 62.0);
        assert_eq!(inst.outer_radius, 6.0);
        assert_eq!(inst.texture, 3.0);
        assert_eq!(inst.segments, 30.0);
        assert_eq!(inst.qw, 1.0);
    }

    #[test]
    fn rings_carry_both_radii_and_color() {
        let entities = vec![Entity::new(EntityId(1)).with_mesh(
            MeshComponent::ring(27.9, 28.1, 64).with_color(Rgba::WHITE.with_alpha(0.5)),
        )];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        let inst = buffer.instances[0];
        assert_eq!(inst.kind, 1.0);
        assert_eq!(inst.inner_radius, 27.9);
        assert_eq!(inst.outer_radius, 28.1);
        assert_eq!(inst.texture, -1.0);
        assert_eq!(inst.a, 0.5);
        assert_eq!(inst.segments, -64.0);
    }
}
