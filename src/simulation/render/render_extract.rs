use crate::domain::{AssetState, Body};

use super::SimulationCore;

/// f32 per body in the transform buffer:
/// `[x, y, z, rot_x, rot_y, scale, radius, id]`
pub const TRANSFORM_STRIDE: usize = 8;

/// Texture state lives in the top byte of each colour:
/// 0 = none, 1 = pending, 2 = loaded, 3 = failed (draw the placeholder colour)
pub const TEXTURE_STATE_SHIFT: u32 = 24;

#[inline]
fn texture_code(body: &Body) -> u32 {
    match body.appearance.texture.as_ref().map(|t| t.state) {
        None => 0,
        Some(AssetState::Pending) => 1,
        Some(AssetState::Loaded) => 2,
        Some(AssetState::Failed) => 3,
    }
}

/// Repack both render buffers from the registry, in registry order.
pub(super) fn extract(core: &mut SimulationCore) {
    let n = core.bodies.len();
    let transforms = &mut core.render.transforms;
    let colors = &mut core.render.colors;

    transforms.clear();
    transforms.reserve(n * TRANSFORM_STRIDE);
    colors.clear();
    colors.reserve(n);

    for body in core.bodies.iter() {
        transforms.extend_from_slice(&[
            body.position.x as f32,
            body.position.y as f32,
            body.position.z as f32,
            body.rotation.x as f32,
            body.rotation.y as f32,
            body.scale as f32,
            body.radius as f32,
            body.id as f32,
        ]);
        colors.push((texture_code(body) << TEXTURE_STATE_SHIFT) | (body.appearance.color & 0x00FF_FFFF));
    }
}
