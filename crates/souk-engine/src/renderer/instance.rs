use bytemuck::{Pod, Zeroable};

/// Per-entity projected data written to the SharedArrayBuffer for the DOM
/// renderer. Must match the TypeScript protocol: 8 floats = 32 bytes stride.
///
/// `screen_x`/`screen_y` are percent-of-viewport; the renderer turns them
/// into CSS transforms.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct ViewInstance {
    /// Horizontal placement, percent of viewport width.
    pub screen_x: f32,
    /// Vertical placement, percent of viewport height.
    pub screen_y: f32,
    /// Perspective scale factor (1.0 at the player).
    pub scale: f32,
    /// Opacity in [0, 1].
    pub opacity: f32,
    /// Integer stacking order; nearer entities carry larger values.
    pub z_order: f32,
    /// Entity kind code (see `EntityKind::code`).
    pub kind: f32,
    /// Rotation in radians (gates animate through this channel).
    pub rotation: f32,
    /// Entity id, so the DOM can key its nodes.
    pub entity_id: f32,
}

impl ViewInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// View buffer holding one frame's projected, visible, paint-ordered
/// entities.
pub struct ViewBuffer {
    instances: Vec<ViewInstance>,
}

impl ViewBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: ViewInstance) {
        self.instances.push(instance);
    }

    /// Sort back-to-front. The sort is stable, so z ties keep scene
    /// insertion order — the documented tie-break.
    pub fn sort_for_paint(&mut self) {
        self.instances.sort_by_key(|i| i.z_order as i32);
    }

    pub fn instances(&self) -> &[ViewInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for ViewBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<ViewInstance>(), 32);
        assert_eq!(ViewInstance::FLOATS, 8);
    }

    #[test]
    fn sort_is_back_to_front_and_stable() {
        let mut buf = ViewBuffer::new();
        buf.push(ViewInstance {
            z_order: 990.0,
            entity_id: 1.0,
            ..Default::default()
        });
        buf.push(ViewInstance {
            z_order: 970.0,
            entity_id: 2.0,
            ..Default::default()
        });
        buf.push(ViewInstance {
            z_order: 990.0,
            entity_id: 3.0,
            ..Default::default()
        });
        buf.sort_for_paint();
        let ids: Vec<f32> = buf.instances().iter().map(|i| i.entity_id).collect();
        assert_eq!(ids, vec![2.0, 1.0, 3.0]);
    }
}
