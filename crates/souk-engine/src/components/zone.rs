use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Default exit radius as a multiple of the enter radius. The band
/// between the two produces no transitions, which is what keeps a player
/// idling on the boundary from toggling a zone every frame.
pub const HYSTERESIS_FACTOR: f32 = 1.5;

/// What a zone is for. Only `Trigger` zones fire enter/exit events;
/// `Wall` and `Object` are solid geometry queried by movement code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    #[default]
    Trigger,
    Wall,
    Object,
}

impl ZoneKind {
    /// Solid zones block player movement instead of firing events.
    pub fn is_solid(self) -> bool {
        matches!(self, ZoneKind::Wall | ZoneKind::Object)
    }
}

/// Zone geometry: a sphere radius or an axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoneShape {
    Sphere { radius: f32 },
    Box { half_extents: Vec3 },
}

/// Which coordinates participate in the distance test. Proximity checks
/// default to full 3D for symmetry; ground-level zones such as gates use
/// the XZ plane only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneMetric {
    #[default]
    Xyz,
    Xz,
}

/// A registered region that reacts to player proximity.
#[derive(Debug, Clone)]
pub struct TriggerZone {
    pub id: String,
    pub position: Vec3,
    pub shape: ZoneShape,
    pub kind: ZoneKind,
    pub metric: ZoneMetric,
    /// Distance at which ENTER fires. Defaults to the sphere radius.
    pub enter_radius: f32,
    /// Distance past which EXIT fires. Defaults to 1.5× the enter radius.
    pub exit_radius: f32,
    /// Edge-detection state maintained by the trigger system.
    pub inside: bool,
}

impl TriggerZone {
    pub fn sphere(id: impl Into<String>, position: Vec3, radius: f32) -> Self {
        Self {
            id: id.into(),
            position,
            shape: ZoneShape::Sphere { radius },
            kind: ZoneKind::Trigger,
            metric: ZoneMetric::Xyz,
            enter_radius: radius,
            exit_radius: radius * HYSTERESIS_FACTOR,
            inside: false,
        }
    }

    pub fn boxed(id: impl Into<String>, position: Vec3, half_extents: Vec3) -> Self {
        Self {
            id: id.into(),
            position,
            shape: ZoneShape::Box { half_extents },
            kind: ZoneKind::Trigger,
            metric: ZoneMetric::Xyz,
            enter_radius: 0.0,
            exit_radius: 0.0,
            inside: false,
        }
    }

    // -- Builder pattern --

    pub fn with_kind(mut self, kind: ZoneKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_metric(mut self, metric: ZoneMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Override both hysteresis thresholds. `exit` below `enter` is
    /// floored to `enter`.
    pub fn with_hysteresis(mut self, enter: f32, exit: f32) -> Self {
        self.enter_radius = enter;
        self.exit_radius = exit.max(enter);
        self
    }

    /// A zone with degenerate geometry never fires and never blocks.
    pub fn is_inert(&self) -> bool {
        match self.shape {
            ZoneShape::Sphere { radius } => radius <= 0.0,
            ZoneShape::Box { half_extents } => {
                half_extents.x <= 0.0 || half_extents.z <= 0.0
            }
        }
    }

    fn delta(&self, point: Vec3) -> Vec3 {
        let mut d = point - self.position;
        if self.metric == ZoneMetric::Xz {
            d.y = 0.0;
        }
        d
    }

    /// Distance from `point` under this zone's metric (sphere zones only).
    pub fn distance(&self, point: Vec3) -> f32 {
        self.delta(point).length()
    }

    /// Enter-side containment test: inside the enter radius / the box.
    pub fn contains(&self, point: Vec3) -> bool {
        if self.is_inert() {
            return false;
        }
        let d = self.delta(point);
        match self.shape {
            ZoneShape::Sphere { .. } => d.length() <= self.enter_radius,
            ZoneShape::Box { half_extents } => {
                d.x.abs() <= half_extents.x
                    && d.z.abs() <= half_extents.z
                    && (self.metric == ZoneMetric::Xz || d.y.abs() <= half_extents.y.max(f32::EPSILON))
            }
        }
    }

    /// Exit-side test: true once the point is past the exit threshold
    /// (the inflated box, for box zones).
    pub fn outside_exit(&self, point: Vec3) -> bool {
        if self.is_inert() {
            return true;
        }
        let d = self.delta(point);
        match self.shape {
            ZoneShape::Sphere { .. } => d.length() > self.exit_radius,
            ZoneShape::Box { half_extents } => {
                let h = half_extents * HYSTERESIS_FACTOR;
                d.x.abs() > h.x
                    || d.z.abs() > h.z
                    || (self.metric == ZoneMetric::Xyz && half_extents.y > 0.0 && d.y.abs() > h.y)
            }
        }
    }
}
