use super::vec::{Vec2, Vec3};

pub type BodyId = u32;

/// Load state of an asset fetched by the JS side
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetState {
    Pending,
    Loaded,
    Failed,
}

/// Texture bound to a body. `key` is whatever the JS loader understands (a URL).
#[derive(Clone, Debug, PartialEq)]
pub struct TextureSlot {
    pub key: String,
    pub state: AssetState,
}

/// Visual-only state. Physics never reads this.
#[derive(Clone, Debug, PartialEq)]
pub struct Appearance {
    /// 0xRRGGBB; also the placeholder while a texture is pending or failed
    pub color: u32,
    pub texture: Option<TextureSlot>,
}

impl Appearance {
    pub fn solid(color: u32) -> Self {
        Self { color, texture: None }
    }

    /// Is the texture usable for drawing this frame?
    pub fn texture_ready(&self) -> bool {
        matches!(self.texture, Some(TextureSlot { state: AssetState::Loaded, .. }))
    }
}

/// Who moves the body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Integrated, bounced and collided
    Free,
    /// Never translates (spin still applies)
    Fixed,
    /// Placed by the orbit system each frame
    Orbit,
}

/// A sphere that moves as a unit
#[derive(Clone, Debug)]
pub struct Body {
    // === Motion State ===
    pub id: BodyId,
    /// World position (sphere center)
    pub position: Vec3,
    /// Units per reference frame
    pub velocity: Vec3,
    /// Accumulated orientation around x and y (radians)
    pub rotation: Vec2,
    /// Radians per reference frame, constant for the run
    pub angular_velocity: Vec2,
    /// Fixed at creation
    pub radius: f64,
    pub motion: Motion,

    // === Visuals ===
    /// Uniform scale, pulsed by clicks
    pub scale: f64,
    pub appearance: Appearance,
}

impl Body {
    pub fn new(position: Vec3, velocity: Vec3, angular_velocity: Vec2, radius: f64) -> Self {
        Self {
            id: 0,
            position,
            velocity,
            rotation: Vec2::zero(),
            angular_velocity,
            radius,
            motion: Motion::Free,
            scale: 1.0,
            appearance: Appearance::solid(0xFFFFFF),
        }
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.motion == Motion::Free
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.appearance.color = color & 0x00FF_FFFF;
        self
    }

    pub fn with_texture(mut self, key: impl Into<String>) -> Self {
        self.appearance.texture = Some(TextureSlot {
            key: key.into(),
            state: AssetState::Pending,
        });
        self
    }

    /// Radius as drawn (used for picking)
    #[inline]
    pub fn visual_radius(&self) -> f64 {
        self.radius * self.scale
    }
}

/// Ordered collection of bodies. Order is the pairwise resolution order.
#[derive(Clone, Debug)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    next_id: BodyId,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Empty registry whose first insert gets `first_id`
    pub fn starting_at(first_id: BodyId) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: first_id.max(1),
        }
    }

    /// Id the next insert will get
    pub fn next_id(&self) -> BodyId {
        self.next_id
    }

    /// Add a body, assigning it a fresh id.
    pub fn insert(&mut self, mut body: Body) -> BodyId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;
        self.bodies.push(body);
        id
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    /// Drop every body. Ids keep counting up so stale ids from JS never
    /// match a new body.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
