use super::constants::{NARROW_VIEWPORT_MAX_PX, SPOTLIGHT_RADIUS, TILT_MAX_DEG};
use fnv::FnvHashMap;
use glam::Vec2;

/// Client-space rectangle, as read from `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Edges count as inside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }
}

/// What a viewport resize means for a mounted spotlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpotlightChange {
    Enable,
    Disable,
    Refresh,
    Idle,
}

/// The spotlight only runs above the narrow breakpoint.
#[inline]
pub fn spotlight_enabled(viewport_width_px: f64) -> bool {
    viewport_width_px > NARROW_VIEWPORT_MAX_PX
}

impl SpotlightChange {
    pub fn on_resize(active: bool, viewport_width_px: f64) -> Self {
        match (active, spotlight_enabled(viewport_width_px)) {
            (false, true) => SpotlightChange::Enable,
            (true, false) => SpotlightChange::Disable,
            (true, true) => SpotlightChange::Refresh,
            (false, false) => SpotlightChange::Idle,
        }
    }
}

/// Linear falloff: 1 at the centre, 0 at `radius` and beyond.
#[inline]
pub fn glow_intensity(center: Vec2, pointer: Vec2, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 0.0;
    }
    (1.0 - center.distance(pointer) / radius).max(0.0)
}

/// Card tilt in degrees toward the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Tilt {
    pub fn toward(card: &Rect, pointer: Vec2) -> Self {
        if card.width <= 0.0 || card.height <= 0.0 {
            return Self::default();
        }
        let rel = pointer - card.center();
        Self {
            rotate_x: (-rel.y / card.height) * TILT_MAX_DEG,
            rotate_y: (rel.x / card.width) * TILT_MAX_DEG,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Cached grid and card geometry.
///
/// Rects are written when layout can change (mount, resize, scroll) and only
/// read on pointer moves.
#[derive(Clone, Debug)]
pub struct SpotlightField {
    radius: f32,
    grid: Option<Rect>,
    cards: FnvHashMap<usize, Rect>,
}

impl Default for SpotlightField {
    fn default() -> Self {
        Self::new(SPOTLIGHT_RADIUS)
    }
}

impl SpotlightField {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            grid: None,
            cards: FnvHashMap::default(),
        }
    }

    pub fn set_grid(&mut self, rect: Rect) {
        self.grid = Some(rect);
    }

    pub fn set_card(&mut self, key: usize, rect: Rect) {
        self.cards.insert(key, rect);
    }

    pub fn pointer_inside(&self, pointer: Vec2) -> bool {
        self.grid.map(|g| g.contains(pointer)).unwrap_or(false)
    }

    /// Glow per card, ordered by key.
    pub fn intensities(&self, pointer: Vec2) -> Vec<(usize, f32)> {
        let mut out: Vec<(usize, f32)> = self
            .cards
            .iter()
            .map(|(&k, r)| (k, glow_intensity(r.center(), pointer, self.radius)))
            .collect();
        out.sort_by_key(|(k, _)| *k);
        out
    }

    pub fn tilt(&self, key: usize, pointer: Vec2) -> Option<Tilt> {
        self.cards.get(&key).map(|r| Tilt::toward(r, pointer))
    }
}
