use super::constants::{
    COMPACT_CARD, DIMMED_BLUR_PX, DIMMED_OPACITY, DIMMED_SCALE, FRONT_ARC_END_DEG,
    FRONT_ARC_START_DEG, NARROW_VIEWPORT_MAX_PX, SPIN_STEP_DEG, WIDE_CARD,
};
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Card {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// The studio's four headline services.
pub fn default_cards() -> Vec<Card> {
    vec![
        Card::new("monitor", "Web Development", "Next-gen React apps built for speed."),
        Card::new("palette", "Branding", "Visual identities that make impact."),
        Card::new("smartphone", "App Design", "Fluid mobile-first UX experiences."),
        Card::new("zap", "Automation", "Smart workflows to scale business."),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardLayout {
    pub width: f32,
    pub height: f32,
    pub radius: f32,
}

impl CardLayout {
    pub const WIDE: CardLayout = CardLayout {
        width: WIDE_CARD.0,
        height: WIDE_CARD.1,
        radius: WIDE_CARD.2,
    };
    pub const COMPACT: CardLayout = CardLayout {
        width: COMPACT_CARD.0,
        height: COMPACT_CARD.1,
        radius: COMPACT_CARD.2,
    };

    #[inline]
    pub fn for_viewport(viewport_width_px: f64) -> Self {
        if viewport_width_px <= NARROW_VIEWPORT_MAX_PX {
            Self::COMPACT
        } else {
            Self::WIDE
        }
    }
}

/// Maps any angle into [0, 360).
#[inline]
pub fn normalize_deg(angle: f32) -> f32 {
    let n = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if n >= 360.0 {
        0.0
    } else {
        n
    }
}

/// Drops whole turns, keeping the sign; the result lies in (-360, 360).
///
/// The rendered angle is unchanged, and an `f32` kept this small never
/// loses the 0.25 degree spin step to rounding.
#[inline]
pub fn wrap_turns(angle: f32) -> f32 {
    angle % 360.0
}

/// Front arc is [0, 135] plus [315, 360); the 180 degrees behind are the dead zone.
#[inline]
pub fn is_front_facing(angle: f32) -> bool {
    let n = normalize_deg(angle);
    n <= FRONT_ARC_END_DEG || n >= FRONT_ARC_START_DEG
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFocus {
    Front,
    Back,
}

impl CardFocus {
    /// Inline style for the card face.
    pub fn css(self) -> String {
        match self {
            CardFocus::Front => {
                "opacity: 1; filter: none; transform: scale(1); pointer-events: auto;".to_string()
            }
            CardFocus::Back => format!(
                "opacity: {}; filter: blur({}px); transform: scale({}); pointer-events: none;",
                DIMMED_OPACITY, DIMMED_BLUR_PX, DIMMED_SCALE
            ),
        }
    }

    #[inline]
    pub fn class_name(self) -> &'static str {
        match self {
            CardFocus::Front => "is-front",
            CardFocus::Back => "is-back",
        }
    }
}

/// Rotation state of one carousel instance.
#[derive(Clone, Debug)]
pub struct Carousel {
    card_count: usize,
    rotation: f32,
    paused: bool,
}

impl Carousel {
    pub fn new(card_count: usize) -> Self {
        Self {
            card_count,
            rotation: 0.0,
            paused: false,
        }
    }

    #[inline]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    #[inline]
    pub fn angle_step(&self) -> f32 {
        if self.card_count == 0 {
            0.0
        } else {
            360.0 / self.card_count as f32
        }
    }

    #[inline]
    pub fn slot(&self, index: usize) -> f32 {
        index as f32 * self.angle_step()
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn is_front(&self, index: usize) -> bool {
        is_front_facing(self.rotation + self.slot(index))
    }

    #[inline]
    pub fn focus(&self, index: usize) -> CardFocus {
        if self.is_front(index) {
            CardFocus::Front
        } else {
            CardFocus::Back
        }
    }

    pub fn front_facing(&self) -> SmallVec<[usize; 8]> {
        (0..self.card_count).filter(|&i| self.is_front(i)).collect()
    }

    /// One auto-spin tick. Returns false while paused.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.rotation = wrap_turns(self.rotation + SPIN_STEP_DEG);
        true
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn prev(&mut self) {
        self.rotation = wrap_turns(self.rotation + self.angle_step());
    }

    pub fn next(&mut self) {
        self.rotation = wrap_turns(self.rotation - self.angle_step());
    }

    pub fn group_transform(&self) -> String {
        format!("rotateY({}deg)", self.rotation)
    }

    pub fn card_transform(&self, index: usize, layout: CardLayout) -> String {
        format!(
            "rotateY({}deg) translateZ({}px)",
            self.slot(index),
            layout.radius
        )
    }
}
