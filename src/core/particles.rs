use super::constants::{EXPLODE_RADIUS, LOGO_ALPHA_THRESHOLD, SAMPLE_STRIDE, TEXT_ALPHA_THRESHOLD};
use super::raster::Raster;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub origin: Vec2,
    pub color: [u8; 3],
    pub offset: Vec2,
}

impl Particle {
    pub fn css_color(&self) -> String {
        let [r, g, b] = self.color;
        format!("rgb({}, {}, {})", r, g, b)
    }

    pub fn css_translate(&self) -> String {
        format!("translate({}px, {}px)", self.offset.x, self.offset.y)
    }
}

/// Top-left offset that centres an image of `image` size inside a stage of `stage` size.
#[inline]
pub fn stage_offset(stage: Vec2, image: Vec2) -> Vec2 {
    stage * 0.5 - image * 0.5
}

/// Index of the target point particle `i` converges on, or `None` without targets.
#[inline]
pub fn target_index(i: usize, target_count: usize) -> Option<usize> {
    (target_count > 0).then(|| i % target_count)
}

/// The particle set of one loader run.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// One particle per logo pixel above the alpha threshold on the sampling grid.
    pub fn from_logo(logo: &Raster, stage_offset: Vec2) -> Self {
        let particles = logo
            .sample_opaque(SAMPLE_STRIDE, LOGO_ALPHA_THRESHOLD)
            .into_iter()
            .map(|s| Particle {
                origin: stage_offset + Vec2::new(s.x as f32, s.y as f32),
                color: s.rgb,
                offset: Vec2::ZERO,
            })
            .collect();
        Self { particles }
    }

    /// Stage-space points of a rendered wordmark.
    pub fn target_points(text: &Raster, stage_offset: Vec2) -> Vec<Vec2> {
        text.sample_opaque(SAMPLE_STRIDE, TEXT_ALPHA_THRESHOLD)
            .into_iter()
            .map(|s| stage_offset + Vec2::new(s.x as f32, s.y as f32))
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn explode<R: Rng>(&mut self, rng: &mut R) {
        for p in &mut self.particles {
            let a: f32 = rng.gen_range(0.0..TAU);
            p.offset = Vec2::new(a.cos(), a.sin()) * EXPLODE_RADIUS;
        }
    }

    pub fn form_text(&mut self, targets: &[Vec2]) {
        for (i, p) in self.particles.iter_mut().enumerate() {
            if let Some(t) = target_index(i, targets.len()) {
                p.offset = targets[t] - p.origin;
            }
        }
    }

    pub fn return_home(&mut self) {
        for p in &mut self.particles {
            p.offset = Vec2::ZERO;
        }
    }
}
