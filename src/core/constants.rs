// Shared tuning constants for the loader, carousel and spotlight.
// Pixel units are CSS pixels, angles are degrees, times are milliseconds.

// Sampling
pub const SAMPLE_STRIDE: usize = 10; // grid step for logo and wordmark sampling
pub const LOGO_ALPHA_THRESHOLD: u8 = 60; // logo pixels must be strictly above this
pub const TEXT_ALPHA_THRESHOLD: u8 = 50; // antialiased glyph edges are fainter

// Phase schedule, absolute from animation start
pub const EXPLODE_AT_MS: u32 = 500;
pub const FORM_TEXT_AT_MS: u32 = 2500;
pub const RETURN_AT_MS: u32 = 5400;
pub const COMPLETE_AT_MS: u32 = 7600;

// Phase transitions (CSS `transition` shorthand values)
pub const EXPLODE_TRANSITION: &str = "1.4s ease-out";
pub const FORM_TEXT_TRANSITION: &str = "2s ease-in-out";
pub const RETURN_TRANSITION: &str = "2s ease-in-out";

// Explosion
pub const EXPLODE_RADIUS: f32 = 200.0;

// Wordmark rendering
pub const DEFAULT_WORDMARK: &str = "TUTE";
pub const DEFAULT_LOGO_SRC: &str = "/favicon.png";
pub const WORDMARK_FONT_NARROW_PX: u32 = 126;
pub const WORDMARK_FONT_WIDE_PX: u32 = 200;
pub const WORDMARK_FONT_FAMILY: &str = "Orbitron, sans-serif";
pub const WORDMARK_BASELINE_DROP: f64 = 50.0; // baseline sits this far below centre

// Viewport
pub const NARROW_VIEWPORT_MAX_PX: f64 = 768.0; // inclusive

// Carousel
pub const SPIN_INTERVAL_MS: i32 = 16;
pub const SPIN_STEP_DEG: f32 = -0.25; // per tick; negative spins to the left
pub const FRONT_ARC_END_DEG: f32 = 135.0; // front if angle <= this...
pub const FRONT_ARC_START_DEG: f32 = 315.0; // ...or >= this
pub const WIDE_CARD: (f32, f32, f32) = (260.0, 320.0, 240.0); // width, height, radius
pub const COMPACT_CARD: (f32, f32, f32) = (220.0, 280.0, 190.0);
pub const DIMMED_OPACITY: f32 = 0.2;
pub const DIMMED_BLUR_PX: f32 = 3.0;
pub const DIMMED_SCALE: f32 = 0.9;

// Spotlight
pub const SPOTLIGHT_RADIUS: f32 = 260.0;
pub const SPOTLIGHT_GLOW_RGB: &str = "132, 0, 255";
pub const SPOTLIGHT_VISIBLE_OPACITY: f32 = 0.8;
pub const TILT_MAX_DEG: f32 = 8.0;
