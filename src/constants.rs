/// Page wiring: element ids, classes and storage keys the static page provides.
///
/// These describe the contract with `index.html`; the markup owns styling,
/// the wasm side only toggles classes and inline transforms.
// Loader
pub const LOADER_ID: &str = "loader";
pub const LOADER_STAGE_ID: &str = "loader-stage";
pub const APP_ROOT_ID: &str = "app";
pub const PIXEL_CLASS: &str = "pixel-glow";
pub const HIDDEN_CLASS: &str = "hidden";

// Carousel
pub const CAROUSEL_ID: &str = "services-carousel";
pub const CAROUSEL_PREV_ID: &str = "carousel-prev";
pub const CAROUSEL_NEXT_ID: &str = "carousel-next";
pub const CAROUSEL_GROUP_CLASS: &str = "carousel-group";
pub const CAROUSEL_SLOT_CLASS: &str = "carousel-slot";
pub const CAROUSEL_CARD_CLASS: &str = "glass-card";

// Spotlight grid
pub const SPOTLIGHT_GRID_ID: &str = "services-grid";
pub const SPOTLIGHT_CARD_SELECTOR: &str = ".magic-card";
pub const SPOTLIGHT_FADE_IN: &str = "opacity 0.2s";
pub const SPOTLIGHT_FADE_OUT: &str = "opacity 0.4s";
pub const SPOTLIGHT_DIAMETER_PX: u32 = 700;

// Page configuration attributes
pub const ATTR_LOGO_SRC: &str = "data-logo-src";
pub const ATTR_WORDMARK: &str = "data-wordmark";
pub const ATTR_API_BASE: &str = "data-api-base";

// Admin
pub const TOKEN_STORAGE_KEY: &str = "admin_token";
