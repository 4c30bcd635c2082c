pub mod api;
pub mod carousel;
pub mod constants;
pub mod error;
pub mod particles;
pub mod raster;
pub mod session;
pub mod spotlight;
pub mod timeline;

pub use api::*;
pub use carousel::*;
pub use error::{Result, StudioError};
pub use particles::*;
pub use raster::*;
pub use session::*;
pub use spotlight::*;
pub use timeline::*;
