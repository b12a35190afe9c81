//! # Steel Light
//!
//! Block light for single 16x16x16 sections. Given a section's block states and a registry of
//! block light properties, [`compute`] floods light out from every emitter and returns the light
//! grid along with the six face borders neighbouring sections need to stitch light together.
//!
//! ```
//! use steel_light::{BlockPalette, Direction};
//! use steel_registry::blocks::vanilla;
//!
//! let registry = vanilla::registry();
//! let mut section = BlockPalette::default();
//! section.set(8, 8, 8, vanilla::TORCH);
//!
//! let light = steel_light::compute(&section, &registry)?;
//! assert_eq!(light.get(9, 8, 8), 13);
//! assert_eq!(light.border(Direction::East).get(8, 8), 7);
//! # Ok::<(), steel_light::LightError>(())
//! ```

pub mod config;
mod error;
pub mod light_engine;
pub mod light_storage;
pub mod paletted_container;

pub use config::LightConfig;
pub use error::LightError;
pub use light_engine::{BlockLightEngine, BlockLightResult, Border, Direction, IncomingLight, compute};
pub use light_storage::LightGrid;
pub use paletted_container::{BlockPalette, BlockStateSource, PaletteError, PalettedContainer};
