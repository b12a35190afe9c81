//! Minecraft-compatible block light propagation using a flood-fill algorithm.

mod block_light_engine;
pub mod border;
pub mod direction;
pub mod light_queue;
pub mod queue_entry;
mod result;

// Re-export main types for convenience
pub use block_light_engine::{BlockLightEngine, compute};
pub use border::{BORDER_SIZE, Border, Borders, IncomingLight};
pub use direction::Direction;
pub use light_queue::LightQueue;
pub use queue_entry::QueueEntry;
pub use result::BlockLightResult;
