use steel_utils::BlockStateId;
use thiserror::Error;

/// Failure of a block light computation. No partial result is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LightError {
    /// The section contains a block state the registry has no light properties for.
    #[error("unresolvable block state {state} at ({x}, {y}, {z})")]
    UnresolvableBlockState {
        /// The unknown state.
        state: BlockStateId,
        /// Section-relative x of the first voxel holding it.
        x: usize,
        /// Section-relative y of the first voxel holding it.
        y: usize,
        /// Section-relative z of the first voxel holding it.
        z: usize,
    },
}
