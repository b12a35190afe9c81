//! Block light flood-fill for a single section.
//!
//! Execution order of one computation:
//! 1. Resolve every voxel's block state through the registry (fails fast on unknown states)
//! 2. Seed emitters, then light entering through the faces
//! 3. Breadth-first propagation until the queue drains
//! 4. Slice the six borders and package the result

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use steel_registry::blocks::{BlockLightLookup, FULL_OPACITY, MAX_LIGHT_LEVEL, MIN_OPACITY};
use steel_utils::BlockStateId;

use crate::{
    config::LightConfig,
    error::LightError,
    light_storage::{LightGrid, SECTION_VOLUME},
    paletted_container::BlockStateSource,
};

use super::{
    border::IncomingLight, direction::Direction, light_queue::LightQueue,
    queue_entry::QueueEntry, result::BlockLightResult,
};

/// Computes block light for sections, one at a time or in parallel batches.
///
/// The engine holds only configuration. Every computation allocates its own grid and queue, so a
/// single engine can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct BlockLightEngine {
    config: LightConfig,
}

/// Per-voxel light properties of a section, resolved once up front.
struct ResolvedSection {
    attenuation: Box<[u8; SECTION_VOLUME]>,
    /// `(index, luminance)` of every emitter, in index order.
    emitters: Vec<(usize, u8)>,
}

impl ResolvedSection {
    fn resolve<S, R>(section: &S, registry: &R, base_attenuation: u8) -> Result<Self, LightError>
    where
        S: BlockStateSource + ?Sized,
        R: BlockLightLookup + ?Sized,
    {
        let mut cache: FxHashMap<BlockStateId, (u8, u8)> = FxHashMap::default();
        let mut attenuation = Box::new([0u8; SECTION_VOLUME]);
        let mut emitters = Vec::new();

        for (index, slot) in attenuation.iter_mut().enumerate() {
            let (x, y, z) = LightGrid::coords(index);
            let state = section.state_at(x, y, z);

            let (opacity, luminance) = if let Some(properties) = cache.get(&state) {
                *properties
            } else {
                let Some((opacity, luminance)) = registry.light_properties(state) else {
                    log::warn!("Block light aborted: unresolvable block state {state} at ({x}, {y}, {z})");
                    return Err(LightError::UnresolvableBlockState { state, x, y, z });
                };
                let properties = (
                    opacity.clamp(MIN_OPACITY, FULL_OPACITY).max(base_attenuation),
                    luminance.min(MAX_LIGHT_LEVEL),
                );
                cache.insert(state, properties);
                properties
            };

            *slot = opacity;
            if luminance > 0 {
                emitters.push((index, luminance));
            }
        }

        Ok(Self {
            attenuation,
            emitters,
        })
    }
}

impl BlockLightEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: LightConfig) -> Self {
        Self { config }
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &LightConfig {
        &self.config
    }

    /// Computes the block light of one section in isolation.
    pub fn compute<S, R>(&self, section: &S, registry: &R) -> Result<BlockLightResult, LightError>
    where
        S: BlockStateSource + ?Sized,
        R: BlockLightLookup + ?Sized,
    {
        self.compute_with_incoming(section, registry, &IncomingLight::none())
    }

    /// Computes the block light of one section, also seeding light that enters through its faces.
    ///
    /// Each incoming value is reduced by the attenuation of the face voxel it enters, then spreads
    /// like any other light. This is a single pass; repeating it until neighbours stop changing is
    /// up to the caller.
    pub fn compute_with_incoming<S, R>(
        &self,
        section: &S,
        registry: &R,
        incoming: &IncomingLight,
    ) -> Result<BlockLightResult, LightError>
    where
        S: BlockStateSource + ?Sized,
        R: BlockLightLookup + ?Sized,
    {
        let _span = tracing::trace_span!("block_light").entered();

        let resolved = ResolvedSection::resolve(section, registry, self.config.base_attenuation)?;

        let mut grid = LightGrid::new_empty();
        let mut queue = LightQueue::with_capacity(self.config.queue_capacity);

        Self::seed_emitters(&resolved, &mut grid, &mut queue);
        Self::seed_incoming(&resolved, incoming, &mut grid, &mut queue);
        let updates = Self::propagate_increases(&resolved, &mut grid, &mut queue);

        log::trace!(
            "Block light: {} emitters, {} propagation updates",
            resolved.emitters.len(),
            updates
        );

        Ok(BlockLightResult::new(grid))
    }

    /// Computes many independent sections in parallel.
    ///
    /// Results are returned in input order. A failing section does not affect the others.
    pub fn compute_sections<S, R>(
        &self,
        sections: &[S],
        registry: &R,
    ) -> Vec<Result<BlockLightResult, LightError>>
    where
        S: BlockStateSource + Sync,
        R: BlockLightLookup + Sync + ?Sized,
    {
        let _span = tracing::debug_span!("block_light_batch", sections = sections.len()).entered();

        sections
            .par_iter()
            .map(|section| self.compute(section, registry))
            .collect()
    }

    fn seed_emitters(resolved: &ResolvedSection, grid: &mut LightGrid, queue: &mut LightQueue) {
        for &(index, luminance) in &resolved.emitters {
            if luminance > grid.get_index(index) {
                grid.set_index(index, luminance);
                queue.enqueue(QueueEntry::increase_from_emission(index, luminance));
            }
        }
    }

    fn seed_incoming(
        resolved: &ResolvedSection,
        incoming: &IncomingLight,
        grid: &mut LightGrid,
        queue: &mut LightQueue,
    ) {
        for face in Direction::ALL {
            let Some(border) = incoming.get(face) else {
                continue;
            };
            for v in 0..16 {
                for u in 0..16 {
                    let level = border.get(u, v);
                    let (x, y, z) = face.face_position(u, v);
                    let index = LightGrid::index(x, y, z);
                    let attenuation = resolved.attenuation[index];
                    if level <= attenuation {
                        continue;
                    }

                    let entering = level - attenuation;
                    if entering > grid.get_index(index) {
                        grid.set_index(index, entering);
                        // Light travelling inward never needs to go back out this face.
                        queue.enqueue(QueueEntry::increase_skip_one_direction(
                            index, entering, face,
                        ));
                    }
                }
            }
        }
    }

    /// Drains the queue, returning how many voxels were raised.
    fn propagate_increases(
        resolved: &ResolvedSection,
        grid: &mut LightGrid,
        queue: &mut LightQueue,
    ) -> usize {
        let mut updates = 0;

        while let Some(entry) = queue.dequeue() {
            let index = entry.index();
            let level = entry.level();

            // Raised again after this entry was queued; the newer entry carries the work.
            if grid.get_index(index) != level {
                continue;
            }

            for dir in Direction::ALL {
                if !entry.should_propagate(dir) {
                    continue;
                }
                let Some(neighbor) = dir.relative_index(index) else {
                    continue;
                };

                let attenuation = resolved.attenuation[neighbor];
                if level <= attenuation {
                    continue;
                }

                let candidate = level - attenuation;
                if candidate > grid.get_index(neighbor) {
                    grid.set_index(neighbor, candidate);
                    queue.enqueue(QueueEntry::increase_skip_one_direction(
                        neighbor,
                        candidate,
                        dir.opposite(),
                    ));
                    updates += 1;
                }
            }
        }

        updates
    }
}

/// Computes the block light of one section with the default configuration.
pub fn compute<S, R>(section: &S, registry: &R) -> Result<BlockLightResult, LightError>
where
    S: BlockStateSource + ?Sized,
    R: BlockLightLookup + ?Sized,
{
    BlockLightEngine::default().compute(section, registry)
}
