use std::io::Read;

use crate::events::SectorEvent;
use crate::metadata::{
    RegisteredSealProof, SealingConfig, SectorNumber, SectorRef, SectorState, UnpaddedBytesAmount,
};

// External collaborators of the pledge pipeline. Implementations surface
// their own failures as anyhow errors; call sites wrap them with context.

/// The keyed, event-sourced state machine owning each sector's lifecycle.
pub trait SectorEvents: Send + Sync {
    // Delivers an event for the sector with the specified number. A single
    // at-most-once delivery attempt; failures are returned to the caller
    // and never retried here.
    fn send(&self, id: SectorNumber, event: SectorEvent) -> anyhow::Result<()>;
}

/// Read-only view of current sector lifecycle state.
pub trait SectorInfoStore: Send + Sync {
    // Returns the current state of the sector with the specified number,
    // or None if no such sector is known.
    fn sector_state(&self, id: SectorNumber) -> anyhow::Result<Option<SectorState>>;
}

/// The sealing engine performing data ingestion into a staged sector.
pub trait SealerClient: Send + Sync {
    // Writes piece bytes into the sector. This crate always calls it with
    // an empty piece-size list and a zero-filled reader spanning the whole
    // unpadded sector. Potentially slow, proportional to sector size.
    fn add_piece(
        &self,
        sector: &SectorRef,
        piece_sizes: &[UnpaddedBytesAmount],
        total_size: UnpaddedBytesAmount,
        data: &mut dyn Read,
    ) -> anyhow::Result<()>;
}

/// Provider of the live sealing configuration. Queried once per pledge
/// call; results are never cached.
pub trait SealingConfigSource: Send + Sync {
    fn sealing_config(&self) -> anyhow::Result<SealingConfig>;
}

/// Live counter of sectors currently in the sealing phase, owned by the
/// surrounding pipeline.
pub trait SealingStats: Send + Sync {
    fn cur_sealing(&self) -> u64;
}

/// Allocates fresh sector numbers and resolves the seal proof type in
/// effect for this provider.
pub trait SectorFactory: Send + Sync {
    // Returns a fresh, never-before-used sector number.
    fn allocate_sector_number(&self) -> anyhow::Result<SectorNumber>;

    // Resolves the seal proof variant currently in effect, from network
    // and provider parameters.
    fn current_seal_proof(&self) -> anyhow::Result<RegisteredSealProof>;
}
