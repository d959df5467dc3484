use crate::metadata::{RegisteredSealProof, SectorNumber, SectorState};

/// Events this crate feeds into the external sector state machine. The
/// state machine owns the full event vocabulary; only the two entry-point
/// events are modeled here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectorEvent {
    /// Begin the lifecycle of a committed-capacity (no user data) sector.
    StartCC {
        id: SectorNumber,
        proof_type: RegisteredSealProof,
    },
    /// Unconditionally move the sector to the given stage, bypassing the
    /// state machine's normal transition guards.
    ForceState { state: SectorState },
}
