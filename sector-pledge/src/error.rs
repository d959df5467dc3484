use crate::metadata::{SectorNumber, SectorState};

pub type Result<T> = std::result::Result<T, SectorPledgeErr>;

#[derive(Debug, thiserror::Error)]
pub enum SectorPledgeErr {
    #[error("getting config: {}", _0)]
    Config(#[source] anyhow::Error),

    #[error(
        "too many sectors sealing (cur_sealing: {}, max: {})",
        cur_sealing,
        max_sealing
    )]
    AdmissionExceeded { cur_sealing: u64, max_sealing: u64 },

    #[error("getting seal proof type: {}", _0)]
    ProofType(#[source] anyhow::Error),

    #[error("allocating sector number: {}", _0)]
    Allocation(#[source] anyhow::Error),

    #[error("sending event for sector {}: {}", sector, source)]
    EventDelivery {
        sector: SectorNumber,
        source: anyhow::Error,
    },

    #[error("no sector with number {} found", _0)]
    SectorNotFound(SectorNumber),

    #[error("looking up sector {}: {}", sector, source)]
    InfoLookup {
        sector: SectorNumber,
        source: anyhow::Error,
    },

    #[error("sector {} state: {} is not Proved", sector, state)]
    InvalidStateForRedo {
        sector: SectorNumber,
        state: SectorState,
    },

    #[error("sector {} is already being redone", _0)]
    RedoInProgress(SectorNumber),

    #[error("add piece for sector {}: {}", sector, source)]
    Ingestion {
        sector: SectorNumber,
        source: anyhow::Error,
    },

    #[error("forcing sector {} back to Packing: {}", sector, source)]
    RecoveryEvent {
        sector: SectorNumber,
        source: anyhow::Error,
    },
}

pub fn err_admission(cur_sealing: u64, max_sealing: u64) -> SectorPledgeErr {
    SectorPledgeErr::AdmissionExceeded {
        cur_sealing,
        max_sealing,
    }
}

pub fn err_invalidstate(sector: SectorNumber, state: SectorState) -> SectorPledgeErr {
    SectorPledgeErr::InvalidStateForRedo { sector, state }
}

pub fn err_ingestion(sector: SectorNumber, source: anyhow::Error) -> SectorPledgeErr {
    SectorPledgeErr::Ingestion { sector, source }
}

pub fn err_eventdelivery(sector: SectorNumber, source: anyhow::Error) -> SectorPledgeErr {
    SectorPledgeErr::EventDelivery { sector, source }
}
