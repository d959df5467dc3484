use std::sync::{Arc, Mutex};

use crate::error::{err_eventdelivery, err_invalidstate, Result, SectorPledgeErr};
use crate::events::SectorEvent;
use crate::helpers;
use crate::metadata::{ActorID, RegisteredSealProof, SectorId, SectorNumber, SectorRef, SectorState};
use crate::redo::RedoSet;
use crate::startup::StartupGate;
use crate::traits::{
    SealerClient, SealingConfigSource, SealingStats, SectorEvents, SectorFactory, SectorInfoStore,
};

const FATAL_NOLOCK: &str = "error acquiring pledge lock";

/// Entry point for admitting sectors into the sealing pipeline. Owns two
/// independent mutual-exclusion domains: the pledge lock, which serializes
/// whole pledge calls so that admission-check-then-create is race-free,
/// and the redo set's own lock, which only guards redo registration. The
/// two are never merged; redo calls never wait on a pledge in progress.
pub struct PledgeManager {
    miner: ActorID,

    config: Arc<dyn SealingConfigSource>,
    stats: Arc<dyn SealingStats>,
    factory: Arc<dyn SectorFactory>,
    sectors: Arc<dyn SectorEvents>,
    info: Arc<dyn SectorInfoStore>,
    sealer: Arc<dyn SealerClient>,

    startup: Arc<StartupGate>,

    pledge_lk: Mutex<()>,
    redoing: RedoSet,
}

impl PledgeManager {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        miner: ActorID,
        config: Arc<dyn SealingConfigSource>,
        stats: Arc<dyn SealingStats>,
        factory: Arc<dyn SectorFactory>,
        sectors: Arc<dyn SectorEvents>,
        info: Arc<dyn SectorInfoStore>,
        sealer: Arc<dyn SealerClient>,
        startup: Arc<StartupGate>,
    ) -> PledgeManager {
        PledgeManager {
            miner,
            config,
            stats,
            factory,
            sectors,
            info,
            sealer,
            startup,
            pledge_lk: Mutex::new(()),
            redoing: RedoSet::new(),
        }
    }

    /// Admits and creates a new committed-capacity sector. Serialized
    /// against all other pledge calls; a successful return means a fresh
    /// sector ref was created and its StartCC event delivered to the state
    /// machine. Event delivery is attempted once and never retried.
    pub fn pledge(&self) -> Result<SectorRef> {
        self.startup.wait();

        let _guard = self.pledge_lk.lock().expect(FATAL_NOLOCK);

        let cfg = self
            .config
            .sealing_config()
            .map_err(SectorPledgeErr::Config)?;

        helpers::check_admission(cfg.max_sealing_sectors, self.stats.cur_sealing())?;

        let spt = self
            .factory
            .current_seal_proof()
            .map_err(SectorPledgeErr::ProofType)?;

        let number = self
            .factory
            .allocate_sector_number()
            .map_err(SectorPledgeErr::Allocation)?;

        let sector = self.miner_sector(spt, number);

        info!("creating CC sector {}", number);

        self.sectors
            .send(
                number,
                SectorEvent::StartCC {
                    id: number,
                    proof_type: spt,
                },
            )
            .map_err(|err| err_eventdelivery(number, err))?;

        Ok(sector)
    }

    /// Re-pledges an already-proved sector and forces it back to Packing
    /// for reprocessing. At most one redo per sector may be in flight; a
    /// concurrent duplicate observes RedoInProgress, which is an expected
    /// outcome rather than a fault. Never takes the pledge lock.
    pub fn redo_sector(&self, id: SectorNumber) -> Result<()> {
        let state = self
            .info
            .sector_state(id)
            .map_err(|source| SectorPledgeErr::InfoLookup { sector: id, source })?
            .ok_or(SectorPledgeErr::SectorNotFound(id))?;

        if state != SectorState::Proved {
            return Err(err_invalidstate(id, state));
        }

        if !self.redoing.try_begin(id) {
            return Err(SectorPledgeErr::RedoInProgress(id));
        }

        // Registration is released on every exit path so a failed redo can
        // be retried later.
        let result = self.redo_registered(id);
        self.redoing.finish(id);
        result
    }

    fn redo_registered(&self, id: SectorNumber) -> Result<()> {
        let spt = self
            .factory
            .current_seal_proof()
            .map_err(SectorPledgeErr::ProofType)?;

        let sector = self.miner_sector(spt, id);

        helpers::fill_with_placeholder(self.sealer.as_ref(), &sector)?;

        info!("recovery: forcing sector {} back to Packing", id);

        self.sectors
            .send(
                id,
                SectorEvent::ForceState {
                    state: SectorState::Packing,
                },
            )
            .map_err(|source| SectorPledgeErr::RecoveryEvent { sector: id, source })
    }

    // Qualifies a sector number with this provider's scope and the given
    // proof type.
    fn miner_sector(&self, spt: RegisteredSealProof, number: SectorNumber) -> SectorRef {
        SectorRef {
            id: SectorId {
                miner: self.miner,
                number,
            },
            proof_type: spt,
        }
    }
}
