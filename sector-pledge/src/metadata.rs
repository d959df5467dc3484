use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier for a sector, relative to a single storage provider.
/// Allocated monotonically by the sector factory and never reused.
pub type SectorNumber = u64;

/// Identifier for a storage provider (miner) actor.
pub type ActorID = u64;

/// Sector ID which contains the sector number and the actor ID for the miner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectorId {
    pub miner: ActorID,
    pub number: SectorNumber,
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s-t0{}-{}", self.miner, self.number)
    }
}

/// A sector id qualified with the seal proof type it was created under.
/// Fully determined at creation time and immutable thereafter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorRef {
    pub id: SectorId,
    pub proof_type: RegisteredSealProof,
}

/// SectorSize indicates one of a set of possible sizes in the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u64)]
pub enum SectorSize {
    _2KiB = 2 << 10,
    _8MiB = 8 << 20,
    _512MiB = 512 << 20,
    _32GiB = 32 << 30,
    _64GiB = 64 << 30,
}

impl From<SectorSize> for PaddedBytesAmount {
    fn from(s: SectorSize) -> Self {
        PaddedBytesAmount(s as u64)
    }
}

/// Seal proof variants. Selected once per pledge/redo call from current
/// network and provider parameters; determines sector size arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisteredSealProof {
    StackedDrg2KiBV1,
    StackedDrg8MiBV1,
    StackedDrg512MiBV1,
    StackedDrg32GiBV1,
    StackedDrg64GiBV1,
}

impl RegisteredSealProof {
    /// Returns the sector size of the proof type, measured in bytes.
    pub fn sector_size(self) -> SectorSize {
        use RegisteredSealProof::*;
        match self {
            StackedDrg2KiBV1 => SectorSize::_2KiB,
            StackedDrg8MiBV1 => SectorSize::_8MiB,
            StackedDrg512MiBV1 => SectorSize::_512MiB,
            StackedDrg32GiBV1 => SectorSize::_32GiB,
            StackedDrg64GiBV1 => SectorSize::_64GiB,
        }
    }
}

/// Byte count before bit-padding has been applied to sector data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnpaddedBytesAmount(pub u64);

/// Byte count after bit-padding has been applied to sector data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PaddedBytesAmount(pub u64);

impl PaddedBytesAmount {
    // Two bits of every 254-bit chunk are consumed by padding, which works
    // out to 1/128 of the padded length.
    pub fn unpadded(self) -> UnpaddedBytesAmount {
        UnpaddedBytesAmount(self.0 - self.0 / 128)
    }
}

impl UnpaddedBytesAmount {
    pub fn padded(self) -> PaddedBytesAmount {
        PaddedBytesAmount(self.0 + self.0 / 127)
    }
}

impl From<UnpaddedBytesAmount> for u64 {
    fn from(n: UnpaddedBytesAmount) -> Self {
        n.0
    }
}

impl From<PaddedBytesAmount> for u64 {
    fn from(n: PaddedBytesAmount) -> Self {
        n.0
    }
}

/// Lifecycle stages of the external sector state machine. This crate only
/// reads these or forces a transition; the full stage set and its
/// transition table live with the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectorState {
    Packing,
    PreCommitting,
    Committing,
    Proving,
    Proved,
    Removed,
}

impl fmt::Display for SectorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SectorState::Packing => "Packing",
            SectorState::PreCommitting => "PreCommitting",
            SectorState::Committing => "Committing",
            SectorState::Proving => "Proving",
            SectorState::Proved => "Proved",
            SectorState::Removed => "Removed",
        };
        write!(f, "{}", s)
    }
}

/// Sealing-pipeline configuration, read from the configuration provider
/// once per pledge call and never cached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SealingConfig {
    /// Upper bound on concurrently-sealing sectors. Zero means unlimited.
    pub max_sealing_sectors: u64,
}
