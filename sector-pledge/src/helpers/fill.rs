use crate::error::{err_ingestion, Result};
use crate::metadata::{PaddedBytesAmount, SectorRef};
use crate::nullreader::NullReader;
use crate::traits::SealerClient;

/// Fills a sector with placeholder data: a single conceptual zero-length
/// piece backed by an all-zero reader sized to exactly fill the sector's
/// unpadded capacity. Shared between the pledge and redo workflows; the
/// actual ingestion is delegated to the sealing engine.
pub fn fill_with_placeholder(sealer: &dyn SealerClient, sector: &SectorRef) -> Result<()> {
    let sector_size = PaddedBytesAmount::from(sector.proof_type.sector_size());
    let unpadded = sector_size.unpadded();

    info!("AddPiece {}", sector.id);

    let mut data = NullReader::new(unpadded);

    sealer
        .add_piece(sector, &[], unpadded, &mut data)
        .map_err(|err| err_ingestion(sector.id.number, err))
}

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::sync::Mutex;

    use crate::error::SectorPledgeErr;
    use crate::metadata::{RegisteredSealProof, SectorId, UnpaddedBytesAmount};

    use super::*;

    struct RecordingSealer {
        calls: Mutex<Vec<(SectorRef, Vec<UnpaddedBytesAmount>, UnpaddedBytesAmount, u64)>>,
        fail: bool,
    }

    impl SealerClient for RecordingSealer {
        fn add_piece(
            &self,
            sector: &SectorRef,
            piece_sizes: &[UnpaddedBytesAmount],
            total_size: UnpaddedBytesAmount,
            data: &mut dyn Read,
        ) -> anyhow::Result<()> {
            if self.fail {
                return Err(anyhow::anyhow!("disk full"));
            }

            let mut sink = Vec::new();
            let n = data.read_to_end(&mut sink)? as u64;
            assert!(sink.iter().all(|b| *b == 0));

            self.calls.lock().unwrap().push((
                *sector,
                piece_sizes.to_vec(),
                total_size,
                n,
            ));

            Ok(())
        }
    }

    fn sector_ref() -> SectorRef {
        SectorRef {
            id: SectorId {
                miner: 1000,
                number: 7,
            },
            proof_type: RegisteredSealProof::StackedDrg2KiBV1,
        }
    }

    #[test]
    fn test_fills_whole_unpadded_sector_with_zeroes() {
        let sealer = RecordingSealer {
            calls: Mutex::new(Vec::new()),
            fail: false,
        };

        fill_with_placeholder(&sealer, &sector_ref()).unwrap();

        let calls = sealer.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);

        let (sector, piece_sizes, total_size, bytes_read) = &calls[0];
        assert_eq!(*sector, sector_ref());
        assert!(piece_sizes.is_empty());
        assert_eq!(*total_size, UnpaddedBytesAmount(2032));
        assert_eq!(*bytes_read, 2032);
    }

    #[test]
    fn test_sealer_failure_is_wrapped_as_ingestion() {
        let sealer = RecordingSealer {
            calls: Mutex::new(Vec::new()),
            fail: true,
        };

        match fill_with_placeholder(&sealer, &sector_ref()) {
            Err(SectorPledgeErr::Ingestion { sector, .. }) => assert_eq!(sector, 7),
            other => panic!("expected Ingestion error, got {:?}", other),
        }
    }
}
