use crate::error::{err_admission, Result};

/// Decides whether a new sector may enter the sealing pipeline. Pure; the
/// caller is responsible for reading `cur_sealing` from a live counter and
/// for holding the pledge lock so that check-then-create is race-free.
/// A `max_sealing` of zero means no ceiling.
pub fn check_admission(max_sealing: u64, cur_sealing: u64) -> Result<()> {
    if max_sealing > 0 && cur_sealing >= max_sealing {
        return Err(err_admission(cur_sealing, max_sealing));
    }

    Ok(())
}
