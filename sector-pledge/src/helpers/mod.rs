pub(crate) mod admission;
pub(crate) mod fill;

pub use self::admission::*;
pub use self::fill::*;
