//! Provider bindings, one module per algorithm family
//!
//! Post-quantum providers work on raw key bytes; classical providers keep
//! their typed keys.

pub(crate) mod classical;
pub(crate) mod falcon;
pub(crate) mod ml_dsa;
pub(crate) mod slh_dsa;
