//! Async builders over the key pair API

mod keypair_builder;
mod states;

pub use self::keypair_builder::{GeneratedKeyPair, KeyPairBuilder};
pub use self::states::{BuilderState, HasAlgorithm, NeedAlgorithm};
