//! Módulo de hashing y canonicalización JSON.
//!
//! Los digests se usan únicamente en telemetría (eventos `OperationFinished`)
//! para identificar payloads producidos sin copiarlos al log.

pub mod canonical_json;
pub mod hash;

pub use canonical_json::to_canonical_json;
pub use hash::{hash_str, hash_value};
