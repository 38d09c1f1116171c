//! Row structs for the asset store.
//!
//! Each entity struct is `FromRow` + `Serialize` so a presentation
//! layer can render rows directly. Input DTOs live in `demirbas-core`
//! next to their validation rules.

pub mod asset;

pub use asset::Asset;
