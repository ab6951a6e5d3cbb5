/// Substitution table, flipper, and configuration for upsidedown.
///
/// This crate contains the glyph table, the lookup trait, the flip logic and
/// the TOML configuration shared with the `upsidedown` binary.

pub mod config;
pub mod error;
pub mod flip;
pub mod table;
pub mod traits;

pub use config::FlipConfig;
pub use error::CoreError;
pub use flip::Flipper;
pub use table::{CharacterPair, IndexedTable, SubstitutionTable};
pub use traits::Substitution;
