// Reusable library API — visible to the CLI and to embedding callers
pub mod canonical;
pub mod dictionary;
pub mod errors;
pub mod report;
pub mod tile_bag;

pub use crate::canonical::{canon, is_permutation};
pub use crate::dictionary::{Dictionary, DictionaryStats};
pub use crate::errors::DictionaryError;
pub use crate::tile_bag::TileBag;
