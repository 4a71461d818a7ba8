pub mod error;
pub mod validate;

pub mod domain;
pub mod model;
pub mod savefile;
pub mod score;
pub mod search;

pub use crate::error::{GtError, Result};
pub use crate::model::component::Component;
pub use crate::model::target::TargetVector;
pub use crate::savefile::{extract_targets, read_targets};
pub use crate::score::Scorer;
pub use crate::search::exhaustive::search_exhaustive;
pub use crate::search::refine::search_refining;
