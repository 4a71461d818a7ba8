pub mod exhaustive;
pub mod refine;
