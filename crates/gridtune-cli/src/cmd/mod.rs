pub mod components;
pub mod refine;
pub mod search;
pub mod targets;

mod input;
