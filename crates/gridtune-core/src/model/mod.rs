pub mod component;
pub mod defaults;
pub mod target;
