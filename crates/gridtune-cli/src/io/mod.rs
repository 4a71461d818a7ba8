pub mod components_file;
pub mod sav;
