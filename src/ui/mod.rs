pub mod format;
pub mod view_model;
