pub mod project;
pub mod selection;
