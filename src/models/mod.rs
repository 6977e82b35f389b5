pub mod digital_file;
pub mod filters;
pub mod pagination;
pub mod sort;
