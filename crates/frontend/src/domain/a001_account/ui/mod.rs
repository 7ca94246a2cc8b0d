pub mod details;
pub mod rows;
