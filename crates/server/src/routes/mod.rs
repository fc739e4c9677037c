pub mod catalog;
pub mod favorites;
