pub mod figure;
pub mod style;
pub mod summary;
