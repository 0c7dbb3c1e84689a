pub mod build;
pub mod part;
