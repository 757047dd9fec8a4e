pub mod category;
pub mod component;
pub mod health_checks;

pub use health_checks::*;
