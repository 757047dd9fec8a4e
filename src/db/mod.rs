pub mod category;
pub mod component;
