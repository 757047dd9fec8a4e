mod category;
mod component;

pub use category::*;
pub use component::*;
