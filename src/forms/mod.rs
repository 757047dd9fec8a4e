mod category;
mod component;
mod variant;

pub use category::*;
pub use component::*;
pub use variant::*;
