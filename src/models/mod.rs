pub mod document;
pub mod extraction;
pub mod stage;

pub use document::*;
pub use extraction::*;
pub use stage::*;
