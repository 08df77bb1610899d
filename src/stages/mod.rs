pub mod stage0_normalize;
pub mod stage1_extract;
pub mod stage2_synthesize;

pub use stage0_normalize::*;
pub use stage1_extract::*;
pub use stage2_synthesize::*;
