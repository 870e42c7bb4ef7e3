pub mod context;
pub mod errors;
pub mod identity;
pub mod mismatch;

pub use context::*;
pub use errors::*;
pub use identity::*;
pub use mismatch::*;
