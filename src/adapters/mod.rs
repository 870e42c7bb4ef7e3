pub mod identity;
pub mod ownership;
pub mod settings;

pub use identity::*;
pub use ownership::*;
pub use settings::*;
