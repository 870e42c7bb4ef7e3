pub mod audit;
pub mod facts;
pub mod sink;

pub use audit::AuditCtx;
pub use facts::{FactsEmitter, LogFactsSink};
pub use sink::{ConsoleSink, StderrSink};
