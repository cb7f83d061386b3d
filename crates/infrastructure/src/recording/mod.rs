//! Step recording adapters

mod tracing_recorder;

pub use tracing_recorder::TracingStepRecorder;
