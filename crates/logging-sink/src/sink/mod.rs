mod capture;
mod output_sink;

pub use capture::CaptureBuffer;
pub use output_sink::{OutputSink, SinkKind};
