mod http;
pub mod server;
pub mod tracing;

pub use self::server::{MockAdmin, RecordedRequest};
pub use self::tracing::{CapturedEvent, events, find_event, install_capture};
