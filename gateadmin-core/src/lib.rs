pub mod conf;
pub mod error;
pub mod identity;
pub mod logging;
pub mod model;
pub mod registry;
pub mod repository;
pub mod transport;

pub use conf::{ClientConfig, Credentials};
pub use error::{ClientError, TransportError};
pub use registry::ClientRegistry;
pub use repository::ConfigRepository;
pub use transport::{Session, VersionedTransport};
