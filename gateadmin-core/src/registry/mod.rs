use crate::conf::ClientConfig;
use crate::error::ClientError;
use crate::repository::ConfigRepository;
use crate::transport::{Exchange, ReqwestExchange, Session, VersionedTransport};
use arc_swap::ArcSwapOption;
use std::sync::{Arc, OnceLock};
use tracing::info;


static GLOBAL: OnceLock<ClientRegistry> = OnceLock::new();

/// Holder of the active transport and the session it runs on.
///
/// Every transport installed through one registry shares the registry's
/// [`Session`]. The process-wide instance is created on first use by
/// [`ClientRegistry::global`]; independent registries come from
/// [`ClientRegistry::new`].
pub struct ClientRegistry {
    session: Session,
    active: ArcSwapOption<VersionedTransport>,
}

impl Default for ClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::with_session(Session::new())
    }

    /// Registry over an existing session, e.g. one shared with another client.
    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            active: ArcSwapOption::empty(),
        }
    }

    pub fn global() -> &'static ClientRegistry {
        GLOBAL.get_or_init(ClientRegistry::new)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Makes `exchange` the active transport, replacing any previous one.
    pub fn install(&self, exchange: Arc<dyn Exchange>) -> Arc<VersionedTransport> {
        let transport = Arc::new(VersionedTransport::new(exchange, self.session.clone()));
        self.active.store(Some(transport.clone()));
        transport
    }

    /// Installs a `reqwest` exchange built from `config`.
    pub fn connect(&self, config: &ClientConfig) -> Result<Arc<VersionedTransport>, ClientError> {
        let exchange = ReqwestExchange::new(config.base_url.clone(), config.timeout)?;
        info!(base_url = %config.base_url, "admin client connected");
        Ok(self.install(Arc::new(exchange)))
    }

    pub fn transport(&self) -> Option<Arc<VersionedTransport>> {
        self.active.load_full()
    }

    /// Repository over the active transport, if one is installed.
    ///
    /// The repository keeps the transport it was created with; a later
    /// [`install`](Self::install) affects only repositories created after it.
    pub fn repository(&self) -> Option<ConfigRepository> {
        self.transport().map(ConfigRepository::new)
    }
}
