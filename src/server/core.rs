use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::auth::Verifier;
use crate::config::ServerConfig;
use crate::error::AuthServerError;
use crate::routes::{AppState, router};
use crate::store::CredentialStore;

/// HTTP server wrapping the credential verifier.
pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
}

impl Server {
    /// Binds the HTTP listener and prepares the application state.
    pub async fn bind(
        config: &ServerConfig,
        store: Arc<dyn CredentialStore>,
    ) -> Result<Self, AuthServerError> {
        let socket = config.socket_addr();

        let listener = match TcpListener::bind(&socket).await {
            Ok(listener) => {
                info!("Server bound to {}", socket);
                listener
            }
            Err(e) => {
                error!("Failed to bind to {}: {}", socket, e);
                return Err(AuthServerError::IoError(e));
            }
        };

        let state = Arc::new(AppState {
            verifier: Verifier::new(store),
        });

        Ok(Self { listener, state })
    }

    /// Returns the address the listener is bound to.
    ///
    /// Useful when binding port 0 and the OS picks the port.
    pub fn local_addr(&self) -> Result<SocketAddr, AuthServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves requests until the process is stopped.
    pub async fn start(self) {
        match self.listener.local_addr() {
            Ok(addr) => info!("Starting auth server on {}", addr),
            Err(e) => error!("Listener address unavailable: {}", e),
        }

        let app = router(self.state);

        if let Err(e) = axum::serve(self.listener, app).await {
            error!("Server terminated: {}", e);
        }
    }
}
