pub mod completion;
pub mod config;
pub mod dashboard;
pub mod exercises;
pub mod routines;
pub mod session;
pub mod workouts;

use std::io::{self, Write};

use anyhow::{Result, bail};
use shared::{FitzClient, SessionStore, config::ClientConfig};

use crate::store::{FileStorage, default_session_path};

/// Resolved configuration plus the session file every command shares.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: ClientConfig,
}

impl Context {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(
            self.config
                .session_path
                .clone()
                .unwrap_or_else(default_session_path),
        )
    }

    pub fn session_store(&self) -> SessionStore<FileStorage> {
        SessionStore::restore(self.storage())
    }

    /// Client without credentials.
    pub fn client(&self) -> FitzClient {
        FitzClient::new(&self.config.api_base_url)
    }

    /// Client carrying the stored token.
    ///
    /// # Errors
    /// Fails when nobody is logged in.
    pub fn authenticated_client(&self) -> Result<FitzClient> {
        let store = self.session_store();
        let Some(token) = store.token() else {
            bail!("no active session; run `fitz session login` first");
        };
        Ok(self.client().with_token(token))
    }
}

/// Read one line from stdin after printing `message`.
pub fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().ok();
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
