use {
    crate::{
        config::Rub,
        models::User,
    },
    anyhow::{Context, Result},
    serde::{Deserialize, Serialize},
    std::{
        fs::{self, File},
        io::{BufReader, BufWriter},
        path::{Path, PathBuf},
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Client-held session: set on login/registration, cleared on logout, read on every
/// authenticated request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl Session {
    pub fn new(token: String, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty()) && self.user.is_some()
    }

    /// Value for the auth header; empty when logged out.
    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Keep the cached profile in step with the balance the ledger reports.
    pub fn update_balance(&mut self, balance: Rub) {
        if let Some(user) = self.user.as_mut() {
            user.balance = balance;
        }
    }
}

/// JSON file holding the session between CLI invocations.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty session.
    pub fn load(&self) -> Result<Session> {
        if !self.path.exists() {
            return Ok(Session::default());
        }
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open session file {}", self.path.display()))?;
        let session = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Corrupt session file {}", self.path.display()))?;

        #[cfg(debug_assertions)]
        if DF.log_session {
            log::info!("Loaded session from {}", self.path.display());
        }
        Ok(session)
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if !session.is_authenticated() {
            return self.clear();
        }
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to write session file {}", self.path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), session)?;

        #[cfg(debug_assertions)]
        if DF.log_session {
            log::info!("Saved session to {}", self.path.display());
        }
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove session file {}", self.path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            email: "a@b.ru".to_string(),
            full_name: "Анна".to_string(),
            phone: None,
            balance: Rub::new(500.0),
            is_admin: false,
        }
    }

    #[test]
    fn empty_session_sends_empty_token() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), "");
    }

    #[test]
    fn balance_update_touches_cached_user_only_when_present() {
        let mut session = Session::new("tok".into(), user());
        session.update_balance(Rub::new(7000.0));
        assert_eq!(session.user.as_ref().unwrap().balance, Rub::new(7000.0));

        let mut empty = Session::default();
        empty.update_balance(Rub::new(1.0));
        assert_eq!(empty, Session::default());
    }

    #[test]
    fn store_round_trip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        assert_eq!(store.load().unwrap(), Session::default());

        let session = Session::new("tok".into(), user());
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), session);

        store.save(&Session::default()).unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert!(SessionStore::new(path).load().is_err());
    }
}
