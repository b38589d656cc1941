//! File persistence configuration

/// Configuration for the locally held session (token + cached profile)
pub struct SessionPersistenceConfig {
    /// Default path of the session file, relative to the working directory
    pub path: &'static str,
}

pub struct PersistenceConfig {
    pub session: SessionPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    session: SessionPersistenceConfig {
        path: ".zk_session.json",
    },
};
