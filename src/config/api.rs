/// Remote endpoints. Paths are appended verbatim (`{auth_url}/login`).
pub struct Endpoints {
    pub auth_url: &'static str,
    pub inv_url: &'static str,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

/// Header carrying the opaque session token on every request.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

pub struct ApiConfig {
    pub endpoints: Endpoints,
    pub client: ClientDefaults,
}

pub const API: ApiConfig = ApiConfig {
    endpoints: Endpoints {
        auth_url: "https://functions.poehali.dev/5d3caa49-5d31-4eb5-8bf5-ab798d7d30e2",
        inv_url: "https://functions.poehali.dev/99f934d7-938f-4137-8d71-ba06811bfcad",
    },
    client: ClientDefaults {
        timeout_ms: 15_000,
        user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
    },
};
