use crate::coerce;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outbound proxy monitors can route through
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proxy {
    /// Server-assigned ID; 0 means not yet persisted
    #[serde(default)]
    pub id: i64,

    /// Owning user
    #[serde(rename = "userId", default, deserialize_with = "coerce::opt_int", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Proxy protocol
    pub protocol: ProxyProtocol,

    /// Proxy host name or address
    pub host: String,

    /// Proxy port
    pub port: u16,

    /// Whether credentials are sent
    #[serde(default, deserialize_with = "coerce::bool_or_int")]
    pub auth: bool,

    /// Username for authenticated proxies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Password for authenticated proxies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Whether the proxy is enabled
    #[serde(default, deserialize_with = "coerce::bool_or_int")]
    pub active: bool,

    /// Use for newly created monitors
    #[serde(default, deserialize_with = "coerce::bool_or_int")]
    pub default: bool,

    /// Creation timestamp as formatted by the server
    #[serde(rename = "createdDate", default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,

    /// Also apply to every existing monitor when saved; never sent back by the server
    #[serde(rename = "applyExisting", skip_deserializing)]
    pub apply_existing: bool,
}

impl Proxy {
    /// Create an active proxy without authentication
    #[must_use]
    pub fn new(protocol: ProxyProtocol, host: impl Into<String>, port: u16) -> Self {
        Self {
            protocol,
            host: host.into(),
            port,
            active: true,
            ..Self::default()
        }
    }

    /// Enable authentication with the given credentials
    #[must_use]
    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = true;
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Proxy URL without credentials, e.g. `socks5://10.0.0.1:1080`
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}

impl fmt::Display for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::pretty::display_serialized(f, self, &["password"])
    }
}

/// Supported proxy protocols
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyProtocol {
    /// HTTPS CONNECT proxy
    #[default]
    Https,
    /// HTTP proxy
    Http,
    /// SOCKS (version negotiated)
    Socks,
    /// SOCKS5
    Socks5,
    /// SOCKS5 with remote DNS
    Socks5h,
    /// SOCKS4
    Socks4,
}

impl fmt::Display for ProxyProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Https => write!(f, "https"),
            Self::Http => write!(f, "http"),
            Self::Socks => write!(f, "socks"),
            Self::Socks5 => write!(f, "socks5"),
            Self::Socks5h => write!(f, "socks5h"),
            Self::Socks4 => write!(f, "socks4"),
        }
    }
}
