use crate::coerce;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A Docker daemon that container monitors can target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerHost {
    /// Server-assigned ID; 0 means not yet persisted
    #[serde(default)]
    pub id: i64,

    /// Owning user
    #[serde(rename = "userId", default, deserialize_with = "coerce::opt_int", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Socket path or TCP URL, e.g. `/var/run/docker.sock`
    #[serde(rename = "dockerDaemon")]
    pub docker_daemon: String,

    /// How the daemon is reached
    #[serde(rename = "dockerType")]
    pub docker_type: DockerType,

    /// Friendly name
    pub name: String,
}

impl DockerHost {
    /// Create a host reached through a unix socket
    #[must_use]
    pub fn socket(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docker_daemon: path.into(),
            docker_type: DockerType::Socket,
            ..Self::default()
        }
    }

    /// Create a host reached over TCP/HTTP
    #[must_use]
    pub fn tcp(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docker_daemon: url.into(),
            docker_type: DockerType::Tcp,
            ..Self::default()
        }
    }
}

impl fmt::Display for DockerHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::pretty::display_serialized(f, self, &[])
    }
}

/// Docker daemon connection type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockerType {
    /// Unix socket
    #[default]
    Socket,
    /// TCP / HTTP
    Tcp,
}

impl fmt::Display for DockerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Socket => write!(f, "socket"),
            Self::Tcp => write!(f, "tcp"),
        }
    }
}

/// Result of asking the server to test a Docker host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerHostTestResult {
    /// Whether the daemon answered
    #[serde(default)]
    pub ok: bool,

    /// Server message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,

    /// Daemon version
    #[serde(default, deserialize_with = "docker_version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl fmt::Display for DockerHostTestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::pretty::display_serialized(f, self, &[])
    }
}

/// Server versions differ: some send the version string, others the whole
/// `/version` response object.
#[derive(Deserialize)]
#[serde(untagged)]
enum VersionRepr {
    Text(String),
    Object {
        #[serde(rename = "Version", default)]
        version: Option<String>,
    },
}

fn docker_version<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<VersionRepr>::deserialize(deserializer)? {
        None => None,
        Some(VersionRepr::Text(s)) if s.is_empty() => None,
        Some(VersionRepr::Text(s)) => Some(s),
        Some(VersionRepr::Object { version }) => version.filter(|v| !v.is_empty()),
    })
}
