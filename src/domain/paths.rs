use std::path::{Path, PathBuf};

/// Filesystem locations the agent reads and writes, all resolved against a
/// configurable root so tests can run inside a temporary directory.
#[derive(Debug, Clone)]
pub struct AgentPaths {
    root: PathBuf,
}

impl AgentPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn under(&self, absolute: &str) -> PathBuf {
        // Stored targets are absolute; strip the leading `/` so they join
        // under the configured root instead of replacing it.
        self.root.join(absolute.trim_start_matches('/'))
    }

    /// `/etc/default/haproxy`
    pub fn haproxy_defaults(&self) -> PathBuf {
        self.under("/etc/default/haproxy")
    }

    /// `/etc/haproxy/haproxy.cfg`
    pub fn haproxy_config(&self) -> PathBuf {
        self.under("/etc/haproxy/haproxy.cfg")
    }

    /// `/etc/ssl/certs/dashboard.cert`
    pub fn ssl_cert(&self) -> PathBuf {
        self.under("/etc/ssl/certs/dashboard.cert")
    }

    /// `/etc/ssl/private/dashboard.key`
    pub fn ssl_key(&self) -> PathBuf {
        self.under("/etc/ssl/private/dashboard.key")
    }

    /// `/etc/apache2/ports.conf`
    pub fn web_server_ports(&self) -> PathBuf {
        self.under("/etc/apache2/ports.conf")
    }

    /// `/etc/apache2/sites-available/dashboard.conf`
    pub fn web_server_site(&self) -> PathBuf {
        self.under("/etc/apache2/sites-available/dashboard.conf")
    }

    /// `/etc/dashboard/local_settings.py`
    pub fn dashboard_settings(&self) -> PathBuf {
        self.under("/etc/dashboard/local_settings.py")
    }

    /// `/proc/net/if_inet6`
    pub fn ipv6_table(&self) -> PathBuf {
        self.under("/proc/net/if_inet6")
    }
}
