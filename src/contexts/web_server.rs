//! Web server port map and TLS materialization.

use std::fs;
use std::os::unix::fs::PermissionsExt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::info;

use crate::domain::{AgentPaths, AppError, ContextMap, non_empty_string, sorted_ids};
use crate::ports::HookEnv;

use super::ContextSource;

/// The web server sits behind the balancer and binds shifted ports; the
/// balancer owns 80/443.
pub const HTTP_PORT: u16 = 70;
pub const HTTPS_PORT: u16 = 433;

pub struct WebServerContext;

impl ContextSource for WebServerContext {
    fn name(&self) -> &'static str {
        "web-server"
    }

    fn build(&self, _env: &dyn HookEnv) -> Result<ContextMap, AppError> {
        let mut map = ContextMap::new();
        map.insert("http_port", HTTP_PORT);
        map.insert("https_port", HTTPS_PORT);
        Ok(map)
    }
}

/// Installs the operator- or identity-provided certificate pair and tells
/// the site template whether TLS is configured. Without a pair the site
/// falls back to the distribution's self-signed certificate.
pub struct WebServerSslContext {
    paths: AgentPaths,
}

impl WebServerSslContext {
    pub fn new(paths: AgentPaths) -> Self {
        Self { paths }
    }

    /// The base64-encoded pair, if a full one exists. Charm options win
    /// when both halves are set; otherwise both halves are looked up on the
    /// identity-service relations, each taken from the first unit that
    /// published it.
    fn certificate_pair(&self, env: &dyn HookEnv) -> Result<Option<(String, String)>, AppError> {
        let cert = non_empty_string(env.config("ssl_cert")?.as_ref());
        let key = non_empty_string(env.config("ssl_key")?.as_ref());
        if let (Some(cert), Some(key)) = (cert, key) {
            return Ok(Some((cert, key)));
        }

        let mut cert = None;
        let mut key = None;
        for rid in sorted_ids(env.relation_ids("identity-service")?) {
            for unit in sorted_ids(env.related_units(&rid)?) {
                if cert.is_none() {
                    cert = env
                        .relation_get(&rid, &unit, "ssl_cert")?
                        .filter(|v| !v.is_empty());
                }
                if key.is_none() {
                    key = env
                        .relation_get(&rid, &unit, "ssl_key")?
                        .filter(|v| !v.is_empty());
                }
            }
        }
        Ok(cert.zip(key))
    }

    /// Compute the map without installing anything.
    pub fn preview(&self, env: &dyn HookEnv) -> Result<ContextMap, AppError> {
        let mut map = ContextMap::new();
        match self.certificate_pair(env)? {
            Some(_) => {
                map.insert("ssl_configured", true);
                map.insert("ssl_cert", self.paths.ssl_cert().display().to_string());
                map.insert("ssl_key", self.paths.ssl_key().display().to_string());
            }
            None => {
                map.insert("ssl_configured", false);
            }
        }
        Ok(map)
    }

    /// Decode and write the pair, locking the private key down to the
    /// owner. Decode failures surface before anything is written.
    fn install(&self, cert: &str, key: &str) -> Result<(), AppError> {
        let cert = decode_material("certificate", cert)?;
        let key = decode_material("private key", key)?;

        let cert_path = self.paths.ssl_cert();
        let key_path = self.paths.ssl_key();
        for path in [&cert_path, &key_path] {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&cert_path, cert)?;
        fs::write(&key_path, key)?;
        fs::set_permissions(&key_path, fs::Permissions::from_mode(0o600))?;
        info!(cert = %cert_path.display(), key = %key_path.display(), "installed certificate pair");
        Ok(())
    }
}

/// Certificate material usually comes out of `base64`, which wraps long
/// lines; the whitespace is not part of the encoding.
fn decode_material(what: &str, material: &str) -> Result<Vec<u8>, AppError> {
    let compact: String = material.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD.decode(compact).map_err(|e| AppError::InvalidCertificate {
        what: what.to_string(),
        details: e.to_string(),
    })
}

impl ContextSource for WebServerSslContext {
    fn name(&self) -> &'static str {
        "web-server-ssl"
    }

    fn build(&self, env: &dyn HookEnv) -> Result<ContextMap, AppError> {
        if let Some((cert, key)) = self.certificate_pair(env)? {
            self.install(&cert, &key)?;
        }
        self.preview(env)
    }
}
