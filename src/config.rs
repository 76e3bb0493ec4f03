use anyhow::{Context, Result, bail};
use axum::http::Uri;
use clap::Parser;
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Version string reported by `GET /api/`.
pub const SERVER_VERSION: &str = "2.28.1";

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Externally visible base URL (e.g. `http://localhost:8000`), without `/api/`.
    pub public_url: Option<String>,
    pub max_upload_bytes: usize,
    pub server_version: String,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(
    author,
    version,
    about = "Local stand-in for a GraceDB server, accepting event uploads from a live pipeline"
)]
pub struct Args {
    /// Host to bind to (overrides FAKE_GRACEDB_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides FAKE_GRACEDB_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Base URL advertised in the API document (overrides FAKE_GRACEDB_PUBLIC_URL)
    #[arg(long)]
    pub public_url: Option<String>,

    /// Largest accepted request body in bytes (overrides FAKE_GRACEDB_MAX_UPLOAD_BYTES)
    #[arg(long)]
    pub max_upload_bytes: Option<usize>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        Self::from_sources(Args::parse(), |key| env::var(key))
    }

    /// Merge parsed arguments over values from `lookup`, then over defaults.
    pub fn from_sources<F>(args: Args, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let env_host = optional_var(&lookup, "FAKE_GRACEDB_HOST")?;
        let env_port = match optional_var(&lookup, "FAKE_GRACEDB_PORT")? {
            Some(value) => Some(
                value
                    .parse::<u16>()
                    .with_context(|| format!("parsing FAKE_GRACEDB_PORT value `{}`", value))?,
            ),
            None => None,
        };
        let env_public_url = optional_var(&lookup, "FAKE_GRACEDB_PUBLIC_URL")?;
        let env_max_upload = match optional_var(&lookup, "FAKE_GRACEDB_MAX_UPLOAD_BYTES")? {
            Some(value) => Some(value.parse::<usize>().with_context(|| {
                format!("parsing FAKE_GRACEDB_MAX_UPLOAD_BYTES value `{}`", value)
            })?),
            None => None,
        };

        // --- Merge ---
        let public_url = match args.public_url.or(env_public_url) {
            Some(url) => Some(normalize_public_url(&url)?),
            None => None,
        };

        Ok(Self {
            host: args
                .host
                .or(env_host)
                .unwrap_or_else(|| DEFAULT_HOST.into()),
            port: args.port.or(env_port).unwrap_or(DEFAULT_PORT),
            public_url,
            max_upload_bytes: args
                .max_upload_bytes
                .or(env_max_upload)
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            server_version: SERVER_VERSION.into(),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            public_url: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            server_version: SERVER_VERSION.into(),
        }
    }
}

fn optional_var<F>(lookup: &F, key: &str) -> Result<Option<String>>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    match lookup(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).with_context(|| format!("reading {}", key)),
    }
}

/// Accept only absolute http(s) URLs and drop any trailing slash.
fn normalize_public_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let uri: Uri = trimmed
        .parse()
        .with_context(|| format!("parsing public URL `{}`", raw))?;
    match uri.scheme_str() {
        Some("http") | Some("https") => {}
        _ => bail!("public URL `{}` must use http or https", raw),
    }
    if uri.authority().is_none() {
        bail!("public URL `{}` has no host", raw);
    }
    Ok(trimmed.to_string())
}
