//! Credentials file (`ovh.conf`) loading and rendering.
//!
//! The file is INI:
//!
//! ```ini
//! [default]
//! endpoint=ovh-eu
//!
//! [ovh-eu]
//! application_key=...
//! application_secret=...
//! consumer_key=...
//! ```
//!
//! Files are layered in [`config_search_paths`] order, later files overriding
//! earlier ones, then `OVH_*` environment variables override the result.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};

use crate::types::{Credentials, Endpoint};

/// Name of the per-user credentials file in the home directory.
pub const USER_CONFIG_FILE: &str = ".ovh.conf";

/// Environment variable overriding `[default] endpoint`.
pub const ENV_ENDPOINT: &str = "OVH_ENDPOINT";
/// Environment variable overriding `application_key`.
pub const ENV_APPLICATION_KEY: &str = "OVH_APPLICATION_KEY";
/// Environment variable overriding `application_secret`.
pub const ENV_APPLICATION_SECRET: &str = "OVH_APPLICATION_SECRET";
/// Environment variable overriding `consumer_key`.
pub const ENV_CONSUMER_KEY: &str = "OVH_CONSUMER_KEY";

/// Parsed INI content: section name -> key -> value.
pub type IniSections = HashMap<String, HashMap<String, String>>;

/// Why credentials could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// Neither `[default] endpoint` nor `OVH_ENDPOINT` is set.
    MissingEndpoint,
    /// The endpoint names no known API region.
    UnknownEndpoint {
        /// The configured value.
        endpoint: String,
    },
    /// A key is absent or blank in the endpoint section and its environment variable.
    MissingField {
        /// Section that was searched.
        section: String,
        /// Missing key.
        field: String,
    },
    /// A configuration file exists but could not be parsed.
    Read {
        /// Parser message.
        detail: String,
    },
}

impl std::fmt::Display for CredentialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEndpoint => write!(
                f,
                "No endpoint configured (set [default] endpoint in ~/{USER_CONFIG_FILE} or {ENV_ENDPOINT})"
            ),
            Self::UnknownEndpoint { endpoint } => {
                let known: Vec<&str> = Endpoint::ALL.iter().map(|e| e.name()).collect();
                write!(
                    f,
                    "Unknown endpoint '{endpoint}' (expected one of: {})",
                    known.join(", ")
                )
            }
            Self::MissingField { section, field } => {
                write!(f, "Missing '{field}' in section [{section}]")
            }
            Self::Read { detail } => write!(f, "Invalid configuration file: {detail}"),
        }
    }
}

impl std::error::Error for CredentialError {}

/// Files read by [`load_credentials`], lowest priority first.
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/ovh.conf")];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(USER_CONFIG_FILE));
    }
    paths.push(PathBuf::from("ovh.conf"));
    paths
}

/// Where `setup` writes credentials.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(USER_CONFIG_FILE))
}

/// Merge the given INI files. Missing files are skipped.
pub fn read_sections(paths: &[PathBuf]) -> Result<IniSections, CredentialError> {
    let builder = paths.iter().fold(Config::builder(), |builder, path| {
        builder.add_source(
            File::from(path.as_path())
                .format(FileFormat::Ini)
                .required(false),
        )
    });

    let merged = builder.build().map_err(|e| CredentialError::Read {
        detail: e.to_string(),
    })?;

    merged
        .try_deserialize::<IniSections>()
        .map_err(|e| CredentialError::Read {
            detail: e.to_string(),
        })
}

/// Assemble credentials from parsed sections, letting `env` override file values.
///
/// Blank values count as missing, whether they come from a file or from `env`.
pub fn resolve_credentials<F>(sections: &IniSections, env: F) -> Result<Credentials, CredentialError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |var: &str| env(var).filter(|v| !v.trim().is_empty());
    let file_value = |section: &str, key: &str| {
        sections
            .get(section)
            .and_then(|s| s.get(key))
            .filter(|v| !v.trim().is_empty())
            .cloned()
    };

    let endpoint_name = lookup(ENV_ENDPOINT)
        .or_else(|| file_value("default", "endpoint"))
        .ok_or(CredentialError::MissingEndpoint)?;
    let endpoint: Endpoint =
        endpoint_name
            .parse()
            .map_err(|_| CredentialError::UnknownEndpoint {
                endpoint: endpoint_name.trim().to_string(),
            })?;

    let section = endpoint.name();
    let field = |key: &str, var: &str| {
        lookup(var)
            .or_else(|| file_value(section, key))
            .map(|v| v.trim().to_string())
            .ok_or_else(|| CredentialError::MissingField {
                section: section.to_string(),
                field: key.to_string(),
            })
    };

    Ok(Credentials {
        endpoint,
        application_key: field("application_key", ENV_APPLICATION_KEY)?,
        application_secret: field("application_secret", ENV_APPLICATION_SECRET)?,
        consumer_key: field("consumer_key", ENV_CONSUMER_KEY)?,
    })
}

/// Load credentials from the standard file locations and the process environment.
pub fn load_credentials() -> Result<Credentials, CredentialError> {
    let paths = config_search_paths();
    log::debug!("Reading credentials from {paths:?}");
    let sections = read_sections(&paths)?;
    resolve_credentials(&sections, |var| std::env::var(var).ok())
}

impl Credentials {
    /// Render as an `ovh.conf` file.
    pub fn to_config_string(&self) -> String {
        let endpoint = self.endpoint.name();
        format!(
            "[default]\nendpoint={endpoint}\n\n[{endpoint}]\napplication_key={}\napplication_secret={}\nconsumer_key={}\n",
            self.application_key, self.application_secret, self.consumer_key
        )
    }
}

/// Write `credentials` to `path` in a single write, replacing any previous file.
pub fn write_credentials(path: &Path, credentials: &Credentials) -> std::io::Result<()> {
    std::fs::write(path, credentials.to_config_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Credentials {
        Credentials {
            endpoint: Endpoint::OvhEu,
            application_key: "ak".to_string(),
            application_secret: "as".to_string(),
            consumer_key: "ck".to_string(),
        }
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn renders_exact_file_format() {
        assert_eq!(
            sample().to_config_string(),
            "[default]\nendpoint=ovh-eu\n\n[ovh-eu]\napplication_key=ak\napplication_secret=as\nconsumer_key=ck\n"
        );
    }

    #[test]
    fn written_file_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ovh.conf");
        write_credentials(&path, &sample()).unwrap();

        let sections = read_sections(&[path]).unwrap();
        assert_eq!(resolve_credentials(&sections, no_env).unwrap(), sample());
    }

    #[test]
    fn missing_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let sections = read_sections(&[dir.path().join("absent.conf")]).unwrap();
        assert!(sections.is_empty());
        assert_eq!(
            resolve_credentials(&sections, no_env),
            Err(CredentialError::MissingEndpoint)
        );
    }

    #[test]
    fn later_files_override_earlier_ones() {
        let dir = tempfile::tempdir().unwrap();
        let system = write(
            dir.path(),
            "system.conf",
            "[default]\nendpoint=ovh-eu\n\n[ovh-eu]\napplication_key=sys-ak\napplication_secret=sys-as\nconsumer_key=sys-ck\n",
        );
        let local = write(
            dir.path(),
            "local.conf",
            "[ovh-eu]\nconsumer_key=local-ck\n",
        );

        let sections = read_sections(&[system, local]).unwrap();
        let creds = resolve_credentials(&sections, no_env).unwrap();

        assert_eq!(creds.application_key, "sys-ak");
        assert_eq!(creds.consumer_key, "local-ck");
    }

    #[test]
    fn env_overrides_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ovh.conf");
        write_credentials(&path, &sample()).unwrap();
        let sections = read_sections(&[path]).unwrap();

        let env: HashMap<&str, &str> = [
            (ENV_ENDPOINT, "ovh-ca"),
            (ENV_APPLICATION_KEY, "env-ak"),
            (ENV_APPLICATION_SECRET, "env-as"),
            (ENV_CONSUMER_KEY, "env-ck"),
        ]
        .into_iter()
        .collect();
        let creds =
            resolve_credentials(&sections, |k| env.get(k).map(|v| (*v).to_string())).unwrap();

        assert_eq!(creds.endpoint, Endpoint::OvhCa);
        assert_eq!(creds.application_key, "env-ak");
        assert_eq!(creds.consumer_key, "env-ck");
    }

    #[test]
    fn blank_env_value_does_not_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ovh.conf");
        write_credentials(&path, &sample()).unwrap();
        let sections = read_sections(&[path]).unwrap();

        let creds = resolve_credentials(&sections, |k| {
            (k == ENV_CONSUMER_KEY).then(String::new)
        })
        .unwrap();
        assert_eq!(creds.consumer_key, "ck");
    }

    #[test]
    fn unknown_endpoint_is_rejected() {
        let mut sections = IniSections::new();
        sections.insert(
            "default".to_string(),
            HashMap::from([("endpoint".to_string(), "ovh-mars".to_string())]),
        );

        assert_eq!(
            resolve_credentials(&sections, no_env),
            Err(CredentialError::UnknownEndpoint {
                endpoint: "ovh-mars".to_string()
            })
        );
    }

    #[test]
    fn missing_key_names_section_and_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "ovh.conf",
            "[default]\nendpoint=kimsufi-eu\n\n[kimsufi-eu]\napplication_key=ak\napplication_secret=as\n",
        );
        let sections = read_sections(&[path]).unwrap();
        let err = resolve_credentials(&sections, no_env).unwrap_err();

        assert_eq!(
            err,
            CredentialError::MissingField {
                section: "kimsufi-eu".to_string(),
                field: "consumer_key".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Missing 'consumer_key' in section [kimsufi-eu]");
    }

    #[test]
    fn search_paths_end_with_working_directory() {
        let paths = config_search_paths();
        assert_eq!(paths.first(), Some(&PathBuf::from("/etc/ovh.conf")));
        assert_eq!(paths.last(), Some(&PathBuf::from("ovh.conf")));
    }
}
