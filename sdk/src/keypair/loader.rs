use std::{env, fs, path::PathBuf};

use super::{error::KeypairLoadError, source::KeypairSource};

/// Environment variable name for keypair (can be JSON content or file path)
pub const ENV_KEYPAIR: &str = "SOLWALLET_KEYPAIR";

/// Result of loading a keypair, including provenance information
pub struct KeypairLoadResult {
    /// The raw byte values of the keypair
    pub bytes: Vec<u8>,
    /// The source from which the keypair was loaded
    pub source: KeypairSource,
}

/// Check if a string value looks like JSON keypair content (starts with '[' and ends with ']')
pub fn is_keypair_json_content(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.starts_with('[') && trimmed.ends_with(']')
}

/// Parse a keypair byte array from a JSON string.
///
/// The top-level value must be an array and every element must be an integer
/// in `0..=255`. No length check is applied.
pub fn parse_keypair_json(json_str: &str, origin: &str) -> Result<Vec<u8>, KeypairLoadError> {
    let value: serde_json::Value =
        serde_json::from_str(json_str).map_err(|e| KeypairLoadError::InvalidJsonFormat {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

    let items = value.as_array().ok_or_else(|| KeypairLoadError::NotAnArray {
        origin: origin.to_string(),
    })?;

    let mut bytes = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item.as_u64() {
            Some(v) if v <= u8::MAX as u64 => bytes.push(v as u8),
            _ => {
                return Err(KeypairLoadError::ByteOutOfRange {
                    origin: origin.to_string(),
                    index,
                    value: item.to_string(),
                })
            }
        }
    }

    Ok(bytes)
}

/// Read keypair bytes from a file path
pub fn read_keypair_bytes_from_path(path: &PathBuf) -> Result<Vec<u8>, KeypairLoadError> {
    let content = fs::read_to_string(path).map_err(|e| KeypairLoadError::FileReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    parse_keypair_json(&content, &path.display().to_string())
}

/// Read keypair bytes from the environment variable
fn read_keypair_bytes_from_env() -> Result<Option<(Vec<u8>, bool)>, KeypairLoadError> {
    let value = match env::var(ENV_KEYPAIR) {
        Ok(value) => value,
        Err(_) => return Ok(None),
    };

    if is_keypair_json_content(&value) {
        let bytes = parse_keypair_json(&value, &format!("{} (JSON)", ENV_KEYPAIR))?;
        Ok(Some((bytes, true)))
    } else {
        let path = PathBuf::from(&value);
        let bytes = read_keypair_bytes_from_path(&path)?;
        Ok(Some((bytes, false)))
    }
}

/// Load keypair bytes following the precedence chain:
/// 1. CLI argument (--keypair)
/// 2. Environment variable (SOLWALLET_KEYPAIR)
/// 3. Config file keypair_path
/// 4. Default path (~/.config/solwallet/id.json)
///
/// An explicitly provided source (CLI argument or env var) that fails to load
/// is a hard error and the chain stops there. The config and default paths
/// fall through when their file is absent; a file that exists but fails to
/// parse is a hard error from any source.
///
/// # Arguments
/// * `cli_path` - Optional path from CLI --keypair argument
/// * `config_path` - Optional path from config file
/// * `default_path` - Default path if no other source available
///
/// # Returns
/// * `Ok(KeypairLoadResult)` - Successfully loaded bytes with source
/// * `Err(KeypairLoadError)` - Failed to load keypair from any source
pub fn load_keypair_bytes(
    cli_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    default_path: PathBuf,
) -> Result<KeypairLoadResult, KeypairLoadError> {
    let mut attempted: Vec<String> = Vec::new();

    // 1. CLI argument (highest precedence, errors are terminal)
    if let Some(path) = cli_path {
        let bytes = read_keypair_bytes_from_path(&path)?;
        return Ok(loaded(bytes, KeypairSource::CliArgument(path)));
    }
    attempted.push("CLI --keypair: not provided".to_string());

    // 2. Environment variable (errors are terminal)
    match read_keypair_bytes_from_env()? {
        Some((bytes, is_json)) => {
            return Ok(loaded(bytes, KeypairSource::EnvVar { is_json }));
        }
        None => {
            attempted.push(format!("Env {}: not set", ENV_KEYPAIR));
        }
    }

    // 3. Config file path
    if let Some(path) = config_path {
        match read_keypair_bytes_from_path(&path) {
            Ok(bytes) => {
                return Ok(loaded(bytes, KeypairSource::ConfigFile(path)));
            }
            Err(e @ KeypairLoadError::FileReadError { .. }) => {
                attempted.push(format!("Config keypair_path ({}): {}", path.display(), e));
            }
            Err(e) => return Err(e),
        }
    }

    // 4. Default path
    match read_keypair_bytes_from_path(&default_path) {
        Ok(bytes) => {
            return Ok(loaded(bytes, KeypairSource::DefaultPath(default_path)));
        }
        Err(e @ KeypairLoadError::FileReadError { .. }) => {
            attempted.push(format!("Default path ({}): {}", default_path.display(), e));
        }
        Err(e) => return Err(e),
    }

    Err(KeypairLoadError::NoSourceAvailable { attempted })
}

fn loaded(bytes: Vec<u8>, source: KeypairSource) -> KeypairLoadResult {
    log::debug!("loaded {} keypair bytes from {}", bytes.len(), source);
    KeypairLoadResult { bytes, source }
}
