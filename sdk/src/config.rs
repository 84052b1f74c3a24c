use serde::{Deserialize, Serialize};
use solana_sdk::signature::Keypair;
use std::{
    env, fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Environment variable overriding the config file location.
pub const ENV_CONFIG_FILE: &str = "SOLWALLET_CONFIG_FILE";

/// The default path to the CLI configuration file.
///
/// > `~/.config/solwallet/cli/config.yml`
///
/// It will only be `None` if it is unable to identify the user's home
/// directory, which should not happen under typical OS environments.
fn get_cfg_filename() -> Option<PathBuf> {
    match env::var_os(ENV_CONFIG_FILE) {
        Some(path) => Some(PathBuf::from(path)),
        None => directories_next::UserDirs::new().map(|dirs| {
            let mut buf = dirs.home_dir().to_path_buf();
            buf.extend([".config", "solwallet", "cli", "config.yml"]);
            buf
        }),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_keypair_path")]
    pub keypair_path: PathBuf,
}

/// Default location of the keypair file (`~/.config/solwallet/id.json`).
pub fn default_keypair_path() -> PathBuf {
    let mut keypair_path = dirs_next::home_dir().unwrap_or_default();
    keypair_path.extend([".config", "solwallet", "id.json"]);
    keypair_path
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            keypair_path: default_keypair_path(),
        }
    }
}

pub fn read_solwallet_config() -> eyre::Result<(PathBuf, ClientConfig)> {
    match get_cfg_filename() {
        None => eyre::bail!("Unable to get_cfg_filename"),
        Some(filename) => match fs::read_to_string(&filename) {
            Err(_) => Ok((filename, ClientConfig::default())),
            Ok(config_content) => {
                let config: ClientConfig = serde_yaml::from_str(&config_content)?;
                Ok((filename, config))
            }
        },
    }
}

pub fn write_solwallet_config(config: &ClientConfig) -> eyre::Result<()> {
    match get_cfg_filename() {
        None => eyre::bail!("Unable to get_cfg_filename"),
        Some(filename) => {
            if let Some(parent) = filename.parent() {
                fs::create_dir_all(parent)?
            }

            let yaml_content = serde_yaml::to_string(config)?;
            fs::write(&filename, yaml_content)?;
            Ok(())
        }
    }
}

/// Generate a new keypair and write it to `outfile`, or to the configured
/// keypair path when no outfile is given. The file is a JSON array of the
/// keypair's 64 byte values, the same format the loader reads back.
pub fn create_new_keypair(force: bool, outfile: Option<PathBuf>) -> eyre::Result<Keypair> {
    let file_path = match outfile {
        Some(path) => path,
        None => {
            let (_, client_cfg) = read_solwallet_config()?;
            client_cfg.keypair_path
        }
    };

    let dir_path = Path::new(&file_path)
        .parent()
        .ok_or_else(|| eyre::eyre!("Invalid keypair path: no parent directory"))?
        .to_str()
        .ok_or_else(|| eyre::eyre!("Invalid keypair path: contains invalid UTF-8"))?
        .to_string();

    let key = Keypair::new();

    if !Path::new(&dir_path).exists() {
        fs::create_dir_all(&dir_path)?;
    }

    if !force && Path::new(&file_path).exists() {
        eyre::bail!(
            "The file {} already exists (use solwallet keygen -f)",
            file_path.display()
        );
    }

    let data = key.to_bytes().to_vec();
    let json = serde_json::to_string(&data)?;
    let mut file = fs::File::create(&file_path)?;
    file.write_all(json.as_bytes())?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use solana_sdk::signature::Signer;
    use std::{env, fs};
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_create_new_keypair_creates_keypair_and_writes_file() {
        let tmp = TempDir::new().unwrap();
        let keypair_path = tmp.path().join("id.json");
        let config_path = tmp.path().join("config.yml");

        // Needs to be in a serial test.
        env::set_var(ENV_CONFIG_FILE, &config_path);

        let cfg = ClientConfig {
            keypair_path: keypair_path.clone(),
        };

        write_solwallet_config(&cfg).unwrap();

        let key = create_new_keypair(false, None).unwrap();
        assert!(keypair_path.exists());

        let contents = fs::read_to_string(&keypair_path).unwrap();
        let bytes: Vec<u8> = serde_json::from_str(&contents).unwrap();
        let deserialized = Keypair::from_bytes(&bytes).unwrap();
        assert_eq!(deserialized.pubkey(), key.pubkey());

        env::remove_var(ENV_CONFIG_FILE);
    }

    #[test]
    #[serial]
    fn test_create_new_keypair_fails_if_exists_without_force() {
        let tmp = TempDir::new().unwrap();
        let keypair_path = tmp.path().join("id.json");
        let config_path = tmp.path().join("config.yml");

        // Needs to be in a serial test.
        env::set_var(ENV_CONFIG_FILE, &config_path);

        let cfg = ClientConfig {
            keypair_path: keypair_path.clone(),
        };

        write_solwallet_config(&cfg).unwrap();
        let _ = create_new_keypair(false, None).unwrap();

        let err = create_new_keypair(false, None).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        env::remove_var(ENV_CONFIG_FILE);
    }

    #[test]
    #[serial]
    fn test_create_new_keypair_overwrites_with_force() {
        let tmp = TempDir::new().unwrap();
        let keypair_path = tmp.path().join("id.json");
        let config_path = tmp.path().join("config.yml");

        // Needs to be in a serial test.
        env::set_var(ENV_CONFIG_FILE, &config_path);

        let cfg = ClientConfig {
            keypair_path: keypair_path.clone(),
        };

        write_solwallet_config(&cfg).unwrap();
        let first = create_new_keypair(false, None).unwrap();
        let second = create_new_keypair(true, None).unwrap();
        assert_ne!(first.pubkey(), second.pubkey());

        env::remove_var(ENV_CONFIG_FILE);
    }

    #[test]
    fn test_create_new_keypair_with_explicit_outfile() {
        let tmp = TempDir::new().unwrap();
        let outfile_path = tmp.path().join("my-keypair.json");

        let key = create_new_keypair(false, Some(outfile_path.clone())).unwrap();
        assert!(outfile_path.exists());

        let contents = fs::read_to_string(&outfile_path).unwrap();
        let bytes: Vec<u8> = serde_json::from_str(&contents).unwrap();
        let restored = Keypair::from_bytes(&bytes).unwrap();
        assert_eq!(key.pubkey(), restored.pubkey());
    }

    #[test]
    fn test_create_new_keypair_outfile_exists_fails_without_force() {
        let tmp = TempDir::new().unwrap();
        let outfile_path = tmp.path().join("my-keypair.json");

        let first = create_new_keypair(false, Some(outfile_path.clone())).unwrap();
        assert!(outfile_path.exists());

        let err = create_new_keypair(false, Some(outfile_path.clone())).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        let second = create_new_keypair(true, Some(outfile_path.clone())).unwrap();
        assert_ne!(first.pubkey(), second.pubkey());
    }

    #[test]
    #[serial]
    fn test_read_config_missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yml");

        temp_env::with_var(ENV_CONFIG_FILE, Some(config_path.to_str().unwrap()), || {
            let (filename, config) = read_solwallet_config().unwrap();
            assert_eq!(filename, config_path);
            assert_eq!(config.keypair_path, default_keypair_path());
        });
    }

    #[test]
    #[serial]
    fn test_write_then_read_config_round_trip() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("nested").join("config.yml");
        let keypair_path = tmp.path().join("some-key.json");

        temp_env::with_var(ENV_CONFIG_FILE, Some(config_path.to_str().unwrap()), || {
            let cfg = ClientConfig {
                keypair_path: keypair_path.clone(),
            };
            write_solwallet_config(&cfg).unwrap();

            let (_, config) = read_solwallet_config().unwrap();
            assert_eq!(config.keypair_path, keypair_path);
        });
    }
}
