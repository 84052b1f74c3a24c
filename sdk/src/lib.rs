pub mod config;
pub mod encode;
pub mod keypair;

pub use crate::config::{
    create_new_keypair, default_keypair_path, read_solwallet_config, write_solwallet_config,
    ClientConfig, ENV_CONFIG_FILE,
};
pub use crate::encode::{decode_keypair_string, encode_keypair_bytes};
pub use crate::keypair::{
    is_keypair_json_content, load_keypair_bytes, parse_keypair_json, read_keypair_bytes_from_path,
    KeypairLoadError, KeypairLoadResult, KeypairSource, ENV_KEYPAIR,
};
