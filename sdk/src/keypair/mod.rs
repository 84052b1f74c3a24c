//! Keypair loading module with support for multiple input sources.
//!
//! This module provides flexible keypair loading with the following precedence:
//! 1. CLI argument (`--keypair /path/to/key.json`)
//! 2. Environment variable (`SOLWALLET_KEYPAIR` - can be JSON or file path)
//! 3. Config file `keypair_path`
//! 4. Default path (`~/.config/solwallet/id.json`)
//!
//! The loader returns the raw byte values of the keypair file rather than a
//! parsed signing key: every element of the JSON array is validated to be an
//! integer in `0..=255`, but no length or curve check is applied. Commands
//! that need a real signing key (such as `address`) reconstruct one from the
//! bytes themselves.
//!
//! An explicitly named source that exists but cannot be parsed is a hard
//! error; the loader only falls through to the next source when a source is
//! not provided, not set, or its file is absent.
//!
//! # Environment Variable
//!
//! The `SOLWALLET_KEYPAIR` environment variable can contain either:
//! - A file path: `export SOLWALLET_KEYPAIR=/path/to/key.json`
//! - Raw JSON: `export SOLWALLET_KEYPAIR='[1,2,3,...,64 bytes]'`
//!
//! The loader auto-detects which format is used.

mod error;
mod loader;
mod source;

pub use error::KeypairLoadError;
pub use loader::{
    is_keypair_json_content, load_keypair_bytes, parse_keypair_json, read_keypair_bytes_from_path,
    KeypairLoadResult, ENV_KEYPAIR,
};
pub use source::KeypairSource;
