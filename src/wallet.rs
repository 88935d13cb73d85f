//! Keypair custody.
//!
//! The gateway signs on behalf of its clients: the payer comes from a
//! standard solana-keygen JSON file, and each registered client id gets a
//! keypair created on first use under the configured wallet directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use solana_sdk::signature::Keypair;

/// Read a solana-keygen JSON keypair file.
pub fn read_keypair(path: &Path) -> Result<Keypair> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading keypair file {}", path.display()))?;
    let bytes: Vec<u8> = serde_json::from_str(&data)
        .with_context(|| format!("parsing keypair file {}", path.display()))?;
    let kp = Keypair::from_bytes(&bytes)
        .map_err(|e| anyhow::anyhow!("invalid keypair in {}: {e}", path.display()))?;
    Ok(kp)
}

/// Load the keypair for a client id, creating and persisting a fresh one the
/// first time the id registers.
pub fn load_or_create(dir: &Path, client_id: &str) -> Result<Keypair> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating wallet dir {}", dir.display()))?;
    let path = dir.join(format!("{client_id}.json"));

    if path.exists() {
        return read_keypair(&path);
    }

    let kp = Keypair::new();
    let bytes = kp.to_bytes().to_vec();
    fs::write(&path, serde_json::to_string(&bytes)?)
        .with_context(|| format!("writing keypair file {}", path.display()))?;
    Ok(kp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::Signer;

    #[test]
    fn load_or_create_is_idempotent() {
        let dir = std::env::temp_dir().join(format!("wager-bridge-test-{}", std::process::id()));
        let first = load_or_create(&dir, "alice").unwrap();
        let second = load_or_create(&dir, "alice").unwrap();
        assert_eq!(first.pubkey(), second.pubkey());

        let other = load_or_create(&dir, "bob").unwrap();
        assert_ne!(first.pubkey(), other.pubkey());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn read_keypair_roundtrips_keygen_format() {
        let dir = std::env::temp_dir().join(format!("wager-bridge-kp-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("payer.json");

        let kp = Keypair::new();
        fs::write(&path, serde_json::to_string(&kp.to_bytes().to_vec()).unwrap()).unwrap();
        let loaded = read_keypair(&path).unwrap();
        assert_eq!(loaded.pubkey(), kp.pubkey());

        fs::remove_dir_all(&dir).ok();
    }
}
