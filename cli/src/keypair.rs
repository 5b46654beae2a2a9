use solana_sdk::signature::Keypair;
use std::fs;
use std::path::PathBuf;
use anyhow::{anyhow, bail, Result};

pub fn create_keypair(path: &PathBuf) -> Result<Keypair> {
    let keypair = Keypair::new();
    let bytes = keypair.to_bytes().to_vec();
    let json = serde_json::to_string(&bytes)
        .map_err(|e| anyhow!("Failed to serialize keypair to JSON: {}", e))?;
    fs::write(path, json)
        .map_err(|e| anyhow!("Failed to write keypair file {}: {}", path.display(), e))?;
    Ok(keypair)
}

pub fn load_keypair(path: &PathBuf) -> Result<Keypair> {
    let data = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read keypair file {}: {}", path.display(), e))?;
    let bytes: Vec<u8> = serde_json::from_str(&data)
        .map_err(|e| anyhow!("Failed to parse keypair JSON: {}", e))?;
    Keypair::from_bytes(&bytes)
        .map_err(|e| anyhow!("Failed to create keypair from bytes: {}", e))
}

/// Loads the payer keypair from a specified path or the default Solana
/// keypair location, creating one if none exists.
pub fn get_payer(keypair_path: Option<PathBuf>) -> Result<Keypair> {
    let path = keypair_path.unwrap_or_else(|| {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".config/solana/id.json")
    });

    match load_keypair(&path) {
        Ok(payer) => Ok(payer),
        Err(_) => create_keypair(&path),
    }
}

/// Default directory scanned for wallet keypairs when `run` is given no
/// paths.
pub fn default_wallet_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Could not find home directory")
        .join(".config/drip/wallets")
}

/// Expands keypair files and directories into an ordered wallet list.
/// Directory entries are sorted by filename so the round-robin order is the
/// same on every run. An empty result is a fatal configuration error.
pub fn load_wallets(paths: &[PathBuf]) -> Result<Vec<Keypair>> {
    let paths = if paths.is_empty() {
        vec![default_wallet_dir()]
    } else {
        paths.to_vec()
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for path in &paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)
                .map_err(|e| anyhow!("Failed to read wallet directory {}: {}", path.display(), e))?
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }

    if files.is_empty() {
        bail!(
            "No wallet keypairs found (checked {} path(s))",
            paths.len()
        );
    }

    files.iter().map(load_keypair).collect()
}
