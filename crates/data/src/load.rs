use crate::schema::TableRules;
use anyhow::{bail, Context};
use blackjoker_core::{
    AnteRule, BlindRule, EconomyRule, GameConfig, GameSnapshot, SNAPSHOT_VERSION,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

const RULES_FILE: &str = "rules.json";
const BLINDS_FILE: &str = "blinds.json";
const ANTES_FILE: &str = "antes.json";
const ECONOMY_FILE: &str = "economy.json";

/// Reads the balance tables from `dir`.
pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let rules: TableRules = load_json(dir.join(RULES_FILE))?;
    let blinds: Vec<BlindRule> = load_json(dir.join(BLINDS_FILE))?;
    let antes: Vec<AnteRule> = load_json(dir.join(ANTES_FILE))?;
    let economy: EconomyRule = load_json(dir.join(ECONOMY_FILE))?;
    if antes.is_empty() {
        bail!("{} has no antes", dir.join(ANTES_FILE).display());
    }
    Ok(rules.into_config(blinds, antes, economy))
}

/// Writes `config` as the four files `load_game_config` reads.
pub fn save_game_config(dir: &Path, config: &GameConfig) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    save_json(dir.join(RULES_FILE), &TableRules::from(config))?;
    save_json(dir.join(BLINDS_FILE), &config.blinds)?;
    save_json(dir.join(ANTES_FILE), &config.antes)?;
    save_json(dir.join(ECONOMY_FILE), &config.economy)?;
    Ok(())
}

pub fn save_snapshot(path: &Path, snapshot: &GameSnapshot) -> anyhow::Result<()> {
    save_json(path, snapshot)
}

pub fn load_snapshot(path: &Path) -> anyhow::Result<GameSnapshot> {
    let snapshot: GameSnapshot = load_json(path)?;
    if snapshot.version != SNAPSHOT_VERSION {
        bail!(
            "{}: snapshot version {} is not supported (expected {})",
            path.display(),
            snapshot.version,
            SNAPSHOT_VERSION
        );
    }
    Ok(snapshot)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

fn save_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> anyhow::Result<()> {
    let path = path.as_ref();
    let raw = serde_json::to_string_pretty(value)
        .with_context(|| format!("serialize {}", path.display()))?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
