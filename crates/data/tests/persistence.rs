use blackjoker_core::{EventBus, Game, GameConfig, HandTag, JokerRegistry, SNAPSHOT_VERSION};
use blackjoker_data::{load_game_config, load_snapshot, save_game_config, save_snapshot};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

fn assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

fn unique_temp_path(label: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "blackjoker_data_{}_{}_{}",
        label,
        std::process::id(),
        nanos
    ))
}

#[test]
fn bundled_assets_match_default_config() {
    let config = load_game_config(&assets_root()).expect("load config");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn config_round_trips_through_directory() {
    let dir = unique_temp_path("config");
    let mut config = GameConfig::default();
    config.hand_size = 7;
    config.antes.truncate(3);
    save_game_config(&dir, &config).expect("save");
    let loaded = load_game_config(&dir).expect("load");
    assert_eq!(loaded, config);
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn missing_config_names_the_file() {
    let dir = unique_temp_path("missing");
    let err = load_game_config(&dir).unwrap_err();
    assert!(format!("{err:#}").contains("rules.json"));
}

#[test]
fn snapshot_survives_save_and_load() {
    let path = unique_temp_path("snapshot").with_extension("json");
    let config = load_game_config(&assets_root()).expect("load config");
    let registry = Arc::new(JokerRegistry::with_builtin());
    let mut game = Game::new(config.clone(), registry.clone(), 99).expect("game");
    let mut ui = EventBus::default();
    game.add_joker("collector", None, &mut ui).expect("joker");
    game.start_blind(&mut ui).expect("blind");
    game.select_card(HandTag::Main, 0).expect("select");
    game.discard_cards(&mut ui).expect("discard");

    save_snapshot(&path, &game.snapshot()).expect("save");
    let snapshot = load_snapshot(&path).expect("load");
    assert_eq!(snapshot, game.snapshot());

    let restored = Game::restore(config, registry, 99, snapshot).expect("restore");
    assert_eq!(restored.main.len(), 4);
    assert_eq!(restored.state.discards_used, 1);
    let _ = std::fs::remove_file(path);
}

#[test]
fn snapshot_with_unknown_version_is_refused() {
    let path = unique_temp_path("old_snapshot").with_extension("json");
    let game = Game::with_builtin_jokers(GameConfig::default(), 1).expect("game");
    let mut snapshot = game.snapshot();
    snapshot.version = SNAPSHOT_VERSION + 1;
    save_snapshot(&path, &snapshot).expect("save");
    let err = load_snapshot(&path).unwrap_err();
    assert!(err.to_string().contains("not supported"));
    let _ = std::fs::remove_file(path);
}
