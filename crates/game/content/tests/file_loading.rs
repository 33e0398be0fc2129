use std::fs;

use game_content::{ContentFactory, LevelLoader, MonsterCatalog};
use game_core::{CardinalDirection, GameEngine, PlayerCommand, Position, Tile};

fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn factory_reads_every_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let level = write(&dir, "arena.map", "#####\n#@.g#\n#####\n");
    let monsters = write(
        &dir,
        "monsters.ron",
        r#"[(name: "Goblin", glyph: 'g', hitpoints: 25, strength: 3, speed: 1.0)]"#,
    );
    let config = write(
        &dir,
        "config.toml",
        "event_log_capacity = 5\n[player]\nname = \"Tester\"\nglyph = \"@\"\nhitpoints = 50\nstrength = 10\nspeed = 1.0\n",
    );

    let mut state = ContentFactory::bundled()
        .with_level(&level)
        .with_monsters(&monsters)
        .with_config(&config)
        .build_state()
        .unwrap();

    assert_eq!(state.player.name, "Tester");
    assert_eq!(state.events.capacity(), 5);
    let goblin = state.monsters.get(Position::new(3, 1)).unwrap();
    assert_eq!(goblin.name, "Goblin");
    let goblin_id = goblin.id;

    // The goblin steps next to the player, who then attacks it.
    let report = GameEngine::new(&mut state)
        .tick(PlayerCommand::Move(CardinalDirection::Right))
        .unwrap();
    assert_eq!(state.monsters.position_of(goblin_id), Some(Position::new(2, 1)));
    assert_eq!(
        report.narration,
        vec![
            "Tester attacks Goblin for 10",
            "Goblin attacks Tester for 3",
        ]
    );
}

#[test]
fn missing_level_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.map");

    let error = ContentFactory::bundled()
        .with_level(&missing)
        .build_state()
        .unwrap_err();

    assert!(error.to_string().contains("nope.map"), "{error}");
}

#[test]
fn invalid_level_file_reports_file_and_cause() {
    let dir = tempfile::tempdir().unwrap();
    let level = write(&dir, "broken.map", "#@#\n#?#\n");

    let error = LevelLoader::load(&level, &MonsterCatalog::builtin()).unwrap_err();

    assert!(format!("{error:#}").contains("broken.map"));
    assert!(format!("{error:#}").contains("Invalid character"));
}

#[test]
fn loaded_level_keeps_door_tiles() {
    let dir = tempfile::tempdir().unwrap();
    let level = write(&dir, "doors.map", "@|/.\n");

    let layout = LevelLoader::load(&level, &MonsterCatalog::builtin()).unwrap();

    assert_eq!(layout.grid.tile(Position::new(1, 0)), Some(Tile::ClosedDoor));
    assert_eq!(layout.grid.tile(Position::new(2, 0)), Some(Tile::OpenDoor));
}
