//! Save game persistence.
//!
//! A save is a versioned JSON snapshot of the player, the clock, the minimap
//! flag, the RNG state and every world object. The static map is not stored;
//! loading rebuilds the village and checks the snapshot against it.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::GameClock;
use crate::map::{Terrain, TileMap};
use crate::object::WorldObject;
use crate::rng::SimpleRng;
use crate::world::{Player, World};

/// Bumped whenever the save layout changes incompatibly.
pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no save in slot '{0}'")]
    NotFound(String),

    #[error("corrupted save: {0}")]
    Corrupt(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("save repository lock was poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, SaveError>;

/// One world object and the tile it sits on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectEntry {
    pub x: i32,
    pub y: i32,
    pub object: WorldObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub player: Player,
    pub clock: GameClock,
    pub show_minimap: bool,
    pub rng: SimpleRng,
    pub objects: Vec<ObjectEntry>,
}

impl SaveData {
    /// Snapshot the persistent parts of `world`.
    pub fn capture(world: &World) -> Self {
        let objects = world
            .objects()
            .iter()
            .map(|(&(x, y), object)| ObjectEntry {
                x,
                y,
                object: *object,
            })
            .collect();

        Self {
            version: SAVE_VERSION,
            player: world.player().clone(),
            clock: world.clock(),
            show_minimap: world.show_minimap(),
            rng: world.rng().clone(),
            objects,
        }
    }

    /// Rebuild a world on the village map, rejecting snapshots that do not
    /// fit it.
    pub fn restore(self) -> Result<World> {
        self.restore_on(TileMap::village())
    }

    pub fn restore_on(self, map: TileMap) -> Result<World> {
        if self.version != SAVE_VERSION {
            return Err(SaveError::Corrupt(format!(
                "unsupported version {} (expected {})",
                self.version, SAVE_VERSION
            )));
        }

        let (px, py) = self.player.pos;
        if !map.get(px, py).is_some_and(Terrain::is_walkable) {
            return Err(SaveError::Corrupt(format!(
                "player stands on a blocked tile ({px}, {py})"
            )));
        }
        if self.player.energy > self.player.max_energy {
            return Err(SaveError::Corrupt(format!(
                "energy {} exceeds maximum {}",
                self.player.energy, self.player.max_energy
            )));
        }
        if let Some(tool) = self.player.equipped {
            if !self.player.owns(tool) {
                return Err(SaveError::Corrupt(format!(
                    "equipped {} is not owned",
                    tool.name()
                )));
            }
        }

        let mut objects = std::collections::BTreeMap::new();
        for entry in self.objects {
            let expected = match entry.object {
                WorldObject::Tree { .. } | WorldObject::Stump { .. } => Terrain::Tree,
                WorldObject::FarmPlot | WorldObject::Crop(_) => Terrain::Grass,
            };
            if map.get(entry.x, entry.y) != Some(expected) {
                return Err(SaveError::Corrupt(format!(
                    "object at ({}, {}) does not match the terrain",
                    entry.x, entry.y
                )));
            }
            if objects.insert((entry.x, entry.y), entry.object).is_some() {
                return Err(SaveError::Corrupt(format!(
                    "two objects at ({}, {})",
                    entry.x, entry.y
                )));
            }
        }

        Ok(World::from_parts(
            map,
            self.player,
            self.clock,
            objects,
            self.show_minimap,
            self.rng,
        ))
    }
}

/// Storage for save slots.
pub trait SaveRepository {
    fn save(&self, slot: &str, data: &SaveData) -> Result<()>;

    fn load(&self, slot: &str) -> Result<SaveData>;

    fn exists(&self, slot: &str) -> bool {
        self.load(slot).is_ok()
    }
}

/// Saves as `<dir>/<slot>.json`.
pub struct FileSaveRepository {
    base_dir: PathBuf,
}

impl FileSaveRepository {
    /// Create the repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", slot))
    }
}

impl SaveRepository for FileSaveRepository {
    fn save(&self, slot: &str, data: &SaveData) -> Result<()> {
        let path = self.slot_path(slot);
        let temp_path = path.with_extension("json.tmp");

        let json =
            serde_json::to_string_pretty(data).map_err(|e| SaveError::Corrupt(e.to_string()))?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved game: {}", path.display());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<SaveData> {
        let path = self.slot_path(slot);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SaveError::NotFound(slot.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let data: SaveData =
            serde_json::from_str(&json).map_err(|e| SaveError::Corrupt(e.to_string()))?;
        tracing::info!(
            "Loaded save '{}' (day {}, {} objects)",
            slot,
            data.clock.day(),
            data.objects.len()
        );
        Ok(data)
    }

    fn exists(&self, slot: &str) -> bool {
        self.slot_path(slot).is_file()
    }
}

/// In-memory slots, for tests and headless runs.
#[derive(Default)]
pub struct MemorySaveRepository {
    slots: Mutex<HashMap<String, SaveData>>,
}

impl MemorySaveRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveRepository for MemorySaveRepository {
    fn save(&self, slot: &str, data: &SaveData) -> Result<()> {
        let mut slots = self.slots.lock().map_err(|_| SaveError::LockPoisoned)?;
        slots.insert(slot.to_string(), data.clone());
        Ok(())
    }

    fn load(&self, slot: &str) -> Result<SaveData> {
        let slots = self.slots.lock().map_err(|_| SaveError::LockPoisoned)?;
        slots
            .get(slot)
            .cloned()
            .ok_or_else(|| SaveError::NotFound(slot.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Crop;
    use crate::types::{Direction, GameAction, ItemKind, Tool};

    fn played_world() -> World {
        let mut world = World::new(5);
        world.place_player((62, 8), Direction::Up);
        world.apply(GameAction::SelectTool(Tool::Axe));
        world.apply(GameAction::UseTool);
        world.place_object((50, 12), WorldObject::Crop(Crop::planted(360)));
        world.add_item(ItemKind::Seeds, 2);
        world.apply(GameAction::ToggleMinimap);
        world
    }

    #[test]
    fn capture_and_restore_preserve_the_world() {
        let world = played_world();
        let restored = SaveData::capture(&world).restore().unwrap();

        assert_eq!(restored.player(), world.player());
        assert_eq!(restored.clock(), world.clock());
        assert_eq!(restored.objects(), world.objects());
        assert!(!restored.show_minimap());
        assert_eq!(restored.status().message(), None);
    }

    #[test]
    fn file_repository_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path().join("saves")).unwrap();
        let data = SaveData::capture(&played_world());

        assert!(!repo.exists("slot1"));
        repo.save("slot1", &data).unwrap();
        assert!(repo.exists("slot1"));
        assert!(!dir.path().join("saves/slot1.json.tmp").exists());
        assert_eq!(repo.load("slot1").unwrap(), data);
    }

    #[test]
    fn missing_slot_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        assert!(matches!(repo.load("nope"), Err(SaveError::NotFound(slot)) if slot == "nope"));
    }

    #[test]
    fn garbage_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSaveRepository::new(dir.path()).unwrap();
        fs::write(dir.path().join("bad.json"), "{ not json").unwrap();
        assert!(matches!(repo.load("bad"), Err(SaveError::Corrupt(_))));
    }

    #[test]
    fn restore_rejects_inconsistent_snapshots() {
        let mut data = SaveData::capture(&World::new(1));
        data.player.pos = (0, 0);
        assert!(matches!(data.restore(), Err(SaveError::Corrupt(_))));

        let mut data = SaveData::capture(&World::new(1));
        data.objects.push(ObjectEntry {
            x: 50,
            y: 10,
            object: WorldObject::tree(),
        });
        assert!(matches!(data.restore(), Err(SaveError::Corrupt(_))));

        let mut data = SaveData::capture(&World::new(1));
        data.version = SAVE_VERSION + 1;
        assert!(matches!(data.restore(), Err(SaveError::Corrupt(_))));
    }

    #[test]
    fn memory_repository() {
        let repo = MemorySaveRepository::new();
        assert!(!repo.exists("a"));
        let data = SaveData::capture(&World::new(3));
        repo.save("a", &data).unwrap();
        assert_eq!(repo.load("a").unwrap(), data);
    }
}
