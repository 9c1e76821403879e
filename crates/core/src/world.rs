//! World state module - the player, the village and everything on it
//!
//! `World` owns all mutable game data and applies [`GameAction`]s to it. Every
//! action reports an [`Outcome`]; refused actions leave the world unchanged
//! apart from a status message explaining why.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::clock::GameClock;
use crate::map::{Terrain, TileMap};
use crate::object::{Crop, WorldObject};
use crate::rng::SimpleRng;
use crate::status::StatusLine;
use crate::types::*;

/// Integer tile coordinate `(x, y)`.
pub type TilePos = (i32, i32);

/// Result of applying one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The world changed.
    Applied,
    /// The action was refused; the status line says why.
    Rejected,
    /// Not a world action (pause, quit); the caller handles it.
    Ignored,
}

/// A key hint shown on the status line, e.g. `F: Harvest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub key: &'static str,
    pub label: &'static str,
}

impl Hint {
    const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

pub type Hints = ArrayVec<Hint, 6>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: TilePos,
    pub facing: Direction,
    pub energy: u32,
    pub max_energy: u32,
    pub money: u32,
    pub inventory: BTreeMap<ItemKind, u32>,
    pub owned_tools: BTreeSet<Tool>,
    pub equipped: Option<Tool>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: START_POS,
            facing: Direction::Down,
            energy: MAX_ENERGY,
            max_energy: MAX_ENERGY,
            money: START_MONEY,
            inventory: ItemKind::ALL.iter().map(|k| (*k, 0)).collect(),
            // The seed bag is unlocked by buying seeds at the shop. Nothing
            // sells the watering can, so it is owned from the start.
            owned_tools: [Tool::Axe, Tool::Hoe, Tool::WateringCan].into_iter().collect(),
            equipped: None,
        }
    }
}

impl Player {
    pub fn count(&self, item: ItemKind) -> u32 {
        self.inventory.get(&item).copied().unwrap_or(0)
    }

    pub fn owns(&self, tool: Tool) -> bool {
        self.owned_tools.contains(&tool)
    }

    /// The tile directly in front of the player.
    pub fn facing_tile(&self) -> TilePos {
        let (dx, dy) = self.facing.delta();
        (self.pos.0 + dx, self.pos.1 + dy)
    }
}

/// Complete mutable game state.
#[derive(Debug, Clone)]
pub struct World {
    map: TileMap,
    player: Player,
    clock: GameClock,
    objects: BTreeMap<TilePos, WorldObject>,
    status: StatusLine,
    show_minimap: bool,
    rng: SimpleRng,
}

impl World {
    /// A fresh game in the home village.
    pub fn new(seed: u32) -> Self {
        Self::with_map(TileMap::village(), seed)
    }

    pub fn with_map(map: TileMap, seed: u32) -> Self {
        Self {
            map,
            player: Player::default(),
            clock: GameClock::new(),
            objects: BTreeMap::new(),
            status: StatusLine::new(),
            show_minimap: true,
            rng: SimpleRng::new(seed),
        }
    }

    pub(crate) fn from_parts(
        map: TileMap,
        player: Player,
        clock: GameClock,
        objects: BTreeMap<TilePos, WorldObject>,
        show_minimap: bool,
        rng: SimpleRng,
    ) -> Self {
        Self {
            map,
            player,
            clock,
            objects,
            status: StatusLine::new(),
            show_minimap,
            rng,
        }
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn clock(&self) -> GameClock {
        self.clock
    }

    pub fn objects(&self) -> &BTreeMap<TilePos, WorldObject> {
        &self.objects
    }

    pub fn object_at(&self, pos: TilePos) -> Option<&WorldObject> {
        self.objects.get(&pos)
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn show_minimap(&self) -> bool {
        self.show_minimap
    }

    pub(crate) fn rng(&self) -> &SimpleRng {
        &self.rng
    }

    pub fn set_status(&mut self, text: &str, tone: Tone, ttl: u32) {
        self.status.set(text, tone, ttl);
    }

    /// Move the player to a walkable tile. Used for scenario setup and by
    /// loaders; gameplay movement goes through [`GameAction::Move`].
    pub fn place_player(&mut self, pos: TilePos, facing: Direction) -> Outcome {
        if !self.is_walkable(pos.0, pos.1) {
            return Outcome::Rejected;
        }
        self.player.pos = pos;
        self.player.facing = facing;
        Outcome::Applied
    }

    /// Put an object on a tile, replacing whatever was there.
    pub fn place_object(&mut self, pos: TilePos, object: WorldObject) {
        self.objects.insert(pos, object);
    }

    pub fn add_item(&mut self, item: ItemKind, amount: u32) {
        *self.player.inventory.entry(item).or_insert(0) += amount;
        if item == ItemKind::Seeds && amount > 0 {
            self.player.owned_tools.insert(Tool::Seeds);
        }
    }

    /// Take `amount` of `item`; fails without changing anything if short.
    pub fn remove_item(&mut self, item: ItemKind, amount: u32) -> bool {
        match self.player.inventory.get_mut(&item) {
            Some(count) if *count >= amount => {
                *count -= amount;
                true
            }
            _ => false,
        }
    }

    pub fn set_energy(&mut self, energy: u32) {
        self.player.energy = energy.min(self.player.max_energy);
    }

    /// Spend energy, or complain and change nothing.
    pub fn use_energy(&mut self, amount: u32) -> bool {
        if self.player.energy >= amount {
            self.player.energy -= amount;
            true
        } else {
            self.status.set("Too tired!", Tone::Error, STATUS_TTL_FRAMES);
            false
        }
    }

    /// Whether the player may stand on `(x, y)`.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        let Some(terrain) = self.map.get(x, y) else {
            return false;
        };
        if !terrain.is_walkable() {
            return false;
        }
        match self.objects.get(&(x, y)) {
            Some(obj) => obj.is_walkable(),
            None => true,
        }
    }

    /// Per-frame update: expire the status message and advance object timers.
    pub fn tick_frame(&mut self) {
        self.status.tick();
        self.update_objects();
    }

    fn update_objects(&mut self) {
        let now = self.clock.total_minutes();
        for obj in self.objects.values_mut() {
            obj.update(now);
        }
    }

    pub fn apply(&mut self, action: GameAction) -> Outcome {
        match action {
            GameAction::Move(dir) => self.move_player(dir),
            GameAction::SelectTool(tool) => self.select_tool(tool),
            GameAction::Unequip => {
                self.player.equipped = None;
                self.status.set("Tools unequipped", Tone::Info, STATUS_TTL_FRAMES);
                Outcome::Applied
            }
            GameAction::UseTool => self.use_tool(),
            GameAction::Interact => self.interact(),
            GameAction::ToggleMinimap => {
                self.show_minimap = !self.show_minimap;
                let text = if self.show_minimap {
                    "Minimap shown"
                } else {
                    "Minimap hidden"
                };
                self.status.set(text, Tone::Success, STATUS_TTL_FRAMES);
                Outcome::Applied
            }
            GameAction::Pause | GameAction::Quit => Outcome::Ignored,
        }
    }

    fn move_player(&mut self, dir: Direction) -> Outcome {
        self.player.facing = dir;
        let (dx, dy) = dir.delta();
        let (x, y) = (self.player.pos.0 + dx, self.player.pos.1 + dy);

        if !self.is_walkable(x, y) {
            self.report_collision(x, y);
            return Outcome::Rejected;
        }

        self.player.pos = (x, y);
        // An exhausted player can still walk home, but the clock only runs on
        // paid steps.
        if self.use_energy(MOVE_ENERGY_COST) {
            self.clock.advance(1);
        }
        Outcome::Applied
    }

    fn report_collision(&mut self, x: i32, y: i32) {
        let (text, tone) = match self.map.get(x, y) {
            None => ("Can't leave the map!", Tone::Error),
            Some(Terrain::HouseWall) => ("Press F to sleep in the house", Tone::Warning),
            Some(Terrain::ShopWall) => ("Press F to trade at the shop", Tone::Warning),
            Some(Terrain::Tree) => match self.objects.get(&(x, y)) {
                Some(WorldObject::Stump { .. }) => ("The stump is regrowing", Tone::Warning),
                _ => ("Use axe to cut tree", Tone::Warning),
            },
            Some(Terrain::Water) => ("Can't swim in water!", Tone::Water),
            Some(_) => ("Can't walk there!", Tone::Error),
        };
        self.status.set(text, tone, STATUS_TTL_FRAMES);
    }

    fn select_tool(&mut self, tool: Tool) -> Outcome {
        let mut text = String::new();
        if !self.player.owns(tool) {
            let _ = write!(text, "You don't have a {} yet!", tool.name());
            self.status.set(&text, Tone::Error, STATUS_TTL_FRAMES);
            return Outcome::Rejected;
        }
        self.player.equipped = Some(tool);
        let _ = write!(text, "{} equipped!", tool.label());
        self.status.set(&text, Tone::Success, STATUS_TTL_FRAMES);
        Outcome::Applied
    }

    fn use_tool(&mut self) -> Outcome {
        let Some(tool) = self.player.equipped else {
            self.status
                .set("Select a tool first! (1-4)", Tone::Warning, STATUS_TTL_FRAMES);
            return Outcome::Rejected;
        };

        let pos = self.player.facing_tile();
        if let Err((text, tone)) = self.check_tool_target(tool, pos) {
            self.status.set(&text, tone, STATUS_TTL_FRAMES);
            return Outcome::Rejected;
        }
        if !self.use_energy(TOOL_ENERGY_COST) {
            return Outcome::Rejected;
        }

        match tool {
            Tool::Axe => self.chop(pos),
            Tool::Hoe => {
                self.objects.insert(pos, WorldObject::FarmPlot);
                self.status
                    .set("Created farm plot!", Tone::Success, STATUS_TTL_FRAMES);
                tracing::debug!(x = pos.0, y = pos.1, "tilled farm plot");
            }
            Tool::Seeds => {
                self.remove_item(ItemKind::Seeds, 1);
                let now = self.clock.total_minutes();
                self.objects.insert(pos, WorldObject::Crop(Crop::planted(now)));
                self.status.set("Planted seeds!", Tone::Success, STATUS_TTL_FRAMES);
                tracing::debug!(x = pos.0, y = pos.1, "planted seeds");
            }
            Tool::WateringCan => {
                let now = self.clock.total_minutes();
                if let Some(WorldObject::Crop(crop)) = self.objects.get_mut(&pos) {
                    crop.water(now);
                }
                self.status.set("Watered crops!", Tone::Water, STATUS_TTL_FRAMES);
            }
        }
        Outcome::Applied
    }

    /// Validate a tool use without touching state.
    fn check_tool_target(&self, tool: Tool, pos: TilePos) -> Result<(), (String, Tone)> {
        let invalid = || ("Can't use tool here!".to_string(), Tone::Error);
        let terrain = self.map.get(pos.0, pos.1).ok_or_else(invalid)?;
        let object = self.objects.get(&pos);

        match (tool, object) {
            (Tool::Axe, Some(WorldObject::Tree { .. })) => Ok(()),
            (Tool::Axe, None) if terrain == Terrain::Tree => Ok(()),
            (Tool::Axe, Some(WorldObject::Stump { regrow_at })) => {
                let left = regrow_at.saturating_sub(self.clock.total_minutes());
                Err((format!("Regrows in {}m", left), Tone::Warning))
            }
            (Tool::Hoe, None) if terrain == Terrain::Grass => Ok(()),
            (Tool::Seeds, Some(WorldObject::FarmPlot)) => {
                if self.player.count(ItemKind::Seeds) > 0 {
                    Ok(())
                } else {
                    Err(("No seeds!".to_string(), Tone::Error))
                }
            }
            (Tool::WateringCan, Some(WorldObject::Crop(crop))) => {
                if crop.is_ready() {
                    Err(("Ready to harvest! Press F".to_string(), Tone::Warning))
                } else if crop.watered {
                    Err(("Already watered!".to_string(), Tone::Warning))
                } else {
                    Ok(())
                }
            }
            _ => Err(invalid()),
        }
    }

    fn chop(&mut self, pos: TilePos) {
        let now = self.clock.total_minutes();
        let health = match self.objects.entry(pos).or_insert_with(WorldObject::tree) {
            WorldObject::Tree { health } => {
                *health = health.saturating_sub(AXE_DAMAGE);
                *health
            }
            _ => return,
        };

        let mut text = String::new();
        if health == 0 {
            let wood = self.rng.roll(WOOD_YIELD);
            self.add_item(ItemKind::Wood, wood);
            self.objects.insert(
                pos,
                WorldObject::Stump {
                    regrow_at: now + TREE_REGROW_MINUTES,
                },
            );
            let _ = write!(text, "Got {} wood! Tree will regrow in 1 hour.", wood);
            self.status.set(&text, Tone::Success, 45);
            tracing::debug!(x = pos.0, y = pos.1, wood, "felled tree");
        } else {
            let _ = write!(text, "Tree health: {}%", health);
            self.status.set(&text, Tone::Warning, STATUS_TTL_FRAMES);
        }
    }

    fn interact(&mut self) -> Outcome {
        let pos = self.player.facing_tile();
        match self.map.get(pos.0, pos.1) {
            Some(Terrain::HouseWall | Terrain::HouseDoor) => return self.sleep(),
            Some(Terrain::ShopWall) => return self.trade(),
            _ => {}
        }

        match self.objects.get(&pos) {
            Some(WorldObject::Crop(crop)) if crop.is_ready() => self.harvest(pos),
            Some(WorldObject::Crop(_)) => {
                self.status
                    .set("The crops are still growing", Tone::Info, STATUS_TTL_FRAMES);
                Outcome::Rejected
            }
            _ => {
                self.status
                    .set("Nothing to interact with here", Tone::Info, STATUS_TTL_FRAMES);
                Outcome::Rejected
            }
        }
    }

    fn sleep(&mut self) -> Outcome {
        self.player.energy = self.player.max_energy;
        self.clock.next_morning();
        // Crops grow overnight on the water they got, then dry out.
        self.update_objects();
        for obj in self.objects.values_mut() {
            if let WorldObject::Crop(crop) = obj {
                crop.watered = false;
            }
        }
        self.status.set(
            "Got a good night's sleep! Energy restored.",
            Tone::Success,
            STATUS_LONG_TTL_FRAMES,
        );
        tracing::info!(day = self.clock.day(), "slept until morning");
        Outcome::Applied
    }

    fn trade(&mut self) -> Outcome {
        let mut earned = 0;
        let mut text = String::from("Sold");
        for item in ItemKind::ALL.into_iter().filter(|i| i.is_sellable()) {
            let count = self.player.count(item);
            if count == 0 {
                continue;
            }
            if earned > 0 {
                text.push(',');
            }
            earned += count * item.base_price();
            let _ = write!(text, " {} {}", count, item.name());
            self.player.inventory.insert(item, 0);
        }

        if earned > 0 {
            self.player.money += earned;
            let _ = write!(text, " for ${}!", earned);
            self.status.set(&text, Tone::Success, STATUS_LONG_TTL_FRAMES);
            tracing::debug!(earned, "sold goods");
            return Outcome::Applied;
        }

        let cost = SEED_PACK_SIZE * ItemKind::Seeds.base_price();
        if self.player.money < cost {
            self.status
                .set("Nothing to sell and no money for seeds!", Tone::Warning, STATUS_TTL_FRAMES);
            return Outcome::Rejected;
        }
        self.player.money -= cost;
        self.add_item(ItemKind::Seeds, SEED_PACK_SIZE);
        text.clear();
        let _ = write!(text, "Bought {} seeds for ${}!", SEED_PACK_SIZE, cost);
        self.status.set(&text, Tone::Success, STATUS_LONG_TTL_FRAMES);
        Outcome::Applied
    }

    fn harvest(&mut self, pos: TilePos) -> Outcome {
        let wheat = self.rng.roll(HARVEST_YIELD);
        self.add_item(ItemKind::Wheat, wheat);
        self.objects.insert(pos, WorldObject::FarmPlot);
        let mut text = String::new();
        let _ = write!(text, "Harvested {} wheat!", wheat);
        self.status.set(&text, Tone::Success, STATUS_TTL_FRAMES);
        Outcome::Applied
    }

    /// Key hints for the status line, based on the equipped tool and what is
    /// in front of the player.
    pub fn context_hints(&self) -> Hints {
        let mut hints = Hints::new();
        if let Some(tool) = self.player.equipped {
            hints.push(Hint::new("SPACE", use_label(tool)));
        }

        let (x, y) = self.player.facing_tile();
        let equipped = self.player.equipped;
        let context = match self.objects.get(&(x, y)) {
            Some(object) if object.can_interact() => match object {
                WorldObject::Crop(_) => Some(Hint::new("F", "Harvest")),
                WorldObject::Tree { .. } if equipped != Some(Tool::Axe) => {
                    Some(Hint::new("1", "Equip axe"))
                }
                WorldObject::FarmPlot if equipped != Some(Tool::Seeds) => {
                    Some(Hint::new("3", "Plant seeds"))
                }
                _ => None,
            },
            Some(_) => None,
            None => match self.map.get(x, y) {
                Some(Terrain::Tree) if equipped != Some(Tool::Axe) => {
                    Some(Hint::new("1", "Equip axe"))
                }
                Some(Terrain::HouseWall | Terrain::HouseDoor) => Some(Hint::new("F", "Sleep")),
                Some(Terrain::ShopWall) => Some(Hint::new("F", "Trade")),
                _ => None,
            },
        };
        if let Some(hint) = context {
            hints.push(hint);
        }

        hints.push(Hint::new("M", "Map"));
        hints.push(Hint::new("Q", "Quit"));
        hints
    }
}

fn use_label(tool: Tool) -> &'static str {
    match tool {
        Tool::Axe => "Use axe",
        Tool::Hoe => "Use hoe",
        Tool::Seeds => "Use seeds",
        Tool::WateringCan => "Use watering can",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::CropStage;

    // (62, 7) is a tree with open grass below it.
    fn world_facing_tree() -> World {
        let mut world = World::new(1);
        assert_eq!(world.place_player((62, 8), Direction::Up), Outcome::Applied);
        world
    }

    #[test]
    fn watering_can_is_owned_from_the_start() {
        let mut world = World::new(1);
        assert!(world.player().owns(Tool::WateringCan));
        assert_eq!(
            world.apply(GameAction::SelectTool(Tool::WateringCan)),
            Outcome::Applied
        );
        assert_eq!(world.player().equipped, Some(Tool::WateringCan));
    }

    #[test]
    fn new_world_defaults() {
        let world = World::new(1);
        let p = world.player();
        assert_eq!(p.pos, START_POS);
        assert_eq!(p.energy, MAX_ENERGY);
        assert_eq!(p.money, START_MONEY);
        assert_eq!(p.equipped, None);
        assert!(p.owns(Tool::Axe));
        assert!(p.owns(Tool::Hoe));
        assert!(!p.owns(Tool::Seeds));
        assert!(world.show_minimap());
        assert!(world.objects().is_empty());
    }

    #[test]
    fn walking_costs_energy_and_time() {
        let mut world = World::new(1);
        let minutes = world.clock().total_minutes();

        assert_eq!(world.apply(GameAction::Move(Direction::Right)), Outcome::Applied);
        assert_eq!(world.player().pos, (51, 10));
        assert_eq!(world.player().facing, Direction::Right);
        assert_eq!(world.player().energy, MAX_ENERGY - 1);
        assert_eq!(world.clock().total_minutes(), minutes + 1);
    }

    #[test]
    fn exhausted_player_still_walks_but_time_stands_still() {
        let mut world = World::new(1);
        world.set_energy(0);
        let minutes = world.clock().total_minutes();

        assert_eq!(world.apply(GameAction::Move(Direction::Left)), Outcome::Applied);
        assert_eq!(world.player().pos, (49, 10));
        assert_eq!(world.clock().total_minutes(), minutes);
        assert_eq!(world.status().message(), Some("Too tired!"));
    }

    #[test]
    fn blocked_move_turns_but_stays_put() {
        let mut world = world_facing_tree();
        world.place_player((62, 8), Direction::Down);

        assert_eq!(world.apply(GameAction::Move(Direction::Up)), Outcome::Rejected);
        assert_eq!(world.player().pos, (62, 8));
        assert_eq!(world.player().facing, Direction::Up);
        assert_eq!(world.player().energy, MAX_ENERGY);
        assert_eq!(world.status().message(), Some("Use axe to cut tree"));
    }

    #[test]
    fn mine_and_portal_tiles_are_walked_onto() {
        let mut world = World::new(1);
        // (62, 16) is the top of the portal, (8, 25) a mine entrance.
        world.place_player((62, 15), Direction::Down);
        assert_eq!(world.apply(GameAction::Move(Direction::Down)), Outcome::Applied);
        assert_eq!(world.player().pos, (62, 16));

        world.place_player((8, 24), Direction::Down);
        assert_eq!(world.apply(GameAction::Move(Direction::Down)), Outcome::Applied);
        assert_eq!(world.player().pos, (8, 25));
        assert_eq!(world.status().message(), None);
    }

    #[test]
    fn water_and_edges_have_their_own_messages() {
        let mut world = World::new(1);
        // (38, 12) is open water.
        world.place_player((39, 12), Direction::Down);
        assert_eq!(world.apply(GameAction::Move(Direction::Left)), Outcome::Rejected);
        assert_eq!(world.status().message(), Some("Can't swim in water!"));
        assert_eq!(world.status().tone(), Tone::Water);

        world.place_player((77, 0), Direction::Down);
        assert_eq!(world.apply(GameAction::Move(Direction::Up)), Outcome::Rejected);
        assert_eq!(world.status().message(), Some("Can't leave the map!"));
    }

    #[test]
    fn selecting_an_unowned_tool_is_refused() {
        let mut world = World::new(1);
        assert_eq!(world.apply(GameAction::SelectTool(Tool::Seeds)), Outcome::Rejected);
        assert_eq!(world.player().equipped, None);
        assert_eq!(world.status().message(), Some("You don't have a seeds yet!"));

        assert_eq!(world.apply(GameAction::SelectTool(Tool::Hoe)), Outcome::Applied);
        assert_eq!(world.player().equipped, Some(Tool::Hoe));
        assert_eq!(world.status().message(), Some("Hoe equipped!"));

        assert_eq!(world.apply(GameAction::Unequip), Outcome::Applied);
        assert_eq!(world.player().equipped, None);
    }

    #[test]
    fn three_axe_hits_fell_a_tree() {
        let mut world = world_facing_tree();
        world.apply(GameAction::SelectTool(Tool::Axe));
        let start = world.clock().total_minutes();

        world.apply(GameAction::UseTool);
        assert_eq!(world.object_at((62, 7)), Some(&WorldObject::Tree { health: 66 }));
        world.apply(GameAction::UseTool);
        assert_eq!(world.object_at((62, 7)), Some(&WorldObject::Tree { health: 32 }));
        assert_eq!(world.status().message(), Some("Tree health: 32%"));
        world.apply(GameAction::UseTool);

        assert_eq!(
            world.object_at((62, 7)),
            Some(&WorldObject::Stump {
                regrow_at: start + TREE_REGROW_MINUTES
            })
        );
        let wood = world.player().count(ItemKind::Wood);
        assert!((2..=4).contains(&wood), "wood = {wood}");
        assert_eq!(world.player().energy, MAX_ENERGY - 3 * TOOL_ENERGY_COST);
    }

    #[test]
    fn stump_regrows_after_an_hour_of_game_time() {
        let mut world = World::new(1);
        let regrow_at = world.clock().total_minutes() + TREE_REGROW_MINUTES;
        world.place_object((62, 7), WorldObject::Stump { regrow_at });

        world.tick_frame();
        assert!(matches!(world.object_at((62, 7)), Some(WorldObject::Stump { .. })));

        for _ in 0..30 {
            world.apply(GameAction::Move(Direction::Left));
            world.apply(GameAction::Move(Direction::Right));
        }
        world.tick_frame();
        assert_eq!(world.object_at((62, 7)), Some(&WorldObject::tree()));
    }

    #[test]
    fn invalid_tool_target_costs_nothing() {
        let mut world = World::new(1);
        world.apply(GameAction::SelectTool(Tool::Axe));
        // Facing open grass.
        assert_eq!(world.apply(GameAction::UseTool), Outcome::Rejected);
        assert_eq!(world.player().energy, MAX_ENERGY);
        assert!(world.objects().is_empty());
        assert_eq!(world.status().message(), Some("Can't use tool here!"));
    }

    #[test]
    fn tool_use_without_energy_is_refused() {
        let mut world = world_facing_tree();
        world.apply(GameAction::SelectTool(Tool::Axe));
        world.set_energy(TOOL_ENERGY_COST - 1);

        assert_eq!(world.apply(GameAction::UseTool), Outcome::Rejected);
        assert!(world.object_at((62, 7)).is_none());
        assert_eq!(world.status().message(), Some("Too tired!"));
    }

    #[test]
    fn no_tool_equipped() {
        let mut world = World::new(1);
        assert_eq!(world.apply(GameAction::UseTool), Outcome::Rejected);
        assert_eq!(world.status().message(), Some("Select a tool first! (1-4)"));
    }

    #[test]
    fn full_farming_cycle() {
        let mut world = World::new(9);
        world.add_item(ItemKind::Seeds, 1);
        let plot = (50, 11);

        world.apply(GameAction::SelectTool(Tool::Hoe));
        assert_eq!(world.apply(GameAction::UseTool), Outcome::Applied);
        assert_eq!(world.object_at(plot), Some(&WorldObject::FarmPlot));

        world.apply(GameAction::SelectTool(Tool::Seeds));
        assert_eq!(world.apply(GameAction::UseTool), Outcome::Applied);
        assert_eq!(world.player().count(ItemKind::Seeds), 0);

        // Planting again on a crop is not allowed.
        assert_eq!(world.apply(GameAction::UseTool), Outcome::Rejected);

        world.apply(GameAction::SelectTool(Tool::WateringCan));
        assert_eq!(world.apply(GameAction::UseTool), Outcome::Applied);
        assert_eq!(world.apply(GameAction::UseTool), Outcome::Rejected);
        assert_eq!(world.status().message(), Some("Already watered!"));

        // Not ready yet.
        assert_eq!(world.apply(GameAction::Interact), Outcome::Rejected);

        world.clock.advance(3 * CROP_STAGE_MINUTES);
        world.tick_frame();
        match world.object_at(plot) {
            Some(WorldObject::Crop(crop)) => assert_eq!(crop.stage, CropStage::Ready),
            other => panic!("unexpected object {other:?}"),
        }

        assert_eq!(world.apply(GameAction::Interact), Outcome::Applied);
        assert_eq!(world.object_at(plot), Some(&WorldObject::FarmPlot));
        let wheat = world.player().count(ItemKind::Wheat);
        assert!((2..=4).contains(&wheat));
    }

    #[test]
    fn planting_needs_seeds() {
        let mut world = World::new(1);
        world.add_item(ItemKind::Seeds, 1);
        world.remove_item(ItemKind::Seeds, 1);
        world.place_object((50, 11), WorldObject::FarmPlot);

        world.apply(GameAction::SelectTool(Tool::Seeds));
        assert_eq!(world.apply(GameAction::UseTool), Outcome::Rejected);
        assert_eq!(world.status().message(), Some("No seeds!"));
    }

    #[test]
    fn sleeping_restores_energy_and_starts_a_new_day() {
        let mut world = World::new(1);
        // House wall at (47, 3); stand below it facing up.
        world.place_player((47, 4), Direction::Up);
        world.set_energy(3);

        assert_eq!(world.apply(GameAction::Interact), Outcome::Applied);
        assert_eq!(world.player().energy, MAX_ENERGY);
        assert_eq!(world.clock().day(), 2);
        assert_eq!(world.clock().hour(), 6);
    }

    #[test]
    fn sleeping_grows_watered_crops_then_dries_them() {
        let mut world = World::new(1);
        let mut crop = Crop::planted(world.clock().total_minutes());
        crop.water(world.clock().total_minutes());
        world.place_object((40, 10), WorldObject::Crop(crop));
        world.place_player((47, 4), Direction::Up);

        world.apply(GameAction::Interact);
        match world.object_at((40, 10)) {
            Some(WorldObject::Crop(crop)) => {
                assert!(crop.is_ready());
                assert!(!crop.watered);
            }
            other => panic!("unexpected object {other:?}"),
        }
    }

    #[test]
    fn shop_sells_goods_then_sells_seeds() {
        let mut world = World::new(1);
        // Shop wall at (66, 4); stand below it facing up.
        world.place_player((66, 5), Direction::Up);
        world.add_item(ItemKind::Wood, 3);
        world.add_item(ItemKind::Wheat, 2);

        assert_eq!(world.apply(GameAction::Interact), Outcome::Applied);
        assert_eq!(world.player().money, START_MONEY + 3 * 5 + 2 * 15);
        assert_eq!(world.player().count(ItemKind::Wood), 0);
        assert_eq!(world.status().message(), Some("Sold 3 wood, 2 wheat for $45!"));

        assert_eq!(world.apply(GameAction::Interact), Outcome::Applied);
        assert_eq!(world.player().count(ItemKind::Seeds), SEED_PACK_SIZE);
        assert!(world.player().owns(Tool::Seeds));
        assert_eq!(world.player().money, START_MONEY + 45 - 50);
    }

    #[test]
    fn broke_player_cannot_buy_seeds() {
        let mut world = World::new(1);
        world.place_player((66, 5), Direction::Up);
        world.player.money = 10;

        assert_eq!(world.apply(GameAction::Interact), Outcome::Rejected);
        assert_eq!(world.player().money, 10);
        assert_eq!(world.player().count(ItemKind::Seeds), 0);
    }

    #[test]
    fn interacting_with_nothing_is_soft() {
        let mut world = World::new(1);
        assert_eq!(world.apply(GameAction::Interact), Outcome::Rejected);
        assert_eq!(world.status().message(), Some("Nothing to interact with here"));
    }

    #[test]
    fn farm_plots_and_crops_are_walkable() {
        let mut world = World::new(1);
        world.place_object((50, 11), WorldObject::FarmPlot);
        assert!(world.is_walkable(50, 11));
        world.place_object((50, 11), WorldObject::tree());
        assert!(!world.is_walkable(50, 11));
        assert_eq!(world.place_player((50, 11), Direction::Up), Outcome::Rejected);
    }

    #[test]
    fn hints_follow_context() {
        let mut world = world_facing_tree();
        let labels: Vec<&str> = world.context_hints().iter().map(|h| h.label).collect();
        assert_eq!(labels, ["Equip axe", "Map", "Quit"]);

        world.apply(GameAction::SelectTool(Tool::Axe));
        let labels: Vec<&str> = world.context_hints().iter().map(|h| h.label).collect();
        assert_eq!(labels, ["Use axe", "Map", "Quit"]);

        world.place_player((47, 4), Direction::Up);
        let hints = world.context_hints();
        assert_eq!(hints[1], Hint::new("F", "Sleep"));
    }

    #[test]
    fn objects_without_an_interaction_give_no_hint() {
        let labels = |world: &World| -> Vec<&'static str> {
            world.context_hints().iter().map(|h| h.label).collect()
        };
        let mut world = world_facing_tree();
        world.place_object((62, 7), WorldObject::Stump { regrow_at: 1_000 });
        assert_eq!(labels(&world), ["Map", "Quit"]);

        let mut crop = Crop::planted(0);
        world.place_object((62, 9), WorldObject::Crop(crop));
        world.place_player((62, 8), Direction::Down);
        assert_eq!(labels(&world), ["Map", "Quit"]);

        crop.stage = CropStage::Ready;
        world.place_object((62, 9), WorldObject::Crop(crop));
        assert_eq!(labels(&world), ["Harvest", "Map", "Quit"]);
    }

    #[test]
    fn pause_and_quit_are_not_world_actions() {
        let mut world = World::new(1);
        assert_eq!(world.apply(GameAction::Pause), Outcome::Ignored);
        assert_eq!(world.apply(GameAction::Quit), Outcome::Ignored);
    }
}
