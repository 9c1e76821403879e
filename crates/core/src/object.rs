//! Dynamic world objects: trees, stumps, farm plots and crops.
//!
//! Objects sit on top of static terrain, at most one per tile. Trees and
//! stumps only ever occupy tree terrain; plots and crops only grass.

use serde::{Deserialize, Serialize};

use crate::types::{CROP_STAGE_MINUTES, TREE_MAX_HEALTH};

/// Growth stage of a planted crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropStage {
    Seeds,
    Sprout,
    Growing,
    Ready,
}

impl CropStage {
    pub fn next(self) -> Self {
        match self {
            CropStage::Seeds => CropStage::Sprout,
            CropStage::Sprout => CropStage::Growing,
            CropStage::Growing | CropStage::Ready => CropStage::Ready,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Crop {
    pub stage: CropStage,
    pub watered: bool,
    /// Absolute minute the current stage started counting.
    pub stage_started_at: u32,
}

impl Crop {
    pub fn planted(now: u32) -> Self {
        Self {
            stage: CropStage::Seeds,
            watered: false,
            stage_started_at: now,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.stage == CropStage::Ready
    }

    /// Advance through every stage whose time has come. Returns true if the
    /// stage changed.
    pub fn grow(&mut self, now: u32) -> bool {
        let before = self.stage;
        while self.watered
            && !self.is_ready()
            && now.saturating_sub(self.stage_started_at) >= CROP_STAGE_MINUTES
        {
            self.stage = self.stage.next();
            self.stage_started_at += CROP_STAGE_MINUTES;
        }
        self.stage != before
    }

    pub fn water(&mut self, now: u32) {
        if !self.watered {
            self.watered = true;
            self.stage_started_at = now;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorldObject {
    Tree { health: u8 },
    Stump { regrow_at: u32 },
    FarmPlot,
    Crop(Crop),
}

impl WorldObject {
    pub fn tree() -> Self {
        WorldObject::Tree {
            health: TREE_MAX_HEALTH,
        }
    }

    /// Plots and crops can be walked over; trees and stumps block.
    pub fn is_walkable(&self) -> bool {
        matches!(self, WorldObject::FarmPlot | WorldObject::Crop(_))
    }

    /// Whether the interact or tool keys have anything to do here.
    pub fn can_interact(&self) -> bool {
        match self {
            WorldObject::Tree { health } => *health > 0,
            WorldObject::FarmPlot => true,
            WorldObject::Crop(crop) => crop.is_ready(),
            WorldObject::Stump { .. } => false,
        }
    }

    /// Advance timers to `now`. Returns true if the object changed.
    pub fn update(&mut self, now: u32) -> bool {
        match self {
            WorldObject::Stump { regrow_at } if now >= *regrow_at => {
                *self = WorldObject::tree();
                true
            }
            WorldObject::Crop(crop) => crop.grow(now),
            _ => false,
        }
    }
}
