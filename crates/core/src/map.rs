//! Static village map and terrain lookup.

use thiserror::Error;

/// Terrain codes of the home village, one character per tile.
pub const VILLAGE_MAP: [&str; 27] = [
    "MMMMGGGGGGGGGGGfFFFFFFFFFFFF~~~~~~~~~GGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGG",
    "MMMGGGGGGGGGGGGfFFFFFFFFFFFFFF~*~~~~~~~GGGGGGGHHHHHHHHHHHGGGGGGGGGGGGGGGGGGGGG",
    "MMMGGGTGGGGGGGGffFFFFFFFFFFFFF~~~~~~~~~GGGGGGGHHHHHHHHHHHGGGGGGGGGssssssssGGGG",
    "MMGGGGGGGGGGGGGGfFFFFFFFFFFFFFF~~~~~~~~~GGGGGGHHHHHHHHHHHGGGGGGGGGssssssssGGGG",
    "MMGGTGGGGTGGGGGGGffFFFFFFFFFFFF~~~~~~~*~GGGGGGGGGGGGGGGGGGGGGGGGGGssssssssGGGG",
    "MGGGGGGGGGGGGGGGGGffffGGGffffff~~~~~~~~~GGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGG",
    "MGGGGGTGGGGGGGGGGGGGGGGGGGGGGG~~~~~~~~~GGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGG",
    "MMGTGGGGGGGGGGGGGGGGGGGGGGGGGG~~~~~~~~~GGGGGGGGGGGGGGGGGGGGGGGTTGGGGGGGGGGGGGG",
    "MMGGGGGGGGGTGGGGGGTGGGGGGGGGGG~~~~~~~~~GGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGG",
    "MTTGTGGGGGTGGGGGGGGGGGGGGGGGGGPPPPPPPPPGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGG",
    "MGGTGGGTGGGGGGGGTGGGGGGGGGGGGGPPPPPPPPPGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGG",
    "MMGGGGGGGGGGGGGGGTTGGGGGGGGGGGPPPPPPPPPGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGG",
    "MMMGTTTTGGGGGGGGGGGGGGGGGGGGGG~~~~~~~~~GGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGG",
    "MMMGGGGGGGTTTTTGGGGGGGGGGGGGGG~~~~~~~~~GGGGGGGGGGGGGGGGGGGGGTGGGGGGGGGGGGGGGGG",
    "MMMGGGGGGGGGGGGGGGGGGGGGGGGGGG~~~~~~~~~GGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGG",
    "MMGTTTTTTGGGGGGGGGGGGGGGGGGGGGGG~~~~*~~~~GGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGG",
    "MMGGGTTGGGGGGGGTTTGGGGGGGGGGGGGG~~~~~~~~~GGGGGGGGGGGGGGGGGGGpppppGGGGGGGGGGGGG",
    "MMMGGGGGGTTGGGGGGTTGGGGGGGGTGGGGG~~~~~~~~~GGGGGGGGGGGGGGTGGpppppppGGGGGGGGGGGG",
    "MMMGGTTTTTTTGGGGGGGTTTGGGGGGGGGGG~~~~~~~~~GGGGGGGGGGGGGGGGpppppppppGGGGGGGGGGG",
    "MMMMGGGGTTTGGGGGGTTTTGGGGGGGGGGGGG~*~~~~~~~GGGGGGGGGGGGGGGpppppppppGGGGGGGGGGG",
    "MMMMGTTTGGGGGGGGGGGGGGGGGGGGGGGGGG~~~~~~~~~GGGGGGGGGGGGGGGGpppppppGGGGGGGGGGGG",
    "MMMMGGGGGTTTTGGGGTTGGGGGGGGGGGGGGG~~~~~*~~~GGGGGGGGGGGGGGGGTpppppGGGGGGGGGGGGG",
    "MMMMMGGGGGGGTTTTTGGGGGGGGGGGGGGGGG~~~~~~~~~GGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGG",
    "MMMMMMMGGTTGTTTTTGTTGGTTGGGGTGGGGGGG~~~~~~~~~GGGGGGGGGGGGGGGGGGGGGGGGTGGGGGGGG",
    "MMMMMMMGGGTTTTGGGTTTTTTGGGTTGGGGGGGGG~*~~~~~~~GGGGGGGGGTTGGGGGGGGGGGGGGGGGGGGG",
    "MMMMMMMmmmmmmMMMMMMMMMMMMMGGTTTGGGGTGGG~~~~~~~~~GGGGGGGGGGGGGGGGTGGGGGGGGGGGGG",
    "MMMMMMMMMMMMMMMMMMMMMMMMMMMMMMMMMGGGGGGG~~~~~~~~~GGGGGGGGGGGGGGGGGGGGGGGGGGGGG",
];

/// One kind of static terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Grass,
    Dirt,
    Water,
    WaterLily,
    HouseWall,
    HouseDoor,
    HouseWindow,
    ShopWall,
    Tree,
    Seeds,
    Path,
    Fence,
    Mountain,
    Portal,
    MineEntrance,
}

impl Terrain {
    /// Decode a map character.
    pub fn from_code(code: char) -> Option<Self> {
        let t = match code {
            'G' => Terrain::Grass,
            'F' => Terrain::Dirt,
            '~' => Terrain::Water,
            '*' => Terrain::WaterLily,
            'H' => Terrain::HouseWall,
            'D' => Terrain::HouseDoor,
            'W' => Terrain::HouseWindow,
            's' => Terrain::ShopWall,
            'T' => Terrain::Tree,
            'S' => Terrain::Seeds,
            'P' => Terrain::Path,
            'f' => Terrain::Fence,
            'M' => Terrain::Mountain,
            'p' => Terrain::Portal,
            'm' => Terrain::MineEntrance,
            _ => return None,
        };
        Some(t)
    }

    pub fn code(self) -> char {
        match self {
            Terrain::Grass => 'G',
            Terrain::Dirt => 'F',
            Terrain::Water => '~',
            Terrain::WaterLily => '*',
            Terrain::HouseWall => 'H',
            Terrain::HouseDoor => 'D',
            Terrain::HouseWindow => 'W',
            Terrain::ShopWall => 's',
            Terrain::Tree => 'T',
            Terrain::Seeds => 'S',
            Terrain::Path => 'P',
            Terrain::Fence => 'f',
            Terrain::Mountain => 'M',
            Terrain::Portal => 'p',
            Terrain::MineEntrance => 'm',
        }
    }

    /// Whether the player may stand on this terrain.
    ///
    /// Lily pads are stepping stones; open water blocks.
    pub fn is_walkable(self) -> bool {
        !matches!(
            self,
            Terrain::HouseWall
                | Terrain::Tree
                | Terrain::Mountain
                | Terrain::Fence
                | Terrain::ShopWall
                | Terrain::Water
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown terrain code {code:?} at ({x}, {y})")]
    UnknownCode { code: char, x: usize, y: usize },
}

/// Immutable rectangular terrain grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: i32,
    height: i32,
    tiles: Vec<Terrain>,
}

impl TileMap {
    /// Parse rows of terrain codes into a map.
    pub fn parse(rows: &[&str]) -> Result<Self, MapError> {
        let first = rows.first().ok_or(MapError::Empty)?;
        let width = first.chars().count();
        let mut tiles = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(MapError::Ragged {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, code) in row.chars().enumerate() {
                let t = Terrain::from_code(code).ok_or(MapError::UnknownCode { code, x, y })?;
                tiles.push(t);
            }
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            tiles,
        })
    }

    /// The built-in home village.
    pub fn village() -> Self {
        // The village table is a compile-time constant covered by tests.
        Self::parse(&VILLAGE_MAP).unwrap_or_else(|_| Self {
            width: 1,
            height: 1,
            tiles: vec![Terrain::Grass],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Terrain at `(x, y)`, or `None` off the map.
    pub fn get(&self, x: i32, y: i32) -> Option<Terrain> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.tiles[(y * self.width + x) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn village_map_parses() {
        let map = TileMap::parse(&VILLAGE_MAP).unwrap();
        assert_eq!(map.width(), 78);
        assert_eq!(map.height(), 27);
        assert_eq!(TileMap::village(), map);
    }

    #[test]
    fn terrain_codes_round_trip() {
        for row in VILLAGE_MAP {
            for code in row.chars() {
                assert_eq!(Terrain::from_code(code).unwrap().code(), code);
            }
        }
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = TileMap::parse(&["GGG", "GG"]).unwrap_err();
        assert_eq!(
            err,
            MapError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let err = TileMap::parse(&["G?G"]).unwrap_err();
        assert_eq!(err, MapError::UnknownCode { code: '?', x: 1, y: 0 });
    }

    #[test]
    fn lookups_outside_the_map_are_none() {
        let map = TileMap::village();
        assert_eq!(map.get(-1, 0), None);
        assert_eq!(map.get(0, 27), None);
        assert_eq!(map.get(0, 0), Some(Terrain::Mountain));
        assert_eq!(map.get(50, 10), Some(Terrain::Grass));
    }

    #[test]
    fn blocking_terrain() {
        assert!(!Terrain::HouseWall.is_walkable());
        assert!(!Terrain::Water.is_walkable());
        assert!(Terrain::WaterLily.is_walkable());
        assert!(Terrain::Grass.is_walkable());
        assert!(Terrain::Path.is_walkable());
        assert!(Terrain::Portal.is_walkable());
    }
}
