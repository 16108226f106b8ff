//! Arena map: border walls plus uniformly scattered interior walls.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

pub const WALL_GLYPH: char = '#';
pub const FLOOR_GLYPH: char = '.';

/// Rejection-sampling attempts per map cell before falling back to a scan.
const SAMPLES_PER_CELL: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Floor,
    Wall,
}

impl Tile {
    pub fn glyph(self) -> char {
        match self {
            Tile::Floor => FLOOR_GLYPH,
            Tile::Wall => WALL_GLYPH,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpawnError {
    #[error("the map has no floor tile to spawn on")]
    NoFloor,
}

/// Row-major grid of tiles.  Never changes once generated.
#[derive(Clone, Debug, PartialEq)]
pub struct Map {
    width: u16,
    height: u16,
    tiles: Vec<Tile>,
}

impl Map {
    /// Walls all round the edge, then `width * height / wall_density` walls
    /// dropped on random interior cells (duplicates allowed).
    pub fn generate(width: u16, height: u16, wall_density: u32, rng: &mut impl Rng) -> Map {
        let (w, h) = (width as usize, height as usize);
        let mut tiles = vec![Tile::Floor; w * h];
        for y in 0..h {
            for x in 0..w {
                if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                    tiles[y * w + x] = Tile::Wall;
                }
            }
        }

        if w >= 3 && h >= 3 {
            let count = (w * h) / wall_density.max(1) as usize;
            for _ in 0..count {
                let x = rng.gen_range(1..w - 1);
                let y = rng.gen_range(1..h - 1);
                tiles[y * w + x] = Tile::Wall;
            }
        }

        Map { width, height, tiles }
    }

    /// Build a map from text rows, `#` for walls and anything else for floor.
    /// Rows shorter than the first are padded with floor.
    pub fn from_rows(rows: &[&str]) -> Map {
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut tiles = Vec::with_capacity(width * rows.len());
        for row in rows {
            let mut cells: Vec<Tile> = row
                .chars()
                .take(width)
                .map(|c| if c == WALL_GLYPH { Tile::Wall } else { Tile::Floor })
                .collect();
            cells.resize(width, Tile::Floor);
            tiles.extend(cells);
        }
        Map {
            width: width as u16,
            height: rows.len() as u16,
            tiles,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// `None` outside the grid.
    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.tiles.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn is_floor(&self, x: i32, y: i32) -> bool {
        self.tile(x, y) == Some(Tile::Floor)
    }

    /// Pick a random floor cell.  Interior cells are sampled first; after a
    /// bounded number of misses every floor cell is listed and one chosen, so
    /// a crowded map can never hang the caller.
    pub fn random_floor(&self, rng: &mut impl Rng) -> Result<(i32, i32), SpawnError> {
        let (w, h) = (self.width as i32, self.height as i32);
        let attempts = self.tiles.len() * SAMPLES_PER_CELL;
        if w >= 3 && h >= 3 {
            for _ in 0..attempts {
                let x = rng.gen_range(1..w - 1);
                let y = rng.gen_range(1..h - 1);
                if self.is_floor(x, y) {
                    return Ok((x, y));
                }
            }
            log::warn!("no floor found after {attempts} samples, scanning the map");
        }

        let floors: Vec<(i32, i32)> = (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .filter(|&(x, y)| self.is_floor(x, y))
            .collect();
        floors.choose(rng).copied().ok_or(SpawnError::NoFloor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_map_has_closed_border() {
        let map = Map::generate(40, 20, 30, &mut StdRng::seed_from_u64(1));
        for x in 0..40 {
            assert_eq!(map.tile(x, 0), Some(Tile::Wall));
            assert_eq!(map.tile(x, 19), Some(Tile::Wall));
        }
        for y in 0..20 {
            assert_eq!(map.tile(0, y), Some(Tile::Wall));
            assert_eq!(map.tile(39, y), Some(Tile::Wall));
        }
    }

    #[test]
    fn interior_walls_bounded_by_density() {
        let map = Map::generate(40, 20, 30, &mut StdRng::seed_from_u64(2));
        let interior_walls = (1..19)
            .flat_map(|y| (1..39).map(move |x| (x, y)))
            .filter(|&(x, y)| map.tile(x, y) == Some(Tile::Wall))
            .count();
        assert!(interior_walls >= 1);
        assert!(interior_walls <= 40 * 20 / 30);
    }

    #[test]
    fn tile_outside_grid_is_none() {
        let map = Map::from_rows(&["...", "..."]);
        assert_eq!(map.tile(-1, 0), None);
        assert_eq!(map.tile(3, 0), None);
        assert_eq!(map.tile(0, 2), None);
        assert!(map.is_floor(2, 1));
    }

    #[test]
    fn random_floor_avoids_walls() {
        let map = Map::from_rows(&["#####", "#.#.#", "#####"]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let (x, y) = map.random_floor(&mut rng).unwrap();
            assert!(map.is_floor(x, y));
        }
    }

    #[test]
    fn random_floor_falls_back_to_border_floor() {
        // Interior is solid, only a border cell is open.
        let map = Map::from_rows(&["#.###", "#####", "#####"]);
        let cell = map.random_floor(&mut StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(cell, (1, 0));
    }

    #[test]
    fn all_wall_map_is_an_error() {
        let map = Map::from_rows(&["###", "###", "###"]);
        assert_eq!(map.random_floor(&mut StdRng::seed_from_u64(5)), Err(SpawnError::NoFloor));
    }
}
