use super::Graph;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Voxel {
    pub level: usize,
    pub row: usize,
    pub col: usize,
}

impl Voxel {
    pub const fn new(level: usize, row: usize, col: usize) -> Self {
        Self { level, row, col }
    }
}

impl fmt::Display for Voxel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.level, self.row, self.col)
    }
}

// up, down, forward, backward, left, right
const DIRECTIONS: [(isize, isize, isize); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, -1, 0),
    (0, 1, 0),
    (0, 0, -1),
    (0, 0, 1),
];

/// Multi-level maze: `levels` stacked square floors with 6-neighbor connectivity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    size: usize,
    levels: usize,
    walls: Vec<bool>,
}

impl Lattice {
    /// Panics if the voxel count overflows `usize`; bounded sizes come from
    /// [`crate::LatticeConfig`].
    pub fn new(size: usize, levels: usize) -> Self {
        Self {
            size,
            levels,
            walls: vec![false; size * size * levels],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    fn index(&self, voxel: &Voxel) -> Option<usize> {
        (voxel.level < self.levels && voxel.row < self.size && voxel.col < self.size)
            .then(|| (voxel.level * self.size + voxel.row) * self.size + voxel.col)
    }

    pub fn is_wall(&self, voxel: &Voxel) -> bool {
        self.index(voxel).is_some_and(|idx| self.walls[idx])
    }

    pub fn set_wall(&mut self, voxel: &Voxel, wall: bool) -> bool {
        match self.index(voxel) {
            Some(idx) => {
                self.walls[idx] = wall;
                true
            }
            None => false,
        }
    }

    pub fn clear_walls(&mut self) {
        self.walls.iter_mut().for_each(|wall| *wall = false);
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|wall| **wall).count()
    }

    /// First voxel of the bottom floor and last voxel of the top floor.
    pub fn default_endpoints(&self) -> (Voxel, Voxel) {
        let last = self.size.saturating_sub(1);
        (
            Voxel::new(0, 0, 0),
            Voxel::new(self.levels.saturating_sub(1), last, last),
        )
    }

    /// Drops `floor(node_count * density / 100)` walls at random positions.
    ///
    /// Picks may land on the same voxel twice, and picks on a protected voxel
    /// are skipped, so the number of walls actually placed is returned.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        density_percent: f64,
        protected: &[Voxel],
        rng: &mut R,
    ) -> usize {
        self.clear_walls();
        let total = self.walls.len();
        if total == 0 {
            return 0;
        }

        let attempts = (total as f64 * density_percent.max(0.0) / 100.0).floor() as usize;
        let mut placed = 0;

        for _ in 0..attempts {
            let idx = rng.random_range(0..total);
            let voxel = self.voxel_at(idx);
            if protected.contains(&voxel) {
                continue;
            }
            self.walls[idx] = true;
            placed += 1;
        }

        placed
    }

    fn voxel_at(&self, idx: usize) -> Voxel {
        let per_level = self.size * self.size;
        let level = idx / per_level;
        let rest = idx % per_level;
        Voxel::new(level, rest / self.size, rest % self.size)
    }

    pub fn voxels(&self) -> impl Iterator<Item = Voxel> + '_ {
        (0..self.walls.len()).map(|idx| self.voxel_at(idx))
    }
}

impl Graph for Lattice {
    type Node = Voxel;

    fn neighbors(&self, voxel: &Voxel) -> Vec<Voxel> {
        if self.index(voxel).is_none() {
            return vec![];
        }

        DIRECTIONS
            .iter()
            .filter_map(|&(dl, dr, dc)| {
                let neighbor = Voxel::new(
                    voxel.level.checked_add_signed(dl)?,
                    voxel.row.checked_add_signed(dr)?,
                    voxel.col.checked_add_signed(dc)?,
                );
                (self.index(&neighbor).is_some() && !self.is_wall(&neighbor)).then_some(neighbor)
            })
            .collect()
    }

    fn exists(&self, voxel: &Voxel) -> bool {
        self.index(voxel).is_some()
    }

    fn is_passable(&self, voxel: &Voxel) -> bool {
        self.exists(voxel) && !self.is_wall(voxel)
    }

    fn node_count(&self) -> usize {
        self.walls.len()
    }
}
