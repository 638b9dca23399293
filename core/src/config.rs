//! Topology parameters and pacing limits coming from the presentation layer.
//!
//! These only shape graph construction; the engine itself takes no options.

use crate::error::ConfigError;
use crate::graph::{Cell, Grid, Lattice, Pipeline, Voxel};
use rand::Rng;
use serde::Deserialize;

pub const MIN_STEP_MS: u64 = 10;
pub const MAX_STEP_MS: u64 = 2000;

pub const DEFAULT_MAZE_STEP_MS: u64 = 50;
pub const DEFAULT_LATTICE_STEP_MS: u64 = 200;
pub const DEFAULT_GRAPH_STEP_MS: u64 = 500;
pub const DEFAULT_PIPELINE_STEP_MS: u64 = 300;

pub const GRID_PRESETS: [usize; 3] = [15, 25, 35];
pub const MAX_GRID_SIZE: usize = 500;
pub const MAX_LATTICE_SIZE: usize = 50;
pub const MAX_LATTICE_LEVELS: usize = 20;
pub const MAX_PIPELINE_STAGES: usize = 1000;
pub const MAX_LATTICE_DENSITY: f64 = 40.0;

/// Settings for the 2D maze.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub size: usize,
    /// Chance, in percent, that any given cell becomes a wall.
    pub wall_density: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 25,
            wall_density: 30.0,
        }
    }
}

impl GridConfig {
    pub fn new(size: usize, wall_density: f64) -> Self {
        Self { size, wall_density }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(ConfigError::DimensionTooSmall {
                name: "maze size",
                min: 2,
                value: self.size,
            });
        }
        check_upper("maze size", self.size, MAX_GRID_SIZE)?;
        check_density(self.wall_density, 100.0)
    }

    /// Builds a random maze with walls kept off the default endpoints.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(Grid, Cell, Cell), ConfigError> {
        self.validate()?;
        let mut grid = Grid::square(self.size);
        let (start, goal) = grid.default_endpoints();
        grid.generate(self.wall_density, &[start, goal], rng);
        Ok((grid, start, goal))
    }
}

/// Settings for the multi-level maze.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LatticeConfig {
    pub size: usize,
    pub levels: usize,
    pub wall_density: f64,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            size: 7,
            levels: 3,
            wall_density: 20.0,
        }
    }
}

impl LatticeConfig {
    /// Named sizes offered by the 3D maze: 5x5x3, 7x7x3 and 9x9x5.
    pub fn preset(size: usize) -> Result<Self, ConfigError> {
        let levels = match size {
            5 | 7 => 3,
            9 => 5,
            other => return Err(ConfigError::UnknownPreset(other)),
        };
        Ok(Self {
            size,
            levels,
            ..Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 1 {
            return Err(ConfigError::DimensionTooSmall {
                name: "lattice size",
                min: 1,
                value: self.size,
            });
        }
        if self.levels < 1 {
            return Err(ConfigError::DimensionTooSmall {
                name: "levels",
                min: 1,
                value: self.levels,
            });
        }
        check_upper("lattice size", self.size, MAX_LATTICE_SIZE)?;
        check_upper("levels", self.levels, MAX_LATTICE_LEVELS)?;
        let nodes = self
            .size
            .checked_mul(self.size)
            .and_then(|floor| floor.checked_mul(self.levels))
            .unwrap_or(usize::MAX);
        if nodes < 2 {
            return Err(ConfigError::DimensionTooSmall {
                name: "lattice node count",
                min: 2,
                value: nodes,
            });
        }
        check_density(self.wall_density, MAX_LATTICE_DENSITY)
    }

    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(Lattice, Voxel, Voxel), ConfigError> {
        self.validate()?;
        let mut lattice = Lattice::new(self.size, self.levels);
        let (start, goal) = lattice.default_endpoints();
        let placed = lattice.generate(self.wall_density, &[start, goal], rng);
        tracing::debug!(placed, walls = lattice.wall_count(), "lattice walls generated");
        Ok((lattice, start, goal))
    }
}

/// Settings for the linear pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub stages: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { stages: 11 }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stages < 2 {
            return Err(ConfigError::DimensionTooSmall {
                name: "stages",
                min: 2,
                value: self.stages,
            });
        }
        check_upper("stages", self.stages, MAX_PIPELINE_STAGES)
    }

    pub fn build(&self) -> Result<Pipeline, ConfigError> {
        self.validate()?;
        Ok(Pipeline::new(self.stages))
    }
}

fn check_upper(name: &'static str, value: usize, max: usize) -> Result<(), ConfigError> {
    if value > max {
        return Err(ConfigError::DimensionTooLarge { name, max, value });
    }
    Ok(())
}

fn check_density(value: f64, max: f64) -> Result<(), ConfigError> {
    if !(0.0..=max).contains(&value) {
        return Err(ConfigError::DensityOutOfRange { value, max });
    }
    Ok(())
}
