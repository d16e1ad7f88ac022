//! Watch a maze being carved, one wall per frame.
//!
//! The core is [`generators::backtrack::RecursiveBacktracker`] working on a
//! [`grids::wall_grid::WallGrid`]; everything under [`app`] and [`renderer`] only
//! puts the grid on screen.

pub mod app;
pub mod config;
pub mod generators;
pub mod grids;
pub mod renderer;

pub use config::{Config, ConfigError};
pub use generators::{Generator, GeneratorKind, Step};
