use thiserror::Error;

use crate::config::GridSize;
use crate::snake::Position;

/// Rejected engine or driver configuration.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid width must be at least 1 cell")]
    ZeroWidth,
    #[error("grid height must be at least 1 cell")]
    ZeroHeight,
    #[error("tick rate must be at least 1 tick per second")]
    ZeroTickRate,
    #[error("snake must have at least one segment")]
    EmptySnake,
    #[error("segment ({}, {}) lies outside the {}x{} grid", .position.x, .position.y, .grid.width, .grid.height)]
    OutOfBounds { position: Position, grid: GridSize },
    #[error("snake segments overlap at ({}, {})", .0.x, .0.y)]
    OverlappingSegments(Position),
    #[error("apple at ({}, {}) is placed on the snake", .0.x, .0.y)]
    AppleOnSnake(Position),
}

/// Failures surfaced by the terminal front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not start logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}
