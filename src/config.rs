use std::time::Duration;

use ratatui::style::Color;

use crate::error::ConfigError;

/// Logical grid dimensions, validated to be non-zero on both axes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Builds a grid size, refusing zero-sized axes.
    pub fn try_new(width: u16, height: u16) -> Result<Self, ConfigError> {
        let grid = Self { width, height };
        grid.validate()?;
        Ok(grid)
    }

    /// Checks that both axes hold at least one cell.
    pub fn validate(self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        Ok(())
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Ticks per second driving the simulation. Never below [`MIN_TICK_RATE`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct TickRate(u32);

impl TickRate {
    pub fn try_new(ticks_per_second: u32) -> Result<Self, ConfigError> {
        if ticks_per_second < MIN_TICK_RATE {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(Self(ticks_per_second.min(MAX_TICK_RATE)))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// One tick faster, saturating at [`MAX_TICK_RATE`].
    #[must_use]
    pub fn faster(self) -> Self {
        Self(self.0.saturating_add(1).min(MAX_TICK_RATE))
    }

    /// One tick slower, clamped to [`MIN_TICK_RATE`].
    #[must_use]
    pub fn slower(self) -> Self {
        Self(self.0.saturating_sub(1).max(MIN_TICK_RATE))
    }

    /// Time between two ticks, `1000 / fps` whole milliseconds.
    #[must_use]
    pub fn interval(self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.0))
    }
}

impl Default for TickRate {
    fn default() -> Self {
        Self(DEFAULT_TICK_RATE)
    }
}

/// Everything needed to start a session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub tick_rate: TickRate,
    /// Terminal columns used to draw one grid cell.
    pub cell_width: u16,
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(
        width: u16,
        height: u16,
        ticks_per_second: u32,
        cell_width: u16,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            grid: GridSize::try_new(width, height)?,
            tick_rate: TickRate::try_new(ticks_per_second)?,
            cell_width: cell_width.clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH),
            seed,
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            tick_rate: TickRate::default(),
            cell_width: DEFAULT_CELL_WIDTH,
            seed: None,
        }
    }
}

pub const DEFAULT_GRID_WIDTH: u16 = 16;
pub const DEFAULT_GRID_HEIGHT: u16 = 12;

pub const DEFAULT_TICK_RATE: u32 = 5;
pub const MIN_TICK_RATE: u32 = 1;
pub const MAX_TICK_RATE: u32 = 60;

pub const DEFAULT_CELL_WIDTH: u16 = 2;
pub const MIN_CELL_WIDTH: u16 = 1;
pub const MAX_CELL_WIDTH: u16 = 4;

/// Random draws tried before apple placement falls back to enumerating free cells.
pub const MAX_REJECTION_SAMPLES: usize = 64;

/// Colour of the snake head.
pub const COLOUR_PLAYER: Color = Color::Rgb(0x05, 0x78, 0x12);

/// Colour of the trailing body segments.
pub const COLOUR_TAIL: Color = Color::Rgb(0x6c, 0xfb, 0x4b);

/// Colour of the apple.
pub const COLOUR_APPLE: Color = Color::Rgb(0xfb, 0x06, 0x06);

pub const COLOUR_BORDER: Color = Color::DarkGray;
pub const COLOUR_TEXT: Color = Color::White;
pub const COLOUR_MUTED: Color = Color::DarkGray;

pub const GLYPH_HEAD: &str = "█";
pub const GLYPH_BODY: &str = "▓";
pub const GLYPH_APPLE: &str = "●";
