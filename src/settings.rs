use crate::consts;
use crate::game::Grid;
use std::time::Duration;
use thiserror::Error;

/// Gameplay parameters, fixed for the lifetime of the process
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Settings {
    pub(crate) grid: Grid,

    /// Time between ticks at the start of a game
    pub(crate) initial_interval: Duration,

    /// Time between ticks never drops below this
    pub(crate) min_interval: Duration,

    /// How much the time between ticks shrinks each time the snake eats
    pub(crate) interval_step: Duration,

    /// Number of food items on the grid at the start of a game
    pub(crate) food: usize,

    /// Number of rocks on the grid at the start of a game
    pub(crate) obstacles: usize,
}

impl Settings {
    /// Check that the settings describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the grid is too small to hold the snake's spawn cell,
    /// if the tick intervals are zero or out of order, or if there are no
    /// food items or more items than the grid can hold.
    pub(crate) fn validate(self) -> Result<Settings, SettingsError> {
        let spawn = consts::SPAWN_CELL;
        if !self.grid.in_bounds(spawn) {
            return Err(SettingsError::GridTooSmall {
                width: self.grid.width,
                height: self.grid.height,
                min_width: spawn.x.saturating_add(1),
                min_height: spawn.y.saturating_add(1),
            });
        }
        if self.min_interval.is_zero() {
            return Err(SettingsError::ZeroInterval);
        }
        if self.min_interval > self.initial_interval {
            return Err(SettingsError::IntervalOrder {
                initial: self.initial_interval,
                min: self.min_interval,
            });
        }
        if self.food == 0 {
            return Err(SettingsError::NoFood);
        }
        // One cell is always reserved for the spawn cell.
        let room = self.grid.cells().saturating_sub(1);
        for (what, qty) in [("food items", self.food), ("rocks", self.obstacles)] {
            if qty > room {
                return Err(SettingsError::Overcrowded { what, qty, room });
            }
        }
        Ok(self)
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            grid: Grid::new(consts::GRID_WIDTH, consts::GRID_HEIGHT),
            initial_interval: consts::INITIAL_INTERVAL,
            min_interval: consts::MIN_INTERVAL,
            interval_step: consts::INTERVAL_STEP,
            food: consts::INITIAL_FOOD,
            obstacles: consts::INITIAL_OBSTACLES,
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum SettingsError {
    #[error("grid size {width}x{height} is too small; must be at least {min_width}x{min_height}")]
    GridTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
    #[error("minimum tick interval must be nonzero")]
    ZeroInterval,
    #[error("minimum tick interval ({min:?}) exceeds initial tick interval ({initial:?})")]
    IntervalOrder { initial: Duration, min: Duration },
    #[error("at least one food item is required")]
    NoFood,
    #[error("cannot fit {qty} {what} on the grid; room for at most {room}")]
    Overcrowded {
        what: &'static str,
        qty: usize,
        room: usize,
    },
}
