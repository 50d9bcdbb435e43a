//! Deterministic Snake on a wrap-around grid.
//!
//! [`game::Game`] is the engine: a pure state machine advanced one tick at a
//! time. [`session::Session`] drives it from inputs and a fixed-rate clock, and
//! the remaining modules form the terminal front end.

pub mod apple;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod session;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
