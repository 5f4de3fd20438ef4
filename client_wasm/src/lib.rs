//! Browser client for multi-ball Pong
//!
//! Software-rendered: every tick the whole scene is rasterized into one RGBA
//! buffer and handed to the page, which paints it onto a canvas.
//! Only the `host` module touches browser APIs; the rest also builds natively.

pub mod error;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod simulation;
pub mod surface;

#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod logger;

pub use error::HostError;
pub use simulation::LocalGame;

#[cfg(target_arch = "wasm32")]
pub use host::start;
