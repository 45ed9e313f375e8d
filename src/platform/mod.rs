//! Platform abstraction layer
//!
//! Drawing surfaces for each target:
//! - `headless`: native runs without a window
//! - `web`: browser `<canvas>` 2D context (wasm32 only)

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::HeadlessSurface;
#[cfg(target_arch = "wasm32")]
pub use web::CanvasSurface;
