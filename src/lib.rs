#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Decorative bar customizer for a fixed logo.
//!
//! Everything outside `wasm` is plain Rust and builds on the host, which is
//! where the tests and the `logo-bar` binary run.

pub mod color;
pub mod compositor;
pub mod config;
pub mod encode;
pub mod error;
pub mod pattern;
pub mod surface;

pub use color::{BarColor, Rgba, ACCENT_RED, WHITE};
pub use compositor::{composite, AssetState, Composite, Compositor, Download, RenderOutcome};
pub use config::{BarRegion, CustomizerConfig};
pub use error::{CompositorError, ConfigError, EncodeError, PatternError};
pub use pattern::{generate, PatternRequest, PatternStyle, StyleTable};
pub use surface::PixelBuffer;

// Only compile the page bindings when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod render;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        wasm_logger::init(wasm_logger::Config::default());

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        render::start(&document)?;
        Ok(())
    }
}
