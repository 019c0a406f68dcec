//! Procedural top-down ring sketches.
//!
//! A sketch is produced in two passes. [`compute_layout`] sizes the main
//! stone from its carat weight, places the setting's auxiliary stones around
//! it and fits the band to the resulting composite width. [`render_layout`]
//! then paints that layout in a fixed order (band, main stone, setting,
//! prongs) and [`rasterize`] turns the result into a 500×500 RGB image.

pub mod band;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod raster;
pub mod render;
pub mod scene;
pub mod setting;
pub mod shapes;
pub mod side_stones;

pub use error::SketchError;
pub use layout::{SketchLayout, SketchRequest, compute_layout};
pub use raster::{Sketch, build_scene, rasterize, render_sketch, render_svg};
pub use render::render_layout;
pub use scene::{Layer, Scene};
