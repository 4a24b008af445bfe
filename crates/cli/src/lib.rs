//! Command line front end for U-Pallet.
//!
//! This crate provides:
//! - Semicolon-delimited catalog and load list parsing
//! - Plain text load reports
//! - 3D scene export for external viewers

mod parser;
mod report;
mod scene;

pub use parser::{
    build_manifest, parse_hex_color, parse_load_arg, parse_load_list, CatalogParser, ParseError,
};
pub use report::{render_report, Report};
pub use scene::{Camera, Scene, SceneBox, DEFAULT_SCALE};
