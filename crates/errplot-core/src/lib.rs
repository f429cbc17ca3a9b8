// File: crates/errplot-core/src/lib.rs
// Summary: Core library entry point; exports dataset loading and chart rendering API.

pub mod data;
pub mod error;
pub mod colormap;
pub mod scale;
pub mod grid;
pub mod types;
pub mod theme;
pub mod text;
pub mod render;
pub mod colorbar;
pub mod polar;
pub mod bars;

pub use bars::GradientBarChart;
pub use colormap::ColorMap;
pub use data::{read_data, Dataset};
pub use error::DataError;
pub use polar::PolarErrorChart;
pub use render::RenderOptions;
pub use text::TextShaper;
pub use theme::Theme;
