// File: crates/statchart-core/src/lib.rs
// Summary: Core library entry point; exports the bar-chart model and headless PNG rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{CategoryAxis, ValueAxis};
pub use chart::{BarChart, ChartLayout, RenderOptions};
pub use error::ChartError;
pub use series::BarSeries;
pub use text::TextShaper;
pub use theme::{parse_color, Theme};
pub use types::FigureSize;
