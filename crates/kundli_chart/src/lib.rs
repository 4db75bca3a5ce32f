//! North-Indian diamond chart layout and SVG rendering.
//!
//! The layout is a fixed template keyed by house number: twelve anchor
//! points on a diamond lattice plus four closed quadrilaterals forming the
//! grid. Nothing here depends on astronomical data.

pub mod data;
pub mod error;
pub mod layout;
pub mod render;

pub use data::ChartData;
pub use error::ChartError;
pub use layout::{
    DIAMOND_POINTS, DIAMOND_POLYGONS, HouseDiagramPoint, LABEL_OFFSET, point_for, polygon_vertices,
};
pub use render::{DEFAULT_SIZE_PX, DEFAULT_TITLE, RenderOptions, render_svg, write_svg};
