//! Render layer: composes domain state into scenes and serializes them to SVG

pub mod color;
pub mod pie;
pub mod radial;
pub mod scene;
pub mod svg;
pub mod text;

pub use pie::{compose_process_pie, compose_skills_donut};
pub use radial::{compose_radial, RadialView};
pub use scene::{Element, Group, Scene, Style, Text};
pub use svg::to_svg;
