//! Chart module - radar (spider) chart of the dimension profile.

mod radar;
mod svg;

pub use radar::{
    layout, Axis, AxisLabel, Baseline, ChartDatum, PathCommand, Point, RadarChart, RadarGeometry,
    Ring, TextAnchor,
};
