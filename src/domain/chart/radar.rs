//! Radar chart geometry.
//!
//! Maps an ordered list of (name, score, max score) to polar coordinates on
//! a square canvas: one axis per entry, the first pointing straight up and
//! the rest following clockwise on screen, concentric reference rings, and a
//! closed data polygon.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::Serialize;

use crate::domain::scoring::DimensionScore;

/// One plotted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartDatum {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
}

impl ChartDatum {
    pub fn new(name: impl Into<String>, score: u32, max_score: u32) -> Self {
        Self {
            name: name.into(),
            score,
            max_score,
        }
    }

    /// `score / max_score`; 0 when the maximum is 0.
    pub fn fraction(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.max_score)
    }
}

impl From<&DimensionScore> for ChartDatum {
    fn from(score: &DimensionScore) -> Self {
        Self::new(score.name.clone(), score.score, score.max_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Reference circle at `level / levels` of the plot radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ring {
    pub level: usize,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    Middle,
}

/// Axis caption, centred on its anchor point in both directions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    /// Name split at its first space, one entry per rendered line.
    pub lines: Vec<String>,
    pub position: Point,
    pub text_anchor: TextAnchor,
    pub baseline: Baseline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub angle: f64,
    pub start: Point,
    pub end: Point,
    pub label: AxisLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Close,
}

/// Fully laid-out chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub size: f64,
    pub center: Point,
    pub max_radius: f64,
    pub rings: Vec<Ring>,
    pub axes: Vec<Axis>,
    pub polygon: Vec<PathCommand>,
    pub vertices: Vec<Point>,
}

impl RadarChart {
    /// SVG path data for the polygon, e.g. `M 140 30 L ... Z`.
    pub fn path_data(&self) -> String {
        self.polygon
            .iter()
            .map(|cmd| match cmd {
                PathCommand::MoveTo { x, y } => format!("M {} {}", fmt_coord(*x), fmt_coord(*y)),
                PathCommand::LineTo { x, y } => format!("L {} {}", fmt_coord(*x), fmt_coord(*y)),
                PathCommand::Close => "Z".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Canvas parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub size: f64,
    pub margin: f64,
    pub levels: usize,
    pub label_offset: f64,
}

impl Default for RadarGeometry {
    fn default() -> Self {
        Self {
            size: 280.0,
            margin: 30.0,
            levels: 5,
            label_offset: 25.0,
        }
    }
}

impl RadarGeometry {
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    /// Radius of the outermost ring.
    pub fn max_radius(&self) -> f64 {
        self.size / 2.0 - self.margin
    }

    /// Angle of axis `index` out of `count`.
    pub fn axis_angle(index: usize, count: usize) -> f64 {
        -FRAC_PI_2 + index as f64 * (2.0 * PI / count as f64)
    }

    fn polar(&self, radius: f64, angle: f64) -> Point {
        let center = self.center();
        Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
    }

    /// Lays out a chart for `data`.
    ///
    /// With no data only the rings are produced.
    pub fn layout(&self, data: &[ChartDatum]) -> RadarChart {
        let center = self.center();
        let max_radius = self.max_radius();

        let rings = (1..=self.levels)
            .map(|level| Ring {
                level,
                radius: max_radius * level as f64 / self.levels as f64,
            })
            .collect();

        let count = data.len();
        let axes = data
            .iter()
            .enumerate()
            .map(|(i, datum)| {
                let angle = Self::axis_angle(i, count);
                Axis {
                    angle,
                    start: center,
                    end: self.polar(max_radius, angle),
                    label: AxisLabel {
                        lines: label_lines(&datum.name),
                        position: self.polar(max_radius + self.label_offset, angle),
                        text_anchor: TextAnchor::Middle,
                        baseline: Baseline::Middle,
                    },
                }
            })
            .collect();

        let vertices: Vec<Point> = data
            .iter()
            .enumerate()
            .map(|(i, datum)| self.polar(max_radius * datum.fraction(), Self::axis_angle(i, count)))
            .collect();

        let mut polygon = Vec::with_capacity(vertices.len() + 1);
        for (i, p) in vertices.iter().enumerate() {
            if i == 0 {
                polygon.push(PathCommand::MoveTo { x: p.x, y: p.y });
            } else {
                polygon.push(PathCommand::LineTo { x: p.x, y: p.y });
            }
        }
        if !vertices.is_empty() {
            polygon.push(PathCommand::Close);
        }

        RadarChart {
            size: self.size,
            center,
            max_radius,
            rings,
            axes,
            polygon,
            vertices,
        }
    }
}

/// Lays out a chart on the default 280x280 canvas.
pub fn layout(data: &[ChartDatum]) -> RadarChart {
    RadarGeometry::default().layout(data)
}

fn label_lines(name: &str) -> Vec<String> {
    match name.split_once(' ') {
        Some((first, rest)) => vec![first.to_string(), rest.to_string()],
        None => vec![name.to_string()],
    }
}

pub(crate) fn fmt_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0" for values that round to zero.
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}
