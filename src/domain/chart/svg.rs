//! SVG rendering of a laid-out radar chart.

use std::fmt::Write;

use super::radar::{fmt_coord, RadarChart};

const RING_STROKE: &str = "#e5e7eb";
const AXIS_STROKE: &str = "#d1d5db";
const LABEL_FILL: &str = "#4b5563";
const AREA_FILL: &str = "rgba(59, 130, 246, 0.3)";
const AREA_STROKE: &str = "#3b82f6";
const VERTEX_RADIUS: f64 = 4.0;

impl RadarChart {
    /// Renders the chart as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let size = fmt_coord(self.size);
        let cx = fmt_coord(self.center.x);
        let cy = fmt_coord(self.center.y);

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="{size}" height="{size}" fill="white"/>"#
        );

        for ring in &self.rings {
            let _ = writeln!(
                svg,
                r#"  <circle cx="{cx}" cy="{cy}" r="{}" fill="none" stroke="{RING_STROKE}" stroke-width="1"/>"#,
                fmt_coord(ring.radius)
            );
        }

        for axis in &self.axes {
            let _ = writeln!(
                svg,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{AXIS_STROKE}" stroke-width="1"/>"#,
                fmt_coord(axis.start.x),
                fmt_coord(axis.start.y),
                fmt_coord(axis.end.x),
                fmt_coord(axis.end.y)
            );

            let x = fmt_coord(axis.label.position.x);
            let y = fmt_coord(axis.label.position.y);
            let _ = write!(
                svg,
                r#"  <text x="{x}" y="{y}" text-anchor="middle" dominant-baseline="middle" font-size="12" font-weight="500" fill="{LABEL_FILL}">"#
            );
            let line_count = axis.label.lines.len();
            for (i, line) in axis.label.lines.iter().enumerate() {
                // Centre the block of lines vertically on the anchor point.
                let dy = if i == 0 {
                    -0.6 * (line_count as f64 - 1.0)
                } else {
                    1.2
                };
                let _ = write!(
                    svg,
                    r#"<tspan x="{x}" dy="{}em">{}</tspan>"#,
                    fmt_coord(dy),
                    escape_xml(line)
                );
            }
            svg.push_str("</text>\n");
        }

        if !self.polygon.is_empty() {
            let _ = writeln!(
                svg,
                r#"  <path d="{}" fill="{AREA_FILL}" stroke="{AREA_STROKE}" stroke-width="2"/>"#,
                self.path_data()
            );
        }

        for vertex in &self.vertices {
            let _ = writeln!(
                svg,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="{AREA_STROKE}"/>"#,
                fmt_coord(vertex.x),
                fmt_coord(vertex.y),
                fmt_coord(VERTEX_RADIUS)
            );
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
