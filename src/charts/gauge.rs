//! Risk gauge
//!
//! Drawn imperatively from path primitives on a canvas model, then rendered
//! to SVG. The needle always sits in the low-risk position: the gauge does
//! not read the risk window.

use maud::{html, Markup};
use serde::Serialize;
use std::f64::consts::PI;

use crate::page::{element_ids, Page};

const GAUGE_RADIUS: f64 = 80.0;
const GAUGE_STROKE: f64 = 20.0;
const GAUGE_BASELINE_OFFSET: f64 = 20.0;
const LOW_BAND_SPAN: f64 = 0.3;
/// Fixed needle angle (1.15π), the middle of the low band
const NEEDLE_ANGLE: f64 = PI + PI * 0.15;
const NEEDLE_INSET: f64 = 10.0;
const HUB_RADIUS: f64 = 8.0;

const TRACK_COLOR: &str = "#e2e8f0";
const LOW_RISK_COLOR: &str = "#38a169";
const NEEDLE_COLOR: &str = "#1a365d";

/// One canvas drawing primitive
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Stroked clockwise arc from `start` to `end` (radians, canvas convention)
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
        stroke: &'static str,
        width: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &'static str,
        width: f64,
    },
    FilledCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        fill: &'static str,
    },
}

/// Drawing surface recording primitives in paint order
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn arc(
        &mut self,
        center: (f64, f64),
        radius: f64,
        start: f64,
        end: f64,
        stroke: &'static str,
        width: f64,
    ) {
        let (cx, cy) = center;
        self.ops.push(DrawOp::Arc {
            cx,
            cy,
            radius,
            start,
            end,
            stroke,
            width,
        });
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), stroke: &'static str, width: f64) {
        self.ops.push(DrawOp::Line {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            stroke,
            width,
        });
    }

    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, fill: &'static str) {
        self.ops.push(DrawOp::FilledCircle { cx, cy, radius, fill });
    }

    /// Render the recorded primitives as a standalone SVG document
    pub fn to_svg(&self) -> String {
        html! {
            svg xmlns="http://www.w3.org/2000/svg" width=(self.width) height=(self.height)
                viewBox=(format!("0 0 {} {}", self.width, self.height)) {
                @for op in &self.ops {
                    (svg_primitive(op))
                }
            }
        }
        .into_string()
    }
}

fn svg_primitive(op: &DrawOp) -> Markup {
    match *op {
        DrawOp::Arc { cx, cy, radius, start, end, stroke, width } => {
            let (x0, y0) = polar(cx, cy, radius, start);
            let (x1, y1) = polar(cx, cy, radius, end);
            let large_arc = u8::from((end - start).rem_euclid(2.0 * PI) > PI);
            let d = format!(
                "M {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2}"
            );
            html! { path d=(d) fill="none" stroke=(stroke) stroke-width=(width) {} }
        }
        DrawOp::Line { x1, y1, x2, y2, stroke, width } => html! {
            line x1=(format!("{x1:.2}")) y1=(format!("{y1:.2}")) x2=(format!("{x2:.2}")) y2=(format!("{y2:.2}"))
                stroke=(stroke) stroke-width=(width) {}
        },
        DrawOp::FilledCircle { cx, cy, radius, fill } => html! {
            circle cx=(format!("{cx:.2}")) cy=(format!("{cy:.2}")) r=(format!("{radius:.2}")) fill=(fill) {}
        },
    }
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + angle.cos() * radius, cy + angle.sin() * radius)
}

/// Half-dial gauge bound to the `riskGauge` canvas
#[derive(Debug, Clone, Default)]
pub struct RiskGauge {
    canvas: Option<Canvas>,
    draws: u64,
}

impl RiskGauge {
    pub fn new(page: &Page, width: f64, height: f64) -> Self {
        if !page.has_element(element_ids::RISK_GAUGE) {
            return Self::default();
        }
        Self {
            canvas: Some(Canvas::new(width, height)),
            draws: 0,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.canvas.is_some()
    }

    /// Paint track, low band, needle and hub. Returns `false` when unbound.
    pub fn draw(&mut self) -> bool {
        let Some(canvas) = self.canvas.as_mut() else {
            return false;
        };

        let cx = canvas.width / 2.0;
        let cy = canvas.height - GAUGE_BASELINE_OFFSET;

        canvas.clear();
        let low_end = PI + PI * LOW_BAND_SPAN;
        canvas.arc((cx, cy), GAUGE_RADIUS, PI, 0.0, TRACK_COLOR, GAUGE_STROKE);
        canvas.arc((cx, cy), GAUGE_RADIUS, PI, low_end, LOW_RISK_COLOR, GAUGE_STROKE);

        let needle = GAUGE_RADIUS - NEEDLE_INSET;
        canvas.line(
            (cx, cy),
            (cx + NEEDLE_ANGLE.cos() * needle, cy + NEEDLE_ANGLE.sin() * needle),
            NEEDLE_COLOR,
            3.0,
        );
        canvas.fill_circle(cx, cy, HUB_RADIUS, NEEDLE_COLOR);

        self.draws += 1;
        true
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn to_svg(&self) -> Option<String> {
        self.canvas.as_ref().map(Canvas::to_svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarkupConfig;

    fn gauge() -> RiskGauge {
        RiskGauge::new(&Page::new(&MarkupConfig::default()), 300.0, 150.0)
    }

    #[test]
    fn test_draw_records_four_primitives() {
        let mut g = gauge();
        assert!(g.draw());
        let ops = &g.canvas().unwrap().ops;
        assert_eq!(ops.len(), 4);
        assert!(matches!(ops[3], DrawOp::FilledCircle { radius, .. } if radius == HUB_RADIUS));
    }

    #[test]
    fn test_needle_is_fixed_across_redraws() {
        let mut g = gauge();
        g.draw();
        let first = g.canvas().unwrap().ops[2].clone();
        g.draw();
        g.draw();
        assert_eq!(g.canvas().unwrap().ops.len(), 4);
        assert_eq!(g.canvas().unwrap().ops[2], first);
        assert_eq!(g.draws(), 3);

        // Needle points up-left from centre (150, 130)
        if let DrawOp::Line { x1, y1, x2, y2, .. } = first {
            assert_eq!((x1, y1), (150.0, 130.0));
            assert!(x2 < x1 && y2 < y1);
        } else {
            panic!("expected needle line");
        }
    }

    #[test]
    fn test_svg_contains_track_and_hub() {
        let mut g = gauge();
        g.draw();
        let svg = g.to_svg().unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r##"stroke="#e2e8f0""##));
        assert!(svg.contains("<circle"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_unbound_gauge_does_not_draw() {
        let markup = MarkupConfig {
            elements: Vec::new(),
            ..MarkupConfig::default()
        };
        let mut g = RiskGauge::new(&Page::new(&markup), 300.0, 150.0);
        assert!(!g.draw());
        assert!(g.to_svg().is_none());
    }
}
