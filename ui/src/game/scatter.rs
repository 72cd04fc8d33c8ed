//! Round/action scatter plot drawn as inline SVG.
//!
//! Geometry: a 600×400 canvas with margins `{20, 20, 30, 50}`; linear scales
//! fitted to the extent of the data, rounded to whole pixels; one green
//! circle of radius 5 per row, a row without an action sitting at action 0;
//! nice axis ticks. Hovering a circle fades in
//! a `(x, y)` tooltip near the pointer.

use dioxus::prelude::*;

use super::data::GameDataRow;
use crate::{i18n::use_locale, t};

pub const SVG_WIDTH: f64 = 600.0;
pub const SVG_HEIGHT: f64 = 400.0;
pub const MARGIN_TOP: f64 = 20.0;
pub const MARGIN_RIGHT: f64 = 20.0;
pub const MARGIN_BOTTOM: f64 = 30.0;
pub const MARGIN_LEFT: f64 = 50.0;
pub const POINT_RADIUS: f64 = 5.0;
pub const POINT_FILL: &str = "green";

const TICK_COUNT: usize = 10;
const TOOLTIP_OFFSET_X: f64 = 5.0;
const TOOLTIP_OFFSET_Y: f64 = -28.0;
const FADE_IN_MS: u32 = 200;
const FADE_OUT_MS: u32 = 500;
const TOOLTIP_OPACITY: f64 = 0.9;

/// `x` is the round, `y` the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionPoint {
    pub x: i64,
    pub y: i64,
}

/// One point per row, in row order. A missing action counts as 0.
pub fn action_points(rows: &[GameDataRow]) -> Vec<ActionPoint> {
    rows.iter()
        .map(|row| ActionPoint {
            x: row.round,
            y: row.action.unwrap_or(0),
        })
        .collect()
}

/// `[min, max]` of the finite values, `None` when there are none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Linear map from a data domain onto a pixel range, rounding outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: Option<(f64, f64)>,
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: Option<(f64, f64)>, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Pixel position of `value`; `None` without a domain. A single-valued
    /// domain maps everything to the middle of the range.
    pub fn apply(&self, value: f64) -> Option<f64> {
        let (d0, d1) = self.domain?;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        Some((r0 + (r1 - r0) * t).round())
    }

    /// Round-number ticks inside the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let Some((lo, hi)) = self.domain else {
            return Vec::new();
        };
        if lo == hi {
            return vec![lo];
        }
        let step = tick_step(lo, hi, count);
        if !step.is_finite() || step <= 0.0 {
            return Vec::new();
        }
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// 1, 2 or 5 times a power of ten, whichever lands nearest `count` ticks.
fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count.max(1) as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

fn tick_label(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub cx: f64,
    pub cy: f64,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

/// Everything needed to draw the plot, computed without touching the page.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterModel {
    pub x: LinearScale,
    pub y: LinearScale,
    pub markers: Vec<Marker>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

impl ScatterModel {
    pub fn inner_width() -> f64 {
        SVG_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    pub fn inner_height() -> f64 {
        SVG_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    pub fn build(points: &[ActionPoint]) -> Self {
        let x = LinearScale::new(
            extent(points.iter().map(|p| p.x as f64)),
            (0.0, Self::inner_width()),
        );
        let y = LinearScale::new(
            extent(points.iter().map(|p| p.y as f64)),
            (Self::inner_height(), 0.0),
        );

        let markers = points
            .iter()
            .filter_map(|point| {
                Some(Marker {
                    cx: x.apply(point.x as f64)?,
                    cy: y.apply(point.y as f64)?,
                    x: point.x,
                    y: point.y,
                })
            })
            .collect();

        let ticks_for = |scale: &LinearScale| -> Vec<Tick> {
            scale
                .ticks(TICK_COUNT)
                .into_iter()
                .filter_map(|value| {
                    Some(Tick {
                        offset: scale.apply(value)?,
                        label: tick_label(value),
                    })
                })
                .collect()
        };

        Self {
            x_ticks: ticks_for(&x),
            y_ticks: ticks_for(&y),
            x,
            y,
            markers,
        }
    }
}

/// Tooltip position and visibility. `left`/`top` are page coordinates, so
/// the tooltip must not sit inside a positioned box. Hiding keeps the last
/// position so the fade-out happens in place.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tooltip {
    visible: bool,
    left: f64,
    top: f64,
    x: i64,
    y: i64,
}

impl Tooltip {
    fn hidden() -> Self {
        Self {
            visible: false,
            left: 0.0,
            top: 0.0,
            x: 0,
            y: 0,
        }
    }

    fn show(marker: &Marker, page_x: f64, page_y: f64) -> Self {
        Self {
            visible: true,
            left: page_x + TOOLTIP_OFFSET_X,
            top: page_y + TOOLTIP_OFFSET_Y,
            x: marker.x,
            y: marker.y,
        }
    }

    fn style(&self) -> String {
        let (opacity, fade_ms) = if self.visible {
            (TOOLTIP_OPACITY, FADE_IN_MS)
        } else {
            (0.0, FADE_OUT_MS)
        };
        format!(
            "opacity: {opacity}; transition: opacity {fade_ms}ms; left: {}px; top: {}px;",
            self.left, self.top
        )
    }

    fn label(&self) -> String {
        format!("({}, {})", self.x, self.y)
    }
}

#[component]
pub fn ScatterPlot(points: Vec<ActionPoint>) -> Element {
    use_locale();
    let mut tooltip = use_signal(Tooltip::hidden);
    let model = ScatterModel::build(&points);
    let width = ScatterModel::inner_width();
    let height = ScatterModel::inner_height();
    let tip = tooltip();

    rsx! {
        svg {
            class: "session-plot",
            width: "{SVG_WIDTH}",
            height: "{SVG_HEIGHT}",
            style: "border: 1px solid lightgray;",
            g { transform: "translate({MARGIN_LEFT},{MARGIN_TOP})",
                g { class: "x axis", transform: "translate(0,{height})",
                    line { class: "domain", x1: "0", x2: "{width}", y1: "0", y2: "0", stroke: "currentColor" }
                    for tick in model.x_ticks.iter() {
                        g { key: "x{tick.offset}", class: "tick", transform: "translate({tick.offset},0)",
                            line { y2: "6", stroke: "currentColor" }
                            text { y: "9", dy: "0.71em", text_anchor: "middle", fill: "currentColor", "{tick.label}" }
                        }
                    }
                    text { class: "axis-label", x: "{width}", y: "-6", text_anchor: "end", fill: "#000",
                        {t!("axis-rounds")}
                    }
                }
                g { class: "y axis",
                    line { class: "domain", x1: "0", x2: "0", y1: "0", y2: "{height}", stroke: "currentColor" }
                    for tick in model.y_ticks.iter() {
                        g { key: "y{tick.offset}", class: "tick", transform: "translate(0,{tick.offset})",
                            line { x2: "-6", stroke: "currentColor" }
                            text { x: "-9", dy: "0.32em", text_anchor: "end", fill: "currentColor", "{tick.label}" }
                        }
                    }
                    text { class: "axis-label", transform: "rotate(-90)", y: "6", dy: "0.71em", text_anchor: "end", fill: "#000",
                        {t!("axis-actions")}
                    }
                }
                for (index, marker) in model.markers.into_iter().enumerate() {
                    circle {
                        key: "{index}",
                        cx: "{marker.cx}",
                        cy: "{marker.cy}",
                        r: "{POINT_RADIUS}",
                        fill: POINT_FILL,
                        onmouseover: {
                            let marker = marker.clone();
                            move |evt: MouseEvent| {
                                let page = evt.page_coordinates();
                                tooltip.set(Tooltip::show(&marker, page.x, page.y));
                            }
                        },
                        onmouseout: move |_| tooltip.with_mut(|tip| tip.visible = false),
                    }
                }
            }
        }
        div { class: "tooltip", style: "{tip.style()}", "{tip.label()}" }
    }
}
