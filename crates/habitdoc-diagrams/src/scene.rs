//! Diagram scenes
//!
//! A [`Scene`] is a fixed-size canvas holding shapes at literal pixel
//! coordinates. It is serialized to SVG with the `svg` crate and then
//! rasterized; text is laid out by the rasterizer using the font family
//! chosen at render time.

use svg::node::element::{Ellipse, Line, Polygon, Polyline, Rectangle, Text};
use svg::Document;

use crate::palette;

/// Default corner radius for rounded rectangles
pub const DEFAULT_RADIUS: f32 = 10.0;

/// A point in pixels
pub type Point = (f32, f32);

/// `[x1, y1, x2, y2]` in pixels
pub type Bounds = [f32; 4];

/// How a label is positioned relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Centered horizontally and vertically
    Middle,
    /// Left edge, vertically centered
    LeftMiddle,
    /// Top-left corner
    TopLeft,
}

/// Font size and weight of a label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
}

impl TextStyle {
    pub const fn regular(size: f32) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: f32) -> Self {
        Self { size, bold: true }
    }

    fn line_height(&self) -> f32 {
        self.size * 1.2
    }
}

/// Stroke colour and width
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect {
        bounds: Bounds,
        radius: f32,
        fill: Option<String>,
        stroke: Option<Stroke>,
    },
    Ellipse {
        bounds: Bounds,
        fill: Option<String>,
        stroke: Option<Stroke>,
    },
    Line {
        points: Vec<Point>,
        stroke: Stroke,
        dashed: bool,
    },
    Polygon {
        points: Vec<Point>,
        fill: String,
        stroke: Option<Stroke>,
    },
    Label {
        at: Point,
        text: String,
        style: TextStyle,
        color: String,
        anchor: Anchor,
    },
}

/// A canvas of shapes drawn in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    width: u32,
    height: u32,
    background: String,
    shapes: Vec<Shape>,
}

fn stroke(color: &str, width: f32) -> Option<Stroke> {
    (width > 0.0).then(|| Stroke {
        color: color.to_string(),
        width,
    })
}

impl Scene {
    /// Empty canvas with the palette background
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: palette::BG.to_string(),
            shapes: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// All label texts in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Plain rectangle
    pub fn rect(&mut self, bounds: Bounds, fill: &str, outline: &str, width: f32) {
        self.shapes.push(Shape::Rect {
            bounds,
            radius: 0.0,
            fill: Some(fill.to_string()),
            stroke: stroke(outline, width),
        });
    }

    /// Rectangle with the default corner radius
    pub fn rounded_rect(&mut self, bounds: Bounds, fill: &str, outline: &str, width: f32) {
        self.rounded_rect_with_radius(bounds, DEFAULT_RADIUS, fill, outline, width);
    }

    pub fn rounded_rect_with_radius(
        &mut self,
        bounds: Bounds,
        radius: f32,
        fill: &str,
        outline: &str,
        width: f32,
    ) {
        self.shapes.push(Shape::Rect {
            bounds,
            radius,
            fill: Some(fill.to_string()),
            stroke: stroke(outline, width),
        });
    }

    /// Ellipse inscribed in `bounds`; `fill: None` leaves it hollow
    pub fn ellipse(&mut self, bounds: Bounds, fill: Option<&str>, outline: &str, width: f32) {
        self.shapes.push(Shape::Ellipse {
            bounds,
            fill: fill.map(str::to_string),
            stroke: stroke(outline, width),
        });
    }

    /// Straight segment or polyline through `points`
    pub fn line(&mut self, points: &[Point], color: &str, width: f32) {
        self.shapes.push(Shape::Line {
            points: points.to_vec(),
            stroke: Stroke {
                color: color.to_string(),
                width,
            },
            dashed: false,
        });
    }

    /// Dashed vertical lifeline from `y1` to `y2`
    pub fn lifeline(&mut self, x: f32, y1: f32, y2: f32, color: &str) {
        self.shapes.push(Shape::Line {
            points: vec![(x, y1), (x, y2)],
            stroke: Stroke {
                color: color.to_string(),
                width: 1.0,
            },
            dashed: true,
        });
    }

    /// Filled polygon without outline
    pub fn polygon(&mut self, points: &[Point], fill: &str) {
        self.shapes.push(Shape::Polygon {
            points: points.to_vec(),
            fill: fill.to_string(),
            stroke: None,
        });
    }

    /// Filled polygon with an outline (decision diamonds)
    pub fn outlined_polygon(&mut self, points: &[Point], fill: &str, outline: &str, width: f32) {
        self.shapes.push(Shape::Polygon {
            points: points.to_vec(),
            fill: fill.to_string(),
            stroke: stroke(outline, width),
        });
    }

    /// Triangular arrowhead at `tip` pointing away from `from`
    pub fn arrow_head(&mut self, from: Point, tip: Point, size: f32, color: &str) {
        let angle = (tip.1 - from.1).atan2(tip.0 - from.0);
        let spread = std::f32::consts::PI / 6.0;
        self.polygon(
            &[
                tip,
                (
                    tip.0 - size * (angle - spread).cos(),
                    tip.1 - size * (angle - spread).sin(),
                ),
                (
                    tip.0 - size * (angle + spread).cos(),
                    tip.1 - size * (angle + spread).sin(),
                ),
            ],
            color,
        );
    }

    /// Line with an arrowhead at its end
    pub fn arrow(&mut self, from: Point, to: Point, color: &str, width: f32, head: f32) {
        self.line(&[from, to], color, width);
        self.arrow_head(from, to, head, color);
    }

    /// Label with an explicit anchor; `\n` starts a new line
    pub fn label(
        &mut self,
        anchor: Anchor,
        at: Point,
        text: &str,
        style: TextStyle,
        color: &str,
    ) {
        self.shapes.push(Shape::Label {
            at,
            text: text.to_string(),
            style,
            color: color.to_string(),
            anchor,
        });
    }

    /// Label centered on `at`
    pub fn centered(&mut self, at: Point, text: &str, style: TextStyle, color: &str) {
        self.label(Anchor::Middle, at, text, style, color);
    }

    /// Label whose top-left corner is `at`
    pub fn text(&mut self, at: Point, text: &str, style: TextStyle, color: &str) {
        self.label(Anchor::TopLeft, at, text, style, color);
    }

    /// Serialize to an SVG document using `font_family` for every label
    pub fn to_svg(&self, font_family: &str) -> String {
        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {} {}", self.width, self.height))
            .set("width", self.width)
            .set("height", self.height)
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", self.width)
                    .set("height", self.height)
                    .set("fill", self.background.as_str()),
            );

        for shape in &self.shapes {
            doc = match shape {
                Shape::Rect {
                    bounds,
                    radius,
                    fill,
                    stroke,
                } => {
                    let [x1, y1, x2, y2] = *bounds;
                    let mut rect = Rectangle::new()
                        .set("x", x1)
                        .set("y", y1)
                        .set("width", x2 - x1)
                        .set("height", y2 - y1)
                        .set("fill", fill.as_deref().unwrap_or("none"));
                    if *radius > 0.0 {
                        rect = rect.set("rx", *radius).set("ry", *radius);
                    }
                    if let Some(s) = stroke {
                        rect = rect
                            .set("stroke", s.color.as_str())
                            .set("stroke-width", s.width);
                    }
                    doc.add(rect)
                }
                Shape::Ellipse {
                    bounds,
                    fill,
                    stroke,
                } => {
                    let [x1, y1, x2, y2] = *bounds;
                    let mut ellipse = Ellipse::new()
                        .set("cx", (x1 + x2) / 2.0)
                        .set("cy", (y1 + y2) / 2.0)
                        .set("rx", (x2 - x1) / 2.0)
                        .set("ry", (y2 - y1) / 2.0)
                        .set("fill", fill.as_deref().unwrap_or("none"));
                    if let Some(s) = stroke {
                        ellipse = ellipse
                            .set("stroke", s.color.as_str())
                            .set("stroke-width", s.width);
                    }
                    doc.add(ellipse)
                }
                Shape::Line {
                    points,
                    stroke,
                    dashed,
                } => match points.as_slice() {
                    [(x1, y1), (x2, y2)] => {
                        let mut line = Line::new()
                            .set("x1", *x1)
                            .set("y1", *y1)
                            .set("x2", *x2)
                            .set("y2", *y2)
                            .set("stroke", stroke.color.as_str())
                            .set("stroke-width", stroke.width);
                        if *dashed {
                            line = line.set("stroke-dasharray", "5 5");
                        }
                        doc.add(line)
                    }
                    _ => doc.add(
                        Polyline::new()
                            .set("points", points_attr(points))
                            .set("fill", "none")
                            .set("stroke", stroke.color.as_str())
                            .set("stroke-width", stroke.width),
                    ),
                },
                Shape::Polygon {
                    points,
                    fill,
                    stroke,
                } => {
                    let mut polygon = Polygon::new()
                        .set("points", points_attr(points))
                        .set("fill", fill.as_str());
                    if let Some(s) = stroke {
                        polygon = polygon
                            .set("stroke", s.color.as_str())
                            .set("stroke-width", s.width);
                    }
                    doc.add(polygon)
                }
                Shape::Label {
                    at,
                    text,
                    style,
                    color,
                    anchor,
                } => {
                    let lines: Vec<&str> = text.split('\n').collect();
                    let line_height = style.line_height();
                    let first_y = match anchor {
                        Anchor::Middle | Anchor::LeftMiddle => {
                            at.1 - line_height * (lines.len() as f32 - 1.0) / 2.0
                        }
                        Anchor::TopLeft => at.1,
                    };
                    let (text_anchor, baseline) = match anchor {
                        Anchor::Middle => ("middle", "central"),
                        Anchor::LeftMiddle => ("start", "central"),
                        Anchor::TopLeft => ("start", "hanging"),
                    };
                    for (i, line) in lines.iter().enumerate() {
                        let mut node = Text::new(*line)
                            .set("x", at.0)
                            .set("y", first_y + line_height * i as f32)
                            .set("text-anchor", text_anchor)
                            .set("dominant-baseline", baseline)
                            .set("font-family", font_family)
                            .set("font-size", style.size)
                            .set("fill", color.as_str());
                        if style.bold {
                            node = node.set("font-weight", "bold");
                        }
                        doc = doc.add(node);
                    }
                    doc
                }
            };
        }

        doc.to_string()
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_records_shapes_in_order() {
        let mut scene = Scene::new(200, 100);
        scene.rounded_rect(
            [10.0, 10.0, 90.0, 50.0],
            palette::SKY,
            palette::PRIMARY,
            2.0,
        );
        scene.centered(
            (50.0, 30.0),
            "App.jsx",
            TextStyle::regular(14.0),
            palette::TEXT,
        );

        assert_eq!(scene.shapes().len(), 2);
        assert!(matches!(
            scene.shapes()[0],
            Shape::Rect { radius, .. } if radius == DEFAULT_RADIUS
        ));
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["App.jsx"]);
    }

    #[test]
    fn test_svg_has_canvas_size_and_background() {
        let svg = Scene::new(300, 150).to_svg("DejaVu Sans");
        assert!(svg.contains(r#"viewBox="0 0 300 150""#));
        assert!(svg.contains(r##"fill="#FFFFFF""##));
    }

    #[test]
    fn test_multiline_label_becomes_one_text_per_line() {
        let mut scene = Scene::new(100, 100);
        scene.centered(
            (50.0, 50.0),
            "Логування\nпрогресу",
            TextStyle::bold(13.0),
            palette::TEXT,
        );
        let svg = scene.to_svg("DejaVu Sans");

        assert_eq!(svg.matches("<text").count(), 2);
        assert!(svg.contains("Логування"));
        assert!(svg.contains("прогресу"));
        assert!(svg.contains(r#"font-weight="bold""#));
        assert!(svg.contains(r#"font-family="DejaVu Sans""#));
    }

    #[test]
    fn test_label_text_is_escaped() {
        let mut scene = Scene::new(100, 100);
        scene.text(
            (0.0, 0.0),
            "- → List<Goal>",
            TextStyle::regular(10.0),
            palette::BORDER,
        );
        let svg = scene.to_svg("sans-serif");
        assert!(svg.contains("List&lt;Goal&gt;"));
    }

    #[test]
    fn test_lifeline_is_dashed() {
        let mut scene = Scene::new(100, 100);
        scene.lifeline(50.0, 10.0, 90.0, palette::BORDER);
        assert!(scene.to_svg("sans-serif").contains(r#"stroke-dasharray="5 5""#));
    }

    #[test]
    fn test_polyline_for_more_than_two_points() {
        let mut scene = Scene::new(100, 100);
        scene.line(
            &[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)],
            palette::BORDER,
            2.0,
        );
        assert!(scene.to_svg("sans-serif").contains("<polyline"));
    }

    #[test]
    fn test_arrow_head_points_along_the_line() {
        let mut scene = Scene::new(100, 100);
        scene.arrow_head((0.0, 50.0), (100.0, 50.0), 10.0, palette::BORDER);
        let Shape::Polygon { points, .. } = &scene.shapes()[0] else {
            panic!("expected polygon");
        };
        assert_eq!(points[0], (100.0, 50.0));
        assert!(points[1].0 < 100.0 && points[2].0 < 100.0);
        assert!((points[1].1 - 50.0).abs() - (points[2].1 - 50.0).abs() < 1e-3);
    }
}
