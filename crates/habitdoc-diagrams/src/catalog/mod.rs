//! The fifteen report diagrams
//!
//! Every scene is a pure function of its kind: fixed canvas, literal
//! coordinates, palette colours.

mod behavior;
mod data;
mod sequence;
mod structure;

use crate::palette;
use crate::scene::{Point, Scene, TextStyle};
use crate::types::DiagramKind;

/// Title style shared by most diagrams
const TITLE: TextStyle = TextStyle::bold(24.0);

/// Build the scene for one diagram
pub fn scene(kind: DiagramKind) -> Scene {
    match kind {
        DiagramKind::Architecture => structure::architecture(),
        DiagramKind::UseCase => behavior::usecase(),
        DiagramKind::ErDiagram => data::er_diagram(),
        DiagramKind::Sequence => sequence::authentication(),
        DiagramKind::ClassDiagram => data::class_diagram(),
        DiagramKind::ComponentDiagram => structure::components(),
        DiagramKind::DeploymentDiagram => structure::deployment(),
        DiagramKind::StateDiagram => behavior::goal_states(),
        DiagramKind::ActivityDiagram => behavior::goal_activity(),
        DiagramKind::SequenceProgress => sequence::progress_logging(),
        DiagramKind::SequenceGroup => sequence::group_joining(),
        DiagramKind::ApiEndpoints => data::api_endpoints(),
        DiagramKind::DataflowDiagram => behavior::dataflow(),
        DiagramKind::PackageDiagram => structure::packages(),
        DiagramKind::RoutingDiagram => structure::routing(),
    }
}

/// Blank canvas with a centered title
fn canvas(width: u32, height: u32, title: &str, style: TextStyle, title_y: f32) -> Scene {
    let mut scene = Scene::new(width, height);
    scene.centered((width as f32 / 2.0, title_y), title, style, palette::TEXT);
    scene
}

/// Top-left anchored lines at a fixed vertical step
fn column(
    scene: &mut Scene,
    origin: Point,
    step: f32,
    lines: &[&str],
    style: TextStyle,
    color: &str,
) {
    for (i, line) in lines.iter().enumerate() {
        scene.text((origin.0, origin.1 + step * i as f32), line, style, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Shape;

    #[test]
    fn test_canvas_sizes() {
        let expected = [
            (1200, 800),
            (1000, 900),
            (1100, 750),
            (1000, 850),
            (1200, 900),
            (1100, 850),
            (1200, 900),
            (1100, 800),
            (900, 1100),
            (1000, 800),
            (1100, 850),
            (1200, 1000),
            (1100, 900),
            (1100, 900),
            (1000, 900),
        ];
        for (kind, (w, h)) in DiagramKind::all().iter().zip(expected) {
            let scene = scene(*kind);
            assert_eq!((scene.width(), scene.height()), (w, h), "{kind}");
        }
    }

    #[test]
    fn test_every_scene_starts_with_its_title() {
        for kind in DiagramKind::all() {
            let scene = scene(*kind);
            assert!(scene.shapes().len() > 5, "{kind}");
            let Shape::Label { at, style, .. } = &scene.shapes()[0] else {
                panic!("{kind} does not start with a title");
            };
            assert_eq!(at.0, scene.width() as f32 / 2.0);
            assert!(style.bold);
        }
    }

    #[test]
    fn test_shapes_stay_on_canvas() {
        for kind in DiagramKind::all() {
            let scene = scene(*kind);
            let (w, h) = (scene.width() as f32, scene.height() as f32);
            for shape in scene.shapes() {
                if let Shape::Rect { bounds, .. } | Shape::Ellipse { bounds, .. } = shape {
                    assert!(bounds[0] >= 0.0 && bounds[2] <= w, "{kind}: {bounds:?}");
                    assert!(bounds[1] >= 0.0 && bounds[3] <= h, "{kind}: {bounds:?}");
                    assert!(bounds[0] < bounds[2] && bounds[1] < bounds[3], "{kind}");
                }
            }
        }
    }

    #[test]
    fn test_scenes_are_deterministic() {
        for kind in DiagramKind::all() {
            assert_eq!(scene(*kind), scene(*kind));
        }
    }

    #[test]
    fn test_column_steps_down() {
        let mut scene = Scene::new(100, 100);
        column(
            &mut scene,
            (10.0, 20.0),
            15.0,
            &["a", "b"],
            TextStyle::regular(11.0),
            palette::TEXT,
        );
        let Shape::Label { at, .. } = &scene.shapes()[1] else {
            panic!("expected label");
        };
        assert_eq!(*at, (10.0, 35.0));
    }
}
