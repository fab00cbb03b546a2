//! Renders the whole catalogue to disk

use habitdoc_diagrams::{is_valid_png, DiagramKind, DiagramRenderer, FontSet, RenderOptions};

#[test]
fn test_every_diagram_is_written_as_png() {
    let dir = tempfile::tempdir().unwrap();
    let renderer = DiagramRenderer::new(dir.path(), FontSet::system());

    let rendered = renderer.render_all().unwrap();
    assert_eq!(rendered.len(), 15);

    for (diagram, kind) in rendered.iter().zip(DiagramKind::all()) {
        assert_eq!(diagram.kind, *kind);
        assert_eq!(diagram.path, dir.path().join(kind.file_name()));
        let bytes = std::fs::read(&diagram.path).unwrap();
        assert!(!bytes.is_empty(), "{kind}");
        assert!(is_valid_png(&bytes), "{kind}");
    }
}

#[test]
fn test_missing_fonts_are_reported_as_degraded() {
    let dir = tempfile::tempdir().unwrap();
    let fonts = FontSet::load(
        &dir.path().join("missing-regular.ttf"),
        &dir.path().join("missing-bold.ttf"),
    );
    let renderer = DiagramRenderer::new(dir.path().join("out"), fonts);

    let diagram = renderer.render(DiagramKind::Architecture).unwrap();
    assert!(diagram.degraded);
    assert!(diagram.path.exists());
}

#[test]
fn test_scaled_render_with_background() {
    let renderer = DiagramRenderer::new("unused", FontSet::system())
        .with_options(RenderOptions::new().with_scale(0.5).with_background("#FFFFFF"));

    let png = renderer.render_png(DiagramKind::RoutingDiagram).unwrap();
    assert!(is_valid_png(&png));
}
