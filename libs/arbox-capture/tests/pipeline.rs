use arbox_capture::{
    outline_from_corners, CaptureError, CornerAccumulator, Extent, HeightSource, PlaneObservation,
    PlaneSession,
};
use arbox_geometry::CYLINDER_AXIS;
use glam::DVec3;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn plane_flow_produces_outline_and_report() {
    init_tracing();

    let mut session = PlaneSession::new();
    session.observe(PlaneObservation::horizontal(DVec3::ZERO, Extent::new(2.0, 1.0)));
    session.observe(PlaneObservation::vertical(
        DVec3::new(0.4, 0.5, 0.0),
        Extent::new(0.5, 0.5),
    ));

    let outline = session.outline(HeightSource::VerticalPlaneDerived).unwrap();
    assert_eq!(outline.segments.len(), 12);
    assert!((outline.measurements.volume - 1.0).abs() < 1e-9);
    assert_eq!(
        outline.report().to_string(),
        "Width: 2.00 m\nDepth: 1.00 m\nHeight: 0.50 m\nVolume: 1.00 m³"
    );
}

#[test]
fn plane_flow_falls_back_to_default_height() {
    let mut session = PlaneSession::new();
    session.observe(PlaneObservation::horizontal(DVec3::ZERO, Extent::new(1.0, 1.0)));

    let outline = session.outline(HeightSource::VerticalPlaneDerived).unwrap();
    assert!((outline.measurements.height - 0.3).abs() < 1e-9);
}

#[test]
fn tap_flow_builds_outline_from_eight_corners() {
    let corners = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(1.0, 0.0, 1.0),
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(0.0, 1.0, 1.0),
    ];

    let mut accumulator = CornerAccumulator::new();
    for corner in corners {
        accumulator.push(corner).unwrap();
    }
    let frame = accumulator.into_frame().unwrap();

    let outline = arbox_capture::BoxOutline::build(&frame);
    assert!((outline.measurements.volume - 1.0).abs() < 1e-9);

    // Every rendered cylinder must actually span its edge.
    for segment in &outline.segments {
        let rebuilt = segment.rotation() * (CYLINDER_AXIS * segment.length());
        assert!((rebuilt - segment.direction()).length() < 1e-9);
    }
}

#[test]
fn tap_flow_rejects_incomplete_collection() {
    let mut accumulator = CornerAccumulator::new();
    accumulator.push(DVec3::ZERO).unwrap();
    assert_eq!(
        accumulator.into_frame().unwrap_err(),
        CaptureError::Incomplete { collected: 1 }
    );
}

#[test]
fn corner_shortcut_matches_accumulated_flow() {
    let corners: Vec<DVec3> = (0..8).map(|i| DVec3::splat(i as f64)).collect();
    let direct = outline_from_corners(&corners).unwrap();

    let mut accumulator = CornerAccumulator::new();
    for corner in &corners {
        accumulator.push(*corner).unwrap();
    }
    let accumulated = arbox_capture::BoxOutline::build(&accumulator.into_frame().unwrap());

    assert_eq!(direct, accumulated);
}

#[test]
fn wrong_corner_count_surfaces_geometry_error() {
    let err = outline_from_corners(&[DVec3::ZERO; 4]).unwrap_err();
    assert!(matches!(err, CaptureError::Geometry(_)));
}
