//! End-to-end layer building scenarios.

use approx::assert_relative_eq;
use sandwich_slice::{
    CrossSection, Extrusion, Placement2D, SliceError, SliceParams, build_layers, build_stack,
};

fn p(name: &str) -> Placement2D {
    Placement2D::new(name, 0.0, 0.0)
}

fn cross(names: &[&str]) -> CrossSection {
    names.iter().map(|n| p(n)).collect()
}

#[test]
fn single_extrusion_merges_into_one_layer() {
    let layers = build_layers(
        &[Extrusion::new(p("p1.svg"), 0.0, 2.0)],
        &SliceParams::whole_millimeter(),
    )
    .unwrap_or_default();

    assert_eq!(layers.len(), 1);
    assert_relative_eq!(layers[0].z_min, 0.0);
    assert_relative_eq!(layers[0].z_max, 2.0);
    assert_eq!(layers[0].cross_section, cross(&["p1.svg"]));
    assert_eq!(layers[0].slice_count, 2);
}

#[test]
fn stacked_extrusions_stay_separate() {
    let layers = build_layers(
        &[
            Extrusion::new(p("p1.svg"), 0.0, 1.0),
            Extrusion::new(p("p2.svg"), 1.0, 2.0),
        ],
        &SliceParams::whole_millimeter(),
    )
    .unwrap_or_default();

    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0].cross_section, cross(&["p1.svg"]));
    assert_relative_eq!(layers[0].z_max, 1.0);
    assert_eq!(layers[1].cross_section, cross(&["p2.svg"]));
    assert_relative_eq!(layers[1].z_min, 1.0);
    assert_relative_eq!(layers[1].z_max, 2.0);
}

#[test]
fn separated_equal_layers_are_not_merged() {
    let layers = build_layers(
        &[
            Extrusion::new(p("p1.svg"), 0.0, 1.0),
            Extrusion::new(p("p1.svg"), 2.0, 3.0),
        ],
        &SliceParams::whole_millimeter(),
    )
    .unwrap_or_default();

    assert_eq!(layers.len(), 3);
    assert_eq!(layers[0].cross_section, cross(&["p1.svg"]));
    assert!(layers[1].is_empty());
    assert_eq!(layers[2].cross_section, cross(&["p1.svg"]));
}

#[test]
fn empty_input_is_not_an_error() {
    for step in [0.1, 0.5, 1.0, 7.0] {
        let params = SliceParams::default().with_step(step);
        assert_eq!(build_layers(&[], &params), Ok(Vec::new()));
    }
}

#[test]
fn non_positive_step_is_rejected() {
    let input = [Extrusion::new(p("p1.svg"), 0.0, 1.0)];
    for step in [0.0, -0.5] {
        let result = build_layers(&input, &SliceParams::default().with_step(step));
        assert!(matches!(
            result,
            Err(SliceError::InvalidConfiguration { parameter: "step", .. })
        ));
    }
}

#[test]
fn inverted_extrusion_is_rejected() {
    let result = build_layers(
        &[
            Extrusion::new(p("p1.svg"), 0.0, 1.0),
            Extrusion::new(p("p2.svg"), 3.0, 2.0),
        ],
        &SliceParams::default(),
    );

    assert_eq!(
        result,
        Err(SliceError::InvalidExtrusion {
            index: 1,
            z_min: 3.0,
            z_max: 2.0,
        })
    );
}

#[test]
fn invalid_step_reported_before_invalid_extrusion() {
    let result = build_layers(
        &[Extrusion::new(p("p1.svg"), 3.0, 2.0)],
        &SliceParams::default().with_step(-1.0),
    );
    assert!(matches!(result, Err(SliceError::InvalidConfiguration { .. })));
}

#[test]
fn repeated_runs_are_identical() {
    let input = [
        Extrusion::new(Placement2D::new("base.svg", 0.0, 0.0), 0.0, 3.0),
        Extrusion::new(Placement2D::new("hole.svg", 10.0, 10.0), 0.5, 2.0),
        Extrusion::new(Placement2D::new("lid.svg", 0.0, 0.0), 2.5, 3.0),
    ];
    let params = SliceParams::default();

    let first = build_layers(&input, &params);
    let second = build_layers(&input, &params);
    assert!(first.is_ok());
    assert_eq!(first, second);
}

#[test]
fn box_with_window_and_lid() {
    // Base sheet all the way up, a window cut between 0.5 and 2.0, a lid
    // on the top half millimeter.
    let base = Placement2D::new("base.svg", 0.0, 0.0);
    let window = Placement2D::new("window.svg", 10.0, 10.0);
    let lid = Placement2D::new("lid.svg", 0.0, 0.0);

    let stack = build_stack(
        &[
            Extrusion::new(base.clone(), 0.0, 3.0),
            Extrusion::new(window.clone(), 0.5, 2.0),
            Extrusion::new(lid.clone(), 2.5, 3.0),
        ],
        &SliceParams::default(),
    );
    let Ok(stack) = stack else {
        panic!("valid input must build");
    };

    assert_eq!(stack.slice_count, 6);
    assert_eq!(stack.layer_count(), 4);
    assert_relative_eq!(stack.total_height, 3.0);

    let expected: [(f64, f64, CrossSection); 4] = [
        (0.0, 0.5, vec![base.clone()].into()),
        (0.5, 2.0, vec![base.clone(), window].into()),
        (2.0, 2.5, vec![base.clone()].into()),
        (2.5, 3.0, vec![base, lid].into()),
    ];
    for (layer, (z_min, z_max, cs)) in stack.layers.iter().zip(expected) {
        assert_relative_eq!(layer.z_min, z_min);
        assert_relative_eq!(layer.z_max, z_max);
        assert_eq!(layer.cross_section, cs);
    }
}

#[test]
fn same_shape_at_different_offsets_differs() {
    let layers = build_layers(
        &[
            Extrusion::new(Placement2D::new("peg.svg", 0.0, 0.0), 0.0, 1.0),
            Extrusion::new(Placement2D::new("peg.svg", 5.0, 0.0), 1.0, 2.0),
        ],
        &SliceParams::whole_millimeter(),
    )
    .unwrap_or_default();

    assert_eq!(layers.len(), 2);
}

#[test]
fn extrusions_sharing_a_placement_merge_into_one_layer() {
    // The first extrusion ends mid-slice, the second starts on the next
    // boundary: every slice holds the placement exactly once.
    let layers = build_layers(
        &[
            Extrusion::new(p("shape-0.svg"), 0.0, 5.25),
            Extrusion::new(p("shape-0.svg"), 6.0, 6.25),
        ],
        &SliceParams::whole_millimeter(),
    )
    .unwrap_or_default();

    assert_eq!(layers.len(), 1);
    assert_relative_eq!(layers[0].z_min, 0.0);
    assert_relative_eq!(layers[0].z_max, 6.25);
    assert_eq!(layers[0].slice_count, 7);
    assert_eq!(layers[0].cross_section, cross(&["shape-0.svg"]));
}

#[test]
fn non_finite_offset_is_rejected() {
    let result = build_layers(
        &[
            Extrusion::new(p("p1.svg"), 0.0, 1.0),
            Extrusion::new(Placement2D::new("a.svg", f64::NAN, 0.0), 0.0, 2.0),
        ],
        &SliceParams::whole_millimeter(),
    );

    assert!(matches!(
        result,
        Err(SliceError::InvalidPlacement { index: 1, .. })
    ));
}
