use super::*;
use crate::config::VisualizerSettings;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

#[test]
fn frame_has_fixed_bar_count_within_ranges() {
    let shape = VisualizerShape::default();
    let mut rng = StdRng::seed_from_u64(7);
    let frame = VisualizerFrame::generate(&shape, &mut rng);

    assert_eq!(frame.bars().len(), 180);
    for bar in frame.bars() {
        assert!((5.0..=35.0).contains(&bar.length));
        assert!((0.5..=1.0).contains(&bar.opacity));
    }
}

#[test]
fn bars_are_evenly_spaced_around_the_circle() {
    let shape = VisualizerShape {
        bar_count: 4,
        ..VisualizerShape::default()
    };
    let frame = VisualizerFrame::generate(&shape, &mut StdRng::seed_from_u64(1));
    let angles: Vec<f64> = frame.bars().iter().map(|b| b.angle).collect();
    let quarter = std::f64::consts::FRAC_PI_2;
    for (i, a) in angles.iter().enumerate() {
        assert!((a - quarter * i as f64).abs() < 1e-12);
    }
}

#[test]
fn ring_radius_leaves_the_inset() {
    let shape = VisualizerShape::default();
    assert_eq!(shape.center(), (150.0, 150.0));
    assert_eq!(shape.radius(), 140.0);
}

#[test]
fn segment_starts_on_ring_and_reaches_outward() {
    let bar = Bar {
        angle: 0.0,
        length: 12.0,
        opacity: 0.8,
    };
    let seg = bar.segment((150.0, 150.0), 140.0);
    assert_eq!((seg.x1, seg.y1), (290.0, 150.0));
    assert_eq!((seg.x2, seg.y2), (302.0, 150.0));
    assert_eq!(seg.opacity, 0.8);
}

#[test]
fn collapsed_ranges_are_constant() {
    let shape = VisualizerShape {
        bar_min: 9.0,
        bar_max: 9.0,
        opacity_min: 1.0,
        opacity_max: 1.0,
        ..VisualizerShape::default()
    };
    let frame = VisualizerFrame::generate(&shape, &mut StdRng::seed_from_u64(3));
    assert!(frame.bars().iter().all(|b| b.length == 9.0 && b.opacity == 1.0));
}

#[test]
fn unbounded_ranges_fall_back_to_the_lower_end() {
    let shape = VisualizerShape {
        bar_max: f64::INFINITY,
        ..VisualizerShape::default()
    };
    let frame = VisualizerFrame::generate(&shape, &mut StdRng::seed_from_u64(3));
    assert!(frame.bars().iter().all(|b| b.length == shape.bar_min));
}

#[test]
fn visualizer_frames_start_and_stop() {
    let settings = VisualizerSettings::default();
    let mut vis = Visualizer::with_seed(&settings, 42);
    assert!(vis.frame().is_none());
    assert_eq!(vis.pulse(), 1.0);

    vis.on_frame(Duration::from_millis(16));
    let first = vis.frame().cloned().unwrap();
    vis.on_frame(Duration::from_millis(16));
    assert_ne!(vis.frame().unwrap(), &first);

    vis.stop();
    assert!(vis.frame().is_none());
    assert_eq!(vis.pulse(), 1.0);
}

#[test]
fn disc_makes_one_turn_per_revolution() {
    let settings = VisualizerSettings {
        revolution_secs: 2.0,
        ..VisualizerSettings::default()
    };
    let mut vis = Visualizer::with_seed(&settings, 0);
    vis.on_frame(Duration::from_millis(500));
    assert!((vis.disc_angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    vis.on_frame(Duration::from_millis(1500));
    assert!(vis.disc_angle() < 1e-9 || (std::f64::consts::TAU - vis.disc_angle()) < 1e-9);
}

#[test]
fn configured_seed_repeats_the_pattern() {
    let settings = VisualizerSettings {
        seed: Some(11),
        ..VisualizerSettings::default()
    };
    let mut a = Visualizer::new(&settings);
    let mut b = Visualizer::new(&settings);
    a.on_frame(Duration::from_millis(16));
    b.on_frame(Duration::from_millis(16));
    assert_eq!(a.frame(), b.frame());
}

proptest! {
    #[test]
    fn frames_honour_configured_shape(
        count in 1usize..400,
        lo in 0.0f64..50.0,
        span in 0.0f64..50.0,
        seed in any::<u64>(),
    ) {
        let shape = VisualizerShape {
            bar_count: count,
            bar_min: lo,
            bar_max: lo + span,
            ..VisualizerShape::default()
        };
        let frame = VisualizerFrame::generate(&shape, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(frame.bars().len(), count);
        for bar in frame.bars() {
            prop_assert!(bar.length >= lo && bar.length <= lo + span);
            prop_assert!(bar.opacity >= 0.5 && bar.opacity <= 1.0);
        }
    }
}
