use particula_rope::systems::{advance, compute_target, sample};
use particula_rope::{Rope, RopeBatch, RopeConfig, SagState, SagStep, Vec3};

#[test]
fn facade_emits_flat_points_ending_on_anchor() {
    let mut rope = Rope::new();
    assert!(!rope.tick_render());
    assert!(rope.points().is_empty());

    rope.set_start(1.0, 5.0, -1.0);
    rope.set_end(7.0, 3.0, 2.0);
    assert!(rope.tick_render());

    let points = rope.points();
    // Default config: 10 segments
    assert_eq!(rope.point_count(), 11);
    assert_eq!(points.len(), 33);
    assert_eq!(rope.points_len(), 33);
    assert_eq!(&points[..3], &[1.0, 5.0, -1.0]);
    assert_eq!(&points[30..], &[7.0, 3.0, 2.0]);
    assert!(!rope.points_ptr().is_null());
}

#[test]
fn facade_clearing_an_anchor_skips_render_but_keeps_state() {
    let mut rope = Rope::new();
    rope.set_start(0.0, 0.0, 0.0);
    rope.set_end(10.0, 0.0, 0.0);
    assert!(rope.at_rest());
    assert_eq!(rope.current_value(), -5.0);

    rope.clear_end();
    assert!(!rope.tick_render());
    assert!(rope.target_midpoint().is_empty());
    assert_eq!(rope.current_value(), -5.0);

    rope.set_end(10.0, 0.0, 0.0);
    assert!(rope.tick_render());
    assert_eq!(rope.target_midpoint(), vec![5.0, -5.0, 0.0]);
}

#[test]
fn facade_attachment_follows_curve_midpoint() {
    let mut rope = Rope::new();
    rope.set_attachment_enabled(true);
    assert!(rope.attachment().is_empty());

    rope.set_start(0.0, 0.0, 0.0);
    rope.set_end(10.0, 0.0, 0.0);
    rope.tick_render();
    assert_eq!(rope.attachment(), vec![5.0, -2.5, 0.0]);
}

#[test]
fn facade_config_round_trips_through_json() {
    let mut rope = Rope::new();
    rope.load_config_json(r#"{ "segmentCount": 3, "restLength": 2.0 }"#.to_string())
        .unwrap();
    let json = rope.get_config_json();
    let config = RopeConfig::from_json(&json).unwrap();
    assert_eq!(config.segment_count, 3);
    assert_eq!(config.rest_length, 2.0);
}

#[test]
fn slackening_rope_swings_down_then_settles() {
    let mut rope = Rope::new();
    rope.load_config_json(r#"{ "stiffness": 1.0, "damping": 2.0 }"#.to_string())
        .unwrap();
    rope.set_start(0.0, 0.0, 0.0);
    rope.set_end(20.0, 0.0, 0.0);
    assert_eq!(rope.current_value(), 0.0);

    rope.set_end(10.0, 0.0, 0.0);
    rope.tick_render();
    assert_eq!(rope.target_value(), -5.0);

    let mut ticks = 0;
    while rope.tick_physics(0.02) {
        ticks += 1;
        assert!(ticks < 500, "still moving after {} ticks", ticks);
        rope.tick_render();
    }
    assert!(rope.at_rest());
    assert_eq!(rope.current_value(), -5.0);
    assert_eq!(rope.velocity(), 0.0);
}

#[test]
fn batch_renders_only_anchored_ropes() {
    let mut batch = RopeBatch::new();
    let a = batch.add_rope();
    let b = batch.add_rope();
    let _unanchored = batch.add_rope();
    assert_eq!(batch.len(), 3);

    assert!(batch.set_anchors(a, 0.0, 0.0, 0.0, 10.0, 0.0, 0.0));
    assert!(batch.set_anchors(b, 0.0, 2.0, 0.0, 0.0, 2.0, 30.0));
    assert!(!batch.set_anchors(7, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0));

    assert_eq!(batch.tick_render(), 2);
    // Both seeded at rest: nothing to integrate
    assert_eq!(batch.tick_physics(0.02), 0);

    assert_eq!(batch.points(a).len(), 33);
    assert!(batch.points(7).is_empty());
}

#[test]
fn standalone_pipeline_without_rope_core() {
    let config = RopeConfig::new().with_stiffness(1.0).with_damping(2.0).with_segment_count(8);
    let start = Vec3::new(0.0, 3.0, 0.0);
    let end = Vec3::new(6.0, 3.0, 0.0);

    let target = compute_target(start, end, &config);
    assert_eq!(target.sag_amount, 9.0);
    assert_eq!(target.target_value, -6.0);

    let mut state = SagState::seeded(3.0);
    state.target_value = target.target_value;
    let mut steps = 0;
    while advance(0.02, state.target_value, &config, &mut state) == SagStep::Moving {
        steps += 1;
        assert!(steps < 1000);
    }
    assert_eq!(state.current_value, -6.0);

    let points = sample(start, target.control_point(state.current_value), end, config.segment_count);
    assert_eq!(points.len(), 9);
    assert_eq!(points[8], end);
    assert!(points[4].y < 3.0);
}
