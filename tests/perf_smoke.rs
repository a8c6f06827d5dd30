use particula_rope::Rope;

#[test]
fn perf_smoke_ticks() {
    let mut rope = Rope::new();
    rope.enable_perf_metrics(true);
    rope.set_start(0.0, 10.0, 0.0);
    rope.set_end(8.0, 10.0, 2.0);

    for _ in 0..60 {
        rope.tick_physics(1.0 / 50.0);
        assert!(rope.tick_render());
    }

    let stats = rope.get_perf_stats();
    assert_eq!(stats.render_ticks(), 60);
    assert_eq!(stats.physics_ticks(), 60);
    assert!(stats.physics_ms() >= 0.0);
    assert!(stats.render_ms() >= 0.0);
}
