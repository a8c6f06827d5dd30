use crate::systems::sag::{advance, SagStep};

use super::{PerfTimer, RopeCore};

pub(super) fn tick_physics(rope: &mut RopeCore, dt: f32) -> Option<SagStep> {
    if !rope.seeded || !dt.is_finite() || dt <= 0.0 {
        return None;
    }

    let timer = PerfTimer::start_if(rope.perf_enabled);

    // Chase the target from the last render tick
    let target = rope.sag.target_value;
    let step = advance(dt, target, &rope.config, &mut rope.sag);
    rope.physics_ticks += 1;

    if let Some(t0) = timer {
        let stats = &mut rope.perf_stats;
        stats.physics_ms = t0.elapsed_ms();
        stats.physics_ticks = stats.physics_ticks.saturating_add(1);
        stats.settled = step == SagStep::Settled;
        if stats.settled {
            stats.settled_ticks = stats.settled_ticks.saturating_add(1);
        }
    }

    Some(step)
}
