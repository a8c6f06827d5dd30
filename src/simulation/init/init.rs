use crate::domain::config::RopeConfig;
use crate::systems::curve::compute_target;
use crate::systems::sag::SagState;

use super::perf_stats::PerfStats;
use super::RopeCore;

/// `config` must already be validated
pub(super) fn create_rope_core(config: RopeConfig) -> RopeCore {
    RopeCore {
        config,
        start: None,
        end: None,
        sag: SagState::default(),
        seeded: false,
        physics_ticks: 0,
        render_ticks: 0,
        points: Vec::with_capacity(config.segment_count as usize + 1),
        attachment_enabled: false,
        attachment: None,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Seed the sag at rest on the anchors' target height, once both are known.
pub(super) fn seed_if_needed(rope: &mut RopeCore) {
    if rope.seeded {
        return;
    }
    let (Some(start), Some(end)) = (rope.start, rope.end) else {
        return;
    };

    let target = compute_target(start, end, &rope.config);
    rope.sag = SagState::seeded(target.target_value);
    rope.seeded = true;
    crate::console_log!(
        "rope: seeded sag at {:.3} (span {:.3}, rest length {:.3})",
        target.target_value,
        start.distance(end),
        rope.config.rest_length
    );
}
