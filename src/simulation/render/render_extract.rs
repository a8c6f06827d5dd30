use crate::domain::vec3::Vec3;
use crate::systems::curve::{bezier_point, compute_target, sample_into};

use super::{PerfTimer, RopeCore};

pub(super) fn tick_render<'a>(rope: &'a mut RopeCore, slot: Option<&mut Vec3>) -> Option<&'a [Vec3]> {
    let (Some(start), Some(end)) = (rope.start, rope.end) else {
        if rope.perf_enabled {
            rope.perf_stats.skipped_renders = rope.perf_stats.skipped_renders.saturating_add(1);
        }
        return None;
    };

    let timer = PerfTimer::start_if(rope.perf_enabled);

    let target = compute_target(start, end, &rope.config);
    rope.sag.target_value = target.target_value;
    let control = target.control_point(rope.sag.current_value);

    if rope.attachment_enabled || slot.is_some() {
        let mid = bezier_point(start, control, end, 0.5);
        if rope.attachment_enabled {
            rope.attachment = Some(mid);
        }
        if let Some(slot) = slot {
            *slot = mid;
        }
    }

    sample_into(start, control, end, rope.config.segment_count, &mut rope.points);
    rope.render_ticks += 1;

    if let Some(t0) = timer {
        let stats = &mut rope.perf_stats;
        stats.render_ms = t0.elapsed_ms();
        stats.render_ticks = stats.render_ticks.saturating_add(1);
        stats.points_written = rope.points.len() as u32;
    }

    Some(rope.points.as_slice())
}

/// Packed xyz floats, valid until the next render tick
pub(super) fn points_ptr(rope: &RopeCore) -> *const f32 {
    rope.points.as_ptr() as *const f32
}

pub(super) fn target_midpoint(rope: &RopeCore) -> Option<Vec3> {
    let (start, end) = (rope.start?, rope.end?);
    Some(compute_target(start, end, &rope.config).target_point())
}
