use crate::domain::config::RopeConfig;

use super::RopeCore;

pub(super) fn set_config(rope: &mut RopeCore, config: RopeConfig) -> Result<(), String> {
    rope.config = config.validate()?;
    Ok(())
}

pub(super) fn set_attachment_enabled(rope: &mut RopeCore, enabled: bool) {
    rope.attachment_enabled = enabled;
    if !enabled {
        rope.attachment = None;
    }
}

pub(super) fn enable_perf_metrics(rope: &mut RopeCore, enabled: bool) {
    rope.perf_enabled = enabled;
    if !enabled {
        rope.perf_stats.reset();
    }
}
