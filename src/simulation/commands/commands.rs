use crate::domain::vec3::Vec3;
use crate::systems::sag::SagState;

use super::init::seed_if_needed;
use super::RopeCore;

pub(super) fn set_start(rope: &mut RopeCore, start: Option<Vec3>) {
    rope.start = start;
    seed_if_needed(rope);
}

pub(super) fn set_end(rope: &mut RopeCore, end: Option<Vec3>) {
    rope.end = end;
    seed_if_needed(rope);
}

pub(super) fn set_anchors(rope: &mut RopeCore, start: Option<Vec3>, end: Option<Vec3>) {
    rope.start = start;
    rope.end = end;
    seed_if_needed(rope);
}

pub(super) fn reinitialize(rope: &mut RopeCore) {
    rope.sag = SagState::default();
    rope.seeded = false;
    rope.attachment = None;
    rope.points.clear();
    seed_if_needed(rope);
}
