//! Free-fly camera update: cursor offset turns the view, held keys move the
//! eye along the view and right vectors.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec2, Vec3};

use crate::camera::core::{CameraState, ViewProjection};

/// One of the four directional movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along the view direction.
    Forward,
    /// Against the view direction.
    Backward,
    /// Against the right vector.
    StrafeLeft,
    /// Along the right vector.
    StrafeRight,
}

impl MoveDirection {
    const fn bit(self) -> u8 {
        match self {
            Self::Forward => 1,
            Self::Backward => 1 << 1,
            Self::StrafeLeft => 1 << 2,
            Self::StrafeRight => 1 << 3,
        }
    }
}

/// Set of currently-held movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys(u8);

impl HeldKeys {
    /// No keys held.
    pub const NONE: Self = Self(0);

    /// Build a set from a list of directions.
    #[must_use]
    pub fn from_directions(dirs: &[MoveDirection]) -> Self {
        let mut keys = Self::NONE;
        for dir in dirs {
            keys.insert(*dir);
        }
        keys
    }

    /// Mark `dir` as held.
    pub fn insert(&mut self, dir: MoveDirection) {
        self.0 |= dir.bit();
    }

    /// Mark `dir` as released.
    pub fn remove(&mut self, dir: MoveDirection) {
        self.0 &= !dir.bit();
    }

    /// Whether `dir` is held.
    #[must_use]
    pub const fn contains(self, dir: MoveDirection) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Whether nothing is held.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Per-frame input snapshot handed to [`advance`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous update.
    pub elapsed: f32,
    /// Viewport center minus cursor position, in pixels. Positive x means
    /// the cursor sits left of center, positive y above it.
    pub cursor_delta: Vec2,
    /// Movement keys held this frame.
    pub held: HeldKeys,
}

impl FrameInput {
    /// Snapshot from an absolute cursor position. The center uses integer
    /// halving of the viewport size.
    #[must_use]
    pub fn from_cursor(
        elapsed: f32,
        cursor: Vec2,
        width: u32,
        height: u32,
        held: HeldKeys,
    ) -> Self {
        let center = Vec2::new((width / 2) as f32, (height / 2) as f32);
        Self {
            elapsed,
            cursor_delta: center - cursor,
            held,
        }
    }
}

/// Unit look direction for a yaw/pitch pair.
#[must_use]
pub fn direction(horizontal: f32, vertical: f32) -> Vec3 {
    Vec3::new(
        vertical.cos() * horizontal.sin(),
        vertical.sin(),
        vertical.cos() * horizontal.cos(),
    )
}

/// Horizontal right vector for a yaw. Its y component is always zero.
#[must_use]
pub fn right(horizontal: f32) -> Vec3 {
    let h = horizontal - FRAC_PI_2;
    Vec3::new(h.sin(), 0.0, h.cos())
}

/// Advance the camera by one frame and return fresh view/projection
/// matrices.
///
/// Orientation is updated first, so movement this frame follows the new
/// direction. Simultaneous keys add up; diagonal movement is faster than
/// movement along one axis.
pub fn advance(
    state: &mut CameraState,
    input: &FrameInput,
    viewport_width: u32,
    viewport_height: u32,
) -> ViewProjection {
    state.horizontal_angle += state.sensitivity * input.cursor_delta.x;
    state.vertical_angle += state.sensitivity * input.cursor_delta.y;
    if let Some(limit) = state.pitch_limit {
        state.vertical_angle = state.vertical_angle.clamp(-limit, limit);
    }

    let direction = direction(state.horizontal_angle, state.vertical_angle);
    let right = right(state.horizontal_angle);
    let up = right.cross(direction);

    let step = input.elapsed * state.speed;
    let held = input.held;
    if held.contains(MoveDirection::Forward) {
        state.position += direction * step;
    }
    if held.contains(MoveDirection::Backward) {
        state.position -= direction * step;
    }
    if held.contains(MoveDirection::StrafeRight) {
        state.position += right * step;
    }
    if held.contains(MoveDirection::StrafeLeft) {
        state.position -= right * step;
    }

    let aspect = state.aspect.resolve(viewport_width, viewport_height);
    let projection = Mat4::perspective_rh(
        state.fov_degrees.to_radians(),
        aspect,
        state.znear,
        state.zfar,
    );
    let view =
        Mat4::look_at_rh(state.position, state.position + direction, up);

    ViewProjection { view, projection }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;
    use crate::camera::core::AspectMode;

    const EPS: f32 = 1e-5;

    fn forward_only(elapsed: f32) -> FrameInput {
        FrameInput {
            elapsed,
            cursor_delta: Vec2::ZERO,
            held: HeldKeys::from_directions(&[MoveDirection::Forward]),
        }
    }

    #[test]
    fn noop_tick_leaves_state_unchanged() {
        let mut state = CameraState::default();
        let before = state.clone();
        let _ = advance(&mut state, &FrameInput::default(), 1024, 768);
        assert_eq!(state, before);
    }

    #[test]
    fn repeated_noop_ticks_match_single_tick() {
        let mut once = CameraState::default();
        let mut twice = CameraState::default();
        let a = advance(&mut once, &FrameInput::default(), 1024, 768);
        let _ = advance(&mut twice, &FrameInput::default(), 1024, 768);
        let b = advance(&mut twice, &FrameInput::default(), 1024, 768);
        assert_eq!(once, twice);
        assert_eq!(a, b);
    }

    #[test]
    fn direction_is_unit_length() {
        for i in -20..=20 {
            for j in -20..=20 {
                let h = i as f32 * 0.37;
                let v = j as f32 * 0.29;
                let len = direction(h, v).length();
                assert!((len - 1.0).abs() < 1e-6, "h={h} v={v} len={len}");
            }
        }
    }

    #[test]
    fn right_vector_is_horizontal() {
        for i in -50..=50 {
            let h = i as f32 * 0.13;
            assert_eq!(right(h).y, 0.0);
        }
    }

    #[test]
    fn forward_moves_along_direction() {
        let mut state = CameraState {
            horizontal_angle: 0.7,
            vertical_angle: 0.2,
            ..CameraState::default()
        };
        let start = state.position;
        let dir = direction(0.7, 0.2);
        let _ = advance(&mut state, &forward_only(0.25), 1024, 768);
        let expected = start + dir * 0.25 * state.speed;
        assert!((state.position - expected).length() < EPS);
    }

    #[test]
    fn one_second_forward_from_default() {
        let mut state = CameraState::default();
        let _ = advance(&mut state, &forward_only(1.0), 1024, 768);
        assert!((state.position - Vec3::new(0.0, 0.0, 2.0)).length() < EPS);
    }

    #[test]
    fn cursor_offset_accumulates_linearly() {
        let mut state = CameraState::default();
        let old = state.horizontal_angle;
        // 0.00005 * 2000 = 0.1
        let input = FrameInput {
            cursor_delta: Vec2::new(2000.0, 0.0),
            ..FrameInput::default()
        };
        let _ = advance(&mut state, &input, 1024, 768);
        assert!((state.horizontal_angle - (old + 0.1)).abs() < 1e-6);
        assert_eq!(state.vertical_angle, 0.0);
    }

    #[test]
    fn cursor_at_center_produces_no_turn() {
        let input = FrameInput::from_cursor(
            0.016,
            Vec2::new(512.0, 384.0),
            1024,
            768,
            HeldKeys::NONE,
        );
        assert_eq!(input.cursor_delta, Vec2::ZERO);
    }

    #[test]
    fn cursor_left_of_center_turns_left() {
        let input = FrameInput::from_cursor(
            0.0,
            Vec2::new(500.0, 400.0),
            1024,
            768,
            HeldKeys::NONE,
        );
        assert_eq!(input.cursor_delta, Vec2::new(12.0, -16.0));
    }

    #[test]
    fn odd_viewport_center_uses_integer_halving() {
        let input = FrameInput::from_cursor(
            0.0,
            Vec2::new(512.0, 383.0),
            1025,
            767,
            HeldKeys::NONE,
        );
        assert_eq!(input.cursor_delta, Vec2::ZERO);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut state = CameraState::default();
        let start = state.position;
        let input = FrameInput {
            elapsed: 1.0,
            cursor_delta: Vec2::ZERO,
            held: HeldKeys::from_directions(&[
                MoveDirection::Forward,
                MoveDirection::Backward,
                MoveDirection::StrafeLeft,
                MoveDirection::StrafeRight,
            ]),
        };
        let _ = advance(&mut state, &input, 1024, 768);
        assert!((state.position - start).length() < EPS);
    }

    #[test]
    fn diagonal_movement_is_not_normalised() {
        let mut state = CameraState::default();
        let start = state.position;
        let input = FrameInput {
            elapsed: 1.0,
            cursor_delta: Vec2::ZERO,
            held: HeldKeys::from_directions(&[
                MoveDirection::Forward,
                MoveDirection::StrafeRight,
            ]),
        };
        let _ = advance(&mut state, &input, 1024, 768);
        let moved = (state.position - start).length();
        assert!((moved - 3.0 * 2.0_f32.sqrt()).abs() < EPS);
    }

    #[test]
    fn strafe_right_from_default_heads_toward_positive_x() {
        // Looking down -Z, right is +X.
        let mut state = CameraState::default();
        let input = FrameInput {
            elapsed: 1.0,
            cursor_delta: Vec2::ZERO,
            held: HeldKeys::from_directions(&[MoveDirection::StrafeRight]),
        };
        let _ = advance(&mut state, &input, 1024, 768);
        assert!((state.position - Vec3::new(3.0, 0.0, 5.0)).length() < EPS);
    }

    #[test]
    fn pitch_is_clamped_when_limited() {
        let mut state = CameraState::default();
        let limit = state.pitch_limit.unwrap_or(0.0);
        let input = FrameInput {
            cursor_delta: Vec2::new(0.0, 1.0e6),
            ..FrameInput::default()
        };
        let vp = advance(&mut state, &input, 1024, 768);
        assert_eq!(state.vertical_angle, limit);
        assert!(vp.view.is_finite());
    }

    #[test]
    fn pitch_drifts_freely_without_limit() {
        let mut state = CameraState {
            pitch_limit: None,
            ..CameraState::default()
        };
        let input = FrameInput {
            cursor_delta: Vec2::new(0.0, 100_000.0),
            ..FrameInput::default()
        };
        let _ = advance(&mut state, &input, 1024, 768);
        assert!((state.vertical_angle - 5.0).abs() < 1e-4);
    }

    #[test]
    fn view_looks_down_direction() {
        let mut state = CameraState::default();
        let vp = advance(&mut state, &FrameInput::default(), 1024, 768);
        // A point straight ahead lands on the camera's -Z axis.
        let ahead = state.position + Vec3::new(0.0, 0.0, -1.0);
        let p = vp.view.transform_point3(ahead);
        assert!((p - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn projection_follows_aspect_mode() {
        let mut viewport = CameraState::default();
        let mut fixed = CameraState {
            aspect: AspectMode::Fixed(4.0 / 3.0),
            ..CameraState::default()
        };
        let a = advance(&mut viewport, &FrameInput::default(), 1600, 900);
        let b = advance(&mut fixed, &FrameInput::default(), 1600, 900);
        let expected_a = Mat4::perspective_rh(
            45.0_f32.to_radians(),
            1600.0 / 900.0,
            0.1,
            100.0,
        );
        let expected_b =
            Mat4::perspective_rh(45.0_f32.to_radians(), 4.0 / 3.0, 0.1, 100.0);
        assert!(a.projection.abs_diff_eq(expected_a, 1e-6));
        assert!(b.projection.abs_diff_eq(expected_b, 1e-6));
    }

    #[test]
    fn half_turn_reverses_direction() {
        let d0 = direction(PI, 0.0);
        let d1 = direction(0.0, 0.0);
        assert!((d0 + d1).length() < EPS);
    }

    #[test]
    fn held_keys_insert_remove() {
        let mut keys = HeldKeys::NONE;
        assert!(keys.is_empty());
        keys.insert(MoveDirection::StrafeLeft);
        assert!(keys.contains(MoveDirection::StrafeLeft));
        assert!(!keys.contains(MoveDirection::Forward));
        keys.remove(MoveDirection::StrafeLeft);
        assert!(keys.is_empty());
    }
}
