//! Keyframe animation over a node's transform.
//!
//! An [`Animation`] holds an ordered list of [`KeyFrame`]s, each
//! describing a translation along and a rotation about one of the node's
//! own axes, spread over a duration. It runs as a [`Behavior`]: attach it
//! to the node it should move.

use glam::Vec3;

use crate::scene::behavior::Behavior;
use crate::scene::{NodeHandle, Scene};

/// A direction in the node's own frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Forward,
    Backward,
    Up,
    Down,
    Left,
    Right,
}

impl Axis {
    /// Unit vector in the node's local basis (-Z forward, +Y up, +X right).
    #[must_use]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::Forward => Vec3::NEG_Z,
            Axis::Backward => Vec3::Z,
            Axis::Up => Vec3::Y,
            Axis::Down => Vec3::NEG_Y,
            Axis::Right => Vec3::X,
            Axis::Left => Vec3::NEG_X,
        }
    }
}

/// One segment of an animation: move `translation` units along
/// `translation_axis` and turn `rotation` radians about `rotation_axis`,
/// spread evenly over `duration` seconds.
#[derive(Debug, Clone, Copy)]
pub struct KeyFrame {
    pub translation: f32,
    pub translation_axis: Axis,
    /// Radians.
    pub rotation: f32,
    pub rotation_axis: Axis,
    /// Seconds. Non-positive durations complete in a single update.
    pub duration: f32,
}

impl KeyFrame {
    #[must_use]
    pub fn new(
        translation: f32,
        translation_axis: Axis,
        rotation: f32,
        rotation_axis: Axis,
        duration: f32,
    ) -> Self {
        Self {
            translation,
            translation_axis,
            rotation,
            rotation_axis,
            duration,
        }
    }
}

/// Plays a list of keyframes once, then stops.
#[derive(Debug, Default)]
pub struct Animation {
    frames: Vec<KeyFrame>,
    current: usize,
    started: bool,
    finished: bool,
    frame_start: f32,
    /// Fraction of the current frame already applied to the transform.
    applied: f32,
}

impl Animation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_key_frame(&mut self, frame: KeyFrame) {
        self.frames.push(frame);
    }

    #[must_use]
    pub fn with_key_frame(mut self, frame: KeyFrame) -> Self {
        self.frames.push(frame);
        self
    }

    #[inline]
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether there are frames left to play.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.finished && !self.frames.is_empty()
    }

    /// Rewinds to the first frame; the next update restarts playback.
    pub fn reset(&mut self) {
        self.current = 0;
        self.started = false;
        self.finished = false;
        self.applied = 0.0;
    }

    fn apply_step(scene: &mut Scene, node: NodeHandle, frame: &KeyFrame, step: f32) {
        scene.offset_rotation(node, frame.rotation_axis.unit(), frame.rotation * step);

        // Translate along the node's (freshly rotated) orientation
        let orientation = match scene.get_node(node) {
            Some(n) => n.transform.rotation,
            None => return,
        };
        let delta = orientation * frame.translation_axis.unit() * (frame.translation * step);
        scene.offset_position(node, delta);
    }
}

impl Behavior for Animation {
    fn update(&mut self, scene: &mut Scene, node: NodeHandle, time: f32, _dt: f32) {
        if self.finished || self.frames.is_empty() {
            return;
        }

        if !self.started {
            self.started = true;
            self.frame_start = time;
            self.applied = 0.0;
        }

        let frame = self.frames[self.current];
        let elapsed = time - self.frame_start;
        let progress = if frame.duration > 0.0 {
            (elapsed / frame.duration).min(1.0)
        } else {
            1.0
        };

        let step = progress - self.applied;
        if step > 0.0 {
            Self::apply_step(scene, node, &frame, step);
            self.applied = progress;
        }

        if progress >= 1.0 {
            self.current += 1;
            if self.current >= self.frames.len() {
                self.finished = true;
            } else {
                self.frame_start = time;
                self.applied = 0.0;
            }
        }
    }
}
