//! Per-kind FIFO motion channel.
//!
//! One channel exists per command kind. A channel is Idle until its queue
//! has a command; activation pops the front, captures the start snapshot,
//! and fixes the absolute end timestamp. While active, every update
//! evaluates the command at clamped progress and retires it once progress
//! reaches 1. Only one command per channel is ever active; separate
//! channels animate concurrently within a single frame.

use std::collections::VecDeque;

use crate::command::Motion;
use crate::pose::Pose;

/// A dequeued command with its activation snapshot and fixed time span.
struct ActiveMotion<M: Motion> {
    command: M,
    start: M::Start,
    start_time: f32,
    end_time: f32,
}

/// Normalized progress through `[start, end]` at `now`, clamped to [0, 1].
///
/// A zero or negative span evaluates to 1 immediately, so zero-duration
/// commands jump to their target on the first tick instead of dividing by
/// zero.
fn progress(start: f32, end: f32, now: f32) -> f32 {
    if end <= start {
        return 1.0;
    }
    ((now - start) / (end - start)).clamp(0.0, 1.0)
}

/// FIFO queue plus the single in-flight command slot for one motion kind.
pub(crate) struct MotionChannel<M: Motion> {
    queue: VecDeque<M>,
    active: Option<ActiveMotion<M>>,
}

impl<M: Motion> Default for MotionChannel<M> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            active: None,
        }
    }
}

impl<M: Motion> MotionChannel<M> {
    /// Append a pending command. Never blocks; queue depth is unbounded.
    pub fn enqueue(&mut self, command: M) {
        self.queue.push_back(command);
    }

    /// Advance the channel by one frame at time `now`.
    ///
    /// Activates the next queued command if the slot is free, skipping
    /// degenerate commands, then applies the active command at its current
    /// progress and retires it once complete.
    pub fn update(&mut self, pose: &mut Pose, now: f32) {
        if self.active.is_none() {
            while let Some(command) = self.queue.pop_front() {
                match command.begin(pose) {
                    Some(start) => {
                        let end_time = now + command.duration();
                        self.active = Some(ActiveMotion {
                            command,
                            start,
                            start_time: now,
                            end_time,
                        });
                        break;
                    }
                    None => {
                        tracing::debug!(
                            kind = std::any::type_name::<M>(),
                            "skipping degenerate motion command"
                        );
                    }
                }
            }
        }

        let Some(active) = self.active.as_ref() else {
            return;
        };
        let t = progress(active.start_time, active.end_time, now);
        active.command.apply(&active.start, pose, t);
        if t >= 1.0 {
            self.active = None;
        }
    }

    /// Number of commands still waiting in the queue.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// True when no command is active and the queue is empty.
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.queue.is_empty()
    }
}
