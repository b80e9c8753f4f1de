use crate::app::rendering::Sprite;

use super::ConfigurationError;

/// Frame schedule driven by loop ticks, not wall-clock time. Each
/// frame carries its own duration in ticks; `remaining_repeats` of
/// `None` loops forever.
#[derive(Debug, Clone)]
pub struct AnimationSequence {
    frames: Vec<(Sprite, u32)>,
    frame_index: usize,
    ticks_until_next: u32,
    remaining_repeats: Option<u32>,
    finished: bool,
}

impl AnimationSequence {
    /// `frames` and `durations` must pair up one-to-one and in order.
    /// Zero frames and zero-tick durations are unconstructible.
    pub fn new(
        frames: Vec<Sprite>,
        durations: Vec<u32>,
        repetitions: Option<u32>,
    ) -> Result<Self, ConfigurationError> {
        if frames.len() != durations.len() {
            return Err(ConfigurationError::FrameDurationMismatch {
                frames: frames.len(),
                durations: durations.len(),
            });
        }
        if frames.is_empty() {
            return Err(ConfigurationError::EmptyAnimation);
        }
        if let Some(index) = durations.iter().position(|duration| *duration == 0) {
            return Err(ConfigurationError::ZeroFrameDuration { index });
        }

        let ticks_until_next = durations[0];
        Ok(Self {
            frames: frames.into_iter().zip(durations).collect(),
            frame_index: 0,
            ticks_until_next,
            remaining_repeats: repetitions,
            finished: repetitions == Some(0),
        })
    }

    /// Consumes one tick. When the countdown expires the frame index
    /// advances (wrapping); a wrap back to frame 0 consumes one
    /// repetition when the count is finite, and the sequence freezes on
    /// its current frame once the count runs out.
    pub fn advance(&mut self) {
        if self.finished {
            return;
        }
        self.ticks_until_next -= 1;
        if self.ticks_until_next > 0 {
            return;
        }

        self.frame_index = (self.frame_index + 1) % self.frames.len();
        self.ticks_until_next = self.frames[self.frame_index].1;
        if self.frame_index == 0 {
            if let Some(repeats) = &mut self.remaining_repeats {
                *repeats -= 1;
                if *repeats == 0 {
                    self.finished = true;
                }
            }
        }
    }

    /// Rewinds to frame 0 and reloads its countdown. Leaves the
    /// finished flag and repetition count untouched.
    pub fn reset(&mut self) {
        self.frame_index = 0;
        self.ticks_until_next = self.frames[0].1;
    }

    pub fn current_frame(&self) -> &Sprite {
        &self.frames[self.frame_index].0
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
