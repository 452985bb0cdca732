use std::time::Duration;

use instant::Instant;
use serde::{Deserialize, Serialize};

use crate::{Algorithm, Session};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

/// Auto-play settings as they appear in a run description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSettings {
    pub delay_ms: u64,
    #[serde(default)]
    pub autoplay: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY.as_millis() as u64,
            autoplay: false,
        }
    }
}

/// Auto-play scheduler driven by an external clock.
///
/// The owner calls [`Playback::poll`] from its frame or timer callback. A
/// poll takes at most one step, and only once `delay` has passed since the
/// previous one, so steps never overlap. Playback pauses itself when the run
/// completes.
#[derive(Debug, Clone)]
pub struct Playback {
    delay: Duration,
    running: bool,
    last_step: Option<Instant>,
    steps_taken: u64,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl From<PlaybackSettings> for Playback {
    fn from(s: PlaybackSettings) -> Self {
        let mut p = Self::new(Duration::from_millis(s.delay_ms));
        if s.autoplay {
            p.play();
        }
        p
    }
}

impl Playback {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            running: false,
            last_step: None,
            steps_taken: 0,
        }
    }

    /// Starts playing. The next poll steps immediately.
    pub fn play(&mut self) {
        self.running = true;
        self.last_step = None;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Takes effect from the next poll.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Steps taken by this scheduler since it was created.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Time left until the next step is due, zero when it is due now.
    /// `None` while paused.
    pub fn time_to_next(&self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        Some(match self.last_step {
            None => Duration::ZERO,
            Some(last) => self.delay.saturating_sub(now.saturating_duration_since(last)),
        })
    }

    /// Steps `session` if playing and due. Returns whether a step was taken.
    pub fn poll<A: Algorithm>(&mut self, now: Instant, session: &mut Session<A>) -> bool {
        if session.is_complete() {
            if self.running {
                log::debug!("playback stopped, run complete");
            }
            self.running = false;
            return false;
        }
        if self.time_to_next(now) != Some(Duration::ZERO) {
            return false;
        }

        session.step_forward();
        self.last_step = Some(now);
        self.steps_taken += 1;
        if session.is_complete() {
            log::debug!("playback stopped after {} steps", self.steps_taken);
            self.running = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate, Bfs, VertexId};

    fn session() -> Session<Bfs> {
        Session::new(generate::binary_tree(3), Bfs::new(), VertexId::new(0), None).unwrap()
    }

    #[test]
    fn paused_playback_never_steps() {
        let mut s = session();
        let mut p = Playback::new(Duration::from_millis(10));
        assert!(!p.poll(Instant::now(), &mut s));
        assert_eq!(s.history_len(), 0);
        assert_eq!(p.time_to_next(Instant::now()), None);
    }

    #[test]
    fn steps_once_per_delay() {
        let mut s = session();
        let mut p = Playback::new(Duration::from_millis(100));
        p.play();

        let t0 = Instant::now();
        assert!(p.poll(t0, &mut s));
        assert!(!p.poll(t0 + Duration::from_millis(50), &mut s));
        assert_eq!(
            p.time_to_next(t0 + Duration::from_millis(50)),
            Some(Duration::from_millis(50))
        );
        assert!(p.poll(t0 + Duration::from_millis(100), &mut s));
        assert_eq!(s.history_len(), 2);
        assert_eq!(p.steps_taken(), 2);
    }

    #[test]
    fn stops_when_run_completes() {
        let mut s = session();
        let mut p = Playback::new(Duration::ZERO);
        p.play();

        let t = Instant::now();
        let mut polls = 0;
        while p.poll(t, &mut s) {
            polls += 1;
        }
        assert!(s.is_complete());
        assert!(!p.is_running());
        // three dequeues and the empty-queue step
        assert_eq!(polls, 4);
    }

    #[test]
    fn toggle_and_settings() {
        let mut p = Playback::from(PlaybackSettings {
            delay_ms: 250,
            autoplay: true,
        });
        assert!(p.is_running());
        assert_eq!(p.delay(), Duration::from_millis(250));
        p.toggle();
        assert!(!p.is_running());

        let parsed: PlaybackSettings = serde_json::from_str(r#"{"delayMs": 40}"#).unwrap();
        assert_eq!(parsed.delay_ms, 40);
        assert!(!parsed.autoplay);
    }
}
