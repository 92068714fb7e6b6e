//! Game session lifecycle
//!
//! A `Session` owns the collaborators (audio, renderer, pointer source) and,
//! between `start` and `stop`, the game state. The scheduler calls `frame`
//! with the current timestamp once per display refresh.

use crate::audio::AudioFeedback;
use crate::input::{PointerSink, PointerSource};
use crate::renderer::Renderer;
use crate::sim::{GameEvent, GameState, Snapshot, TickInput, tick};

/// State that only exists while the session runs
#[derive(Debug, Clone, Copy)]
struct Running {
    state: GameState,
    prev_time_ms: f64,
}

pub struct Session<A, R, P> {
    audio: A,
    renderer: R,
    pointer: P,
    sink: PointerSink,
    running: Option<Running>,
}

impl<A, R, P> Session<A, R, P>
where
    A: AudioFeedback,
    R: Renderer,
    P: PointerSource,
{
    pub fn new(audio: A, renderer: R, pointer: P) -> Self {
        Self {
            audio,
            renderer,
            pointer,
            sink: PointerSink::new(),
            running: None,
        }
    }

    /// Allocate fresh state and start listening for pointer motion
    ///
    /// # Panics
    /// If the session is already running.
    pub fn start(&mut self, now_ms: f64) {
        assert!(
            self.running.is_none(),
            "Session::start called on a running session"
        );

        // Motion from before the game existed must not move the paddles
        self.sink.drain();
        self.pointer.attach(self.sink.clone());
        self.running = Some(Running {
            state: GameState::new(),
            prev_time_ms: now_ms,
        });

        log::info!("Session started");
    }

    /// Stop ticking and detach input. Calling it twice is harmless.
    pub fn stop(&mut self) {
        self.pointer.detach();
        if let Some(running) = self.running.take() {
            log::info!(
                "Session stopped at {}",
                running.state.snapshot().score_line()
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Advance the game to `now_ms`, play its events and draw it
    ///
    /// # Panics
    /// If called before `start` or after `stop`.
    pub fn frame(&mut self, now_ms: f64) -> Snapshot {
        let Some(running) = self.running.as_mut() else {
            panic!("Session::frame called outside start()/stop()");
        };

        // NaN and clock hiccups both collapse to a zero-length tick
        let elapsed_ms = (now_ms - running.prev_time_ms).max(0.0) as f32;
        running.prev_time_ms = now_ms.max(running.prev_time_ms);

        let input = TickInput {
            elapsed_ms,
            pointer: self.sink.drain(),
        };
        let outcome = tick(&running.state, &input);
        running.state = outcome.state;

        let snapshot = running.state.snapshot();
        for event in &outcome.events {
            if *event == GameEvent::Score {
                log::info!("Point scored: {}", snapshot.score_line());
            }
            self.audio.play(*event);
        }
        self.renderer.draw(&snapshot);

        snapshot
    }

    /// Current game state, if running
    pub fn state(&self) -> Option<&GameState> {
        self.running.as_ref().map(|r| &r.state)
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn pointer(&self) -> &P {
        &self.pointer
    }
}
