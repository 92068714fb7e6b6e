//! Pointer input accumulation
//!
//! Mouse events arrive whenever the platform delivers them; the simulation
//! consumes them once per tick. `PointerSink` sits in between: sources push
//! deltas into it and the session drains it. Draining swaps the total for
//! zero under the lock, so every delta lands in exactly one tick.

use std::sync::{Arc, Mutex, MutexGuard};

use glam::Vec2;

/// Shared accumulator for relative pointer motion (pixels)
#[derive(Debug, Clone, Default)]
pub struct PointerSink {
    pending: Arc<Mutex<Vec2>>,
}

impl PointerSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A panic elsewhere can't leave a `Vec2` half-written, so a poisoned
    /// lock is still usable
    fn lock(&self) -> MutexGuard<'_, Vec2> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Add one pointer sample. Non-finite components are ignored.
    pub fn push(&self, dx: f32, dy: f32) {
        let dx = if dx.is_finite() { dx } else { 0.0 };
        let dy = if dy.is_finite() { dy } else { 0.0 };
        *self.lock() += Vec2::new(dx, dy);
    }

    /// Take everything accumulated since the last drain
    pub fn drain(&self) -> Vec2 {
        std::mem::take(&mut *self.lock())
    }

    /// Accumulated motion without consuming it
    pub fn peek(&self) -> Vec2 {
        *self.lock()
    }
}

/// Something that produces pointer motion, e.g. a DOM `mousemove` listener
pub trait PointerSource {
    /// Start delivering deltas into `sink`
    fn attach(&mut self, sink: PointerSink);
    /// Stop delivering deltas. Must be safe to call when not attached.
    fn detach(&mut self);
}

/// Source driven by hand, for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct ManualPointer {
    sink: Option<PointerSink>,
}

impl ManualPointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.sink.is_some()
    }

    /// Simulate a mouse movement. Dropped while detached, like a removed
    /// event listener.
    pub fn move_by(&self, dx: f32, dy: f32) {
        if let Some(sink) = &self.sink {
            sink.push(dx, dy);
        }
    }
}

impl PointerSource for ManualPointer {
    fn attach(&mut self, sink: PointerSink) {
        self.sink = Some(sink);
    }

    fn detach(&mut self) {
        self.sink = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_accumulates() {
        let sink = PointerSink::new();
        sink.push(3.0, -1.0);
        sink.push(2.0, 4.0);
        assert_eq!(sink.peek(), Vec2::new(5.0, 3.0));
    }

    #[test]
    fn test_drain_consumes_once() {
        let sink = PointerSink::new();
        sink.push(7.0, 1.0);
        assert_eq!(sink.drain(), Vec2::new(7.0, 1.0));
        assert_eq!(sink.drain(), Vec2::ZERO);
    }

    #[test]
    fn test_clones_share_storage() {
        let sink = PointerSink::new();
        let producer = sink.clone();
        producer.push(1.0, 2.0);
        assert_eq!(sink.drain(), Vec2::new(1.0, 2.0));
        assert_eq!(producer.peek(), Vec2::ZERO);
    }

    #[test]
    fn test_non_finite_ignored() {
        let sink = PointerSink::new();
        sink.push(f32::NAN, 2.0);
        sink.push(1.0, f32::INFINITY);
        assert_eq!(sink.drain(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_concurrent_pushes_all_land() {
        let sink = PointerSink::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let sink = sink.clone();
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        sink.push(1.0, -1.0);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(sink.drain(), Vec2::new(1000.0, -1000.0));
    }

    #[test]
    fn test_manual_pointer_detach() {
        let sink = PointerSink::new();
        let mut pointer = ManualPointer::new();
        pointer.move_by(5.0, 5.0);
        assert_eq!(sink.peek(), Vec2::ZERO);

        pointer.attach(sink.clone());
        assert!(pointer.is_attached());
        pointer.move_by(5.0, 5.0);
        assert_eq!(sink.peek(), Vec2::new(5.0, 5.0));

        pointer.detach();
        pointer.move_by(5.0, 5.0);
        assert_eq!(sink.peek(), Vec2::new(5.0, 5.0));
    }
}
