//! Frame scheduler
//!
//! The single owner of all time-based animation. The host render loop calls
//! [`FrameScheduler::tick`] once per display frame; the scheduler advances
//! every live tween, applies the interpolated values, then runs the
//! registered per-tick callbacks. There is no background thread; ticking is
//! cooperative and single-threaded.
//!
//! Tweens are registered under a logical [`TweenTarget`]; registering a new
//! tween for a target removes any in-flight tween for the same target, so
//! the last request always wins.
//!
//! Components hold a [`SchedulerHandle`] (a weak reference). Every handle
//! operation is a silent no-op once the scheduler is gone, and tick
//! registrations unsubscribe when their [`TickHandle`] drops.

use crate::tween::Tween;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use vibejam_core::Vec3;

new_key_type! {
    /// Handle to a registered tween
    pub struct TweenId;
    /// Handle to a registered tick callback
    pub struct TickCallbackId;
}

/// Logical animation target identifier
///
/// Consumers define their own target constants; two tweens with the same
/// target cannot be in flight at once.
pub type TweenTarget = u32;

/// Per-frame timing passed to tick callbacks
#[derive(Clone, Copy, Debug)]
pub struct FrameTick {
    /// Total elapsed time in seconds
    pub elapsed: f32,
    /// Time since last frame in seconds
    pub dt: f32,
}

type ApplyFn = Box<dyn FnMut(Vec3) + Send>;
type TickFn = Box<dyn FnMut(&FrameTick) + Send>;

struct ActiveTween {
    target: TweenTarget,
    tween: Tween<Vec3>,
    apply: ApplyFn,
}

struct SchedulerInner {
    tweens: SlotMap<TweenId, ActiveTween>,
    by_target: FxHashMap<TweenTarget, TweenId>,
    /// `None` while a callback is taken out for invocation, so user code can
    /// re-enter the scheduler (e.g. drop a `TickHandle`) without deadlock
    callbacks: SlotMap<TickCallbackId, Option<TickFn>>,
    elapsed: f32,
}

impl SchedulerInner {
    fn drive(
        &mut self,
        target: TweenTarget,
        tween: Tween<Vec3>,
        apply: ApplyFn,
    ) -> TweenId {
        if let Some(old) = self.by_target.remove(&target) {
            tracing::debug!(target_id = target, "replacing in-flight tween");
            self.tweens.remove(old);
        }
        let id = self.tweens.insert(ActiveTween {
            target,
            tween,
            apply,
        });
        self.by_target.insert(target, id);
        id
    }

    fn cancel(&mut self, target: TweenTarget) -> bool {
        match self.by_target.remove(&target) {
            Some(id) => self.tweens.remove(id).is_some(),
            None => false,
        }
    }

    fn step_tweens(&mut self, dt: f32) {
        let mut finished = Vec::new();
        for (id, active) in self.tweens.iter_mut() {
            active.tween.tick(dt);
            let value = active.tween.value();
            (active.apply)(value);
            if active.tween.is_finished() {
                finished.push(id);
            }
        }
        for id in finished {
            if let Some(active) = self.tweens.remove(id) {
                if self.by_target.get(&active.target) == Some(&id) {
                    self.by_target.remove(&active.target);
                }
            }
        }
    }
}

/// The scheduler that ticks all tweens and per-frame callbacks
pub struct FrameScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                tweens: SlotMap::with_key(),
                by_target: FxHashMap::default(),
                callbacks: SlotMap::with_key(),
                elapsed: 0.0,
            })),
        }
    }

    /// Get a weak handle for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance one frame
    ///
    /// Steps every live tween (applying the interpolated value, with the
    /// exact end value on the completing step), prunes finished tweens, then
    /// invokes tick callbacks in registration order.
    pub fn tick(&self, dt: f32) {
        let frame = {
            let mut inner = self.inner.lock().unwrap();
            inner.elapsed += dt;
            let frame = FrameTick {
                elapsed: inner.elapsed,
                dt,
            };
            inner.step_tweens(dt);
            frame
        };

        // Callbacks are taken out of their slot while running so they may
        // register or unregister other callbacks without deadlocking.
        let ids: Vec<TickCallbackId> = {
            let inner = self.inner.lock().unwrap();
            inner.callbacks.keys().collect()
        };
        for id in ids {
            let taken = {
                let mut inner = self.inner.lock().unwrap();
                inner.callbacks.get_mut(id).and_then(|slot| slot.take())
            };
            if let Some(mut callback) = taken {
                callback(&frame);
                let mut inner = self.inner.lock().unwrap();
                if let Some(slot) = inner.callbacks.get_mut(id) {
                    *slot = Some(callback);
                }
                // If the slot is gone the callback was unregistered while
                // running; it drops here.
            }
        }
    }

    /// Start a tween for a logical target, cancelling any in-flight tween
    /// with the same target
    ///
    /// `apply` is invoked with the interpolated value on every tick. It runs
    /// inside the scheduler's tick and must not call back into the
    /// scheduler.
    pub fn drive(
        &self,
        target: TweenTarget,
        tween: Tween<Vec3>,
        apply: impl FnMut(Vec3) + Send + 'static,
    ) -> TweenId {
        self.inner
            .lock()
            .unwrap()
            .drive(target, tween, Box::new(apply))
    }

    /// Cancel the in-flight tween for a target, if any
    pub fn cancel(&self, target: TweenTarget) -> bool {
        self.inner.lock().unwrap().cancel(target)
    }

    /// Register a per-tick callback; dropping the returned handle
    /// unregisters it
    pub fn on_tick(&self, callback: impl FnMut(&FrameTick) + Send + 'static) -> TickHandle {
        let id = self
            .inner
            .lock()
            .unwrap()
            .callbacks
            .insert(Some(Box::new(callback)));
        TickHandle {
            handle: self.handle(),
            id,
        }
    }

    /// Number of live tweens
    pub fn tween_count(&self) -> usize {
        self.inner.lock().unwrap().tweens.len()
    }

    /// Whether any tween is still in flight
    pub fn has_active_tweens(&self) -> bool {
        self.tween_count() > 0
    }

    /// Total elapsed time in seconds
    pub fn elapsed(&self) -> f32 {
        self.inner.lock().unwrap().elapsed
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the frame scheduler
///
/// Passed to components that need to start tweens or register callbacks.
/// It won't prevent the scheduler from being dropped.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Start a tween for a logical target (see [`FrameScheduler::drive`])
    pub fn drive(
        &self,
        target: TweenTarget,
        tween: Tween<Vec3>,
        apply: impl FnMut(Vec3) + Send + 'static,
    ) -> Option<TweenId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().drive(target, tween, Box::new(apply)))
    }

    /// Cancel the in-flight tween for a target, if any
    pub fn cancel(&self, target: TweenTarget) -> bool {
        match self.inner.upgrade() {
            Some(inner) => inner.lock().unwrap().cancel(target),
            None => false,
        }
    }

    /// Register a per-tick callback; dropping the returned handle
    /// unregisters it
    pub fn on_tick(
        &self,
        callback: impl FnMut(&FrameTick) + Send + 'static,
    ) -> Option<TickHandle> {
        self.inner.upgrade().map(|inner| {
            let id = inner
                .lock()
                .unwrap()
                .callbacks
                .insert(Some(Box::new(callback)));
            TickHandle {
                handle: self.clone(),
                id,
            }
        })
    }

    fn remove_tick(&self, id: TickCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().callbacks.remove(id);
        }
    }

    /// Total elapsed time in seconds
    pub fn elapsed(&self) -> Option<f32> {
        self.inner.upgrade().map(|inner| inner.lock().unwrap().elapsed)
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

/// RAII guard for a registered tick callback
///
/// The callback stays registered for the guard's lifetime; dropping the
/// guard removes it, so every subscription has a teardown on all exit paths.
pub struct TickHandle {
    handle: SchedulerHandle,
    id: TickCallbackId,
}

impl TickHandle {
    pub fn id(&self) -> TickCallbackId {
        self.id
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.handle.remove_tick(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn probe() -> (Arc<Mutex<Vec3>>, impl FnMut(Vec3) + Send + 'static) {
        let slot = Arc::new(Mutex::new(Vec3::ZERO));
        let writer = Arc::clone(&slot);
        (slot, move |v| *writer.lock().unwrap() = v)
    }

    #[test]
    fn test_tween_applies_values_and_settles() {
        let scheduler = FrameScheduler::new();
        let (slot, apply) = probe();

        scheduler.drive(
            0,
            Tween::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 1.0, Easing::Linear),
            apply,
        );

        scheduler.tick(0.5);
        assert!(((*slot.lock().unwrap()).x - 5.0).abs() < 1e-5);

        scheduler.tick(0.5);
        assert_eq!(*slot.lock().unwrap(), Vec3::new(10.0, 0.0, 0.0));

        // Finished tween is pruned
        assert_eq!(scheduler.tween_count(), 0);
    }

    #[test]
    fn test_last_request_wins_per_target() {
        let scheduler = FrameScheduler::new();
        let (first_slot, first_apply) = probe();
        let (second_slot, second_apply) = probe();

        scheduler.drive(
            7,
            Tween::new(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), 1.0, Easing::Linear),
            first_apply,
        );
        scheduler.tick(0.25);
        let first_seen = *first_slot.lock().unwrap();
        assert!(first_seen.x > 0.0);

        // Re-driving the same target cancels the first tween outright
        scheduler.drive(
            7,
            Tween::new(Vec3::ZERO, Vec3::new(0.0, 50.0, 0.0), 0.5, Easing::Linear),
            second_apply,
        );
        assert_eq!(scheduler.tween_count(), 1);

        scheduler.tick(0.5);
        assert_eq!(*first_slot.lock().unwrap(), first_seen);
        assert_eq!(*second_slot.lock().unwrap(), Vec3::new(0.0, 50.0, 0.0));
    }

    #[test]
    fn test_distinct_targets_run_concurrently() {
        let scheduler = FrameScheduler::new();
        let (a_slot, a_apply) = probe();
        let (b_slot, b_apply) = probe();

        scheduler.drive(
            0,
            Tween::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 1.0, Easing::Linear),
            a_apply,
        );
        scheduler.drive(
            1,
            Tween::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), 1.0, Easing::Linear),
            b_apply,
        );

        scheduler.tick(1.0);
        assert_eq!(*a_slot.lock().unwrap(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(*b_slot.lock().unwrap(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_tick_callback_receives_timing() {
        let scheduler = FrameScheduler::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&seen);

        let _guard = scheduler.on_tick(move |tick| {
            writer.lock().unwrap().push((tick.elapsed, tick.dt));
        });

        scheduler.tick(0.1);
        scheduler.tick(0.2);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!((seen[0].0 - 0.1).abs() < 1e-6);
        assert!((seen[1].0 - 0.3).abs() < 1e-6);
        assert!((seen[1].1 - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_dropping_tick_handle_stops_invocations() {
        let scheduler = FrameScheduler::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let guard = scheduler.on_tick(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        scheduler.tick(0.016);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        drop(guard);
        scheduler.tick(0.016);
        scheduler.tick(0.016);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_may_unregister_itself_mid_tick() {
        let scheduler = FrameScheduler::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);

        let guard_slot: Arc<Mutex<Option<TickHandle>>> = Arc::new(Mutex::new(None));
        let guard_ref = Arc::clone(&guard_slot);

        let guard = scheduler.on_tick(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            // Dropping our own handle here must not deadlock
            guard_ref.lock().unwrap().take();
        });
        *guard_slot.lock().unwrap() = Some(guard);

        scheduler.tick(0.016);
        scheduler.tick(0.016);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = FrameScheduler::new();
            scheduler.handle()
        };

        assert!(!handle.is_alive());
        assert!(handle
            .drive(
                0,
                Tween::new(Vec3::ZERO, Vec3::ONE, 1.0, Easing::Linear),
                |_| {},
            )
            .is_none());
        assert!(handle.on_tick(|_| {}).is_none());
        assert!(!handle.cancel(0));
    }
}
