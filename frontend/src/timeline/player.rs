use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::scheduler::Scheduler;
use super::{Step, Timeline};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Running,
    /// Terminal. A view that comes back builds a new player.
    Stopped,
}

struct Inner<S: Scheduler, C> {
    scheduler: S,
    timeline: Rc<Timeline<C>>,
    pause_ms: u32,
    apply_step: Rc<dyn Fn(&Step<C>)>,
    on_loop_complete: Rc<dyn Fn(u32)>,
    handles: Vec<S::Handle>,
    status: PlayerStatus,
    iteration: u32,
}

/// Replays a timeline forever until stopped.
///
/// Every pass starts by applying [`Step::ResetAll`], schedules each
/// non-delay step at its offset, and schedules the next pass at
/// `duration + pause_ms`. Scheduled callbacks only hold a weak reference,
/// and check the status before touching state, so nothing is applied
/// after [`Player::stop`] or after the player is dropped.
pub struct Player<S: Scheduler, C: 'static> {
    inner: Rc<RefCell<Inner<S, C>>>,
}

impl<S: Scheduler, C: 'static> Player<S, C> {
    pub fn start(
        scheduler: S,
        timeline: Rc<Timeline<C>>,
        pause_ms: u32,
        apply_step: impl Fn(&Step<C>) + 'static,
        on_loop_complete: impl Fn(u32) + 'static,
    ) -> Self {
        log::debug!(
            "starting timeline: {} cues over {}ms, pause {}ms",
            timeline.cue_count(),
            timeline.duration_ms(),
            pause_ms
        );
        let inner = Rc::new(RefCell::new(Inner {
            scheduler,
            timeline,
            pause_ms,
            apply_step: Rc::new(apply_step),
            on_loop_complete: Rc::new(on_loop_complete),
            handles: Vec::new(),
            status: PlayerStatus::Running,
            iteration: 0,
        }));
        run_pass(&inner);
        Self { inner }
    }

    /// Cancels everything still pending. Safe to call more than once.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.status == PlayerStatus::Stopped {
            return;
        }
        inner.status = PlayerStatus::Stopped;
        let handles = std::mem::take(&mut inner.handles);
        for handle in handles {
            inner.scheduler.cancel(handle);
        }
        log::debug!("timeline stopped after {} loops", inner.iteration);
    }

    pub fn status(&self) -> PlayerStatus {
        self.inner.borrow().status
    }

    /// Completed passes so far.
    pub fn iteration(&self) -> u32 {
        self.inner.borrow().iteration
    }
}

impl<S: Scheduler, C: 'static> Drop for Player<S, C> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_pass<S: Scheduler, C: 'static>(cell: &Rc<RefCell<Inner<S, C>>>) {
    let apply_step = {
        let mut inner = cell.borrow_mut();
        if inner.status == PlayerStatus::Stopped {
            return;
        }
        // Everything from the previous pass has fired by now.
        inner.handles.clear();
        Rc::clone(&inner.apply_step)
    };

    apply_step(&Step::ResetAll);

    let mut inner = cell.borrow_mut();
    if inner.status == PlayerStatus::Stopped {
        return;
    }

    let timeline = Rc::clone(&inner.timeline);
    for (n, (offset, _)) in timeline.schedule().enumerate() {
        let weak = Rc::downgrade(cell);
        let handle = inner
            .scheduler
            .defer(offset, Box::new(move || fire(&weak, n)));
        inner.handles.push(handle);
    }

    let restart_at = timeline.duration_ms().saturating_add(inner.pause_ms);
    let weak = Rc::downgrade(cell);
    let handle = inner
        .scheduler
        .defer(restart_at, Box::new(move || complete_loop(&weak)));
    inner.handles.push(handle);
}

fn fire<S: Scheduler, C: 'static>(weak: &Weak<RefCell<Inner<S, C>>>, n: usize) {
    let Some(cell) = weak.upgrade() else {
        return;
    };
    let (apply_step, timeline) = {
        let inner = cell.borrow();
        if inner.status == PlayerStatus::Stopped {
            return;
        }
        (Rc::clone(&inner.apply_step), Rc::clone(&inner.timeline))
    };
    if let Some(step) = timeline.cue(n) {
        apply_step(step);
    }
}

fn complete_loop<S: Scheduler, C: 'static>(weak: &Weak<RefCell<Inner<S, C>>>) {
    let Some(cell) = weak.upgrade() else {
        return;
    };
    let (on_loop_complete, iteration) = {
        let mut inner = cell.borrow_mut();
        if inner.status == PlayerStatus::Stopped {
            return;
        }
        inner.iteration += 1;
        (Rc::clone(&inner.on_loop_complete), inner.iteration)
    };
    log::debug!("timeline loop {} complete, restarting", iteration);
    on_loop_complete(iteration);
    run_pass(&cell);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{ManualClock, PlayerState, Sender};
    use std::cell::Cell;
    use std::convert::Infallible;

    type Plain = Step<Infallible>;

    struct Harness {
        clock: ManualClock,
        state: Rc<RefCell<PlayerState>>,
        applied: Rc<RefCell<Vec<(u64, Plain)>>>,
        loops: Rc<Cell<u32>>,
        player: Player<ManualClock, Infallible>,
    }

    fn harness(timeline: Timeline<Infallible>, pause_ms: u32) -> Harness {
        let clock = ManualClock::new();
        let state = Rc::new(RefCell::new(PlayerState::default()));
        let applied = Rc::new(RefCell::new(Vec::new()));
        let loops = Rc::new(Cell::new(0));

        let player = {
            let clock_for_apply = clock.clone();
            let state = Rc::clone(&state);
            let applied = Rc::clone(&applied);
            let loops = Rc::clone(&loops);
            Player::start(
                clock.clone(),
                Rc::new(timeline),
                pause_ms,
                move |step: &Plain| {
                    applied
                        .borrow_mut()
                        .push((clock_for_apply.now_ms(), step.clone()));
                    let mut state = state.borrow_mut();
                    if !state.apply(step) && matches!(step, Step::ResetAll) {
                        *state = PlayerState::default();
                    }
                },
                move |n| loops.set(n),
            )
        };

        Harness {
            clock,
            state,
            applied,
            loops,
            player,
        }
    }

    fn scenario() -> Timeline<Infallible> {
        Timeline::builder()
            .delay(10)
            .message(Sender::Me, "hi")
            .delay(10)
            .typing(Sender::Other, true)
            .delay(10)
            .typing(Sender::Other, false)
            .build()
            .unwrap()
    }

    fn non_reset(applied: &[(u64, Plain)]) -> Vec<(u64, Plain)> {
        applied
            .iter()
            .filter(|(_, step)| !matches!(step, Step::ResetAll))
            .cloned()
            .collect()
    }

    #[test]
    fn plays_the_example_scenario_and_loops() {
        let h = harness(scenario(), 50);

        h.clock.advance(5);
        assert!(h.state.borrow().messages.is_empty());

        h.clock.advance(5);
        {
            let state = h.state.borrow();
            assert_eq!(state.messages.len(), 1);
            assert_eq!(state.messages[0].text, "hi");
            assert_eq!(state.messages[0].sender, Sender::Me);
        }

        h.clock.advance(10);
        assert_eq!(h.state.borrow().typing, Some(Sender::Other));

        h.clock.advance(10);
        assert_eq!(h.state.borrow().typing, None);
        assert_eq!(h.state.borrow().messages.len(), 1);

        // duration 30 + pause 50: reset lands at 80, first message again at 90
        h.clock.advance(49);
        assert_eq!(h.loops.get(), 0);
        h.clock.advance(1);
        assert_eq!(h.loops.get(), 1);
        assert_eq!(h.player.iteration(), 1);
        assert!(h.state.borrow().is_empty());

        h.clock.advance(10);
        assert_eq!(h.state.borrow().messages.len(), 1);
        assert_eq!(h.state.borrow().messages[0].id, 0);
    }

    #[test]
    fn steps_fire_in_authored_order_at_their_offsets() {
        let timeline = Timeline::builder()
            .delay(100)
            .zoom(true)
            .delay(50)
            .panel(true)
            .input("same tick")
            .build()
            .unwrap();
        let h = harness(timeline, 300);

        h.clock.advance(1000);
        let fired = non_reset(&h.applied.borrow());
        assert_eq!(
            fired[..3],
            [
                (100, Step::SetZoom(true)),
                (150, Step::SetPanel(true)),
                (150, Step::SetInput("same tick".to_string())),
            ]
        );
        // second loop starts at 150 + 300
        assert_eq!(fired[3], (550, Step::SetZoom(true)));
    }

    #[test]
    fn every_cue_fires_once_per_iteration() {
        let h = harness(scenario(), 20);
        // three full loops of 50ms each
        h.clock.advance(149);
        assert_eq!(h.loops.get(), 2);
        assert_eq!(non_reset(&h.applied.borrow()).len(), 9);
    }

    #[test]
    fn reset_comes_before_first_step_of_next_iteration() {
        let h = harness(scenario(), 50);
        h.clock.advance(90);

        let applied = h.applied.borrow();
        let kinds: Vec<bool> = applied
            .iter()
            .map(|(_, step)| matches!(step, Step::ResetAll))
            .collect();
        // reset, 3 cues, reset, first cue of loop two
        assert_eq!(kinds, vec![true, false, false, false, true, false]);
        assert_eq!(applied[4].0, 80);
        assert_eq!(applied[5].0, 90);
    }

    #[test]
    fn nothing_is_applied_after_stop() {
        let h = harness(scenario(), 50);
        h.clock.advance(15);
        let before = h.applied.borrow().len();

        h.player.stop();
        assert_eq!(h.player.status(), PlayerStatus::Stopped);
        assert_eq!(h.clock.pending(), 0);

        h.clock.advance(1_000);
        assert_eq!(h.applied.borrow().len(), before);
        assert_eq!(h.state.borrow().messages.len(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let h = harness(scenario(), 50);
        h.player.stop();
        h.player.stop();
        assert_eq!(h.player.status(), PlayerStatus::Stopped);
    }

    #[test]
    fn stop_from_inside_a_step_halts_the_pass() {
        let clock = ManualClock::new();
        let count = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Player<ManualClock, Infallible>>>> =
            Rc::new(RefCell::new(None));

        let player = {
            let count = Rc::clone(&count);
            let slot = Rc::clone(&slot);
            Player::start(
                clock.clone(),
                Rc::new(scenario()),
                50,
                move |step: &Plain| {
                    if matches!(step, Step::ResetAll) {
                        return;
                    }
                    count.set(count.get() + 1);
                    if let Some(player) = slot.borrow().as_ref() {
                        player.stop();
                    }
                },
                |_| {},
            )
        };
        *slot.borrow_mut() = Some(player);

        clock.advance(1_000);
        assert_eq!(count.get(), 1);
        let player = slot.borrow_mut().take();
        assert_eq!(player.map(|p| p.status()), Some(PlayerStatus::Stopped));
    }

    #[test]
    fn dropping_the_player_cancels_pending_steps() {
        let Harness {
            clock,
            applied,
            player,
            ..
        } = harness(scenario(), 50);
        drop(player);

        clock.advance(1_000);
        assert!(non_reset(&applied.borrow()).is_empty());
        assert_eq!(clock.pending(), 0);
    }
}
