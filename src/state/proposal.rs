//! The proposal state machine.
//!
//! `ProposalState` is a plain `yew::Reducible`. `ProposalStore` holds the live
//! value and tells callers whether an action was taken; the async drivers below
//! gate their logger calls on that answer, never on a render-time snapshot.

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use yew::Reducible;

use super::placement::EvasivePlacer;
use crate::model::{Classification, Position, Size, ViewState};
use crate::services::ResponseLogger;

#[derive(Clone, Debug, PartialEq)]
pub struct ProposalState {
    pub view: ViewState,
    /// Decline-control activations this session. Never decreases.
    pub evasion_count: u32,
    /// Set only while the Accept record call is in flight.
    pub submitting: bool,
    /// `None` until the first relocation; afterwards overrides the flow layout.
    pub decline_position: Option<Position>,
}

impl Default for ProposalState {
    fn default() -> Self {
        Self {
            view: ViewState::Proposal,
            evasion_count: 0,
            submitting: false,
            decline_position: None,
        }
    }
}

impl ProposalState {
    pub fn can_accept(&self) -> bool {
        self.view == ViewState::Proposal && !self.submitting
    }

    /// Defer is held back while an Accept is in flight so the two submissions
    /// never overlap.
    pub fn can_defer(&self) -> bool {
        self.view == ViewState::Proposal && !self.submitting
    }

    pub fn can_evade(&self) -> bool {
        self.view == ViewState::Proposal
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProposalAction {
    /// Decline control was hovered or clicked and moved to `position`.
    Evade { position: Position },
    BeginAccept,
    /// Logger outcome arrived (either way) for the pending Accept.
    FinishAccept,
    Defer,
    Acknowledge,
}

impl Reducible for ProposalState {
    type Action = ProposalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ProposalAction::*;
        let mut new = (*self).clone();
        match action {
            Evade { position } => {
                if !self.can_evade() {
                    return self;
                }
                new.evasion_count = new.evasion_count.saturating_add(1);
                new.decline_position = Some(position);
            }
            BeginAccept => {
                if !self.can_accept() {
                    return self;
                }
                new.submitting = true;
            }
            FinishAccept => {
                if !self.submitting {
                    return self;
                }
                new.submitting = false;
                new.view = ViewState::Success;
            }
            Defer => {
                if !self.can_defer() {
                    return self;
                }
                new.view = ViewState::Declined;
            }
            Acknowledge => {
                if self.view != ViewState::Declined {
                    return self;
                }
                new.view = ViewState::Proposal;
            }
        }
        Rc::new(new)
    }
}

/// Shared, always-current proposal state. Clones share the same value.
#[derive(Clone, Default)]
pub struct ProposalStore {
    current: Rc<RefCell<Rc<ProposalState>>>,
    listener: Option<Rc<dyn Fn()>>,
}

impl ProposalStore {
    /// `listener` runs after every applied transition (the view re-renders from it).
    pub fn with_listener(listener: impl Fn() + 'static) -> Self {
        Self {
            listener: Some(Rc::new(listener)),
            ..Self::default()
        }
    }

    pub fn current(&self) -> Rc<ProposalState> {
        self.current.borrow().clone()
    }

    /// Reduce `action` against the live state. Returns `false` when the guards
    /// refused it and nothing changed.
    pub fn apply(&self, action: ProposalAction) -> bool {
        let before = self.current();
        let after = before.clone().reduce(action);
        if Rc::ptr_eq(&before, &after) {
            return false;
        }
        *self.current.borrow_mut() = after;
        if let Some(listener) = &self.listener {
            listener();
        }
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordOutcome {
    Recorded,
    Failed,
}

/// Call the logger and swallow any error into a diagnostic line.
pub async fn record_best_effort(
    logger: &dyn ResponseLogger,
    classification: Classification,
    evasion_count: u32,
) -> RecordOutcome {
    match logger.record(classification, evasion_count).await {
        Ok(()) => RecordOutcome::Recorded,
        Err(err) => {
            log::error!("failed to record {classification} response: {err}");
            RecordOutcome::Failed
        }
    }
}

/// Relocate the decline control. Returns the new position, or `None` when the
/// current view does not show the control.
pub fn activate_decline<R>(
    store: &ProposalStore,
    placer: &EvasivePlacer,
    viewport: Size,
    control: Size,
    rng: &mut R,
) -> Option<Position>
where
    R: Rng + ?Sized,
{
    if !store.current().can_evade() {
        return None;
    }
    let position = placer.place(viewport, control, rng);
    store
        .apply(ProposalAction::Evade { position })
        .then_some(position)
}

// Applies `FinishAccept` when dropped, so the submitting flag clears on every
// exit path including a dropped future.
struct ReleaseOnDrop<'a>(&'a ProposalStore);

impl Drop for ReleaseOnDrop<'_> {
    fn drop(&mut self) {
        self.0.apply(ProposalAction::FinishAccept);
    }
}

/// Accept: raise the submitting flag, record, then land on `Success` whatever
/// the logger says. Returns `None` without recording if the live state refused
/// the action.
pub async fn submit_accept(store: &ProposalStore, logger: &dyn ResponseLogger) -> Option<RecordOutcome> {
    let evasion_count = store.current().evasion_count;
    if !store.apply(ProposalAction::BeginAccept) {
        return None;
    }
    let _release = ReleaseOnDrop(store);
    Some(record_best_effort(logger, Classification::Accept, evasion_count).await)
}

/// Defer: switch to `Declined` right away, then record.
pub async fn submit_defer(store: &ProposalStore, logger: &dyn ResponseLogger) -> Option<RecordOutcome> {
    let evasion_count = store.current().evasion_count;
    if !store.apply(ProposalAction::Defer) {
        return None;
    }
    Some(record_best_effort(logger, Classification::Defer, evasion_count).await)
}
