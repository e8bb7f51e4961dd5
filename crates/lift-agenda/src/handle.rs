//! `HandleSlot`: one independent thread of scheduled activity.
//!
//! A slot references at most one pending agenda entry.  Rescheduling through
//! the slot cancels whatever it referenced first, so a slot can never leave
//! a stale duplicate behind.

use crate::{Agenda, EventHandle};

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct HandleSlot(Option<EventHandle>);

impl HandleSlot {
    pub const EMPTY: HandleSlot = HandleSlot(None);

    /// Cancel the old entry (if still pending) and schedule `action`
    /// `delay` ticks from now.
    pub fn reschedule<A>(&mut self, agenda: &mut Agenda<A>, delay: u64, action: A) -> EventHandle {
        self.cancel(agenda);
        let handle = agenda.insert_after(delay, action);
        self.0 = Some(handle);
        handle
    }

    /// Cancel the old entry and schedule `action` ahead of everything else at
    /// the current instant.
    pub fn reschedule_immediate<A>(&mut self, agenda: &mut Agenda<A>, action: A) -> EventHandle {
        self.cancel(agenda);
        let handle = agenda.insert_immediate(action);
        self.0 = Some(handle);
        handle
    }

    /// Cancel the referenced entry.  No-op if it already fired.
    pub fn cancel<A>(&mut self, agenda: &mut Agenda<A>) -> Option<A> {
        self.0.take().and_then(|h| agenda.cancel(h))
    }

    /// `true` if the referenced entry has neither fired nor been cancelled.
    pub fn is_pending<A>(&self, agenda: &Agenda<A>) -> bool {
        self.0.is_some_and(|h| agenda.contains(h))
    }

    /// The last handle stored in this slot, which may have fired since.
    pub fn handle(&self) -> Option<EventHandle> {
        self.0
    }
}
