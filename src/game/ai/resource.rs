//! Scheduled computer reply
//!
//! Replaces a fire-and-forget timer with an explicit, cancellable schedule
//! owned by the session. At most one reply is pending at a time.
//!
//! # Staleness
//!
//! Each pending reply records the [`BoardKey`] that was live when it was
//! scheduled. Polling with a different live key reports
//! [`ReplyPoll::Stale`] and drops the reply, so a reply scheduled before a
//! reset can never act on the new board.
//!
//! Times are `Duration`s since app start, as reported by bevy's
//! `Time::elapsed()`.

use std::time::Duration;

use crate::game::types::BoardKey;

/// Delay between an accepted human move and the computer's reply
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingReply {
    due: Duration,
    key: BoardKey,
}

/// Result of polling the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyPoll {
    /// Nothing scheduled
    Idle,
    /// Scheduled but not yet due
    Waiting,
    /// Due now; the schedule has been consumed
    Due,
    /// Scheduled under a board key that is no longer live; dropped
    Stale,
}

/// At most one pending computer reply
#[derive(Debug, Clone, Default)]
pub struct ReplySchedule {
    pending: Option<PendingReply>,
}

impl ReplySchedule {
    /// Schedule a reply at `now + delay` for board `key`
    ///
    /// Returns `false` and leaves the existing reply in place if one is
    /// already pending.
    pub fn schedule(&mut self, now: Duration, delay: Duration, key: BoardKey) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(PendingReply {
            due: now + delay,
            key,
        });
        true
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending reply fires, if any
    pub fn due_at(&self) -> Option<Duration> {
        self.pending.map(|pending| pending.due)
    }

    /// Check the schedule against the clock and the live board key
    ///
    /// `Due` and `Stale` both consume the pending reply.
    pub fn poll(&mut self, now: Duration, live_key: BoardKey) -> ReplyPoll {
        let Some(pending) = self.pending else {
            return ReplyPoll::Idle;
        };
        if pending.key != live_key {
            self.pending = None;
            return ReplyPoll::Stale;
        }
        if now < pending.due {
            return ReplyPoll::Waiting;
        }
        self.pending = None;
        ReplyPoll::Due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_idle_by_default() {
        let mut schedule = ReplySchedule::default();
        assert!(!schedule.is_pending());
        assert_eq!(schedule.poll(ms(0), BoardKey(0)), ReplyPoll::Idle);
    }

    #[test]
    fn test_waiting_then_due() {
        //! A reply fires once the delay has elapsed, and only once
        let mut schedule = ReplySchedule::default();
        assert!(schedule.schedule(ms(1000), DEFAULT_REPLY_DELAY, BoardKey(3)));
        assert_eq!(schedule.due_at(), Some(ms(1250)));

        assert_eq!(schedule.poll(ms(1100), BoardKey(3)), ReplyPoll::Waiting);
        assert_eq!(schedule.poll(ms(1250), BoardKey(3)), ReplyPoll::Due);
        assert_eq!(schedule.poll(ms(1300), BoardKey(3)), ReplyPoll::Idle);
    }

    #[test]
    fn test_only_one_pending() {
        //! A second schedule call does not replace the first
        let mut schedule = ReplySchedule::default();
        assert!(schedule.schedule(ms(0), ms(250), BoardKey(0)));
        assert!(!schedule.schedule(ms(100), ms(250), BoardKey(0)));
        assert_eq!(schedule.due_at(), Some(ms(250)));
    }

    #[test]
    fn test_stale_key_is_dropped() {
        //! A reply scheduled before a reset never fires on the new board
        let mut schedule = ReplySchedule::default();
        schedule.schedule(ms(0), ms(250), BoardKey(1));

        assert_eq!(schedule.poll(ms(500), BoardKey(2)), ReplyPoll::Stale);
        assert!(!schedule.is_pending());
    }

    #[test]
    fn test_cancel() {
        let mut schedule = ReplySchedule::default();
        schedule.schedule(ms(0), ms(250), BoardKey(0));
        schedule.cancel();
        assert_eq!(schedule.poll(ms(500), BoardKey(0)), ReplyPoll::Idle);
    }
}
