//! Single-flight guard for actions whose results are appended, not stored.

use super::{MountId, Ticket};

/// Allows at most one outstanding request per screen mount.
#[derive(Debug)]
pub struct InFlight {
    mount: MountId,
    issued: u64,
    current: Option<u64>,
    mounted: bool,
}

impl InFlight {
    pub fn new() -> Self {
        Self {
            mount: MountId::next(),
            issued: 0,
            current: None,
            mounted: true,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    /// A ticket for a new request, or `None` while one is outstanding.
    pub fn try_start(&mut self) -> Option<Ticket> {
        if self.current.is_some() {
            return None;
        }
        self.issued += 1;
        self.current = Some(self.issued);
        Some(Ticket {
            mount: self.mount,
            seq: self.issued,
        })
    }

    /// Release the guard. Returns whether the result should be applied.
    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if ticket.mount != self.mount || self.current != Some(ticket.seq) {
            return false;
        }
        self.current = None;
        self.mounted
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

impl Default for InFlight {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_start_rejected_until_finish() {
        let mut guard = InFlight::new();
        let ticket = guard.try_start().unwrap();
        assert!(guard.is_busy());
        assert!(guard.try_start().is_none());

        assert!(guard.finish(ticket));
        assert!(!guard.is_busy());
        assert!(guard.try_start().is_some());
    }

    #[test]
    fn test_finish_after_unmount_is_not_applied() {
        let mut guard = InFlight::new();
        let ticket = guard.try_start().unwrap();
        guard.unmount();
        assert!(!guard.finish(ticket));
    }

    #[test]
    fn test_foreign_ticket_rejected() {
        let mut a = InFlight::new();
        let mut b = InFlight::new();
        let ticket = a.try_start().unwrap();
        b.try_start().unwrap();
        assert!(!b.finish(ticket));
        assert!(b.is_busy());
    }
}
