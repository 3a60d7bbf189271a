//! Decides what to do after each response of an authenticated call.
//!
//! A 401 on the first attempt triggers one silent refresh; a successful
//! refresh replays the request once and whatever comes back is final.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStep {
    /// Hand the response to the caller.
    Deliver,
    /// Call the refresh endpoint.
    Refresh,
    /// Send the original request again.
    Replay,
    /// Refresh failed; the session is gone.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    FirstAttempt,
    Refreshing,
    Replaying,
    Finished,
}

#[derive(Debug, Clone, Default)]
pub struct RefreshPolicy {
    phase: Phase,
}

pub const UNAUTHORIZED: u16 = 401;

impl RefreshPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_response(&mut self, status: u16) -> RefreshStep {
        match self.phase {
            Phase::FirstAttempt if status == UNAUTHORIZED => {
                self.phase = Phase::Refreshing;
                RefreshStep::Refresh
            }
            Phase::Refreshing => RefreshStep::Refresh,
            _ => {
                self.phase = Phase::Finished;
                RefreshStep::Deliver
            }
        }
    }

    pub fn on_refresh(&mut self, ok: bool) -> RefreshStep {
        match self.phase {
            Phase::Refreshing if ok => {
                self.phase = Phase::Replaying;
                RefreshStep::Replay
            }
            Phase::Refreshing => {
                self.phase = Phase::Finished;
                RefreshStep::Expired
            }
            Phase::FirstAttempt | Phase::Replaying | Phase::Finished => {
                self.phase = Phase::Finished;
                RefreshStep::Expired
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_passes_through() {
        let mut policy = RefreshPolicy::new();
        assert_eq!(policy.on_response(200), RefreshStep::Deliver);
    }

    #[test]
    fn test_non_auth_errors_pass_through() {
        let mut policy = RefreshPolicy::new();
        assert_eq!(policy.on_response(422), RefreshStep::Deliver);
    }

    #[test]
    fn test_refresh_then_replay_once() {
        let mut policy = RefreshPolicy::new();
        assert_eq!(policy.on_response(401), RefreshStep::Refresh);
        assert_eq!(policy.on_refresh(true), RefreshStep::Replay);
        // replayed response is final, even another 401
        assert_eq!(policy.on_response(401), RefreshStep::Deliver);
        assert_eq!(policy.on_response(401), RefreshStep::Deliver);
    }

    #[test]
    fn test_failed_refresh_expires_session() {
        let mut policy = RefreshPolicy::new();
        policy.on_response(401);
        assert_eq!(policy.on_refresh(false), RefreshStep::Expired);
    }

    #[test]
    fn test_refresh_outside_401_is_an_error() {
        let mut policy = RefreshPolicy::new();
        assert_eq!(policy.on_refresh(true), RefreshStep::Expired);
    }
}
