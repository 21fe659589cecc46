//! Change detection over the editable player/monster forms.
//!
//! The trigger owns the two observed state slots. Mutations mark it dirty;
//! nothing is submitted until the end of the current update step, when
//! [`RecomputeTrigger::flush`] builds one snapshot pair carrying the final
//! values of both slots and submits exactly one request. A burst of edits
//! inside a single step therefore coalesces into a single recomputation of
//! the latest state, never a request per field.

use calc_core::{MonsterForm, PlayerForm};
use tracing::debug;

use crate::channel::RecomputeHandle;
use crate::error::ChannelError;
use crate::protocol::{ErrorKind, RecomputeRequest, RequestToken, SnapshotPair};

/// Lifecycle state of the trigger.
///
/// `Idle → SnapshotBuilt → Submitted → Idle`, returning to `Idle` both when
/// a response is applied and when it is dropped as superseded. The trigger
/// lives for the lifetime of the UI surface; there is no terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerState {
    #[default]
    Idle,
    SnapshotBuilt,
    Submitted,
}

/// Observes the editable forms and emits coalesced recompute requests.
pub struct RecomputeTrigger {
    player: PlayerForm,
    monster: MonsterForm,
    handle: RecomputeHandle,
    state: TriggerState,
    dirty: bool,
    next_token: u64,
    in_flight: Option<RequestToken>,
}

impl RecomputeTrigger {
    /// Create a trigger over the given initial state.
    ///
    /// The trigger starts dirty so the first `flush` computes initial
    /// values without waiting for an edit.
    pub fn new(handle: RecomputeHandle, player: PlayerForm, monster: MonsterForm) -> Self {
        Self {
            player,
            monster,
            handle,
            state: TriggerState::Idle,
            dirty: true,
            next_token: 1,
            in_flight: None,
        }
    }

    /// Current player form (read-only).
    pub fn player(&self) -> &PlayerForm {
        &self.player
    }

    /// Current monster form (read-only).
    pub fn monster(&self) -> &MonsterForm {
        &self.monster
    }

    /// Mutate the player slot, marking the trigger dirty.
    pub fn update_player(&mut self, edit: impl FnOnce(&mut PlayerForm)) {
        edit(&mut self.player);
        self.dirty = true;
    }

    /// Mutate the monster slot, marking the trigger dirty.
    pub fn update_monster(&mut self, edit: impl FnOnce(&mut MonsterForm)) {
        edit(&mut self.monster);
        self.dirty = true;
    }

    /// End-of-update-step submission.
    ///
    /// Returns the token of the submitted request, or `None` when nothing
    /// changed since the last flush.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::Validation`] when either form fails validation;
    ///   nothing is submitted and previously computed values stay valid.
    ///   The trigger stays dirty so a later flush retries after the edit
    ///   that fixes the form.
    /// - [`ErrorKind::ChannelClosed`] when the channel was torn down.
    pub fn flush(&mut self) -> Result<Option<RequestToken>, ErrorKind> {
        if !self.dirty {
            return Ok(None);
        }

        let player = self.player.validate()?;
        let monster = self.monster.validate()?;
        self.state = TriggerState::SnapshotBuilt;

        let token = RequestToken(self.next_token);
        let request = RecomputeRequest {
            token,
            data: SnapshotPair { player, monster },
        };
        self.handle.submit(request).map_err(|err| match err {
            ChannelError::Closed => ErrorKind::ChannelClosed,
            other => ErrorKind::EngineFault(other.to_string()),
        })?;

        self.next_token += 1;
        self.dirty = false;
        self.in_flight = Some(token);
        self.state = TriggerState::Submitted;
        debug!(%token, "recompute request submitted");
        Ok(Some(token))
    }

    /// Note that the response for `token` was applied to UI state.
    pub fn on_applied(&mut self, token: RequestToken) {
        if self.in_flight == Some(token) {
            self.in_flight = None;
            self.state = TriggerState::Idle;
        }
    }

    /// Note that the response for `token` was dropped as superseded.
    pub fn on_superseded(&mut self, token: RequestToken) {
        // Same transition as an applied response; supersession is not an
        // error, just a cheap discard.
        self.on_applied(token);
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Token of the most recently submitted, not-yet-settled request.
    pub fn in_flight(&self) -> Option<RequestToken> {
        self.in_flight
    }
}
