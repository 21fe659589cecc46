//! Message types exchanged between the trigger and the compute worker.
//!
//! The logical shape is transport-agnostic: a request carries exactly one
//! snapshot pair and a sequence token, and every response echoes the token
//! unchanged so the UI-facing layer can detect staleness. The JSON encoding
//! (internally tagged `type` field) is the reference wire format.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use calc_core::{ComputeError, ComputedValues, MonsterSnapshot, PlayerSnapshot, ValidationError};

/// Monotonically increasing request sequence token.
///
/// Assigned by the trigger at submission time; later tokens always denote
/// newer state, which is what the staleness rules compare on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestToken(pub u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The snapshot pair carried by a recompute request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotPair {
    pub player: PlayerSnapshot,
    pub monster: MonsterSnapshot,
}

/// Request for a recomputation of the full value set.
///
/// Created by the trigger, consumed exactly once by the worker, answered by
/// exactly one response (or dropped UI-side if superseded).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "RECOMPUTE_VALUES")]
pub struct RecomputeRequest {
    pub token: RequestToken,
    pub data: SnapshotPair,
}

/// Worker reply to a [`RecomputeRequest`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecomputeResponse {
    /// Successful computation for the echoed token's snapshot pair.
    ComputedValues {
        token: RequestToken,
        data: ComputedValues,
    },
    /// The computation failed; previous values should be left visible.
    Error {
        token: RequestToken,
        error: ErrorKind,
    },
}

impl RecomputeResponse {
    /// Token of the request this response answers.
    pub fn token(&self) -> RequestToken {
        match self {
            RecomputeResponse::ComputedValues { token, .. } => *token,
            RecomputeResponse::Error { token, .. } => *token,
        }
    }
}

/// Typed error surface delivered to the UI.
///
/// No kind is fatal to the owning surface: validation and engine faults
/// leave the last-good values visible, and a closed channel is recoverable
/// by recreating it.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed or out-of-range snapshot input; computation not attempted.
    #[error("invalid snapshot input: {0}")]
    Validation(String),

    /// Unexpected failure inside the computation.
    #[error("engine fault: {0}")]
    EngineFault(String),

    /// Submission was attempted after the channel was torn down.
    #[error("recompute channel closed")]
    ChannelClosed,
}

impl From<ValidationError> for ErrorKind {
    fn from(err: ValidationError) -> Self {
        ErrorKind::Validation(err.to_string())
    }
}

impl From<ComputeError> for ErrorKind {
    fn from(err: ComputeError) -> Self {
        ErrorKind::EngineFault(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::{MonsterForm, PlayerForm, SkillLevels};

    fn pair() -> SnapshotPair {
        let player = PlayerForm {
            levels: SkillLevels::uniform(80),
            attack_interval_ticks: 5,
            ..Default::default()
        };
        let monster = MonsterForm {
            name: "test dummy".into(),
            hitpoints: 50,
            ..Default::default()
        };
        SnapshotPair {
            player: player.validate().unwrap(),
            monster: monster.validate().unwrap(),
        }
    }

    #[test]
    fn request_wire_shape() {
        let request = RecomputeRequest {
            token: RequestToken(7),
            data: pair(),
        };
        let json: serde_json::Value = serde_json::from_str(
            &serde_json::to_string(&request).unwrap(),
        )
        .unwrap();

        assert_eq!(json["type"], "RECOMPUTE_VALUES");
        assert_eq!(json["token"], 7);
        assert!(json["data"]["player"].is_object());
        assert!(json["data"]["monster"].is_object());
    }

    #[test]
    fn response_echoes_token_through_serialization() {
        let response = RecomputeResponse::Error {
            token: RequestToken(42),
            error: ErrorKind::EngineFault("boom".into()),
        };
        let encoded = serde_json::to_string(&response).unwrap();
        let decoded: RecomputeResponse = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.token(), RequestToken(42));
        assert_eq!(decoded, response);

        let json: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(json["type"], "ERROR");
    }
}
