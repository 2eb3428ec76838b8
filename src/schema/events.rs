//! Event discriminants and their detail layouts.
//!
//! The event packet is the one discriminated union in the protocol: a
//! 4-byte ASCII code directly after the header selects which detail
//! record follows. Codes that announce a moment with no attached data
//! (session start, chequered flag, ...) map to empty detail records so
//! live traffic never trips `UnknownEventCode` on them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::{Field, RecordSchema};
use crate::wire::PrimType::{F32, U8, U32};

/// A 4-byte event discriminant as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EventCode(pub [u8; 4]);

impl EventCode {
    pub const SESSION_STARTED: EventCode = EventCode(*b"SSTA");
    pub const SESSION_ENDED: EventCode = EventCode(*b"SEND");
    pub const FASTEST_LAP: EventCode = EventCode(*b"FTLP");
    pub const RETIREMENT: EventCode = EventCode(*b"RTMT");
    pub const DRS_ENABLED: EventCode = EventCode(*b"DRSE");
    pub const DRS_DISABLED: EventCode = EventCode(*b"DRSD");
    pub const TEAM_MATE_IN_PITS: EventCode = EventCode(*b"TMPT");
    pub const CHEQUERED_FLAG: EventCode = EventCode(*b"CHQF");
    pub const RACE_WINNER: EventCode = EventCode(*b"RCWN");
    pub const PENALTY: EventCode = EventCode(*b"PENA");
    pub const SPEED_TRAP: EventCode = EventCode(*b"SPTP");
    pub const START_LIGHTS: EventCode = EventCode(*b"STLG");
    pub const LIGHTS_OUT: EventCode = EventCode(*b"LGOT");
    pub const DRIVE_THROUGH_SERVED: EventCode = EventCode(*b"DTSV");
    pub const STOP_GO_SERVED: EventCode = EventCode(*b"SGSV");
    pub const FLASHBACK: EventCode = EventCode(*b"FLBK");
    pub const BUTTON_STATUS: EventCode = EventCode(*b"BUTN");
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(code) => f.write_str(code),
            Err(_) => write!(f, "{:02x}{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2], self.0[3]),
        }
    }
}

pub(super) fn event_table() -> HashMap<EventCode, Arc<RecordSchema>> {
    let empty = |name| RecordSchema::new(name, Vec::new());

    let entries: [(EventCode, Arc<RecordSchema>); 17] = [
        (EventCode::SESSION_STARTED, empty("SessionStarted")),
        (EventCode::SESSION_ENDED, empty("SessionEnded")),
        (
            EventCode::FASTEST_LAP,
            RecordSchema::new(
                "FastestLap",
                vec![Field::prim("vehicleIdx", U8), Field::prim("lapTime", F32)],
            ),
        ),
        (
            EventCode::RETIREMENT,
            RecordSchema::new("Retirement", vec![Field::prim("vehicleIdx", U8)]),
        ),
        (EventCode::DRS_ENABLED, empty("DrsEnabled")),
        (EventCode::DRS_DISABLED, empty("DrsDisabled")),
        (
            EventCode::TEAM_MATE_IN_PITS,
            RecordSchema::new("TeamMateInPits", vec![Field::prim("vehicleIdx", U8)]),
        ),
        (EventCode::CHEQUERED_FLAG, empty("ChequeredFlag")),
        (
            EventCode::RACE_WINNER,
            RecordSchema::new("RaceWinner", vec![Field::prim("vehicleIdx", U8)]),
        ),
        (
            EventCode::PENALTY,
            RecordSchema::new(
                "Penalty",
                vec![
                    Field::prim("penaltyType", U8),
                    Field::prim("infringementType", U8),
                    Field::prim("vehicleIdx", U8),
                    Field::prim("otherVehicleIdx", U8),
                    Field::prim("time", U8),
                    Field::prim("lapNum", U8),
                    Field::prim("placesGained", U8),
                ],
            ),
        ),
        (
            EventCode::SPEED_TRAP,
            RecordSchema::new(
                "SpeedTrap",
                vec![
                    Field::prim("vehicleIdx", U8),
                    Field::prim("speed", F32),
                    Field::prim("isOverallFastestInSession", U8),
                    Field::prim("isDriverFastestInSession", U8),
                    Field::prim("fastestVehicleIdxInSession", U8),
                    Field::prim("fastestSpeedInSession", F32),
                ],
            ),
        ),
        (
            EventCode::START_LIGHTS,
            RecordSchema::new("StartLights", vec![Field::prim("numLights", U8)]),
        ),
        (EventCode::LIGHTS_OUT, empty("LightsOut")),
        (
            EventCode::DRIVE_THROUGH_SERVED,
            RecordSchema::new("DriveThroughPenaltyServed", vec![Field::prim("vehicleIdx", U8)]),
        ),
        (
            EventCode::STOP_GO_SERVED,
            RecordSchema::new("StopGoPenaltyServed", vec![Field::prim("vehicleIdx", U8)]),
        ),
        (
            EventCode::FLASHBACK,
            RecordSchema::new(
                "Flashback",
                vec![
                    Field::prim("flashbackFrameIdentifier", U32),
                    Field::prim("flashbackSessionTime", F32),
                ],
            ),
        ),
        (
            EventCode::BUTTON_STATUS,
            RecordSchema::new("Buttons", vec![Field::prim("buttonStatus", U32)]),
        ),
    ];

    entries.into_iter().collect()
}
