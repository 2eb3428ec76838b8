//! Packet payload layouts, keyed by the wire packet-type identifier.
//!
//! Each entry describes the bytes after the 24-byte fixed header. The
//! event packet (id 3) carries its 4-byte discriminant followed by the
//! union hole; every other packet is single-phase with a fully static
//! layout.

use std::collections::HashMap;

use super::{
    Field, GRID_SIZE, LAP_HISTORY_LEN, MARSHAL_ZONE_COUNT, PacketDescriptor, PacketKind,
    RecordSchema, TYRE_STINT_LEN, WEATHER_SAMPLE_COUNT, records,
};
use crate::wire::PrimType::{F32, I8, U8, U16, U32};

pub(super) fn packet_table() -> HashMap<u8, PacketDescriptor> {
    let car_motion = records::car_motion_data();
    let marshal_zone = records::marshal_zone();
    let weather_sample = records::weather_forecast_sample();
    let lap_data = records::lap_data_data();
    let participant = records::participants_data();
    let car_setup = records::car_setups_data();
    let car_telemetry = records::car_telemetry_data();
    let car_status = records::car_status_data();
    let classification = records::final_classification_data();
    let lobby_player = records::lobby_info_data();
    let car_damage = records::car_damage_data();
    let lap_history = records::lap_history_data();
    let tyre_stint = records::tyre_stint_history_data();

    let descriptors = [
        PacketDescriptor {
            kind: PacketKind::Motion,
            payload: RecordSchema::new(
                "MotionPacket",
                vec![
                    Field::record_array("carMotionData", &car_motion, GRID_SIZE),
                    // Player car only, RL RR FL FR
                    Field::prim_array("suspensionPosition", F32, 4),
                    Field::prim_array("suspensionVelocity", F32, 4),
                    Field::prim_array("suspensionAcceleration", F32, 4),
                    Field::prim_array("wheelSpeed", F32, 4),
                    Field::prim_array("wheelSlip", F32, 4),
                    Field::prim("localVelocityX", F32),
                    Field::prim("localVelocityY", F32),
                    Field::prim("localVelocityZ", F32),
                    Field::prim("angularVelocityX", F32),
                    Field::prim("angularVelocityY", F32),
                    Field::prim("angularVelocityZ", F32),
                    Field::prim("angularAccelerationX", F32),
                    Field::prim("angularAccelerationY", F32),
                    Field::prim("angularAccelerationZ", F32),
                    Field::prim("frontWheelsAngle", F32),
                ],
            ),
        },
        PacketDescriptor {
            kind: PacketKind::Session,
            payload: RecordSchema::new(
                "SessionPacket",
                vec![
                    Field::prim("weather", U8),
                    Field::prim("trackTemperature", I8),
                    Field::prim("airTemperature", I8),
                    Field::prim("totalLaps", U8),
                    Field::prim("trackLength", U16),
                    Field::prim("sessionType", U8),
                    Field::prim("trackId", I8),
                    Field::prim("formula", U8),
                    Field::prim("sessionTimeLeft", U16),
                    Field::prim("sessionDuration", U16),
                    Field::prim("pitSpeedLimit", U8),
                    Field::prim("gamePaused", U8),
                    Field::prim("isSpectating", U8),
                    Field::prim("spectatorCarIndex", U8),
                    Field::prim("sliProNativeSupport", U8),
                    Field::prim("numMarshalZones", U8),
                    Field::record_array("marshalZones", &marshal_zone, MARSHAL_ZONE_COUNT),
                    Field::prim("safetyCarStatus", U8),
                    Field::prim("networkGame", U8),
                    Field::prim("numWeatherForecastSamples", U8),
                    Field::record_array(
                        "weatherForecastSamples",
                        &weather_sample,
                        WEATHER_SAMPLE_COUNT,
                    ),
                    Field::prim("forecastAccuracy", U8),
                    Field::prim("aiDifficulty", U8),
                    Field::prim("seasonLinkIdentifier", U32),
                    Field::prim("weekendLinkIdentifier", U32),
                    Field::prim("sessionLinkIdentifier", U32),
                    Field::prim("pitStopWindowIdealLap", U8),
                    Field::prim("pitStopWindowLatestLap", U8),
                    Field::prim("pitStopRejoinPosition", U8),
                    Field::prim("steeringAssist", U8),
                    Field::prim("brakingAssist", U8),
                    Field::prim("gearboxAssist", U8),
                    Field::prim("pitAssist", U8),
                    Field::prim("pitReleaseAssist", U8),
                    Field::prim("ERSAssist", U8),
                    Field::prim("DRSAssist", U8),
                    Field::prim("dynamicRacingLine", U8),
                    Field::prim("dynamicRacingLineType", U8),
                    Field::prim("gameMode", U8),
                    Field::prim("ruleSet", U8),
                    Field::prim("timeOfDay", U32),
                    Field::prim("sessionLength", U8),
                ],
            ),
        },
        PacketDescriptor {
            kind: PacketKind::LapData,
            payload: RecordSchema::new(
                "LapDataPacket",
                vec![
                    Field::record_array("lapData", &lap_data, GRID_SIZE),
                    Field::prim("timeTrialPBCarIdx", U8),
                    Field::prim("timeTrialRivalCarIdx", U8),
                ],
            ),
        },
        PacketDescriptor {
            kind: PacketKind::Event,
            payload: RecordSchema::new(
                "EventPacket",
                vec![
                    Field::prim_array("eventStringCode", U8, 4),
                    Field::event_payload("eventDetails"),
                ],
            ),
        },
        PacketDescriptor {
            kind: PacketKind::Participants,
            payload: RecordSchema::new(
                "ParticipantsPacket",
                vec![
                    // Informational; the array below is always GRID_SIZE long
                    Field::prim("numActiveCars", U8),
                    Field::record_array("participants", &participant, GRID_SIZE),
                ],
            ),
        },
        PacketDescriptor {
            kind: PacketKind::CarSetups,
            payload: RecordSchema::new(
                "CarSetupsPacket",
                vec![Field::record_array("carSetups", &car_setup, GRID_SIZE)],
            ),
        },
        PacketDescriptor {
            kind: PacketKind::CarTelemetry,
            payload: RecordSchema::new(
                "CarTelemetryPacket",
                vec![
                    Field::record_array("carTelemetryData", &car_telemetry, GRID_SIZE),
                    Field::prim("mfdPanelIndex", U8),
                    Field::prim("mfdPanelIndexSecondaryPlayer", U8),
                    Field::prim("suggestedGear", I8),
                ],
            ),
        },
        PacketDescriptor {
            kind: PacketKind::CarStatus,
            payload: RecordSchema::new(
                "CarStatusPacket",
                vec![Field::record_array("carStatusData", &car_status, GRID_SIZE)],
            ),
        },
        PacketDescriptor {
            kind: PacketKind::FinalClassification,
            payload: RecordSchema::new(
                "FinalClassificationPacket",
                vec![
                    Field::prim("numCars", U8),
                    Field::record_array("classificationData", &classification, GRID_SIZE),
                ],
            ),
        },
        PacketDescriptor {
            kind: PacketKind::LobbyInfo,
            payload: RecordSchema::new(
                "LobbyInfoPacket",
                vec![
                    Field::prim("numPlayers", U8),
                    Field::record_array("lobbyPlayers", &lobby_player, GRID_SIZE),
                ],
            ),
        },
        PacketDescriptor {
            kind: PacketKind::CarDamage,
            payload: RecordSchema::new(
                "CarDamagePacket",
                vec![Field::record_array("carDamageData", &car_damage, GRID_SIZE)],
            ),
        },
        PacketDescriptor {
            kind: PacketKind::SessionHistory,
            payload: RecordSchema::new(
                "SessionHistoryPacket",
                vec![
                    Field::prim("carIdx", U8),
                    // numLaps and numTyreStints are informational; both
                    // arrays below are schema-fixed length on the wire.
                    Field::prim("numLaps", U8),
                    Field::prim("numTyreStints", U8),
                    Field::prim("bestLapTimeLapNum", U8),
                    Field::prim("bestSector1LapNum", U8),
                    Field::prim("bestSector2LapNum", U8),
                    Field::prim("bestSector3LapNum", U8),
                    Field::record_array("lapHistoryData", &lap_history, LAP_HISTORY_LEN),
                    Field::record_array("tyreStintHistoryData", &tyre_stint, TYRE_STINT_LEN),
                ],
            ),
        },
    ];

    descriptors.into_iter().map(|d| (d.kind.id(), d)).collect()
}
