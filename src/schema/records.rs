//! Sub-record layouts shared by the packet schemas.
//!
//! Field name, order, and width in each table reproduce the protocol's
//! published 2022-format field tables bit-exact. Order is the invariant:
//! the decoder interprets bytes purely by position.

use std::sync::Arc;

use super::{Field, RecordSchema};
use crate::wire::PrimType::{F32, F64, I8, I16, U8, U16, U32};

/// Per-car world-space motion sample, 60 bytes.
pub(super) fn car_motion_data() -> Arc<RecordSchema> {
    RecordSchema::new(
        "CarMotionData",
        vec![
            Field::prim("worldPositionX", F32),
            Field::prim("worldPositionY", F32),
            Field::prim("worldPositionZ", F32),
            Field::prim("worldVelocityX", F32),
            Field::prim("worldVelocityY", F32),
            Field::prim("worldVelocityZ", F32),
            // Direction components are normalised fixed-point: value / 32767.0
            Field::prim("worldForwardDirX", I16),
            Field::prim("worldForwardDirY", I16),
            Field::prim("worldForwardDirZ", I16),
            Field::prim("worldRightDirX", I16),
            Field::prim("worldRightDirY", I16),
            Field::prim("worldRightDirZ", I16),
            Field::prim("gForceLateral", F32),
            Field::prim("gForceLongitudinal", F32),
            Field::prim("gForceVertical", F32),
            Field::prim("yaw", F32),
            Field::prim("pitch", F32),
            Field::prim("roll", F32),
        ],
    )
}

/// Marshal-zone boundary, 5 bytes.
pub(super) fn marshal_zone() -> Arc<RecordSchema> {
    RecordSchema::new(
        "MarshalZone",
        vec![Field::prim("zoneStart", F32), Field::prim("zoneFlag", I8)],
    )
}

/// Forecast sample, 8 bytes.
pub(super) fn weather_forecast_sample() -> Arc<RecordSchema> {
    RecordSchema::new(
        "WeatherForecastSample",
        vec![
            Field::prim("sessionType", U8),
            Field::prim("timeOffset", U8),
            Field::prim("weather", U8),
            Field::prim("trackTemperature", I8),
            Field::prim("trackTemperatureChange", I8),
            Field::prim("airTemperature", I8),
            Field::prim("airTemperatureChange", I8),
            Field::prim("rainPercentage", U8),
        ],
    )
}

/// Per-car lap timing state, 43 bytes.
pub(super) fn lap_data_data() -> Arc<RecordSchema> {
    RecordSchema::new(
        "LapDataData",
        vec![
            Field::prim("lastLapTimeInMS", U32),
            Field::prim("currentLapTimeInMS", U32),
            Field::prim("sector1TimeInMS", U16),
            Field::prim("sector2TimeInMS", U16),
            Field::prim("lapDistance", F32),
            Field::prim("totalDistance", F32),
            Field::prim("safetyCarDelta", F32),
            Field::prim("carPosition", U8),
            Field::prim("currentLapNum", U8),
            Field::prim("pitStatus", U8),
            Field::prim("numPitStops", U8),
            Field::prim("sector", U8),
            Field::prim("currentLapInvalid", U8),
            Field::prim("penalties", U8),
            Field::prim("warnings", U8),
            Field::prim("numUnservedDriveThroughPens", U8),
            Field::prim("numUnservedStopGoPens", U8),
            Field::prim("gridPosition", U8),
            Field::prim("driverStatus", U8),
            Field::prim("resultStatus", U8),
            Field::prim("pitLaneTimerActive", U8),
            Field::prim("pitLaneTimeInLaneInMS", U16),
            Field::prim("pitStopTimerInMS", U16),
            Field::prim("pitStopShouldServePen", U8),
        ],
    )
}

/// Per-car participant identity, 56 bytes.
pub(super) fn participants_data() -> Arc<RecordSchema> {
    RecordSchema::new(
        "ParticipantsData",
        vec![
            Field::prim("aiControlled", U8),
            Field::prim("driverId", U8),
            Field::prim("networkId", U8),
            Field::prim("teamId", U8),
            Field::prim("myTeam", U8),
            Field::prim("raceNumber", U8),
            Field::prim("nationality", U8),
            Field::prim_array("name", U8, 48),
            Field::prim("yourTelemetry", U8),
        ],
    )
}

/// Per-car setup sheet, 49 bytes.
pub(super) fn car_setups_data() -> Arc<RecordSchema> {
    RecordSchema::new(
        "CarSetupsData",
        vec![
            Field::prim("frontWing", U8),
            Field::prim("rearWing", U8),
            Field::prim("onThrottle", U8),
            Field::prim("offThrottle", U8),
            Field::prim("frontCamber", F32),
            Field::prim("rearCamber", F32),
            Field::prim("frontToe", F32),
            Field::prim("rearToe", F32),
            Field::prim("frontSuspension", U8),
            Field::prim("rearSuspension", U8),
            Field::prim("frontAntiRollBar", U8),
            Field::prim("rearAntiRollBar", U8),
            Field::prim("frontSuspensionHeight", U8),
            Field::prim("rearSuspensionHeight", U8),
            Field::prim("brakePressure", U8),
            Field::prim("brakeBias", U8),
            Field::prim("rearLeftTyrePressure", F32),
            Field::prim("rearRightTyrePressure", F32),
            Field::prim("frontLeftTyrePressure", F32),
            Field::prim("frontRightTyrePressure", F32),
            Field::prim("ballast", U8),
            Field::prim("fuelLoad", F32),
        ],
    )
}

/// Per-car live telemetry, 60 bytes. Wheel-indexed arrays run RL, RR,
/// FL, FR.
pub(super) fn car_telemetry_data() -> Arc<RecordSchema> {
    RecordSchema::new(
        "CarTelemetryData",
        vec![
            Field::prim("speed", U16),
            Field::prim("throttle", F32),
            Field::prim("steer", F32),
            Field::prim("brake", F32),
            Field::prim("clutch", U8),
            Field::prim("gear", I8),
            Field::prim("engineRPM", U16),
            Field::prim("drs", U8),
            Field::prim("revLightsPercent", U8),
            Field::prim("revLightsBitValue", U16),
            Field::prim_array("brakesTemperature", U16, 4),
            Field::prim_array("tyresSurfaceTemperature", U8, 4),
            Field::prim_array("tyresInnerTemperature", U8, 4),
            Field::prim("engineTemperature", U16),
            Field::prim_array("tyresPressure", F32, 4),
            Field::prim_array("surfaceType", U8, 4),
        ],
    )
}

/// Per-car status, 47 bytes.
pub(super) fn car_status_data() -> Arc<RecordSchema> {
    RecordSchema::new(
        "CarStatusData",
        vec![
            Field::prim("tractionControl", U8),
            Field::prim("antiLockBrakes", U8),
            Field::prim("fuelMix", U8),
            Field::prim("frontBrakeBias", U8),
            Field::prim("pitLimiterStatus", U8),
            Field::prim("fuelInTank", F32),
            Field::prim("fuelCapacity", F32),
            Field::prim("fuelRemainingLaps", F32),
            Field::prim("maxRPM", U16),
            Field::prim("idleRPM", U16),
            Field::prim("maxGears", U8),
            Field::prim("drsAllowed", U8),
            Field::prim("drsActivationDistance", U16),
            Field::prim("actualTyreCompound", U8),
            Field::prim("visualTyreCompound", U8),
            Field::prim("tyresAgeLaps", U8),
            Field::prim("vehicleFiaFlags", I8),
            Field::prim("ersStoreEnergy", F32),
            Field::prim("ersDeployMode", U8),
            Field::prim("ersHarvestedThisLapMGUK", F32),
            Field::prim("ersHarvestedThisLapMGUH", F32),
            Field::prim("ersDeployedThisLap", F32),
            Field::prim("networkPaused", U8),
        ],
    )
}

/// Per-car classification result, 45 bytes.
pub(super) fn final_classification_data() -> Arc<RecordSchema> {
    RecordSchema::new(
        "FinalClassificationData",
        vec![
            Field::prim("position", U8),
            Field::prim("numLaps", U8),
            Field::prim("gridPosition", U8),
            Field::prim("points", U8),
            Field::prim("numPitStops", U8),
            Field::prim("resultStatus", U8),
            Field::prim("bestLapTimeInMS", U32),
            Field::prim("totalRaceTime", F64),
            Field::prim("penaltiesTime", U8),
            Field::prim("numPenalties", U8),
            Field::prim("numTyreStints", U8),
            Field::prim_array("tyreStintsActual", U8, 8),
            Field::prim_array("tyreStintsVisual", U8, 8),
            Field::prim_array("tyreStintsEndLaps", U8, 8),
        ],
    )
}

/// Per-player lobby slot, 53 bytes.
pub(super) fn lobby_info_data() -> Arc<RecordSchema> {
    RecordSchema::new(
        "LobbyInfoData",
        vec![
            Field::prim("aiControlled", U8),
            Field::prim("teamId", U8),
            Field::prim("nationality", U8),
            Field::prim_array("name", U8, 48),
            Field::prim("carNumber", U8),
            Field::prim("readyStatus", U8),
        ],
    )
}

/// Per-car damage state, 42 bytes.
pub(super) fn car_damage_data() -> Arc<RecordSchema> {
    RecordSchema::new(
        "CarDamageData",
        vec![
            Field::prim_array("tyresWear", F32, 4),
            Field::prim_array("tyresDamage", U8, 4),
            Field::prim_array("brakesDamage", U8, 4),
            Field::prim("frontLeftWingDamage", U8),
            Field::prim("frontRightWingDamage", U8),
            Field::prim("rearWingDamage", U8),
            Field::prim("floorDamage", U8),
            Field::prim("diffuserDamage", U8),
            Field::prim("sidepodDamage", U8),
            Field::prim("drsFault", U8),
            Field::prim("ersFault", U8),
            Field::prim("gearBoxDamage", U8),
            Field::prim("engineDamage", U8),
            Field::prim("engineMGUHWear", U8),
            Field::prim("engineESWear", U8),
            Field::prim("engineCEWear", U8),
            Field::prim("engineICEWear", U8),
            Field::prim("engineMGUKWear", U8),
            Field::prim("engineTCWear", U8),
            Field::prim("engineBlown", U8),
            Field::prim("engineSeized", U8),
        ],
    )
}

/// One completed-lap history entry, 11 bytes.
pub(super) fn lap_history_data() -> Arc<RecordSchema> {
    RecordSchema::new(
        "LapHistoryData",
        vec![
            Field::prim("lapTimeInMS", U32),
            Field::prim("sector1TimeInMS", U16),
            Field::prim("sector2TimeInMS", U16),
            Field::prim("sector3TimeInMS", U16),
            Field::prim("lapValidBitFlags", U8),
        ],
    )
}

/// One tyre-stint history entry, 3 bytes.
pub(super) fn tyre_stint_history_data() -> Arc<RecordSchema> {
    RecordSchema::new(
        "TyreStintHistoryData",
        vec![
            Field::prim("endLap", U8),
            Field::prim("tyreActualCompound", U8),
            Field::prim("tyreVisualCompound", U8),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_record_wire_sizes_match_the_published_tables() {
        assert_eq!(car_motion_data().wire_size(), Some(60));
        assert_eq!(marshal_zone().wire_size(), Some(5));
        assert_eq!(weather_forecast_sample().wire_size(), Some(8));
        assert_eq!(lap_data_data().wire_size(), Some(43));
        assert_eq!(participants_data().wire_size(), Some(56));
        assert_eq!(car_setups_data().wire_size(), Some(49));
        assert_eq!(car_telemetry_data().wire_size(), Some(60));
        assert_eq!(car_status_data().wire_size(), Some(47));
        assert_eq!(final_classification_data().wire_size(), Some(45));
        assert_eq!(lobby_info_data().wire_size(), Some(53));
        assert_eq!(car_damage_data().wire_size(), Some(42));
        assert_eq!(lap_history_data().wire_size(), Some(11));
        assert_eq!(tyre_stint_history_data().wire_size(), Some(3));
    }

    #[test]
    fn field_names_are_unique_within_each_record() {
        let records = [
            car_motion_data(),
            marshal_zone(),
            weather_forecast_sample(),
            lap_data_data(),
            participants_data(),
            car_setups_data(),
            car_telemetry_data(),
            car_status_data(),
            final_classification_data(),
            lobby_info_data(),
            car_damage_data(),
            lap_history_data(),
            tyre_stint_history_data(),
        ];
        for record in &records {
            let mut names: Vec<&str> = record.fields().iter().map(|f| f.name).collect();
            names.sort_unstable();
            let before = names.len();
            names.dedup();
            assert_eq!(before, names.len(), "duplicate field in {}", record.name());
        }
    }
}
