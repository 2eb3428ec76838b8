//! End-to-end decode tests over synthetic 2022-format buffers.

mod common;

use anyhow::{Context, Result};
use common::{WireWriter, header, pad_to};
use gridwire::{GRID_SIZE, PacketBody, PacketError, PacketKind, decode_packet, peek_packet_id};

const MOTION_PACKET_LEN: usize = 1464;
const LAP_DATA_PACKET_LEN: usize = 972;
const PARTICIPANTS_PACKET_LEN: usize = 1257;
const CAR_TELEMETRY_PACKET_LEN: usize = 1347;
const FINAL_CLASSIFICATION_PACKET_LEN: usize = 1015;
const SESSION_HISTORY_PACKET_LEN: usize = 1155;

#[test]
fn session_history_decodes_the_full_fixed_arrays() -> Result<()> {
    // carIdx=3, numLaps=2 - but the wire always carries 100 lap entries
    // and 8 tyre stints; the count fields are informational only.
    let mut buf = header(11);
    buf.push_u8(3); // carIdx
    buf.push_u8(2); // numLaps
    buf.push_u8(1); // numTyreStints
    buf.push_u8(2); // bestLapTimeLapNum
    buf.push_u8(1); // bestSector1LapNum
    buf.push_u8(1); // bestSector2LapNum
    buf.push_u8(2); // bestSector3LapNum
    // Lap 1: 83.456s with three sectors and a valid-flags byte.
    buf.push_u32(83_456);
    buf.push_u16(27_100);
    buf.push_u16(29_256);
    buf.push_u16(27_100);
    buf.push_u8(0x0F);
    pad_to(&mut buf, SESSION_HISTORY_PACKET_LEN);

    let packet = decode_packet(&buf).context("decoding session history")?;
    assert_eq!(packet.kind(), PacketKind::SessionHistory);

    let PacketBody::SessionHistory(history) = &packet.body else {
        panic!("expected session history body");
    };
    assert_eq!(history.u8("carIdx"), Some(3));
    assert_eq!(history.u8("numLaps"), Some(2));

    let laps = history.array("lapHistoryData").context("lap history array")?;
    assert_eq!(laps.len(), 100, "lap history length is schema-fixed, not numLaps-driven");
    let stints = history.array("tyreStintHistoryData").context("tyre stint array")?;
    assert_eq!(stints.len(), 8);

    let first_lap = laps[0].as_record().context("lap record")?;
    assert_eq!(first_lap.u32("lapTimeInMS"), Some(83_456));
    assert_eq!(first_lap.u16("sector2TimeInMS"), Some(29_256));
    assert_eq!(first_lap.u8("lapValidBitFlags"), Some(0x0F));

    // Unwritten tail entries decode as zeroes, not as absent fields.
    let last_lap = laps[99].as_record().context("lap record")?;
    assert_eq!(last_lap.u32("lapTimeInMS"), Some(0));
    Ok(())
}

#[test]
fn exact_length_succeeds_one_byte_short_truncates() {
    let buf = {
        let mut buf = header(11);
        pad_to(&mut buf, SESSION_HISTORY_PACKET_LEN);
        buf
    };
    assert!(decode_packet(&buf).is_ok());

    let short = &buf[..buf.len() - 1];
    assert!(matches!(
        decode_packet(short),
        Err(PacketError::TruncatedBuffer { .. })
    ));
}

#[test]
fn decoding_twice_yields_identical_packets() -> Result<()> {
    let mut buf = header(0);
    pad_to(&mut buf, MOTION_PACKET_LEN);
    // Scatter some non-zero content through the payload.
    buf[100] = 0x5A;
    buf[700] = 0xC3;
    buf[1463] = 0x11;

    let first = decode_packet(&buf).context("first decode")?;
    let second = decode_packet(&buf).context("second decode")?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn motion_packet_places_fields_by_position() -> Result<()> {
    let mut buf = header(0);
    // Cars 0-4 zeroed, then car 5's worldPositionX.
    for _ in 0..5 {
        buf.extend_from_slice(&[0u8; 60]);
    }
    buf.push_f32(123.5); // worldPositionX
    buf.push_f32(-2.0); // worldPositionY
    buf.push_f32(881.25); // worldPositionZ
    pad_to(&mut buf, MOTION_PACKET_LEN);

    let packet = decode_packet(&buf)?;
    let PacketBody::Motion(motion) = &packet.body else {
        panic!("expected motion body");
    };

    let cars = motion.array("carMotionData").context("car motion array")?;
    assert_eq!(cars.len(), GRID_SIZE);

    let car5 = cars[5].as_record().context("car record")?;
    assert_eq!(car5.f32("worldPositionX"), Some(123.5));
    assert_eq!(car5.f32("worldPositionY"), Some(-2.0));
    assert_eq!(car5.f32("worldPositionZ"), Some(881.25));

    let car4 = cars[4].as_record().context("car record")?;
    assert_eq!(car4.f32("worldPositionX"), Some(0.0));

    // Player-only wheel arrays sit after the grid block.
    assert_eq!(motion.array("suspensionPosition").unwrap().len(), 4);
    assert_eq!(motion.array("wheelSlip").unwrap().len(), 4);
    Ok(())
}

#[test]
fn participants_array_ignores_the_active_car_count() -> Result<()> {
    let mut buf = header(4);
    buf.push_u8(2); // numActiveCars
    // First participant: a named human driver.
    buf.push_u8(0); // aiControlled
    buf.push_u8(14); // driverId
    buf.push_u8(0); // networkId
    buf.push_u8(2); // teamId
    buf.push_u8(0); // myTeam
    buf.push_u8(44); // raceNumber
    buf.push_u8(10); // nationality
    let mut name = [0u8; 48];
    name[..8].copy_from_slice(b"HAMILTON");
    buf.extend_from_slice(&name);
    buf.push_u8(1); // yourTelemetry
    pad_to(&mut buf, PARTICIPANTS_PACKET_LEN);

    let packet = decode_packet(&buf)?;
    let PacketBody::Participants(participants) = &packet.body else {
        panic!("expected participants body");
    };

    assert_eq!(participants.u8("numActiveCars"), Some(2));
    let grid = participants.array("participants").context("participants array")?;
    assert_eq!(grid.len(), GRID_SIZE, "per-car array is grid-sized regardless of the count");

    let driver = grid[0].as_record().context("participant record")?;
    assert_eq!(driver.u8("raceNumber"), Some(44));
    assert_eq!(driver.utf8_lossy("name").as_deref(), Some("HAMILTON"));
    Ok(())
}

#[test]
fn car_telemetry_round_trips_mixed_width_fields() -> Result<()> {
    let mut buf = header(6);
    // Car 0 in full: every width the record uses.
    buf.push_u16(301); // speed
    buf.push_f32(0.98); // throttle
    buf.push_f32(-0.25); // steer
    buf.push_f32(0.0); // brake
    buf.push_u8(0); // clutch
    buf.push_i8(-1); // gear (reverse)
    buf.push_u16(11_420); // engineRPM
    buf.push_u8(1); // drs
    buf.push_u8(92); // revLightsPercent
    buf.push_u16(0b0111_1111_1111_1111); // revLightsBitValue
    for temp in [450u16, 452, 441, 447] {
        buf.push_u16(temp); // brakesTemperature
    }
    for temp in [92u8, 94, 90, 91] {
        buf.push_u8(temp); // tyresSurfaceTemperature
    }
    for temp in [88u8, 89, 87, 88] {
        buf.push_u8(temp); // tyresInnerTemperature
    }
    buf.push_u16(105); // engineTemperature
    for pressure in [21.5f32, 21.6, 22.1, 22.0] {
        buf.push_f32(pressure); // tyresPressure
    }
    for surface in [0u8, 0, 0, 0] {
        buf.push_u8(surface); // surfaceType
    }
    pad_to(&mut buf, CAR_TELEMETRY_PACKET_LEN - 3);
    buf.push_u8(0); // mfdPanelIndex
    buf.push_u8(255); // mfdPanelIndexSecondaryPlayer
    buf.push_i8(3); // suggestedGear

    let packet = decode_packet(&buf)?;
    let PacketBody::CarTelemetry(telemetry) = &packet.body else {
        panic!("expected car telemetry body");
    };

    let cars = telemetry.array("carTelemetryData").context("telemetry array")?;
    assert_eq!(cars.len(), GRID_SIZE);

    let car0 = cars[0].as_record().context("car record")?;
    assert_eq!(car0.u16("speed"), Some(301));
    assert_eq!(car0.get("gear").and_then(|v| v.as_i8()), Some(-1));
    assert_eq!(car0.u16("engineRPM"), Some(11_420));
    let brakes = car0.array("brakesTemperature").context("brake temps")?;
    assert_eq!(brakes[1].as_u16(), Some(452));

    assert_eq!(telemetry.get("suggestedGear").and_then(|v| v.as_i8()), Some(3));
    Ok(())
}

#[test]
fn final_classification_reads_the_wire_double() -> Result<()> {
    let mut buf = header(8);
    buf.push_u8(20); // numCars
    // Car 0's classification row.
    buf.push_u8(1); // position
    buf.push_u8(52); // numLaps
    buf.push_u8(3); // gridPosition
    buf.push_u8(25); // points
    buf.push_u8(2); // numPitStops
    buf.push_u8(3); // resultStatus (finished)
    buf.push_u32(78_871); // bestLapTimeInMS
    buf.push_f64(5411.304); // totalRaceTime
    pad_to(&mut buf, FINAL_CLASSIFICATION_PACKET_LEN);

    let packet = decode_packet(&buf)?;
    let PacketBody::FinalClassification(classification) = &packet.body else {
        panic!("expected final classification body");
    };

    let rows = classification.array("classificationData").context("classification array")?;
    let winner = rows[0].as_record().context("row record")?;
    assert_eq!(winner.u8("position"), Some(1));
    assert_eq!(winner.u32("bestLapTimeInMS"), Some(78_871));
    let race_time = winner.get("totalRaceTime").and_then(|v| v.as_f64()).context("race time")?;
    assert!((race_time - 5411.304).abs() < 1e-9);
    assert_eq!(winner.array("tyreStintsActual").unwrap().len(), 8);
    Ok(())
}

#[test]
fn lap_data_trailing_scalars_follow_the_grid_block() -> Result<()> {
    let mut buf = header(2);
    pad_to(&mut buf, LAP_DATA_PACKET_LEN - 2);
    buf.push_u8(7); // timeTrialPBCarIdx
    buf.push_u8(13); // timeTrialRivalCarIdx

    let packet = decode_packet(&buf)?;
    let PacketBody::LapData(lap_data) = &packet.body else {
        panic!("expected lap data body");
    };
    assert_eq!(lap_data.array("lapData").unwrap().len(), GRID_SIZE);
    assert_eq!(lap_data.u8("timeTrialPBCarIdx"), Some(7));
    assert_eq!(lap_data.u8("timeTrialRivalCarIdx"), Some(13));
    Ok(())
}

#[test]
fn header_fields_survive_the_round_trip() -> Result<()> {
    let mut buf = header(1);
    pad_to(&mut buf, 632);

    let packet = decode_packet(&buf)?;
    assert_eq!(packet.header.packet_format, 2022);
    assert_eq!(packet.header.game_major_version, 1);
    assert_eq!(packet.header.game_minor_version, 18);
    assert_eq!(packet.header.packet_id, 1);
    assert_eq!(packet.header.session_uid, 0xABCD_EF01_2345_6789);
    assert!((packet.header.session_time - 12.25).abs() < f32::EPSILON);
    assert_eq!(packet.header.frame_identifier, 777);
    assert_eq!(packet.header.player_car_index, 19);
    assert_eq!(packet.header.secondary_player_car_index, 255);
    Ok(())
}

#[test]
fn packet_id_is_peekable_before_full_decode() {
    for id in 0u8..=11 {
        let buf = header(id);
        assert_eq!(peek_packet_id(&buf).unwrap(), id);
    }
}

#[test]
fn unknown_packet_id_is_recoverable() {
    let mut buf = header(12);
    pad_to(&mut buf, 64);
    match decode_packet(&buf) {
        Err(err @ PacketError::UnknownPacketType { id: 12 }) => {
            assert!(err.is_recoverable());
        }
        other => panic!("expected UnknownPacketType, got {other:?}"),
    }
}

#[test]
fn trailing_bytes_beyond_the_schema_are_ignored() -> Result<()> {
    let mut buf = header(7);
    pad_to(&mut buf, 1058 + 40);

    let packet = decode_packet(&buf)?;
    assert_eq!(packet.kind(), PacketKind::CarStatus);
    Ok(())
}
