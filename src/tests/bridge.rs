use crate::{
    Heading, NmeaStreamParser, RawMessage, SeaTalkStreamParser,
    nmea_content::{DBT, Encode, HDM, NmeaSentence, SEA, VHW},
    seatalk::{Depth, NavigationToWaypoint, SeaTalkMessage, TargetWaypointName},
};

/// Feeds `words` and returns the datagrams completed along the way.
fn read_bus(
    parser: &mut SeaTalkStreamParser,
    words: &[u16],
) -> heapless::Vec<SeaTalkMessage, 8> {
    let mut messages = heapless::Vec::new();
    for &word in words {
        if parser.parse(word) {
            let datagram = parser.datagram().unwrap();
            messages
                .push(SeaTalkMessage::from_datagram(datagram))
                .unwrap();
        }
    }
    messages
}

#[test]
fn test_seatalk_to_nmea() {
    let mut parser = SeaTalkStreamParser::new();
    let words = [
        0x100, 0x02, 0x00, 0x7C, 0x00, // depth 12.4 ft
        0x120, 0x01, 0x35, 0x00, // 5.3 kn through water
        0x19C, 0xA1, 0x1C, 0xFC, // heading 237, rudder 4 to port
    ];

    let messages = read_bus(&mut parser, &words);
    assert_eq!(messages.len(), 3);
    assert_eq!(parser.parsed_count(), 3);

    let mut nmea = heapless::Vec::<_, 3>::new();
    for message in &messages {
        let sentence = match message {
            SeaTalkMessage::Depth(depth) => DBT::from_feet(depth.feet()).encode(),
            SeaTalkMessage::SpeedThroughWater(speed) => VHW::from_knots(speed.knots()).encode(),
            SeaTalkMessage::CompassHeadingRudder(heading) => {
                HDM::new(heading.heading() as f32).encode()
            }
            other => panic!("Unexpected datagram {other:?}"),
        };
        nmea.push(sentence.unwrap()).unwrap();
    }

    assert_eq!(nmea[0].as_str(), "$STDBT,12.4,f,,M,,F*21\r\n");
    assert_eq!(nmea[1].as_str(), "$STVHW,,T,,M,5.3,N,,K*7A\r\n");
    assert_eq!(nmea[2].as_str(), "$STHDM,237.0,M*23\r\n");
}

#[test]
fn test_nmea_to_seatalk() {
    let mut parser = NmeaStreamParser::new();
    let input = b"$ECRMB,A,0.000,L,tospace,001,3751.944,N,12219.721,W,0.596,266.197,0.055,V*48\r\n\
                  $ECAPB,A,A,2.345,L,N,V,V,266.243,T,001,266.197,T,266.197,T*35\r\n";

    let mut datagrams = heapless::Vec::<SeaTalkMessage, 4>::new();
    for &byte in input.iter() {
        if !parser.parse(byte) {
            continue;
        }

        match NmeaSentence::decode(parser.sentence().unwrap()) {
            NmeaSentence::RMB(rmb) => {
                let navigation = NavigationToWaypoint::new(
                    rmb.cross_track_error,
                    rmb.bearing_to_destination,
                    rmb.range_to_destination,
                    rmb.direction_to_steer,
                    0x07,
                );
                datagrams.push(navigation.into()).unwrap();
            }
            NmeaSentence::APB(apb) => {
                let target = TargetWaypointName::new(apb.destination_waypoint);
                datagrams.push(target.into()).unwrap();
            }
            other => panic!("Unexpected sentence {other:?}"),
        }
    }

    assert_eq!(parser.invalid_checksum_count(), 0);
    assert_eq!(datagrams.len(), 2);

    match &datagrams[0] {
        SeaTalkMessage::NavigationToWaypoint(navigation) => {
            assert_eq!(navigation.bearing(), Heading::true_north(266.0));
            assert_eq!(navigation.distance(), 0.6);
            assert_eq!(navigation.cross_track_error(), 0.0);
            assert!(navigation.is_valid());
        }
        other => panic!("Unexpected datagram {other:?}"),
    }

    match &datagrams[1] {
        SeaTalkMessage::TargetWaypointName(target) => assert_eq!(target.name(), "0001"),
        other => panic!("Unexpected datagram {other:?}"),
    }
}

#[test]
fn test_sea_tunnel() {
    let original = SeaTalkMessage::from(Depth::new(135.0));
    let words: heapless::Vec<u16, 19> = original.datagram().bus_words().collect();

    let sentence = SEA::new(original.datagram()).encode().unwrap();
    let mut nmea = NmeaStreamParser::new();
    let mut tunneled = None;
    for &byte in sentence.as_bytes() {
        if nmea.parse(byte) {
            match NmeaSentence::decode(nmea.sentence().unwrap()) {
                NmeaSentence::SEA(sea) => tunneled = sea.datagram,
                other => panic!("Unexpected sentence {other:?}"),
            }
        }
    }

    let tunneled = tunneled.unwrap();
    assert_eq!(SeaTalkMessage::from_datagram(tunneled.clone()), original);

    // replay onto the far bus
    let mut bus = SeaTalkStreamParser::new();
    let replayed = read_bus(&mut bus, &words);
    assert_eq!(replayed.as_slice(), &[original]);
    assert_eq!(bus.message(), Some(tunneled.as_bytes()));
}

#[test]
fn test_unknown_traffic_is_forwarded() {
    let mut bus = SeaTalkStreamParser::new();
    let messages = read_bus(&mut bus, &[0x165, 0x00, 0x02]);
    assert!(matches!(messages[0], SeaTalkMessage::Unknown(_)));

    let sentence = SEA::new(messages[0].datagram()).encode().unwrap();
    assert!(sentence.as_str().starts_with("$STSEA,650002*"));

    assert_eq!(
        NmeaSentence::decode("$GPGSV,3,1,11,03,03,111,00*74"),
        NmeaSentence::Unknown("$GPGSV,3,1,11,03,03,111,00*74")
    );
}
