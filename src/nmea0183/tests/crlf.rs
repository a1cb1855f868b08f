use nom::{Err, IResult, Parser, error::ErrorKind};

use crate::nmea0183::{LineEndingMode, crlf};

#[test]
fn test_crlf_required() {
    let res: IResult<_, _> = crlf(LineEndingMode::Required).parse("*21\r\n");
    let (data, _) = res.unwrap();
    assert_eq!(data, "*21");

    let res: IResult<_, _> = crlf(LineEndingMode::Required).parse("*21");
    match res {
        Err(Err::Error(e)) => assert_eq!(e.code, ErrorKind::CrLf),
        _ => panic!("Unexpected result"),
    }

    // trailing data after the line ending
    let res: IResult<_, _> = crlf(LineEndingMode::Required).parse("*21\r\n$");
    match res {
        Err(Err::Error(e)) => assert_eq!(e.code, ErrorKind::CrLf),
        _ => panic!("Unexpected result"),
    }
}

#[test]
fn test_crlf_forbidden() {
    let res: IResult<_, _> = crlf(LineEndingMode::Forbidden).parse("*21");
    let (data, _) = res.unwrap();
    assert_eq!(data, "*21");

    let res: IResult<_, _> = crlf(LineEndingMode::Forbidden).parse("*21\r\n");
    match res {
        Err(Err::Error(e)) => assert_eq!(e.code, ErrorKind::CrLf),
        _ => panic!("Unexpected result"),
    }
}
