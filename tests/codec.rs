use gmsm::codec::{base64_decode, base64_encode, hex_decode, hex_encode};
use gmsm::error::Error;

#[test]
fn hex_round_trip() {
    let data = [0x00u8, 0x01, 0xab, 0xff];

    let text = hex_encode(&data);
    assert_eq!(text, "0001abff");
    assert_eq!(hex_decode(&text).unwrap(), data);

    // Uppercase input is accepted.
    assert_eq!(hex_decode("0001ABFF").unwrap(), data);
}

#[test]
fn hex_rejects_malformed_input() {
    assert_eq!(hex_decode("abc"), Err(Error::InvalidEncoding));
    assert_eq!(hex_decode("zz"), Err(Error::InvalidEncoding));
}

#[test]
fn base64_round_trip() {
    let data = b"GM/T transcoding sample \x00\xff";

    let text = base64_encode(data);
    assert_eq!(base64_decode(&text).unwrap(), data);
}

#[test]
fn base64_rejects_malformed_input() {
    assert_eq!(base64_decode("not base64!!"), Err(Error::InvalidEncoding));
    assert_eq!(base64_decode("AAA"), Err(Error::InvalidEncoding));
}
