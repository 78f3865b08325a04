//! Payload builder for unit tests: lays out fields MSB-first and armors them,
//! so each test states the bit layout it exercises.
use alloc::string::String;
use alloc::vec::Vec;

#[derive(Default, Clone)]
pub(crate) struct PayloadBuilder {
    bits: Vec<bool>,
}

impl PayloadBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append the low `width` bits of `value`, zero-extended past 64 bits.
    pub(crate) fn uint(mut self, value: u64, width: usize) -> Self {
        for shift in (0..width).rev() {
            let bit = u32::try_from(shift)
                .ok()
                .and_then(|shift| value.checked_shr(shift))
                .unwrap_or(0);
            self.bits.push(bit & 1 == 1);
        }
        self
    }

    /// Append `value` in `width`-bit two's complement.
    pub(crate) fn int(self, value: i64, width: usize) -> Self {
        self.uint(value as u64, width)
    }

    pub(crate) fn flag(self, value: bool) -> Self {
        self.uint(value as u64, 1)
    }

    pub(crate) fn zeros(self, width: usize) -> Self {
        self.uint(0, width)
    }

    /// Append `text` as 6-bit characters, `'@'` filled up to `width` bits.
    pub(crate) fn text(mut self, text: &str, width: usize) -> Self {
        let mut chars = text.bytes();
        for _ in 0..width / 6 {
            let value = match chars.next() {
                Some(byte @ b'@'..=b'_') => byte - b'@',
                Some(byte @ b' '..=b'?') => byte,
                _ => 0,
            };
            self = self.uint(value as u64, 6);
        }
        self
    }

    /// Common 38-bit header.
    pub(crate) fn header(self, message_id: u8, repeat: u8, mmsi: u32) -> Self {
        self.uint(message_id as u64, 6)
            .uint(repeat as u64, 2)
            .uint(mmsi as u64, 30)
    }

    pub(crate) fn len(&self) -> usize {
        self.bits.len()
    }

    /// Armored payload and its pad bit count.
    pub(crate) fn build(&self) -> (String, usize) {
        let pad = (6 - self.bits.len() % 6) % 6;
        let mut payload = String::new();
        for chunk in self.bits.chunks(6) {
            let mut value = 0u8;
            for index in 0..6 {
                value <<= 1;
                if chunk.get(index).copied().unwrap_or(false) {
                    value |= 1;
                }
            }
            let character = if value < 40 {
                b'0' + value
            } else {
                b'`' + value - 40
            };
            payload.push(character as char);
        }
        (payload, pad)
    }
}

/// `!AIVDM` sentence around `payload` with a valid checksum.
pub(crate) fn sentence(count: u8, index: u8, seq: &str, payload: &str, pad: usize) -> String {
    let body = alloc::format!("AIVDM,{count},{index},{seq},A,{payload},{pad}");
    let checksum = body.bytes().fold(0u8, |acc, byte| acc ^ byte);
    alloc::format!("!{body}*{checksum:02X}")
}

/// Float comparison with a tolerance suited to scaled AIS fields.
pub(crate) fn approx(actual: f64, expected: f64) -> bool {
    let delta = actual - expected;
    -1e-6 < delta && delta < 1e-6
}

#[test]
/// Fields wider than 64 bits are zero-extended instead of overflowing the shift.
fn test_builder_wide_fields() {
    let builder = PayloadBuilder::new().zeros(130).uint(u64::MAX, 70).uint(1, 2);
    assert_eq!(builder.len(), 202);
    assert!(builder.bits[..136].iter().all(|bit| !bit));
    assert!(builder.bits[136..200].iter().all(|bit| *bit));
    assert_eq!(builder.bits[200..], [false, true]);
    let (payload, pad) = builder.build();
    assert_eq!((payload.len(), pad), (34, 2));
}
