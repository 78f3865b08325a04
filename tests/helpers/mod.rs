//! Sentence and payload builders shared by the integration scenarios.
#![allow(dead_code)]

/// MSB-first bit writer producing armored payloads.
#[derive(Default, Clone)]
pub struct Payload {
    bits: Vec<bool>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uint(mut self, value: u64, width: usize) -> Self {
        for shift in (0..width).rev() {
            let bit = u32::try_from(shift)
                .ok()
                .and_then(|shift| value.checked_shr(shift))
                .unwrap_or(0);
            self.bits.push(bit & 1 == 1);
        }
        self
    }

    pub fn int(self, value: i64, width: usize) -> Self {
        self.uint(value as u64, width)
    }

    /// 6-bit text, `'@'` filled up to `width` bits.
    pub fn text(mut self, text: &str, width: usize) -> Self {
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

    pub fn header(self, message_id: u8, mmsi: u32) -> Self {
        self.uint(message_id as u64, 6).uint(0, 2).uint(mmsi as u64, 30)
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Armored characters and pad bit count.
    pub fn armor(&self) -> (String, usize) {
        let pad = (6 - self.bits.len() % 6) % 6;
        let payload = self
            .bits
            .chunks(6)
            .map(|chunk| {
                let value = (0..6).fold(0u8, |acc, index| {
                    (acc << 1) | chunk.get(index).copied().unwrap_or(false) as u8
                });
                if value < 40 {
                    (b'0' + value) as char
                } else {
                    (b'`' + value - 40) as char
                }
            })
            .collect();
        (payload, pad)
    }
}

/// Checksummed `!AIVDM` sentence.
pub fn aivdm(count: u8, index: u8, seq: &str, payload: &str, pad: usize) -> String {
    let body = format!("AIVDM,{count},{index},{seq},B,{payload},{pad}");
    let checksum = body.bytes().fold(0u8, |acc, byte| acc ^ byte);
    format!("!{body}*{checksum:02X}")
}

/// Split `payload` into checksummed fragments of at most `chunk` characters.
pub fn fragments(payload: &str, pad: usize, chunk: usize, seq: &str) -> Vec<String> {
    let parts: Vec<&str> = payload
        .as_bytes()
        .chunks(chunk)
        .map(|part| std::str::from_utf8(part).unwrap_or_default())
        .collect();
    let count = parts.len() as u8;
    parts
        .iter()
        .enumerate()
        .map(|(index, part)| {
            let last = index + 1 == parts.len();
            aivdm(count, index as u8 + 1, seq, part, if last { pad } else { 0 })
        })
        .collect()
}

pub const TYPE_1: &str = "!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C";
pub const TYPE_5_PART_1: &str =
    "!AIVDM,2,1,1,A,55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp8,0*1C";
pub const TYPE_5_PART_2: &str = "!AIVDM,2,2,1,A,88888888880,2*25";
