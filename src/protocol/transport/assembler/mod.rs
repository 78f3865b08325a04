//! AIVDM fragment assembler: rebuilds one armored payload by aggregating the
//! sentences of a multi-part transmission.
//!
//! The first fragment fixes the expected total and the sequential message id;
//! every following fragment must carry the next index and the same identity.
use super::sentence::Sentence;
use crate::error::{DecodeError, ReassemblyError};
use crate::protocol::messages::{decode, AisMessage};
use alloc::string::String;

//==================================================================================Enums and Structs
#[derive(Debug, PartialEq, Eq)]
pub enum ProcessResult {
    /// Sentence rejected; the running sequence was abandoned.
    Rejected(DecodeError),
    /// Sentence accepted but additional fragments are still missing.
    FragmentConsumed,
    /// All expected fragments were received; the complete payload is available.
    MessageComplete(Reassembled),
}

/// Concatenated payload of a complete transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reassembled {
    /// Armored payload, fragments in order.
    pub body: String,
    /// Pad bits of the last fragment.
    pub pad_bits: u8,
    /// Number of sentences making up the payload.
    pub consumed: usize,
    /// Receiver timestamp appended to the last fragment, if any.
    pub receiver_timestamp: Option<u64>,
    /// `VDO` transmission from the receiving station.
    pub own_vessel: bool,
}

/// Possible states for a reassembly session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum SessionState {
    Inactive,
    InProgress,
}

/// Transient state of one multi-part reassembly.
#[derive(Debug, Clone)]
pub struct FragmentAssembler {
    state: SessionState,
    total: u8,
    reviewed: u8,
    sequence_id: Option<u8>,
    body: String,
}

impl Default for FragmentAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentAssembler {
    /// Instantiate the assembler with no session in progress.
    pub const fn new() -> Self {
        Self {
            state: SessionState::Inactive,
            total: 0,
            reviewed: 0,
            sequence_id: None,
            body: String::new(),
        }
    }

    /// Reset the session and make it available again.
    fn reset(&mut self) {
        self.state = SessionState::Inactive;
        self.total = 0;
        self.reviewed = 0;
        self.sequence_id = None;
        self.body.clear();
    }

    /// Number of fragments accepted by the running session.
    pub fn reviewed(&self) -> usize {
        self.reviewed as usize
    }

    //==================================================================================Process Functions
    /// Process a sentence that may belong to the current transmission.
    ///
    /// Returns a `ProcessResult` indicating whether the sentence was rejected,
    /// consumed, or completed the payload.
    pub fn process_sentence(&mut self, line: &str) -> ProcessResult {
        let sentence = match Sentence::parse(line) {
            Ok(sentence) => sentence,
            Err(error) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Sentence rejected: {}", error);
                self.reset();
                return ProcessResult::Rejected(error);
            }
        };

        if self.state == SessionState::Inactive {
            // First fragment: carries the total expected count.
            if sentence.fragment_index != 1 {
                return ProcessResult::Rejected(DecodeError::BadFragments);
            }
            self.state = SessionState::InProgress;
            self.total = sentence.fragment_count;
            self.sequence_id = sentence.sequence_id;
        } else if sentence.fragment_index != self.reviewed + 1
            || sentence.fragment_count != self.total
            || sentence.sequence_id != self.sequence_id
        {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "Fragment {}/{} out of sequence after {} of {}",
                sentence.fragment_index,
                sentence.fragment_count,
                self.reviewed,
                self.total
            );
            self.reset();
            return ProcessResult::Rejected(DecodeError::BadFragments);
        }

        self.body.push_str(sentence.body);
        self.reviewed += 1;

        if self.reviewed < self.total {
            return ProcessResult::FragmentConsumed;
        }

        let completed = Reassembled {
            body: core::mem::take(&mut self.body),
            pad_bits: sentence.pad_bits,
            consumed: self.total as usize,
            receiver_timestamp: sentence.receiver_timestamp,
            own_vessel: sentence.own_vessel,
        };
        // Release the session for the next payload.
        self.reset();
        ProcessResult::MessageComplete(completed)
    }
}

//==================================================================================Reassembly
/// Reassemble the transmission starting at `fragments[start_index]`.
///
/// On failure `consumed` counts the fragments accepted before the problem
/// (at least one), so a caller walking a batch always makes progress and
/// retries the offending sentence as the start of a new transmission.
pub fn reassemble<S: AsRef<str>>(
    fragments: &[S],
    start_index: usize,
) -> Result<Reassembled, ReassemblyError> {
    let mut assembler = FragmentAssembler::new();
    let candidates = fragments.get(start_index..).unwrap_or(&[]);

    for line in candidates {
        let accepted = assembler.reviewed();
        match assembler.process_sentence(line.as_ref()) {
            ProcessResult::FragmentConsumed => continue,
            ProcessResult::MessageComplete(reassembled) => return Ok(reassembled),
            ProcessResult::Rejected(error) => {
                return Err(ReassemblyError {
                    error,
                    consumed: accepted.max(1),
                });
            }
        }
    }

    // Ran out of sentences before the announced total.
    let error = if candidates.is_empty() {
        DecodeError::BadMsgContent
    } else {
        DecodeError::BadFragments
    };
    Err(ReassemblyError {
        error,
        consumed: assembler.reviewed().max(1),
    })
}

//==================================================================================Batch decoding
/// One message decoded from its sentence(s).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedSentence {
    pub message: AisMessage,
    /// Number of sentences the message spanned.
    pub consumed: usize,
    pub receiver_timestamp: Option<u64>,
    pub own_vessel: bool,
}

/// Iterator decoding a batch of sentences, one item per transmission.
///
/// Failures are yielded and skipped; they never stop the batch.
pub struct SentenceDecoder<'a, S> {
    lines: &'a [S],
    position: usize,
}

impl<'a, S: AsRef<str>> SentenceDecoder<'a, S> {
    pub fn new(lines: &'a [S]) -> Self {
        Self { lines, position: 0 }
    }
}

impl<S: AsRef<str>> Iterator for SentenceDecoder<'_, S> {
    type Item = Result<DecodedSentence, ReassemblyError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.lines.len() {
            return None;
        }

        let outcome = reassemble(self.lines, self.position).and_then(|reassembled| {
            decode(&reassembled.body, reassembled.pad_bits as usize)
                .map(|message| DecodedSentence {
                    message,
                    consumed: reassembled.consumed,
                    receiver_timestamp: reassembled.receiver_timestamp,
                    own_vessel: reassembled.own_vessel,
                })
                .map_err(|error| ReassemblyError {
                    error,
                    consumed: reassembled.consumed,
                })
        });

        self.position += match &outcome {
            Ok(decoded) => decoded.consumed,
            Err(failure) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "Skipping {} sentence(s): {}",
                    failure.consumed,
                    failure.error
                );
                failure.consumed
            }
        };
        Some(outcome)
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
