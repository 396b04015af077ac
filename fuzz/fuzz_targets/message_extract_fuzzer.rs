//! Fuzz target for message extraction
//!
//! Drives arbitrary byte streams through `extract_message` at arbitrary
//! budgets to find:
//! - Panics on hostile framing (terminator splits, embedded 0x07/0x08)
//! - Budget checks that admit over-length frames
//! - Extraction loops that stop making progress
//!
//! The extractor should NEVER panic, and every successful extraction
//! must shrink the buffer by the message length plus the terminator.

#![no_main]

use arbitrary::Arbitrary;
use bytes::BytesMut;
use gridpilot_proto::extract_message;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    stream: Vec<u8>,
    budget: u8,
}

fuzz_target!(|input: Input| {
    let budget = usize::from(input.budget);
    let mut inbox = BytesMut::from(&input.stream[..]);

    loop {
        let len_before = inbox.len();
        match extract_message(&mut inbox, budget) {
            Ok(Some(message)) => {
                // Progress: message plus terminator left the buffer.
                assert_eq!(inbox.len(), len_before - message.len() - 2);
            }
            // Needs more bytes or rejected the stream; either way the
            // drain is over for this input.
            Ok(None) | Err(_) => break,
        }
    }
});
