#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parser must not panic on any input.
    if let Ok(report) = covbadge::parsers::gocov::parse(data) {
        let totals = report.statement_totals();
        assert!(totals.reached <= totals.total);
    }
});
