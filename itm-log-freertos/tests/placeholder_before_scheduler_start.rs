#![expect(missing_docs)]

use itm_log::{Clock, ClockReading, Logger};
use itm_log_freertos::{KernelTickCount, TickCountDuration, scheduler_started};
use itm_log_std::MemorySink;

#[test]
fn placeholder_before_scheduler_start() {
    assert!(!scheduler_started());

    let sink = MemorySink::new();
    for clock in [
        Clock::scheduler::<KernelTickCount>(),
        Clock::scheduler::<TickCountDuration>(),
    ] {
        assert_eq!(clock.read(), ClockReading::NotStarted);
        Logger::new(&sink, clock).error("too early");
    }

    assert_eq!(
        sink.contents(),
        "00:00:00:000: ERROR: too early\n00:00:00:000: ERROR: too early\n"
    );
}
