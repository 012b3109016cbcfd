#![cfg(test)]

use std::io::Write;

use bilabel_core::statistics::configure_statistic_logging;
use bilabel_core::statistics::log_statistic;
use bilabel_core::statistics::log_statistic_postfix;
use bilabel_core::statistics::should_log_statistics;

/// A writer which rejects every write.
struct ClosedWriter;

impl Write for ClosedWriter {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "writer is closed",
        ))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn failing_statistic_writer_does_not_abort_logging() {
    assert!(!should_log_statistics());

    configure_statistic_logging("%% stat:", Some("%% end"), None, Some(Box::new(ClosedWriter)));
    assert!(should_log_statistics());

    log_statistic("number_of_entities", 3);
    log_statistic_postfix();
}
