//! Counter driven through [`App`] the same way a page does it.

use clickcount::{conf, display::TextDisplay, App};
use slog::{o, Logger};

use crate::Records;

/// Runs `f` with the [`Records`] drain installed as the scope logger and
/// returns the counts of all the logged `current count` records.
fn logged_counts<F: FnOnce()>(f: F) -> Vec<i64> {
    let records = Records::default();
    let logger = Logger::root(records.clone(), o!());
    slog_scope::scope(&logger, f);
    records.counts_of("current count")
}

#[test]
fn logs_every_read_and_write() {
    let mut app =
        App::new(&conf::Counter { initial: 0 }, TextDisplay::default());

    let logs = logged_counts(|| {
        assert_eq!(app.start().unwrap(), 0);
        assert_eq!(app.display().text(), "0");

        assert_eq!(app.counter().set(123_456_789), 123_456_789);
        assert_eq!(app.counter().get(), 123_456_789);

        assert_eq!(app.on_increment_click().unwrap(), 123_456_790);
    });

    assert_eq!(
        logs,
        vec![0, 123_456_789, 123_456_789, 123_456_789, 123_456_790],
    );
    assert_eq!(app.display().text(), "123456790");
}

#[test]
fn stopped_app_keeps_counting_silently() {
    let mut app =
        App::new(&conf::Counter { initial: 41 }, TextDisplay::default());

    let logs = logged_counts(|| {
        app.start().unwrap();
        app.stop();
        app.on_increment_click().unwrap();
        app.on_increment_click().unwrap();
    });

    assert_eq!(logs, vec![41]);
    assert_eq!(app.display().text(), "43");
    assert_eq!(app.counter().get(), 43);
}
