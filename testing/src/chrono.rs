use std::cell::Cell;

pub const DEFAULT_TIMESTAMP: i64 = 1234567890;

thread_local! {
    static TIMESTAMP: Cell<i64> = const { Cell::new(DEFAULT_TIMESTAMP) };
}

/// Drop-in for `chrono::Utc` that reports a frozen clock, settable per
/// thread through `set_timestamp`.
pub struct Utc;

impl Utc {
    pub fn now() -> ::chrono::DateTime<::chrono::Utc> {
        let ts = TIMESTAMP.with(Cell::get);
        ::chrono::DateTime::from_timestamp(ts, 0)
            .expect("timestamp out of range")
    }
}

pub fn set_timestamp(ts: i64) {
    TIMESTAMP.with(|cell| cell.set(ts));
}
