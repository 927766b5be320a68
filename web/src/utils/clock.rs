use chrono::NaiveDate;

/// Today's date from the local wall clock. Call it from browser-only code
/// (an `Effect`), otherwise SSR picks up the server's date instead.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
