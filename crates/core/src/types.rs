/// All primary keys are UUIDs generated by the store.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates without a time component (`yyyy-mm-dd`).
pub type CalendarDate = chrono::NaiveDate;
