pub mod schedule_report;

pub use schedule_report::{DayRow, ScheduleReport, WorkerSchedule};
