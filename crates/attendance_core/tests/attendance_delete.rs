use attendance_core::{
    AttendanceConfig, AttendanceRecord, AttendanceRepository, AttendanceSession,
    AttendanceStatus, CsvAttendanceRepository,
};
use chrono::{NaiveDate, NaiveTime};

fn record(id: &str, day: u32) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_string(),
        name: format!("Employee {id}"),
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        status: AttendanceStatus::In,
        photo: format!("data/{id}/{id}_202401{day:02}090000.jpg"),
        location: "Gate".to_string(),
    }
}

fn seeded(dir: &tempfile::TempDir) -> AttendanceConfig {
    let config = AttendanceConfig::new(dir.path());
    drop(AttendanceSession::open(&config).unwrap());

    let mut repo = CsvAttendanceRepository::load(config.attendance_file()).unwrap();
    repo.append(record("E1", 1)).unwrap();
    repo.append(record("E2", 1)).unwrap();
    repo.append(record("E1", 2)).unwrap();
    config
}

#[test]
fn delete_removes_every_row_for_the_id() {
    let dir = tempfile::tempdir().unwrap();
    let config = seeded(&dir);
    let mut session = AttendanceSession::open(&config).unwrap();

    let outcome = session.delete_attendance("E1").unwrap();

    assert_eq!(outcome.removed, 2);
    assert_eq!(session.attendance_rows(), &[record("E2", 1)]);

    let persisted = CsvAttendanceRepository::load(config.attendance_file()).unwrap();
    assert_eq!(persisted.load_all().unwrap(), vec![record("E2", 1)]);
}

#[test]
fn delete_of_unknown_id_succeeds_with_zero_removed() {
    let dir = tempfile::tempdir().unwrap();
    let config = seeded(&dir);
    let mut session = AttendanceSession::open(&config).unwrap();

    let outcome = session.delete_attendance("E9").unwrap();

    assert_eq!(outcome.removed, 0);
    assert_eq!(session.attendance_rows().len(), 3);
}

#[test]
fn deletable_ids_are_distinct_in_first_seen_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = seeded(&dir);
    let session = AttendanceSession::open(&config).unwrap();

    assert_eq!(session.deletable_ids(), vec!["E1", "E2"]);
}

#[test]
fn failed_delete_keeps_rows_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    let config = seeded(&dir);
    let mut repo = CsvAttendanceRepository::load(config.attendance_file()).unwrap();

    std::fs::remove_file(config.attendance_file()).unwrap();
    std::fs::create_dir(config.attendance_file()).unwrap();

    assert!(repo.delete_by_employee_id("E1").is_err());
    assert_eq!(repo.records().len(), 3);
}
