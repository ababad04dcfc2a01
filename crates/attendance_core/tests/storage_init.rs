use attendance_core::{init_storage, AttendanceConfig, AttendanceSession, StoreError};

#[test]
fn init_creates_data_root_and_both_tables() {
    let dir = tempfile::tempdir().unwrap();
    let config = AttendanceConfig::new(dir.path().join("nested").join("data"));

    init_storage(&config).unwrap();

    assert!(config.data_root().is_dir());
    assert!(config.employee_file().is_file());
    assert!(config.attendance_file().is_file());
}

#[test]
fn init_is_idempotent_and_keeps_existing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let config = AttendanceConfig::new(dir.path());

    let mut session = AttendanceSession::open(&config).unwrap();
    session.register_employee("E1", "Ada", "Engineer").unwrap();

    init_storage(&config).unwrap();
    let reopened = AttendanceSession::open(&config).unwrap();
    assert_eq!(reopened.employees().len(), 1);
    assert!(reopened.attendance_rows().is_empty());
}

#[test]
fn unwritable_data_root_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("data");
    std::fs::write(&blocker, "not a directory").unwrap();

    let err = init_storage(&AttendanceConfig::new(&blocker)).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn legacy_rows_with_timestamped_dates_load_as_calendar_dates() {
    let dir = tempfile::tempdir().unwrap();
    let config = AttendanceConfig::new(dir.path());
    init_storage(&config).unwrap();
    std::fs::write(
        config.attendance_file(),
        "ID,Name,Date,Time,Status,Photo,Location\n\
         E1,Ada,2024-01-01 00:00:00,08:15,IN,data/E1/E1_20240101081500.jpg,Gate A\n",
    )
    .unwrap();

    let session = AttendanceSession::open(&config).unwrap();
    let record = &session.attendance_rows()[0];
    assert_eq!(record.date.to_string(), "2024-01-01");
    assert_eq!(record.time.to_string(), "08:15:00");
}
