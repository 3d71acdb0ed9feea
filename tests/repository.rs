//! Repository selection and JSON candidate files on disk.

use std::io::Write;
use talentscope::repository::{self, CandidateRepository, JsonFileRepository};
use talentscope::TalentscopeError;
use tempfile::NamedTempFile;

const RECORDS: &str = r#"[
    {"id": "c-1", "name": "Meera Iyer", "experience": 11, "currentCTC": "42 LPA",
     "currentLocation": "Chennai", "currentEmployer": "Oracle", "lastActive": "Today",
     "skills": ["Java", "Spring Boot"]},
    {"id": "c-2", "name": "Sanjay Kulkarni", "experience": 2, "currentCTC": "not disclosed",
     "currentLocation": "Pune", "currentEmployer": "Wipro", "lastActive": "1 week ago"}
]"#;

fn write_file(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(body.as_bytes()).expect("write candidates");
    file
}

#[test]
fn blank_source_opens_fixture() {
    let repo = repository::open(Some("   ")).expect("fixture opens");
    assert_eq!(repo.describe(), "built-in fixture");
    assert_eq!(repo.list().expect("list").len(), 8);
}

#[test]
fn json_file_lists_in_file_order() {
    let file = write_file(RECORDS);
    let repo = repository::open(file.path().to_str()).expect("file opens");

    let names: Vec<String> = repo.list().expect("list").into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["Meera Iyer", "Sanjay Kulkarni"]);
    assert_eq!(repo.describe(), file.path().display().to_string());
}

#[test]
fn lookups_by_id() {
    let file = write_file(RECORDS);
    let repo = JsonFileRepository::open(file.path()).expect("file opens");

    let found = repo.get_by_id("c-2").expect("lookup").expect("present");
    assert_eq!(found.current_employer, "Wipro");
    assert!(found.skills.is_empty());

    assert!(repo.get_by_id("c-9").expect("lookup").is_none());
    assert!(matches!(
        repo.require("c-9"),
        Err(TalentscopeError::CandidateNotFound(id)) if id == "c-9"
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");
    let err = JsonFileRepository::open(&path).unwrap_err();
    assert!(matches!(err, TalentscopeError::Io(_)));
}

#[test]
fn duplicate_ids_are_rejected() {
    let file = write_file(
        r#"[{"id": "x", "name": "A", "experience": 1, "currentCTC": "5 LPA",
             "currentLocation": "Delhi", "currentEmployer": "IBM", "lastActive": "Today"},
            {"id": "x", "name": "B", "experience": 2, "currentCTC": "6 LPA",
             "currentLocation": "Delhi", "currentEmployer": "IBM", "lastActive": "Today"}]"#,
    );
    let err = JsonFileRepository::open(file.path()).unwrap_err();
    assert!(err.to_string().contains("duplicate candidate id x"));
}
