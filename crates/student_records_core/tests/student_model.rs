use student_records_core::{
    StudentDraft, StudentRecord, StudentValidationError, Subject, GENDER_OPTIONS,
};

fn draft(name: &str, email: &str, math: i32, physics: i32, chemistry: i32) -> StudentDraft {
    StudentDraft {
        name: name.to_string(),
        gender: "Female".to_string(),
        email: email.to_string(),
        contact_number: "0771234567".to_string(),
        address: "12 Lake Road".to_string(),
        mathematics_marks: math,
        physics_marks: physics,
        chemistry_marks: chemistry,
        admission_number: "ADM-001".to_string(),
        semester: "1".to_string(),
    }
}

#[test]
fn total_marks_is_sum_of_subjects() {
    let record = StudentRecord::new(draft("Alice", "alice@example.com", 80, 70, 60));

    assert_eq!(record.total_marks(), 210);
    assert_eq!(record.marks(Subject::Mathematics), 80);
    assert_eq!(record.marks(Subject::Physics), 70);
    assert_eq!(record.marks(Subject::Chemistry), 60);
}

#[test]
fn total_marks_is_exact_for_extreme_values() {
    let record = StudentRecord::new(draft("Max", "max@example.com", i32::MAX, i32::MAX, -1));
    assert_eq!(record.total_marks(), 2 * i64::from(i32::MAX) - 1);
}

#[test]
fn constructor_accepts_values_validation_would_reject() {
    let record = StudentRecord::new(draft("", "", -10, 250, 0));
    assert_eq!(record.total_marks(), 240);
    assert_eq!(record.name(), "");
}

#[test]
fn validate_rejects_blank_name_and_email() {
    assert_eq!(
        draft("  ", "a@example.com", 1, 2, 3).validate(),
        Err(StudentValidationError::EmptyName)
    );
    assert_eq!(
        draft("Alice", "", 1, 2, 3).validate(),
        Err(StudentValidationError::EmptyEmail)
    );
}

#[test]
fn validate_reports_first_out_of_range_subject() {
    let err = draft("Alice", "a@example.com", 90, 101, -1)
        .validate()
        .unwrap_err();
    assert_eq!(
        err,
        StudentValidationError::MarksOutOfRange {
            subject: Subject::Physics,
            value: 101,
        }
    );
    assert!(err.to_string().contains("Physics marks (101)"));
}

#[test]
fn validate_accepts_range_edges() {
    draft("Alice", "a@example.com", 0, 100, 55).validate().unwrap();
}

#[test]
fn into_draft_round_trips_field_values() {
    let original = draft("Bob", "bob@example.com", 40, 50, 60);
    let record = StudentRecord::new(original.clone());
    assert_eq!(record.into_draft(), original);
}

#[test]
fn matches_key_requires_both_name_and_email() {
    let record = StudentRecord::new(draft("Bob", "bob@example.com", 40, 50, 60));
    assert!(record.matches_key("Bob", "bob@example.com"));
    assert!(!record.matches_key("Bob", "other@example.com"));
    assert!(!record.matches_key("bob", "bob@example.com"));
}

#[test]
fn serialization_includes_total_and_deserialization_recomputes_it() {
    let record = StudentRecord::new(draft("Alice", "alice@example.com", 80, 70, 60));

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["contact_number"], "0771234567");
    assert_eq!(json["total_marks"], 210);

    let mut tampered = json.clone();
    tampered["total_marks"] = serde_json::json!(999);
    let decoded: StudentRecord = serde_json::from_value(tampered).unwrap();
    assert_eq!(decoded.total_marks(), 210);
    assert_eq!(decoded, record);
}

#[test]
fn gender_options_match_entry_form() {
    assert_eq!(GENDER_OPTIONS, ["Male", "Female", "Rather not say"]);
}

#[test]
fn subject_parse_is_case_sensitive() {
    assert_eq!(Subject::parse("Chemistry").unwrap(), Subject::Chemistry);
    assert_eq!(Subject::Chemistry.column(), "chemistry_marks");

    let err = Subject::parse("chemistry").unwrap_err();
    assert_eq!(err.0, "chemistry");
    assert!(Subject::parse("Biology").is_err());
    assert!(Subject::parse("mathematics_marks FROM students; --").is_err());
}
