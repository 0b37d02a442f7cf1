use chrono::NaiveDate;
use tracker_core::{Progress, Project, ProjectValidationError, Subcategory};
use uuid::Uuid;

fn deadline() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 6).unwrap()
}

#[test]
fn project_new_sets_defaults() {
    let project = Project::new("Alpha", deadline()).unwrap();

    assert!(!project.id.is_nil());
    assert_eq!(project.name, "Alpha");
    assert_eq!(project.deadline, deadline());
    assert!(project.subcategories.is_empty());
    assert_eq!(project.progress, Progress::ZERO);
}

#[test]
fn subcategory_lookup_by_id() {
    let mut project = Project::new("Alpha", deadline()).unwrap();
    let first = Subcategory::new("a", deadline());
    let second = Subcategory::new("b", deadline());
    let second_id = second.id;
    project.subcategories = vec![first, second];

    assert_eq!(project.subcategory_position(second_id), Some(1));
    assert_eq!(project.subcategory(second_id).unwrap().name, "b");
    assert_eq!(project.subcategory(Uuid::new_v4()), None);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let project_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let sub_id = Uuid::parse_str("66666666-7777-4888-9999-000000000000").unwrap();
    let project = Project {
        id: project_id,
        name: "Alpha".to_string(),
        deadline: deadline(),
        subcategories: vec![Subcategory {
            id: sub_id,
            name: "design".to_string(),
            deadline: deadline(),
        }],
        progress: Progress::new(40),
    };

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["id"], project_id.to_string());
    assert_eq!(json["name"], "Alpha");
    assert_eq!(json["deadline"], "2025-02-06");
    assert_eq!(json["progress"], 40);
    assert_eq!(json["subcategories"][0]["id"], sub_id.to_string());
    assert_eq!(json["subcategories"][0]["deadline"], "2025-02-06");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn deserialize_rejects_progress_above_hundred() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Alpha",
        "deadline": "2025-02-06",
        "subcategories": [],
        "progress": 120
    });

    let err = serde_json::from_value::<Project>(value).unwrap_err();
    assert!(
        err.to_string().contains("progress (120) must be <= 100"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_empty_name_and_defaults_optional_fields() {
    let blank = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "",
        "deadline": "2025-02-06"
    });
    let err = serde_json::from_value::<Project>(blank).unwrap_err();
    assert!(err.to_string().contains("must not be empty"), "{err}");

    let minimal = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Alpha",
        "deadline": "2025-02-06"
    });
    let project: Project = serde_json::from_value(minimal).unwrap();
    assert!(project.subcategories.is_empty());
    assert_eq!(project.progress, Progress::ZERO);
}

#[test]
fn validation_error_messages_are_stable() {
    assert_eq!(
        ProjectValidationError::EmptyName.to_string(),
        "project name must not be empty"
    );
}
