use crate::ProjectRecord;

#[test]
fn test_project_record_new() {
    let record = ProjectRecord::new("p1", "Inbox");

    assert_eq!(record.id, "p1");
    assert_eq!(record.name, "Inbox");
    assert_eq!(record.position, 0);
    assert!(record.is_root());
    assert!(!record.is_archived);
    assert!(!record.show_children_tasks);
}

#[test]
fn test_project_record_with_parent() {
    let record = ProjectRecord::new("c1", "Child")
        .with_parent("p1")
        .with_position(3);

    assert_eq!(record.parent_id.as_deref(), Some("p1"));
    assert_eq!(record.position, 3);
    assert!(!record.is_root());
}

#[test]
fn test_project_record_deserializes_camel_case_with_defaults() {
    let json = r##"{
        "id": "p1",
        "name": "Work",
        "color": "#ff0000",
        "isArchived": true,
        "showChildrenTasks": true,
        "parentId": null
    }"##;

    let record: ProjectRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.id, "p1");
    assert_eq!(record.color.as_deref(), Some("#ff0000"));
    assert_eq!(record.icon, None);
    assert_eq!(record.position, 0);
    assert!(record.is_archived);
    assert!(record.show_children_tasks);
    assert!(record.is_root());
}
