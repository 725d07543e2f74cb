use crate::{ProjectRecord, TaskCount, transform_node};

#[test]
fn test_tree_node_serializes_expected_fields() {
    let record = ProjectRecord {
        description: Some("desc".into()),
        icon: Some("folder".into()),
        ..ProjectRecord::new("p1", "Work").with_parent("ignored")
    };
    let node = transform_node(&record, Vec::new(), Some(TaskCount::new(5, 2)));

    let json = serde_json::to_value(&node).unwrap();
    let object = json.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "children",
            "color",
            "completedTaskCount",
            "depth",
            "description",
            "icon",
            "id",
            "isArchived",
            "name",
            "pendingTaskCount",
            "position",
            "showChildrenTasks",
            "taskCount",
        ]
    );
    assert_eq!(json["taskCount"], 5);
    assert_eq!(json["completedTaskCount"], 2);
    assert_eq!(json["pendingTaskCount"], 3);
    assert_eq!(json["color"], serde_json::Value::Null);
    assert!(json["children"].as_array().unwrap().is_empty());
}

#[test]
fn test_tree_node_iter_is_pre_order() {
    let leaf_a = transform_node(&ProjectRecord::new("a", "A"), Vec::new(), None);
    let leaf_b = transform_node(&ProjectRecord::new("b", "B"), Vec::new(), None);
    let mid = transform_node(&ProjectRecord::new("m", "M"), vec![leaf_a], None);
    let root = transform_node(&ProjectRecord::new("r", "R"), vec![mid, leaf_b], None);

    let ids: Vec<&str> = root.iter().map(|n| n.id.as_str()).collect();

    assert_eq!(ids, vec!["r", "m", "a", "b"]);
    assert_eq!(root.node_count(), 4);
    assert!(!root.is_leaf());
}
