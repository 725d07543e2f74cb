use crate::{ProjectNodeRequest, ProjectTreeRequest};

use serde_json::json;

fn tree_request(value: serde_json::Value) -> ProjectTreeRequest {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_tree_request_without_task_counts_deserializes() {
    let request = tree_request(json!({
        "projects": [{ "id": "p1", "name": "Root" }]
    }));

    assert_eq!(request.projects.len(), 1);
    assert!(request.task_counts.is_none());
    assert!(request.validate().is_empty());
}

#[test]
fn test_tree_request_reports_blank_fields_by_index() {
    let request = tree_request(json!({
        "projects": [
            { "id": "p1", "name": "Root" },
            { "id": " ", "name": "" }
        ]
    }));

    let fields: Vec<String> = request.validate().into_iter().map(|v| v.field).collect();

    assert_eq!(fields, vec!["projects[1].id", "projects[1].name"]);
}

#[test]
fn test_tree_request_rejects_completed_above_total() {
    let request = tree_request(json!({
        "projects": [{ "id": "p1", "name": "Root" }],
        "taskCounts": {
            "p1": { "total": 2, "completed": 3 },
            "p2": { "total": 5, "completed": 5 }
        }
    }));

    let violations = request.validate();

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "taskCounts.p1.completed");
}

#[test]
fn test_node_request_defaults_children_and_count() {
    let request: ProjectNodeRequest = serde_json::from_value(json!({
        "project": { "id": "p1", "name": "Root" }
    }))
    .unwrap();

    assert!(request.children.is_empty());
    assert!(request.task_count.is_none());
    assert!(request.validate().is_empty());
}

#[test]
fn test_node_request_rejects_inconsistent_task_count() {
    let request: ProjectNodeRequest = serde_json::from_value(json!({
        "project": { "id": "p1", "name": "Root" },
        "taskCount": { "total": 1, "completed": 4 }
    }))
    .unwrap();

    let violations = request.validate();

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "taskCount.completed");
}
