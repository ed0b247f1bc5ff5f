//! Tests for the edit driver and its response envelope

use super::helpers::*;
use crate::{
    properties::ElementState,
    services::{LayoutService, PageService},
};
use serde_json::json;
use test_log::test;

#[test]
fn test_edit_applies_client_shape() {
    let fixture = editor_fixture(stored_container(
        "root",
        "Root",
        vec![stored_window("w1", "Weather")],
    ));
    let body = json!({
        "childrens": [
            {"id": "left-zone", "type": "container", "childrens": [
                {"id": "w1", "type": "application", "childrens": []}
            ]}
        ]
    })
    .to_string();

    let response = fixture.editor.edit("/home", &body).unwrap().unwrap();
    assert!(response.is_success());
    assert_eq!(response.code, 200);
    assert_eq!(response.status, "success");
    assert_eq!(response.message, "OK");
    assert_eq!(response.data, None);

    let saved = fixture
        .layouts
        .load_layout(&fixture.layout_id)
        .unwrap()
        .unwrap();
    assert_eq!(saved.children.len(), 1);
    let zone = &saved.children[0];
    assert_eq!(zone.name, "left-zone");
    assert_eq!(zone.children.len(), 1);
    match &zone.children[0].state {
        ElementState::Window(state) => assert_eq!(state.title.as_deref(), Some("Weather")),
        other => panic!("expected a window, got {other:?}"),
    }
}

#[test]
fn test_edit_unresolved_path_yields_empty_result() {
    let fixture = editor_fixture(stored_container("root", "Root", vec![]));

    assert!(fixture.editor.edit("/nope", "{}").unwrap().is_none());
    assert_eq!(
        fixture.editor.edit_json("/nope/deeper", "{}").unwrap(),
        json!({})
    );
}

#[test]
fn test_edit_path_splitting_drops_empty_segments() {
    let fixture = editor_fixture(stored_container("root", "Root", vec![]));
    let body = json!({"childrens": []}).to_string();

    let response = fixture.editor.edit("//home/", &body).unwrap().unwrap();
    assert!(response.is_success());
}

#[test]
fn test_edit_malformed_payload_yields_generic_error() {
    let original = stored_container("root", "Root", vec![stored_window("w1", "Weather")]);
    let fixture = editor_fixture(original.clone());

    let response = fixture
        .editor
        .edit("/home", "this is not json")
        .unwrap()
        .unwrap();
    assert_eq!(response.code, 400);
    assert_eq!(response.status, "error");
    assert_eq!(response.message, "can not edit");
    assert_eq!(response.data, Some(json!({})));

    // The stored layout was never touched.
    let saved = fixture
        .layouts
        .load_layout(&fixture.layout_id)
        .unwrap()
        .unwrap();
    assert_eq!(saved, original);
}

#[test]
fn test_edit_window_children_payload_fails() {
    let original = stored_container("root", "Root", vec![stored_window("w1", "Weather")]);
    let fixture = editor_fixture(original.clone());
    let body = json!({
        "childrens": [
            {"id": "w1", "type": "application", "childrens": [
                {"id": "inner", "type": "container", "childrens": []}
            ]}
        ]
    })
    .to_string();

    let response = fixture.editor.edit("/home", &body).unwrap().unwrap();
    assert_eq!(response.message, "can not edit");

    let saved = fixture
        .layouts
        .load_layout(&fixture.layout_id)
        .unwrap()
        .unwrap();
    assert_eq!(saved, original);
}

#[test]
fn test_edit_switches_layout_template() {
    let fixture = editor_fixture(stored_container("root", "Root", vec![]));
    let body = json!({"layout_id": "Dashboard", "childrens": []}).to_string();

    let response = fixture.editor.edit("/home", &body).unwrap().unwrap();
    assert!(response.is_success());

    let page = fixture.pages.load_page(&fixture.page_key).unwrap().unwrap();
    assert_eq!(page.factory_id.as_deref(), Some("Dashboard"));
}

#[test]
fn test_edit_empty_layout_id_keeps_template() {
    let fixture = editor_fixture(stored_container("root", "Root", vec![]));
    let body = json!({"layout_id": "", "childrens": []}).to_string();

    let response = fixture.editor.edit("/home", &body).unwrap().unwrap();
    assert!(response.is_success());

    let page = fixture.pages.load_page(&fixture.page_key).unwrap().unwrap();
    assert_eq!(page.factory_id, None);
}

#[test]
fn test_storage_ids_assigned_on_save() {
    let fixture = editor_fixture(stored_container("root", "Root", vec![]));
    let body = json!({
        "childrens": [{"id": "left-zone", "type": "container", "childrens": []}]
    })
    .to_string();

    fixture.editor.edit("/home", &body).unwrap().unwrap();

    let saved = fixture
        .layouts
        .load_layout(&fixture.layout_id)
        .unwrap()
        .unwrap();
    // The synthesized container acquired a storage id at save time; the
    // root kept its original one.
    assert!(saved.children[0].storage_id.is_some());
    assert_eq!(saved.storage_id.as_deref(), Some("st-root"));
}

#[test]
fn test_edit_drops_unresolvable_nodes_but_succeeds() {
    let fixture = editor_fixture(stored_container(
        "root",
        "Root",
        vec![stored_window("w1", "Weather")],
    ));
    let body = json!({
        "childrens": [
            {"id": "ghost", "type": "application", "childrens": []},
            {"id": "w1", "type": "application", "childrens": []}
        ]
    })
    .to_string();

    let response = fixture.editor.edit("/home", &body).unwrap().unwrap();
    assert!(response.is_success());

    let saved = fixture
        .layouts
        .load_layout(&fixture.layout_id)
        .unwrap()
        .unwrap();
    let names: Vec<&str> = saved.children.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["w1"]);
}
