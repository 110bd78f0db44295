//! Entity lifecycle (create → exists → delete → absent) and the loud
//! failure of unsupported operations.

use reqwest::StatusCode;
use teamcity_test_kit::{
    requests::{checked::CheckedProject, CrudRequest, UncheckedRequests},
    Config, Specifications, TestDataStorage, TestError,
};

use crate::util::{TestServer, PROJECTS};

/// Create a project, observe it, delete it, observe its absence.
#[test]
fn deleted_project_is_gone() -> Result<(), TestError> {
    let mut test = TestServer::new();
    let data = test.storage.add_test_data();
    let project_id = data.project.id.clone().unwrap();
    let locator_path = format!("{PROJECTS}/id:{project_id}");

    let super_spec = test.specs.super_user_spec().with_request_logging();

    let create_mock = test.mock_create_ok(PROJECTS, &super_spec, &data.project);
    let get_mock = test.mock_get_ok(&locator_path, &super_spec, &data.project);
    let delete_mock = test.mock_delete_ok(
        &locator_path,
        &super_spec,
        &format!("Project with id: '{project_id}' was deleted"),
    );

    let checked = CheckedProject::new(super_spec.clone());

    let created = checked.create(&data.project)?;
    assert_eq!(created.id.as_deref(), Some(project_id.as_str()));

    let fetched = checked.get(&project_id)?;
    assert_eq!(fetched.id, created.id);

    let confirmation = checked.delete(&project_id)?;
    assert!(confirmation.contains("was deleted"));

    // Scripted after the delete so it shadows the earlier 200 for this path.
    let gone_mock = test.mock_get_error(
        &locator_path,
        &super_spec,
        404,
        &format!("No project found by locator 'count:1,id:{project_id}'"),
    );

    UncheckedRequests::new(super_spec)
        .projects
        .get(&project_id)?
        .assert_status(StatusCode::NOT_FOUND);

    create_mock.assert();
    get_mock.assert();
    delete_mock.assert();
    gone_mock.assert();
    Ok(())
}

/// The raw layer reports unsupported operations as errors instead of issuing
/// a call or returning an empty result.
#[test]
fn unchecked_update_is_reported_unsupported() {
    let specs = Specifications::new(Config::new("http://localhost:1", "token"));
    let mut storage = TestDataStorage::new();
    let data = storage.add_test_data();

    let requests = UncheckedRequests::new(specs.super_user_spec());

    let result = requests.projects.update("some_project", &data.project);
    assert!(matches!(result, Err(TestError::Unsupported { .. })));

    let result = requests.users.update(&data.user.username, &data.user);
    assert!(matches!(result, Err(TestError::Unsupported { .. })));

    let result = requests.build_types.update("some_build", &data.build_type);
    assert!(matches!(result, Err(TestError::Unsupported { .. })));
}

/// A checked update is a bug in the test itself and must stop it.
#[test]
#[should_panic(expected = "update is not supported for projects")]
fn checked_update_panics() {
    let specs = Specifications::new(Config::new("http://localhost:1", "token"));
    let mut storage = TestDataStorage::new();
    let data = storage.add_test_data();

    CheckedProject::new(specs.super_user_spec()).update("some_project", &data.project);
}
