use buildprep_e2e_tests::{
    TestProject, init_tracing, setup_test_project, write_stub_generator, write_test_config,
};
use buildprep_lib::cli::{Command, ResolvedCommand, resolve_command, run_configure};
use predicates::prelude::*;
use std::path::Path;

fn build_configure_params(
    project: &TestProject,
    config_path: &Path,
) -> buildprep_lib::cli::ConfigureParams {
    let command = Command::Configure {
        dependency_dir: project.dependency_dir.to_str().unwrap().to_string(),
        config_path: Some(config_path.to_str().unwrap().to_string()),
        project_root: project.project_root.to_str().unwrap().to_string(),
        build_dir: None,
    };
    match resolve_command(command).expect("Failed to resolve configure command") {
        ResolvedCommand::Configure(params) => params,
        _ => unreachable!("Resolved command type mismatch"),
    }
}

#[tokio::test]
async fn test_configure_creates_build_dir_and_invokes_generator() {
    init_tracing();

    let project = setup_test_project().expect("Failed to setup test project");
    let generator = write_stub_generator(project.temp_dir.path(), 0)
        .expect("Failed to write stub generator");
    let config_path =
        write_test_config(&project, &generator).expect("Failed to write test config");

    let params = build_configure_params(&project, &config_path);
    let result = run_configure(params).await;

    assert!(result.is_ok(), "Configure should succeed: {result:?}");

    let build_dir = project.project_root.join("build");
    assert!(build_dir.is_dir(), "Build directory should be created");

    let args = std::fs::read_to_string(build_dir.join("args.txt"))
        .expect("Stub generator should have recorded its arguments");
    let expected_define = format!("-DGLEW_DIR={}", project.dependency_dir.display());
    assert!(
        predicate::str::contains(expected_define.as_str()).eval(&args),
        "Generator arguments should embed the dependency path, got: {args}"
    );
    assert!(
        args.lines().any(|line| line == ".."),
        "Generator should be pointed at the parent directory as source root, got: {args}"
    );

    let cwd = std::fs::read_to_string(build_dir.join("cwd.txt"))
        .expect("Stub generator should have recorded its working directory");
    assert_eq!(
        Path::new(cwd.trim())
            .canonicalize()
            .expect("Recorded cwd should exist"),
        build_dir.canonicalize().expect("Build dir should exist"),
        "Generator must run from inside the build directory"
    );
}

#[tokio::test]
async fn test_generator_failure_status_is_not_fatal() {
    init_tracing();

    let project = setup_test_project().expect("Failed to setup test project");
    let generator = write_stub_generator(project.temp_dir.path(), 3)
        .expect("Failed to write stub generator");
    let config_path =
        write_test_config(&project, &generator).expect("Failed to write test config");

    let params = build_configure_params(&project, &config_path);
    let result = run_configure(params).await;

    // The generator's exit status is fire-and-forget: it is logged but does
    // not fail the bootstrap.
    assert!(result.is_ok(), "Configure should succeed: {result:?}");
    assert!(project.project_root.join("build").is_dir());
}

#[tokio::test]
async fn test_configure_is_idempotent_over_an_existing_build_dir() {
    init_tracing();

    let project = setup_test_project().expect("Failed to setup test project");
    let generator = write_stub_generator(project.temp_dir.path(), 0)
        .expect("Failed to write stub generator");
    let config_path =
        write_test_config(&project, &generator).expect("Failed to write test config");

    let first = run_configure(build_configure_params(&project, &config_path)).await;
    let second = run_configure(build_configure_params(&project, &config_path)).await;

    assert!(first.is_ok(), "First configure should succeed: {first:?}");
    assert!(
        second.is_ok(),
        "Re-running over an existing build directory should succeed: {second:?}"
    );
}

#[tokio::test]
async fn test_missing_generator_program_is_a_spawn_error() {
    init_tracing();

    let project = setup_test_project().expect("Failed to setup test project");
    let missing = project.temp_dir.path().join("no-such-generator");
    let config_path =
        write_test_config(&project, &missing).expect("Failed to write test config");

    let params = build_configure_params(&project, &config_path);
    let result = run_configure(params).await;

    assert!(
        matches!(
            result,
            Err(buildprep_lib::BuildPrepError::GeneratorSpawn { .. })
        ),
        "Expected a generator spawn error, got {result:?}"
    );
}
