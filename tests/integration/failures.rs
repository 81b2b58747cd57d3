use crate::helpers::prelude::*;

#[test]
fn failing_go_mod_init_stops_before_frontend() {
    let tools = toolchain().fail_on("go", "mod").build();
    let dir = tempdir().build();

    binary()
        .with_toolchain(&tools)
        .current_dir(dir.path())
        .write_stdin("demo\n")
        .assert()
        .failure()
        .stderr(
            predicates::str::contains("backend setup failed")
                .and(predicates::str::contains(
                    "`go mod init backend` exited with status 1",
                ))
                .from_utf8(),
        );

    assert_eq!(tools.calls(), vec!["go mod init backend"]);
    assert!(!dir.exists("demo/backend/main.go"));
    assert!(!dir.exists("demo/frontend/src/App.jsx"));
    assert!(!dir.exists("demo/frontend/package.json"));
    assert!(!dir.exists("demo/.stackforge.toml"));
    // created directories stay
    assert!(dir.is_dir("demo/frontend/src"));
}

#[test]
fn failing_npm_install_keeps_backend() {
    let tools = toolchain().fail_on("npm", "install").build();
    let dir = tempdir().build();

    binary()
        .with_toolchain(&tools)
        .arg_name("demo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("frontend setup failed").from_utf8());

    assert!(dir.exists("demo/backend/main.go"));
    assert!(!dir.exists("demo/frontend/src/App.jsx"));
    assert!(!tools.calls().iter().any(|c| c.starts_with("npx")));
}

#[test]
fn missing_toolchain_is_reported() {
    let dir = tempdir().build();
    let empty_path = tempdir().build();

    binary()
        .env("PATH", empty_path.path())
        .arg_name("demo")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(
            predicates::str::contains("failed to start `go mod init backend`")
                .and(predicates::str::contains("installed and on PATH"))
                .from_utf8(),
        );

    assert!(!dir.exists("demo/frontend/src/App.jsx"));
}
