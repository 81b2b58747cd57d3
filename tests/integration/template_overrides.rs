use crate::helpers::prelude::*;

#[test]
fn template_directory_replaces_builtin_files() {
    let tools = toolchain().build();
    let templates = tempdir()
        .file(
            "frontend.app_component.liquid",
            indoc! {r#"
                export default function App() {
                  return <h1>{{ project_name }}</h1>;
                }
            "#},
        )
        .build();
    let dir = tempdir().build();

    binary()
        .with_toolchain(&tools)
        .arg_name("custom")
        .arg_templates(templates.path())
        .current_dir(dir.path())
        .assert()
        .success();

    assert_eq!(
        dir.read("custom/frontend/src/App.jsx"),
        "export default function App() {\n  return <h1>custom</h1>;\n}\n"
    );
    assert!(dir
        .read("custom/backend/main.go")
        .contains("mongo.Connect(nil,"));
}

#[test]
fn missing_template_directory_is_fatal() {
    let dir = tempdir().build();

    binary()
        .arg_name("custom")
        .arg_templates(dir.path().join("nowhere"))
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("does not exist").from_utf8());
}
