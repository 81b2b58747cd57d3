use crate::helpers::prelude::*;

#[test]
fn vite_preset_writes_manifest_and_index_html() {
    let tools = toolchain().build();
    let dir = tempdir().build();

    binary()
        .with_toolchain(&tools)
        .arg_name("web")
        .arg_preset("vite")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("listed in the generated package.json").from_utf8());

    let manifest = dir.read("web/frontend/package.json");
    assert!(manifest.contains(r#""build": "vite build""#));
    assert!(dir
        .read("web/frontend/index.html")
        .contains(r#"<script type="module" src="/src/main.jsx"></script>"#));
    assert!(dir.read("web/backend/main.go").contains(r#"bson.M{"ping": 1}"#));
    assert!(!dir.exists("web/shared"));
    assert!(dir
        .read("web/.stackforge.toml")
        .contains("include_index_html = true"));
}

#[test]
fn unknown_preset_is_rejected() {
    let dir = tempdir().build();

    binary()
        .arg_name("web")
        .arg_preset("svelte")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid value 'svelte'").from_utf8());

    assert!(!dir.exists("web"));
}
