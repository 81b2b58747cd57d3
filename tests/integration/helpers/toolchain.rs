use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::{env, iter};

use tempfile::TempDir;

/// Stand-ins for `go`, `npm` and `npx` that log their arguments and touch
/// the files the real tools would create.
pub struct Toolchain {
    dir: TempDir,
    log: PathBuf,
}

pub struct ToolchainBuilder {
    failing: Vec<(String, String)>,
}

pub fn toolchain() -> ToolchainBuilder {
    ToolchainBuilder {
        failing: Vec::new(),
    }
}

impl ToolchainBuilder {
    /// `program subcommand ...` exits with status 1
    pub fn fail_on(mut self, program: &str, subcommand: &str) -> Self {
        self.failing
            .push((program.to_string(), subcommand.to_string()));
        self
    }

    pub fn build(self) -> Toolchain {
        let dir = tempfile::Builder::new()
            .prefix("stackforge-bin")
            .tempdir()
            .unwrap();
        let log = dir.path().join("calls.log");

        for (program, side_effect) in [
            ("go", ""),
            (
                "npm",
                r#"if [ "$1" = "init" ]; then echo '{ "name": "frontend" }' > package.json; fi"#,
            ),
            (
                "npx",
                r#"if [ "$1" = "tailwindcss" ]; then echo '// generated' > tailwind.config.js; fi"#,
            ),
        ] {
            let failures: String = self
                .failing
                .iter()
                .filter(|(p, _)| p == program)
                .map(|(_, sub)| format!("if [ \"$1\" = \"{sub}\" ]; then exit 1; fi\n"))
                .collect();
            let script = format!(
                "#!/bin/sh\necho \"{program} $*\" >> \"{}\"\n{failures}{side_effect}\nexit 0\n",
                log.display()
            );
            write_executable(&dir.path().join(program), &script);
        }

        Toolchain { dir, log }
    }
}

fn write_executable(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap_or_else(|_| panic!("couldn't write {path:?}"));
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .unwrap_or_else(|_| panic!("couldn't make {path:?} executable"));
}

impl Toolchain {
    /// `PATH` with the stubs in front of the real one
    pub fn path_env(&self) -> OsString {
        let current = env::var_os("PATH").unwrap_or_default();
        env::join_paths(iter::once(self.dir.path().to_path_buf()).chain(env::split_paths(&current)))
            .unwrap()
    }

    /// Every invocation so far, as `program args...`
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
