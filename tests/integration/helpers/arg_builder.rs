use std::path::Path;

use assert_cmd::Command;

use crate::helpers::toolchain::Toolchain;

pub fn binary() -> Command {
    let mut command = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    command.env_remove("RUST_LOG");
    command
}

pub trait ArgBuilder {
    fn arg_name(&mut self, name: &str) -> &mut Self;
    fn arg_preset(&mut self, preset: &str) -> &mut Self;
    fn arg_config(&mut self, path: impl AsRef<Path>) -> &mut Self;
    fn arg_templates(&mut self, path: impl AsRef<Path>) -> &mut Self;
    fn arg_destination(&mut self, path: impl AsRef<Path>) -> &mut Self;
    fn with_toolchain(&mut self, toolchain: &Toolchain) -> &mut Self;
}

impl ArgBuilder for Command {
    fn arg_name(&mut self, name: &str) -> &mut Self {
        self.arg("--name").arg(name)
    }

    fn arg_preset(&mut self, preset: &str) -> &mut Self {
        self.arg("--preset").arg(preset)
    }

    fn arg_config(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.arg("--config").arg(path.as_ref())
    }

    fn arg_templates(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.arg("--templates").arg(path.as_ref())
    }

    fn arg_destination(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.arg("--destination").arg(path.as_ref())
    }

    fn with_toolchain(&mut self, toolchain: &Toolchain) -> &mut Self {
        self.env("PATH", toolchain.path_env())
    }
}
