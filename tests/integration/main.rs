#![cfg(unix)]

mod helpers;

mod failures;
mod presets;
mod template_overrides;
