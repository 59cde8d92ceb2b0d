use std::ffi::OsString;

use super::*;

pub(super) use test_support::SettingsFixture;

pub(super) const DEVELOPER_SETTINGS: &str =
    "[\"switchlog\"]\n\"Force Debug Logging Off\" = false\n\"Developer Mode\" = true\n";

/// Runs the CLI with `args` and returns `(exit code, stdout, stderr)`.
pub(super) fn run_with_args<I, T>(args: I) -> (i32, String, String)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run(args, &mut stdout, &mut stderr);
    (
        code,
        String::from_utf8(stdout).expect("stdout is UTF-8"),
        String::from_utf8(stderr).expect("stderr is UTF-8"),
    )
}

/// Runs `switchlog <command> --config <fixture> <rest...>`.
pub(super) fn run_on(fixture: &SettingsFixture, command: &str, rest: &[&str]) -> (i32, String, String) {
    let mut args: Vec<OsString> = vec!["switchlog".into(), command.into(), "--config".into()];
    args.push(fixture.path().as_os_str().to_owned());
    args.extend(rest.iter().map(OsString::from));
    run_with_args(args)
}
