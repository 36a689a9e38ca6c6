//! Library-level tests for the goonj entry points

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use goonj::cli::{Args, USAGE};
    use goonj::error::GoonjError;
    use goonj::operations::{Action, resolve};
    use goonj::system::MockConsole;
    use goonj::{exit_status, run, run_with_args};
    use std::ffi::OsString;
    use std::io;

    #[test]
    fn empty_invocation_shows_usage() {
        let console = MockConsole::new();
        run(["goonj"], &console).unwrap();

        assert_eq!(console.stdout_contents(), USAGE);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let first = MockConsole::new();
        let second = MockConsole::new();
        run(["goonj"], &first).unwrap();
        run(["goonj"], &second).unwrap();

        assert_eq!(first.stdout_contents(), second.stdout_contents());
    }

    #[test]
    fn help_shows_usage() {
        let console = MockConsole::new();
        run(["goonj", "--help"], &console).unwrap();

        assert_eq!(console.stdout_contents(), USAGE);
    }

    #[test]
    fn positional_arguments_write_nothing() {
        let console = MockConsole::new();
        run(["goonj", "foo", "bar"], &console).unwrap();

        assert_eq!(console.write_count(), 0);
    }

    #[test]
    fn lone_separator_writes_nothing() {
        let console = MockConsole::new();
        run(["goonj", "--"], &console).unwrap();

        assert_eq!(console.write_count(), 0);
        assert!(console.stdout_contents().is_empty());
    }

    #[test]
    fn repeated_help_shows_usage_once() {
        let console = MockConsole::new();
        run(["goonj", "--help", "--help"], &console).unwrap();

        assert_eq!(console.stdout_contents(), USAGE);
        assert_eq!(console.write_count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_accepted_silently() {
        use std::os::unix::ffi::OsStringExt as _;

        let console = MockConsole::new();
        let invocation = [OsString::from("goonj"), OsString::from_vec(vec![0xff])];
        run(invocation, &console).unwrap();

        assert_eq!(console.write_count(), 0);
    }

    #[test]
    fn unknown_option_maps_to_exit_status_two() {
        let console = MockConsole::new();
        let err = run(["goonj", "--nope"], &console).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GoonjError>(),
            Some(GoonjError::UnrecognizedOption { .. })
        ));
        assert_eq!(exit_status(&err), 2);
        assert_eq!(console.write_count(), 0);
    }

    #[test]
    fn broken_stdout_maps_to_exit_status_one() {
        let console = MockConsole::new()
            .with_failing_stdout(io::ErrorKind::BrokenPipe)
            .unwrap();
        let err = run(["goonj"], &console).unwrap_err();

        assert!(err.downcast_ref::<GoonjError>().is_some());
        assert_eq!(exit_status(&err), 1);
        assert_eq!(
            err.to_string(),
            "Output error: Failed to write usage text: mock stdout failure"
        );
    }

    #[test]
    fn broken_stdout_is_harmless_when_nothing_is_printed() {
        let console = MockConsole::new()
            .with_failing_stdout(io::ErrorKind::BrokenPipe)
            .unwrap();

        run(["goonj", "quiet"], &console).unwrap();
    }

    #[test]
    fn run_with_parsed_args() {
        let args = Args {
            help: false,
            arguments: vec![OsString::from("x")],
            argument_count: 1,
        };
        assert_eq!(resolve(&args), Action::NoOp);

        let console = MockConsole::new();
        run_with_args(&args, &console).unwrap();
        assert!(console.stdout_contents().is_empty());
    }

    #[test]
    fn foreign_errors_default_to_exit_status_one() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_status(&err), 1);
    }
}
