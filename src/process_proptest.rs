//! Property-based tests for command line construction.
//!
//! These tests use proptest to generate random arguments and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use std::path::PathBuf;

    use crate::dispatcher::ResolvedAction;
    use crate::git::filter_source_files;
    use crate::process::CommandLine;
    use crate::tool::ToolCommand;
    use proptest::prelude::*;

    fn style_check(extra: Vec<String>) -> ResolvedAction {
        let spec = ToolCommand::StyleCheck.spec();
        ResolvedAction {
            spec,
            executable_path: PathBuf::from("/vendor/bin/phpcs"),
            flags: spec.flags_for("Uncanny-Automator"),
            extra_arguments: extra,
        }
    }

    // ============================================================================
    // Rendering property tests
    // ============================================================================

    proptest! {
        /// Property: every pass-through argument is rendered quoted, in order,
        /// after the fixed prefix
        #[test]
        fn rendered_line_quotes_each_argument_in_order(
            args in prop::collection::vec("[^\"]*", 0..8)
        ) {
            let rendered = style_check(args.clone()).command_line(Some("php")).to_string();
            let prefix = r#"php "/vendor/bin/phpcs" -s --standard=Uncanny-Automator --warning-severity=1"#;

            let expected_tail: String = args.iter().map(|a| format!(" \"{}\"", a)).collect();
            prop_assert_eq!(rendered, format!("{}{}", prefix, expected_tail));
        }

        /// Property: the argument vector carries each argument verbatim, even
        /// with quotes and spaces, since no shell parses it
        #[test]
        fn argv_carries_arguments_verbatim(args in prop::collection::vec(".*", 0..8)) {
            let line = style_check(args.clone()).command_line(Some("php"));
            let argv = line.args();

            prop_assert_eq!(argv.len(), 4 + args.len());
            let tail: Vec<String> = argv[4..].iter().map(|s| s.to_string()).collect();
            prop_assert_eq!(tail, args);
        }

        /// Property: dynamic arguments never change the number of fixed tokens
        #[test]
        fn fixed_tokens_are_independent_of_arguments(args in prop::collection::vec(".*", 0..8)) {
            let line = CommandLine::new("php").arg("-s").dynamic_args(args.clone());
            prop_assert_eq!(line.tokens().len(), 1 + args.len());
            prop_assert_eq!(line.args()[0], "-s");
        }
    }

    // ============================================================================
    // Changed-file filter property tests
    // ============================================================================

    proptest! {
        /// Property: the filter keeps exactly the `.php` paths, in order
        #[test]
        fn filter_keeps_php_paths_in_order(paths in prop::collection::vec("[a-z/]{0,8}(\\.php|\\.txt|\\.md)?", 0..16)) {
            let kept = filter_source_files(paths.clone(), "php");
            let expected: Vec<String> = paths.into_iter().filter(|p| p.ends_with(".php")).collect();
            prop_assert_eq!(kept, expected);
        }
    }
}
