use crate::LiteralRule;
use crate::commands::check::LineFailure;
use crate::commands::check::check_source;
use crate::commands::check::literal_lines;
use libodata_parser::LiteralParseError;

/// Verifies that blank lines are skipped, line numbers stay 1-based
/// and CRLF endings are trimmed.
#[test]
fn literal_lines_skips_blanks_and_trims_cr() {
    let lines: Vec<_> = literal_lines(b"42\r\n\n'x'\n").collect();
    assert_eq!(lines, [(1, &b"42"[..]), (3, &b"'x'"[..])]);
}

/// Verifies that a file of valid literals produces no failures.
#[test]
fn check_source_all_valid() {
    let report = check_source(b"null\n3.14\nduration'P1D'\n", LiteralRule::Primitive);
    assert_eq!(report.num_literals, 3);
    assert!(report.failures.is_empty());
}

/// Verifies that failures carry their line number and reason.
#[test]
fn check_source_reports_failures() {
    let report = check_source(b"42\n42x\nnope\n", LiteralRule::Primitive);
    assert_eq!(report.num_literals, 3);
    assert_eq!(
        report.failures,
        [
            LineFailure {
                line: 2,
                error: LiteralParseError::TrailingInput { end: 2, len: 3 },
            },
            LineFailure {
                line: 3,
                error: LiteralParseError::NoMatch { offset: 0 },
            },
        ],
    );
}

/// Verifies that the rule selects the grammar.
#[test]
fn check_source_uses_selected_rule() {
    let source = b"[1,2]\n{\"a\":true}\n";
    assert!(check_source(source, LiteralRule::Json).failures.is_empty());
    assert!(check_source(source, LiteralRule::ArrayOrObject).failures.is_empty());
    assert_eq!(check_source(source, LiteralRule::Primitive).failures.len(), 2);
    assert!(check_source(b"Point(1.0 2.0)\n", LiteralRule::Geo).failures.is_empty());
}
