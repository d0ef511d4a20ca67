// ABOUTME: Tests for docstring section parsing - header detection,
// ABOUTME: section accumulation, and empty-input fallback.

use super::*;

const DOC: &str = "Retrieve a device by name.

Searches DCIM for a device matching the given name.

Args:
    name: Device name to look up.
    site: Optional site slug filter.

Returns:
    The matching device object.

Example:
    netbox_get_device(name=\"sw-core-01\")";

#[test]
fn test_parse_full_docstring() {
    let sections = parse_docstring(DOC);

    assert!(sections.description.starts_with("Retrieve a device by name."));
    assert!(sections.description.contains("Searches DCIM"));
    assert!(sections.args.contains("name: Device name to look up."));
    assert!(sections.args.contains("site: Optional site slug filter."));
    assert_eq!(sections.returns, "The matching device object.");
    assert!(sections.example.contains("netbox_get_device"));
}

#[test]
fn test_parse_empty_docstring() {
    let sections = parse_docstring("");
    assert_eq!(sections.description, NO_DESCRIPTION);
    assert!(sections.args.is_empty());
    assert!(sections.returns.is_empty());
    assert!(sections.example.is_empty());
}

#[test]
fn test_parse_blank_docstring() {
    let sections = parse_docstring("   \n  \n");
    assert_eq!(sections.description, NO_DESCRIPTION);
}

#[test]
fn test_parse_description_only() {
    let sections = parse_docstring("Just a summary line.");
    assert_eq!(sections.description, "Just a summary line.");
    assert!(sections.args.is_empty());
}

#[test]
fn test_headers_are_case_insensitive() {
    let sections = parse_docstring("Summary.\nARGS:\n    x: thing\nreturns:\n    a value");
    assert_eq!(sections.args, "x: thing");
    assert_eq!(sections.returns, "a value");
}

#[test]
fn test_inline_header_content() {
    let sections = parse_docstring("Summary.\nReturns: the result directly");
    assert_eq!(sections.returns, "the result directly");
}

#[test]
fn test_first_line() {
    assert_eq!(first_line(DOC), Some("Retrieve a device by name."));
    assert_eq!(first_line("\n\n  leading blanks\nmore"), Some("leading blanks"));
    assert_eq!(first_line("   "), None);
}
