// Host-side tests for the contact-form validation rules. The crate itself
// is wasm-only, so the module is included directly.

mod validate {
    include!("../src/validate.rs");
}

use validate::*;

#[test]
fn accepts_ordinary_addresses() {
    assert!(email_looks_valid("someone@example.com"));
    assert!(email_looks_valid("first.last+tag@sub.domain.co"));
    assert!(email_looks_valid("  padded@example.org  "));
}

#[test]
fn rejects_malformed_addresses() {
    assert!(!email_looks_valid(""));
    assert!(!email_looks_valid("plainaddress"));
    assert!(!email_looks_valid("@example.com"));
    assert!(!email_looks_valid("user@"));
    assert!(!email_looks_valid("user@nodot"));
    assert!(!email_looks_valid("user@domain.c"));
    assert!(!email_looks_valid("user@domain.c0m"));
    assert!(!email_looks_valid("two@ats@example.com"));
    assert!(!email_looks_valid("has space@example.com"));
    assert!(!email_looks_valid("user@.com"));
}

#[test]
fn required_fields_ignore_whitespace_padding() {
    assert!(required_filled("hello"));
    assert!(required_filled("  x  "));
    assert!(!required_filled(""));
    assert!(!required_filled("   "));
    assert!(!required_filled("\n\t"));
}

#[test]
fn form_gate_needs_every_required_field() {
    assert!(form_ready("Ada", "ada@example.com", "Hi there"));
    assert!(!form_ready("", "ada@example.com", "Hi there"));
    assert!(!form_ready("Ada", "not-an-email", "Hi there"));
    assert!(!form_ready("Ada", "ada@example.com", "   "));
}
