// Contact-form validation rules, host-tested from tests/validate_tests.rs.

/// Strict-enough email shape: `local@domain.tld` with a 2+ letter tld and no
/// whitespace. Mirrors the pattern the page always used; not an RFC parser.
pub fn email_looks_valid(raw: &str) -> bool {
    let s = raw.trim();
    if s.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn required_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Whole-form gate for enabling the submit button.
pub fn form_ready(name: &str, email: &str, message: &str) -> bool {
    required_filled(name) && required_filled(message) && email_looks_valid(email)
}
