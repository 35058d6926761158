/// Trims the address and checks it has a local part and a domain around a single `@`.
pub fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim();
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    if email.chars().any(char::is_whitespace) {
        return None;
    }
    Some(email.to_string())
}
