use crate::error::AppError;

/// Characters never allowed in the local part, rosters end up in HTML.
const FORBIDDEN: &[char] = &['<', '>', '"', '\'', '`', '&', '\\'];

/// Accepts `local@domain` where `local` is non-empty and `domain` matches
/// the school domain exactly. The split happens at the last `@`.
pub fn validate_email(email: &str, school_domain: &str) -> Result<(), AppError> {
    match email.rsplit_once('@') {
        Some((local, domain)) if valid_local(local) && domain == school_domain => Ok(()),
        _ => Err(AppError::InvalidEmail {
            domain: school_domain.to_string(),
        }),
    }
}

fn valid_local(local: &str) -> bool {
    !local.is_empty()
        && !local
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || FORBIDDEN.contains(&c))
}
