const VISIBLE_PREFIX: usize = 4;

/// Masks a credential for safe logging, keeping only a short prefix.
pub fn mask_credential(credential: &str) -> String {
    let trimmed = credential.trim();

    if trimmed.is_empty() {
        return String::from("[NONE]");
    }

    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() <= VISIBLE_PREFIX * 2 {
        return String::from("[REDACTED]");
    }

    let prefix: String = chars[..VISIBLE_PREFIX].iter().collect();
    format!("{}...[REDACTED] ({} chars)", prefix, chars.len())
}
