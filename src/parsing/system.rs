//! Detection of WhatsApp service notices.
//!
//! Exports interleave real messages with notices such as the encryption
//! banner or "Alice added Bob". They share the header shape of a message,
//! so they can only be told apart by their wording.

/// Phrases that only appear in service notices (compared lowercase).
const NOTICE_PHRASES: &[&str] = &[
    "messages and calls are end-to-end encrypted",
    "created group",
    "changed the subject",
    "changed this group's icon",
    "changed the group description",
    "deleted this group's icon",
    "changed their phone number",
    "joined using this group's invite link",
    "security code changed",
    "you're now an admin",
    "is now an admin",
    "turned on disappearing messages",
    "turned off disappearing messages",
];

/// Leading verbs of membership notices ("added Bob", "removed Carol").
const MEMBERSHIP_PREFIXES: &[&str] = &["added ", "removed ", "left"];

/// Returns `true` if the header line is a service notice rather than a message.
///
/// ```rust
/// use chatpulse::parsing::is_system_notice;
///
/// assert!(is_system_notice("Alice", "Messages and calls are end-to-end encrypted."));
/// assert!(is_system_notice("Alice", "added Bob"));
/// assert!(!is_system_notice("Alice", "I left my keys at home"));
/// ```
pub fn is_system_notice(sender: &str, body: &str) -> bool {
    let body_lower = body.trim_start_matches('\u{200e}').to_lowercase();
    let sender_lower = sender.to_lowercase();

    if NOTICE_PHRASES.iter().any(|p| body_lower.contains(p)) {
        return true;
    }

    if MEMBERSHIP_PREFIXES
        .iter()
        .any(|p| body_lower.starts_with(p) && (body_lower.len() == p.len() || p.ends_with(' ')))
    {
        return true;
    }

    sender.trim().is_empty() || sender_lower == "whatsapp" || sender_lower == "system"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encryption_banner() {
        assert!(is_system_notice(
            "Alice",
            "Messages and calls are end-to-end encrypted. No one outside of this chat can read them."
        ));
    }

    #[test]
    fn test_membership_notices() {
        assert!(is_system_notice("Bob", "added Charlie"));
        assert!(is_system_notice("Bob", "removed Charlie"));
        assert!(is_system_notice("Bob", "left"));
        assert!(is_system_notice("Bob", "\u{200e}left"));
    }

    #[test]
    fn test_group_changes() {
        assert!(is_system_notice("Alice", "created group \"Trip\""));
        assert!(is_system_notice("Alice", "changed the subject to \"Trip 2\""));
        assert!(is_system_notice("Alice", "Your security code changed."));
    }

    #[test]
    fn test_ordinary_messages() {
        assert!(!is_system_notice("Alice", "Hello everyone!"));
        assert!(!is_system_notice("Alice", "leftovers for dinner?"));
        assert!(!is_system_notice("Alice", "I added salt"));
        assert!(!is_system_notice("Bob", "<Media omitted>"));
    }

    #[test]
    fn test_system_senders() {
        assert!(is_system_notice("", "Some message"));
        assert!(is_system_notice("   ", "Some message"));
        assert!(is_system_notice("WhatsApp", "Some message"));
    }
}
