//! Hardware address helpers

/// Strip `:` separators and lowercase a hardware address
///
/// ```
/// assert_eq!(vegehub_types::simplify_mac("AA:BB:CC:DD:EE:FF"), "aabbccddeeff");
/// assert_eq!(vegehub_types::simplify_mac(""), "");
/// ```
pub fn simplify_mac(mac: &str) -> String {
    mac.chars()
        .filter(|c| *c != ':')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplify_mixed_case() {
        assert_eq!(simplify_mac("aA:0b:Cc:12:eE:Ff"), "aa0bcc12eeff");
    }

    #[test]
    fn test_simplify_without_separators() {
        assert_eq!(simplify_mac("AABBCCDDEEFF"), "aabbccddeeff");
    }
}
