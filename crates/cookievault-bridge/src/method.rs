//! Wire method names exposed on the consent channel.

/// Methods understood by the consent channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GetCookiePreferences,
    SaveCookiePreferences,
}

impl Method {
    /// Parse a wire method name. Unknown names return `None`.
    pub fn parse(name: &str) -> Option<Method> {
        match name {
            "getCookiePreferences" => Some(Self::GetCookiePreferences),
            "saveCookiePreferences" => Some(Self::SaveCookiePreferences),
            _ => None,
        }
    }

    /// The name this method carries on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::GetCookiePreferences => "getCookiePreferences",
            Self::SaveCookiePreferences => "saveCookiePreferences",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_wire_names() {
        for method in [Method::GetCookiePreferences, Method::SaveCookiePreferences] {
            assert_eq!(Method::parse(method.wire_name()), Some(method));
        }
    }

    #[test]
    fn test_unknown_names_do_not_parse() {
        assert_eq!(Method::parse("clearCookiePreferences"), None);
        assert_eq!(Method::parse(""), None);
        // Parsing is case-sensitive, matching the wire exactly.
        assert_eq!(Method::parse("getcookiepreferences"), None);
    }
}
