use std::fmt::Debug;

/// Resolves the host environment to an IANA zone name.
///
/// Injected wherever a default time zone is needed, so callers can substitute
/// a fixed zone in tests.
pub trait TimezoneResolver: Debug {
    fn resolve(&self) -> Option<String>;
}

/// Resolver backed by the operating system's time zone configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimezone;

impl TimezoneResolver for SystemTimezone {
    fn resolve(&self) -> Option<String> {
        iana_time_zone::get_timezone().ok()
    }
}

/// The zone a query should carry: the explicit flag value when given, the
/// resolver's zone otherwise, UTC when detection fails.
pub fn effective_timezone(explicit: Option<String>, resolver: &dyn TimezoneResolver) -> String {
    explicit
        .or_else(|| resolver.resolve())
        .unwrap_or_else(|| "UTC".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FixedZone(&'static str);

    impl TimezoneResolver for FixedZone {
        fn resolve(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[derive(Debug)]
    struct UnknownZone;

    impl TimezoneResolver for UnknownZone {
        fn resolve(&self) -> Option<String> {
            None
        }
    }

    #[test]
    fn explicit_zone_wins_over_resolver() {
        let zone = effective_timezone(Some("Europe/Rome".into()), &FixedZone("Asia/Tokyo"));
        assert_eq!(zone, "Europe/Rome");
    }

    #[test]
    fn resolver_zone_used_when_no_flag() {
        let zone = effective_timezone(None, &FixedZone("Asia/Tokyo"));
        assert_eq!(zone, "Asia/Tokyo");
    }

    #[test]
    fn falls_back_to_utc_when_detection_fails() {
        let zone = effective_timezone(None, &UnknownZone);
        assert_eq!(zone, "UTC");
    }
}
