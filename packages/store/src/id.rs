//! Id and timestamp generation.
//!
//! Ids look like `"exercise-1756100000000-9f3a6b"`: a prefix, the
//! creation time in epoch milliseconds, and a random hex suffix. Unique
//! within a session, not cryptographically strong. Both helpers are
//! platform-aware: WASM goes through `js_sys`, native through the
//! standard library and `rand`.

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Generate a fresh id with the given prefix.
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}-{:x}", now_millis(), random_suffix())
}

fn random_suffix() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * u64::MAX as f64) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        rand::random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_carries_prefix() {
        let id = new_id("exercise");
        assert!(id.starts_with("exercise-"));
        assert_eq!(id.split('-').count(), 3);
    }

    #[test]
    fn test_new_ids_are_unique() {
        let a = new_id("rest");
        let b = new_id("rest");
        assert_ne!(a, b);
    }

    #[test]
    fn test_now_millis_is_positive() {
        assert!(now_millis() > 0);
    }
}
