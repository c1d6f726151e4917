//! Attribute name interning.
//!
//! Dioxus attributes carry `&'static str` names, while child elements
//! described at runtime (fixtures, controller data) own theirs. Each distinct
//! name is leaked once and reused afterwards; the set of attribute names an
//! app uses is small and fixed.

use std::collections::HashSet;
use std::sync::OnceLock;

use parking_lot::Mutex;

static NAMES: OnceLock<Mutex<HashSet<&'static str>>> = OnceLock::new();

pub(crate) fn intern(name: &str) -> &'static str {
    let mut names = NAMES.get_or_init(|| Mutex::new(HashSet::new())).lock();
    if let Some(&existing) = names.get(name) {
        return existing;
    }
    let leaked: &'static str = Box::leak(name.to_owned().into_boxed_str());
    names.insert(leaked);
    leaked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_pointer() {
        let a = intern("aria-label");
        let b = intern(&String::from("aria-label"));
        assert_eq!(a, "aria-label");
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn distinct_names_stay_distinct() {
        assert_ne!(intern("data-a"), intern("data-b"));
    }
}
