//! Collision-avoiding rename
//!
//! When an upload's desired name is already taken inside its namespace, the
//! file is stored under the first free numbered variant instead of clobbering
//! the existing object.

use log::info;

use crate::namespace::Namespace;
use crate::storage::FileStore;

/// A display name resolved against the current store contents, paired with
/// the physical key it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub display_name: String,
    pub physical_key: String,
}

/// Split a display name into stem and extension.
///
/// The extension starts at the last dot, but only when something other than
/// dots precedes it. So `a.txt` splits into `a` and `.txt`, `archive.tar.gz`
/// into `archive.tar` and `.gz`, and `.gitignore` is all stem.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

/// Resolve a desired display name to one that is free in the namespace.
///
/// The desired name itself wins when unused. Otherwise numbered variants
/// built from the original stem are probed in order (`a.txt`, `a_1.txt`,
/// `a_2.txt`, ...) and the first free one is taken, so a deleted variant's
/// slot is reused before the sequence grows.
///
/// This is a check-then-act probe against the live store: two concurrent
/// uploads of the same name can both resolve to the same free slot, and the
/// later write overwrites the earlier one.
pub fn deduplicate(store: &FileStore, namespace: &Namespace, desired_name: &str) -> ResolvedName {
    let (stem, extension) = split_name(desired_name);
    let mut candidate = desired_name.to_string();
    let mut counter: u64 = 1;

    loop {
        let physical_key = namespace.physical_key(&candidate);
        if !store.exists(&physical_key) {
            if candidate != desired_name {
                info!("Name {} taken, storing as {}", desired_name, candidate);
            }
            return ResolvedName {
                display_name: candidate,
                physical_key,
            };
        }
        candidate = format!("{}_{}{}", stem, counter, extension);
        counter += 1;
    }
}
