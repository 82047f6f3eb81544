//! Locale-aware string collation.
//!
//! Ordering follows the Unicode root collation (CLDR root, tertiary
//! strength) rather than code-point order. Letters such as `ø`, `æ` and `ß`
//! sort next to their base letters and punctuation has its root order.
//! Strings the collator considers equal are then ordered by NFC code points
//! and finally by raw bytes, so the order is total: only byte-identical
//! strings compare `Equal`.
//!
//! ```
//! use std::cmp::Ordering;
//! use ordlist_types::collate::compare;
//!
//! assert_eq!(compare("apple", "Banana"), Ordering::Less);
//! assert_eq!(compare("apple", "Apple"), Ordering::Less);
//! assert_eq!(compare("resume", "résumé"), Ordering::Less);
//! ```

use std::cmp::Ordering;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use unicode_normalization::UnicodeNormalization;

thread_local! {
    // Root data is compiled in; `None` only if the baked data is missing.
    static ROOT: Option<CollatorBorrowed<'static>> = root_collator();
}

fn root_collator() -> Option<CollatorBorrowed<'static>> {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(Default::default(), options).ok()
}

/// Compare two strings in ascending natural order.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    ROOT.with(|root| root.as_ref().map_or(Ordering::Equal, |c| c.compare(a, b)))
        .then_with(|| a.nfc().cmp(b.nfc()))
        .then_with(|| a.cmp(b))
}
