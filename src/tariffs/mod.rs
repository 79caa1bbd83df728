//! Static tariff tables backing the quote math.
//!
//! Every lookup normalizes its key first (state names title-cased, truck and
//! material names upper-cased) and matches exactly; there is no partial or
//! fuzzy matching. Fallbacks are named constants applied at the call site.

pub mod freight;
pub mod states;
pub mod trucks;

/// Title-case a state name for table lookup ("madhya pradesh" -> "Madhya Pradesh").
pub fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
