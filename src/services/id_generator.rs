// src/services/id_generator.rs

/// Next free id for `prefix`: one past the highest numeric suffix in use,
/// zero-padded to three digits. Gaps below the highest id are never filled.
///
/// Keys under the prefix whose suffix is not a plain number are ignored.
pub fn next_id<'a, I>(prefix: &str, keys: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let max = keys
        .into_iter()
        .filter_map(|key| key.strip_prefix(prefix))
        .filter(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .unwrap_or(0);

    format!("{prefix}{:03}", max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_store_starts_at_one() {
        assert_eq!(next_id("P", &Vec::new()), "P001");
    }

    #[test]
    fn uses_max_plus_one_not_first_gap() {
        assert_eq!(next_id("P", &keys(&["P001", "P003"])), "P004");
    }

    #[test]
    fn malformed_and_foreign_keys_are_ignored() {
        let ids = keys(&["P002", "PX09", "P", "P-7", "L050", "legacy"]);
        assert_eq!(next_id("P", &ids), "P003");
        assert_eq!(next_id("L", &ids), "L051");
    }

    #[test]
    fn widens_past_three_digits() {
        assert_eq!(next_id("L", &keys(&["L999"])), "L1000");
    }
}
