use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// One decimal place, dropping a trailing `.0`.
pub fn format_score(score: f64) -> String {
    let formatted = format!("{score:.1}");
    match formatted.strip_suffix(".0") {
        Some(whole) if whole != "-0" => whole.to_owned(),
        Some(_) => "0".to_owned(),
        None => formatted,
    }
}

/// Last path component of a submission id.
pub fn short_name(id: &str) -> &str {
    id.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(id)
}

pub fn stable_pair(id: &str) -> (f32, f32) {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    let hash = hasher.finish();

    let x = ((hash & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    let y = (((hash >> 32) & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    ((x * 2.0) - 1.0, (y * 2.0) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_formatting() {
        assert_eq!(format_score(5.0), "5");
        assert_eq!(format_score(7.26), "7.3");
        assert_eq!(format_score(-0.01), "0");
    }

    #[test]
    fn short_names() {
        assert_eq!(short_name("submissions/alice/"), "alice");
        assert_eq!(short_name("bob"), "bob");
        assert_eq!(short_name("/"), "/");
    }

    #[test]
    fn stable_pair_is_deterministic_and_bounded() {
        let (x, y) = stable_pair("alice");
        assert_eq!(stable_pair("alice"), (x, y));
        assert!((-1.0..=1.0).contains(&x) && (-1.0..=1.0).contains(&y));
    }
}
