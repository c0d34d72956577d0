/// Initials shown in the avatar when there is no picture.
///
/// Takes the first letter of up to two words, upper-cased: "honey bee" gives
/// "HB", "Bob" gives "B". A missing or blank name gives an empty string.
pub fn name_to_avatar(name: Option<&str>) -> String {
    name.unwrap_or_default()
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(name_to_avatar(Some("Bob")), "B");
        assert_eq!(name_to_avatar(Some("honey bee")), "HB");
        assert_eq!(name_to_avatar(Some("  queen   of the hive ")), "QO");
        assert_eq!(name_to_avatar(Some("éclair")), "É");
    }

    #[test]
    fn test_no_name() {
        assert_eq!(name_to_avatar(None), "");
        assert_eq!(name_to_avatar(Some("   ")), "");
    }
}
