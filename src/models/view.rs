use crate::core::error::CommandError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the working list before filtering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Insertion order of the working list
    #[default]
    None,
    /// Ascending by id
    Id,
    /// Ascending by name
    Name,
    /// Ascending by email
    Email,
    /// Descending by id
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::Id,
        SortKey::Name,
        SortKey::Email,
        SortKey::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Email => "email",
            SortKey::Newest => "newest",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(SortKey::None),
            "id" => Ok(SortKey::Id),
            "name" => Ok(SortKey::Name),
            "email" => Ok(SortKey::Email),
            "newest" => Ok(SortKey::Newest),
            other => Err(CommandError::InvalidSortKey(other.to_string())),
        }
    }
}

/// How the search box matches records
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Case-insensitive substring of name or email
    #[default]
    Substring,
    /// Multi-token, diacritic-insensitive, in-order character matching
    Fuzzy,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Substring => f.write_str("substring"),
            SearchMode::Fuzzy => f.write_str("fuzzy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parse_roundtrips_display() {
        for key in SortKey::ALL {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_sort_key_parse_is_case_insensitive() {
        assert_eq!("Newest".parse::<SortKey>().unwrap(), SortKey::Newest);
        assert_eq!(" EMAIL ".parse::<SortKey>().unwrap(), SortKey::Email);
    }

    #[test]
    fn test_sort_key_empty_means_none() {
        assert_eq!("".parse::<SortKey>().unwrap(), SortKey::None);
    }

    #[test]
    fn test_sort_key_rejects_unknown() {
        let err = "size".parse::<SortKey>().unwrap_err();
        assert!(matches!(err, CommandError::InvalidSortKey(ref key) if key == "size"));
    }

    #[test]
    fn test_search_mode_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: SearchMode,
        }

        let parsed: Wrapper = toml::from_str(r#"mode = "fuzzy""#).unwrap();
        assert_eq!(parsed.mode, SearchMode::Fuzzy);
    }
}
