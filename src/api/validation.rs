use super::ApiError;
use crate::domain::AnimeId;

/// Parses the `{id}` path segment into an [`AnimeId`].
pub fn parse_anime_id(raw: &str) -> Result<AnimeId, ApiError> {
    raw.parse::<AnimeId>().map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_anime_id() {
        assert_eq!(parse_anime_id("1").unwrap(), AnimeId::new(1));
        assert_eq!(parse_anime_id("12345").unwrap(), AnimeId::new(12345));
        assert!(parse_anime_id("0").is_err());
        assert!(parse_anime_id("-1").is_err());
        assert!(parse_anime_id("naruto").is_err());
        assert!(parse_anime_id("").is_err());
    }
}
