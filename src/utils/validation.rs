use crate::utils::error::{Result, SearchError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SearchError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 只接受 id 選擇器，例如 `#beer-search`
pub fn validate_selector(field_name: &str, selector: &str) -> Result<()> {
    validate_non_empty_string(field_name, selector)?;

    let name = selector.strip_prefix('#').unwrap_or("");
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: selector.to_string(),
            reason: "Selector must be an element id such as #beer-table".to_string(),
        });
    }
    Ok(())
}

pub fn validate_endpoint(field_name: &str, endpoint: &str) -> Result<()> {
    if !endpoint.starts_with('/') || endpoint.contains('?') {
        return Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: endpoint.to_string(),
            reason: "Endpoint must be an absolute path without a query string".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SearchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://example.com").is_ok());
        assert!(validate_url("base_url", "http://localhost:5000").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_selector() {
        assert!(validate_selector("field_selector", "#beer-search").is_ok());
        assert!(validate_selector("field_selector", "").is_err());
        assert!(validate_selector("field_selector", "#").is_err());
        assert!(validate_selector("field_selector", ".beer-search").is_err());
        assert!(validate_selector("field_selector", "#beer table").is_err());
    }

    #[test]
    fn test_validate_endpoint() {
        assert!(validate_endpoint("endpoint", "/beers/search").is_ok());
        assert!(validate_endpoint("endpoint", "beers/search").is_err());
        assert!(validate_endpoint("endpoint", "/beers/search?value=x").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("timeout_seconds", 0, 1).is_err());
    }
}
