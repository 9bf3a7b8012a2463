/// Join a base URL and a path with exactly one slash between them.
/// Absolute `path`s are returned unchanged.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base, trimmed)
}

#[cfg(test)]
mod tests {
    use super::absolute_url;

    #[test]
    fn test_joins_with_single_slash() {
        assert_eq!(absolute_url("https://api.digitalocean.com", "/v2/droplets"), "https://api.digitalocean.com/v2/droplets");
        assert_eq!(absolute_url("https://api.digitalocean.com/", "v2/droplets"), "https://api.digitalocean.com/v2/droplets");
        assert_eq!(absolute_url("https://cloud.digitalocean.com/droplets/", "/123"), "https://cloud.digitalocean.com/droplets/123");
    }

    #[test]
    fn test_empty_path_returns_base() {
        assert_eq!(absolute_url("http://127.0.0.1:8080/", "/"), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_absolute_path_wins() {
        assert_eq!(absolute_url("http://a.test", "https://b.test/x"), "https://b.test/x");
    }
}
