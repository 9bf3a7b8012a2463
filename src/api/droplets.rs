use std::future::Future;
use std::time::Duration;

use super::error::ApiError;
use crate::config::{clamp_per_page, DEFAULT_PAGE_TIMEOUT_SECS, DEFAULT_PER_PAGE};
use crate::models::{Droplet, DropletPage, Pages};

/// Query options for a single page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub page: u32,
    pub per_page: u32,
}

impl ListOptions {
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Something that can return one page of droplets.
pub trait DropletPages {
    fn list_page(
        &self,
        opts: &ListOptions,
    ) -> impl Future<Output = Result<DropletPage, ApiError>> + Send;
}

/// Paging behaviour for [`list_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListAllOptions {
    pub per_page: u32,
    /// Budget for each individual page request.
    pub page_timeout: Duration,
}

impl Default for ListAllOptions {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page_timeout: Duration::from_secs(DEFAULT_PAGE_TIMEOUT_SECS),
        }
    }
}

/// Fetch every droplet on the account, following page links until the API
/// reports the last page.
///
/// Records keep the order the API returned them in. Any failure discards
/// the pages fetched so far.
///
/// # Errors
///
/// Returns `ApiError::Timeout` when a page exceeds `page_timeout`,
/// `ApiError::Pagination` when page links cannot be followed, or whatever
/// error the page source reported.
pub async fn list_all<P: DropletPages>(
    source: &P,
    options: ListAllOptions,
) -> Result<Vec<Droplet>, ApiError> {
    let mut list = Vec::new();
    let mut opts = ListOptions {
        page: 1,
        per_page: clamp_per_page(options.per_page),
    };

    loop {
        let page = tokio::time::timeout(options.page_timeout, source.list_page(&opts))
            .await
            .map_err(|_| ApiError::Timeout {
                page: opts.page,
                timeout: options.page_timeout,
            })??;

        tracing::debug!(page = opts.page, count = page.droplets.len(), "Fetched droplet page");
        if let (1, Some(meta)) = (opts.page, page.meta.as_ref()) {
            tracing::debug!("Account reports {} droplets", meta.total);
        }
        if page.is_last_page() {
            list.extend(page.droplets);
            break;
        }

        let current = current_page(&page)?;
        list.extend(page.droplets);

        let next = current.checked_add(1).ok_or_else(|| {
            ApiError::Pagination(format!("page number overflows after page {}", current))
        })?;
        if next <= opts.page {
            return Err(ApiError::Pagination(format!(
                "next page {} does not advance past page {}",
                next, opts.page
            )));
        }
        opts.page = next;
    }

    tracing::info!("Listed {} droplets", list.len());
    Ok(list)
}

/// The page number a response describes, derived from its `prev` link.
pub fn current_page(page: &DropletPage) -> Result<u32, ApiError> {
    let pages = match page.links.as_ref().and_then(|l| l.pages.as_ref()) {
        Some(pages) => pages,
        None => return Ok(1),
    };
    current_from_pages(pages)
}

fn current_from_pages(pages: &Pages) -> Result<u32, ApiError> {
    match pages.prev.as_deref().filter(|p| !p.is_empty()) {
        Some(prev) => page_for_url(prev)?
            .checked_add(1)
            .ok_or_else(|| ApiError::Pagination(format!("{}: page number overflows", prev))),
        None => Ok(1),
    }
}

/// Extract the `page` query parameter from a pagination link.
pub fn page_for_url(link: &str) -> Result<u32, ApiError> {
    let url = reqwest::Url::parse(link)
        .map_err(|e| ApiError::Pagination(format!("{}: {}", link, e)))?;
    let (_, value) = url
        .query_pairs()
        .find(|(k, _)| k == "page")
        .ok_or_else(|| ApiError::Pagination(format!("{}: missing page parameter", link)))?;
    value
        .parse::<u32>()
        .map_err(|e| ApiError::Pagination(format!("{}: {}", link, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Links;

    fn pages(prev: Option<&str>, next: Option<&str>) -> DropletPage {
        DropletPage {
            droplets: vec![],
            links: Some(Links {
                pages: Some(Pages {
                    first: None,
                    prev: prev.map(str::to_string),
                    next: next.map(str::to_string),
                    last: None,
                }),
            }),
            meta: None,
        }
    }

    #[test]
    fn test_page_for_url() {
        let link = "https://api.digitalocean.com/v2/droplets?page=3&per_page=2";
        assert_eq!(page_for_url(link).unwrap(), 3);
    }

    #[test]
    fn test_page_for_url_missing_param() {
        let err = page_for_url("https://api.digitalocean.com/v2/droplets?per_page=2").unwrap_err();
        assert!(matches!(err, ApiError::Pagination(_)));
    }

    #[test]
    fn test_page_for_url_not_a_url() {
        assert!(matches!(page_for_url("not a url"), Err(ApiError::Pagination(_))));
    }

    #[test]
    fn test_current_page_without_links_is_first() {
        assert_eq!(current_page(&DropletPage::default()).unwrap(), 1);
    }

    #[test]
    fn test_current_page_from_prev_link() {
        let page = pages(Some("https://api.digitalocean.com/v2/droplets?page=2"), None);
        assert_eq!(current_page(&page).unwrap(), 3);
    }

    #[test]
    fn test_current_page_overflowing_prev_link() {
        let page = pages(
            Some("https://api.digitalocean.com/v2/droplets?page=4294967295"),
            Some("https://api.digitalocean.com/v2/droplets?page=2"),
        );
        assert!(matches!(current_page(&page), Err(ApiError::Pagination(_))));
    }

    #[test]
    fn test_current_page_first_page_with_next() {
        let page = pages(None, Some("https://api.digitalocean.com/v2/droplets?page=2"));
        assert_eq!(current_page(&page).unwrap(), 1);
    }

    #[test]
    fn test_is_last_page() {
        assert!(DropletPage::default().is_last_page());
        assert!(pages(Some("https://x.test/?page=1"), None).is_last_page());
        assert!(!pages(None, Some("https://x.test/?page=2")).is_last_page());
    }

    #[test]
    fn test_query_params() {
        let opts = ListOptions { page: 2, per_page: 50 };
        assert_eq!(
            opts.query_params(),
            vec![("page", "2".to_string()), ("per_page", "50".to_string())]
        );
    }
}
