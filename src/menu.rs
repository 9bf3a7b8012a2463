use crate::models::Droplet;
use crate::region::flag_for_region_slug;
use crate::tray::{MenuItemId, Tray, TrayError};
use crate::utils::absolute_url;

/// Base of the DigitalOcean control panel droplet pages.
pub const CONSOLE_BASE_URL: &str = "https://cloud.digitalocean.com/droplets";

/// Shown in place of an address for droplets without IPv4 networking.
pub const NO_IPV4_PLACEHOLDER: &str = "no IPv4";

/// A rendered droplet entry: its label and where a click should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropletEntry {
    pub label: String,
    pub url: String,
}

/// `"<name> - <ip> <flag>"`. An unknown region leaves an empty flag after the space.
pub fn format_label(droplet: &Droplet) -> String {
    let ip = droplet.first_ipv4().unwrap_or(NO_IPV4_PLACEHOLDER);
    let flag = flag_for_region_slug(&droplet.region.slug);
    format!("{} - {} {}", droplet.name, ip, flag)
}

pub fn console_url(droplet_id: u64) -> String {
    absolute_url(CONSOLE_BASE_URL, &droplet_id.to_string())
}

pub fn droplet_entry(droplet: &Droplet) -> DropletEntry {
    DropletEntry {
        label: format_label(droplet),
        url: console_url(droplet.id),
    }
}

/// Register one clickable entry for `droplet` and return its id and console URL.
///
/// Every call appends a new entry to the tray menu.
pub fn add_droplet_item<T: Tray>(
    tray: &mut T,
    droplet: &Droplet,
) -> Result<(MenuItemId, String), TrayError> {
    let entry = droplet_entry(droplet);
    let id = tray.add_menu_item(&entry.label)?;
    tracing::debug!(%id, label = %entry.label, "Added droplet menu item");
    Ok((id, entry.url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DropletRegion, NetworkV4, Networks};

    fn droplet(id: u64, name: &str, region: &str, ip: Option<&str>) -> Droplet {
        Droplet {
            id,
            name: name.to_string(),
            region: DropletRegion {
                slug: region.to_string(),
                name: None,
            },
            networks: Networks {
                v4: ip
                    .map(|ip| {
                        vec![NetworkV4 {
                            ip_address: ip.to_string(),
                            kind: Some("public".to_string()),
                        }]
                    })
                    .unwrap_or_default(),
            },
            status: None,
            memory: None,
            vcpus: None,
            disk: None,
        }
    }

    #[test]
    fn test_label_and_url() {
        let entry = droplet_entry(&droplet(123, "web-1", "nyc3", Some("1.2.3.4")));
        assert_eq!(entry.label, "web-1 - 1.2.3.4 🇺🇸");
        assert_eq!(entry.url, "https://cloud.digitalocean.com/droplets/123");
    }

    #[test]
    fn test_label_unknown_region_keeps_separator() {
        let label = format_label(&droplet(7, "db", "xyz1", Some("10.0.0.1")));
        assert_eq!(label, "db - 10.0.0.1 ");
    }

    #[test]
    fn test_label_without_ipv4() {
        let label = format_label(&droplet(7, "db", "fra1", None));
        assert_eq!(label, "db - no IPv4 🇩🇪");
    }

    #[test]
    fn test_label_uses_first_address() {
        let mut d = droplet(1, "multi", "lon1", Some("5.6.7.8"));
        d.networks.v4.push(NetworkV4 {
            ip_address: "10.1.1.1".to_string(),
            kind: Some("private".to_string()),
        });
        assert_eq!(format_label(&d), "multi - 5.6.7.8 🇬🇧");
    }
}
