#![allow(dead_code)]

use droplet_tray::models::{Droplet, DropletPage, DropletRegion, Links, NetworkV4, Networks, Pages};

pub fn droplet(id: u64, name: &str, region: &str, ip: &str) -> Droplet {
    Droplet {
        id,
        name: name.to_string(),
        region: DropletRegion {
            slug: region.to_string(),
            name: None,
        },
        networks: Networks {
            v4: vec![NetworkV4 {
                ip_address: ip.to_string(),
                kind: Some("public".to_string()),
            }],
        },
        status: Some("active".to_string()),
        memory: None,
        vcpus: None,
        disk: None,
    }
}

pub fn page_link(base: &str, page: u32, per_page: u32) -> String {
    format!("{}/v2/droplets?page={}&per_page={}", base, page, per_page)
}

/// Page `page` of `total` pages, with the links DigitalOcean would send.
pub fn page_of(base: &str, page: u32, total: u32, droplets: Vec<Droplet>) -> DropletPage {
    let per_page = droplets.len().max(1) as u32;
    let links = if total <= 1 {
        None
    } else {
        Some(Links {
            pages: Some(Pages {
                first: (page > 1).then(|| page_link(base, 1, per_page)),
                prev: (page > 1).then(|| page_link(base, page - 1, per_page)),
                next: (page < total).then(|| page_link(base, page + 1, per_page)),
                last: (page < total).then(|| page_link(base, total, per_page)),
            }),
        })
    };
    DropletPage {
        droplets,
        links,
        meta: None,
    }
}

/// Three pages of two droplets each, ids 1 through 6.
pub fn three_pages(base: &str) -> Vec<DropletPage> {
    (1..=3u32)
        .map(|p| {
            let first = u64::from(p * 2 - 1);
            page_of(
                base,
                p,
                3,
                vec![
                    droplet(first, &format!("web-{}", first), "nyc3", "10.0.0.1"),
                    droplet(first + 1, &format!("web-{}", first + 1), "ams3", "10.0.0.2"),
                ],
            )
        })
        .collect()
}
