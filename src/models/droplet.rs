use serde::{Deserialize, Serialize};

/// A droplet as returned by `GET /v2/droplets`. Only the fields the tray
/// and the `list` command read are modelled; the rest of the payload is ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Droplet {
    pub id: u64,
    pub name: String,
    pub region: DropletRegion,
    #[serde(default)]
    pub networks: Networks,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub memory: Option<u64>,
    #[serde(default)]
    pub vcpus: Option<u32>,
    #[serde(default)]
    pub disk: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DropletRegion {
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Networks {
    #[serde(default)]
    pub v4: Vec<NetworkV4>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NetworkV4 {
    pub ip_address: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl Droplet {
    /// First IPv4 network in API order, if the droplet has one.
    pub fn first_ipv4_network(&self) -> Option<&NetworkV4> {
        self.networks.v4.first()
    }

    /// First IPv4 address in API order, if the droplet has one.
    pub fn first_ipv4(&self) -> Option<&str> {
        self.first_ipv4_network().map(|n| n.ip_address.as_str())
    }

    /// `"1 vCPU / 1024 MB / 25 GB"`, skipping whatever the API left out.
    pub fn size_summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(vcpus) = self.vcpus {
            let unit = if vcpus == 1 { "vCPU" } else { "vCPUs" };
            parts.push(format!("{} {}", vcpus, unit));
        }
        if let Some(memory) = self.memory {
            parts.push(format!("{} MB", memory));
        }
        if let Some(disk) = self.disk {
            parts.push(format!("{} GB", disk));
        }
        parts.join(" / ")
    }
}

impl DropletRegion {
    /// The slug, followed by the human-readable region name when known.
    pub fn display_name(&self) -> String {
        match self.name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => format!("{} ({})", self.slug, name),
            None => self.slug.clone(),
        }
    }
}

impl NetworkV4 {
    /// The address with its network type, e.g. `"10.0.0.2 (private)"`.
    pub fn describe(&self) -> String {
        match self.kind.as_deref().filter(|k| !k.is_empty()) {
            Some(kind) => format!("{} ({})", self.ip_address, kind),
            None => self.ip_address.clone(),
        }
    }
}
