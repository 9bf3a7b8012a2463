//! Render the droplet list into a tray and react to clicks.

use crate::api::ApiError;
use crate::menu::add_droplet_item;
use crate::models::Droplet;
use crate::tray::{MenuItemId, Tray, TrayError};

pub const TRAY_TITLE: &str = "💧";
pub const LIST_FAILED_TOOLTIP: &str = "Could not load droplets";
pub const FAREWELL: &str = "Goodbye.";

/// Opens URLs for the user.
pub trait Browser {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Opens URLs in the OS default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

pub fn droplet_count_tooltip(count: usize) -> String {
    format!("You have {} droplets", count)
}

/// Set the tray title and tooltip and add an entry for the first droplet.
///
/// Returns the entry id and its console URL, or `None` when there is no
/// droplet to show (empty account or failed listing).
pub fn render<T: Tray>(
    tray: &mut T,
    listing: &Result<Vec<Droplet>, ApiError>,
) -> Result<Option<(MenuItemId, String)>, TrayError> {
    tray.set_title(TRAY_TITLE);

    let droplets = match listing {
        Ok(droplets) => droplets,
        Err(e) => {
            tracing::error!(error = %e, "Could not list droplets");
            tray.set_tooltip(LIST_FAILED_TOOLTIP);
            return Ok(None);
        }
    };

    tray.set_tooltip(&droplet_count_tooltip(droplets.len()));
    match droplets.first() {
        Some(first) => add_droplet_item(tray, first).map(Some),
        None => {
            tracing::info!("No droplets on this account, menu left empty");
            Ok(None)
        }
    }
}

/// Build the click callback: clicks on `entry` open its URL, anything else is ignored.
pub fn click_handler<B>(
    entry: Option<(MenuItemId, String)>,
    browser: B,
) -> impl FnMut(&MenuItemId) + 'static
where
    B: Browser + 'static,
{
    move |clicked: &MenuItemId| {
        let Some((id, url)) = entry.as_ref() else {
            return;
        };
        if clicked != id {
            tracing::trace!(%clicked, "Ignoring click on unrelated menu item");
            return;
        }
        tracing::info!("Opening {}", url);
        if let Err(e) = browser.open(url) {
            tracing::error!(%e, "Failed to open {}", url);
        }
    }
}

pub fn farewell() {
    println!("{}", FAREWELL);
}

/// Render `listing` into `tray` and block in its event loop until the user quits.
pub fn run<T, B>(
    mut tray: T,
    listing: Result<Vec<Droplet>, ApiError>,
    browser: B,
) -> Result<(), TrayError>
where
    T: Tray,
    B: Browser + 'static,
{
    let entry = render(&mut tray, &listing)?;
    tray.run(click_handler(entry, browser), farewell)
}
