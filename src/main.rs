use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use yansi::Paint;

use droplet_tray::api::{list_all, ApiError, DropletClient, ListAllOptions};
use droplet_tray::app::{self, SystemBrowser};
use droplet_tray::config::{self, Config, Settings, DEFAULT_CONFIG_PATH};
use droplet_tray::menu::{console_url, NO_IPV4_PLACEHOLDER};
use droplet_tray::models::{Droplet, NetworkV4};
use droplet_tray::region::flag_for_region_slug;
use droplet_tray::tray::{ConsoleTray, TrayError};

#[derive(Parser)]
#[command(
    name = "droplet-tray",
    author,
    version,
    about = "Tray icon listing your DigitalOcean droplets",
    long_about = r#"droplet-tray shows a tray icon with the number of droplets on your DigitalOcean account and a menu entry for the first one. Clicking the entry opens its page in the control panel.

The personal access token is read from `config.json` in the working directory:

    { "PersonalAccessToken": "dop_v1_..." }

Examples:
  1) Run the tray:
      droplet-tray
  2) Print every droplet in a table:
      droplet-tray list
"#,
    after_help = "Settings can also come from DO_API_BASE_URL, DO_PAGE_TIMEOUT_SECS and DO_PER_PAGE (or a .env file)."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Path to the JSON file holding PersonalAccessToken
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Base URL of the DigitalOcean API
    #[arg(long, global = true)]
    api_base_url: Option<String>,
    /// Seconds allowed for each page of the droplet listing
    #[arg(long, global = true)]
    page_timeout_secs: Option<u64>,
    /// Droplets requested per page (1-200)
    #[arg(long, global = true)]
    per_page: Option<u32>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the tray icon (default)
    Tray {
        /// Render the menu on the terminal instead of the system tray
        #[arg(long)]
        console: bool,
    },
    /// Print all droplets and exit
    #[command(about = "List droplets", long_about = "Fetch every page of droplets on the account and print them as a table, with region flag and control panel URL.")]
    List,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    config::load_env_file(cli.env_file.as_deref());

    // Nothing touches the network before the token has been read.
    let credentials = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => fail(&e),
    };

    let settings = Settings::from_env().with_overrides(
        cli.api_base_url.as_deref(),
        cli.page_timeout_secs,
        cli.per_page,
    );
    tracing::debug!(?settings, "Resolved settings");

    let client = match DropletClient::authenticate(&credentials.personal_access_token, &settings.api_base_url) {
        Ok(c) => c,
        Err(e) => fail(&e),
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => fail(&e),
    };

    let options = ListAllOptions {
        per_page: settings.per_page,
        page_timeout: settings.page_timeout,
    };

    match cli.command.unwrap_or(Commands::Tray { console: false }) {
        Commands::List => {
            let spinner = fetch_spinner();
            let result = runtime.block_on(list_all(&client, options));
            spinner.finish_and_clear();
            match result {
                Ok(droplets) => print_droplets(&droplets),
                Err(e) => fail(&e),
            }
        }
        Commands::Tray { console } => {
            let listing = runtime.block_on(list_all(&client, options));
            drop(runtime);
            let result = if console {
                app::run(ConsoleTray::stdio(), listing, SystemBrowser)
            } else {
                run_system_tray(listing)
            };
            if let Err(e) = result {
                fail(&e);
            }
        }
    }
}

#[cfg(feature = "native-tray")]
fn run_system_tray(listing: Result<Vec<Droplet>, ApiError>) -> Result<(), TrayError> {
    let tray = droplet_tray::tray::NativeTray::new()?;
    app::run(tray, listing, SystemBrowser)
}

#[cfg(not(feature = "native-tray"))]
fn run_system_tray(listing: Result<Vec<Droplet>, ApiError>) -> Result<(), TrayError> {
    tracing::warn!("Built without the native-tray feature, using the console menu");
    app::run(ConsoleTray::stdio(), listing, SystemBrowser)
}

fn fail(e: &dyn std::fmt::Display) -> ! {
    tracing::error!(%e, "Exiting");
    eprintln!("{}", Paint::new(e.to_string()).red());
    process::exit(1);
}

fn fetch_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Fetching droplets...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_droplets(droplets: &[Droplet]) {
    if droplets.is_empty() {
        println!("{}", Paint::new("(no droplets)").dim());
        return;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["ID", "Name", "Region", "IPv4", "Size", "Status", "Console"]);
    for d in droplets {
        let region = format!(
            "{} {}",
            d.region.display_name(),
            flag_for_region_slug(&d.region.slug)
        );
        table.add_row(vec![
            d.id.to_string(),
            d.name.clone(),
            region.trim_end().to_string(),
            d.first_ipv4_network()
                .map(NetworkV4::describe)
                .unwrap_or_else(|| NO_IPV4_PLACEHOLDER.to_string()),
            d.size_summary(),
            d.status.clone().unwrap_or_default(),
            console_url(d.id),
        ]);
    }
    println!("\n{table}");
    println!("\n{}\n", Paint::new(format!("{} droplets", droplets.len())).cyan());
}
