use std::path::PathBuf;

use anyhow::Context;
use apkpure_versions::config::{self, ClientConfig};
use apkpure_versions::logging::{self, LogConfig};
use apkpure_versions::{ApkPureClient, VariantRecord, VersionSummary};
use clap::Parser;
use tracing::warn;

#[derive(Parser)]
#[command(name = "apkpure-versions")]
#[command(version, about = "List versions and build variants of an Android package on APKPure")]
struct Cli {
    /// Package name (e.g. com.example.app)
    #[arg(short, long)]
    package: String,

    /// Index of the version whose variants are listed (0 = newest)
    #[arg(long, default_value_t = 0)]
    variants: usize,

    /// Only list versions
    #[arg(long)]
    no_variants: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Origin serving search and listing pages
    #[arg(long, default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Host serving direct downloads
    #[arg(long, default_value = config::DEFAULT_DOWNLOAD_BASE_URL)]
    download_base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = config::FETCH_TIMEOUT_SECS)]
    timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Write logs to a file (defaults to the data directory when no path is given)
    #[arg(long)]
    log_file: Option<Option<PathBuf>>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            download_base_url: self.download_base_url.clone(),
            timeout_secs: self.timeout,
            ..Default::default()
        }
    }

    fn log_config(&self) -> LogConfig {
        let file = self
            .log_file
            .as_ref()
            .map(|path| path.clone().unwrap_or_else(config::log_path));
        LogConfig {
            debug: self.debug,
            file,
            json: self.log_json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(&cli.log_config())?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = ApkPureClient::from_config(&cli.client_config())?;

    let versions = client
        .list_versions(&cli.package)
        .await
        .with_context(|| format!("failed to list versions of {}", cli.package))?;

    if cli.no_variants {
        return print_versions(&cli, &versions);
    }

    let selected = versions.get(cli.variants).with_context(|| {
        format!(
            "version index {} out of range ({} versions)",
            cli.variants,
            versions.len()
        )
    })?;

    let variants = match client.list_variants(selected).await {
        Ok(variants) => variants,
        Err(e) => {
            warn!("No variants found for version {}: {}", selected.version_name, e);
            Vec::new()
        }
    };

    if cli.json {
        let output = serde_json::json!({
            "package": cli.package,
            "versions": versions,
            "selected": selected.version_name,
            "variants": variants,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_versions(&cli, &versions)?;
    if !variants.is_empty() {
        print_variants(selected, &variants);
    }
    Ok(())
}

fn print_versions(cli: &Cli, versions: &[VersionSummary]) -> anyhow::Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(versions)?);
        return Ok(());
    }

    println!("Versions for package {}:", cli.package);
    for (i, version) in versions.iter().enumerate() {
        println!(
            "{:3} | title={} | version={:<16} | updatedOn={} | size={:<8}\n    | url={}\n    | downloadUrl={}",
            i,
            version.title,
            version.version_name,
            version.updated_on,
            version.size,
            version.detail_url,
            version.download_url
        );
    }
    Ok(())
}

fn print_variants(version: &VersionSummary, variants: &[VariantRecord]) {
    println!("Variants for version {}:", version.version_name);
    for (i, variant) in variants.iter().enumerate() {
        println!(
            "{:3} | versionCode={:<16} | arch={:<10} | sdk={:<16} | dpi={} | signature={} | sha1={}\n    | downloadUrl={}",
            i,
            variant.version_code,
            variant.architecture,
            variant.android_version_required,
            variant.screen_dpi,
            variant.signature,
            variant.sha1_hash,
            variant.download_url
        );
    }
}
