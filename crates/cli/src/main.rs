//! `greenline` — render catalog views from API payload files.
//!
//! ```text
//! greenline catalog <product-lines.json> <products.json>
//! greenline fields <product-lines.json> <product-line-name>
//! ```
//!
//! Output is JSON on stdout; logs go to stderr (`RUST_LOG`).

use std::path::Path;

use anyhow::{bail, Context};

use greenline_catalog::{
    active_lines, build_fields, group_with, parse_product_lines, parse_products, CatalogConfig,
    ProductLine,
};

const CONFIG_ENV: &str = "GREENLINE_CATALOG_CONFIG";

const USAGE: &str = "usage:
  greenline catalog <product-lines.json> <products.json>
  greenline fields <product-lines.json> <product-line-name>";

fn main() -> anyhow::Result<()> {
    greenline_observability::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let output = match args.as_slice() {
        [cmd, lines, products] if cmd == "catalog" => {
            catalog(Path::new(lines), Path::new(products))?
        }
        [cmd, lines, name] if cmd == "fields" => fields(Path::new(lines), name)?,
        _ => bail!("{USAGE}"),
    };

    println!("{output}");
    Ok(())
}

fn catalog(lines_path: &Path, products_path: &Path) -> anyhow::Result<String> {
    let config = load_config()?;
    let lines = active_lines(&read_lines(lines_path)?);
    let products = parse_products(&read(products_path)?)
        .with_context(|| format!("failed to parse products from {}", products_path.display()))?;

    let catalog = group_with(&products, &lines, &config);
    tracing::info!(
        lines = catalog.len(),
        products = products.len(),
        "catalog rendered"
    );
    serde_json::to_string_pretty(&catalog).context("failed to encode catalog")
}

fn fields(lines_path: &Path, name: &str) -> anyhow::Result<String> {
    let lines = read_lines(lines_path)?;
    let line = lines.iter().find(|l| l.name == name);
    if line.is_none() {
        tracing::warn!(product_line = name, "unknown product line; no fields");
    }

    serde_json::to_string_pretty(&build_fields(line)).context("failed to encode fields")
}

fn load_config() -> anyhow::Result<CatalogConfig> {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        tracing::debug!("{CONFIG_ENV} not set; using built-in catalog config");
        return Ok(CatalogConfig::default());
    };

    let config = CatalogConfig::from_json(&read(Path::new(&path))?)
        .with_context(|| format!("invalid catalog config in {path}"))?;
    tracing::info!(
        path = %path,
        flavor_orders = config.flavor_orders.len(),
        "catalog config loaded"
    );
    Ok(config)
}

fn read_lines(path: &Path) -> anyhow::Result<Vec<ProductLine>> {
    parse_product_lines(&read(path)?)
        .with_context(|| format!("failed to parse product lines from {}", path.display()))
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
