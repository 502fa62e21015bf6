use crate::output::{Output, OutputFormat};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use review_agg_config::{Config, PathManager};
use serde_json::json;

pub fn run_businesses(output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    if !config_file.exists() {
        output.warn(format!(
            "Configuration file not found at: {}",
            config_file.display()
        ));
        return Ok(());
    }

    let config = Config::load_from_file(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }
            if config.businesses.is_empty() {
                output.info("No businesses linked. Add [[businesses]] entries to config.toml.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Id").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Name").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Linked platforms").add_attribute(comfy_table::Attribute::Bold),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

            for business in &config.businesses {
                let platforms: Vec<String> = business
                    .linked_platforms()
                    .iter()
                    .map(|p| p.to_string())
                    .collect();
                table.add_row(vec![
                    Cell::new(&business.id),
                    Cell::new(&business.name),
                    Cell::new(if platforms.is_empty() {
                        "(none)".to_string()
                    } else {
                        platforms.join(", ")
                    }),
                ]);
            }

            println!("{}", table);
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            let entries: Vec<serde_json::Value> = config
                .businesses
                .iter()
                .map(|b| {
                    json!({
                        "id": b.id,
                        "name": b.name,
                        "platforms": b.linked_platforms().iter().map(|p| p.to_string()).collect::<Vec<_>>(),
                    })
                })
                .collect();
            output.json(&json!({ "businesses": entries }));
        }
    }

    Ok(())
}
