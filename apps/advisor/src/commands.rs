//! Subcommands of `mesa-advisor`.
//!
//! Each command loads its input, calls one mesa-core routine and returns a
//! JSON value; `main` prints it.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use mesa_core::validation::{validate_restock_budget, validate_restock_table};
use mesa_core::{
    inventory_value, low_stock, optimal_change, optimize_restock, restock_candidates,
    settle_tender, sort_by_stock, CatalogProduct, InventoryRecord, Money, PaymentMethod,
};

use crate::config::AdvisorConfig;
use crate::error::{AdvisorError, AdvisorResult};

#[derive(Debug, Parser)]
#[command(
    name = "mesa-advisor",
    about = "Change, stock and restock advice for Mesa POS",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Bills and coins for a change amount
    Change {
        /// Amount in pesos, e.g. 125750 or 125750.50
        #[arg(long, allow_hyphen_values = true)]
        amount: Money,
    },

    /// Change owed for a payment
    Tender {
        /// cash | card | nequi
        #[arg(long)]
        method: PaymentMethod,

        /// Amount handed over, in pesos
        #[arg(long)]
        received: Money,

        /// Order total, in pesos
        #[arg(long)]
        total: Money,
    },

    /// Inventory ordered by quantity, scarcest first
    Sort {
        /// JSON array of inventory records ("-" for stdin)
        #[arg(long)]
        input: PathBuf,
    },

    /// Total purchase value of an inventory
    Value {
        /// JSON array of inventory records ("-" for stdin)
        #[arg(long)]
        input: PathBuf,
    },

    /// Records at or below a stock threshold
    LowStock {
        /// JSON array of inventory records ("-" for stdin)
        #[arg(long)]
        input: PathBuf,

        /// Defaults to MESA_LOW_STOCK_THRESHOLD
        #[arg(long)]
        threshold: Option<i64>,
    },

    /// Most profitable purchase list within a budget
    Restock {
        /// JSON array of catalog products ("-" for stdin)
        #[arg(long)]
        input: PathBuf,

        /// Budget in whole pesos
        #[arg(long, allow_hyphen_values = true)]
        budget: i64,
    },
}

/// Total reported by `value`.
#[derive(Debug, Serialize)]
pub struct ValueReport {
    pub records: usize,
    pub total_cents: i64,
    pub total: f64,
}

pub fn execute(command: Command, config: &AdvisorConfig) -> AdvisorResult<Value> {
    match command {
        Command::Change { amount } => to_json(&optimal_change(amount)?),

        Command::Tender {
            method,
            received,
            total,
        } => {
            let settlement = settle_tender(method, received, total)?;
            info!(%method, change = %settlement.change, "tender settled");
            to_json(&settlement)
        }

        Command::Sort { input } => {
            let rows = load_inventory(&input)?;
            to_json(&sort_by_stock(&rows))
        }

        Command::Value { input } => {
            let rows = load_inventory(&input)?;
            to_json(&value_report(&rows)?)
        }

        Command::LowStock { input, threshold } => {
            let rows = load_inventory(&input)?;
            let threshold = threshold.unwrap_or(config.low_stock_threshold);
            let low = low_stock(&rows, threshold);
            info!(threshold, low = low.len(), "low stock report");
            to_json(&low)
        }

        Command::Restock { input, budget } => {
            validate_restock_budget(budget, config.max_restock_budget)?;
            let catalog = load_catalog(&input)?;
            let candidates = restock_candidates(&catalog);
            validate_restock_table(candidates.len(), budget, config.max_table_cells)?;
            info!(
                products = catalog.len(),
                candidates = candidates.len(),
                budget,
                "running restock optimizer"
            );
            to_json(&optimize_restock(budget, &candidates)?)
        }
    }
}

pub fn value_report(rows: &[InventoryRecord]) -> AdvisorResult<ValueReport> {
    let total = inventory_value(rows, rows.len())?;
    Ok(ValueReport {
        records: rows.len(),
        total_cents: total.cents(),
        total: total.as_major_f64(),
    })
}

fn to_json<T: Serialize>(value: &T) -> AdvisorResult<Value> {
    serde_json::to_value(value).map_err(AdvisorError::Output)
}

// =============================================================================
// Input Loading
// =============================================================================

fn load_inventory(path: &Path) -> AdvisorResult<Vec<InventoryRecord>> {
    let rows: Vec<InventoryRecord> = read_json(path)?;
    check_each(path, &rows, InventoryRecord::validate)?;
    Ok(rows)
}

fn load_catalog(path: &Path) -> AdvisorResult<Vec<CatalogProduct>> {
    let products: Vec<CatalogProduct> = read_json(path)?;
    check_each(path, &products, CatalogProduct::validate)?;
    Ok(products)
}

fn check_each<T, F>(path: &Path, items: &[T], check: F) -> AdvisorResult<()>
where
    F: Fn(&T) -> Result<(), mesa_core::ValidationError>,
{
    for (index, item) in items.iter().enumerate() {
        check(item).map_err(|source| AdvisorError::Record {
            path: path.display().to_string(),
            index,
            source,
        })?;
    }
    Ok(())
}

/// Reads JSON from `path`, or from stdin when `path` is `-`.
fn read_json<T: DeserializeOwned>(path: &Path) -> AdvisorResult<T> {
    let label = path.display().to_string();

    if path == Path::new("-") {
        return parse_json(io::stdin().lock(), &label);
    }

    let file = File::open(path).map_err(|source| AdvisorError::Read {
        path: label.clone(),
        source,
    })?;
    parse_json(BufReader::new(file), &label)
}

pub fn parse_json<T: DeserializeOwned, R: Read>(reader: R, label: &str) -> AdvisorResult<T> {
    serde_json::from_reader(reader).map_err(|source| AdvisorError::Json {
        path: label.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn config() -> AdvisorConfig {
        AdvisorConfig::default()
    }

    /// Writes `contents` to a JSON file in a fresh scratch directory.
    fn fixture(name: &str, contents: Value) -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, contents.to_string()).unwrap();
        (dir, path)
    }

    fn inventory_fixture() -> (TempDir, PathBuf) {
        fixture(
            "inventario.json",
            json!([
                {"product_id": "1", "product_name": "Queso", "quantity": 3, "unit_cost_cents": 1_000},
                {"product_id": "2", "product_name": "Arepa", "quantity": 2, "unit_cost_cents": 500},
                {"product_id": "3", "product_name": "Gaseosa", "quantity": 12, "unit_cost_cents": 180_000},
                {"product_id": "4", "product_name": "Limón", "quantity": 2, "unit_cost_cents": 20_000}
            ]),
        )
    }

    fn catalog_fixture() -> (TempDir, PathBuf) {
        fixture(
            "catalogo.json",
            json!([
                {"id": "1", "name": "Pollo", "cost_cents": 1_200_000, "price_cents": 2_000_000},
                {"id": "2", "name": "Res", "cost_cents": 1_800_000, "price_cents": 3_000_000},
                {"id": "3", "name": "Cerdo", "cost_cents": 1_000_000, "price_cents": 1_500_000},
                {"id": "4", "name": "Promo", "cost_cents": 500_000, "price_cents": 400_000}
            ]),
        )
    }

    fn product_ids(value: &Value, key: &str) -> Vec<String> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row[key].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_cli_parses_change() {
        let cli = Cli::try_parse_from(["mesa-advisor", "change", "--amount", "125750.50"]).unwrap();
        match cli.command {
            Command::Change { amount } => assert_eq!(amount.cents(), 12_575_050),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_method() {
        let result = Cli::try_parse_from([
            "mesa-advisor",
            "tender",
            "--method",
            "cheque",
            "--received",
            "10",
            "--total",
            "5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_change() {
        let value = execute(
            Command::Change {
                amount: Money::from_units(125_750),
            },
            &config(),
        )
        .unwrap();
        assert_eq!(
            value,
            json!({"50": 1, "200": 1, "500": 1, "5000": 1, "20000": 1, "100000": 1})
        );
    }

    #[test]
    fn test_execute_negative_change_fails() {
        let cli = Cli::try_parse_from(["mesa-advisor", "change", "--amount", "-10"]).unwrap();
        let err = execute(cli.command, &config()).unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::Core(mesa_core::CoreError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_execute_tender() {
        let value = execute(
            Command::Tender {
                method: PaymentMethod::Cash,
                received: Money::from_units(50_000),
                total: Money::from_units(48_000),
            },
            &config(),
        )
        .unwrap();
        assert_eq!(value, json!({"change": 200_000, "breakdown": {"2000": 1}}));
    }

    #[test]
    fn test_restock_budget_over_ceiling() {
        let config = AdvisorConfig {
            max_restock_budget: 1_000,
            ..AdvisorConfig::default()
        };
        let err = execute(
            Command::Restock {
                input: PathBuf::from("unused.json"),
                budget: 1_001,
            },
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, AdvisorError::Validation(_)));
    }

    #[test]
    fn test_execute_sort_from_file() {
        let (_dir, input) = inventory_fixture();
        let value = execute(Command::Sort { input }, &config()).unwrap();

        // Ties (Arepa, Limón) keep file order
        assert_eq!(product_ids(&value, "product_id"), vec!["2", "4", "1", "3"]);
        assert_eq!(value[0]["quantity"], json!(2));
    }

    #[test]
    fn test_execute_value_from_file() {
        let (_dir, input) = inventory_fixture();
        let value = execute(Command::Value { input }, &config()).unwrap();

        // 3 × 10 + 2 × 5 + 12 × 1800 + 2 × 200
        assert_eq!(
            value,
            json!({"records": 4, "total_cents": 2_204_000, "total": 22_040.0})
        );
    }

    #[test]
    fn test_execute_low_stock_uses_configured_threshold() {
        let (_dir, input) = inventory_fixture();

        let value = execute(
            Command::LowStock {
                input: input.clone(),
                threshold: None,
            },
            &config(),
        )
        .unwrap();
        assert_eq!(product_ids(&value, "product_id"), vec!["2", "4", "1"]);

        let strict = AdvisorConfig {
            low_stock_threshold: 2,
            ..AdvisorConfig::default()
        };
        let value = execute(
            Command::LowStock {
                input: input.clone(),
                threshold: None,
            },
            &strict,
        )
        .unwrap();
        assert_eq!(product_ids(&value, "product_id"), vec!["2", "4"]);

        // An explicit flag wins over the configured default
        let value = execute(
            Command::LowStock {
                input,
                threshold: Some(12),
            },
            &strict,
        )
        .unwrap();
        assert_eq!(value.as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_execute_restock_from_file() {
        let (_dir, input) = catalog_fixture();
        let value = execute(
            Command::Restock {
                input,
                budget: 29_000,
            },
            &config(),
        )
        .unwrap();

        // Pollo + Res needs 30.000; Res + Cerdo (28.000) earns 17.000
        assert_eq!(value["total_profit"], json!(17_000));
        assert_eq!(product_ids(&value["selected"], "id"), vec!["3", "2"]);
        assert_eq!(
            value["selected"][1],
            json!({"id": "2", "name": "Res", "cost": 18_000, "profit": 12_000})
        );
    }

    #[test]
    fn test_restock_table_over_ceiling() {
        let (_dir, input) = catalog_fixture();
        // 3 candidates (Promo has no margin) × 29.001 columns = 116.004 cells
        let config = AdvisorConfig {
            max_table_cells: 100_000,
            ..AdvisorConfig::default()
        };
        let err = execute(
            Command::Restock {
                input,
                budget: 29_000,
            },
            &config,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::Validation(mesa_core::ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_restock_rejects_invalid_catalog_row() {
        let (_dir, input) = fixture(
            "catalogo.json",
            json!([
                {"id": "1", "name": "Pollo", "cost_cents": 1_200_000, "price_cents": 2_000_000},
                {"id": "2", "name": "Res", "cost_cents": -5, "price_cents": 3_000_000}
            ]),
        );
        let err = execute(Command::Restock { input, budget: 1_000 }, &config()).unwrap_err();
        assert!(matches!(err, AdvisorError::Record { index: 1, .. }));
    }

    #[test]
    fn test_missing_input_file() {
        let err = execute(
            Command::Sort {
                input: PathBuf::from("/nonexistent/inventario.json"),
            },
            &config(),
        )
        .unwrap_err();
        assert!(matches!(err, AdvisorError::Read { .. }));
    }

    #[test]
    fn test_parse_inventory_json() {
        let raw = br#"[
            {"product_id": "1", "product_name": "Queso", "quantity": 3, "unit_cost_cents": 1000},
            {"product_id": "2", "product_name": "Arepa", "quantity": 2, "unit_cost_cents": 500}
        ]"#;
        let rows: Vec<InventoryRecord> = parse_json(&raw[..], "inline").unwrap();
        let report = value_report(&rows).unwrap();
        assert_eq!(report.records, 2);
        assert_eq!(report.total_cents, 4_000);
        assert!((report.total - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_malformed_json() {
        let result: AdvisorResult<Vec<InventoryRecord>> = parse_json(&b"[{"[..], "inline");
        assert!(matches!(result, Err(AdvisorError::Json { .. })));
    }

    #[test]
    fn test_check_each_reports_index() {
        let rows = vec![
            InventoryRecord::new("1", "Queso", 3, Money::zero()).unwrap(),
            InventoryRecord {
                product_id: "2".to_string(),
                product_name: "Arepa".to_string(),
                quantity: -4,
                unit_cost_cents: 0,
            },
        ];
        let err = check_each(Path::new("inline"), &rows, InventoryRecord::validate).unwrap_err();
        assert!(matches!(err, AdvisorError::Record { index: 1, .. }));
    }
}
