//! `tariff` — command-line front-end for the delivery-fee rule store.
//!
//! Opens the SQLite store file directly; no server required.
//!
//! # Usage
//!
//! ```
//! tariff add Downtown --min-order 50 --charge 10 --free-over 200 --zone A
//! tariff list town
//! tariff quote Downtown 120
//! tariff --store /var/lib/tariff.db locations
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tariff_core::{
  quote::FeeQuote,
  rule::{FeeRule, NewRule},
  store::RuleStore,
};
use tariff_store_sqlite::SqliteStore;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "tariff", about = "Manage per-location delivery-fee rules")]
struct Cli {
  /// Path to the SQLite store file.
  #[arg(long, env = "TARIFF_STORE", default_value = "tariff.db", value_name = "FILE")]
  store: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Add a fee rule for a new location.
  Add {
    /// Location name; must be unique (case-sensitive).
    location: String,
    /// Minimum order amount to qualify for paid delivery.
    #[arg(long)]
    min_order: f64,
    /// Flat delivery charge.
    #[arg(long)]
    charge: f64,
    /// Order amount at or above which delivery is free.
    #[arg(long)]
    free_over: Option<f64>,
    /// Optional grouping label (e.g. North, South).
    #[arg(long)]
    zone: Option<String>,
  },
  /// List rules, optionally filtered by a location/zone substring.
  List {
    /// Case-sensitive substring matched against location and zone.
    query: Option<String>,
  },
  /// Replace every field of an existing rule.
  Update {
    /// Id of the rule to replace.
    id: i64,
    /// New location name.
    location: String,
    #[arg(long)]
    min_order: f64,
    #[arg(long)]
    charge: f64,
    #[arg(long)]
    free_over: Option<f64>,
    #[arg(long)]
    zone: Option<String>,
  },
  /// Delete a rule by id.
  Delete {
    id: i64,
  },
  /// Compute the delivery fee for an order amount in a location.
  Quote {
    /// Exact location name (case-sensitive).
    location:     String,
    order_amount: f64,
  },
  /// List every location that has a rule.
  Locations,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  let store = SqliteStore::open(&cli.store).await?;

  match cli.command {
    Command::Add { location, min_order, charge, free_over, zone } => {
      let rule = store
        .add_rule(NewRule {
          location,
          min_order_amount: min_order,
          delivery_charge: charge,
          amount_for_free_delivery: free_over,
          zone,
        })
        .await?;
      println!("Added rule {} for {}", rule.id, rule.location);
    }

    Command::List { query } => {
      let rules = store.list_rules(query.as_deref()).await?;
      if rules.is_empty() {
        println!("No matching rules.");
      } else {
        print_rules(&rules);
      }
    }

    Command::Update { id, location, min_order, charge, free_over, zone } => {
      let rule = store
        .update_rule(id, NewRule {
          location,
          min_order_amount: min_order,
          delivery_charge: charge,
          amount_for_free_delivery: free_over,
          zone,
        })
        .await?;
      println!("Updated rule {} for {}", rule.id, rule.location);
    }

    Command::Delete { id } => {
      store.delete_rule(id).await?;
      println!("Deleted rule {id}");
    }

    Command::Quote { location, order_amount } => {
      let quote = store.quote_fee(&location, order_amount).await?;
      println!("{}", describe_quote(&location, order_amount, &quote));
    }

    Command::Locations => {
      for location in store.locations().await? {
        println!("{location}");
      }
    }
  }

  Ok(())
}

// ─── Rendering ────────────────────────────────────────────────────────────────

fn print_rules(rules: &[FeeRule]) {
  println!(
    "{:>4}  {:<24} {:>10} {:>8} {:>10}  {}",
    "id", "location", "min order", "charge", "free over", "zone"
  );
  for rule in rules {
    let free_over = rule
      .amount_for_free_delivery
      .map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));
    println!(
      "{:>4}  {:<24} {:>10.2} {:>8.2} {:>10}  {}",
      rule.id,
      rule.location,
      rule.min_order_amount,
      rule.delivery_charge,
      free_over,
      rule.zone.as_deref().unwrap_or("-"),
    );
  }
}

/// Human phrasing of a fee outcome; the structured form lives in
/// [`FeeQuote`].
fn describe_quote(location: &str, order_amount: f64, quote: &FeeQuote) -> String {
  match quote {
    FeeQuote::FreeDelivery => format!(
      "Order of ${order_amount:.2} in {location}: free delivery (order amount qualifies)"
    ),
    FeeQuote::ChargeApplies { delivery_charge } => format!(
      "Order of ${order_amount:.2} in {location}: delivery charge ${delivery_charge:.2}"
    ),
    FeeQuote::MinimumNotMet { min_order_amount, delivery_charge } => format!(
      "Order of ${order_amount:.2} in {location}: minimum order amount of \
       ${min_order_amount:.2} not met; delivery charge ${delivery_charge:.2}"
    ),
    FeeQuote::LocationNotFound => {
      format!("No rule stored for location {location:?}")
    }
  }
}
