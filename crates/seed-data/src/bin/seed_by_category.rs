//! Seeds one or more recipes for every category into the local Firestore
//! emulator.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed_by_category
//! ```

use std::process::ExitCode;

use seed_data::catalog::Catalog;
use seed_data::config::EmulatorConfig;

#[tokio::main]
async fn main() -> ExitCode {
    seed_data::init_logging();

    let config = EmulatorConfig::default();
    ExitCode::from(seed_data::seed_and_report(Catalog::ByCategory, &config).await)
}
