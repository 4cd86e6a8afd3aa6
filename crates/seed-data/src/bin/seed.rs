//! Seeds the classic sample recipes into the local Firestore emulator.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```

use std::process::ExitCode;

use seed_data::catalog::Catalog;
use seed_data::config::EmulatorConfig;

#[tokio::main]
async fn main() -> ExitCode {
    seed_data::init_logging();

    let config = EmulatorConfig::default();
    ExitCode::from(seed_data::seed_and_report(Catalog::Classic, &config).await)
}
