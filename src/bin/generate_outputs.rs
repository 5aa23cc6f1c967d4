//! CLI tool to generate sample requests and an outcome report.
//!
//! Produces:
//! - `output/sample_requests.json`: 200 sample authorization requests
//! - `output/outcome_report.json`: outcome mix of those requests run through the simulator

use std::error::Error;

use mock_payment_authorizer::config::Settings;
use mock_payment_authorizer::data::get_sample_dataset;
use mock_payment_authorizer::report::generate_report;
use mock_payment_authorizer::simulator::{AuthorizationSimulator, RngSource};
use mock_payment_authorizer::telemetry;
use mock_payment_authorizer::templates::ResponseTemplates;

/// Seed for the outcome draws, so reruns produce the same report.
const REPORT_SEED: u64 = 7;

fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::from_env();
    telemetry::init(&settings);

    // Generate sample requests
    let requests = get_sample_dataset();
    let requests_json = serde_json::to_string_pretty(&requests)?;
    std::fs::create_dir_all("output")?;
    std::fs::write("output/sample_requests.json", &requests_json)?;
    println!("Wrote output/sample_requests.json ({} requests)", requests.len());

    // Run them through the simulator
    let templates = ResponseTemplates::load(&settings)?;
    let simulator = AuthorizationSimulator::new(&templates);
    let report = generate_report(&requests, &simulator, &mut RngSource::seeded(REPORT_SEED));
    let report_json = serde_json::to_string_pretty(&report)?;
    std::fs::write("output/outcome_report.json", &report_json)?;

    // Print summary
    println!("Wrote output/outcome_report.json");
    println!();
    println!("=== OUTCOME REPORT SUMMARY ===");
    println!("Total Requests:     {}", report.total_requests);
    println!("Card Rejections:    {}", report.card_rejections);
    println!("Approval Rate:      {:.1}%", report.approval_rate);
    println!();
    println!("--- By Outcome ---");
    for metrics in &report.outcomes {
        println!(
            "  {:<20} {} x{:<4} {:>5.1}% (configured {:.1}% of classified cards)",
            metrics.outcome.to_string(),
            metrics.status,
            metrics.count,
            metrics.rate,
            metrics.expected_rate
        );
    }
    println!();
    println!("--- By Card Type ---");
    for (card_type, count) in &report.by_card_type {
        println!("  {card_type:<12} {count}");
    }

    Ok(())
}
