//! Instruction text sent alongside the driver digests.

use super::types::DriverDigest;

const INSTRUCTIONS: &str = "\
You are reviewing the daily performance of a delivery fleet.
Each entry below describes one driver: the number of loads they ran, the total
distance in kilometres including return legs, the average gap in minutes
between consecutive despatches, and the routes they covered in despatch order.

Identify operational bottlenecks and give concrete recommendations.
Respond with a single JSON object and nothing else, using exactly this shape:
{
  \"efficiencyScore\": <number from 0 to 100>,
  \"bottlenecks\": [<string>, ...],
  \"recommendations\": [<string>, ...],
  \"summary\": <string>
}";

/// Build the analysis prompt for a set of drivers.
pub fn build_prompt(drivers: &[DriverDigest]) -> String {
    // Serializing plain structs of strings and numbers cannot fail.
    let payload = serde_json::to_string_pretty(drivers).unwrap_or_else(|_| "[]".to_string());
    format!("{INSTRUCTIONS}\n\nDrivers:\n{payload}\n")
}
