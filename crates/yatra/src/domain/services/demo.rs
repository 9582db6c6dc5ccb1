//! Demo Mode
//!
//! Locally computed stand-ins used when the proxy cannot be reached.
//! They have exactly the shape of live results.

use rand::Rng;

use crate::domain::entities::WeatherReport;

pub const DEMO_LOCATION_NAME: &str = "Mathura (Demo)";
pub const DEMO_CONDITION: &str = "Sunny (Demo)";

/// Prefix on every demo-mode chat reply
pub const DEMO_PERSONA: &str = "Radhe Radhe! I am in Demo Mode (Backend unavailable). ";

/// Reply used when no keyword matches
pub const DEMO_DEFAULT_FACT: &str = "That is a wonderful question about the holy dham.";

/// Ordered keyword table. The first rule with any matching keyword wins.
const DEMO_RULES: &[(&[&str], &str)] = &[
    (&["time", "open"], "Most temples open at 5 AM and close by 9 PM."),
    (&["food", "eat"], "Don't miss the Peda in Mathura and Lassi!"),
    (&["distance", "far"], "Vrindavan is about 15km from Mathura."),
];

/// Plausible weather for the Braj region with a little jitter
pub fn demo_weather<R: Rng + ?Sized>(rng: &mut R) -> WeatherReport {
    WeatherReport {
        location_name: DEMO_LOCATION_NAME.to_string(),
        temperature_c: rng.gen_range(28.0..30.0),
        humidity_pct: rng.gen_range(40..=50),
        condition_text: DEMO_CONDITION.to_string(),
        wind_speed_mps: rng.gen_range(3.0..4.0),
    }
}

/// [`demo_weather`] using the thread-local RNG
pub fn demo_weather_now() -> WeatherReport {
    demo_weather(&mut rand::thread_rng())
}

/// Rule-based reply to a user message
pub fn demo_reply(user_text: &str) -> String {
    let lower = user_text.to_lowercase();
    let fact = DEMO_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, fact)| *fact)
        .unwrap_or(DEMO_DEFAULT_FACT);

    format!("{DEMO_PERSONA}{fact}")
}
