use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Sample activities per destination. Lookup is by exact city name.
static SAMPLE_ACTIVITIES: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        HashMap::from([
            (
                "Nairobi",
                &["National Museum visit", "Local food tour", "Karura walk"][..],
            ),
            ("Diani", &["Beach afternoon", "Snorkeling", "Seafood dinner"][..]),
            (
                "Mombasa",
                &["Old Town walk", "Fort Jesus visit", "Street food crawl"][..],
            ),
            ("Maasai Mara", &["Game drive", "Sundowner", "Village visit"][..]),
        ])
    });

pub fn activities_for(city: &str) -> Option<&'static [&'static str]> {
    SAMPLE_ACTIVITIES.get(city).copied()
}
