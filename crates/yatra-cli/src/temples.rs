//! Built-in temple directory for Mathura and Vrindavan

use yatra::Location;

/// A temple entry
#[derive(Debug, Clone, PartialEq)]
pub struct Temple {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    pub long: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Temple {
    pub fn location(&self) -> Location {
        Location {
            latitude: self.lat,
            longitude: self.lon,
        }
    }

    fn haystack(&self) -> String {
        format!("{} {} {}", self.name, self.desc, self.long).to_lowercase()
    }
}

const TEMPLES: &[Temple] = &[
    Temple {
        id: "krishna-janmabhoomi",
        name: "Shri Krishna Janmabhoomi",
        desc: "Birthplace of Lord Krishna in Mathura.",
        long: "The temple complex stands over the prison cell where Krishna is believed to have been born to Devaki and Vasudeva. Security is strict; phones and bags go in the cloakroom.",
        lat: 27.5046,
        lon: 77.6697,
    },
    Temple {
        id: "dwarkadhish",
        name: "Dwarkadhish Temple",
        desc: "Ornate 19th-century temple near the Yamuna ghats.",
        long: "Built in 1814 and known for its carved entrance and painted ceilings. The swing festival in Shravan draws large crowds.",
        lat: 27.5050,
        lon: 77.6872,
    },
    Temple {
        id: "vishram-ghat",
        name: "Vishram Ghat",
        desc: "Main ghat of Mathura on the Yamuna.",
        long: "Krishna is said to have rested here after defeating Kansa. The evening aarti on the river is the highlight.",
        lat: 27.5016,
        lon: 77.6889,
    },
    Temple {
        id: "banke-bihari",
        name: "Banke Bihari Temple",
        desc: "Vrindavan's most visited shrine of Krishna as Banke Bihari.",
        long: "The curtain before the deity is drawn every few minutes so devotees only catch brief glimpses. Lanes are narrow and crowded on weekends.",
        lat: 27.5806,
        lon: 77.6960,
    },
    Temple {
        id: "prem-mandir",
        name: "Prem Mandir",
        desc: "White marble temple of divine love in Vrindavan.",
        long: "Completed in 2012, the temple is lit in changing colours after sunset. The gardens show scenes from Krishna's childhood and the lifting of Govardhan.",
        lat: 27.5712,
        lon: 77.6727,
    },
    Temple {
        id: "iskcon-vrindavan",
        name: "ISKCON Vrindavan",
        desc: "Krishna Balaram Mandir of the Hare Krishna movement.",
        long: "Founded in 1975, with continuous kirtan in the courtyard and the samadhi of its founder next door. A guesthouse and prasadam hall are on site.",
        lat: 27.5723,
        lon: 77.6745,
    },
    Temple {
        id: "radha-raman",
        name: "Radha Raman Temple",
        desc: "Historic temple of a self-manifested deity of Krishna.",
        long: "Established in 1542 by Gopala Bhatta Goswami. The kitchen fire is said to have burned without interruption since the temple was founded.",
        lat: 27.5816,
        lon: 77.6990,
    },
    Temple {
        id: "govind-dev",
        name: "Govind Dev Ji Temple",
        desc: "Red sandstone temple built in 1590.",
        long: "Once seven storeys tall, the upper floors were lost in the 17th century. The surviving structure is a notable blend of Hindu and Mughal styles.",
        lat: 27.5837,
        lon: 77.6992,
    },
    Temple {
        id: "nidhivan",
        name: "Nidhivan",
        desc: "Sacred grove where Krishna's raas leela is said to continue at night.",
        long: "The grove closes at dusk and no one stays inside after evening aarti. Its twisted tulsi trees grow in pairs.",
        lat: 27.5833,
        lon: 77.6985,
    },
];

/// Read-only directory of temples
#[derive(Debug, Clone)]
pub struct TempleDirectory {
    temples: &'static [Temple],
}

impl Default for TempleDirectory {
    fn default() -> Self {
        Self { temples: TEMPLES }
    }
}

impl TempleDirectory {
    pub fn all(&self) -> &[Temple] {
        self.temples
    }

    /// Look up by id (case-insensitive)
    pub fn find(&self, id: &str) -> Option<&Temple> {
        let id = id.trim();
        self.temples.iter().find(|t| t.id.eq_ignore_ascii_case(id))
    }

    /// Case-insensitive substring match over name and descriptions.
    /// A blank query returns every temple.
    pub fn search(&self, query: &str) -> Vec<&Temple> {
        let query = query.trim().to_lowercase();
        self.temples
            .iter()
            .filter(|t| query.is_empty() || t.haystack().contains(&query))
            .collect()
    }

    pub fn sorted_by_name(&self) -> Vec<&Temple> {
        let mut sorted: Vec<&Temple> = self.temples.iter().collect();
        sorted.sort_by_key(|t| t.name.to_lowercase());
        sorted
    }
}

/// Web search link for a free-text query
pub fn web_search_url(query: &str) -> String {
    format!(
        "https://www.google.com/search?q={}",
        urlencoding::encode(query.trim())
    )
}
