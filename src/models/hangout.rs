use serde::{Deserialize, Serialize};

/// Quedada pasada (historial, solo lectura)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HangoutEntry {
    pub icon: String,
    pub title: String,
    pub date: String,
    pub location: String,
    pub group: String,
}

impl HangoutEntry {
    pub fn seed() -> Vec<HangoutEntry> {
        vec![
            HangoutEntry {
                icon: "🍺".to_string(),
                title: "Social at Rain or Shine".to_string(),
                date: "Oct. 6, 2025".to_string(),
                location: "UBC".to_string(),
                group: "women in stem 💪".to_string(),
            },
            HangoutEntry {
                icon: "🎤".to_string(),
                title: "Karaoke Night".to_string(),
                date: "Sept. 29, 2025".to_string(),
                location: "UBC".to_string(),
                group: "HR Queens".to_string(),
            },
        ]
    }
}
