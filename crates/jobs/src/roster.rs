//! Team roster used by `seed-members`.

use std::path::Path;

use lookbook_core::paths::is_safe_segment;
use serde::Deserialize;

use crate::JobError;

/// One member of the roster and the gallery files it should get, in order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub title: String,
    pub view_url: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl RosterEntry {
    fn new(name: &str, title: &str, view_url: &str, images: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            view_url: view_url.to_string(),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The built-in four-member roster.
pub fn default_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new(
            "Sarah Johnson",
            "Creative Designer",
            "/designer/sarah-johnson",
            &["1.jpg", "2.JPG", "3.JPG", "4.jpg", "5.JPG"],
        ),
        RosterEntry::new(
            "Emma Wilson",
            "Fashion Stylist",
            "/stylist/emma-wilson",
            &["6.jpg", "7.jpg", "8.jpg", "9.jpg", "10.jpg"],
        ),
        RosterEntry::new(
            "Maya Patel",
            "Brand Manager",
            "/manager/maya-patel",
            &["11.jpg", "12.jpg", "13.jpg", "14.jpg", "15.jpg"],
        ),
        RosterEntry::new(
            "Jessica Chen",
            "Art Director",
            "/director/jessica-chen",
            &["16.jpg", "17.jpg", "18.jpg", "19.jpg", "20.jpg"],
        ),
    ]
}

/// Parse and validate a JSON roster (an array of entries).
pub fn parse_roster(json: &str) -> Result<Vec<RosterEntry>, JobError> {
    let roster: Vec<RosterEntry> =
        serde_json::from_str(json).map_err(|e| JobError::Roster(e.to_string()))?;
    validate(&roster)?;
    Ok(roster)
}

pub fn load_roster(path: &Path) -> Result<Vec<RosterEntry>, JobError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| JobError::Roster(format!("cannot read {}: {e}", path.display())))?;
    parse_roster(&json)
}

fn validate(roster: &[RosterEntry]) -> Result<(), JobError> {
    for entry in roster {
        if entry.name.trim().is_empty() {
            return Err(JobError::Roster("member name must not be empty".into()));
        }
        // Image names are looked up directly under the gallery directory.
        if let Some(bad) = entry.images.iter().find(|img| !is_safe_segment(img)) {
            return Err(JobError::Roster(format!(
                "image '{bad}' of '{}' must be a plain file name",
                entry.name
            )));
        }
    }
    Ok(())
}
