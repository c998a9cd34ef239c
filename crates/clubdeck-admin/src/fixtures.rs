//! User rows for the admin table.
//!
//! The backend renders the users table server-side; the console takes its
//! rows from a JSON fixture (or built-in sample data) and manages them the
//! way the admin page does.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// One user row as the admin table shows it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// Backend id, used for the delete endpoint.
    pub user_id: u64,
    /// Login email (the searched column).
    pub email: String,
    /// Account type label.
    #[serde(default)]
    pub user_type: String,
    /// Club the account belongs to.
    #[serde(default)]
    pub club_name: String,
}

impl UserRecord {
    /// Cell texts in table column order.
    #[must_use]
    pub fn cells(&self) -> [String; 3] {
        [
            self.email.clone(),
            self.user_type.clone(),
            self.club_name.clone(),
        ]
    }
}

/// Loads user rows from `path`, or the built-in sample set.
pub fn load(path: Option<&Path>) -> anyhow::Result<Vec<UserRecord>> {
    match path {
        Some(p) => {
            let data = fs::read_to_string(p)?;
            Ok(serde_json::from_str(&data)?)
        }
        None => Ok(sample()),
    }
}

fn sample() -> Vec<UserRecord> {
    let clubs = ["Acme Gym", "Beta Club", "Delta Fit"];
    (1..=23)
        .map(|i| UserRecord {
            user_id: i,
            email: format!("member{i}@{}.test", clubs[(i as usize - 1) % 3].to_lowercase().replace(' ', "")),
            user_type: if i == 1 { "admin".into() } else { "club".into() },
            club_name: clubs[(i as usize - 1) % 3].to_string(),
        })
        .collect()
}
