//! Table rendering for search results.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::api::CreatorRecord;

#[derive(Tabled)]
struct CreatorRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Service")]
    service: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&CreatorRecord> for CreatorRow {
    fn from(creator: &CreatorRecord) -> Self {
        Self {
            id: creator.id.clone(),
            name: creator.name.clone(),
            service: creator.service.clone(),
            updated: creator.updated.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Format creators as an ASCII table, or a placeholder line when empty.
pub fn format_creators(creators: &[CreatorRecord]) -> String {
    if creators.is_empty() {
        return "No creators to display.".to_string();
    }

    Table::new(creators.iter().map(CreatorRow::from))
        .with(Style::ascii())
        .to_string()
}
