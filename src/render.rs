//! Terminal list rendering

use console::Style;
use paydash_core::items::{Item, ItemsError};

pub struct ListRenderer {
    heading_style: Style,
    detail_style: Style,
    error_style: Style,
}

impl ListRenderer {
    pub fn new() -> Self {
        Self {
            heading_style: Style::new().bold(),
            detail_style: Style::new().dim(),
            error_style: Style::new().red(),
        }
    }

    pub fn render(&self, heading: &str, outcome: &Result<Vec<Item>, ItemsError>) {
        println!("{}", self.heading_style.apply_to(heading));
        match outcome {
            Ok(items) if items.is_empty() => println!("  (empty)"),
            Ok(items) => {
                for item in items {
                    match item.detail() {
                        Some(detail) => println!(
                            "  {}  {}",
                            item.title(),
                            self.detail_style.apply_to(detail)
                        ),
                        None => println!("  {}", item.title()),
                    }
                }
            }
            Err(e) => println!("  {}", self.error_style.apply_to(e.to_string())),
        }
    }
}

impl Default for ListRenderer {
    fn default() -> Self {
        Self::new()
    }
}
