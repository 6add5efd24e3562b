//! # Rendering
//!
//! Layout (column widths, padding) is computed here with display widths so
//! names with accents or CJK characters still line up. Colors are applied to
//! status messages only; tables are plain text.

use addrctl::api::{CmdMessage, MessageLevel};
use addrctl::error::AddrError;
use addrctl::model::Address;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 7] = [
    "ID",
    "First name",
    "Last name",
    "Street address",
    "City",
    "Postcode",
    "Country",
];

fn address_row(address: &Address) -> [String; 7] {
    [
        address.id.map(|id| id.to_string()).unwrap_or_default(),
        address.firstname.clone().unwrap_or_default(),
        address.lastname.clone().unwrap_or_default(),
        address.street_line(),
        address.city.clone().unwrap_or_default(),
        address.postcode.clone().unwrap_or_default(),
        address.country_id.clone().unwrap_or_default(),
    ]
}

/// Renders addresses as a boxed, column-aligned table, one row per address
/// in the order given.
pub fn render_address_table(addresses: &[Address]) -> String {
    let rows: Vec<[String; 7]> = addresses.iter().map(address_row).collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let separator = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let format_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (cell, width) in cells.iter().zip(widths.iter()) {
            let padding = width.saturating_sub(cell.width());
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(padding + 1));
            line.push('|');
        }
        line
    };

    let header_cells: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();

    let mut output = String::new();
    output.push_str(&separator);
    output.push('\n');
    output.push_str(&format_row(header_cells.as_slice()));
    output.push('\n');
    output.push_str(&separator);
    output.push('\n');
    for row in &rows {
        output.push_str(&format_row(row.as_slice()));
        output.push('\n');
    }
    output.push_str(&separator);
    output.push('\n');
    output
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_error(error: &AddrError) {
    print_messages(&[CmdMessage::error(error.to_string())]);
}
