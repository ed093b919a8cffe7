use std::io::{self, Write};

use crate::aircraft::Aircraft;

pub const NO_DATA_MESSAGE: &str = "No flight data available.";

const HEADERS: [&str; 6] = ["Callsign", "Country", "Altitude (m)", "Speed (m/s)", "Latitude", "Longitude"];
const COLUMN_GAP: &str = "  ";

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

const ALIGNMENT: [Align; 6] = [Align::Left, Align::Left, Align::Right, Align::Right, Align::Right, Align::Right];

fn cells(aircraft: &Aircraft) -> [String; 6] {
    [
        aircraft.callsign.clone(),
        aircraft.country.clone(),
        format!("{:.1}", aircraft.altitude_m),
        format!("{:.1}", aircraft.speed_mps),
        format!("{:.3}", aircraft.latitude),
        format!("{:.3}", aircraft.longitude),
    ]
}

/// Writes the flights as a plain-text table, or the "no data" line if there are none.
pub fn render<W: Write>(out: &mut W, flights: &[Aircraft]) -> io::Result<()> {
    if flights.is_empty() {
        return writeln!(out, "{NO_DATA_MESSAGE}");
    }

    let rows: Vec<[String; 6]> = flights.iter().map(cells).collect();
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_line(out, &widths, HEADERS.iter().copied())?;
    write_line(out, &widths, widths.map(|width| "-".repeat(width)).iter().map(String::as_str))?;
    for row in &rows {
        write_line(out, &widths, row.iter().map(String::as_str))?;
    }
    Ok(())
}

fn write_line<'a, W: Write>(out: &mut W, widths: &[usize; 6], cells: impl Iterator<Item = &'a str>) -> io::Result<()> {
    let mut line = String::new();
    for (column, cell) in cells.enumerate() {
        if column > 0 {
            line.push_str(COLUMN_GAP);
        }
        let width = widths[column];
        match ALIGNMENT[column] {
            Align::Left => line.push_str(&format!("{cell:<width$}")),
            Align::Right => line.push_str(&format!("{cell:>width$}")),
        }
    }
    writeln!(out, "{}", line.trim_end())
}
