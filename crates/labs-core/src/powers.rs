//! Squares and cubes of the first few integers.

use serde::Serialize;

use crate::report::Outcome;

/// Number of rows in the table (integers `1..=POWER_TABLE_LEN`).
pub const POWER_TABLE_LEN: u32 = 5;

const HEADER: &str = "Number\tSquare\tCube";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerRow {
    pub number: u32,
    pub square: f64,
    pub cube: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerTable {
    pub rows: Vec<PowerRow>,
}

/// Build the table using floating-point powers.
pub fn table() -> PowerTable {
    let rows = (1..=POWER_TABLE_LEN)
        .map(|number| {
            let n = f64::from(number);
            PowerRow {
                number,
                square: n.powi(2),
                cube: n.powi(3),
            }
        })
        .collect();
    PowerTable { rows }
}

impl PowerRow {
    /// Tab-separated row; `Debug` keeps the trailing `.0` on whole floats.
    fn render(&self) -> String {
        format!("{}\t{:?}\t{:?}", self.number, self.square, self.cube)
    }
}

impl Outcome for PowerTable {
    fn lines(&self) -> Vec<String> {
        std::iter::once(HEADER.to_string())
            .chain(self.rows.iter().map(PowerRow::render))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn five_rows() {
        let t = table();
        assert_eq!(t.rows.len(), 5);
        assert_eq!(t.rows[4].cube, 125.0);
    }

    #[test]
    fn row_three_keeps_float_formatting() {
        let lines = table().lines();
        assert_eq!(lines[0], "Number\tSquare\tCube");
        assert_eq!(lines[3], "3\t9.0\t27.0");
    }

    #[test]
    fn full_table() {
        insta::assert_snapshot!(table().lines().join("\n"), @r"
        Number	Square	Cube
        1	1.0	1.0
        2	4.0	8.0
        3	9.0	27.0
        4	16.0	64.0
        5	25.0	125.0
        ");
    }
}
