use crate::io::OutputWriter;
use crate::models::constants::SECTOR_SIZE;
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::services::scan::{LongRangeScan, ShortRangeScan};

const SHORT_RANGE_BORDER: &str = "-=--=--=--=--=--=--=--=-";
const LONG_RANGE_BORDER: &str = "-------------------";

pub struct ScanPresenter;

impl ScanPresenter {
    /// Render a row of the short-range grid as a 24-character string.
    /// Rows past the grid render empty.
    pub fn render_row(scan: &ShortRangeScan, y: usize) -> String {
        scan.grid
            .get(y)
            .map(|row| row.iter().map(|kind| kind.symbol()).collect())
            .unwrap_or_default()
    }

    pub fn show_short_range(scan: &ShortRangeScan, turns: u32, output: &mut dyn OutputWriter) {
        let status: [String; SECTOR_SIZE] = [
            format!("TURN      {}", turns),
            format!("QUADRANT  {},{}", scan.quadrant.x, scan.quadrant.y),
            format!("SECTOR    {},{}", scan.ship_sector.x, scan.ship_sector.y),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ];

        output.writeln(SHORT_RANGE_BORDER);
        for (y, line) in status.iter().enumerate() {
            let row = Self::render_row(scan, y);
            if line.is_empty() {
                output.writeln(&row);
            } else {
                output.writeln(&format!("{}        {}", row, line));
            }
        }
        output.writeln(SHORT_RANGE_BORDER);
    }

    pub fn show_long_range(scan: &LongRangeScan, output: &mut dyn OutputWriter) {
        output.writeln(&format!(
            "LONG RANGE SCAN FOR QUADRANT {},{}",
            scan.center.x, scan.center.y
        ));
        output.writeln(LONG_RANGE_BORDER);
        for row in 0..3 {
            let cells: Vec<String> = (0..3).map(|col| scan.cell_text(row, col)).collect();
            output.writeln(&format!(": {} : {} : {} :", cells[0], cells[1], cells[2]));
            output.writeln(LONG_RANGE_BORDER);
        }
    }
}

pub struct NavigationPresenter;

impl NavigationPresenter {
    pub fn show_arrival(
        quadrant: QuadrantPosition,
        requested: SectorPosition,
        landed: SectorPosition,
        output: &mut dyn OutputWriter,
    ) {
        if requested != landed {
            output.writeln(&format!(
                "SECTOR {},{} IS OCCUPIED; HELM ADJUSTED COURSE",
                requested.x, requested.y
            ));
        }
        output.writeln(&format!(
            "NOW IN QUADRANT {},{} SECTOR {},{}",
            quadrant.x, quadrant.y, landed.x, landed.y
        ));
    }
}
