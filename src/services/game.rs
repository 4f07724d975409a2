use log::warn;

use crate::game_engine::Session;
use crate::io::{InputReader, OutputWriter};
use crate::models::errors::GameResult;
use crate::services::navigation;
use crate::ui::presenters::ScanPresenter;

/// Interactive command loop over one session.
pub struct Game<I: InputReader, O: OutputWriter> {
    pub session: Session,
    io: I,
    output: O,
}

impl<I: InputReader, O: OutputWriter> Game<I, O> {
    pub fn new(session: Session, io: I, output: O) -> Self {
        Game {
            session,
            io,
            output,
        }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Runs until the player quits or input runs out.
    pub fn run(&mut self) -> GameResult<()> {
        self.print_briefing();
        self.short_range_scan();

        while let Some(input) = self.io.read_line("COMMAND")? {
            let result = match input.trim().to_ascii_lowercase().as_str() {
                "nav" => navigation::navigate(&mut self.session, &mut self.io, &mut self.output),
                "srs" => {
                    self.short_range_scan();
                    Ok(())
                }
                "lrs" => {
                    let scan = self.session.long_range_scan();
                    ScanPresenter::show_long_range(&scan, &mut self.output);
                    Ok(())
                }
                "save" => self.session.save().map(|json| self.output.writeln(&json)),
                "quit" | "q" => {
                    self.output.writeln("GOODBYE, CAPTAIN.");
                    break;
                }
                _ => {
                    Self::print_command_menu(&mut self.output);
                    Ok(())
                }
            };

            // Bad commands are reported and the loop carries on
            if let Err(e) = result {
                warn!("command failed: {}", e);
                self.output.writeln(&format!("Error: {}", e));
            }
        }
        Ok(())
    }

    fn short_range_scan(&mut self) {
        let scan = self.session.short_range_scan();
        ScanPresenter::show_short_range(&scan, self.session.turns(), &mut self.output);
    }

    fn print_briefing(&mut self) {
        let g = self.session.galaxy();
        let stations = g.stations().count();
        let plural = if stations != 1 { "S" } else { "" };
        let line = format!(
            "{} HOSTILES AMONG {} STARS; {} RESUPPLY STATION{}",
            g.hostiles().count(),
            g.stars().count(),
            stations,
            plural,
        );
        self.output.writeln(&line);
    }

    fn print_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("   NAV  = MOVE SHIP");
        output.writeln("   SRS  = SHORT RANGE SENSOR SCAN");
        output.writeln("   LRS  = LONG RANGE SENSOR SCAN");
        output.writeln("   SAVE = PRINT SAVE DATA");
        output.writeln("   QUIT = END GAME");
    }
}
