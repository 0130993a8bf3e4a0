//! Interactive solo game on stdin/stdout.

use std::io::{self, BufRead, Write};

use yatzy_core::{Category, DiceSource, TurnController, MAX_ROLLS};
use yatzy_logging::{CategoryLockedV1, GameOverV1, GameStartedV1, NdjsonWriter, RolledV1};

pub struct PlaySession {
    ctrl: TurnController,
    seed: Option<u64>,
    game_no: u64,
    log: Option<NdjsonWriter>,
}

impl PlaySession {
    pub fn new(seed: Option<u64>, log: Option<NdjsonWriter>) -> PlaySession {
        let dice = match seed {
            Some(s) => DiceSource::seeded(s),
            None => DiceSource::from_entropy(),
        };
        let mut session = PlaySession {
            ctrl: TurnController::new(dice),
            seed,
            game_no: 0,
            log,
        };
        session.log_event(&GameStartedV1::new(0, seed));
        session
    }

    fn log_event<T: serde::Serialize>(&mut self, event: &T) {
        if let Some(w) = &mut self.log {
            let _ = w.write_event(event);
        }
    }

    /// Read commands until `quit` or EOF.
    pub fn run(&mut self) -> io::Result<()> {
        println!("Solo Yatzy. Type `help` for commands.");
        self.print_card();

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("> ");
            io::stdout().flush()?;
            let line = match lines.next() {
                Some(l) => l?,
                None => break,
            };
            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts.as_slice() {
                [] => {}
                ["quit"] | ["q"] => break,
                ["help"] | ["h"] => print_play_help(),
                ["scores"] => self.print_card(),
                ["new"] => self.cmd_new(),
                ["end"] => self.cmd_end(),
                ["roll"] => self.cmd_roll([false; 5]),
                ["roll", pattern] => match parse_keep(pattern) {
                    Some(keep) => self.cmd_roll(keep),
                    None => println!("Keep pattern must be 5 chars of `k`/`.` (e.g. kk..k)"),
                },
                ["score", name] => match name.parse::<Category>() {
                    Ok(cat) => self.cmd_score(cat),
                    Err(e) => println!("{}", e),
                },
                _ => println!("Unknown command. Type `help`."),
            }
        }
        if let Some(w) = &mut self.log {
            let _ = w.flush();
        }
        Ok(())
    }

    fn cmd_new(&mut self) {
        self.game_no += 1;
        self.ctrl.start_game();
        self.log_event(&GameStartedV1::new(self.game_no, self.seed));
        println!("New game #{} started.", self.game_no);
        self.print_card();
    }

    fn cmd_end(&mut self) {
        let total = self.ctrl.end_game();
        self.log_event(&GameOverV1::new(self.game_no, total, true));
        println!("Game over. Final score: {}", total);
    }

    fn cmd_roll(&mut self, keep: [bool; 5]) {
        match self.ctrl.roll(keep) {
            Ok(s) => {
                self.log_event(&RolledV1::new(self.game_no, s.roll_count, s.dice));
                println!(
                    "Roll {}/{}: {:?}",
                    s.roll_count, MAX_ROLLS, s.dice
                );
                self.print_card();
            }
            Err(e) => println!("Can't roll: {}", e),
        }
    }

    fn cmd_score(&mut self, cat: Category) {
        match self.ctrl.select_category(cat) {
            Ok(s) => {
                let score = s.locked[cat.index()].unwrap_or(0);
                self.log_event(&CategoryLockedV1::new(
                    self.game_no,
                    cat.name(),
                    score,
                    s.total_score,
                    s.rounds_left,
                ));
                println!("Locked {} for {} points.", cat, score);
                if s.game_over {
                    self.log_event(&GameOverV1::new(self.game_no, s.total_score, false));
                    println!("Game over! Final score: {}", s.total_score);
                } else {
                    println!("{} rounds left. Roll to start the next round.", s.rounds_left);
                }
            }
            Err(e) => println!("Can't score: {}", e),
        }
    }

    fn print_card(&self) {
        let s = self.ctrl.state();
        let potential = self.ctrl.potential_scores();

        println!();
        if s.roll_count == 0 {
            println!("Dice: (not rolled)   Rolls: 0/{}", MAX_ROLLS);
        } else {
            println!("Dice: {:?}   Rolls: {}/{}", s.dice, s.roll_count, MAX_ROLLS);
        }
        for cat in Category::ALL {
            let i = cat.index();
            match s.locked[i] {
                Some(v) => println!("  {:<16} {:>3}  [locked]", cat.name(), v),
                None if s.roll_count > 0 => println!("  {:<16} {:>3}", cat.name(), potential[i]),
                None => println!("  {:<16}   -", cat.name()),
            }
        }
        println!("Total: {}   Rounds left: {}", s.total_score, s.rounds_left);
        if s.game_over {
            println!("(game over)");
        }
        println!();
    }
}

/// `k` keeps the die at that index, anything else rerolls it.
fn parse_keep(pattern: &str) -> Option<[bool; 5]> {
    let chars: Vec<char> = pattern.chars().collect();
    if chars.len() != 5 {
        return None;
    }
    let mut keep = [false; 5];
    for (i, c) in chars.iter().enumerate() {
        keep[i] = match c {
            'k' | 'K' => true,
            '.' | 'r' => false,
            _ => return None,
        };
    }
    Some(keep)
}

fn print_play_help() {
    println!(
        r#"Commands:
    roll            Reroll all five dice
    roll KEEP       Reroll with a keep pattern, e.g. `roll kk..k`
    score NAME      Lock a category (ones, twos, ..., threeOfAKind, yatzy)
    scores          Show the scorecard
    end             End the game early, keeping the current total
    new             Start a fresh game
    quit            Leave
"#
    );
}
