use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use pairs_core::*;

use crate::render::draw_board;

const QUIT: &str = "q";
const DEFAULT_NAME: &str = "Anonymous";
const MAX_NAME_LEN: usize = 20;

/// How a call to [`Session::play`] ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    Saved { score: u32 },
    SaveFailed { score: u32 },
    Abandoned,
}

/// Interactive round driver over a line based input and a terminal-like output.
pub struct Session<R, W> {
    input: R,
    output: W,
    pause: Duration,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, pause: Duration) -> Self {
        Self {
            input,
            output,
            pause,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays one round on `board`, then records the score into `storage`.
    pub fn play(
        &mut self,
        board: Board,
        storage: &mut impl ScoreStorage,
    ) -> io::Result<PlayOutcome> {
        let mut engine = RoundEngine::new(board);
        writeln!(
            self.output,
            "Find all {PAIR_COUNT} pairs. Pick cards as row,col (e.g. 1,2), or {QUIT} to quit."
        )?;

        while !engine.is_complete() {
            draw_board(&mut self.output, &engine)?;

            let picked = self.prompt_pick(&mut engine, "First card", RoundEngine::reveal_first)?;
            if picked.is_none() {
                return self.abandon();
            }

            draw_board(&mut self.output, &engine)?;
            let Some(outcome) =
                self.prompt_pick(&mut engine, "Second card", RoundEngine::reveal_second)?
            else {
                return self.abandon();
            };

            match outcome {
                MatchOutcome::Match => writeln!(self.output, "It's a match!")?,
                MatchOutcome::Complete => {}
                MatchOutcome::NoMatch => {
                    draw_board(&mut self.output, &engine)?;
                    writeln!(self.output, "No match.")?;
                    self.output.flush()?;
                    thread::sleep(self.pause);
                    hide_unmatched(&mut engine)?;
                }
            }
        }

        draw_board(&mut self.output, &engine)?;
        let score = engine.compute_score();
        writeln!(
            self.output,
            "You found every pair in {} moves. Score: {score}",
            engine.move_count()
        )?;
        self.record(score, storage)
    }

    fn record(&mut self, score: u32, storage: &mut impl ScoreStorage) -> io::Result<PlayOutcome> {
        let leaderboard = storage.load();
        if leaderboard.qualifies(score) {
            writeln!(self.output, "New high score!")?;
        }

        let name = self.prompt_name()?;
        let record = ScoreRecord::new(name, score, timestamp());
        let merged = leaderboard.merge(record);

        Ok(match storage.save(&merged) {
            Ok(()) => {
                writeln!(self.output, "Score saved.")?;
                PlayOutcome::Saved { score }
            }
            Err(err) => {
                log::error!("Saving score failed: {err}");
                writeln!(self.output, "Could not save score: {err}")?;
                PlayOutcome::SaveFailed { score }
            }
        })
    }

    /// Prompts until `apply` accepts a pick. `None` when the player quits or input ends.
    fn prompt_pick<T>(
        &mut self,
        engine: &mut RoundEngine,
        label: &str,
        apply: impl Fn(&mut RoundEngine, Coord2) -> Result<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            if line.eq_ignore_ascii_case(QUIT) {
                return Ok(None);
            }

            match parse_pick(&line).and_then(|coords| apply(engine, coords)) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    log::debug!("Rejected pick {line:?}: {err:?}");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn prompt_name(&mut self) -> io::Result<String> {
        let name = self.prompt("Your name")?.unwrap_or_default();
        Ok(sanitize_name(&name))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn abandon(&mut self) -> io::Result<PlayOutcome> {
        log::debug!("Round abandoned");
        writeln!(self.output, "Round abandoned, nothing saved.")?;
        Ok(PlayOutcome::Abandoned)
    }
}

fn hide_unmatched(engine: &mut RoundEngine) -> io::Result<()> {
    engine.clear_unmatched().map_err(|err| {
        log::error!("Could not hide unmatched cards: {err}");
        io::Error::other(err)
    })
}

fn sanitize_name(name: &str) -> String {
    let name: String = name.trim().chars().take(MAX_NAME_LEN).collect();
    if name.is_empty() {
        DEFAULT_NAME.to_owned()
    } else {
        name
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SEED: u64 = 11;

    fn pair_positions(board: &Board) -> Vec<(Coord2, Coord2)> {
        SYMBOLS
            .iter()
            .map(|&symbol| {
                let cells: Vec<_> = iter_coords().filter(|&c| board[c] == symbol).collect();
                (cells[0], cells[1])
            })
            .collect()
    }

    fn pick((row, col): Coord2) -> String {
        format!("{},{}\n", row + 1, col + 1)
    }

    fn solving_script(board: &Board) -> String {
        pair_positions(board)
            .into_iter()
            .map(|(a, b)| pick(a) + &pick(b))
            .collect()
    }

    fn run(script: &str, storage: &mut MemoryStorage) -> (PlayOutcome, String) {
        let board = RandomBoardGenerator::new(SEED).generate();
        let mut session =
            Session::new(Cursor::new(script.to_owned()), Vec::new(), Duration::ZERO);
        let outcome = session.play(board, storage).unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (outcome, output)
    }

    #[test]
    fn perfect_round_scores_sixty() {
        let board = RandomBoardGenerator::new(SEED).generate();
        let script = solving_script(&board) + "ada\n";
        let mut storage = MemoryStorage::default();

        let (outcome, output) = run(&script, &mut storage);

        assert_eq!(outcome, PlayOutcome::Saved { score: 60 });
        assert!(output.contains("in 8 moves. Score: 60"));
        assert!(output.contains("New high score!"));
        let saved = storage.load();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved.entries()[0].name, "ada");
        assert_eq!(saved.entries()[0].score, 60);
    }

    #[test]
    fn bad_picks_are_reprompted_without_counting_moves() {
        let board = RandomBoardGenerator::new(SEED).generate();
        let pairs = pair_positions(&board);
        let (a, _) = pairs[0];
        let (c, _) = pairs[1];

        // garbage, out of range, same card twice, then a mismatch, then the solve
        let mut script = String::from("hello\n9,9\n");
        script += &pick(a);
        script += &pick(a);
        script += &pick(c);
        script += &solving_script(&board);
        script += "\n";
        let mut storage = MemoryStorage::default();

        let (outcome, output) = run(&script, &mut storage);

        assert_eq!(outcome, PlayOutcome::Saved { score: 55 });
        assert!(output.contains(&GameError::InvalidInput.to_string()));
        assert!(output.contains(&GameError::OutOfRange.to_string()));
        assert!(output.contains(&GameError::SameAsFirst.to_string()));
        assert!(output.contains("No match."));
        assert_eq!(storage.load().entries()[0].name, DEFAULT_NAME);
    }

    #[test]
    fn quitting_saves_nothing() {
        let mut storage = MemoryStorage::default();

        let (outcome, output) = run("1,1\nq\n", &mut storage);

        assert_eq!(outcome, PlayOutcome::Abandoned);
        assert!(output.contains("nothing saved"));
        assert_eq!(storage.saves(), 0);
    }

    #[test]
    fn end_of_input_abandons_round() {
        let mut storage = MemoryStorage::default();

        let (outcome, _) = run("", &mut storage);

        assert_eq!(outcome, PlayOutcome::Abandoned);
        assert_eq!(storage.saves(), 0);
    }

    #[test]
    fn result_is_merged_into_existing_scores() {
        let existing = [90, 80, 70, 65, 61]
            .into_iter()
            .fold(Leaderboard::new(), |board, score| {
                board.merge(ScoreRecord::new("old", score, "2026-10-01T00:00:00Z"))
            });
        let mut storage = MemoryStorage::new(existing);
        let board = RandomBoardGenerator::new(SEED).generate();

        let (outcome, output) = run(&(solving_script(&board) + "new\n"), &mut storage);

        assert_eq!(outcome, PlayOutcome::Saved { score: 60 });
        assert!(!output.contains("New high score!"));
        let scores: Vec<_> = storage.load().iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![90, 80, 70, 65, 61]);
    }

    #[test]
    fn hiding_without_mismatch_is_an_error() {
        let mut engine = RoundEngine::new(RandomBoardGenerator::new(SEED).generate());
        engine.reveal_first((0, 0)).unwrap();

        let err = hide_unmatched(&mut engine).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(engine.phase(), RoundPhase::AwaitingSecondPick);
    }

    #[test]
    fn names_are_trimmed_and_capped() {
        assert_eq!(sanitize_name("  ada  "), "ada");
        assert_eq!(sanitize_name("   "), DEFAULT_NAME);
        assert_eq!(sanitize_name(&"x".repeat(30)), "x".repeat(MAX_NAME_LEN));
    }
}
