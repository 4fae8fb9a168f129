use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Result};
use log::{debug, warn};

use crate::config::{SearchConfig, MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH};
use crate::evaluation::Evaluator;
use crate::movegen::MoveGenerator;
use crate::ordering::MoveOrderer;
use crate::position::Position;
use crate::search::Search;

pub struct UciHandler {
    position: Position,
    // Positions before each move played since the last `position` command
    history: Vec<Position>,
    move_generator: MoveGenerator,
    evaluator: Evaluator,
    search: Search,
    orderer: MoveOrderer,
}

impl Default for UciHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl UciHandler {
    pub fn new() -> Self {
        UciHandler {
            position: Position::new(),
            history: Vec::new(),
            move_generator: MoveGenerator::new(),
            evaluator: Evaluator::new(),
            search: Search::new(),
            orderer: MoveOrderer::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut reader = stdin.lock();
        let mut line = String::new();

        while reader.read_line(&mut line)? > 0 {
            let command = line.trim();
            if command == "quit" {
                break;
            }

            let response = self.handle_command(command);
            if !response.is_empty() {
                write!(stdout, "{}", response)?;
                stdout.flush()?;
            }
            line.clear();
        }
        Ok(())
    }

    /// Runs one command and returns everything it prints.
    pub fn handle_command(&mut self, command: &str) -> String {
        let parts: Vec<&str> = command.split_whitespace().collect();
        let Some(&name) = parts.first() else {
            return String::new();
        };
        debug!("command: {}", command);

        let result = match name {
            "uci" => Ok(self.handle_uci()),
            "isready" => Ok("readyok\n".to_string()),
            "ucinewgame" => Ok(self.handle_ucinewgame()),
            "position" => self.handle_position(&parts[1..]),
            "go" => self.handle_go(&parts[1..]),
            "setoption" => self.handle_setoption(&parts[1..]),
            "d" => Ok(self.handle_display()),
            "eval" => Ok(self.handle_eval()),
            "legal" => Ok(self.handle_legal()),
            "perft" => self.handle_perft(&parts[1..]),
            "quit" => Ok(String::new()),
            other => Err(anyhow!("unknown command '{}'", other)),
        };

        match result {
            Ok(response) => response,
            Err(e) => {
                warn!("{}: {}", command, e);
                format!("info string error: {}\n", e)
            }
        }
    }

    fn handle_uci(&self) -> String {
        let config = self.search.config();
        format!(
            "id name Pawnstorm\nid author the Pawnstorm developers\n\
             option name Depth type spin default {} min {} max {}\n\
             option name MoveOrdering type check default {}\nuciok\n",
            config.max_depth, MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH, config.use_move_ordering
        )
    }

    fn handle_ucinewgame(&mut self) -> String {
        self.position = Position::new();
        self.history.clear();
        self.orderer.clear();
        self.search.reset();
        String::new()
    }

    fn handle_position(&mut self, parts: &[&str]) -> Result<String> {
        let moves_at = parts.iter().position(|&part| part == "moves");
        let (setup, moves) = match moves_at {
            Some(index) => (&parts[..index], &parts[index + 1..]),
            None => (parts, &parts[parts.len()..]),
        };

        let mut position = match setup.first() {
            Some(&"startpos") => Position::new(),
            Some(&"fen") => Position::from_fen(&setup[1..].join(" "))?,
            _ => bail!("expected 'position startpos' or 'position fen <fen>'"),
        };

        let mut history = Vec::with_capacity(moves.len());
        for text in moves {
            let mv = self.move_generator.find_move(&position, text)?;
            history.push(position.clone());
            position.apply(mv);
        }

        self.position = position;
        self.history = history;
        Ok(String::new())
    }

    fn handle_go(&mut self, parts: &[&str]) -> Result<String> {
        let mut iter = parts.iter();
        while let Some(&part) = iter.next() {
            if part == "depth" {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("go depth expects a number"))?;
                self.search.set_max_depth(SearchConfig::parse_depth(value)?);
            }
        }

        let result = self.search.search(&self.position, &mut self.orderer);
        let best = result
            .best_move_string()
            .unwrap_or_else(|| "(none)".to_string());

        Ok(format!(
            "info depth {} score cp {} nodes {}\nbestmove {}\n",
            self.search.config().depth(),
            result.evaluation,
            result.nodes_searched,
            best
        ))
    }

    fn handle_setoption(&mut self, parts: &[&str]) -> Result<String> {
        // setoption name <name> value <value>
        let (name, value) = match parts {
            ["name", name, "value", value] => (*name, *value),
            _ => bail!("expected 'setoption name <name> value <value>'"),
        };

        self.search.config_mut().set_option(name, value)?;
        Ok(String::new())
    }

    fn handle_display(&self) -> String {
        let state = self.move_generator.game_state(&self.position, &self.history);
        format!("{}\nFen: {}\nState: {:?}\n", self.position, self.position.to_fen(), state)
    }

    fn handle_eval(&self) -> String {
        let (white, black) = self.evaluator.evaluate_breakdown(&self.position);
        let mut out = String::new();
        out.push_str("term        white   black\n");
        let rows = [
            ("material", white.material_score, black.material_score),
            ("mopup", white.mop_up_score, black.mop_up_score),
            ("psqt", white.piece_square_score, black.piece_square_score),
            ("pawns", white.pawn_score, black.pawn_score),
            ("shield", white.pawn_shield_score, black.pawn_shield_score),
            ("total", white.sum(), black.sum()),
        ];
        for (name, w, b) in rows {
            out.push_str(&format!("{:<10}{:>7} {:>7}\n", name, w, b));
        }
        out.push_str(&format!(
            "score cp {} (side to move)\n",
            self.evaluator.evaluate(&self.position)
        ));
        out
    }

    fn handle_legal(&self) -> String {
        format!("{}\n", self.move_generator.legal_move_strings(&self.position).join(" "))
    }

    fn handle_perft(&self, parts: &[&str]) -> Result<String> {
        let depth = parts
            .first()
            .and_then(|value| value.parse::<u32>().ok())
            .ok_or_else(|| anyhow!("perft expects a depth"))?;
        let mut position = self.position.clone();
        let nodes = self.move_generator.perft(&mut position, depth);
        Ok(format!("perft {} nodes {}\n", depth, nodes))
    }
}
