//! Command loop
//!
//! Reads lines, dispatches them through the command table and prints the
//! results. Errors from a command are printed and the loop carries on; only
//! `exit` or end of input stops it.

mod commands;
mod render;

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::api::PokeApiClient;
use crate::catch::random_roll;
use crate::error::PokedexError;
use crate::pokedex::Pokedex;

pub use commands::Command;

// == Session ==
/// Prompt printed before every line read.
pub const PROMPT: &str = "Pokedex > ";

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

type RollFn = Box<dyn FnMut() -> f64 + Send>;

/// Interactive session state: the API client, the registry and the roll
/// source used by `catch`.
pub struct Repl {
    client: PokeApiClient,
    pokedex: Pokedex,
    roll: RollFn,
}

impl Repl {
    /// Creates a session with an empty registry and random catch rolls.
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            client,
            pokedex: Pokedex::new(),
            roll: Box::new(random_roll),
        }
    }

    /// Replaces the catch roll source.
    pub fn with_roll(mut self, roll: impl FnMut() -> f64 + Send + 'static) -> Self {
        self.roll = Box::new(roll);
        self
    }

    /// The API client the session reads through.
    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    /// Pokemon caught so far in this session.
    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    // == Loop ==
    /// Runs until `exit` or end of input.
    pub async fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            if self.execute(&line, out).await? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Executes a single input line.
    ///
    /// Command failures are written to `out`; only a failure to write is
    /// returned as an error.
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };
        debug!(command = %name, ?args, "Dispatching");

        let result = match Command::parse(name) {
            Some(command) => self.dispatch(command, args, out).await,
            None => Err(PokedexError::UnknownCommand(name.clone())),
        };

        match result {
            Ok(flow) => Ok(flow),
            Err(PokedexError::Io(e)) => Err(e),
            Err(e) => {
                writeln!(out, "Error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Stops background work owned by the session.
    pub async fn shutdown(&mut self) {
        self.client.shutdown().await;
    }
}

// == Input ==
/// Lowercases a line and splits it into words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
