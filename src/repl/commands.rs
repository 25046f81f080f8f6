//! Command table and handlers.

use std::io::Write;

use tracing::info;

use crate::catch::{catch_chance, is_caught};
use crate::error::{PokedexError, Result};

use super::render;
use super::{Flow, Repl};

// == Command Table ==
/// Every command the loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    Cache,
}

impl Command {
    /// Table order, as shown by `help`.
    pub const ALL: [Command; 9] = [
        Command::Help,
        Command::Exit,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
        Command::Cache,
    ];

    /// The word typed to invoke the command.
    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
            Command::Cache => "cache",
        }
    }

    /// One-line summary shown by `help`.
    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Lists the next 20 location areas",
            Command::MapBack => "Lists the previous 20 location areas",
            Command::Explore => "Lists pokemon in the given location area",
            Command::Catch => "Attempts to catch a pokemon based on its base experience",
            Command::Inspect => "Inspects the data for a pokemon in your Pokedex",
            Command::Pokedex => "Lists names of all caught pokemon",
            Command::Cache => "Shows response cache statistics",
        }
    }

    /// Looks up a command by its typed name.
    pub fn parse(name: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|command| command.name() == name)
    }
}

// == Handlers ==
impl Repl {
    /// Runs `command` with `args`, writing its output to `out`.
    pub(super) async fn dispatch<W: Write>(
        &mut self,
        command: Command,
        args: &[String],
        out: &mut W,
    ) -> Result<Flow> {
        match command {
            Command::Help => render::write_help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => {
                let page = self.client.list_forward().await?;
                render::write_area_page(out, &page, true)?;
            }
            Command::MapBack => {
                let page = self.client.list_backward().await?;
                render::write_area_page(out, &page, false)?;
            }
            Command::Explore => self.explore(args, out).await?,
            Command::Catch => self.catch(args, out).await?,
            Command::Inspect => {
                let name = first_arg(args, "pokemon name")?;
                let caught = self
                    .pokedex
                    .get(name)
                    .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;
                render::write_inspect(out, caught)?;
            }
            Command::Pokedex => render::write_pokedex(out, &self.pokedex.all())?,
            Command::Cache => {
                let stats = self.client.cache_stats().await;
                let interval = self.client.cache().interval().as_secs();
                render::write_cache_stats(out, &stats, interval)?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn explore<W: Write>(&mut self, args: &[String], out: &mut W) -> Result<()> {
        let area = first_arg(args, "location area name")?;
        writeln!(out, "Exploring {area}...")?;

        let names = self.client.explore(area).await?;
        render::write_encounters(out, &names)?;
        Ok(())
    }

    async fn catch<W: Write>(&mut self, args: &[String], out: &mut W) -> Result<()> {
        let name = first_arg(args, "pokemon name")?;
        if self.pokedex.has(name) {
            writeln!(out, "You already caught {name}!")?;
            return Ok(());
        }

        writeln!(out, "Throwing a Pokeball at {name}...")?;
        let details = self.client.get_detail(name).await?;

        let chance = catch_chance(details.base_experience);
        let roll = (self.roll)();
        if is_caught(chance, roll) {
            info!(pokemon = name, chance, roll, "Caught");
            self.pokedex.add(details);
            writeln!(out, "{name} was caught!")?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
        } else {
            info!(pokemon = name, chance, roll, "Escaped");
            writeln!(out, "{name} escaped!")?;
        }
        Ok(())
    }
}

fn first_arg<'a>(args: &'a [String], what: &'static str) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or(PokedexError::MissingArgument(what))
}
