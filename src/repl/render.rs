//! Output formatting for command results.

use std::io::{self, Write};

use crate::cache::CacheStats;
use crate::models::AreaPage;
use crate::pokedex::CaughtPokemon;

use super::commands::Command;

// == Help ==
/// Welcome banner followed by every command in table order.
pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in Command::ALL {
        writeln!(out, "{}: {}", command.name(), command.description())?;
    }
    Ok(())
}

// == Listings ==
/// Area names one per line, with a note when the page is an end.
pub fn write_area_page<W: Write>(out: &mut W, page: &AreaPage, forward: bool) -> io::Result<()> {
    for name in &page.areas {
        writeln!(out, "{name}")?;
    }
    if forward && !page.has_next {
        writeln!(out, "(last page)")?;
    }
    if !forward && !page.has_previous {
        writeln!(out, "(first page)")?;
    }
    Ok(())
}

/// Pokemon found in an area, one ` - name` line each.
pub fn write_encounters<W: Write>(out: &mut W, names: &[String]) -> io::Result<()> {
    writeln!(out, "Found Pokemon:")?;
    for name in names {
        writeln!(out, " - {name}")?;
    }
    Ok(())
}

// == Registry ==
/// Detail view of a caught pokemon: size, the six standard stats, types
/// and when it was caught.
pub fn write_inspect<W: Write>(out: &mut W, caught: &CaughtPokemon) -> io::Result<()> {
    let details = &caught.details;
    writeln!(out, "Name: {}", details.name)?;
    writeln!(out, "Height: {}", details.height)?;
    writeln!(out, "Weight: {}", details.weight)?;
    writeln!(out, "Stats:")?;
    for (name, value) in details.standard_stats() {
        writeln!(out, "  -{name}: {value}")?;
    }
    writeln!(out, "Types:")?;
    for kind in &details.types {
        writeln!(out, "  - {kind}")?;
    }
    writeln!(
        out,
        "Caught: {}",
        caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    Ok(())
}

/// Names of every caught pokemon, or a notice when there are none.
pub fn write_pokedex<W: Write>(out: &mut W, caught: &[&CaughtPokemon]) -> io::Result<()> {
    if caught.is_empty() {
        writeln!(out, "No pokemon in your pokedex")?;
        return Ok(());
    }
    writeln!(out, "Your Pokedex:")?;
    for pokemon in caught {
        writeln!(out, " - {}", pokemon.details.name)?;
    }
    Ok(())
}

// == Cache ==
/// Response cache counters and the sweep interval.
pub fn write_cache_stats<W: Write>(
    out: &mut W,
    stats: &CacheStats,
    interval_secs: u64,
) -> io::Result<()> {
    writeln!(out, "Cached responses: {}", stats.entries)?;
    writeln!(out, "Hits: {}", stats.hits)?;
    writeln!(out, "Misses: {}", stats.misses)?;
    writeln!(out, "Hit rate: {:.1}%", stats.hit_rate() * 100.0)?;
    writeln!(out, "Sweeps: {}", stats.sweeps)?;
    writeln!(out, "Reaped: {}", stats.reaped)?;
    writeln!(out, "Sweep interval: {interval_secs}s")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PokemonDetails;
    use chrono::{TimeZone, Utc};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn pikachu() -> CaughtPokemon {
        CaughtPokemon {
            details: PokemonDetails {
                name: "pikachu".to_string(),
                base_experience: 112,
                height: 4,
                weight: 60,
                stats: [("hp", 35), ("speed", 90), ("attack", 55)]
                    .into_iter()
                    .map(|(n, v)| (n.to_string(), v))
                    .collect(),
                types: vec!["electric".to_string()],
            },
            caught_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_help_lists_every_command() {
        let text = render(|out| write_help(out));
        assert!(text.starts_with("Welcome to the Pokedex!\n"));
        for command in Command::ALL {
            assert!(text.contains(&format!("{}: ", command.name())));
        }
    }

    #[test]
    fn test_area_page_end_markers() {
        let page = AreaPage {
            areas: vec!["a".to_string(), "b".to_string()],
            has_next: false,
            has_previous: false,
        };
        assert_eq!(render(|out| write_area_page(out, &page, true)), "a\nb\n(last page)\n");
        assert_eq!(render(|out| write_area_page(out, &page, false)), "a\nb\n(first page)\n");
    }

    #[test]
    fn test_inspect_format() {
        let text = render(|out| write_inspect(out, &pikachu()));
        assert_eq!(
            text,
            "Name: pikachu\n\
             Height: 4\n\
             Weight: 60\n\
             Stats:\n  \
             -hp: 35\n  \
             -attack: 55\n  \
             -defense: 0\n  \
             -special-attack: 0\n  \
             -special-defense: 0\n  \
             -speed: 90\n\
             Types:\n  \
             - electric\n\
             Caught: 2024-05-01 12:30:00 UTC\n"
        );
    }

    #[test]
    fn test_empty_pokedex() {
        assert_eq!(render(|out| write_pokedex(out, &[])), "No pokemon in your pokedex\n");
    }

    #[test]
    fn test_cache_stats() {
        let stats = CacheStats {
            hits: 1,
            misses: 3,
            sweeps: 4,
            reaped: 2,
            entries: 2,
        };
        let text = render(|out| write_cache_stats(out, &stats, 300));
        assert!(text.contains("Cached responses: 2\n"));
        assert!(text.contains("Hit rate: 25.0%\n"));
        assert!(text.contains("Sweeps: 4\nReaped: 2\n"));
        assert!(text.contains("Sweep interval: 300s\n"));
    }
}
