//! Rendering of draw results.

use pool_maker::pool::{AllocationPlan, ClubQuotas, Draw, Pool};
use pool_maker::roster::{ClubTally, Competitor, Roster, SkippedRow};
use serde::Serialize;
use std::io::{self, Write};

/// Everything reported for one roster file
#[derive(Debug, Serialize)]
pub struct DrawReport<'a> {
    pub roster: &'a str,
    pub line_count: usize,
    pub plan: &'a AllocationPlan,
    pub quotas: &'a ClubQuotas,
    pub pools: &'a [Pool],
    pub overflow: &'a [Competitor],
    pub skipped: &'a [SkippedRow],
}

impl<'a> DrawReport<'a> {
    pub fn new(name: &'a str, roster: &'a Roster, draw: &'a Draw) -> Self {
        Self {
            roster: name,
            line_count: roster.line_count,
            plan: &draw.plan,
            quotas: &draw.quotas,
            pools: &draw.pools,
            overflow: &draw.overflow,
            skipped: &roster.skipped,
        }
    }

    /// Write the report as one line of JSON
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)
    }

    /// Write the report as plain-text rosters
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let placed: usize = self.pools.iter().map(Pool::len).sum();
        writeln!(out, "File: {}", self.roster)?;
        writeln!(
            out,
            " Line Count: {}, Competitor Count: {}, Pools: {} x {} + {} x {}",
            self.line_count,
            placed + self.overflow.len(),
            self.plan.small_count,
            self.plan.pair.small,
            self.plan.large_count,
            self.plan.pair.large
        )?;

        for pool in self.pools {
            writeln!(
                out,
                "--)------- Pool # {} -------(-- ({})",
                pool.id(),
                pool.len()
            )?;
            for competitor in pool.members() {
                write_competitor(out, competitor)?;
            }
            writeln!(out, "{}", club_summary(pool.clubs()))?;
        }

        if !self.overflow.is_empty() {
            writeln!(out, "--)------- Unplaced -------(-- ({})", self.overflow.len())?;
            for competitor in self.overflow {
                write_competitor(out, competitor)?;
            }
        }

        for row in self.skipped {
            writeln!(out, "Line # {} does not match format: {}", row.line, row.reason)?;
        }

        Ok(())
    }
}

fn write_competitor<W: Write>(out: &mut W, c: &Competitor) -> io::Result<()> {
    let year = c.year.map_or_else(|| "-".to_string(), |y| y.to_string());
    writeln!(
        out,
        "{: <22} {: <22} {: <22} {: <22} {: <22}",
        c.first,
        c.last,
        c.club,
        c.rank,
        year
    )
}

/// `Clubs: A: 1, B: 5, (none): 1`
fn club_summary(clubs: &ClubTally) -> String {
    let entries: Vec<String> = clubs
        .iter()
        .map(|(club, count)| {
            let name = if club.is_empty() { "(none)" } else { club };
            format!("{name}: {count}")
        })
        .collect();
    format!("Clubs: {}", entries.join(", "))
}
