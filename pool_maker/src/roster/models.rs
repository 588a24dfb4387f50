//! Competitor data models.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::errors::FormatError;

/// Rank class used for unrated competitors unless configured otherwise.
pub const DEFAULT_UNRATED_CLASS: char = 'U';

/// Single grade symbol, the primary ranking key.
///
/// Classes compare by their character code, so `'A'` outranks `'B'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankClass(pub char);

impl RankClass {
    /// The grade character
    pub fn symbol(self) -> char {
        self.0
    }
}

impl std::fmt::Display for RankClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ranking key of a competitor.
///
/// Field order matters for the derived ordering: rank class first, then
/// year. `Option` orders `None` before `Some`, so a competitor without a
/// year outranks one with a year inside the same class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankKey {
    pub rank: RankClass,
    pub year: Option<u16>,
}

/// One participant of the competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    /// Family name
    pub last: String,
    /// Given name
    pub first: String,
    /// Club name, empty when unaffiliated
    pub club: String,
    /// Rank class
    pub rank: RankClass,
    /// Graduation or seed year, absent for unrated competitors
    pub year: Option<u16>,
}

impl Competitor {
    /// Build a competitor from its positional fields.
    ///
    /// `rating` is a grade character followed by the year digits, e.g.
    /// `"B19"` or `"C2021"`. When the grade is `unrated_class` the suffix is
    /// ignored and the competitor has no year.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if `rating` is empty, or if a year is expected
    /// and the suffix is empty or not made of ASCII digits.
    pub fn parse(
        last: &str,
        first: &str,
        club: &str,
        rating: &str,
        unrated_class: char,
    ) -> Result<Self, FormatError> {
        let mut chars = rating.chars();
        let grade = chars.next().ok_or(FormatError::EmptyRating)?;
        let suffix = chars.as_str();

        let year = if grade == unrated_class {
            None
        } else {
            Some(parse_year(rating, suffix)?)
        };

        Ok(Self {
            last: last.to_string(),
            first: first.to_string(),
            club: club.to_string(),
            rank: RankClass(grade),
            year,
        })
    }

    /// Ranking key; lower keys are extracted first.
    pub fn rank_key(&self) -> RankKey {
        RankKey {
            rank: self.rank,
            year: self.year,
        }
    }

    /// Compare two competitors by ranking key only.
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.rank_key().cmp(&other.rank_key())
    }

    /// Whether the competitor belongs to no club
    pub fn is_unaffiliated(&self) -> bool {
        self.club.is_empty()
    }

    /// Rating as written in a roster, e.g. `B19` or `U`
    pub fn rating(&self) -> String {
        match self.year {
            Some(year) => format!("{}{}", self.rank, year),
            None => self.rank.to_string(),
        }
    }
}

/// Number of competitors per club.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClubTally(BTreeMap<String, usize>);

impl ClubTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more member of `club`
    pub fn record(&mut self, club: &str) {
        *self.0.entry(club.to_string()).or_insert(0) += 1;
    }

    /// Members counted for `club`
    pub fn count(&self, club: &str) -> usize {
        self.0.get(club).copied().unwrap_or(0)
    }

    /// Sum over all clubs
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Clubs and counts in club-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(club, &count)| (club.as_str(), count))
    }
}

impl<'a> FromIterator<&'a Competitor> for ClubTally {
    fn from_iter<I: IntoIterator<Item = &'a Competitor>>(iter: I) -> Self {
        let mut tally = Self::new();
        for competitor in iter {
            tally.record(&competitor.club);
        }
        tally
    }
}

fn parse_year(rating: &str, suffix: &str) -> Result<u16, FormatError> {
    if suffix.is_empty() {
        return Err(FormatError::MissingYear(rating.to_string()));
    }
    if !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::InvalidYear(rating.to_string()));
    }
    suffix
        .parse()
        .map_err(|_| FormatError::InvalidYear(rating.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitor(rating: &str) -> Competitor {
        Competitor::parse("Doe", "Jane", "Fencers", rating, DEFAULT_UNRATED_CLASS).unwrap()
    }

    #[test]
    fn test_parse_rated_competitor() {
        let c = competitor("B19");
        assert_eq!(c.rank, RankClass('B'));
        assert_eq!(c.year, Some(19));
        assert_eq!(c.club, "Fencers");
        assert_eq!(c.rating(), "B19");
    }

    #[test]
    fn test_parse_unrated_ignores_suffix() {
        assert_eq!(competitor("U").year, None);
        assert_eq!(competitor("U22").year, None);
        assert_eq!(competitor("U").rating(), "U");
    }

    #[test]
    fn test_parse_custom_unrated_class() {
        let c = Competitor::parse("Doe", "Jane", "", "N", 'N').unwrap();
        assert_eq!(c.year, None);
        assert!(c.is_unaffiliated());
    }

    #[test]
    fn test_parse_rejects_bad_ratings() {
        let parse = |r| Competitor::parse("a", "b", "c", r, DEFAULT_UNRATED_CLASS);
        assert_eq!(parse(""), Err(FormatError::EmptyRating));
        assert_eq!(parse("A"), Err(FormatError::MissingYear("A".to_string())));
        assert_eq!(parse("A1x"), Err(FormatError::InvalidYear("A1x".to_string())));
        assert_eq!(parse("A-4"), Err(FormatError::InvalidYear("A-4".to_string())));
        assert_eq!(parse("A99999"), Err(FormatError::InvalidYear("A99999".to_string())));
    }

    #[test]
    fn test_rank_class_dominates_year() {
        assert_eq!(competitor("A22").cmp_rank(&competitor("B10")), Ordering::Less);
        assert_eq!(competitor("E10").cmp_rank(&competitor("U")), Ordering::Less);
    }

    #[test]
    fn test_earlier_year_outranks_later() {
        assert_eq!(competitor("C18").cmp_rank(&competitor("C21")), Ordering::Less);
        assert_eq!(competitor("C21").cmp_rank(&competitor("C21")), Ordering::Equal);
    }

    #[test]
    fn test_missing_year_outranks_year_in_same_class() {
        let unrated = competitor("U");
        let mut rated_u = unrated.clone();
        rated_u.year = Some(1);
        assert_eq!(unrated.cmp_rank(&rated_u), Ordering::Less);
        assert_eq!(rated_u.cmp_rank(&unrated), Ordering::Greater);
        assert_eq!(unrated.cmp_rank(&unrated.clone()), Ordering::Equal);
    }

    #[test]
    fn test_club_tally_counts_members() {
        let members = [competitor("A20"), competitor("B20"), competitor("U")];
        let mut tally: ClubTally = members.iter().collect();
        tally.record("");

        assert_eq!(tally.count("Fencers"), 3);
        assert_eq!(tally.count(""), 1);
        assert_eq!(tally.count("Nobody"), 0);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.iter().map(|(club, _)| club).collect::<Vec<_>>(), vec!["", "Fencers"]);
    }
}
