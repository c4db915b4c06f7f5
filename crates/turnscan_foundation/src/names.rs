//! Name resolution.
//!
//! Host messages name races and hulls by text. The parser asks a
//! [`NameResolver`] to turn those names into numbers and to expand race-name
//! placeholders in rule literals.

use crate::MAX_PLAYERS;

/// Which name table to consult.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// Short race name ("The Feds").
    ShortRaceName,
    /// Long race name ("The Solar Federation").
    LongRaceName,
    /// Race adjective ("Fed").
    AdjectiveRaceName,
    /// Hull name ("OUTRIDER CLASS SCOUT").
    HullName,
}

/// Collaborator interface for names.
pub trait NameResolver {
    /// Returns the number of the player whose messages are being parsed.
    fn player_number(&self) -> i32;

    /// Resolves a name to a race or hull number; 0 means unresolved.
    fn parse_name(&self, kind: NameKind, text: &str) -> i32;

    /// Expands race-name placeholders in `template`.
    fn expand_race_names(&self, template: &str) -> String;
}

/// Names of one race.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RaceNames {
    /// Long name.
    pub long: String,
    /// Short name.
    pub short: String,
    /// Adjective.
    pub adjective: String,
}

impl RaceNames {
    /// Creates a race name triple.
    #[must_use]
    pub fn new(long: &str, short: &str, adjective: &str) -> Self {
        Self {
            long: long.to_string(),
            short: short.to_string(),
            adjective: adjective.to_string(),
        }
    }
}

/// In-memory [`NameResolver`] backed by name tables.
///
/// Lookups are case-insensitive and ignore surrounding whitespace.
/// Placeholders `%1`..`%9`, `%a` and `%b` expand to the short name of players
/// 1..=11; `%%` is a literal percent sign.
#[derive(Clone, Debug)]
pub struct TableResolver {
    player: i32,
    races: Vec<Option<RaceNames>>,
    hulls: Vec<(i32, String)>,
}

impl TableResolver {
    /// Creates an empty resolver for player 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            player: 0,
            races: vec![None; MAX_PLAYERS],
            hulls: Vec::new(),
        }
    }

    /// Creates a resolver with the standard race names.
    #[must_use]
    pub fn standard() -> Self {
        const STANDARD: [(&str, &str, &str); MAX_PLAYERS] = [
            ("The Solar Federation", "The Feds", "Fed"),
            ("The Lizard Alliance", "The Lizards", "Lizard"),
            ("The Empire of the Birds", "The Bird Men", "Bird Man"),
            ("The Fascist Empire", "The Fascists", "Fascist"),
            ("The Privateer Bands", "The Privateers", "Privateer"),
            ("The Cyborg", "The Cyborg", "Cyborg"),
            ("The Crystal Confederation", "The Crystal People", "Crystalline"),
            ("The Evil Empire", "The Evil Empire", "Empire"),
            ("The Robotic Imperium", "The Robots", "Robotic"),
            ("The Rebel Confederation", "The Rebels", "Rebel"),
            ("The Missing Colonies of Man", "The Colonies", "Colonial"),
        ];
        let mut resolver = Self::new();
        for (i, (long, short, adj)) in STANDARD.iter().enumerate() {
            resolver.races[i] = Some(RaceNames::new(long, short, adj));
        }
        resolver
    }

    /// Parses a race list: one `player,long,short,adjective` entry per line.
    ///
    /// Blank lines and lines starting with `;` are skipped, as are malformed
    /// entries. Returns the number of entries accepted.
    pub fn load_race_list(&mut self, text: &str) -> usize {
        let mut accepted = 0;
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            let parts: Vec<&str> = line.splitn(4, ',').map(str::trim).collect();
            if let [player, long, short, adj] = parts.as_slice() {
                if let Ok(player) = player.parse::<usize>() {
                    if (1..=MAX_PLAYERS).contains(&player) {
                        self.set_race(player, RaceNames::new(long, short, adj));
                        accepted += 1;
                    }
                }
            }
        }
        accepted
    }

    /// Sets the viewing player.
    #[must_use]
    pub fn with_player(mut self, player: i32) -> Self {
        self.player = player;
        self
    }

    /// Adds a hull name.
    #[must_use]
    pub fn with_hull(mut self, id: i32, name: &str) -> Self {
        self.hulls.push((id, name.trim().to_string()));
        self
    }

    /// Sets the names of a race. Players outside `1..=MAX_PLAYERS` are ignored.
    pub fn set_race(&mut self, player: usize, names: RaceNames) {
        if let Some(slot) = player.checked_sub(1).and_then(|i| self.races.get_mut(i)) {
            *slot = Some(names);
        }
    }

    /// Returns the names of a race.
    #[must_use]
    pub fn race(&self, player: usize) -> Option<&RaceNames> {
        player
            .checked_sub(1)
            .and_then(|i| self.races.get(i))
            .and_then(Option::as_ref)
    }

    fn find_race(&self, text: &str, select: fn(&RaceNames) -> &str) -> i32 {
        self.races
            .iter()
            .position(|r| r.as_ref().is_some_and(|r| select(r).eq_ignore_ascii_case(text)))
            .and_then(|i| i32::try_from(i + 1).ok())
            .unwrap_or(0)
    }
}

impl Default for TableResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NameResolver for TableResolver {
    fn player_number(&self) -> i32 {
        self.player
    }

    fn parse_name(&self, kind: NameKind, text: &str) -> i32 {
        let text = text.trim();
        if text.is_empty() {
            return 0;
        }
        match kind {
            NameKind::ShortRaceName => self.find_race(text, |r| &r.short),
            NameKind::LongRaceName => self.find_race(text, |r| &r.long),
            NameKind::AdjectiveRaceName => self.find_race(text, |r| &r.adjective),
            NameKind::HullName => self
                .hulls
                .iter()
                .find(|(_, name)| name.eq_ignore_ascii_case(text))
                .map_or(0, |(id, _)| *id),
        }
    }

    fn expand_race_names(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut chars = template.chars();
        while let Some(ch) = chars.next() {
            if ch != '%' {
                out.push(ch);
                continue;
            }
            match chars.next() {
                Some('%') => out.push('%'),
                Some(c) => {
                    let player = c.to_digit(12).map_or(0, |d| d as usize);
                    match self.race(player) {
                        Some(names) => out.push_str(&names.short),
                        None => {
                            out.push('%');
                            out.push(c);
                        }
                    }
                }
                None => out.push('%'),
            }
        }
        out
    }
}
