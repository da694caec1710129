use crate::constants::{DRAW_LABEL, NFL_KIND, ONE_X_TWO};

use super::BetSelection;

#[derive(Clone, Debug, PartialEq)]
pub struct Team {
    pub name: String,
    pub score: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Price {
    pub odds: f64,
    pub movement: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixtureOdds {
    pub home: Price,
    pub draw: Price,
    pub away: Price,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    Home,
    Draw,
    Away,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fixture {
    pub competition: String,
    pub status: String,
    pub kind: String,
    pub home: Team,
    pub away: Team,
    pub odds: FixtureOdds,
}

impl Fixture {
    pub fn description(&self) -> String {
        format!("{} vs {}", self.home.name, self.away.name)
    }
    pub fn price(&self, pick: Pick) -> Price {
        match pick {
            Pick::Home => self.odds.home,
            Pick::Draw => self.odds.draw,
            Pick::Away => self.odds.away,
        }
    }
    pub fn selection(&self, pick: Pick) -> BetSelection {
        let chosen = match pick {
            Pick::Home => self.home.name.clone(),
            Pick::Draw => DRAW_LABEL.to_string(),
            Pick::Away => self.away.name.clone(),
        };
        BetSelection {
            chosen,
            bet: ONE_X_TWO.to_string(),
            fixture: self.description(),
            odds: self.price(pick).odds,
        }
    }
}

fn team(name: &str, score: u32) -> Team {
    Team {
        name: name.to_string(),
        score,
    }
}

fn price(odds: f64, movement: f64) -> Price {
    Price { odds, movement }
}

/// Top matches shown in the featured carousel.
pub fn featured() -> Vec<Fixture> {
    vec![
        Fixture {
            competition: "NBA 2024".to_string(),
            status: "Tomorrow, 19:00".to_string(),
            kind: "Basketball".to_string(),
            home: team("Utah Jazz", 45),
            away: team("GS Warriors", 50),
            odds: FixtureOdds {
                home: price(1.5, 0.1),
                draw: price(2.5, 0.1),
                away: price(3.5, 0.1),
            },
        },
        Fixture {
            competition: "NFL 2024".to_string(),
            status: "1st quarter".to_string(),
            kind: NFL_KIND.to_string(),
            home: team("Giants", 7),
            away: team("Browns", 3),
            odds: FixtureOdds {
                home: price(1.8, 1.0),
                draw: price(3.2, 1.0),
                away: price(2.8, -1.0),
            },
        },
    ]
}
