use chrono::Weekday;
use league_core::{
    Conference, Player, PlayerSkills, RandomSource, Result, SkillType, Team, TrainingFocus,
    TrainingSchedule,
};

const CITIES: [&str; 15] = [
    "Harbor", "Summit", "Granite", "Lakeside", "Redwood", "Ironvale", "Bayview", "Prairie",
    "Northgate", "Cedar", "Riverton", "Sandpoint", "Highland", "Frost", "Mesa",
];

const FIRST_NAMES: [&str; 10] = [
    "Jalen", "Marcus", "Devin", "Andre", "Tyrese", "Luka", "Kofi", "Mateo", "Ravi", "Owen",
];

const LAST_NAMES: [&str; 10] = [
    "Okafor", "Brooks", "Ivanov", "Mensah", "Carter", "Silva", "Novak", "Reyes", "Adeyemi", "Park",
];

pub const ROSTER_SIZE: u32 = 12;

/// Demo league for the batch driver; in production the roster provider
/// supplies these records.
pub struct LeagueGenerator {
    next_player_id: u32,
}

impl Default for LeagueGenerator {
    fn default() -> Self {
        LeagueGenerator { next_player_id: 1 }
    }
}

impl LeagueGenerator {
    pub fn new() -> Self {
        LeagueGenerator::default()
    }

    pub fn generate_teams(&self, per_conference: u32, rng: &mut dyn RandomSource) -> Vec<Team> {
        let mut teams = Vec::with_capacity(per_conference as usize * 2);

        for (offset, conference) in [(0, Conference::West), (per_conference, Conference::East)] {
            for index in 0..per_conference {
                let id = offset + index + 1;
                let name = format!("{} {}", CITIES[(id as usize - 1) % CITIES.len()], conference);

                let wins = rng.next_below(83) as u16;
                let mut team = Team::new(id, name, conference)
                    .with_record(wins, 82 - wins)
                    .with_training(Self::generate_training_schedule(rng));

                team.cash = 500_000 + rng.next_below(2_500_000) as i64;
                team.ticket_price = 20 + rng.next_below(80) as u32;

                teams.push(team);
            }
        }

        teams
    }

    pub fn generate_roster(&mut self, team_id: u32, rng: &mut dyn RandomSource) -> Result<Vec<Player>> {
        (0..ROSTER_SIZE)
            .map(|_| self.generate_player(Some(team_id), rng))
            .collect()
    }

    pub fn generate_player(&mut self, team_id: Option<u32>, rng: &mut dyn RandomSource) -> Result<Player> {
        let id = self.next_player_id;
        self.next_player_id += 1;

        let age = 19 + rng.next_below(18) as u8;
        let level = 45.0 + rng.next_f64() as f32 * 40.0;
        let potential = (level as u8 + rng.next_below(20) as u8).min(100);

        let mut skills = PlayerSkills::default();
        for skill in SkillType::ALL {
            let spread = (rng.next_f64() as f32 - 0.5) * 16.0;
            skills.set(skill, (level + spread).clamp(1.0, 95.0));
        }

        let name = format!(
            "{} {}",
            FIRST_NAMES[rng.next_below(FIRST_NAMES.len() as u64) as usize],
            LAST_NAMES[rng.next_below(LAST_NAMES.len() as u64) as usize]
        );

        Player::new(id, name, team_id, age, potential, skills)
    }

    fn generate_training_schedule(rng: &mut dyn RandomSource) -> TrainingSchedule {
        [Weekday::Mon, Weekday::Wed, Weekday::Fri]
            .into_iter()
            .fold(TrainingSchedule::new(), |schedule, day| {
                let focus = TrainingFocus::ALL[rng.next_below(TrainingFocus::ALL.len() as u64) as usize];
                schedule.with_day(day, focus)
            })
    }
}
