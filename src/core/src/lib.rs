pub mod club;
pub mod league;
pub mod r#match;
pub mod utils;

pub use club::{
    Club, Player, PlayerBuilder, PlayerCondition, PlayerFieldPositionGroup, PlayerPositionType,
    PlayerSkills, PositionParseError, ResolvedAttributes, FULL_FITNESS, NEUTRAL_RATING,
};

pub use league::{
    calculate_performance_rating, EuropeanSpots, Fixture, FixtureGenerator, FixtureResult,
    FormSummary, FormTableRow, HomeRecord, LeagueTable, LeagueTableEntry, MatchdayReport, Matchday,
    NotableMatch, PlayerMatchState, PlayerStateSummary, Schedule, ScorerEntry, SeasonContext,
    SeasonError, SeasonResult, SeasonSettings, SeasonSimulator, SeasonStatistics, SkippedFixture,
    TeamDynamicState, TeamStateManager,
};

pub use r#match::{
    EventPlayer, Formation, FormationParseError, LeagueParameters, MatchEvent, MatchEventType, MatchOutcome,
    MatchSettings, MatchSide, MatchSimulator, MatchSquad, MatchState, MatchStatus, SelectionError,
    SquadSelector, TeamMatchStatistics, TeamStrength, TeamStrengthCalculator,
};

pub use utils::*;
