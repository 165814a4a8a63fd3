use std::fmt::Display;

use crate::{random::MoveSource, Move, Outcome};

/// Both choices of a single finished round and how it ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub player: Move,
    pub opponent: Move,
    pub outcome: Outcome,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.wins += 1,
            Outcome::PlayerLose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

impl Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You: {}    Computer: {}    Draws: {}",
            self.wins, self.losses, self.draws
        )
    }
}

/// The whole game: the opponent's move source, the most recent round and the running score.
///
/// Created once at start-up and mutated in place by [`GameState::choose_move`].
#[derive(Debug)]
pub struct GameState<S> {
    source: S,
    last_round: Option<Round>,
    score: Scoreboard,
}

impl<S: MoveSource> GameState<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            last_round: None,
            score: Scoreboard::default(),
        }
    }

    /// Play one round: draw the opponent's move, settle it against `player` and update the score.
    pub fn choose_move(&mut self, player: Move) -> Outcome {
        let opponent = self.source.next_move();
        let outcome = Outcome::resolve(player, opponent);
        self.score.record(outcome);
        self.last_round = Some(Round {
            player,
            opponent,
            outcome,
        });
        tracing::info!(
            "Round {}: {player} vs {opponent} -> {outcome:?}",
            self.score.rounds()
        );
        outcome
    }
}

impl<S> GameState<S> {
    /// `None` until the first round has been played.
    pub fn last_round(&self) -> Option<&Round> {
        self.last_round.as_ref()
    }

    pub fn last_player_move(&self) -> Option<Move> {
        self.last_round.map(|r| r.player)
    }

    pub fn last_opponent_move(&self) -> Option<Move> {
        self.last_round.map(|r| r.opponent)
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_round.map(|r| r.outcome)
    }

    pub fn score(&self) -> &Scoreboard {
        &self.score
    }
}

#[cfg(test)]
mod tests {
    use super::{GameState, Round, Scoreboard};
    use crate::{
        random::{RandomMoves, SequenceSource},
        Move, Outcome,
    };

    #[test]
    fn fresh_state() {
        let state = GameState::new(SequenceSource::new([Move::Rock]));
        assert_eq!(state.last_round(), None);
        assert_eq!(state.last_player_move(), None);
        assert_eq!(state.last_opponent_move(), None);
        assert_eq!(state.last_outcome(), None);
        assert_eq!(*state.score(), Scoreboard::default());
    }

    #[test]
    fn rock_beats_scripted_scissors() {
        let mut state = GameState::new(SequenceSource::new([Move::Scissors]));

        assert_eq!(state.choose_move(Move::Rock), Outcome::PlayerWin);
        assert_eq!(state.score().wins, 1);
        assert_eq!(state.score().rounds(), 1);
        assert_eq!(
            state.last_round(),
            Some(&Round {
                player: Move::Rock,
                opponent: Move::Scissors,
                outcome: Outcome::PlayerWin,
            })
        );
    }

    #[test]
    fn three_rounds_of_rock() {
        let mut state = GameState::new(SequenceSource::new([
            Move::Rock,
            Move::Paper,
            Move::Scissors,
        ]));

        let outcomes: Vec<Outcome> = (0..3).map(|_| state.choose_move(Move::Rock)).collect();
        assert_eq!(
            outcomes,
            [Outcome::Draw, Outcome::PlayerLose, Outcome::PlayerWin]
        );
        assert_eq!(
            *state.score(),
            Scoreboard {
                wins: 1,
                losses: 1,
                draws: 1,
            }
        );
        assert_eq!(state.last_opponent_move(), Some(Move::Scissors));
    }

    #[test]
    fn counts_add_up_to_rounds_played() {
        let mut state = GameState::new(RandomMoves::seeded(7));
        for n in 1..=500u32 {
            let player = Move::ALL[n as usize % 3];
            state.choose_move(player);
            let score = state.score();
            assert_eq!(score.wins + score.losses + score.draws, n);
            assert_eq!(state.last_player_move(), Some(player));
        }
    }

    #[test]
    fn score_line() {
        let score = Scoreboard {
            wins: 3,
            losses: 1,
            draws: 12,
        };
        assert_eq!(score.to_string(), "You: 3    Computer: 1    Draws: 12");
    }
}
