use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Every move, in the order the buttons are laid out.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    /// The letter drawn inside a choice card.
    pub fn initial(self) -> char {
        match self {
            Move::Rock => 'R',
            Move::Paper => 'P',
            Move::Scissors => 'S',
        }
    }

    /// The move this one defeats.
    pub fn victim(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    pub fn beats(self, other: Move) -> bool {
        self.victim() == other
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerWin,
    PlayerLose,
    Draw,
}

impl Outcome {
    pub fn resolve(player: Move, opponent: Move) -> Self {
        if player == opponent {
            Outcome::Draw
        } else if player.beats(opponent) {
            Outcome::PlayerWin
        } else {
            Outcome::PlayerLose
        }
    }

    /// Banner shown under the cards once a round has been played.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::PlayerWin => "You Win!",
            Outcome::PlayerLose => "You Lose!",
            Outcome::Draw => "Draw!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, Outcome};

    #[test]
    fn winning_pairs() {
        assert_eq!(
            Outcome::resolve(Move::Rock, Move::Scissors),
            Outcome::PlayerWin
        );
        assert_eq!(
            Outcome::resolve(Move::Scissors, Move::Paper),
            Outcome::PlayerWin
        );
        assert_eq!(Outcome::resolve(Move::Paper, Move::Rock), Outcome::PlayerWin);
    }

    #[test]
    fn losing_pairs() {
        assert_eq!(
            Outcome::resolve(Move::Scissors, Move::Rock),
            Outcome::PlayerLose
        );
        assert_eq!(
            Outcome::resolve(Move::Paper, Move::Scissors),
            Outcome::PlayerLose
        );
        assert_eq!(
            Outcome::resolve(Move::Rock, Move::Paper),
            Outcome::PlayerLose
        );
    }

    #[test]
    fn mirror_is_draw() {
        for m in Move::ALL {
            assert_eq!(Outcome::resolve(m, m), Outcome::Draw);
        }
    }

    #[test]
    fn every_pair_has_exactly_one_winner_or_draw() {
        for a in Move::ALL {
            for b in Move::ALL {
                let forward = Outcome::resolve(a, b);
                let reverse = Outcome::resolve(b, a);
                match forward {
                    Outcome::Draw => assert_eq!(reverse, Outcome::Draw),
                    Outcome::PlayerWin => assert_eq!(reverse, Outcome::PlayerLose),
                    Outcome::PlayerLose => assert_eq!(reverse, Outcome::PlayerWin),
                }
            }
        }
    }

    #[test]
    fn initials_and_names() {
        let names: Vec<String> = Move::ALL.iter().map(Move::to_string).collect();
        assert_eq!(names, ["Rock", "Paper", "Scissors"]);
        for m in Move::ALL {
            assert_eq!(m.to_string().chars().next(), Some(m.initial()));
        }
    }
}
