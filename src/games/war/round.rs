//! Round resolution: deal, compare, war chains, pile award.

use log::{debug, trace};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{PlayerId, Shuffle};
use crate::rules::{determine_winner, Showdown};

use super::machine::WarMachine;

/// Cards shown face up in one comparison, one per seat.
pub type PlayedCards = SmallVec<[Card; 8]>;

/// States a round passes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// Every seat turns over its front card.
    Dealing,
    /// The face-up cards are ranked.
    Comparing,
    /// Tie: every seat adds a face-down card and turns over another.
    War,
    /// The pile goes to the winner.
    PileAward,
    /// Round over.
    Done,
}

/// Text markers emitted alongside the played cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundMarker {
    /// A tie started a war iteration.
    War,
    /// Everyone ran out mid-war; seat 0 takes the pile.
    BadGame,
}

impl std::fmt::Display for RoundMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundMarker::War => f.write_str("WAR"),
            RoundMarker::BadGame => f.write_str("BAD GAME"),
        }
    }
}

/// Observation hook for renderers. Receives display data only.
pub trait RoundObserver {
    /// Cards turned face up for one comparison, in seat order. Seats with
    /// nothing to show appear as joker placeholders.
    fn on_cards_played(&mut self, _cards: &[Card]) {}

    /// A war started or the stalemate fallback fired.
    fn on_marker(&mut self, _marker: RoundMarker) {}

    /// The game reached a terminal state.
    fn on_game_over(&mut self) {}
}

impl RoundObserver for () {}

/// Summary of one resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// Seat that took the pile.
    pub winner: PlayerId,
    /// War iterations this round needed.
    pub wars: usize,
    /// Cards in the awarded pile.
    pub cards_won: usize,
    /// The stalemate fallback picked the winner.
    pub stalemate: bool,
}

impl<R: Shuffle> WarMachine<R> {
    /// Resolve one round.
    pub fn play_round(&mut self) -> RoundReport {
        self.play_round_observed(&mut ())
    }

    /// Resolve one round, reporting what was played to `observer`.
    pub fn play_round_observed<O: RoundObserver + ?Sized>(&mut self, observer: &mut O) -> RoundReport {
        let mut pile: Vec<Card> = Vec::with_capacity(self.players.len() * 3);
        let mut played = PlayedCards::new();
        let mut winner = 0;
        let mut wars = 0;
        let mut stalemate = false;
        let mut cards_won = 0;

        let mut phase = RoundPhase::Dealing;
        while phase != RoundPhase::Done {
            phase = match phase {
                RoundPhase::Dealing => {
                    played = self.deal_face_up(&mut pile);
                    observer.on_cards_played(&played);
                    RoundPhase::Comparing
                }
                RoundPhase::Comparing => match determine_winner(&played, &self.rules) {
                    Showdown::Winner(seat) => {
                        winner = seat;
                        RoundPhase::PileAward
                    }
                    Showdown::Tie if wars > 0 && !self.any_cards_left() => {
                        debug!("stalemate after {} wars, seat 0 takes {} cards", wars, pile.len());
                        observer.on_marker(RoundMarker::BadGame);
                        stalemate = true;
                        winner = 0;
                        RoundPhase::PileAward
                    }
                    Showdown::Tie => RoundPhase::War,
                },
                RoundPhase::War => {
                    wars += 1;
                    observer.on_marker(RoundMarker::War);
                    played = self.deal_war(&mut pile);
                    observer.on_cards_played(&played);
                    RoundPhase::Comparing
                }
                RoundPhase::PileAward => {
                    debug_assert!(pile.iter().all(|c| !c.is_joker()));
                    if self.rules.shuffle_winners_pile {
                        self.rng.shuffle(&mut pile);
                    }
                    cards_won = pile.len();
                    self.players[winner].add_cards(pile.drain(..));
                    RoundPhase::Done
                }
                RoundPhase::Done => RoundPhase::Done,
            };
        }

        self.rounds_played += 1;
        let report = RoundReport {
            winner: PlayerId::new(winner as u8),
            wars,
            cards_won,
            stalemate,
        };
        trace!("round {}: {:?}", self.rounds_played, report);
        report
    }

    /// Every seat plays its front card; empty seats show a placeholder.
    fn deal_face_up(&mut self, pile: &mut Vec<Card>) -> PlayedCards {
        let played: PlayedCards = self
            .players
            .iter_mut()
            .map(|p| p.play_card().unwrap_or_else(Card::joker))
            .collect();
        pile.extend(played.iter().filter(|c| !c.is_joker()));
        played
    }

    /// Every seat adds one card to the pile face down, then turns over the
    /// next one for comparison.
    ///
    /// A seat without a second card shows its face-down card when
    /// `last_card_played_face_up` is set, otherwise a placeholder.
    fn deal_war(&mut self, pile: &mut Vec<Card>) -> PlayedCards {
        let face_up_last = self.rules.last_card_played_face_up;
        let mut played = PlayedCards::new();

        for player in &mut self.players {
            let face_down = player.play_card();
            pile.extend(face_down);

            let shown = match player.play_card() {
                Some(card) => {
                    pile.push(card);
                    card
                }
                None if face_up_last => face_down.unwrap_or_else(Card::joker),
                None => Card::joker(),
            };
            played.push(shown);
        }

        played
    }

    fn any_cards_left(&self) -> bool {
        self.players.iter().any(|p| p.has_cards())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::core::{RuleConfig, Unshuffled};
    use crate::players::PlayerDeck;

    fn seat(ranks: &[Rank]) -> PlayerDeck {
        PlayerDeck::unnamed().with_cards(ranks.iter().map(|&r| Card::new(r, 0)))
    }

    fn machine(seats: Vec<PlayerDeck>, rules: RuleConfig) -> WarMachine<Unshuffled> {
        WarMachine::new(Vec::new(), seats, rules.with_swap(false), Unshuffled)
    }

    fn ranks(deck: &PlayerDeck) -> Vec<Rank> {
        deck.cards().map(|c| c.rank).collect()
    }

    #[derive(Default)]
    struct Recorder {
        lines: Vec<String>,
    }

    impl RoundObserver for Recorder {
        fn on_cards_played(&mut self, cards: &[Card]) {
            let values: Vec<String> = cards.iter().map(|c| c.value().to_string()).collect();
            self.lines.push(values.join(" "));
        }

        fn on_marker(&mut self, marker: RoundMarker) {
            self.lines.push(marker.to_string());
        }
    }

    #[test]
    fn test_simple_round() {
        let mut game = machine(
            vec![seat(&[Rank::FIVE, Rank::TWO]), seat(&[Rank::NINE, Rank::THREE])],
            RuleConfig::default().with_shuffle_winners_pile(false),
        );

        let report = game.play_round();

        assert_eq!(report.winner, PlayerId::new(1));
        assert_eq!(report.wars, 0);
        assert_eq!(report.cards_won, 2);
        assert_eq!(ranks(&game.players()[0]), vec![Rank::TWO]);
        assert_eq!(ranks(&game.players()[1]), vec![Rank::THREE, Rank::FIVE, Rank::NINE]);
    }

    #[test]
    fn test_war_round() {
        let mut game = machine(
            vec![
                seat(&[Rank::SEVEN, Rank::TWO, Rank::KING, Rank::FOUR]),
                seat(&[Rank::SEVEN, Rank::THREE, Rank::QUEEN, Rank::SIX]),
            ],
            RuleConfig::default().with_shuffle_winners_pile(false),
        );
        let mut recorder = Recorder::default();

        let report = game.play_round_observed(&mut recorder);

        assert_eq!(report.winner, PlayerId::new(0));
        assert_eq!(report.wars, 1);
        assert_eq!(report.cards_won, 6);
        assert_eq!(recorder.lines, vec!["7 7", "WAR", "13 12"]);
        assert_eq!(
            ranks(&game.players()[0]),
            vec![Rank::FOUR, Rank::SEVEN, Rank::SEVEN, Rank::TWO, Rank::KING, Rank::THREE, Rank::QUEEN]
        );
        assert_eq!(ranks(&game.players()[1]), vec![Rank::SIX]);
    }

    #[test]
    fn test_last_card_played_face_up() {
        let mut game = machine(
            vec![seat(&[Rank::EIGHT, Rank::KING]), seat(&[Rank::EIGHT, Rank::TWO, Rank::FIVE])],
            RuleConfig::default().with_shuffle_winners_pile(false),
        );
        let mut recorder = Recorder::default();

        let report = game.play_round_observed(&mut recorder);

        // Seat 0 has one card left for the war and shows it.
        assert_eq!(recorder.lines, vec!["8 8", "WAR", "13 5"]);
        assert_eq!(report.winner, PlayerId::new(0));
        assert_eq!(report.cards_won, 5);
        assert!(!game.players()[1].has_cards());
    }

    #[test]
    fn test_last_card_face_down_loses_to_placeholder() {
        let mut game = machine(
            vec![seat(&[Rank::EIGHT, Rank::KING]), seat(&[Rank::EIGHT, Rank::TWO, Rank::FIVE])],
            RuleConfig::default()
                .with_shuffle_winners_pile(false)
                .with_last_card_played_face_up(false),
        );
        let mut recorder = Recorder::default();

        let report = game.play_round_observed(&mut recorder);

        assert_eq!(recorder.lines, vec!["8 8", "WAR", "0 5"]);
        assert_eq!(report.winner, PlayerId::new(1));
        assert_eq!(report.cards_won, 5);
        assert!(!game.players()[0].has_cards());
    }

    #[test]
    fn test_stalemate_goes_to_seat_zero() {
        let mut game = machine(
            vec![seat(&[Rank::NINE, Rank::FOUR]), seat(&[Rank::NINE, Rank::FOUR])],
            RuleConfig::default().with_shuffle_winners_pile(false),
        );
        let mut recorder = Recorder::default();

        let report = game.play_round_observed(&mut recorder);

        assert_eq!(recorder.lines, vec!["9 9", "WAR", "4 4", "BAD GAME"]);
        assert!(report.stalemate);
        assert_eq!(report.winner, PlayerId::new(0));
        assert_eq!(game.players()[0].len(), 4);
        assert!(!game.players()[1].has_cards());
    }

    #[test]
    fn test_war_chain() {
        let mut game = machine(
            vec![
                seat(&[Rank::TEN, Rank::TWO, Rank::JACK, Rank::THREE, Rank::ACE]),
                seat(&[Rank::TEN, Rank::FOUR, Rank::JACK, Rank::FIVE, Rank::KING]),
            ],
            RuleConfig::default().with_shuffle_winners_pile(false),
        );
        let mut recorder = Recorder::default();

        let report = game.play_round_observed(&mut recorder);

        // Second war: each seat has one card, shown face up; Ace beats King.
        assert_eq!(recorder.lines, vec!["10 10", "WAR", "11 11", "WAR", "1 13"]);
        assert_eq!(report.wars, 2);
        assert_eq!(report.winner, PlayerId::new(0));
        assert_eq!(report.cards_won, 10);
        assert_eq!(game.total_cards(), 10);
    }

    #[test]
    fn test_three_seats_with_empty_seat() {
        let mut game = machine(
            vec![seat(&[Rank::SIX]), PlayerDeck::unnamed(), seat(&[Rank::FOUR])],
            RuleConfig::default().with_shuffle_winners_pile(false),
        );
        let mut recorder = Recorder::default();

        let report = game.play_round_observed(&mut recorder);

        assert_eq!(recorder.lines, vec!["6 0 4"]);
        assert_eq!(report.winner, PlayerId::new(0));
        assert_eq!(report.cards_won, 2);
    }

    #[test]
    fn test_winner_pile_is_shuffled_with_rng() {
        use crate::core::GameRng;

        let seats = || {
            vec![
                seat(&[Rank::SEVEN, Rank::TWO, Rank::KING, Rank::FOUR]),
                seat(&[Rank::SEVEN, Rank::THREE, Rank::QUEEN, Rank::SIX]),
            ]
        };
        let rules = RuleConfig::default().with_swap(false);

        let mut first = WarMachine::new(Vec::new(), seats(), rules.clone(), GameRng::new(3));
        let mut second = WarMachine::new(Vec::new(), seats(), rules, GameRng::new(3));
        first.play_round();
        second.play_round();

        assert_eq!(first.players(), second.players());
        assert_eq!(first.players()[0].len(), 7);
    }
}
