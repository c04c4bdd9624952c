//! First-class invariants for clue-giving rounds.
//!
//! Checked after every transition in debug builds.

use super::round::{HumanCluesRound, RoundPhase};
use super::types::RoundOutcome;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns the descriptions of every violated invariant.
    fn check_all(state: &S) -> Result<(), Vec<&'static str>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<&'static str>> {
        let violations: Vec<&'static str> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| description)
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The guess on the table has been recorded in the history.
pub struct CurrentGuessRecorded;

impl Invariant<HumanCluesRound> for CurrentGuessRecorded {
    fn holds(round: &HumanCluesRound) -> bool {
        round
            .current_guess()
            .is_none_or(|guess| round.history().contains(guess))
    }

    fn description() -> &'static str {
        "Current guess is recorded in the guess history"
    }
}

/// The secret word itself never enters the clue bag.
pub struct SecretNotInBag;

impl Invariant<HumanCluesRound> for SecretNotInBag {
    fn holds(round: &HumanCluesRound) -> bool {
        !round
            .clues()
            .tokens()
            .iter()
            .any(|token| token == round.secret_word())
    }

    fn description() -> &'static str {
        "Secret word never appears in the clue bag"
    }
}

/// A won round always had a guess to confirm.
pub struct WinHasGuess;

impl Invariant<HumanCluesRound> for WinHasGuess {
    fn holds(round: &HumanCluesRound) -> bool {
        round.phase() != RoundPhase::Finished(RoundOutcome::Won) || round.current_guess().is_some()
    }

    fn description() -> &'static str {
        "A won round has a confirmed guess"
    }
}

/// All clue-giving round invariants.
pub type HumanRoundInvariants = (CurrentGuessRecorded, SecretNotInBag, WinHasGuess);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_round_holds() {
        let round = HumanCluesRound::new("dog");
        assert!(HumanRoundInvariants::check_all(&round).is_ok());
    }
}
