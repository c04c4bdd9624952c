//! Round state machines driven line by line.

mod common;

use catch_phrase::game::{OUT_OF_CLUES, RoundPhase};
use catch_phrase::{
    ClueReply, ComputerCluesRound, Guess, GuessReply, HumanCluesRound, RoundOutcome,
};

#[test]
fn test_dog_example_is_won() {
    let rules = common::dog_rules();
    let mut round = HumanCluesRound::new("dog");

    let reply = round.respond("A puppy, or a canine!", &rules);
    assert_eq!(reply, ClueReply::Guess(Guess::Word("dog".to_string())));
    assert_eq!(round.clues().tokens(), ["puppy", "canine"]);

    assert_eq!(round.respond("y", &rules), ClueReply::Finished(RoundOutcome::Won));
    assert_eq!(RoundOutcome::Won.points(), 1);
}

#[test]
fn test_clue_bag_and_history_only_grow() {
    let rules = common::dog_rules();
    let mut round = HumanCluesRound::new("wolf");

    round.respond("puppy", &rules);
    assert_eq!(round.history().len(), 1);
    round.respond("n", &rules);
    round.respond("canine", &rules);
    assert_eq!(round.clues().len(), 2);
    assert_eq!(round.history().len(), 2);
    assert!(round.history().contains("dog"));
    assert!(round.history().contains("cat"));

    // Nothing left to guess; the fallback does not advance the round.
    let reply = round.respond("howl", &rules);
    assert_eq!(reply, ClueReply::Guess(Guess::Exhausted));
    assert_eq!(round.phase(), RoundPhase::AwaitingClueInput);
    assert_eq!(round.clues().len(), 3);
}

#[test]
fn test_giveaway_clue_is_reported_and_not_kept() {
    let rules = common::dog_rules();
    let mut round = HumanCluesRound::new("dog");

    let reply = round.respond("dogs bark", &rules);
    assert!(matches!(reply, ClueReply::Illegal(ref illegal) if illegal.token == "dogs"));
    assert!(round.clues().is_empty());
    assert_eq!(round.phase(), RoundPhase::AwaitingClueInput);
}

#[test]
fn test_quit_at_any_boundary() {
    let rules = common::dog_rules();

    let mut fresh = HumanCluesRound::new("dog");
    assert_eq!(fresh.respond("q", &rules), ClueReply::Finished(RoundOutcome::Quit));

    let mut guessing = HumanCluesRound::new("dog");
    guessing.respond("puppy", &rules);
    assert_eq!(guessing.respond("Q", &rules), ClueReply::Finished(RoundOutcome::Quit));
    assert_eq!(RoundOutcome::Quit.points(), 0);
}

#[test]
fn test_exact_guess_wins_computer_round() {
    let rules = common::dog_rules();
    let mut round = ComputerCluesRound::new(
        "elephant",
        vec!["a very large animal with a trunk".to_string()],
        &rules,
    );
    assert_eq!(
        round.respond("  Elephant ", &rules),
        GuessReply::Finished(RoundOutcome::Won)
    );
}

#[test]
fn test_close_guess_keeps_the_clue() {
    let rules = common::dog_rules();
    let mut round = ComputerCluesRound::new(
        "elephant",
        vec![
            "the <blank> never forgets".to_string(),
            "a very large animal with a trunk".to_string(),
        ],
        &rules,
    );
    let first = round.current_clue().to_string();

    for near_miss in ["elephnat", "elepant", "elephants"] {
        assert_eq!(round.respond(near_miss, &rules), GuessReply::Close);
        assert_eq!(round.current_clue(), first);
        assert_eq!(round.clues_served(), 1);
    }

    assert_eq!(
        round.respond("giraffe", &rules),
        GuessReply::NextClue("the <blank> never forgets".to_string())
    );
    assert_eq!(
        round.respond("rhino", &rules),
        GuessReply::NextClue(OUT_OF_CLUES.to_string())
    );
}
