//! Plays complete rounds through the public API.

use mt_core::{Game, GameError, Phase, QuestionCount, QuizSettings, Round, Submission, TableRange};
use rand::{rngs::StdRng, SeedableRng};

fn settings(min: u8, max: u8, count: QuestionCount) -> QuizSettings {
    QuizSettings {
        range: TableRange::new(min, max).unwrap(),
        count,
    }
}

/// Answers every question, getting each one wrong `misses` times first.
fn play(game: &mut Game, misses: u32) -> mt_core::Outcome {
    loop {
        let question = game.current_question().expect("round in play");
        for _ in 0..misses {
            let wrong = (question.answer() + 7).to_string();
            assert_eq!(game.submit(&wrong), Ok(Submission::Incorrect));
            game.acknowledge();
        }
        match game.submit(&question.answer().to_string()) {
            Ok(Submission::Finished(outcome)) => return outcome,
            Ok(Submission::Correct { next }) => {
                assert_eq!(game.current_question(), Some(next));
            }
            other => panic!("unexpected submission result {other:?}"),
        }
    }
}

#[test]
fn every_count_plays_to_completion() {
    let mut rng = StdRng::seed_from_u64(2022);
    for count in QuestionCount::ALL {
        let mut game = Game::new();
        game.start(Round::generate(&settings(2, 12, count), &mut rng));

        let outcome = play(&mut game, 0);
        assert_eq!(outcome.questions, count.get());
        assert_eq!(outcome.mistakes, 0);
        assert_eq!(game.phase(), Phase::NotStarted);
    }
}

#[test]
fn mistakes_accumulate_across_questions() {
    let mut game = Game::new();
    game.start(Round::seeded(&settings(1, 20, QuestionCount::Ten), Some(5)));

    let outcome = play(&mut game, 2);
    assert_eq!(outcome.mistakes, 20);
    assert_eq!(outcome.notice().title, "You won!");
}

#[test]
fn last_question_must_be_answered() {
    // Duplicates of the final question earlier in the round must not end it.
    let mut game = Game::new();
    game.start(Round::seeded(&settings(1, 2, QuestionCount::Twenty), Some(8)));

    let mut answered = 0;
    loop {
        let answer = game.current_question().unwrap().answer().to_string();
        answered += 1;
        if let Submission::Finished(_) = game.submit(&answer).unwrap() {
            break;
        }
    }
    assert_eq!(answered, 20);
}

#[test]
fn finished_game_refuses_answers_until_restarted() {
    let mut game = Game::new();
    game.start(Round::seeded(&QuizSettings::default(), Some(1)));
    play(&mut game, 0);

    assert_eq!(game.submit("10"), Err(GameError::NotStarted));

    game.start(Round::seeded(&QuizSettings::default(), Some(2)));
    assert_eq!(game.progress(), Some((0, 5)));
}
