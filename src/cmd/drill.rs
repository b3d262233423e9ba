// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::time::Duration;

use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tokio::io::Lines;
use tokio::io::Stdin;
use tokio::io::stdin;

use crate::cmd::CliTrainer;
use crate::error::Fallible;
use crate::session::machine::Step;
use crate::session::state::Answer;
use crate::session::state::Phase;
use crate::session::timer::PendingAdvance;
use crate::session::view::Summary;
use crate::session::view::View;

type Input = Lines<BufReader<Stdin>>;

const LEARN_HELP: &str = "[enter/r] reveal  [n] next  [p] previous  [q] quit";

const TEST_HELP: &str = "[y] knew it  [n] didn't  [s] skip  [p] previous  [q] quit";

pub async fn learn_session(trainer: &mut CliTrainer, set: Option<&str>) -> Fallible<()> {
    if let Some(name) = set {
        trainer.select_set(name)?;
    }
    render(&trainer.enter_learning()?);
    println!("{LEARN_HELP}");
    let mut input: Input = BufReader::new(stdin()).lines();
    while let Some(line) = input.next_line().await? {
        match line.trim() {
            "" | "r" => render(&trainer.reveal()?),
            "n" => match trainer.next()? {
                Step::Card(view) => render(&view),
                Step::Finished(summary) => {
                    render_summary(&summary);
                    break;
                }
            },
            "p" => render(&trainer.previous()?),
            "q" => break,
            _ => {
                println!("{LEARN_HELP}");
                render(&trainer.view()?);
            }
        }
    }
    trainer.abandon();
    Ok(())
}

pub async fn test_session(trainer: &mut CliTrainer, set: Option<&str>, delay: Duration) -> Fallible<()> {
    if let Some(name) = set {
        trainer.select_set(name)?;
    }
    render(&trainer.enter_test()?);
    println!("{TEST_HELP}");
    let mut input: Input = BufReader::new(stdin()).lines();
    loop {
        let Some(line) = input.next_line().await? else {
            break;
        };
        let flow = match line.trim() {
            "y" => score(trainer, &mut input, Answer::Correct, delay).await?,
            "n" => score(trainer, &mut input, Answer::Wrong, delay).await?,
            "s" => Flow::Moved(Some(trainer.next()?)),
            "p" => Flow::Moved(Some(Step::Card(trainer.previous()?))),
            "q" => Flow::Quit,
            _ => {
                println!("{TEST_HELP}");
                Flow::Moved(None)
            }
        };
        match flow {
            Flow::Moved(Some(Step::Card(view))) => render(&view),
            Flow::Moved(Some(Step::Finished(summary))) => {
                render_summary(&summary);
                break;
            }
            Flow::Moved(None) => {}
            Flow::Quit => break,
        }
    }
    if trainer.phase() != Phase::Idle {
        log::debug!("Test abandoned.");
        trainer.abandon();
    }
    Ok(())
}

enum Flow {
    Moved(Option<Step>),
    Quit,
}

/// Records the answer, shows it, and waits out the delay before moving on.
/// Input keeps being read while waiting; navigating or quitting cancels the
/// pending advance.
async fn score(
    trainer: &mut CliTrainer,
    input: &mut Input,
    answer: Answer,
    delay: Duration,
) -> Fallible<Flow> {
    let scored = trainer.answer(answer)?;
    render(&scored.view);
    let mut pending = PendingAdvance::schedule(scored.token, delay);
    loop {
        tokio::select! {
            fired = pending.fired() => {
                let step = match fired {
                    Some(token) => trainer.advance(token)?,
                    None => None,
                };
                return Ok(Flow::Moved(step));
            }
            line = input.next_line() => {
                let Some(line) = line? else {
                    pending.cancel();
                    return Ok(Flow::Quit);
                };
                match line.trim() {
                    "q" => {
                        pending.cancel();
                        return Ok(Flow::Quit);
                    }
                    "p" => {
                        pending.cancel();
                        return Ok(Flow::Moved(Some(Step::Card(trainer.previous()?))));
                    }
                    "s" => {
                        pending.cancel();
                        return Ok(Flow::Moved(Some(trainer.next()?)));
                    }
                    _ => {}
                }
            }
        }
    }
}

fn render(view: &View) {
    println!();
    match &view.score {
        Some(score) => println!(
            "[{}] {}/{} • {} • {}/{} correct",
            view.mode, view.position, view.length, view.set_name, score.correct, score.answered
        ),
        None => println!(
            "[{}] {}/{} • {}",
            view.mode, view.position, view.length, view.set_name
        ),
    }
    println!("Q: {}", view.prompt);
    if let Some(answer) = &view.answer {
        println!("A: {answer}");
    }
}

fn render_summary(summary: &Summary) {
    println!();
    println!("Test finished!");
    println!(
        "Correct: {} / {} ({:.1}%)",
        summary.correct, summary.total, summary.percent
    );
    println!("Tests taken: {}", summary.total_tests);
    println!("Distinct mistakes: {}", summary.mistake_count);
    match summary.last_test_date {
        Some(date) => println!("Last test: {date}"),
        None => println!("Last test: never"),
    }
}
