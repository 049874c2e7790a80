use anyhow::{Context, Result};
use gobi_game::{Command, Difficulty, GameEngine, GameSession, GameStorage, TOTAL_DISTANCE};
use std::io::{BufRead, Write};

use crate::console::{Console, ConsoleError};
use crate::render;

const TITLE: &str = "Escape Across the Great Gobi";
pub const FAREWELL: &str = "Game interrupted. Goodbye.";

/// Play one game from the load prompt to the delete prompt.
///
/// A closed input stream at any prompt ends the run with a farewell
/// instead of an error.
pub fn run<R, W, S>(console: &mut Console<R, W>, engine: &GameEngine<S>) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: GameStorage,
{
    match play(console, engine) {
        Err(err) if matches!(err.downcast_ref::<ConsoleError>(), Some(ConsoleError::Closed)) => {
            log::debug!("input closed, leaving");
            console.say("")?;
            console.say(FAREWELL)?;
            Ok(())
        }
        other => other,
    }
}

fn play<R, W, S>(console: &mut Console<R, W>, engine: &GameEngine<S>) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: GameStorage,
{
    render::header(console.out(), TITLE)?;
    console.say("You are on the run across the Gobi desert, with a camel and a few supplies.")?;
    console.say("The officers are on your trail. Reach the border before they catch you.")?;

    let session = match offer_load(console, engine)? {
        Some(session) => session,
        None => new_game(console, engine)?,
    };
    let session = game_loop(console, engine, session)?;
    finalize(console, engine, &session)
}

fn offer_load<R, W, S>(
    console: &mut Console<R, W>,
    engine: &GameEngine<S>,
) -> Result<Option<GameSession>>
where
    R: BufRead,
    W: Write,
    S: GameStorage,
{
    if !engine.has_save() {
        return Ok(None);
    }
    if !console.confirm("Saved game exists. Load it?")? {
        return Ok(None);
    }
    match engine.load_session() {
        Ok(Some(session)) => {
            console.say(format!("[Loaded from {}]", engine.storage().describe()))?;
            console.say("Game loaded. Resuming...")?;
            Ok(Some(session))
        }
        Ok(None) => {
            console.say("[No save file found]")?;
            Ok(None)
        }
        Err(err) => {
            log::warn!("load failed: {err}");
            console.say(format!("[Load failed] {err}"))?;
            Ok(None)
        }
    }
}

fn new_game<R, W, S>(console: &mut Console<R, W>, engine: &GameEngine<S>) -> Result<GameSession>
where
    R: BufRead,
    W: Write,
    S: GameStorage,
{
    console.say("")?;
    console.say("Choose difficulty:")?;
    for (index, difficulty) in Difficulty::ALL.into_iter().enumerate() {
        console.say(format!("{}) {difficulty} - {}", index + 1, difficulty.blurb()))?;
    }
    let difficulty = loop {
        let choice = console.ask()?;
        if let Some(difficulty) = Difficulty::from_menu_choice(&choice) {
            break difficulty;
        }
        console.say("Choose 1, 2 or 3.")?;
    };

    console.say(format!(
        "Difficulty set to {difficulty}. Your goal: travel {TOTAL_DISTANCE} km to the border."
    ))?;
    Ok(engine.new_session(difficulty))
}

fn game_loop<R, W, S>(
    console: &mut Console<R, W>,
    engine: &GameEngine<S>,
    mut session: GameSession,
) -> Result<GameSession>
where
    R: BufRead,
    W: Write,
    S: GameStorage,
{
    while !session.is_over() {
        render::day_panel(console.out(), &session.status())?;
        let input = console.ask()?;
        let command = match input.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                log::debug!("{err}");
                console.say("Invalid choice.")?;
                continue;
            }
        };

        match command {
            Command::Status => render::status(console.out(), &session.status())?,
            Command::Save => match engine.save_session(&session) {
                Ok(()) => console.say(format!("[Saved to {}]", engine.storage().describe()))?,
                Err(err) => {
                    log::warn!("save failed: {err}");
                    console.say(format!("[Save failed] {err}"))?;
                }
            },
            _ => {
                let report = session.apply(command);
                render::turn(console.out(), &report)?;
            }
        }
        log::debug!("dice draws so far: {}", session.dice().draws());
    }
    Ok(session)
}

fn finalize<R, W, S>(
    console: &mut Console<R, W>,
    engine: &GameEngine<S>,
    session: &GameSession,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: GameStorage,
{
    let summary = session
        .summary()
        .context("session finished without an ending")?;
    render::summary(console.out(), &summary)?;

    if engine.has_save() && console.confirm("Would you like to delete the save file?")? {
        match engine.delete_save() {
            Ok(()) => console.say("[Save file deleted]")?,
            Err(err) => {
                log::warn!("delete failed: {err}");
                console.say("[Failed to delete save file]")?;
            }
        }
    }

    console.say("")?;
    console.say("Thanks for playing Escape Across the Great Gobi!")?;
    Ok(())
}
