use std::fs;
use std::io::{self, Read};
use std::path::Path;

use colored::Colorize;
use mr_engine::{ChoiceOutcome, EngineConfig, NoArtist, ScriptedNarrator, ServiceError, Session, TurnOutcome};

pub fn run(
    config: &EngineConfig,
    slot: &str,
    action: &str,
    reply: Option<&Path>,
    fail: Option<&str>,
) -> Result<(), String> {
    let mut session = super::resume(config, slot)?;
    let mut narrator = narrator(reply, fail)?;
    let before = session.state().log.len();

    let outcome = session
        .take_turn(action, &mut narrator, &mut NoArtist)
        .map_err(|e| e.to_string())?;
    report(&mut session, before, outcome)
}

pub fn choose(
    config: &EngineConfig,
    slot: &str,
    choice_id: &str,
    reply: Option<&Path>,
    fail: Option<&str>,
) -> Result<(), String> {
    let mut session = super::resume(config, slot)?;
    let choice = session
        .state()
        .choices
        .iter()
        .find(|c| c.id == choice_id)
        .cloned()
        .ok_or_else(|| format!("no choice \"{choice_id}\" is on offer"))?;
    let mut narrator = narrator(reply, fail)?;
    let before = session.state().log.len();

    match session
        .choose(&choice, &mut narrator, &mut NoArtist)
        .map_err(|e| e.to_string())?
    {
        ChoiceOutcome::System(action) => {
            println!("  {} {action}", "System action:".bold());
            Ok(())
        }
        ChoiceOutcome::Turn(outcome) => report(&mut session, before, outcome),
    }
}

fn narrator(reply: Option<&Path>, fail: Option<&str>) -> Result<ScriptedNarrator, String> {
    let narrator = ScriptedNarrator::new();
    if let Some(message) = fail {
        return Ok(narrator.fail(ServiceError::Other(message.to_string())));
    }
    match reply {
        Some(path) => Ok(narrator.reply(read_reply(path)?)),
        None => Ok(narrator),
    }
}

fn read_reply(path: &Path) -> Result<String, String> {
    if path == Path::new("-") {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .map_err(|e| format!("cannot read reply from stdin: {e}"))?;
        return Ok(raw);
    }
    fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
}

fn report(session: &mut Session, before: usize, outcome: TurnOutcome) -> Result<(), String> {
    match outcome {
        TurnOutcome::Ignored => {
            println!("  Nothing happens.");
            return Ok(());
        }
        TurnOutcome::Advanced => {}
        // Failed turns are not committed; keep the error entry and fallback choices.
        TurnOutcome::Failed(_) => session.save().map_err(|e| e.to_string())?,
    }

    let state = session.state();
    super::print_entries(&state.log[before.min(state.log.len())..]);
    super::print_choices(&state.choices);
    Ok(())
}
