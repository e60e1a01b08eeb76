//! The five-step demonstration flow.
//!
//! Steps 1 to 3 (initial read, add, subtract) abort the flow on failure.
//! Steps 4 and 5 (final read, log) report failures and carry on.

use std::io::{self, Write};
use std::process::ExitCode;

use dummy_core::NumberOperation;
use tracing::warn;

use crate::config::Config;
use crate::render::render_log;
use crate::session::Session;

pub const ADD_VALUE: i64 = 25;
pub const SUBTRACT_VALUE: i64 = 10;

const SEPARATOR: &str = "────────────────────────────────────────";

/// How the flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Aborted,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Completed => ExitCode::SUCCESS,
            Outcome::Aborted => ExitCode::FAILURE,
        }
    }
}

/// Create a session from `config`, run every step, and close it. Only
/// failures writing to `out` are returned as errors.
pub fn run<W: Write>(config: &Config, out: &mut W) -> io::Result<Outcome> {
    writeln!(out, "🚀 Dummy Server Client Demo")?;
    writeln!(out, "============================")?;
    writeln!(out)?;

    let session = match Session::create(config) {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "session not created");
            writeln!(out, "❌ {e}")?;
            return Ok(Outcome::Aborted);
        }
    };

    let outcome = run_steps(&session, out);
    session.close();
    outcome
}

fn run_steps<W: Write>(session: &Session, out: &mut W) -> io::Result<Outcome> {
    writeln!(out, "📡 Connecting to: {}", session.base_url())?;
    writeln!(out, "{SEPARATOR}")?;

    writeln!(out, "1️⃣  Getting initial number...")?;
    let initial = match session.get_number() {
        Ok(response) => response.number,
        Err(e) => {
            warn!(step = 1, error = %e, "initial read failed");
            writeln!(out, "   ❌ Failed to get current number. Is the server running?")?;
            writeln!(out, "   {e}")?;
            writeln!(out, "   💡 Try: cargo run -p mock-server")?;
            writeln!(out)?;
            return Ok(Outcome::Aborted);
        }
    };
    writeln!(out, "   ✅ Initial number: {initial}")?;
    writeln!(out, "{SEPARATOR}")?;

    writeln!(out, "2️⃣  Adding {ADD_VALUE} to the number...")?;
    match session.modify_number(NumberOperation::add(ADD_VALUE)) {
        Ok(response) => writeln!(out, "   ✅ After adding {ADD_VALUE}: {initial} -> {}", response.number)?,
        Err(e) => {
            warn!(step = 2, error = %e, "add failed");
            writeln!(out, "   ❌ Failed to add {ADD_VALUE} to the number")?;
            writeln!(out, "   {e}")?;
            return Ok(Outcome::Aborted);
        }
    }
    writeln!(out, "{SEPARATOR}")?;

    writeln!(out, "3️⃣  Subtracting {SUBTRACT_VALUE} from the number...")?;
    match session.modify_number(NumberOperation::subtract(SUBTRACT_VALUE)) {
        Ok(response) => writeln!(out, "   ✅ After subtracting {SUBTRACT_VALUE}: {}", response.number)?,
        Err(e) => {
            warn!(step = 3, error = %e, "subtract failed");
            writeln!(out, "   ❌ Failed to subtract {SUBTRACT_VALUE} from the number")?;
            writeln!(out, "   {e}")?;
            return Ok(Outcome::Aborted);
        }
    }
    writeln!(out, "{SEPARATOR}")?;

    writeln!(out, "4️⃣  Getting final number...")?;
    match session.get_number() {
        Ok(response) => {
            let expected = initial.saturating_add(ADD_VALUE).saturating_sub(SUBTRACT_VALUE);
            writeln!(out, "   ✅ Final number: {}", response.number)?;
            writeln!(out, "   🧮 Expected: {initial} + {ADD_VALUE} - {SUBTRACT_VALUE} = {expected}")?;
            if response.number == expected {
                writeln!(out, "   ✅ Math checks out!")?;
            } else {
                writeln!(out, "   ⚠️  Unexpected result")?;
            }
        }
        Err(e) => {
            warn!(step = 4, error = %e, "final read failed");
            writeln!(out, "   ❌ Failed to get final number")?;
            writeln!(out, "   {e}")?;
        }
    }
    writeln!(out, "{SEPARATOR}")?;

    writeln!(out, "5️⃣  Getting operation log...")?;
    match session.get_log() {
        Ok(log) => {
            writeln!(out, "   ✅ Got log response successfully")?;
            render_log(out, log.as_deref())?;
        }
        Err(e) => {
            warn!(step = 5, error = %e, "log fetch failed");
            writeln!(out, "   ❌ Failed to get operation log")?;
            writeln!(out, "   {e}")?;
        }
    }
    writeln!(out, "{SEPARATOR}")?;

    writeln!(out, "✨ Demo completed!")?;
    Ok(Outcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_base_url_aborts_before_any_request() {
        let config = Config::resolve(Some("not a url".to_string()));
        let mut out = Vec::new();
        let outcome = run(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(outcome, Outcome::Aborted);
        assert!(text.contains("failed to create API client"));
        assert!(!text.contains("1️⃣"));
    }
}
