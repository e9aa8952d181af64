//! Line-based chat loop

use anyhow::Result;
use pocketwise_agent::FinanceAgent;
use pocketwise_core::ContextBundle;
use std::io::{BufRead, Write};

const HELP: &str = "Ask about your spending, goals, budgets, investments, or ask for tips.\n\
Commands: /history  show recent exchanges\n          /help     show this message\n          /quit     leave the chat";

pub const GREETING: &str = "Hi! I'm Pocketwise. Ask me anything about your money. Type /help for commands.";

/// Run the chat loop until `/quit` or end of input.
pub async fn run_chat<R: BufRead, W: Write>(
    agent: &FinanceAgent,
    ctx: &ContextBundle,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{GREETING}")?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;
        let msg = line.trim();

        match msg {
            "" => {}
            "/quit" | "/exit" => break,
            "/help" | "?" => writeln!(out, "{HELP}")?,
            "/history" => print_history(agent, out)?,
            _ => {
                let reply = agent.respond(msg, ctx).await;
                writeln!(out, "\n{}\n", reply.text)?;
            }
        }
        prompt(out)?;
    }

    writeln!(out, "Bye!")?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

fn print_history<W: Write>(agent: &FinanceAgent, out: &mut W) -> Result<()> {
    let log = agent.session().snapshot();
    if log.is_empty() {
        writeln!(out, "(no messages yet)")?;
        return Ok(());
    }
    for ex in log {
        writeln!(out, "[{}] {} ({})", ex.at.format("%H:%M"), ex.user, ex.intent)?;
        let first = ex.assistant.lines().next().unwrap_or_default();
        writeln!(out, "    {first}")?;
    }
    Ok(())
}
