//! Terminal Battle Example
//!
//! Picks a random team of three, starts a battle, and plays turns from
//! stdin. Run a skirmish backend on localhost:8000 first.

use anyhow::Result;
use rand::seq::SliceRandom;
use skirmish_client::{HttpBackend, SkirmishApp, TurnAction};
use tokio::io::{AsyncBufReadExt, BufReader};

const BACKEND_URL: &str = "http://localhost:8000";

fn print_battle<B>(app: &SkirmishApp<B>)
where
    B: skirmish_client::Backend,
{
    let Some(session) = app.battle.session() else {
        return;
    };

    if let (Some(user), Some(opponent)) = (session.active_user(), session.active_opponent()) {
        println!(
            "\n{} {}/{} HP  vs  {} {}/{} HP",
            user.name, user.current_hp, user.max_hp, opponent.name, opponent.current_hp,
            opponent.max_hp
        );
    }

    for (i, slot) in session.legal_moves().iter().enumerate() {
        println!("  [{}] {} ({})", i, slot.name, slot.move_type);
    }

    println!("--- log ---");
    for line in session.log().lines() {
        println!("{}", line);
    }
}

fn parse_command(line: &str) -> Option<TurnAction> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;
    let index: usize = parts.next()?.parse().ok()?;

    match command {
        "a" => Some(TurnAction::Attack(index)),
        "s" => Some(TurnAction::Switch(index)),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("Skirmish CLI Battle");
    println!("===================");

    let mut app = SkirmishApp::new(HttpBackend::new(BACKEND_URL)?);

    let names: Vec<String> = app
        .battle
        .load_roster()
        .await?
        .iter()
        .map(|c| c.name.clone())
        .collect();
    println!("{} creatures available", names.len());

    let mut picks = names.clone();
    picks.shuffle(&mut rand::thread_rng());
    for name in picks.iter().take(3) {
        app.battle.toggle(name);
    }
    println!("Team: {}", app.battle.selection().names().join(", "));

    app.battle.start_battle().await?;
    print_battle(&app);

    println!("\nCommands: a <move index>, s <roster index>, q to quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim() == "q" {
            break;
        }
        let Some(action) = parse_command(&line) else {
            println!("Commands: a <move index>, s <roster index>, q to quit");
            continue;
        };

        match app.battle.dispatch(action).await {
            Ok(()) => print_battle(&app),
            Err(e) => println!("Rejected: {}", e),
        }

        if let Some(winner) = app.battle.session().and_then(|s| s.winner()) {
            println!("\n{} wins the battle!", winner);
            break;
        }
    }

    Ok(())
}
