//! datadeck CLI - walks through each part of the card model and prints a trace.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use datadeck::cards::{
    AnyCard, ArtifactCard, Card, Combatable, CreatureCard, EliteCard, Magical, Rarity,
    SpellCard, TournamentCard,
};
use datadeck::core::GameState;
use datadeck::deck::Deck;
use datadeck::engine::GameEngine;
use datadeck::factory::{CardFactory, FantasyCardFactory};
use datadeck::strategy::{AggressiveStrategy, GameStrategy};
use datadeck::tournament::TournamentPlatform;
use datadeck::GameError;

/// DataDeck - card game model walkthrough
#[derive(Parser, Debug)]
#[command(name = "datadeck")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Print records as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Seed for deck shuffles (default: random)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Turns to simulate in the engine walkthrough
    #[arg(short, long, global = true, default_value = "1")]
    turns: u32,
}

/// Available walkthroughs
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Create, inspect and play a creature
    Foundation,
    /// Build a mixed deck, then draw and play every card
    Deck,
    /// Exercise an elite card's combat and magic
    Abilities,
    /// Configure the engine with a factory and strategy and simulate turns
    Engine,
    /// Register cards, play a match and show standings
    Tournament,
    /// Run every walkthrough in order
    All,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult = Result<(), CliError>;

/// Prints either a text trace or JSON records.
struct Output {
    json: bool,
}

impl Output {
    fn heading(&self, title: &str) {
        if !self.json {
            println!("\n=== DataDeck {title} ===\n");
        }
    }

    fn line(&self, text: impl AsRef<str>) {
        if !self.json {
            println!("{}", text.as_ref());
        }
    }

    /// Print a labelled record: `label: {debug}` as text, one JSON object otherwise.
    fn record<T: Serialize + std::fmt::Debug>(&self, label: &str, value: &T) -> CliResult {
        if self.json {
            let wrapped = serde_json::json!({ "label": label, "value": value });
            println!("{}", serde_json::to_string(&wrapped)?);
        } else {
            println!("{label}: {value:?}");
        }
        Ok(())
    }
}

fn foundation(out: &Output) -> CliResult {
    out.heading("Card Foundation");

    let dragon = CreatureCard::new("Fire Dragon", 5, Rarity::Legendary, 7, 5);
    let mut goblin: AnyCard = CreatureCard::new("Goblin Warrior", 2, Rarity::Common, 3, 4).into();

    out.record("CreatureCard info", &dragon.card_info())?;

    let mut mana = 6;
    out.line(format!("Playing {} with {mana} mana available:", dragon.name()));
    out.line(format!("Playable: {}", dragon.is_playable(mana)));
    out.record("Play result", &dragon.play(&GameState::with_mana(mana)))?;

    out.record("Attack result", &dragon.attack_target(&mut goblin))?;

    mana -= 3;
    out.line(format!("Testing insufficient mana ({mana} available):"));
    out.line(format!("Playable: {}", dragon.is_playable(mana)));
    out.record("Play result", &dragon.play(&GameState::with_mana(mana)))?;
    Ok(())
}

fn deck(out: &Output, seed: Option<u64>) -> CliResult {
    out.heading("Deck Builder");

    let mut deck = seed.map_or_else(Deck::new, Deck::with_seed);
    out.line(format!("Building deck with different card types (seed {})...", deck.seed()));

    deck.add_card(SpellCard::new("Lightning Bolt", 3, Rarity::Rare, "damage"));
    deck.add_card(ArtifactCard::new("Mana Crystal", 2, Rarity::Rare, 1, "mana"));
    deck.add_card(CreatureCard::new("Fire Dragon", 7, Rarity::Legendary, 12, 50));
    out.record("Deck stats", &deck.get_deck_stats())?;

    deck.shuffle();
    let table = GameState::with_mana(999);
    while let Some(card) = deck.draw_card() {
        out.line(format!("\nDrew: {} ({})", card.name(), card.kind()));
        out.record("Play result", &card.play(&table))?;
    }
    out.record("Deck stats", &deck.get_deck_stats())?;
    Ok(())
}

fn abilities(out: &Output) -> CliResult {
    out.heading("Ability System");

    let mut elite = EliteCard::new("Arcane Warrior", 5, Rarity::Rare).with_stats(5, 3, 4);
    let enemy = CreatureCard::new("Enemy", 1, Rarity::Common, 1, 1);

    let interfaces: Vec<&str> = [
        Some("Card"),
        elite.as_combatable().map(|_| "Combatable"),
        elite.as_magical().map(|_| "Magical"),
        elite.as_rankable().map(|_| "Rankable"),
    ]
    .into_iter()
    .flatten()
    .collect();
    out.line(format!("Playing {} ({}):", elite.name(), interfaces.join(", ")));
    out.record("Play result", &elite.play(&GameState::with_mana(5)))?;

    out.line("\nCombat phase:");
    out.record("Attack result", &elite.attack(&enemy))?;
    out.record("Defense result", &elite.defend(5))?;

    out.line("\nMagic phase:");
    let targets = vec!["Enemy1".to_string(), "Enemy2".to_string()];
    out.record("Spell cast", &elite.cast_spell("Fireball", &targets))?;
    out.record("Mana channel", &elite.channel_mana(3))?;
    out.record("Magic stats", &elite.magic_stats())?;
    Ok(())
}

fn engine(out: &Output, turns: u32) -> CliResult {
    out.heading("Game Engine");

    let factory = FantasyCardFactory::new();
    let strategy = AggressiveStrategy::new();

    out.line("Configuring Fantasy Card Game...");
    out.line(format!("Factory: {}", factory.factory_name()));
    out.line(format!("Strategy: {}", strategy.strategy_name()));
    out.record("Available types", &factory.supported_types())?;

    let mut engine = GameEngine::new();
    engine.configure_engine(factory, strategy);

    for turn in 1..=turns {
        let result = engine.simulate_turn()?;
        out.record(&format!("Turn {turn}"), &result)?;
    }

    out.record("Game report", &engine.get_engine_status())?;
    Ok(())
}

fn tournament(out: &Output) -> CliResult {
    out.heading("Tournament Platform");

    let mut platform = TournamentPlatform::new();
    out.line("Registering Tournament Cards...\n");

    let dragon_id = platform.register_card(
        TournamentCard::new("Fire Dragon", 5, Rarity::Legendary, 80, 60).with_rating(1200),
    );
    let wizard_id = platform.register_card(
        TournamentCard::new("Ice Wizard", 4, Rarity::Epic, 70, 40).with_rating(1150),
    );

    for (id, card) in platform.iter() {
        out.line(format!("{} (ID: {id}):", card.name()));
        out.line(format!("- Rating: {}", card.rating()));
        out.line(format!("- Record: {}\n", card.record()));
    }

    out.line("Creating tournament match...");
    out.record("Match result", &platform.create_match(&dragon_id, &wizard_id)?)?;

    if out.json {
        out.record("Leaderboard", &platform.get_leaderboard())?;
    } else {
        out.line("\nTournament Leaderboard:");
        for entry in platform.get_leaderboard() {
            out.line(format!(
                "{}. {} - Rating: {} ({})",
                entry.rank, entry.name, entry.rating, entry.record
            ));
        }
    }

    out.record("Platform report", &platform.generate_tournament_report())?;
    Ok(())
}

fn run(args: &Args) -> CliResult {
    let out = Output { json: args.json };

    match args.command {
        Commands::Foundation => foundation(&out),
        Commands::Deck => deck(&out, args.seed),
        Commands::Abilities => abilities(&out),
        Commands::Engine => engine(&out, args.turns),
        Commands::Tournament => tournament(&out),
        Commands::All => {
            foundation(&out)?;
            deck(&out, args.seed)?;
            abilities(&out)?;
            engine(&out, args.turns)?;
            tournament(&out)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
