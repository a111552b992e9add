//! Plain terminal rendering of a fight.
use async_trait::async_trait;
use fight_core::{Fight, Fighter};
use fight_runtime::{FightView, Result};

pub struct TerminalView;

impl TerminalView {
    fn status_line(fighter: &Fighter) -> String {
        let stats = &fighter.stats;
        let mut line = format!(
            "{:<16} ❤️ {:>4}/{:<4} 💨 {:>2}/{:<2} ⚔️ {:>4} 🛡️ {:>4} 🚀 {:>4}",
            fighter.name(),
            stats.fight_points(),
            stats.max_fight_point(),
            stats.breath(),
            stats.max_breath(),
            stats.attack(),
            stats.defense(),
            stats.speed(),
        );
        if let Some(alteration) = fighter.current_alteration() {
            line.push_str(&format!(" {} {}", alteration.alteration().emoji(), alteration));
        }
        line
    }
}

#[async_trait]
impl FightView for TerminalView {
    async fn introduce_fight(&self, first: &Fighter, second: &Fighter) -> Result<()> {
        println!();
        println!("⚔️  {} challenges {}!", first.name(), second.name());
        println!("{} moves first.", first.name());
        Ok(())
    }

    async fn display_fight_status(&self, fight: &Fight) -> Result<()> {
        println!();
        println!("── Turn {} ──", fight.turn());
        for fighter in fight.fighters() {
            println!("{}", Self::status_line(fighter));
        }
        Ok(())
    }

    async fn update_history(
        &self,
        emoji: &str,
        actor_mention: &str,
        narration: &str,
    ) -> Result<()> {
        println!("{} {} {}", emoji, actor_mention, narration);
        Ok(())
    }

    async fn outro_fight(&self, loser: &Fighter, winner: &Fighter, is_draw: bool) -> Result<()> {
        println!();
        if is_draw {
            println!("🤝 {} and {} end in a draw.", loser.name(), winner.name());
        } else {
            println!("💀 {} is defeated.", loser.name());
            println!(
                "🏆 {} wins with {} fight points left!",
                winner.name(),
                winner.stats.fight_points()
            );
        }
        Ok(())
    }
}
