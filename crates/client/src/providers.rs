//! Action providers for the player's turns.
use async_trait::async_trait;
use fight_core::{Fight, FightActionId, FightError, Fighter};
use fight_runtime::{ActionProvider, Result, RuntimeError};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Prompts on the terminal and reads the choice from stdin.
///
/// Accepts either the menu number or the action id (`heavyAttack`).
pub struct StdinProvider {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl StdinProvider {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    fn print_menu(fighter: &Fighter) {
        println!("Choose an action for {}:", fighter.name());
        for (index, action) in fighter.available_actions().iter().enumerate() {
            let behavior = action.action();
            let marker = if fighter.can_afford(*action) { "" } else { " (out of breath)" };
            println!(
                "  {}. {} {} [breath {}]{}",
                index + 1,
                behavior.emoji(),
                action,
                behavior.breath_cost(),
                marker
            );
        }
    }

    fn parse_choice(
        fighter: &Fighter,
        input: &str,
    ) -> std::result::Result<FightActionId, FightError> {
        let input = input.trim();
        match input.parse::<usize>() {
            Ok(index) => index
                .checked_sub(1)
                .and_then(|index| fighter.available_actions().get(index).copied())
                .ok_or_else(|| FightError::UnknownAction(input.to_string())),
            Err(_) => FightActionId::from_id(input),
        }
    }
}

impl Default for StdinProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionProvider for StdinProvider {
    async fn select_fight_action(
        &self,
        fighter: &Fighter,
        _fight: &Fight,
    ) -> Result<FightActionId> {
        Self::print_menu(fighter);

        let mut lines = self.lines.lock().await;
        let line = lines
            .next_line()
            .await
            .map_err(|e| RuntimeError::Provider(e.to_string()))?
            .ok_or_else(|| RuntimeError::Provider("stdin closed".to_string()))?;

        Ok(Self::parse_choice(fighter, &line)?)
    }
}

/// Plays the player's turns without asking.
///
/// Heals when low, counters a heavy hit, otherwise picks the strongest
/// affordable attack.
pub struct AutoProvider;

impl AutoProvider {
    const PREFERENCE: [FightActionId; 5] = [
        FightActionId::HeavyAttack,
        FightActionId::FireAttack,
        FightActionId::FreezingTouch,
        FightActionId::SimpleAttack,
        FightActionId::QuickAttack,
    ];
}

#[async_trait]
impl ActionProvider for AutoProvider {
    async fn select_fight_action(&self, fighter: &Fighter, fight: &Fight) -> Result<FightActionId> {
        let usable = |action: FightActionId| fighter.can_use(action) && fighter.can_afford(action);

        if fighter.stats.remaining_ratio() < 0.4 && usable(FightActionId::EnergeticAttack) {
            return Ok(FightActionId::EnergeticAttack);
        }

        let opponent_used_heavy = fight
            .fighters()
            .iter()
            .find(|other| other.id() != fighter.id())
            .and_then(Fighter::last_fight_action_used)
            == Some(FightActionId::HeavyAttack);
        if opponent_used_heavy && usable(FightActionId::CounterAttack) {
            return Ok(FightActionId::CounterAttack);
        }

        Ok(Self::PREFERENCE
            .into_iter()
            .find(|&action| usable(action))
            .unwrap_or(fight.config().default_action))
    }
}

#[cfg(test)]
mod tests {
    use fight_core::FightConfig;

    use super::*;
    use crate::roster;

    #[test]
    fn choices_accept_menu_numbers_and_ids() {
        let player = roster::player("tester", 10, true);

        assert_eq!(
            StdinProvider::parse_choice(&player, "1"),
            Ok(FightActionId::SimpleAttack)
        );
        assert_eq!(
            StdinProvider::parse_choice(&player, " heavyAttack \n"),
            Ok(FightActionId::HeavyAttack)
        );
        assert_eq!(
            StdinProvider::parse_choice(&player, "0"),
            Err(FightError::UnknownAction("0".to_string()))
        );
        assert!(StdinProvider::parse_choice(&player, "99").is_err());
        assert_eq!(
            StdinProvider::parse_choice(&player, "dance"),
            Err(FightError::UnknownAction("dance".to_string()))
        );
    }

    #[tokio::test]
    async fn autoplay_opens_with_the_strongest_attack() {
        let fight = Fight::new(
            roster::player("tester", 10, true),
            roster::frost_troll(10),
            true,
            FightConfig::default(),
        );
        let player = &fight.fighters()[0];

        let action = AutoProvider.select_fight_action(player, &fight).await.unwrap();

        assert_eq!(action, FightActionId::HeavyAttack);
    }
}
