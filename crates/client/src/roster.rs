//! Fighters available to the duel client.
use fight_core::{
    BaseStats, FightActionId, FightPotion, Fighter, FighterId, MonsterAttack, PotionNature,
    StatSet,
};

const PLAYER_ID: FighterId = FighterId(1);
const MONSTER_ID: FighterId = FighterId(1_000);

/// Builds the player. Ranked duels equip an attack potion.
pub fn player(name: &str, level: u32, friendly: bool) -> Fighter {
    let stats = BaseStats::new(40 + 3 * level, 30 + 2 * level, 25 + level, 200 + 10 * level)
        .with_breath(8, 20, 3);
    let fighter = Fighter::player(
        PLAYER_ID,
        name,
        level,
        StatSet::new(stats),
        vec![
            FightActionId::SimpleAttack,
            FightActionId::QuickAttack,
            FightActionId::HeavyAttack,
            FightActionId::FireAttack,
            FightActionId::EnergeticAttack,
            FightActionId::FreezingTouch,
            FightActionId::DefenseBuff,
            FightActionId::CounterAttack,
        ],
    );

    if friendly {
        fighter
    } else {
        fighter.with_potion(FightPotion {
            nature: PotionNature::Attack,
            power: 5 + level / 2,
        })
    }
}

/// Builds the opposing monster, scaled to the player's level.
pub fn frost_troll(level: u32) -> Fighter {
    let stats = BaseStats::new(35 + 3 * level, 32 + 2 * level, 20 + level, 220 + 10 * level)
        .with_breath(10, 20, 3);
    Fighter::monster(
        MONSTER_ID,
        "Frost Troll",
        level,
        StatSet::new(stats),
        vec![
            MonsterAttack {
                action: FightActionId::SimpleAttack,
                weight: 4,
            },
            MonsterAttack {
                action: FightActionId::PoisonousAttack,
                weight: 2,
            },
            MonsterAttack {
                action: FightActionId::Blizzard,
                weight: 1,
            },
            MonsterAttack {
                action: FightActionId::HeavyAttack,
                weight: 1,
            },
        ],
    )
}
