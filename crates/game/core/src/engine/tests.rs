use super::*;
use crate::action::{ActionResult, FailReason, FightActionId};
use crate::alteration::AlterationId;
use crate::env::{PcgRng, SequenceRng};
use crate::fighter::test_support::{monster, player};
use crate::fighter::{FightPotion, PotionNature};
use crate::stats::{BaseStats, StatSet};

fn started(first: Fighter, second: Fighter) -> Fight {
    let mut fight = Fight::new(first, second, true, FightConfig::default());
    fight
        .start(&mut SequenceRng::never_lucky())
        .expect("fresh fight starts");
    fight
}

fn playing_id(fight: &Fight) -> FighterId {
    fight.playing_fighter().expect("fight is running").id()
}

#[test]
fn faster_fighter_attacks_first() {
    let slow = player(1, 10, 60, 40, 50, 300);
    let fast = player(2, 10, 60, 40, 80, 300);
    let mut fight = Fight::new(slow, fast, true, FightConfig::default());

    let start = fight.start(&mut SequenceRng::always_lucky()).expect("start");

    assert_eq!(start.first, FighterId(2));
    assert_eq!(start.coin_flip, None);
    assert_eq!(fight.fighters()[0].status(), FighterStatus::Attacker);
    assert_eq!(fight.fighters()[1].status(), FighterStatus::Defender);
    assert_eq!(playing_id(&fight), FighterId(2));
    assert_eq!(fight.defending_fighter().map(Fighter::id), Some(FighterId(1)));
}

#[test]
fn speed_tie_is_settled_by_coin_flip() {
    let mut heads = Fight::new(
        player(1, 10, 60, 40, 50, 300),
        player(2, 10, 60, 40, 50, 300),
        true,
        FightConfig::default(),
    );
    let start = heads.start(&mut SequenceRng::always_lucky()).expect("start");
    assert_eq!(start.coin_flip, Some(true));
    assert_eq!(start.first, FighterId(2));

    let mut tails = Fight::new(
        player(1, 10, 60, 40, 50, 300),
        player(2, 10, 60, 40, 50, 300),
        true,
        FightConfig::default(),
    );
    let start = tails.start(&mut SequenceRng::never_lucky()).expect("start");
    assert_eq!(start.coin_flip, Some(false));
    assert_eq!(start.first, FighterId(1));
}

#[test]
fn lifecycle_errors_are_typed() {
    let mut fight = Fight::new(
        player(1, 10, 60, 40, 50, 300),
        monster(2, 60, 40, 40, 300),
        true,
        FightConfig::default(),
    );
    let mut rng = PcgRng::new(1);

    assert!(fight.playing_fighter().is_none());
    assert_eq!(
        fight.execute_action(FighterId(1), FightActionId::SimpleAttack, &mut rng),
        Err(FightError::NotRunning)
    );

    fight.start(&mut rng).expect("start");
    assert_eq!(fight.start(&mut rng), Err(FightError::AlreadyStarted));

    let defender = fight.defending_fighter().map(Fighter::id).expect("running");
    assert_eq!(
        fight.execute_action(defender, FightActionId::SimpleAttack, &mut rng),
        Err(FightError::ActorMismatch {
            expected: FighterId(1),
            provided: defender,
        })
    );
    assert_eq!(
        fight.execute_action(FighterId(99), FightActionId::SimpleAttack, &mut rng),
        Err(FightError::UnknownFighter(FighterId(99)))
    );
}

#[test]
fn turns_alternate_and_increase_by_one() {
    let mut fight = started(player(1, 10, 60, 40, 60, 5_000), player(2, 10, 60, 40, 50, 5_000));
    let mut rng = PcgRng::new(8);

    let mut expected_actor = [FighterId(1), FighterId(2)].into_iter().cycle();
    for expected_turn in 1..10 {
        assert_eq!(fight.turn(), expected_turn);
        let actor = playing_id(&fight);
        assert_eq!(Some(actor), expected_actor.next());

        let record = fight
            .execute_action(actor, FightActionId::SimpleAttack, &mut rng)
            .expect("valid turn");
        assert_eq!(record.turn, expected_turn);
        assert_eq!(fight.turn(), expected_turn + 1);
    }
}

#[test]
fn counter_attack_on_first_turn_is_a_no_op() {
    let mut fight = started(player(1, 10, 60, 40, 60, 300), monster(2, 60, 40, 40, 300));
    let before: Vec<u32> = fight
        .fighters()
        .iter()
        .map(|fighter| fighter.stats.fight_points())
        .collect();

    let record = fight
        .execute_action(FighterId(1), FightActionId::CounterAttack, &mut PcgRng::new(4))
        .expect("valid turn");

    assert_eq!(
        record.outcome.result,
        ActionResult::Failed(FailReason::TooEarly)
    );
    let after: Vec<u32> = fight
        .fighters()
        .iter()
        .map(|fighter| fighter.stats.fight_points())
        .collect();
    assert_eq!(before, after);
    assert!(!record.outcome.to_string().is_empty());
}

#[test]
fn missing_breath_resolves_to_narration() {
    let tired = Fighter::player(
        FighterId(1),
        "tired",
        10,
        StatSet::new(BaseStats::new(60, 40, 90, 300).with_breath(0, 10, 1)),
        vec![FightActionId::HeavyAttack],
    );
    let mut fight = started(tired, monster(2, 60, 40, 40, 300));

    let record = fight
        .execute_action(FighterId(1), FightActionId::HeavyAttack, &mut PcgRng::new(4))
        .expect("valid turn");

    assert_eq!(
        record.outcome.result,
        ActionResult::Failed(FailReason::OutOfBreath)
    );
    assert_eq!(fight.fighters()[1].stats.fight_points(), 300);
    // Regenerated after the turn.
    assert_eq!(fight.fighters()[0].stats.breath(), 1);
}

#[test]
fn unavailable_action_is_rejected() {
    let limited = Fighter::player(
        FighterId(1),
        "limited",
        10,
        StatSet::new(BaseStats::new(60, 40, 90, 300)),
        vec![FightActionId::SimpleAttack],
    );
    let mut fight = started(limited, monster(2, 60, 40, 40, 300));
    let mut rng = PcgRng::new(4);

    assert_eq!(
        fight.execute_action(FighterId(1), FightActionId::Blizzard, &mut rng),
        Err(FightError::ActionUnavailable {
            fighter: FighterId(1),
            action: FightActionId::Blizzard,
        })
    );
    // The idle action is always allowed.
    assert!(fight.execute_action(FighterId(1), FightActionId::None, &mut rng).is_ok());
}

#[test]
fn killing_blow_names_the_survivor() {
    let strong = player(1, 100, 500, 40, 90, 300);
    let weak = Fighter::monster(
        FighterId(2),
        "weak",
        1,
        StatSet::with_fight_points(BaseStats::new(10, 1, 10, 300), 1),
        Vec::new(),
    );
    let mut fight = started(strong, weak);

    let record = fight
        .execute_action(FighterId(1), FightActionId::SimpleAttack, &mut PcgRng::new(4))
        .expect("valid turn");

    let result = record.ended.expect("fight is over");
    assert_eq!(result.winner, Winner::Fighter(0));
    assert_eq!(result.winner.index(), 0);
    assert_eq!(fight.state(), FightState::Finished);
    assert!(fight.playing_fighter().is_none());
    assert!(fight.defending_fighter().is_none());
}

#[test]
fn double_knockout_is_a_draw() {
    let dead = |id| {
        Fighter::monster(
            FighterId(id),
            "dead",
            1,
            StatSet::with_fight_points(BaseStats::new(10, 10, 10, 300), 0),
            Vec::new(),
        )
    };
    let mut fight = started(dead(1), dead(2));

    assert!(fight.has_ended());
    let start = fight.begin_turn(&mut PcgRng::new(1)).expect("running");
    let PendingAction::FightOver(result) = start.pending else {
        panic!("expected the fight to be over, got {:?}", start.pending);
    };
    assert_eq!(result.winner, Winner::Draw);
    assert_eq!(result.winner.index(), Winner::DRAW_SENTINEL);
    // end() is idempotent.
    assert_eq!(fight.end(), result);
}

#[test]
fn turn_cap_ends_the_fight() {
    let config = FightConfig::default().with_max_turns(4);
    let mut fight = Fight::new(
        player(1, 10, 60, 40, 60, 50_000),
        player(2, 10, 60, 40, 50, 50_000),
        true,
        config,
    );
    let mut rng = PcgRng::new(2);
    fight.start(&mut rng).expect("start");

    let mut records = Vec::new();
    while fight.state() == FightState::Running {
        let actor = playing_id(&fight);
        records.push(
            fight
                .execute_action(actor, FightActionId::QuickAttack, &mut rng)
                .expect("valid turn"),
        );
    }

    assert_eq!(records.len(), 3);
    let result = records.last().and_then(|record| record.ended).expect("ended");
    assert_eq!(result.turns, 4);
    // Fighter 1 landed two hits, fighter 2 only one: both stand, the healthier wins.
    assert_eq!(result.winner, Winner::Fighter(0));
}

fn idle_until_the_cap(first: Fighter, second: Fighter) -> FightResult {
    let mut fight = Fight::new(first, second, true, FightConfig::default().with_max_turns(4));
    let mut rng = PcgRng::new(5);
    fight.start(&mut rng).expect("start");
    while fight.state() == FightState::Running {
        let actor = playing_id(&fight);
        fight
            .execute_action(actor, FightActionId::None, &mut rng)
            .expect("valid turn");
    }
    fight.result().expect("finished")
}

#[test]
fn turn_cap_never_ends_in_a_draw() {
    // Same share of fight points left: the larger pool wins.
    let result = idle_until_the_cap(
        player(1, 10, 60, 40, 60, 300),
        player(2, 10, 60, 40, 50, 500),
    );
    assert_eq!(result.winner, Winner::Fighter(1));

    // Identical fighters: the one that played first wins.
    let result = idle_until_the_cap(
        player(1, 10, 60, 40, 60, 300),
        player(2, 10, 60, 40, 50, 300),
    );
    assert_eq!(result.winner, Winner::Fighter(0));
    assert!(!result.winner.is_draw());
}

#[test]
fn monsters_plan_and_fights_terminate() {
    for seed in 0..50 {
        let config = FightConfig::default();
        let max_turns = config.max_turns;
        let mut fight = Fight::new(
            monster(1, 70, 50, 45, 600),
            monster(2, 65, 55, 45, 600),
            false,
            config,
        );
        let mut rng = PcgRng::new(seed);
        fight.start(&mut rng).expect("start");

        let mut iterations = 0;
        loop {
            iterations += 1;
            assert!(iterations <= max_turns, "seed {seed} did not terminate");

            let start = fight.begin_turn(&mut rng).expect("running");
            let record = match start.pending {
                PendingAction::FightOver(_) => break,
                PendingAction::Queued(action) => {
                    fight.execute_action(start.actor, action, &mut rng)
                }
                PendingAction::Forfeit(reason) => fight.forfeit_turn(start.actor, reason),
                PendingAction::AwaitInput => panic!("monsters never wait for input"),
            }
            .expect("valid turn");

            for fighter in fight.fighters() {
                assert!(fighter.stats.fight_points() <= fighter.stats.max_fight_point());
            }
            if record.ended.is_some() {
                break;
            }
        }
        assert_eq!(fight.state(), FightState::Finished);
    }
}

#[test]
fn potions_are_consumed_in_ranked_fights() {
    let potion = FightPotion {
        nature: PotionNature::Speed,
        power: 50,
    };
    let slow = player(1, 10, 60, 40, 40, 300).with_potion(potion);
    let fast = player(2, 10, 60, 40, 60, 300);

    let mut ranked = Fight::new(slow.clone(), fast.clone(), false, FightConfig::default());
    let start = ranked.start(&mut PcgRng::new(1)).expect("start");
    assert_eq!(start.consumed_potions.len(), 1);
    assert_eq!(start.consumed_potions[0].fighter, FighterId(1));
    // The potion makes the slow fighter faster.
    assert_eq!(start.first, FighterId(1));

    let mut friendly = Fight::new(slow, fast, true, FightConfig::default());
    let start = friendly.start(&mut PcgRng::new(1)).expect("start");
    assert!(start.consumed_potions.is_empty());
    assert_eq!(start.first, FighterId(2));
}

#[test]
fn paralysis_can_cost_the_turn() {
    let mut fight = started(player(1, 10, 60, 40, 90, 300), monster(2, 60, 40, 40, 300));
    let config = fight.config().clone();
    fight
        .fighter_mut(FighterId(1))
        .expect("fighter exists")
        .new_alteration(AlterationId::Paralyzed, &config.alterations);

    let start = fight.begin_turn(&mut SequenceRng::always_lucky()).expect("running");
    assert_eq!(start.pending, PendingAction::Forfeit(FailReason::Paralyzed));
    assert!(start.alteration.is_some_and(|outcome| outcome.prevents_action()));

    let record = fight
        .forfeit_turn(start.actor, FailReason::Paralyzed)
        .expect("valid turn");
    assert_eq!(record.outcome.result, ActionResult::Failed(FailReason::Paralyzed));
    assert_eq!(fight.turn(), 2);
    assert_eq!(
        fight.fighters()[0].last_fight_action_used(),
        Some(FightActionId::None)
    );
}

#[test]
fn queued_action_runs_without_input() {
    let mut fight = started(player(1, 10, 60, 40, 90, 300), monster(2, 60, 40, 40, 300));
    fight
        .fighter_mut(FighterId(1))
        .expect("fighter exists")
        .queue_action(FightActionId::DefenseBuff);

    let start = fight.begin_turn(&mut PcgRng::new(3)).expect("running");
    assert_eq!(start.pending, PendingAction::Queued(FightActionId::DefenseBuff));
    assert_eq!(fight.fighters()[0].next_fight_action(), None);

    // Asking again within the same turn does not lose the queued action.
    let again = fight.begin_turn(&mut PcgRng::new(3)).expect("running");
    assert_eq!(again, start);

    fight
        .execute_action(start.actor, FightActionId::DefenseBuff, &mut PcgRng::new(3))
        .expect("valid turn");
    let next = fight.begin_turn(&mut PcgRng::new(3)).expect("running");
    assert_eq!(next.turn, 2);
    assert_eq!(next.actor, FighterId(2));
}

#[test]
fn alteration_triggers_once_per_turn() {
    let mut fight = started(player(1, 10, 60, 40, 90, 5_000), monster(2, 60, 40, 40, 300));
    let config = fight.config().clone();
    fight
        .fighter_mut(FighterId(1))
        .expect("fighter exists")
        .new_alteration(AlterationId::Cursed, &config.alterations);

    let mut rng = SequenceRng::never_lucky();
    let first = fight.begin_turn(&mut rng).expect("running");
    for _ in 0..2 {
        assert_eq!(fight.begin_turn(&mut rng).expect("running"), first);
    }
    assert_eq!(fight.turn(), 1);
    assert_eq!(fight.fighters()[0].alteration_turn(), 1);
    assert_eq!(fight.fighters()[0].stats.fight_points(), 5_000);
}
