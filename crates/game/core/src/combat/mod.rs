//! Combat resolution system.
//!
//! Combat only sees the [`Combatant`] capability, never concrete actor
//! types. One call to [`attack`] resolves exactly one exchange:
//!
//! ```text
//! Attacker Strikes ──► Defender Checked ──► Defender Strikes ──► Resolved
//!                              │  (hp > 0)                         ▲
//!                              └──────────── (hp <= 0) ────────────┘
//! ```
//!
//! Removing a dead defender from the world and ending the game on player
//! death are the caller's responsibility.

mod result;

pub use result::AttackOutcome;

use crate::state::ActorState;

/// Action points spent by each side per strike.
pub const STRIKE_COST: f64 = 1.0;

/// Stats combat needs from a participant.
pub trait Combatant {
    fn hitpoints(&self) -> i32;
    fn set_hitpoints(&mut self, hitpoints: i32);
    fn attack_power(&self) -> i32;
    fn action_points(&self) -> f64;
    fn set_action_points(&mut self, action_points: f64);

    fn is_alive(&self) -> bool {
        self.hitpoints() > 0
    }
}

impl Combatant for ActorState {
    fn hitpoints(&self) -> i32 {
        self.hitpoints
    }

    fn set_hitpoints(&mut self, hitpoints: i32) {
        self.hitpoints = hitpoints;
    }

    fn attack_power(&self) -> i32 {
        self.strength
    }

    fn action_points(&self) -> f64 {
        self.action_points
    }

    fn set_action_points(&mut self, action_points: f64) {
        self.action_points = action_points;
    }
}

/// Resolves one attack exchange between two combatants.
///
/// The attacker always strikes. The defender strikes back only if it
/// survived. Hitpoints are allowed to go negative.
pub fn attack<A, D>(attacker: &mut A, defender: &mut D) -> AttackOutcome
where
    A: Combatant + ?Sized,
    D: Combatant + ?Sized,
{
    attacker.set_action_points(attacker.action_points() - STRIKE_COST);
    let damage = attacker.attack_power();
    defender.set_hitpoints(defender.hitpoints() - damage);

    if !defender.is_alive() {
        return AttackOutcome {
            damage,
            counter_damage: None,
            defender_died: true,
            attacker_died: false,
        };
    }

    defender.set_action_points(defender.action_points() - STRIKE_COST);
    let counter = defender.attack_power();
    attacker.set_hitpoints(attacker.hitpoints() - counter);

    AttackOutcome {
        damage,
        counter_damage: Some(counter),
        defender_died: false,
        attacker_died: !attacker.is_alive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Dummy {
        hp: i32,
        power: i32,
        ap: f64,
    }

    impl Dummy {
        fn new(hp: i32, power: i32) -> Self {
            Self { hp, power, ap: 0.0 }
        }
    }

    impl Combatant for Dummy {
        fn hitpoints(&self) -> i32 {
            self.hp
        }
        fn set_hitpoints(&mut self, hitpoints: i32) {
            self.hp = hitpoints;
        }
        fn attack_power(&self) -> i32 {
            self.power
        }
        fn action_points(&self) -> f64 {
            self.ap
        }
        fn set_action_points(&mut self, action_points: f64) {
            self.ap = action_points;
        }
    }

    #[test]
    fn surviving_defender_strikes_back() {
        let mut attacker = Dummy::new(10, 5);
        let mut defender = Dummy::new(12, 3);

        let outcome = attack(&mut attacker, &mut defender);

        assert_eq!(defender.hp, 7);
        assert_eq!(attacker.hp, 7);
        assert_eq!(attacker.ap, -1.0);
        assert_eq!(defender.ap, -1.0);
        assert_eq!(
            outcome,
            AttackOutcome {
                damage: 5,
                counter_damage: Some(3),
                defender_died: false,
                attacker_died: false,
            }
        );
    }

    #[test]
    fn dead_defender_does_not_strike_back() {
        let mut attacker = Dummy::new(10, 5);
        let mut defender = Dummy::new(4, 3);

        let outcome = attack(&mut attacker, &mut defender);

        assert_eq!(defender.hp, -1);
        assert_eq!(attacker.hp, 10);
        assert_eq!(attacker.ap, -1.0);
        assert_eq!(defender.ap, 0.0);
        assert!(outcome.defender_died);
        assert_eq!(outcome.counter_damage, None);
    }

    #[test]
    fn exact_lethal_damage_kills() {
        let mut attacker = Dummy::new(10, 4);
        let mut defender = Dummy::new(4, 3);

        assert!(attack(&mut attacker, &mut defender).defender_died);
        assert_eq!(defender.hp, 0);
    }

    #[test]
    fn counter_strike_can_kill_attacker() {
        let mut attacker = Dummy::new(2, 1);
        let mut defender = Dummy::new(10, 5);

        let outcome = attack(&mut attacker, &mut defender);

        assert!(outcome.attacker_died);
        assert!(!outcome.defender_died);
        assert_eq!(attacker.hp, -3);
    }

    #[test]
    fn zero_power_attacker_changes_nothing_but_points() {
        let mut attacker = Dummy::new(10, 0);
        let mut defender = Dummy::new(10, 0);

        let outcome = attack(&mut attacker, &mut defender);

        assert_eq!(attacker.hp, 10);
        assert_eq!(defender.hp, 10);
        assert_eq!(outcome.damage, 0);
        assert_eq!(outcome.counter_damage, Some(0));
    }

    #[test]
    fn works_through_actor_state() {
        use crate::state::{EntityId, Position};

        let mut player = ActorState::new(EntityId::PLAYER, "Hero", '@', Position::ORIGIN, 20, 5, 1.0);
        let mut rat = ActorState::new(EntityId(1), "Rat", 'R', Position::new(1, 0), 12, 3, 1.5);

        attack(&mut player, &mut rat);

        assert_eq!(rat.hitpoints, 7);
        assert_eq!(player.hitpoints, 17);
    }
}
