/// What happened during a single attack exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    /// Damage dealt by the attacker.
    pub damage: i32,
    /// Damage dealt back by the defender, if it survived to strike.
    pub counter_damage: Option<i32>,
    /// Defender hitpoints reached zero or below.
    pub defender_died: bool,
    /// Attacker hitpoints reached zero or below from the counter strike.
    pub attacker_died: bool,
}
