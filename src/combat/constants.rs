//! Combat constants - the fixed numbers of the attack rule

/// Faces on a standard battle die
pub const DEFAULT_DICE_SIDES: u8 = 6;

/// Troops an attacker loses when the defender holds
pub const REPULSE_LOSS: u32 = 1;

/// On conquest the attacker's pre-battle troops are split evenly (floor)
/// between the attacking and the conquered territory
pub const CONQUEST_SPLIT: u32 = 2;
