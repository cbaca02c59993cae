//! Territory registry - the fixed-size, ordered list of every territory
//!
//! The registry is sized once at startup and never grows or shrinks.
//! Slots are 0-based here; the console speaks 1-based indices and converts
//! through [`Registry::resolve_index`].

use ahash::AHashMap;

use crate::combat::{resolve_attack, validate_attack, AttackRejection, BattleReport, BattleRolls};
use crate::core::error::{Result, WarError};
use crate::core::types::Faction;
use crate::map::territory::Territory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    territories: Vec<Territory>,
}

impl Registry {
    /// Reserve exactly `n` empty territory slots
    pub fn create(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(WarError::InvalidInput(
                "the map needs at least one territory".into(),
            ));
        }

        let mut territories = Vec::new();
        territories
            .try_reserve_exact(n)
            .map_err(|_| WarError::Allocation(n))?;
        territories.resize_with(n, Territory::default);

        tracing::debug!("Created registry with {} slots", n);
        Ok(Self { territories })
    }

    /// Build a registry directly from finished territories
    pub fn from_territories(territories: Vec<Territory>) -> Result<Self> {
        if territories.is_empty() {
            return Err(WarError::InvalidInput(
                "the map needs at least one territory".into(),
            ));
        }
        Ok(Self { territories })
    }

    /// Fill slot `index` (0-based)
    ///
    /// Input from the console goes through [`parse_name`] and
    /// [`parse_faction`] first.
    ///
    /// [`parse_name`]: crate::map::territory::parse_name
    /// [`parse_faction`]: crate::map::territory::parse_faction
    pub fn register(&mut self, index: usize, territory: Territory) -> Result<()> {
        let len = self.territories.len();
        let slot = self
            .territories
            .get_mut(index)
            .ok_or(WarError::InvalidIndex { index: index + 1, len })?;

        *slot = territory;
        tracing::debug!(
            "Registered territory {}: {} ({}, {} troops)",
            index + 1,
            slot.name,
            slot.faction,
            slot.troops
        );
        Ok(())
    }

    /// Read-only, ordered view of every territory
    pub fn list(&self) -> &[Territory] {
        &self.territories
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    /// Translate a 1-based index from the console into a slot
    pub fn resolve_index(&self, one_based: usize) -> Result<usize> {
        if one_based == 0 || one_based > self.territories.len() {
            return Err(WarError::InvalidIndex {
                index: one_based,
                len: self.territories.len(),
            });
        }
        Ok(one_based - 1)
    }

    /// Borrow two distinct slots mutably at once
    fn pair_mut(&mut self, a: usize, b: usize) -> Result<(&mut Territory, &mut Territory)> {
        let len = self.territories.len();
        for index in [a, b] {
            if index >= len {
                return Err(WarError::InvalidIndex { index: index + 1, len });
            }
        }
        if a == b {
            return Err(AttackRejection::SelfAttack.into());
        }

        if a < b {
            let (left, right) = self.territories.split_at_mut(b);
            Ok((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(a);
            Ok((&mut right[0], &mut left[b]))
        }
    }

    /// Check an attack between two slots (0-based) without rolling
    pub fn check_attack(&self, attacker: usize, defender: usize) -> Result<()> {
        let len = self.territories.len();
        let from = self
            .territories
            .get(attacker)
            .ok_or(WarError::InvalidIndex { index: attacker + 1, len })?;
        let to = self
            .territories
            .get(defender)
            .ok_or(WarError::InvalidIndex { index: defender + 1, len })?;
        if attacker == defender {
            return Err(AttackRejection::SelfAttack.into());
        }
        validate_attack(from, to)?;
        Ok(())
    }

    /// Resolve an attack between two slots (0-based) with the given dice
    pub fn attack(
        &mut self,
        attacker: usize,
        defender: usize,
        rolls: BattleRolls,
    ) -> Result<BattleReport> {
        let (from, to) = self.pair_mut(attacker, defender)?;
        Ok(resolve_attack(from, to, rolls)?)
    }

    /// Number of territories each faction currently holds
    pub fn faction_counts(&self) -> AHashMap<Faction, usize> {
        let mut counts = AHashMap::new();
        for territory in &self.territories {
            *counts.entry(territory.faction.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Total troops across the map
    pub fn total_troops(&self) -> u64 {
        self.territories.iter().map(|t| u64::from(t.troops)).sum()
    }
}
