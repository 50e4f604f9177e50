//! Static player value lookup.

use crate::data::DataSnapshot;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct ValueLookup<'a> {
    snapshot: &'a DataSnapshot,
}

impl<'a> ValueLookup<'a> {
    pub fn new(snapshot: &'a DataSnapshot) -> Self {
        Self { snapshot }
    }

    /// Describe a player's trade value and overall rank.
    ///
    /// Players without an external id or a valuation row come back as
    /// `"<name> not found"`.
    pub fn get_value(&self, player_name: &str) -> String {
        let name = self.snapshot.directory().resolve(player_name);

        let Some(id) = self.snapshot.directory().external_id(&name) else {
            debug!(player = %name, "no external id");
            return format!("{} not found", name);
        };
        let Some(valuation) = self.snapshot.valuation(id) else {
            debug!(player = %name, %id, "no valuation row");
            return format!("{} not found", name);
        };

        format!(
            "The value of {} is {} which is ranked {} at their position.",
            name, valuation.value, valuation.overall_rank
        )
    }
}
