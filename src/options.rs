//! Game configuration options.

/// When the dealer keeps drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DealerRule {
    /// Draw until reaching 17, regardless of the player's total.
    #[default]
    Standard,
    /// Draw below 17 only while the player (under 21) is still ahead.
    ///
    /// The dealer stops as soon as it ties or beats the player, even below
    /// 17, and never draws against a player holding 21.
    StopWhenAhead,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_table::{DealerRule, GameOptions};
///
/// let options = GameOptions::default()
///     .with_dealer_rule(DealerRule::Standard)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Dealer drawing rule.
    pub dealer_rule: DealerRule,
    /// Whether dealer stands on soft 17. Only used by [`DealerRule::Standard`].
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_rule: DealerRule::Standard,
            stand_on_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets the dealer drawing rule.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{DealerRule, GameOptions};
    ///
    /// let options = GameOptions::default().with_dealer_rule(DealerRule::StopWhenAhead);
    /// assert_eq!(options.dealer_rule, DealerRule::StopWhenAhead);
    /// ```
    #[must_use]
    pub const fn with_dealer_rule(mut self, rule: DealerRule) -> Self {
        self.dealer_rule = rule;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}
