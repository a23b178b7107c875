//! Achievement progress.
//!
//! Progress only goes up and is capped at the target. Reaching the target
//! unlocks the achievement exactly once.

extern crate alloc;

use alloc::vec::Vec;

/// Known achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AchievementId {
    /// Win a hand.
    FirstWin,
    /// Stage a large bet.
    HighRoller,
    /// Win three rounds in a row.
    WinningStreak,
    /// Get five blackjacks.
    BlackjackMaster,
}

impl AchievementId {
    /// Stable string id.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstWin => "first_win",
            Self::HighRoller => "high_roller",
            Self::WinningStreak => "winning_streak",
            Self::BlackjackMaster => "blackjack_master",
        }
    }
}

/// A single achievement and its progress.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Achievement {
    /// Identifier.
    pub id: AchievementId,
    /// Display name.
    pub name: &'static str,
    /// What has to be done.
    pub description: &'static str,
    /// Current progress, never above `target`.
    pub progress: u32,
    /// Progress needed to unlock.
    pub target: u32,
    /// Whether the achievement has been unlocked.
    pub unlocked: bool,
}

impl Achievement {
    const fn new(
        id: AchievementId,
        name: &'static str,
        description: &'static str,
        target: u32,
    ) -> Self {
        Self {
            id,
            name,
            description,
            progress: 0,
            target,
            unlocked: false,
        }
    }
}

/// The session's achievement list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementTracker {
    achievements: Vec<Achievement>,
}

impl Default for AchievementTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementTracker {
    /// Creates the standard catalogue with no progress.
    #[must_use]
    pub fn new() -> Self {
        Self {
            achievements: alloc::vec![
                Achievement::new(
                    AchievementId::FirstWin,
                    "Beginner's Luck",
                    "Win your first hand",
                    1,
                ),
                Achievement::new(
                    AchievementId::HighRoller,
                    "High Roller",
                    "Place a bet of 500 or more",
                    1,
                ),
                Achievement::new(
                    AchievementId::WinningStreak,
                    "Hot Streak",
                    "Win 3 hands in a row",
                    3,
                ),
                Achievement::new(
                    AchievementId::BlackjackMaster,
                    "Blackjack Master",
                    "Get 5 blackjacks",
                    5,
                ),
            ],
        }
    }

    /// All achievements in catalogue order.
    #[must_use]
    pub fn list(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Looks up one achievement.
    #[must_use]
    pub fn get(&self, id: AchievementId) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// Adds `amount` to the progress.
    ///
    /// Returns the achievement if this call unlocked it.
    pub fn advance(&mut self, id: AchievementId, amount: u32) -> Option<&Achievement> {
        let current = self.get(id)?.progress;
        self.raise_to(id, current.saturating_add(amount))
    }

    /// Raises the progress to at least `value`, for counters the caller owns
    /// (such as a win streak). Lower values are ignored.
    ///
    /// Returns the achievement if this call unlocked it.
    pub fn raise_to(&mut self, id: AchievementId, value: u32) -> Option<&Achievement> {
        let achievement = self.achievements.iter_mut().find(|a| a.id == id)?;
        if achievement.unlocked {
            return None;
        }

        achievement.progress = achievement.progress.max(value.min(achievement.target));
        if achievement.progress >= achievement.target {
            achievement.unlocked = true;
            return Some(&*achievement);
        }
        None
    }
}
