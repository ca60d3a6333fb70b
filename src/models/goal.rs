//! Savings and purchase goals

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings/purchase target tracked as current vs. target amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetGoal {
    pub id: GoalId,
    pub name: String,
    pub current: Money,
    pub target: Money,

    /// round(current / target * 100)
    pub percentage: i64,

    /// Free-text date label, e.g. "Mar 2026"
    #[serde(default)]
    pub deadline: String,

    #[serde(default)]
    pub color: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
}

impl BudgetGoal {
    /// Materialize a goal from its draft, assigning the id
    pub fn from_draft(id: GoalId, draft: NewGoal) -> Self {
        Self {
            id,
            percentage: draft.current.percent_of(draft.target),
            name: draft.name,
            current: draft.current,
            target: draft.target,
            deadline: draft.deadline,
            color: draft.color,
            icon: draft.icon,
        }
    }

    /// Replace both amounts and refresh the percentage
    pub fn set_progress(&mut self, current: Money, target: Money) {
        self.current = current;
        self.target = target;
        self.percentage = current.percent_of(target);
    }

    /// Amount still needed to reach the target
    pub fn shortfall(&self) -> Money {
        if self.current >= self.target {
            Money::zero()
        } else {
            self.target - self.current
        }
    }

    pub fn is_reached(&self) -> bool {
        self.current >= self.target
    }
}

impl fmt::Display for BudgetGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A goal as entered by the user, before an id and percentage are assigned
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewGoal {
    pub name: String,
    pub current: Money,
    pub target: Money,
    pub deadline: String,
    pub color: String,
    pub icon: String,
}

impl NewGoal {
    pub fn new(name: impl Into<String>, current: Money, target: Money) -> Self {
        Self {
            name: name.into(),
            current,
            target,
            ..Default::default()
        }
    }

    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = deadline.into();
        self
    }

    pub fn styled(mut self, color: impl Into<String>, icon: impl Into<String>) -> Self {
        self.color = color.into();
        self.icon = icon.into();
        self
    }
}
