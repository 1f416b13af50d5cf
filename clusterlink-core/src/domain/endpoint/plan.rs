// clusterlink-core/src/domain/endpoint/plan.rs

use super::document::{EndpointDocument, EndpointTarget};
use serde::{Deserialize, Serialize};

/// What to do with the active file when the candidate is identical to it.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Always promote the candidate, even when nothing changed (refreshes the mtime).
    #[default]
    Always,
    /// Leave an identical active file alone.
    SkipUnchanged,
}

/// Outcome of retargeting a baseline against the currently active document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPlan {
    pub candidate: EndpointDocument,
    /// `true` when the candidate differs byte-for-byte from the active document
    /// (a missing active document always counts as a change).
    pub changed: bool,
    pub replacements: usize,
}

impl ConfigPlan {
    pub fn new(
        baseline: &EndpointDocument,
        active: Option<&EndpointDocument>,
        placeholder: &str,
        target: &EndpointTarget,
    ) -> Self {
        let candidate = baseline.retarget(placeholder, target);
        let changed = match active {
            Some(current) => current.as_bytes() != candidate.as_bytes(),
            None => true,
        };

        Self {
            candidate,
            changed,
            replacements: baseline.occurrences(placeholder),
        }
    }

    pub fn should_promote(&self, mode: WriteMode) -> bool {
        match mode {
            WriteMode::Always => true,
            WriteMode::SkipUnchanged => self.changed,
        }
    }

    /// A running kernel only picks up the new endpoint after a restart.
    pub fn restart_required(&self) -> bool {
        self.changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn baseline() -> EndpointDocument {
        EndpointDocument::new("{\"url\": \"http://localhost:8998\"}")
    }

    #[test]
    fn test_plan_without_active_is_a_change() -> Result<()> {
        let target = EndpointTarget::new("ip-172-31-58-190.ec2.internal")?;
        let plan = ConfigPlan::new(&baseline(), None, "localhost", &target);

        assert!(plan.changed);
        assert!(plan.restart_required());
        assert_eq!(plan.replacements, 1);
        assert_eq!(
            plan.candidate.as_bytes(),
            b"{\"url\": \"http://ip-172-31-58-190.ec2.internal:8998\"}"
        );
        Ok(())
    }

    #[test]
    fn test_plan_matching_active_is_not_a_change() -> Result<()> {
        let target = EndpointTarget::new("10.0.0.12")?;
        let active = EndpointDocument::new("{\"url\": \"http://10.0.0.12:8998\"}");

        let plan = ConfigPlan::new(&baseline(), Some(&active), "localhost", &target);

        assert!(!plan.changed);
        assert!(!plan.restart_required());
        Ok(())
    }

    #[test]
    fn test_plan_detects_new_target() -> Result<()> {
        let target = EndpointTarget::new("10.0.0.99")?;
        let active = EndpointDocument::new("{\"url\": \"http://10.0.0.12:8998\"}");

        let plan = ConfigPlan::new(&baseline(), Some(&active), "localhost", &target);

        assert!(plan.changed);
        Ok(())
    }

    #[test]
    fn test_write_mode_promotion() -> Result<()> {
        let target = EndpointTarget::new("10.0.0.12")?;
        let active = EndpointDocument::new("{\"url\": \"http://10.0.0.12:8998\"}");
        let unchanged = ConfigPlan::new(&baseline(), Some(&active), "localhost", &target);
        let changed = ConfigPlan::new(&baseline(), None, "localhost", &target);

        assert!(unchanged.should_promote(WriteMode::Always));
        assert!(!unchanged.should_promote(WriteMode::SkipUnchanged));
        assert!(changed.should_promote(WriteMode::SkipUnchanged));
        Ok(())
    }
}
