//! Typed ID definitions for scheduler resources.

use crate::define_id;

define_id!(
    /// A submitted job. Owns its tasks and its constraint declarations.
    JobId,
    "job"
);

define_id!(
    /// One task spawned by a job; the unit that gets placed on an agent.
    TaskId,
    "task"
);

define_id!(
    /// A compute agent (host) that tasks are placed on.
    AgentId,
    "agent"
);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_job_id_roundtrip() {
        let id = JobId::new();
        let parsed: JobId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_task_id_prefix() {
        assert!(TaskId::new().to_string().starts_with("task_"));
    }

    #[test]
    fn test_agent_id_rejects_task_prefix() {
        let err = AgentId::parse("task_01HV4Z2WQXKJNM8GPQY6VBKC3D").unwrap_err();
        assert!(err.is_prefix_error());
    }

    #[test]
    fn test_missing_separator() {
        let result: Result<JobId, _> = "job01HV4Z2WQXKJNM8GPQY6VBKC3D".parse();
        assert_eq!(result.unwrap_err(), crate::IdError::MissingSeparator);
    }

    #[test]
    fn test_empty() {
        assert_eq!(TaskId::parse("").unwrap_err(), crate::IdError::Empty);
    }

    #[test]
    fn test_invalid_ulid() {
        assert!(matches!(
            JobId::parse("job_not-a-ulid").unwrap_err(),
            crate::IdError::InvalidUlid(_)
        ));
    }

    #[test]
    fn test_json_is_plain_string() {
        let id: AgentId = "agent_01HV4Z4NYPKTRS0JTMA8XDME5F".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"agent_01HV4Z4NYPKTRS0JTMA8XDME5F\"");
        let back: AgentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_prefixes_unique() {
        let prefixes = [JobId::PREFIX, TaskId::PREFIX, AgentId::PREFIX];
        let unique: std::collections::HashSet<_> = prefixes.iter().collect();
        assert_eq!(prefixes.len(), unique.len());
    }

    proptest! {
        #[test]
        fn prop_parse_display_agree(raw in any::<u128>()) {
            let id = TaskId::from_ulid(crate::Ulid(raw));
            prop_assert_eq!(TaskId::parse(&id.to_string()).unwrap(), id);
        }
    }
}
