use crate::BcfResult;

/// Persists GUIDs allocated during an export back onto their issues.
pub trait GuidStore {
    fn persist(&self, issue_id: i64, guid: &str) -> BcfResult<()>;
}
