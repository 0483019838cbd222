use crate::commands::{CmdMessage, CmdResult};
use crate::context::SessionContext;
use crate::error::Result;

pub fn list(ctx: &SessionContext) -> Result<CmdResult> {
    Ok(CmdResult::default().with_branches(ctx.branches.names().to_vec()))
}

/// Add a branch to the session registry. Duplicates are reported, not
/// errors; empty names are validation failures.
pub fn add(ctx: &mut SessionContext, name: &str) -> Result<CmdResult> {
    let added = ctx.branches.add(name)?;
    let trimmed = name.trim();
    let message = if added {
        CmdMessage::success(format!("Branch \"{}\" added.", trimmed))
    } else {
        CmdMessage::info(format!("Branch \"{}\" already exists.", trimmed))
    };
    Ok(CmdResult::default()
        .with_branches(ctx.branches.names().to_vec())
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompventaError;

    #[test]
    fn lists_the_registry() {
        let ctx = SessionContext::default();
        let result = list(&ctx).unwrap();
        assert_eq!(result.branches, vec!["Central", "North", "South"]);
    }

    #[test]
    fn add_updates_the_registry() {
        let mut ctx = SessionContext::default();
        let result = add(&mut ctx, " East ").unwrap();
        assert_eq!(result.branches, vec!["Central", "East", "North", "South"]);
    }

    #[test]
    fn duplicate_add_is_reported_not_failed() {
        let mut ctx = SessionContext::default();
        let result = add(&mut ctx, "central").unwrap();
        assert_eq!(result.branches.len(), 3);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn empty_name_is_a_validation_error() {
        let mut ctx = SessionContext::default();
        let err = add(&mut ctx, "  ").unwrap_err();
        assert!(matches!(err, CompventaError::Validation(_)));
    }
}
