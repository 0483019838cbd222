use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserRole;
use crate::store::{FixtureSource, RecordStore};

/// List system users. The navigation layer already hides this view from
/// non-admins; the command checks again so direct API consumers get the same
/// polite refusal the page renders.
pub fn run<S: FixtureSource>(source: &S, role: UserRole) -> Result<CmdResult> {
    if role != UserRole::Admin {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(
            "Access denied: user management requires the Admin role.",
        )));
    }

    let mut store = RecordStore::new();
    if let Err(err) = store.resolve(source.users()) {
        return Ok(CmdResult::load_failure("users", &err));
    }

    let mut result = CmdResult::default().with_users(store.records().to_vec());
    if result.users.is_empty() {
        result.add_message(CmdMessage::info("No users registered."));
    }
    Ok(result)
}
