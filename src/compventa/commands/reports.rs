use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::FixtureSource;

pub fn run<S: FixtureSource>(source: &S) -> Result<CmdResult> {
    match source.financial_summary() {
        Ok(summary) => Ok(CmdResult::default().with_summary(summary)),
        Err(err) => Ok(CmdResult::load_failure("financial summary", &err)),
    }
}
