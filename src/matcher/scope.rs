use crate::api::Command;
use crate::model::Scope;

/// Whether an option with `scope` is in play when `active` is the invoked sub-command (`None` for root).
pub(crate) fn is_relevant(scope: Scope, commands: &[Command], active: Option<&str>) -> bool {
    match scope {
        Scope::Global => true,
        Scope::Root => active.is_none(),
        Scope::Subcommand(index) => match (commands.get(index), active) {
            (Some(command), Some(active)) => command.name() == active,
            _ => false,
        },
    }
}

/// Find the sub-command invoked by `args[1]`, if any.
/// The first command (in table order) with an equal name wins.
pub(crate) fn resolve_subcommand(commands: &[Command], args: &[&str]) -> Option<usize> {
    let candidate = args.get(1)?;
    commands
        .iter()
        .position(|command| command.name() == *candidate)
}
