//! Rule switches.

/// Which assignment shapes count as writes to a parameter.
///
/// The defaults only flag plain `x = ...` assignments. Compound assignments
/// (`x += 1`) and increments/decrements (`x++`, `--x`) are opt-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuleOptions {
    pub check_compound_assignments: bool,
    pub check_update_expressions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PluginError {
    #[error(
        "plugin {plugin}: unknown argument `{argument}` (expected `compound`, `update` or `all`)"
    )]
    UnknownArgument {
        plugin: &'static str,
        argument: String,
    },
}

impl RuleOptions {
    /// Every write shape enabled.
    pub const fn all() -> Self {
        RuleOptions {
            check_compound_assignments: true,
            check_update_expressions: true,
        }
    }

    /// Layer plugin arguments on top of `self`.
    ///
    /// Arguments are `compound`, `update` and `all`; blank arguments are
    /// ignored. `plugin` names the plugin in error messages.
    pub fn with_plugin_args<S: AsRef<str>>(
        mut self,
        plugin: &'static str,
        args: &[S],
    ) -> Result<Self, PluginError> {
        for arg in args {
            match arg.as_ref().trim() {
                "" => {}
                "compound" => self.check_compound_assignments = true,
                "update" => self.check_update_expressions = true,
                "all" => self = RuleOptions::all(),
                other => {
                    return Err(PluginError::UnknownArgument {
                        plugin,
                        argument: other.to_string(),
                    });
                }
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod tests;
