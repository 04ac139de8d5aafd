use crate::{Executable, SvcError};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Resolved options for a wrapped service. A configuration is always built
/// with sensible default values and is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into), build_fn(skip))]
pub struct ServiceConfig {
    /// Friendly name for the service, ultimately used when creating the
    /// service definition. Defaults to the name of the first executable.
    pub name: String,
    /// Description used when building the service definition file during
    /// installation.
    pub description: String,
    /// The executables wrapped by the service, in the order supplied.
    #[builder(setter(custom))]
    pub executables: Vec<Executable>,
}

impl ServiceConfig {
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }
}

impl ServiceConfigBuilder {
    /// Defines any number of executables that will be wrapped by the service.
    /// Each entry is a raw invocation string carrying its own arguments, e.g.
    ///
    /// ```text
    /// path/to/executable --arg1 --arg2=value
    /// ```
    ///
    /// Blank entries are skipped. If no executable survives parsing, one is
    /// resolved from the currently running binary at build time, ultimately
    /// identifying where the service was constructed. If that behaviour is not
    /// desirable, then setting this option is paramount.
    pub fn executables<S: ToString, I: IntoIterator<Item = S>>(&mut self, paths: I) -> &mut Self {
        let execs = paths
            .into_iter()
            .filter_map(|path| Executable::parse(&path.to_string()))
            .collect();
        self.executables = Some(execs);
        self
    }

    /// Resolves the configuration, applying defaults for any field left unset.
    /// A field set to a blank string is treated as unset.
    pub fn build(&self) -> Result<ServiceConfig, SvcError> {
        let mut executables = self.executables.clone().unwrap_or_default();
        if executables.is_empty() {
            executables.push(Executable::current()?);
        }

        let name = match resolved(&self.name) {
            Some(name) => name,
            None => executables[0].exec.clone(),
        };

        let description = match resolved(&self.description) {
            Some(description) => description,
            None => format!("Process {name} wrapped using the tiny svc library by Purple Clay"),
        };

        Ok(ServiceConfig {
            name,
            description,
            executables,
        })
    }
}

fn resolved(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
