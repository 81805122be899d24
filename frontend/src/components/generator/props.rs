//! Defines the properties for the `GeneratorComponent`.

use yew::prelude::*;

use crate::services::ServiceHandle;

/// Properties for the `GeneratorComponent`.
///
/// The service handle is the component's only collaborator: generation and
/// name suggestions go through it, so the parent decides whether the tab
/// talks to the simulated service or a real backend.
#[derive(Properties, PartialEq, Clone)]
pub struct GeneratorProps {
    pub service: ServiceHandle,
}
