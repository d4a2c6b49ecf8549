pub mod creator;
pub mod header;
pub mod normalizer;
pub mod scaffold;
pub mod synchronizer;

#[cfg(test)]
pub(crate) mod mock_storage;

pub use crate::domain::model::{
    DeclarationLine, ModuleIdentifier, ModuleKind, ModuleRequest, NormalizedName, ScaffoldPlan,
    ScaffoldReport, SyncOutcome,
};
pub use crate::domain::ports::{ConfigProvider, Editor, Storage};
pub use crate::utils::error::Result;
