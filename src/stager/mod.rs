pub mod archive;
pub mod workspace;

pub use archive::{ArchiveStager, StageProgress, StageSummary};
pub use workspace::OutputWorkspace;
