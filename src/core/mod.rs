pub mod engine;
pub mod entities;
pub mod intent_index;
pub mod lg;
pub mod lu;
pub mod sections;
pub mod template;
pub mod writer;

pub use crate::domain::model::{Content, Intent, Message, Project};
pub use crate::domain::ports::{
    ConfigProvider, EntityWrapper, IntentIndexer, ProjectSource, SourceSettings, Storage,
};
pub use crate::utils::error::Result;
